//! Command-line surface of the headless renderer.
//!
//! The renderer drives one screen store against the HTTP API and prints
//! every state snapshot as a JSON line, which makes the screens scriptable
//! without a UI.

use std::fmt::Debug;
use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::error::ServiceError;
use crate::mvi::{Reactor, SideChannel, Store};
use crate::shutdown::ShutdownHandle;

#[derive(Debug, Parser)]
#[command(name = "pocket", version, about = "Headless renderer for street food store screens")]
pub struct Cli {
    /// Config file (default: the user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter such as "pocket=debug"; overrides the config file
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List stores around a position
    Nearby {
        /// Latitude of the search center
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude of the search center
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,

        /// Search radius in meters
        #[arg(long)]
        distance: Option<u32>,
    },
    /// Show the profile, recent visits and bookmarks
    MyPage,
    /// Show one food truck
    Truck {
        /// Food truck id
        id: String,
    },
}

/// Why rendering stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderExit {
    /// The screen reached its finished state or finishing event.
    Finished,
    /// An `error` event was raised.
    Failed(ServiceError),
    /// Stopped from outside (Ctrl-C) or the store went away.
    Interrupted,
}

/// When rendering is complete.
pub struct RenderUntil<S> {
    /// Stop after printing a state matching this.
    pub state: fn(&S) -> bool,
    /// Stop after an event on this channel.
    pub channel: Option<&'static str>,
}

/// Print states to `out` and events to `log` until the screen is done.
pub async fn render<R, O, L>(
    store: &Store<R>,
    shutdown: &ShutdownHandle,
    until: RenderUntil<R::State>,
    out: &mut O,
    log: &mut L,
) -> std::io::Result<RenderExit>
where
    R: Reactor,
    R::State: Serialize,
    R::Event: Debug,
    O: Write,
    L: Write,
{
    let mut states = store.observe_state();
    let mut events = store.observe_events();

    loop {
        tokio::select! {
            biased;
            _ = shutdown.wait() => return Ok(RenderExit::Interrupted),
            state = states.recv() => {
                let Some(state) = state else {
                    return Ok(RenderExit::Interrupted);
                };
                serde_json::to_writer(&mut *out, &state)?;
                writeln!(out)?;
                if (until.state)(&state) {
                    // Events raised by the same fold are already queued.
                    while let Some(event) = events.try_recv() {
                        if let Some(err) = log_event(log, &event)? {
                            return Ok(RenderExit::Failed(err));
                        }
                    }
                    return Ok(RenderExit::Finished);
                }
            }
            event = events.recv() => {
                let Some(event) = event else {
                    return Ok(RenderExit::Interrupted);
                };
                if let Some(err) = log_event(log, &event)? {
                    return Ok(RenderExit::Failed(err));
                }
                if until.channel == Some(event.channel()) {
                    return Ok(RenderExit::Finished);
                }
            }
        }
    }
}

/// Write one event line. Errors are shown the way a user would see them.
fn log_event<E, L>(log: &mut L, event: &E) -> std::io::Result<Option<ServiceError>>
where
    E: SideChannel + Debug,
    L: Write,
{
    match event.error() {
        Some(err) => {
            writeln!(log, "[{}] {}", event.channel(), err.user_message())?;
            Ok(Some(err.clone()))
        }
        None => {
            writeln!(log, "[{}] {:?}", event.channel(), event)?;
            Ok(None)
        }
    }
}
