use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use pocket::api::ApiClient;
use pocket::bus::EventBus;
use pocket::cli::{render, Cli, Command, RenderExit, RenderUntil};
use pocket::config::Config;
use pocket::logging::init_tracing;
use pocket::model::Location;
use pocket::mvi::{Store, StoreOptions};
use pocket::screens::food_truck_detail::{
    FoodTruckDetailIntent, FoodTruckDetailReactor, FoodTruckDetailState,
};
use pocket::screens::my_page::{MyPageIntent, MyPageReactor, MyPageState};
use pocket::screens::store_list::{StoreListIntent, StoreListReactor, StoreListState};
use pocket::services::FixedLocation;
use pocket::shutdown::ShutdownHandle;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;

    init_tracing(cli.log.as_deref().unwrap_or(&config.logging.filter));
    tracing::debug!(base_url = %config.api.base_url, "configuration loaded");

    let api = Arc::new(ApiClient::new(&config.api).context("Failed to build API client")?);
    let bus = EventBus::new(config.store.bus_capacity);
    let options = StoreOptions::from(&config.store);

    let shutdown = ShutdownHandle::new();
    let ctrl_c = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Ctrl-C received, stopping");
            ctrl_c.signal();
        }
    });

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr();

    let exit = match cli.command {
        Command::Nearby { lat, lng, distance } => {
            let center = match (lat, lng) {
                (Some(lat), Some(lng)) => Location::new(lat, lng),
                _ => config.location.to_location(),
            };
            anyhow::ensure!(
                center.is_valid(),
                "({}, {}) is not a valid coordinate",
                center.latitude,
                center.longitude
            );

            let reactor = StoreListReactor::new(
                Arc::new(FixedLocation(center)),
                api,
                bus,
                distance.unwrap_or(config.store.nearby_distance_m),
            );
            let store = Store::with_options(reactor, StoreListState::default(), options);
            store.dispatch(StoreListIntent::ViewLoaded);

            let until = RenderUntil {
                state: |state: &StoreListState| !state.is_loading && state.center.is_some(),
                channel: None,
            };
            render(&store, &shutdown, until, &mut stdout, &mut stderr).await?
        }
        Command::MyPage => {
            let reactor = MyPageReactor::new(
                api.clone(),
                api.clone(),
                api,
                bus,
                config.store.page_size,
            );
            let store = Store::with_options(reactor, MyPageState::default(), options);
            // Refresh rather than ViewLoaded: it ends with a signal to stop on.
            store.dispatch(MyPageIntent::Refresh);

            let until = RenderUntil {
                state: |_: &MyPageState| false,
                channel: Some("end_refresh"),
            };
            render(&store, &shutdown, until, &mut stdout, &mut stderr).await?
        }
        Command::Truck { id } => {
            let from = Arc::new(FixedLocation(config.location.to_location()));
            let reactor = FoodTruckDetailReactor::new(id, from, api, bus);
            let store = Store::with_options(reactor, FoodTruckDetailState::default(), options);
            store.dispatch(FoodTruckDetailIntent::ViewLoaded);

            let until = RenderUntil {
                state: |state: &FoodTruckDetailState| {
                    !state.is_loading && !state.store.id.is_empty()
                },
                channel: None,
            };
            render(&store, &shutdown, until, &mut stdout, &mut stderr).await?
        }
    };

    match exit {
        RenderExit::Finished => Ok(ExitCode::SUCCESS),
        RenderExit::Interrupted => Ok(ExitCode::from(130)),
        RenderExit::Failed(err) => {
            tracing::error!(
                error = %err,
                retryable = err.is_retryable(),
                "screen reported an error"
            );
            Ok(ExitCode::FAILURE)
        }
    }
}
