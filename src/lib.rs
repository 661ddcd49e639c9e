//! Reactive screen state for a street food and food truck discovery client.
//!
//! Screens are built on [`mvi::Store`], a single-owner state container fed
//! by intents. Cross-screen notifications travel over [`bus::EventBus`];
//! the [`api`] module talks to the vendor REST API.

pub mod api;
pub mod bus;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod screens;
pub mod services;
pub mod shutdown;
