//! HTTP implementation of the service traits against the vendor REST API.

mod client;
mod dto;

pub use client::ApiClient;
