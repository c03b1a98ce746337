//! Turns a bare coordinate into a [`shared_types::SiteProfile`] by asking a
//! reverse geocoder and a weather service, degrading to sentinels on failure.

pub mod client;
pub mod config;
pub mod error;
pub mod services;

pub use client::EnrichmentClient;
pub use config::EnrichmentConfig;
pub use error::{ConfigError, LookupError};
