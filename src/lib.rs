//! listing-probe: a black-box functional test suite for a remote
//! item-listing HTTP service.
//!
//! The service exposes four operations (create an item, read an item, read an
//! item's statistics, list a seller's items). This crate wraps them in a thin
//! HTTP adapter and runs a catalogue of scenarios that assert on the status
//! codes and JSON shapes the service returns.
//!
//! ### Modules
//!
//! - `client`: HTTP adapter returning raw responses
//! - `config`: layered configuration (defaults, TOML file, CLI/env)
//! - `errors`: error types for the adapter, the helpers and the scenarios
//! - `ids`: UUID extraction and perturbation
//! - `models`: JSON key constants and typed wire records
//! - `scenarios`: the scenario catalogue and its runner
//! - `timestamps`: parsing of the service's `createdAt` strings
//!
//! ### Remote API
//!
//! - `POST /api/1/item`: create an item
//! - `GET /api/1/item/{id}`: list of records matching an item id
//! - `GET /api/1/item/statistics/{id}`: statistics for an item
//! - `GET /api/1/{sellerID}/item`: all items of a seller

/// HTTP adapter for the listing service
pub mod client;

/// Configuration management
pub mod config;

/// Error types
pub mod errors;

/// UUID helpers
pub mod ids;

/// Wire model of the listing service
pub mod models;

/// Scenario catalogue and runner
pub mod scenarios;

/// Timestamp parsing
pub mod timestamps;

#[cfg(test)]
pub mod test_utils;

pub use client::{ApiResponse, ItemApi};
pub use config::Config;
pub use errors::{ClientError, ConfigError, ScenarioError, TimestampError, UnknownScenario};
pub use ids::{extract_uuid, next_uuid};
pub use scenarios::{
    Outcome, Scenario, ScenarioReport, ScenarioRunner, ScenarioStatus, Selection, Summary,
};
pub use timestamps::parse_created_at;
