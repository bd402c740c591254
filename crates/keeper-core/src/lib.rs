//! Core domain + application logic for the forward keeper bot.
//!
//! This crate is intentionally framework-agnostic. The Telegram transport lives
//! behind the `RelayTransport` port implemented in the adapter crate.

pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod messaging;
pub mod provenance;
pub mod relay;
pub mod staging;

pub use errors::{Error, Result};
