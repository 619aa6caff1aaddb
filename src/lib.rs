//! Yeti trading backend and trade-state core.
//!
//! Two halves share this crate: the HTTP service that fronts the 1inch
//! balance API for the browser (`api`, `integrations`), and the trading
//! interface state machine a UI shell embeds (`trade`).

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod integrations;
pub mod models;
pub mod trade;

pub use config::Config;
pub use error::{AppError, Result};
