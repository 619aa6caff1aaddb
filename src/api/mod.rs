pub mod alerts;
pub mod balances;
pub mod catalog;
pub mod health;

use crate::config::Config;

/// Shared handler state. The service is stateless by contract; config is
/// the only thing requests need.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
