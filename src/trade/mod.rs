//! Client-side core of the trading interface: an explicit state object plus
//! a reducer over user actions. UI shells own rendering and the wallet
//! login flow; everything they read or mutate lives here.

pub mod client;
pub mod controller;
pub mod format;
pub mod session;
pub mod state;

pub use client::ProxyClient;
pub use controller::{BalanceSource, TradeController};
pub use format::format_balance;
pub use session::{AuthProvider, ScriptedWallet};
pub use state::{Action, Dropdown, Effect, FetchStatus, RawBalances, TradeState};
