use std::collections::HashMap;

use crate::constants::{
    ALERT_WEBHOOK_URL, DEFAULT_ALERT_MESSAGE, FALLBACK_BALANCES, TRACKED_TOKENS,
};
use crate::models::{Chain, ExpiryTime, TrackedToken};

use super::format::format_balance;

/// Selector menus in the interface; at most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dropdown {
    Chain,
    PayToken,
    ReceiveToken,
    Expiry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Raw proxy response: lowercase contract address (or the native sentinel)
/// to an integer balance string in the token's smallest unit.
pub type RawBalances = HashMap<String, String>;

/// One variant per user gesture plus the wallet and fetch lifecycle events.
#[derive(Debug, Clone)]
pub enum Action {
    // Wallet lifecycle, driven by the auth provider
    Connected { address: String },
    Disconnected,

    // Selectors
    ChainSelected(Chain),
    PayTokenSelected(TrackedToken),
    ReceiveTokenSelected(TrackedToken),
    ExpirySelected(ExpiryTime),

    // Form fields
    PayAmountChanged(String),
    ReceiveAmountChanged(String),
    AlertNameChanged(String),
    AlertMessageChanged(String),

    // Shortcuts
    FlipTokens,
    SetHalf,
    SetMax,

    // Dropdowns
    ToggleDropdown(Dropdown),
    CloseDropdowns,

    // Fetch resolution
    BalancesLoaded {
        seq: u64,
        outcome: std::result::Result<RawBalances, String>,
    },
}

/// Side effect the reducer asks its shell to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchBalances {
        seq: u64,
        chain_id: u64,
        address: String,
    },
}

/// Full state of the trading interface. Mutated only through `update`.
#[derive(Debug, Clone)]
pub struct TradeState {
    pub chain: Chain,
    pub pay_token: TrackedToken,
    pub receive_token: TrackedToken,
    pub pay_amount: String,
    pub receive_amount: String,
    pub expiry: ExpiryTime,

    pub alert_name: String,
    pub alert_message: String,
    /// Shown read-only; no action mutates it.
    pub webhook_url: String,

    pub open_dropdown: Option<Dropdown>,

    pub wallet: Option<String>,
    /// Token symbol to human-scaled quantity. Replaced wholesale on every
    /// successful fetch, never merged.
    pub balances: HashMap<String, f64>,
    pub fetch: FetchStatus,

    fallback_on_error: bool,
    request_seq: u64,
}

impl Default for TradeState {
    fn default() -> Self {
        Self::new(true)
    }
}

impl TradeState {
    pub fn new(fallback_on_error: bool) -> Self {
        Self {
            chain: Chain::default(),
            pay_token: TRACKED_TOKENS[0],
            receive_token: TRACKED_TOKENS[1],
            pay_amount: "1000".to_string(),
            receive_amount: "0.00844425".to_string(),
            expiry: ExpiryTime::default(),
            alert_name: String::new(),
            alert_message: DEFAULT_ALERT_MESSAGE.to_string(),
            webhook_url: ALERT_WEBHOOK_URL.to_string(),
            open_dropdown: None,
            wallet: None,
            balances: HashMap::new(),
            fetch: FetchStatus::Idle,
            fallback_on_error,
            request_seq: 0,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.wallet.is_some()
    }

    /// Stored balance of the selected pay token; zero when unknown.
    pub fn pay_balance(&self) -> f64 {
        self.balances
            .get(self.pay_token.symbol)
            .copied()
            .unwrap_or(0.0)
    }

    pub fn display_balance(&self, symbol: &str) -> String {
        format_balance(self.balances.get(symbol).copied().unwrap_or(0.0))
    }

    // Half/Max stay inert while logged out, while a fetch is in flight, or
    // when there is nothing to spend.
    fn amount_shortcuts_enabled(&self) -> bool {
        self.is_authenticated() && self.fetch != FetchStatus::Loading && self.pay_balance() > 0.0
    }

    fn issue_fetch(&mut self) -> Option<Effect> {
        let address = self.wallet.clone()?;
        self.request_seq += 1;
        self.fetch = FetchStatus::Loading;
        Some(Effect::FetchBalances {
            seq: self.request_seq,
            chain_id: self.chain.id(),
            address,
        })
    }

    /// Applies one action and returns the effect it demands, if any.
    pub fn update(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Connected { address } => {
                self.wallet = Some(address);
                self.issue_fetch()
            }
            Action::Disconnected => {
                self.wallet = None;
                self.balances.clear();
                self.fetch = FetchStatus::Idle;
                // Anything still in flight dies on arrival.
                self.request_seq += 1;
                None
            }
            Action::ChainSelected(chain) => {
                self.chain = chain;
                self.open_dropdown = None;
                if self.is_authenticated() {
                    self.issue_fetch()
                } else {
                    None
                }
            }
            Action::PayTokenSelected(token) => {
                self.pay_token = token;
                self.open_dropdown = None;
                None
            }
            Action::ReceiveTokenSelected(token) => {
                self.receive_token = token;
                self.open_dropdown = None;
                None
            }
            Action::ExpirySelected(expiry) => {
                self.expiry = expiry;
                self.open_dropdown = None;
                None
            }
            Action::PayAmountChanged(value) => {
                self.pay_amount = value;
                None
            }
            Action::ReceiveAmountChanged(value) => {
                self.receive_amount = value;
                None
            }
            Action::AlertNameChanged(value) => {
                self.alert_name = value;
                None
            }
            Action::AlertMessageChanged(value) => {
                self.alert_message = value;
                None
            }
            Action::FlipTokens => {
                std::mem::swap(&mut self.pay_token, &mut self.receive_token);
                std::mem::swap(&mut self.pay_amount, &mut self.receive_amount);
                None
            }
            Action::SetHalf => {
                if self.amount_shortcuts_enabled() {
                    self.pay_amount = format_balance(self.pay_balance() / 2.0);
                }
                None
            }
            Action::SetMax => {
                if self.amount_shortcuts_enabled() {
                    self.pay_amount = format_balance(self.pay_balance());
                }
                None
            }
            Action::ToggleDropdown(which) => {
                self.open_dropdown = if self.open_dropdown == Some(which) {
                    None
                } else {
                    Some(which)
                };
                None
            }
            Action::CloseDropdowns => {
                self.open_dropdown = None;
                None
            }
            Action::BalancesLoaded { seq, outcome } => {
                if seq != self.request_seq {
                    tracing::debug!(
                        "discarding stale balance response seq={} current={}",
                        seq,
                        self.request_seq
                    );
                    return None;
                }
                match outcome {
                    Ok(raw) => {
                        self.balances = decode_balances(&raw);
                        self.fetch = FetchStatus::Loaded;
                    }
                    Err(err) => {
                        tracing::warn!("balance fetch failed: {}", err);
                        self.fetch = FetchStatus::Errored;
                        self.balances = if self.fallback_on_error {
                            fallback_balances()
                        } else {
                            HashMap::new()
                        };
                    }
                }
                None
            }
        }
    }
}

/// Scales each tracked token's raw integer balance into a human quantity
/// keyed by symbol. Tokens absent from the response, and entries that do
/// not parse, read as zero.
pub fn decode_balances(raw: &RawBalances) -> HashMap<String, f64> {
    let mut table = HashMap::with_capacity(TRACKED_TOKENS.len());
    for token in TRACKED_TOKENS.iter() {
        let amount = raw
            .iter()
            .find(|(address, _)| address.eq_ignore_ascii_case(token.address))
            .and_then(|(_, value)| value.trim().parse::<u128>().ok())
            .map(|units| scale_units(units, token.decimals))
            .unwrap_or(0.0);
        table.insert(token.symbol.to_string(), amount);
    }
    table
}

/// Demo table shown instead of an error state when fallback is enabled.
pub fn fallback_balances() -> HashMap<String, f64> {
    FALLBACK_BALANCES
        .iter()
        .map(|(symbol, amount)| (symbol.to_string(), *amount))
        .collect()
}

fn scale_units(units: u128, decimals: u32) -> f64 {
    (units as f64) / 10_f64.powi(decimals as i32)
}
