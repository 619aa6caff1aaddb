/// Application constants
use crate::models::TrackedToken;

// Reserved address the balance API uses for a chain's native coin.
pub const NATIVE_TOKEN_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

// Tokens offered by the trading interface. Contract addresses are the
// Ethereum mainnet deployments; the native coin carries the sentinel above.
pub static TRACKED_TOKENS: [TrackedToken; 4] = [
    TrackedToken {
        symbol: "USDC",
        name: "USD Coin",
        address: "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
        decimals: 6,
    },
    TrackedToken {
        symbol: "WBTC",
        name: "Wrapped BTC",
        address: "0x2260fac5e5542a773aa44fbcfedf7c193bc2c599",
        decimals: 8,
    },
    TrackedToken {
        symbol: "ETH",
        name: "Ethereum",
        address: NATIVE_TOKEN_ADDRESS,
        decimals: 18,
    },
    TrackedToken {
        symbol: "USDT",
        name: "Tether USD",
        address: "0xdac17f958d2ee523a2206206994597c13d831ec7",
        decimals: 6,
    },
];

// Demo balances substituted when a fetch fails and fallback is enabled.
pub static FALLBACK_BALANCES: [(&str, f64); 4] = [
    ("USDC", 1000.0),
    ("WBTC", 0.05),
    ("ETH", 2.5),
    ("USDT", 750.0),
];

// Fixed delivery target shown read-only in the alert panel.
pub const ALERT_WEBHOOK_URL: &str = "https://api.yeti.trade/webhook/alert";

// Message prefilled in the alert panel.
pub const DEFAULT_ALERT_MESSAGE: &str = "Yeti limit order triggered";

// API version
pub const API_VERSION: &str = "v1";
