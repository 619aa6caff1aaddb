use serde::{Deserialize, Serialize};

use crate::constants::{NATIVE_TOKEN_ADDRESS, TRACKED_TOKENS};

/// Token offered by the trading interface. The set is fixed at build time;
/// `symbol` is the display key everywhere balances are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrackedToken {
    pub symbol: &'static str,
    pub name: &'static str,
    pub address: &'static str,
    pub decimals: u32,
}

impl TrackedToken {
    pub fn by_symbol(symbol: &str) -> Option<TrackedToken> {
        TRACKED_TOKENS
            .iter()
            .find(|token| token.symbol.eq_ignore_ascii_case(symbol))
            .copied()
    }

    pub fn is_native(&self) -> bool {
        self.address == NATIVE_TOKEN_ADDRESS
    }
}

/// Chains selectable in the header. The numeric id is used only when
/// calling the balance proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    #[default]
    Ethereum,
    Arbitrum,
    Polygon,
    Optimism,
}

impl Chain {
    pub const ALL: [Chain; 4] = [
        Chain::Ethereum,
        Chain::Arbitrum,
        Chain::Polygon,
        Chain::Optimism,
    ];

    pub fn id(self) -> u64 {
        match self {
            Chain::Ethereum => 1,
            Chain::Arbitrum => 42161,
            Chain::Polygon => 137,
            Chain::Optimism => 10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Chain::Ethereum => "Ethereum",
            Chain::Arbitrum => "Arbitrum",
            Chain::Polygon => "Polygon",
            Chain::Optimism => "Optimism",
        }
    }
}

/// Expiry options for a limit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryTime {
    FiveMinutes,
    FifteenMinutes,
    OneHour,
    FourHours,
    OneDay,
    #[default]
    SevenDays,
    ThirtyDays,
}

impl ExpiryTime {
    pub const ALL: [ExpiryTime; 7] = [
        ExpiryTime::FiveMinutes,
        ExpiryTime::FifteenMinutes,
        ExpiryTime::OneHour,
        ExpiryTime::FourHours,
        ExpiryTime::OneDay,
        ExpiryTime::SevenDays,
        ExpiryTime::ThirtyDays,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExpiryTime::FiveMinutes => "5 minutes",
            ExpiryTime::FifteenMinutes => "15 minutes",
            ExpiryTime::OneHour => "1 hour",
            ExpiryTime::FourHours => "4 hours",
            ExpiryTime::OneDay => "1 day",
            ExpiryTime::SevenDays => "7 days",
            ExpiryTime::ThirtyDays => "30 days",
        }
    }
}

// ==================== API RESPONSE ====================
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_response_success_sets_flag() {
        let response = ApiResponse::success("ok");
        assert!(response.success);
        assert_eq!(response.data, "ok");
    }

    #[test]
    fn token_lookup_is_case_insensitive() {
        let token = TrackedToken::by_symbol("usdc").expect("USDC should be tracked");
        assert_eq!(token.symbol, "USDC");
        assert_eq!(token.decimals, 6);
        assert!(TrackedToken::by_symbol("DOGE").is_none());
    }

    #[test]
    fn native_asset_uses_sentinel_address() {
        let eth = TrackedToken::by_symbol("ETH").expect("ETH should be tracked");
        assert!(eth.is_native());
        assert!(!TrackedToken::by_symbol("USDT").unwrap().is_native());
    }

    #[test]
    fn default_chain_is_first_enumerated() {
        assert_eq!(Chain::default(), Chain::ALL[0]);
        assert_eq!(Chain::default().id(), 1);
    }

    #[test]
    fn chain_ids_match_network_registry() {
        assert_eq!(Chain::Arbitrum.id(), 42161);
        assert_eq!(Chain::Polygon.id(), 137);
        assert_eq!(Chain::Optimism.id(), 10);
    }

    #[test]
    fn default_expiry_is_seven_days() {
        assert_eq!(ExpiryTime::default(), ExpiryTime::SevenDays);
        assert_eq!(ExpiryTime::default().label(), "7 days");
    }
}
