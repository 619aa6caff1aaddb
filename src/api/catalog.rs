use axum::Json;
use serde::Serialize;

use crate::constants::TRACKED_TOKENS;
use crate::models::{ApiResponse, Chain, TrackedToken};

#[derive(Debug, Serialize)]
pub struct ChainInfo {
    pub id: u64,
    pub label: &'static str,
}

/// GET /api/chains
pub async fn get_chains() -> Json<ApiResponse<Vec<ChainInfo>>> {
    let chains = Chain::ALL
        .iter()
        .map(|chain| ChainInfo {
            id: chain.id(),
            label: chain.label(),
        })
        .collect();
    Json(ApiResponse::success(chains))
}

/// GET /api/tokens
pub async fn get_tokens() -> Json<ApiResponse<Vec<TrackedToken>>> {
    Json(ApiResponse::success(TRACKED_TOKENS.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn chains_catalog_lists_all_networks() {
        let Json(response) = get_chains().await;
        assert!(response.success);
        assert_eq!(response.data.len(), 4);
        assert_eq!(response.data[0].id, 1);
        assert_eq!(response.data[0].label, "Ethereum");
    }

    #[tokio::test]
    async fn tokens_catalog_matches_tracked_set() {
        let Json(response) = get_tokens().await;
        assert_eq!(response.data.len(), TRACKED_TOKENS.len());
        assert!(response.data.iter().any(|t| t.symbol == "WBTC"));
    }
}
