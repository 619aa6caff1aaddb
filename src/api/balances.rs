use std::time::Duration;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::AppState;
use crate::{
    error::{AppError, Result},
    integrations::oneinch::OneInchClient,
};

#[derive(Debug, Deserialize)]
pub struct BalancesQuery {
    #[serde(rename = "chainId")]
    pub chain_id: Option<String>,
    pub address: Option<String>,
}

// Both parameters mirror what the browser would have sent upstream itself.
fn validate_query(query: &BalancesQuery) -> Result<(u64, String)> {
    let chain_id = query
        .chain_id
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty());
    let address = query
        .address
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty());

    let (chain_id, address) = match (chain_id, address) {
        (Some(chain_id), Some(address)) => (chain_id, address),
        _ => {
            return Err(AppError::BadRequest(
                "Missing chainId or address parameter".to_string(),
            ))
        }
    };

    let chain_id: u64 = chain_id.parse().map_err(|_| {
        AppError::BadRequest("chainId must be a positive integer".to_string())
    })?;
    if chain_id == 0 {
        return Err(AppError::BadRequest(
            "chainId must be a positive integer".to_string(),
        ));
    }

    Ok((chain_id, address.to_string()))
}

/// GET /api/balances
///
/// Forwards the balance lookup to the 1inch API with the server-held key so
/// the browser never makes the cross-origin call itself. One attempt, no
/// caching; the upstream body and status are relayed as-is.
pub async fn get_balances(
    State(state): State<AppState>,
    Query(query): Query<BalancesQuery>,
) -> Result<Response> {
    let (chain_id, address) = validate_query(&query)?;

    let api_key = state
        .config
        .oneinch_api_key
        .clone()
        .ok_or_else(|| AppError::Config("API key not configured".to_string()))?;

    tracing::debug!(
        "proxying balance lookup chain_id={} address={}",
        chain_id,
        address
    );

    let client = OneInchClient::new(
        api_key,
        state.config.oneinch_api_url.clone(),
        Duration::from_secs(state.config.upstream_timeout_secs),
    );
    let upstream = client.fetch_balances(chain_id, &address).await?;

    tracing::debug!(
        "balance lookup answered {} for chain_id={}",
        upstream.status,
        chain_id
    );

    Ok((upstream.status, Json(upstream.body)).into_response())
}
