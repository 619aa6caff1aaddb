use std::time::Duration;

use axum::http::StatusCode;
use serde_json::Value;
use url::Url;

use crate::error::{AppError, Result};

/// What the upstream answered: status plus the JSON body, both relayed to
/// the caller untouched.
#[derive(Debug, Clone)]
pub struct UpstreamBalances {
    pub status: StatusCode,
    pub body: Value,
}

/// Client for the 1inch Balance API. Stateless; one instance per request.
#[derive(Debug, Clone)]
pub struct OneInchClient {
    api_key: String,
    api_url: String,
    timeout: Duration,
}

impl OneInchClient {
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> Self {
        Self {
            api_key,
            api_url,
            timeout,
        }
    }

    // {base}/{chainId}/balances/{address}
    fn balances_url(&self, chain_id: u64, address: &str) -> Result<Url> {
        Url::parse(&format!(
            "{}/{}/balances/{}",
            self.api_url.trim_end_matches('/'),
            chain_id,
            address
        ))
        .map_err(|e| AppError::Internal(format!("Invalid 1inch URL: {}", e)))
    }

    /// Single attempt, fail fast. Non-2xx answers become
    /// `AppError::Upstream` carrying the status and the body text verbatim.
    pub async fn fetch_balances(&self, chain_id: u64, address: &str) -> Result<UpstreamBalances> {
        let url = self.balances_url(chain_id, address)?;

        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(4))
            .timeout(self.timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("HTTP client init failed: {}", e)))?;

        let response = client
            .get(url)
            .bearer_auth(self.api_key.trim())
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("1inch request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let details = response.text().await.unwrap_or_default();
            tracing::error!("1inch API error: {} {}", status, details);
            return Err(AppError::Upstream { status, details });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("1inch response parse failed: {}", e)))?;

        Ok(UpstreamBalances { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balances_url_embeds_chain_and_address() {
        let client = OneInchClient::new(
            "key".to_string(),
            "https://api.1inch.dev/balance/v1.2".to_string(),
            Duration::from_secs(10),
        );
        let url = client
            .balances_url(1, "0xdeadbeef")
            .expect("url should parse");
        assert_eq!(
            url.as_str(),
            "https://api.1inch.dev/balance/v1.2/1/balances/0xdeadbeef"
        );
    }

    #[test]
    fn balances_url_tolerates_trailing_slash() {
        let client = OneInchClient::new(
            "key".to_string(),
            "https://api.1inch.dev/balance/v1.2/".to_string(),
            Duration::from_secs(10),
        );
        let url = client
            .balances_url(137, "0xabc")
            .expect("url should parse");
        assert_eq!(
            url.as_str(),
            "https://api.1inch.dev/balance/v1.2/137/balances/0xabc"
        );
    }
}
