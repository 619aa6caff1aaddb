use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::controller::BalanceSource;
use super::state::RawBalances;

const PROXY_TIMEOUT_SECS: u64 = 15;

/// Talks to the server-side balance proxy the way the browser would.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    base_url: String,
    client: Client,
}

impl ProxyClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    fn balances_url(&self, chain_id: u64, address: &str) -> std::result::Result<Url, String> {
        let mut url = Url::parse(&format!(
            "{}/api/balances",
            self.base_url.trim_end_matches('/')
        ))
        .map_err(|e| format!("invalid proxy URL: {}", e))?;
        url.query_pairs_mut()
            .append_pair("chainId", &chain_id.to_string())
            .append_pair("address", address);
        Ok(url)
    }
}

#[async_trait]
impl BalanceSource for ProxyClient {
    async fn fetch_balances(
        &self,
        chain_id: u64,
        address: &str,
    ) -> std::result::Result<RawBalances, String> {
        let url = self.balances_url(chain_id, address)?;

        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(PROXY_TIMEOUT_SECS))
            .send()
            .await
            .map_err(|e| format!("balance request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("balance proxy returned {}: {}", status, body));
        }

        response
            .json::<RawBalances>()
            .await
            .map_err(|e| format!("balance response parse failed: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balances_url_carries_both_query_parameters() {
        let client = ProxyClient::new("http://localhost:3000/".to_string());
        let url = client
            .balances_url(1, "0xdeadbeef")
            .expect("url should parse");
        assert_eq!(
            url.as_str(),
            "http://localhost:3000/api/balances?chainId=1&address=0xdeadbeef"
        );
    }
}
