use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,
    pub environment: String,

    // Upstream balance API
    pub oneinch_api_key: Option<String>,
    pub oneinch_api_url: String,
    pub upstream_timeout_secs: u64,

    // Identity provider (consumed by the embedding UI shell)
    pub privy_app_id: Option<String>,

    // Trading core behavior
    pub balance_fallback_on_error: bool,

    // CORS
    pub cors_allowed_origins: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            oneinch_api_key: env::var("ONEINCH_API_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            oneinch_api_url: env::var("ONEINCH_API_URL")
                .unwrap_or_else(|_| "https://api.1inch.dev/balance/v1.2".to_string()),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()?,

            privy_app_id: env::var("PRIVY_APP_ID")
                .ok()
                .filter(|v| !v.trim().is_empty()),

            balance_fallback_on_error: env::var("BALANCE_FALLBACK_ON_ERROR")
                .map(|v| truthy(&v))
                .unwrap_or(true),

            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string()),
        })
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.oneinch_api_url.trim().is_empty() {
            anyhow::bail!("ONEINCH_API_URL is empty");
        }
        if self.upstream_timeout_secs == 0 {
            anyhow::bail!("UPSTREAM_TIMEOUT_SECS must be > 0");
        }

        // The credential is checked per request; the service may come up
        // before it is provisioned.
        if self.oneinch_api_key.is_none() {
            tracing::warn!("ONEINCH_API_KEY not set; /api/balances will answer 500 until it is");
        }
        if self.privy_app_id.is_none() {
            tracing::warn!("PRIVY_APP_ID not set; wallet login is unavailable to UI shells");
        }
        if self.cors_allowed_origins.trim().is_empty() {
            tracing::warn!("CORS_ALLOWED_ORIGINS is empty; browser requests may be blocked");
        }

        Ok(())
    }
}

fn truthy(value: &str) -> bool {
    let normalized = value.trim().to_ascii_lowercase();
    normalized == "1" || normalized == "true" || normalized == "yes" || normalized == "on"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_accepts_common_spellings() {
        assert!(truthy("1"));
        assert!(truthy("true"));
        assert!(truthy(" YES "));
        assert!(truthy("on"));
    }

    #[test]
    fn truthy_rejects_everything_else() {
        assert!(!truthy("0"));
        assert!(!truthy("false"));
        assert!(!truthy(""));
        assert!(!truthy("off"));
    }
}
