//! Bearer tokens for Vertex AI.
//!
//! Default: Application Default Credentials through `gcp_auth` (service-account
//! key file, gcloud user credentials or the metadata server). The provider caches
//! the token and refreshes it before expiry, so callers ask for one per request.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::Config;
use crate::llm_client::LlmError;

pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn bearer_token(&self) -> Result<String, LlmError>;
}

/// Fixed token from `GOOGLE_ACCESS_TOKEN`. Never refreshed.
pub struct StaticToken(pub String);

#[async_trait]
impl TokenSource for StaticToken {
    async fn bearer_token(&self) -> Result<String, LlmError> {
        Ok(self.0.clone())
    }
}

pub struct AdcTokenSource {
    provider: Arc<dyn gcp_auth::TokenProvider>,
}

impl AdcTokenSource {
    pub async fn discover() -> Result<Self, LlmError> {
        let provider = gcp_auth::provider()
            .await
            .map_err(|e| LlmError::Auth(e.to_string()))?;
        Ok(Self { provider })
    }
}

#[async_trait]
impl TokenSource for AdcTokenSource {
    async fn bearer_token(&self) -> Result<String, LlmError> {
        let token = self
            .provider
            .token(&[CLOUD_PLATFORM_SCOPE])
            .await
            .map_err(|e| LlmError::Auth(e.to_string()))?;
        Ok(token.as_str().to_string())
    }
}

/// Picks the token source for this process: the env override when set, ADC otherwise.
pub async fn token_source(config: &Config) -> Result<Arc<dyn TokenSource>, LlmError> {
    match &config.google_access_token {
        Some(token) => {
            warn!("Using GOOGLE_ACCESS_TOKEN override; it will not be refreshed");
            Ok(Arc::new(StaticToken(token.clone())))
        }
        None => {
            let adc = AdcTokenSource::discover().await?;
            info!("Using Application Default Credentials for Vertex AI");
            Ok(Arc::new(adc))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_token(token: Option<&str>) -> Config {
        Config {
            gcloud_project: "strive-test".to_string(),
            gcloud_location: "europe-west1".to_string(),
            google_access_token: token.map(str::to_string),
            vertex_api_base: "http://127.0.0.1:1".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
        }
    }

    #[tokio::test]
    async fn test_override_token_is_used_as_is() {
        let source = token_source(&config_with_token(Some("ya29.override")))
            .await
            .unwrap();
        assert_eq!(source.bearer_token().await.unwrap(), "ya29.override");
        assert_eq!(source.bearer_token().await.unwrap(), "ya29.override");
    }
}
