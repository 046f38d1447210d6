use anyhow::{Context, Result};

/// Region used when `GCLOUD_LOCATION` is not set.
pub const DEFAULT_LOCATION: &str = "europe-west1";
const DEFAULT_PORT: &str = "3400";
const DEFAULT_LOG_LEVEL: &str = "debug";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gcloud_project: String,
    pub gcloud_location: String,
    /// Optional bearer-token override; Application Default Credentials otherwise.
    pub google_access_token: Option<String>,
    pub vertex_api_base: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gcloud_location = lookup("GCLOUD_LOCATION")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string());

        let vertex_api_base = lookup("VERTEX_API_BASE")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| format!("https://{gcloud_location}-aiplatform.googleapis.com"));

        Ok(Config {
            gcloud_project: require(&lookup, "GCLOUD_PROJECT")?,
            google_access_token: lookup("GOOGLE_ACCESS_TOKEN").filter(|v| !v.is_empty()),
            gcloud_location,
            vertex_api_base,
            port: lookup("PORT")
                .unwrap_or_else(|| DEFAULT_PORT.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}

fn require<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    const REQUIRED: &[(&str, &str)] = &[("GCLOUD_PROJECT", "strive-dev")];

    #[test]
    fn test_defaults_when_optional_vars_absent() {
        let config = Config::from_lookup(lookup_from(REQUIRED)).unwrap();
        assert_eq!(config.gcloud_location, "europe-west1");
        assert_eq!(
            config.vertex_api_base,
            "https://europe-west1-aiplatform.googleapis.com"
        );
        assert_eq!(config.port, 3400);
        assert_eq!(config.rust_log, "debug");
        assert!(config.google_access_token.is_none());
    }

    #[test]
    fn test_access_token_is_an_optional_override() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("GOOGLE_ACCESS_TOKEN", "ya29.token"));
        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.google_access_token.as_deref(), Some("ya29.token"));
    }

    #[test]
    fn test_location_drives_default_base_url() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("GCLOUD_LOCATION", "us-central1"));
        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.gcloud_location, "us-central1");
        assert_eq!(
            config.vertex_api_base,
            "https://us-central1-aiplatform.googleapis.com"
        );
    }

    #[test]
    fn test_base_url_override_strips_trailing_slash() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("VERTEX_API_BASE", "http://127.0.0.1:9000/"));
        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.vertex_api_base, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_missing_project_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("GOOGLE_ACCESS_TOKEN", "t")])).unwrap_err();
        assert!(err.to_string().contains("GCLOUD_PROJECT"));
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("PORT", "not-a-port"));
        assert!(Config::from_lookup(lookup_from(&pairs)).is_err());
    }
}
