use std::env;

use reqwest::Url;

use crate::shared::constants::{DEFAULT_ACCESS_TOKEN, DEFAULT_BASE_URL};

#[derive(Debug, Clone)]
pub struct Config {
    pub pcp: PcpApiConfig,
    pub app: AppConfig,
}

/// Connection settings for the PCP Transport public API
#[derive(Debug, Clone)]
pub struct PcpApiConfig {
    /// Base URL without trailing slash, e.g. `https://api.pcptransport.com`
    pub base_url: String,
    /// Static credential sent in the `Access-Token` header
    pub access_token: String,
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Region filter applied to the first directory load (None = all regions)
    pub default_region: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            pcp: PcpApiConfig::from_env()?,
            app: AppConfig::from_env()?,
        })
    }
}

impl PcpApiConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("PCP_API_BASE_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let parsed = Url::parse(&base_url)
            .map_err(|e| format!("PCP_API_BASE_URL is not a valid URL: {}", e))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err("PCP_API_BASE_URL must use http or https".to_string());
        }

        let access_token =
            lookup("PCP_ACCESS_TOKEN").unwrap_or_else(|| DEFAULT_ACCESS_TOKEN.to_string());
        if access_token.trim().is_empty() {
            return Err("PCP_ACCESS_TOKEN must not be empty".to_string());
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        })
    }
}

impl Default for PcpApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: DEFAULT_ACCESS_TOKEN.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_region = lookup("PCP_DEFAULT_REGION")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Self { default_region })
    }
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_pcp_config_defaults() {
        let config = PcpApiConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.base_url, "https://api.pcptransport.com");
        assert_eq!(config.access_token, "YWRtaW4=");
    }

    #[test]
    fn test_pcp_config_overrides_and_trims_trailing_slash() {
        let config = PcpApiConfig::from_lookup(lookup_from(&[
            ("PCP_API_BASE_URL", "http://127.0.0.1:8080/"),
            ("PCP_ACCESS_TOKEN", "secret"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.access_token, "secret");
    }

    #[test]
    fn test_pcp_config_rejects_invalid_values() {
        assert!(
            PcpApiConfig::from_lookup(lookup_from(&[("PCP_API_BASE_URL", "not a url")])).is_err()
        );
        assert!(
            PcpApiConfig::from_lookup(lookup_from(&[("PCP_API_BASE_URL", "ftp://pcp.example")]))
                .is_err()
        );
        assert!(PcpApiConfig::from_lookup(lookup_from(&[("PCP_ACCESS_TOKEN", " ")])).is_err());
    }

    #[test]
    fn test_app_config_blank_region_is_none() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("PCP_DEFAULT_REGION", "  ")])).unwrap();
        assert_eq!(config.default_region, None);

        let config =
            AppConfig::from_lookup(lookup_from(&[("PCP_DEFAULT_REGION", "JAWA")])).unwrap();
        assert_eq!(config.default_region.as_deref(), Some("JAWA"));
    }
}
