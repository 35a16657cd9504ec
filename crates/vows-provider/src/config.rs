//! Provider configuration loaded from environment variables.
//!
//! All settings have defaults pointing at a local development stack so the
//! client can start with zero configuration.

/// Connection settings for the hosted data provider.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL of the provider instance (REST, auth and storage share it).
    /// Env: `VOWS_PROVIDER_URL`
    /// Default: `http://localhost:54321`
    pub base_url: String,

    /// Public (anonymous) API key sent with every request.
    /// Env: `VOWS_API_KEY`
    /// Default: empty (local stacks accept it).
    pub api_key: String,

    /// Origin of the public site, used to build shareable invite links.
    /// Env: `VOWS_SITE_ORIGIN`
    /// Default: `http://localhost:3000`
    pub site_origin: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:54321".to_string(),
            api_key: String::new(),
            site_origin: "http://localhost:3000".to_string(),
        }
    }
}

impl ProviderConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("VOWS_PROVIDER_URL") {
            if url.trim().is_empty() {
                tracing::warn!("Empty VOWS_PROVIDER_URL, using default");
            } else {
                config.base_url = url;
            }
        }

        if let Ok(key) = std::env::var("VOWS_API_KEY") {
            config.api_key = key;
        }

        if let Ok(origin) = std::env::var("VOWS_SITE_ORIGIN") {
            if !origin.trim().is_empty() {
                config.site_origin = origin;
            }
        }

        // Normalise once so URL building never has to care.
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        config.site_origin = config.site_origin.trim_end_matches('/').to_string();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_local_stack() {
        let config = ProviderConfig::default();
        assert_eq!(config.base_url, "http://localhost:54321");
        assert_eq!(config.site_origin, "http://localhost:3000");
        assert!(config.api_key.is_empty());
    }
}
