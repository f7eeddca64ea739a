//! Endpoint configuration module
//! Handles the explicit endpoint overrides supplied by the hosting environment

use crate::constants::{DEFAULT_API_PORT, ENV_API_PORT, ENV_API_URL, ENV_WS_URL};
use crate::error::{DesklineError, Result};
use log::warn;
use serde::Serialize;
use std::env;

/// Explicit endpoint configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointConfig {
    /// Explicit backend base URL, takes precedence over any derived default
    pub explicit_api_url: Option<String>,
    /// Explicit WebSocket URL, otherwise derived from the API URL
    pub explicit_ws_url: Option<String>,
    /// Port used when synthesizing the API URL from the browser location
    pub api_port: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            explicit_api_url: None,
            explicit_ws_url: None,
            api_port: DEFAULT_API_PORT.to_string(),
        }
    }
}

impl EndpointConfig {
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.explicit_api_url = Some(url.into());
        self
    }

    pub fn with_ws_url(mut self, url: impl Into<String>) -> Self {
        self.explicit_ws_url = Some(url.into());
        self
    }

    pub fn with_api_port(mut self, port: impl Into<String>) -> Self {
        self.api_port = port.into();
        self
    }

    /// Load configuration from environment variables if available
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Each setting is read under its primary name first, then under its
    /// alias. Blank values count as unset. An invalid port is logged and
    /// replaced by the default port; the explicit URLs are kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let first_set = |names: &[&str]| {
            names
                .iter()
                .filter_map(|&name| lookup(name))
                .find(|value| !value.trim().is_empty())
        };

        let explicit_api_url = first_set(ENV_API_URL);
        let explicit_ws_url = first_set(ENV_WS_URL);
        let api_port = match first_set(ENV_API_PORT).map(|p| p.trim().to_string()) {
            Some(port) => match Self::validate_port(&port) {
                Ok(()) => port,
                Err(e) => {
                    warn!("{}, using default port {}", e, DEFAULT_API_PORT);
                    DEFAULT_API_PORT.to_string()
                }
            },
            None => DEFAULT_API_PORT.to_string(),
        };

        Self {
            explicit_api_url,
            explicit_ws_url,
            api_port,
        }
    }

    /// Check that a port string is a number between 1 and 65535
    pub fn validate_port(port: &str) -> Result<()> {
        match port.parse::<u16>() {
            Ok(p) if p > 0 => Ok(()),
            _ => Err(DesklineError::ConfigError(format!(
                "API port must be a number between 1 and 65535, got '{}'",
                port
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = EndpointConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, EndpointConfig::default());
        assert_eq!(config.api_port, "8000");
    }

    #[test]
    fn test_primary_name_wins_over_alias() {
        let config = EndpointConfig::from_lookup(lookup_from(&[
            ("DESKLINE_API_URL", "https://api.example.com"),
            ("NEXT_PUBLIC_API_URL", "https://other.example.com"),
        ]));
        assert_eq!(
            config.explicit_api_url.as_deref(),
            Some("https://api.example.com")
        );
    }

    #[test]
    fn test_blank_primary_falls_through_to_alias() {
        let config = EndpointConfig::from_lookup(lookup_from(&[
            ("DESKLINE_WS_URL", "   "),
            ("NEXT_PUBLIC_WS_URL", "wss://stream.example.com/ws"),
            ("NEXT_PUBLIC_API_PORT", " 9000 "),
        ]));
        assert_eq!(
            config.explicit_ws_url.as_deref(),
            Some("wss://stream.example.com/ws")
        );
        assert_eq!(config.api_port, "9000");
    }

    #[test]
    fn test_validate_port() {
        assert!(EndpointConfig::validate_port("8000").is_ok());
        let err = EndpointConfig::validate_port("http").unwrap_err();
        assert!(err.to_string().contains("API port"));
        assert!(EndpointConfig::validate_port("70000").is_err());
        assert!(EndpointConfig::validate_port("0").is_err());
    }

    #[test]
    fn test_invalid_port_keeps_explicit_urls() {
        let config = EndpointConfig::from_lookup(lookup_from(&[
            ("DESKLINE_API_URL", "https://api.example.com"),
            ("DESKLINE_WS_URL", "wss://stream.example.com/ws"),
            ("DESKLINE_API_PORT", "not-a-port"),
        ]));
        assert_eq!(config.explicit_api_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(
            config.explicit_ws_url.as_deref(),
            Some("wss://stream.example.com/ws")
        );
        assert_eq!(config.api_port, "8000");

        let config = EndpointConfig::from_lookup(lookup_from(&[("DESKLINE_API_PORT", "70000")]));
        assert_eq!(config.api_port, "8000");
    }

    #[test]
    fn test_builders() {
        let config = EndpointConfig::default()
            .with_api_url("http://localhost:8000")
            .with_ws_url("ws://localhost:8000/ws")
            .with_api_port("8080");
        assert_eq!(config.explicit_api_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(config.explicit_ws_url.as_deref(), Some("ws://localhost:8000/ws"));
        assert_eq!(config.api_port, "8080");
    }
}
