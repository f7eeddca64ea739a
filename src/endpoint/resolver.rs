//! Backend endpoint resolution
//!
//! Picks a candidate URL (explicit override, then browser-derived, then the
//! fixed default), normalizes it and remaps loopback hosts to the browser's
//! hostname so a page served over a LAN or public name can still reach a
//! backend configured as `localhost`.

use super::context::{BrowserLocation, ExecutionContext};
use super::loopback::is_loopback_host;
use crate::config::EndpointConfig;
use crate::constants::{DEFAULT_API_URL, WS_PATH};
use crate::error::{DesklineError, Result};
use log::debug;
use serde::Serialize;
use url::Url;

/// Resolved HTTP base URL and WebSocket URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEndpoints {
    pub api_url: String,
    pub ws_url: String,
}

/// Resolves endpoints for one configuration and execution context
#[derive(Debug, Clone)]
pub struct EndpointResolver<C> {
    config: EndpointConfig,
    context: C,
}

impl<C: ExecutionContext> EndpointResolver<C> {
    pub fn new(config: EndpointConfig, context: C) -> Self {
        Self { config, context }
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    /// HTTP base URL, without trailing slash
    pub fn resolve_api_url(&self) -> String {
        let location = self.context.location();
        let candidate = match explicit(&self.config.explicit_api_url) {
            Some(url) => url.to_string(),
            None => match &location {
                Some(loc) => format!(
                    "{}://{}:{}",
                    loc.protocol, loc.hostname, self.config.api_port
                ),
                None => DEFAULT_API_URL.to_string(),
            },
        };

        finalize(&candidate, location.as_ref())
    }

    /// WebSocket URL, explicit or derived from the API URL
    pub fn resolve_ws_url(&self) -> String {
        if let Some(url) = explicit(&self.config.explicit_ws_url) {
            return finalize(url, self.context.location().as_ref());
        }

        derive_ws_url(&self.resolve_api_url())
    }

    pub fn resolve(&self) -> ResolvedEndpoints {
        ResolvedEndpoints {
            api_url: self.resolve_api_url(),
            ws_url: self.resolve_ws_url(),
        }
    }
}

pub fn resolve_api_url(config: &EndpointConfig, context: &impl ExecutionContext) -> String {
    EndpointResolver::new(config.clone(), context).resolve_api_url()
}

pub fn resolve_ws_url(config: &EndpointConfig, context: &impl ExecutionContext) -> String {
    EndpointResolver::new(config.clone(), context).resolve_ws_url()
}

/// Trim surrounding whitespace and strip every trailing slash
pub fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Replace a leading `http` token (any case) with `ws` and append the WS path.
///
/// `https://host` becomes `wss://host/ws`.
pub fn derive_ws_url(api_url: &str) -> String {
    let base = match api_url.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("http") => format!("ws{}", &api_url[4..]),
        _ => api_url.to_string(),
    };
    format!("{}/{}", base, WS_PATH)
}

/// Rewrite a loopback host to the browser hostname when the browser itself
/// is not on a loopback address.
///
/// Returns `Ok(None)` when no rewrite applies.
pub fn remap_loopback(url: &str, location: Option<&BrowserLocation>) -> Result<Option<String>> {
    let browser_host = match location {
        Some(loc) if !is_loopback_host(&loc.hostname) => loc.hostname.trim(),
        _ => return Ok(None),
    };

    let mut parsed = Url::parse(url)?;
    let is_loopback = parsed.host_str().map(is_loopback_host).unwrap_or(false);
    if !is_loopback {
        return Ok(None);
    }

    parsed.set_host(Some(browser_host)).map_err(|e| {
        DesklineError::UrlParseError(format!("cannot use host '{}': {}", browser_host, e))
    })?;

    debug!("Remapped loopback endpoint {} to host {}", url, browser_host);
    Ok(Some(normalize_url(parsed.as_str())))
}

fn explicit(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn finalize(candidate: &str, location: Option<&BrowserLocation>) -> String {
    let normalized = normalize_url(candidate);
    match remap_loopback(&normalized, location) {
        Ok(Some(remapped)) => remapped,
        Ok(None) => normalized,
        Err(e) => {
            debug!("Skipping loopback remap for {}: {}", normalized, e);
            normalized
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::context::Headless;

    #[test]
    fn test_normalize_strips_trailing_slashes() {
        assert_eq!(normalize_url(" http://api.example.com/// "), "http://api.example.com");
        assert_eq!(normalize_url("http://api.example.com/v1/"), "http://api.example.com/v1");
        let once = normalize_url("https://api.example.com:8443");
        assert_eq!(normalize_url(&once), once);
    }

    #[test]
    fn test_derive_ws_url() {
        assert_eq!(derive_ws_url("http://host:8000"), "ws://host:8000/ws");
        assert_eq!(derive_ws_url("https://host:8000"), "wss://host:8000/ws");
        assert_eq!(derive_ws_url("HTTPS://host"), "wss://host/ws");
        assert_eq!(derive_ws_url("ftp://host"), "ftp://host/ws");
        assert_eq!(derive_ws_url("h"), "h/ws");
    }

    #[test]
    fn test_remap_requires_non_loopback_browser() {
        let url = "http://localhost:8000";
        assert_eq!(remap_loopback(url, None).unwrap(), None);
        let local = BrowserLocation::http("127.0.0.1");
        assert_eq!(remap_loopback(url, Some(&local)).unwrap(), None);
    }

    #[test]
    fn test_remap_rewrites_loopback_host() {
        let lan = BrowserLocation::http("192.168.1.20");
        assert_eq!(
            remap_loopback("http://0.0.0.0:8000/api", Some(&lan)).unwrap(),
            Some("http://192.168.1.20:8000/api".to_string())
        );
    }

    #[test]
    fn test_remap_leaves_real_hosts_alone() {
        let lan = BrowserLocation::http("192.168.1.20");
        assert_eq!(
            remap_loopback("https://api.example.com", Some(&lan)).unwrap(),
            None
        );
    }

    #[test]
    fn test_remap_reports_unparseable_url() {
        let lan = BrowserLocation::http("192.168.1.20");
        assert!(remap_loopback("not a url", Some(&lan)).is_err());
    }

    #[test]
    fn test_headless_default() {
        let resolver = EndpointResolver::new(EndpointConfig::default(), Headless);
        assert_eq!(resolver.resolve_api_url(), "http://localhost:8000");
        assert_eq!(resolver.resolve_ws_url(), "ws://localhost:8000/ws");
    }
}
