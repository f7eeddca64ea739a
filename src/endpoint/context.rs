//! Execution context capability
//!
//! The resolver never reads a browser host directly. It asks an
//! `ExecutionContext`, which is absent (`Headless`) for non-interactive
//! execution and present (`BrowserLocation`) when a browser-like host exists.

use crate::constants::{ENV_RUNTIME_HOST, ENV_RUNTIME_PROTOCOL};
use crate::error::{DesklineError, Result};
use log::warn;
use serde::Serialize;
use std::env;
use std::fmt;
use std::str::FromStr;

/// Page protocol of the current browser location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = DesklineError;

    /// Accepts `http`, `https` and the `location.protocol` forms `http:`/`https:`
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let s = s.strip_suffix(':').unwrap_or(s);
        if s.eq_ignore_ascii_case("http") {
            Ok(Protocol::Http)
        } else if s.eq_ignore_ascii_case("https") {
            Ok(Protocol::Https)
        } else {
            Err(DesklineError::InvalidProtocol(s.to_string()))
        }
    }
}

/// Protocol and hostname of the page the front end was served from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowserLocation {
    pub protocol: Protocol,
    pub hostname: String,
}

impl BrowserLocation {
    pub fn new(protocol: Protocol, hostname: impl Into<String>) -> Self {
        Self {
            protocol,
            hostname: hostname.into(),
        }
    }

    pub fn http(hostname: impl Into<String>) -> Self {
        Self::new(Protocol::Http, hostname)
    }

    pub fn https(hostname: impl Into<String>) -> Self {
        Self::new(Protocol::Https, hostname)
    }
}

/// Source of the current browser location, if any
pub trait ExecutionContext {
    fn location(&self) -> Option<BrowserLocation>;
}

/// Non-interactive execution: there is never a browser host to read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Headless;

impl ExecutionContext for Headless {
    fn location(&self) -> Option<BrowserLocation> {
        None
    }
}

impl ExecutionContext for BrowserLocation {
    fn location(&self) -> Option<BrowserLocation> {
        Some(self.clone())
    }
}

impl<T: ExecutionContext> ExecutionContext for Option<T> {
    fn location(&self) -> Option<BrowserLocation> {
        self.as_ref().and_then(|ctx| ctx.location())
    }
}

impl<T: ExecutionContext + ?Sized> ExecutionContext for &T {
    fn location(&self) -> Option<BrowserLocation> {
        (**self).location()
    }
}

/// Build the runtime location described by the process environment.
///
/// Returns `None` unless `DESKLINE_RUNTIME_HOST` is set and non-blank. An
/// unrecognised protocol is logged and treated as `http`.
pub fn runtime_location_from_env() -> Option<BrowserLocation> {
    runtime_location_from_lookup(|name| env::var(name).ok())
}

pub fn runtime_location_from_lookup<F>(lookup: F) -> Option<BrowserLocation>
where
    F: Fn(&str) -> Option<String>,
{
    let hostname = lookup(ENV_RUNTIME_HOST)
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())?;

    let protocol = match lookup(ENV_RUNTIME_PROTOCOL) {
        Some(raw) if !raw.trim().is_empty() => raw.parse().unwrap_or_else(|e| {
            warn!("{}, falling back to http", e);
            Protocol::Http
        }),
        _ => Protocol::Http,
    };

    Some(BrowserLocation { protocol, hostname })
}
