//! Deskline - endpoint resolution and numeric text codec for trading front ends
//!
//! This library resolves the backend HTTP and WebSocket endpoints for the
//! current execution context, and converts numbers to and from the compact
//! shorthand people type and read (`1.5K`, `10k`, `50%`, `max`).

pub mod config;
pub mod constants;
pub mod endpoint;
pub mod error;
pub mod numeric;

// Re-export main components
pub use config::EndpointConfig;
pub use endpoint::{
    api_url, resolve_api_url, resolve_ws_url, ws_url, BrowserLocation, EndpointResolver,
    ExecutionContext, Headless, Protocol, ResolvedEndpoints,
};
pub use error::{DesklineError, Result};
pub use numeric::{
    format_compact, format_fixed, format_fixed2, parse_compact, parse_smart_input, NumericValue,
};
