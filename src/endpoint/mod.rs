//! Backend endpoint resolution for the active execution context

pub mod context;
pub mod loopback;
pub mod resolver;

pub use context::{
    runtime_location_from_env, runtime_location_from_lookup, BrowserLocation, ExecutionContext,
    Headless, Protocol,
};
pub use loopback::is_loopback_host;
pub use resolver::{
    derive_ws_url, normalize_url, remap_loopback, resolve_api_url, resolve_ws_url,
    EndpointResolver, ResolvedEndpoints,
};

use crate::config::EndpointConfig;
use std::sync::OnceLock;

static PROCESS_ENDPOINTS: OnceLock<ResolvedEndpoints> = OnceLock::new();

/// Endpoints for this process, resolved from the environment on first use.
///
/// Later changes to the environment are not observed; build an
/// `EndpointResolver` to re-resolve.
pub fn process_endpoints() -> &'static ResolvedEndpoints {
    PROCESS_ENDPOINTS.get_or_init(|| {
        EndpointResolver::new(EndpointConfig::from_env(), runtime_location_from_env()).resolve()
    })
}

pub fn api_url() -> &'static str {
    &process_endpoints().api_url
}

pub fn ws_url() -> &'static str {
    &process_endpoints().ws_url
}
