// Endpoint defaults
pub const DEFAULT_API_PORT: &str = "8000";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const WS_PATH: &str = "ws";

/// Hosts that refer to the local machine itself
pub const LOOPBACK_HOSTS: &[&str] = &["localhost", "127.0.0.1", "0.0.0.0"];

// Environment variables, primary name first then the frontend build alias
pub const ENV_API_URL: &[&str] = &["DESKLINE_API_URL", "NEXT_PUBLIC_API_URL"];
pub const ENV_WS_URL: &[&str] = &["DESKLINE_WS_URL", "NEXT_PUBLIC_WS_URL"];
pub const ENV_API_PORT: &[&str] = &["DESKLINE_API_PORT", "NEXT_PUBLIC_API_PORT"];
pub const ENV_RUNTIME_HOST: &str = "DESKLINE_RUNTIME_HOST";
pub const ENV_RUNTIME_PROTOCOL: &str = "DESKLINE_RUNTIME_PROTOCOL";

// Numeric codec configuration constants
pub const DEFAULT_PRECISION: usize = 2;
pub const MAX_PRECISION: usize = 100;
pub const ZERO_DISPLAY: &str = "0.00";
pub const THOUSAND: f64 = 1e3;
pub const MILLION: f64 = 1e6;
pub const BILLION: f64 = 1e9;
pub const TRILLION: f64 = 1e12;
