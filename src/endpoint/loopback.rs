use crate::constants::LOOPBACK_HOSTS;

/// Check whether a hostname refers to the local machine (case-insensitive)
pub fn is_loopback_host(host: &str) -> bool {
    let host = host.trim();
    LOOPBACK_HOSTS
        .iter()
        .any(|loopback| loopback.eq_ignore_ascii_case(host))
}
