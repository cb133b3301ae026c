pub mod audit;
pub mod csrf;
pub mod rate_limit;
pub mod security;

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request};

const FORWARDED_FOR: &str = "x-forwarded-for";

/// Address of the connected socket, when the server runs with connect info.
pub fn peer_ip(req: &Request) -> Option<String> {
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
}

/// Every `X-Forwarded-For` hop, left to right, across repeated headers.
fn forwarded_hops(req: &Request) -> Vec<&str> {
    req.headers()
        .get_all(FORWARDED_FOR)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .filter(|hop| !hop.is_empty())
        .collect()
}

/// Client-reported origin (first `X-Forwarded-For` hop). Informational only;
/// anyone can set it.
pub fn forwarded_for(req: &Request) -> Option<String> {
    forwarded_hops(req).first().map(|hop| hop.to_string())
}

/// Identity used for rate limiting.
///
/// The socket address, unless the service sits behind a trusted proxy. The
/// proxy appends the address it saw, so the right-most hop is the only one
/// the client cannot forge.
pub fn client_key(req: &Request, trusted_proxy: bool) -> String {
    if trusted_proxy {
        if let Some(hop) = forwarded_hops(req).last() {
            return hop.to_string();
        }
    }
    peer_ip(req).unwrap_or_else(|| "unknown".to_string())
}
