use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;

#[derive(Clone, Debug)]
pub struct NodeConfig {
    pub bind_addr: SocketAddr,
    pub store_path: PathBuf,
    /// Single origin the browser frontend is served from. Credentialed CORS
    /// requires an exact origin, never a wildcard.
    pub allowed_origin: HeaderValue,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".parse().unwrap(),
            store_path: PathBuf::from("data/forms.json"),
            allowed_origin: HeaderValue::from_static("http://localhost:3000"),
        }
    }
}
