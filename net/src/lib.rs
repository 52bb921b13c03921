//! TLS echo demo pair, plus the TCP probe the server uses to find a free
//! listener port.

pub mod client;
pub mod probe;
pub mod server;
pub mod tls;
