//! TCP reachability probes used to find a free listener port.

use std::net::{IpAddr, SocketAddr};
use std::ops::RangeInclusive;
use std::time::Duration;

use anyhow::bail;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::info;

const PROBE_TIMEOUT: Duration = Duration::from_millis(100);

/// Probes whether something is listening on `addr`.
///
/// Only an accepted connect counts as in use; a refused connect or an
/// elapsed timer means nothing answered there.
pub async fn port_in_use(addr: SocketAddr) -> bool {
    matches!(
        timeout(PROBE_TIMEOUT, TcpStream::connect(addr)).await,
        Ok(Ok(_))
    )
}

/// Walks `ports` in order and returns the first address on `host` that
/// nothing is listening on.
pub async fn first_free_port(
    host: IpAddr,
    ports: RangeInclusive<u16>,
) -> anyhow::Result<SocketAddr> {
    let (start, end) = (*ports.start(), *ports.end());

    for port in ports {
        let addr = SocketAddr::new(host, port);
        if !port_in_use(addr).await {
            return Ok(addr);
        }
        info!("TCP address {addr} currently in use");
    }

    bail!("no available ports left within range ({start} - {end})");
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn bound_listener_reads_as_in_use() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        assert!(port_in_use(addr).await);
    }

    #[tokio::test]
    async fn free_port_scan_skips_bound_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let bound = listener.local_addr().unwrap();
        let host = IpAddr::V4(Ipv4Addr::LOCALHOST);

        let range = bound.port()..=bound.port().saturating_add(16);
        let free = first_free_port(host, range).await.unwrap();

        assert_ne!(free.port(), bound.port());
        assert!(!port_in_use(free).await);
    }
}
