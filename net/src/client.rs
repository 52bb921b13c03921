//! One-shot TLS echo client.

use std::io::{ErrorKind, Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::time::Duration;

use anyhow::Context;
use openssl::ssl::SslConnector;
use tracing::info;

const READ_TIMEOUT: Duration = Duration::from_secs(8);
const BUFFER_SIZE: usize = 1024;

/// Connects to the echo server at `addr`, sends `message`, and returns
/// the server's reply.
pub fn send(addr: SocketAddr, connector: &SslConnector, message: &str) -> anyhow::Result<String> {
    let stream = TcpStream::connect(addr).with_context(|| format!("connecting to {addr}"))?;
    stream.set_read_timeout(Some(READ_TIMEOUT))?;

    let mut tls = connector
        .connect(&addr.ip().to_string(), stream)
        .map_err(|e| anyhow::anyhow!("TLS handshake failed: {e}"))?;

    info!("sending message to server...");
    tls.write_all(message.as_bytes())
        .context("messaging server")?;

    let mut buffer = [0u8; BUFFER_SIZE];
    let read = match tls.read(&mut buffer) {
        Ok(0) => anyhow::bail!("server closed the stream without replying"),
        Ok(read) => read,
        Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
            anyhow::bail!("timed out waiting for the server's reply")
        }
        Err(e) => return Err(e).context("reading server reply"),
    };

    Ok(String::from_utf8_lossy(&buffer[..read]).into_owned())
}
