//! Thread-per-client TLS echo server.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use openssl::ssl::SslAcceptor;
use tracing::{info, warn};

const READ_TIMEOUT: Duration = Duration::from_secs(5);
const BUFFER_SIZE: usize = 1024;

/// Binds `addr` and serves echo clients until the process exits.
///
/// Each accepted connection is handled on its own thread; a failed
/// handshake or a slow client takes down that thread only, and the
/// accept loop keeps going.
pub fn serve(addr: SocketAddr, acceptor: SslAcceptor) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).with_context(|| format!("binding {addr}"))?;
    let acceptor = Arc::new(acceptor);
    info!("TLS echo server started on address {addr}");

    loop {
        info!("waiting for client connections...");
        match listener.accept() {
            Ok((stream, peer)) => {
                let acceptor = Arc::clone(&acceptor);
                thread::spawn(move || {
                    if let Err(e) = handle_client(stream, peer, &acceptor) {
                        warn!("client {peer}: {e:#}");
                    }
                });
            }
            Err(e) => warn!("error accepting client: {e}"),
        }
    }
}

fn handle_client(
    stream: TcpStream,
    peer: SocketAddr,
    acceptor: &SslAcceptor,
) -> anyhow::Result<()> {
    info!("new client connection from address {peer}");
    stream.set_read_timeout(Some(READ_TIMEOUT))?;

    let mut tls = acceptor
        .accept(stream)
        .map_err(|e| anyhow::anyhow!("TLS handshake failed: {e}"))?;

    let mut buffer = [0u8; BUFFER_SIZE];
    let read = tls.read(&mut buffer).context("reading client message")?;
    if read == 0 {
        info!("end of stream from {peer}");
        return Ok(());
    }

    let message = String::from_utf8_lossy(&buffer[..read]);
    info!("message received from client; {message}");

    tls.write_all(&buffer[..read])
        .context("echoing message back")?;

    info!("closing client connection {peer}");
    Ok(())
}
