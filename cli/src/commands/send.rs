use std::net::SocketAddr;
use std::path::Path;

use canon6_common::success;
use canon6_net::{client, tls};

use crate::terminal::print;

pub fn send(message: &str, addr: SocketAddr, certs_dir: &Path) -> anyhow::Result<()> {
    let connector = tls::connector(&certs_dir.join("ca-cert.pem"))?;
    let reply = client::send(addr, &connector, message)?;

    print::aligned_line("server says", &reply);
    success!("echo round-trip complete");
    Ok(())
}
