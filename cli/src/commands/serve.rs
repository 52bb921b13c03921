use std::net::IpAddr;
use std::ops::RangeInclusive;
use std::path::Path;

use canon6_common::info;
use canon6_net::{probe, server, tls};

use crate::terminal::print;

pub async fn serve(
    host: IpAddr,
    ports: RangeInclusive<u16>,
    certs_dir: &Path,
) -> anyhow::Result<()> {
    let acceptor = tls::acceptor(
        &certs_dir.join("server.crt"),
        &certs_dir.join("server.key"),
    )?;

    info!("scanning for closed ports...");
    let addr = probe::first_free_port(host, ports).await?;
    print::aligned_line("address", addr);
    print::fat_separator();

    tokio::task::spawn_blocking(move || server::serve(addr, acceptor)).await?
}
