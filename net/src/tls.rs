//! TLS acceptor/connector construction from PEM material on disk.

use std::path::Path;

use anyhow::Context;
use openssl::ssl::{SslAcceptor, SslConnector, SslFiletype, SslMethod};

/// Builds a server-side acceptor from a PEM certificate chain and key.
pub fn acceptor(cert: &Path, key: &Path) -> anyhow::Result<SslAcceptor> {
    let mut builder = SslAcceptor::mozilla_intermediate_v5(SslMethod::tls())
        .context("initializing TLS acceptor")?;
    builder
        .set_certificate_chain_file(cert)
        .with_context(|| format!("loading certificate {}", cert.display()))?;
    builder
        .set_private_key_file(key, SslFiletype::PEM)
        .with_context(|| format!("loading private key {}", key.display()))?;
    builder
        .check_private_key()
        .context("certificate/key mismatch")?;

    Ok(builder.build())
}

/// Builds a client-side connector trusting a custom root certificate.
pub fn connector(root_cert: &Path) -> anyhow::Result<SslConnector> {
    let mut builder =
        SslConnector::builder(SslMethod::tls()).context("initializing TLS connector")?;
    builder
        .set_ca_file(root_cert)
        .with_context(|| format!("loading root certificate {}", root_cert.display()))?;

    Ok(builder.build())
}
