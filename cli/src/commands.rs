pub mod binary;
pub mod chunk;
pub mod compress;
pub mod expand;
pub mod send;
pub mod serve;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "canon6")]
#[command(about = "An IPv6 address canonicalization toolkit.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Keep %zone suffixes in place instead of stripping them
    #[arg(long, global = true)]
    pub no_zone: bool,

    /// Suppress decorative output
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Mirror all output into this log file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Expand an address to its full eight-group form
    #[command(alias = "e")]
    Expand { address: String },
    /// Compress an address to its shortest canonical form
    #[command(alias = "c")]
    Compress { address: String },
    /// Render an address as eight 16-bit binary groups
    #[command(alias = "b")]
    Binary { address: String },
    /// Split a file into checksum-named chunks
    Chunk {
        file: PathBuf,
        /// Piece size in bytes
        #[arg(long, default_value_t = canon6_common::chunks::DEFAULT_CHUNK_SIZE)]
        chunk_size: u64,
        /// Directory for the pieces (defaults to the file's directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Start the TLS echo server on the first free port in range
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: IpAddr,
        #[arg(long, default_value_t = 8000)]
        min_port: u16,
        #[arg(long, default_value_t = 9000)]
        max_port: u16,
        /// Directory holding server.crt and server.key
        #[arg(long, default_value = "certs")]
        certs_dir: PathBuf,
    },
    /// Send a message to the echo server and print the reply
    Send {
        message: String,
        /// Server address
        #[arg(long, default_value = "127.0.0.1:8000")]
        addr: SocketAddr,
        /// Directory holding ca-cert.pem
        #[arg(long, default_value = "certs")]
        certs_dir: PathBuf,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
