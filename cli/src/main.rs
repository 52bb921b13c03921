mod commands;
mod terminal;

use canon6_common::config::Config;
use commands::{CommandLine, Commands, binary, chunk, compress, expand, send, serve};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.log_file.as_deref())?;

    let cfg = Config {
        zone_aware: !commands.no_zone,
        quiet: commands.quiet,
    };

    match commands.command {
        Commands::Expand { address } => {
            print::header("expanding address", cfg.quiet);
            expand::expand(&address, &cfg)
        }
        Commands::Compress { address } => {
            print::header("compressing address", cfg.quiet);
            compress::compress(&address, &cfg)
        }
        Commands::Binary { address } => {
            print::header("rendering address as binary", cfg.quiet);
            binary::binary(&address, &cfg)
        }
        Commands::Chunk {
            file,
            chunk_size,
            out_dir,
        } => {
            print::header("chunking file", cfg.quiet);
            chunk::chunk(&file, chunk_size, out_dir.as_deref()).await
        }
        Commands::Serve {
            host,
            min_port,
            max_port,
            certs_dir,
        } => {
            print::header("starting echo server", cfg.quiet);
            serve::serve(host, min_port..=max_port, &certs_dir).await
        }
        Commands::Send {
            message,
            addr,
            certs_dir,
        } => {
            print::header("messaging echo server", cfg.quiet);
            send::send(&message, addr, &certs_dir)
        }
    }
}
