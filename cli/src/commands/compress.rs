use canon6_common::config::Config;
use canon6_core::addr;

use crate::terminal::print;

pub fn compress(address: &str, cfg: &Config) -> anyhow::Result<()> {
    // Malformed input fails here with a typed error instead of being
    // compressed as-is.
    let expanded = addr::validate_and_expand(address, cfg.zone_aware)?;
    let compressed = addr::compress(&expanded);

    print::aligned_line("address", address);
    print::aligned_line("compressed", &compressed);
    Ok(())
}
