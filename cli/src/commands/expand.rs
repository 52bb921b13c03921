use canon6_common::config::Config;
use canon6_core::addr;

use crate::terminal::print;

pub fn expand(address: &str, cfg: &Config) -> anyhow::Result<()> {
    let expanded = addr::validate_and_expand(address, cfg.zone_aware)?;

    print::aligned_line("address", address);
    print::aligned_line("expanded", &expanded);
    Ok(())
}
