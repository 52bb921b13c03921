use canon6_common::config::Config;
use canon6_core::addr;

use crate::terminal::print;

pub fn binary(address: &str, cfg: &Config) -> anyhow::Result<()> {
    let expanded = addr::validate_and_expand(address, cfg.zone_aware)?;
    let rendered = addr::to_binary(&expanded)?;

    print::aligned_line("address", address);
    print::aligned_line("binary", &rendered);
    Ok(())
}
