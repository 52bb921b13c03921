/// Runtime options shared by every subcommand.
pub struct Config {
    /// Treats a trailing `%zone` suffix as a zone identifier and strips
    /// it before validation.
    ///
    /// Disabled, a `%` fails hex validation like any other stray byte.
    pub zone_aware: bool,

    /// Suppresses decorative output.
    pub quiet: u8,
}
