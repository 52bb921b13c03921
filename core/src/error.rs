use thiserror::Error;

/// Failures raised while validating or converting a textual IPv6 address.
///
/// Every variant carries the offending input so callers can surface it
/// verbatim. Failures are data-dependent and deterministic; there is
/// nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Expansion did not yield exactly eight groups.
    #[error("expected 8 groups in address '{address}', found {found}")]
    SegmentCountMismatch { address: String, found: usize },

    /// A group contains a character outside `[0-9a-fA-F]`.
    #[error("group '{group}' of address '{address}' is not a valid hexadecimal value")]
    InvalidHexDigit { address: String, group: String },

    /// A group is empty, or wider than four hex digits.
    #[error("group '{group}' of address '{address}' must be 1 to 4 hex digits wide")]
    InvalidSegmentWidth { address: String, group: String },

    /// More than one `::` marker is present.
    #[error("address '{address}' contains more than one '::' marker")]
    MultipleCompressionMarkers { address: String },

    /// A `%zone` suffix is present but empty, or contains a second `%`.
    #[error("malformed zone identifier in address '{address}'")]
    MalformedZoneIdentifier { address: String },
}
