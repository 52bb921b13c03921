//! IPv6 textual-address canonicalization.
//!
//! This module splits a candidate address into its colon-separated groups
//! of 16-bit segments, called hextets, and builds the three conversions on
//! top of that: [`expand`] to the full eight-group form, [`compress`] to
//! the shortest legal form, and [`to_binary`] to the fixed-width binary
//! rendering. [`validate_and_expand`] is the root every other operation
//! depends on; [`compress`] and [`to_binary`] never call each other.
//!
//! Nothing is kept between calls except the hex-digit classification
//! table, built once per process and immutable afterwards.

use std::sync::OnceLock;

use crate::error::AddressError;

pub mod binary;
pub mod compress;
pub mod expand;

pub use binary::to_binary;
pub use compress::compress;
pub use expand::expand;

/// Number of 16-bit groups in a full IPv6 address.
pub const GROUP_COUNT: usize = 8;

/// Width of a fully expanded group, in hex digits.
pub const GROUP_WIDTH: usize = 4;

pub(crate) const COMPRESSION_MARKER: &str = "::";

static HEX_DIGITS: OnceLock<[bool; 256]> = OnceLock::new();

/// Retrieves or initializes the hex-digit classification table.
fn hex_digits() -> &'static [bool; 256] {
    HEX_DIGITS.get_or_init(|| {
        let mut table = [false; 256];
        for byte in b'0'..=b'9' {
            table[byte as usize] = true;
        }
        for byte in b'a'..=b'f' {
            table[byte as usize] = true;
        }
        for byte in b'A'..=b'F' {
            table[byte as usize] = true;
        }
        table
    })
}

fn is_hex_group(group: &str) -> bool {
    let table = hex_digits();
    group.bytes().all(|byte| table[byte as usize])
}

/// Validates a textual address and returns its canonical eight-group,
/// four-digit-per-group form.
///
/// With `zone_aware` set, a trailing `%zone` suffix is stripped before
/// validation; the zone is consumed, never re-emitted. Without it, a `%`
/// is left in place and fails hex validation like any other stray byte.
///
/// The first violated precondition fails the call. No partial result is
/// ever returned.
pub fn validate_and_expand(addr: &str, zone_aware: bool) -> Result<String, AddressError> {
    let stripped = strip_zone(addr, zone_aware)?;

    if stripped.matches(COMPRESSION_MARKER).count() > 1 {
        return Err(AddressError::MultipleCompressionMarkers {
            address: addr.to_string(),
        });
    }

    let groups = group_tokens(stripped);
    if groups.len() != GROUP_COUNT {
        return Err(AddressError::SegmentCountMismatch {
            address: addr.to_string(),
            found: groups.len(),
        });
    }

    let mut expanded: Vec<String> = Vec::with_capacity(GROUP_COUNT);
    for group in groups {
        if !is_hex_group(&group) {
            return Err(AddressError::InvalidHexDigit {
                address: addr.to_string(),
                group,
            });
        }
        if group.is_empty() || group.len() > GROUP_WIDTH {
            return Err(AddressError::InvalidSegmentWidth {
                address: addr.to_string(),
                group,
            });
        }
        expanded.push(expand::pad_group(&group));
    }

    Ok(expanded.join(":"))
}

/// Splits an address into its group tokens, resolving a single `::`
/// marker into the implicit all-zero groups it stands for.
///
/// Tokens come back as written, unpadded and unchecked; the marker's
/// implicit groups come back as `"0"`. With more than one marker in the
/// input only the first is resolved, so callers reject that case first.
pub(crate) fn group_tokens(addr: &str) -> Vec<String> {
    let Some((left, right)) = addr.split_once(COMPRESSION_MARKER) else {
        return addr.split(':').map(str::to_string).collect();
    };

    let mut groups = side_tokens(left);
    let right_groups = side_tokens(right);
    let implicit = GROUP_COUNT.saturating_sub(groups.len() + right_groups.len());

    groups.extend(std::iter::repeat_n("0".to_string(), implicit));
    groups.extend(right_groups);
    groups
}

/// One side of a `::` marker; an empty side contributes no groups.
fn side_tokens(side: &str) -> Vec<String> {
    if side.is_empty() {
        return Vec::new();
    }
    side.split(':').map(str::to_string).collect()
}

fn strip_zone(addr: &str, zone_aware: bool) -> Result<&str, AddressError> {
    if !zone_aware {
        return Ok(addr);
    }

    let Some((host, zone)) = addr.split_once('%') else {
        return Ok(addr);
    };

    if zone.is_empty() || zone.contains('%') {
        return Err(AddressError::MalformedZoneIdentifier {
            address: addr.to_string(),
        });
    }

    Ok(host)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
