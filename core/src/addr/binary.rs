//! Fixed-width binary rendering of a validated address.

use super::validate_and_expand;
use crate::error::AddressError;

/// Converts an address into eight groups of 16 zero-padded binary digits
/// joined by colons, 135 characters for any valid input.
///
/// Accepts anything [`validate_and_expand`] accepts, including a `%zone`
/// suffix, and fails with the same error kinds.
pub fn to_binary(addr: &str) -> Result<String, AddressError> {
    let expanded = validate_and_expand(addr, true)?;

    let mut rendered: Vec<String> = Vec::new();
    for group in expanded.split(':') {
        let value = u16::from_str_radix(group, 16).map_err(|_| AddressError::InvalidHexDigit {
            address: addr.to_string(),
            group: group.to_string(),
        })?;
        rendered.push(format!("{value:016b}"));
    }

    Ok(rendered.join(":"))
}
