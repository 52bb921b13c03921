//! Pure syntactic expansion to the canonical eight-group form.

use super::{GROUP_WIDTH, group_tokens};

/// Expands a (possibly shortened) address into the eight-group,
/// four-digit-per-group form.
///
/// No hex or width validation happens here: groups are padded, never
/// truncated or rejected. Malformed input passes through widened for the
/// validator to judge.
pub fn expand(addr: &str) -> String {
    group_tokens(addr)
        .iter()
        .map(|group| pad_group(group))
        .collect::<Vec<String>>()
        .join(":")
}

/// Left-pads a group with `0` to the canonical four-digit width.
pub(super) fn pad_group(group: &str) -> String {
    format!("{group:0>width$}", width = GROUP_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_shortened_addresses() {
        let cases = [
            (
                "2001:db8:85a3::8a2e:370:7334",
                "2001:0db8:85a3:0000:0000:8a2e:0370:7334",
            ),
            ("fe80::1", "fe80:0000:0000:0000:0000:0000:0000:0001"),
            (
                "3ffe:1900:4545:3:200:f8ff:fe21:67cf",
                "3ffe:1900:4545:0003:0200:f8ff:fe21:67cf",
            ),
            ("fd12:3456:789a:1::1", "fd12:3456:789a:0001:0000:0000:0000:0001"),
            ("::", "0000:0000:0000:0000:0000:0000:0000:0000"),
            ("2001:0:0:1::", "2001:0000:0000:0001:0000:0000:0000:0000"),
        ];

        for (address, expected) in cases {
            assert_eq!(expand(address), expected, "expanding {address}");
        }
    }

    #[test]
    fn expands_marker_with_empty_left_side() {
        assert_eq!(expand("::1"), "0000:0000:0000:0000:0000:0000:0000:0001");
    }

    #[test]
    fn pads_without_truncating() {
        // Over-wide groups survive expansion untouched; rejecting them is
        // the validator's job.
        assert_eq!(expand("12345:1"), "12345:0001");
    }
}
