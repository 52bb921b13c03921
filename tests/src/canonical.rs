//! Cross-crate round-trip properties over the canonicalization core.

use canon6_core::addr;

const VALID_ADDRESSES: &[&str] = &[
    "2001:0db8:85a3:0000:0000:8a2e:0370:7334",
    "2001:db8:85a3::8a2e:370:7334",
    "3ffe:1900:4545:3:200:f8ff:fe21:67cf",
    "fd12:3456:789a:1::1",
    "fe80::1",
    "::1",
    "1::",
    "::",
    "2001:0:0:1::",
    "1234:0:5678:0:abcd:0:ef01:0",
    "1:0:0:2:0:0:3:4",
    "fe80:0:0:0:0:0:0:0",
];

#[test]
fn compression_preserves_the_expanded_value() {
    for address in VALID_ADDRESSES {
        let expanded = addr::expand(address);
        assert_eq!(
            addr::expand(&addr::compress(&expanded)),
            expanded,
            "round-tripping {address}"
        );
    }
}

#[test]
fn compression_is_idempotent() {
    for address in VALID_ADDRESSES {
        let once = addr::compress(address);
        assert_eq!(addr::compress(&once), once, "re-compressing {address}");
    }
}

#[test]
fn binary_rendering_has_fixed_width() {
    for address in VALID_ADDRESSES {
        assert_eq!(
            addr::to_binary(address).unwrap().len(),
            135,
            "rendering {address}"
        );
    }
}

#[test]
fn validator_agrees_with_the_expander_on_valid_input() {
    for address in VALID_ADDRESSES {
        assert_eq!(
            addr::validate_and_expand(address, true).unwrap(),
            addr::expand(address),
            "validating {address}"
        );
    }
}

#[test]
fn equal_length_zero_runs_elide_the_leftmost() {
    assert_eq!(addr::compress("1:0:0:2:0:0:3:4"), "1::2:0:0:3:4");
    assert_eq!(addr::compress("0:0:1:0:0:2:3:4"), "::1:0:0:2:3:4");
    assert_eq!(
        addr::compress("1:2:0:0:0:3:0:0"),
        "1:2::3:0:0",
        "the longer run wins regardless of position"
    );
}
