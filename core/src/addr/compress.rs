//! Shortest-form rendering: per-group leading-zero stripping and
//! zero-run elision with a leftmost-longest tie-break.

use super::{COMPRESSION_MARKER, expand::expand};

/// A maximal run of all-zero groups, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ZeroRun {
    start: usize,
    end: usize,
}

impl ZeroRun {
    fn len(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Compresses an address to its shortest legal representation.
///
/// Accepts raw or fully expanded input. Input carrying a `::` marker is
/// expanded first, which keeps the operation idempotent: compressing an
/// already compressed address returns it unchanged.
pub fn compress(addr: &str) -> String {
    let expanded;
    let addr = if addr.contains(COMPRESSION_MARKER) {
        expanded = expand(addr);
        expanded.as_str()
    } else {
        addr
    };

    let groups: Vec<String> = addr.split(':').map(strip_leading_zeros).collect();

    let Some(run) = longest_zero_run(&groups) else {
        return groups.join(":");
    };

    format!(
        "{}{}{}",
        groups[..run.start].join(":"),
        COMPRESSION_MARKER,
        groups[run.end + 1..].join(":"),
    )
}

/// Strips leading zeros from a group, never below a single digit: a group
/// of all zeros reduces to `"0"`.
fn strip_leading_zeros(group: &str) -> String {
    let stripped = group.trim_start_matches('0');
    if stripped.is_empty() && !group.is_empty() {
        return "0".to_string();
    }
    stripped.to_string()
}

/// Finds the longest run of `"0"` groups; ties go to the lowest start
/// index. Runs of a single group are never candidates, since replacing
/// one `0` with `::` does not shorten the address.
fn longest_zero_run(groups: &[String]) -> Option<ZeroRun> {
    let mut best: Option<ZeroRun> = None;
    let mut start: Option<usize> = None;

    for (idx, group) in groups.iter().enumerate() {
        if group != "0" {
            start = None;
            continue;
        }

        let run = ZeroRun {
            start: *start.get_or_insert(idx),
            end: idx,
        };
        if run.len() >= 2 && best.is_none_or(|found| run.len() > found.len()) {
            best = Some(run);
        }
    }

    best
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compresses_to_shortest_form() {
        let cases = [
            // Leading zeros removed, isolated zero groups left alone.
            (
                "2001:0db8:85a3:0000:0001:8a2e:0370:7334",
                "2001:db8:85a3:0:1:8a2e:370:7334",
            ),
            // The longest of several zero runs is elided.
            ("2001:0000:0000:0001:0000:0000:0000:0000", "2001:0:0:1::"),
            ("fe80::1", "fe80::1"),
            (
                "3ffe:1900:4545:3:200:f8ff:fe21:67cf",
                "3ffe:1900:4545:3:200:f8ff:fe21:67cf",
            ),
            ("::", "::"),
            ("0000:0000:0000:0000:0000:0000:0000:0000", "::"),
            ("fe80:0000:0000:0000:0000:0000:0000:0000", "fe80::"),
        ];

        for (address, expected) in cases {
            assert_eq!(compress(address), expected, "compressing {address}");
        }
    }

    #[test]
    fn equal_runs_elide_the_leftmost() {
        assert_eq!(compress("1:0:0:2:0:0:3:4"), "1::2:0:0:3:4");
    }

    #[test]
    fn compression_is_idempotent() {
        let cases = [
            "2001:0000:0000:0001:0000:0000:0000:0000",
            "0000:0000:0000:0000:0000:0000:0000:0000",
            "fe80:0000:0000:0000:0000:0000:0000:0001",
            "2001:0db8:85a3:0000:0001:8a2e:0370:7334",
        ];

        for address in cases {
            let once = compress(address);
            assert_eq!(compress(&once), once, "re-compressing {once}");
        }
    }

    #[test]
    fn strips_leading_zeros_per_group() {
        let cases = [
            ("2001", "2001"),
            ("0db8", "db8"),
            ("0005", "5"),
            ("0000", "0"),
            ("0370", "370"),
            ("0600", "600"),
            ("ef01", "ef01"),
        ];

        for (group, expected) in cases {
            assert_eq!(strip_leading_zeros(group), expected);
        }
    }

    #[test]
    fn finds_leftmost_longest_zero_run() {
        // (address, expected run bounds); None where every zero group is
        // isolated and nothing may be elided.
        let cases = [
            ("2001:0db8:0000:0042:0000:8a2e:0370:7334", None),
            ("fe80:0000:0000:0000:0000:0000:0000:0001", Some((1, 6))),
            ("3ffe:1900:0000:0003:0200:f8ff:fe21:67cf", None),
            ("2001:db8:0000:0000:0000:0000:0000:0001", Some((2, 6))),
            ("fd12:3456:789a:0001:0000:0000:0000:0001", Some((4, 6))),
            ("abcd:ef01:2345:6789:abcd:ef01:2345:6789", None),
            ("0000:0000:0000:0000:0000:0000:0000:0000", Some((0, 7))),
            ("2001:0000:0000:0001:0000:0000:0000:0000", Some((4, 7))),
            ("1234:0000:5678:0000:abcd:0000:ef01:0000", None),
        ];

        for (address, expected) in cases {
            let groups: Vec<String> = address.split(':').map(strip_leading_zeros).collect();
            let run = longest_zero_run(&groups).map(|run| (run.start, run.end));
            assert_eq!(run, expected, "scanning {address}");
        }
    }
}
