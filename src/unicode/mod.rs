//! Unicode Script_Extensions lookup.
//!
//! The Script_Extensions property lists, per code point, the set of
//! scripts that commonly use that character beyond its primary script
//! (UAX #24). The range data lives in [`script_extensions`] and is
//! carried verbatim from the Unicode Character Database; this module
//! only provides the range lookup over it.

pub mod script_extensions;

use self::script_extensions::{RANGES, VALUES};

/// Highest valid Unicode code point
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Look up the Script_Extensions set for a code point.
///
/// Returns the set of abbreviated script codes covering `cp`, or `None`
/// when the code point has no listed value and falls back to its plain
/// Script property. Code points above `MAX_CODE_POINT` return `None`.
pub fn script_extensions(cp: u32) -> Option<&'static [&'static str]> {
    if cp > MAX_CODE_POINT {
        return None;
    }
    // RANGES starts at 0, so the partition point is always at least 1.
    let idx = RANGES.partition_point(|&start| start <= cp) - 1;
    VALUES[idx]
}

/// Convenience lookup for a char
pub fn script_extensions_char(c: char) -> Option<&'static [&'static str]> {
    script_extensions(c as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_invariants() {
        assert_eq!(RANGES.len(), VALUES.len());
        assert_eq!(RANGES[0], 0);
        for pair in RANGES.windows(2) {
            assert!(pair[0] < pair[1], "boundaries must be strictly increasing");
        }
        assert!(*RANGES.last().unwrap() <= MAX_CODE_POINT);
    }

    #[test]
    fn test_script_codes_are_sorted_four_letter_ascii() {
        for value in VALUES.iter().flatten() {
            assert!(!value.is_empty());
            for code in *value {
                assert_eq!(code.len(), 4);
                assert!(code.is_ascii());
            }
            for pair in value.windows(2) {
                assert!(pair[0] < pair[1], "script sets must be sorted");
            }
        }
    }

    #[test]
    fn test_known_code_points() {
        assert_eq!(script_extensions(0x0341), None);
        assert_eq!(script_extensions(0x0342), Some(&["Grek"][..]));
        assert_eq!(
            script_extensions(0x060C),
            Some(&["Arab", "Syrc", "Thaa"][..])
        );
        assert_eq!(script_extensions_char('、'), script_extensions(0x3001));
        assert_eq!(script_extensions(0x10FFFF), None);
        assert_eq!(script_extensions(0x110000), None);
    }

    #[test]
    fn test_range_endpoints_match_interior() {
        for (i, &start) in RANGES.iter().enumerate() {
            let end = RANGES
                .get(i + 1)
                .map(|&next| next - 1)
                .unwrap_or(MAX_CODE_POINT);
            let mid = start + (end - start) / 2;
            assert_eq!(script_extensions(start), VALUES[i]);
            assert_eq!(script_extensions(mid), VALUES[i]);
            assert_eq!(script_extensions(end), VALUES[i]);
        }
    }

    // Every code point is covered by exactly one range; spot-check by
    // walking the whole plane at a coarse stride plus all boundaries.
    #[test]
    fn test_full_plane_coverage() {
        for cp in (0..=MAX_CODE_POINT).step_by(257) {
            let idx = RANGES.partition_point(|&start| start <= cp) - 1;
            let end = RANGES
                .get(idx + 1)
                .copied()
                .unwrap_or(MAX_CODE_POINT + 1);
            assert!(RANGES[idx] <= cp && cp < end);
        }
    }
}
