use std::fmt::Write;

use crate::geometry::Profile;
use crate::operations::SplitProfiles;

/// Column names of the output records.
const HEADER: [&str; 3] = ["X", "Y", "Z"];

/// Row terminator of the output records.
const LINE_END: &str = "\r\n";

/// Renders a profile as CSV, one `0.0,y,x` row per coordinate.
///
/// Values are written in shortest round-trip form (`0.0`, `100.0`,
/// `-0.42603`), switching to exponent form below `1e-4` and from `1e16` in
/// magnitude with a signed exponent of at least two digits (`1e-05`,
/// `1.5e+16`). With `include_header` the first row is `X,Y,Z`.
#[must_use]
pub fn profile_to_csv(profile: &Profile, include_header: bool) -> String {
    let mut out = String::new();
    if include_header {
        out.push_str(&HEADER.join(","));
        out.push_str(LINE_END);
    }
    for [a, b, c] in profile.records() {
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "{},{},{}{LINE_END}",
            format_value(a),
            format_value(b),
            format_value(c)
        );
    }
    out
}

/// Shortest round-trip text of `value`, exponent padded to `e-05`/`e+16`.
fn format_value(value: f64) -> String {
    let text = format!("{value:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}

/// Splits a raw coordinate listing and renders both surfaces as CSV.
///
/// Returns `(upper, lower)`. Both strings are empty, without header, when the
/// surfaces cannot be separated.
#[must_use]
pub fn convert_to_csv(text: &str, scale: i64, include_header: bool) -> (String, String) {
    match SplitProfiles::new(text, scale).try_execute() {
        Some(pair) => (
            profile_to_csv(&pair.upper, include_header),
            profile_to_csv(&pair.lower, include_header),
        ),
        None => (String::new(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CoordinatePair;

    #[test]
    fn rows_are_zero_y_x() {
        let profile = Profile::new(vec![
            CoordinatePair::new(0.0, 0.0),
            CoordinatePair::new(100.0, -0.126),
        ]);
        assert_eq!(
            profile_to_csv(&profile, false),
            "0.0,0.0,0.0\r\n0.0,-0.126,100.0\r\n"
        );
    }

    #[test]
    fn header_row() {
        let profile = Profile::new(vec![CoordinatePair::new(0.05839, 0.42603)]);
        assert_eq!(
            profile_to_csv(&profile, true),
            "X,Y,Z\r\n0.0,0.42603,0.05839\r\n"
        );
        assert_eq!(profile_to_csv(&Profile::default(), true), "X,Y,Z\r\n");
    }

    #[test]
    fn tiny_and_huge_values_use_padded_exponents() {
        assert_eq!(format_value(1e-5), "1e-05");
        assert_eq!(format_value(-1.5e-7), "-1.5e-07");
        assert_eq!(format_value(1e16), "1e+16");
        assert_eq!(format_value(2.5e-300), "2.5e-300");
        assert_eq!(format_value(0.0001), "0.0001");
        assert_eq!(format_value(1e15), "1000000000000000.0");
        assert_eq!(format_value(0.0), "0.0");
    }

    #[test]
    fn small_scaled_token_in_listing() {
        let text = "title\nparams\n0.0000000 0.0000001\n0.5 0.1\n\n0.0 0.0\n0.5 -0.1\n";
        let (upper, _) = convert_to_csv(text, 100, false);
        assert_eq!(upper, "0.0,1e-05,0.0\r\n0.0,10.0,50.0\r\n");
    }

    #[test]
    fn converts_listing() {
        let text = "NACA 0012\n66. 66.\n\n0.0000000 0.0000000\n0.0100000 0.0200000\n\n0.0000000 0.0000000\n0.0100000 -0.0200000\n";
        let (upper, lower) = convert_to_csv(text, 100, true);
        assert_eq!(upper, "X,Y,Z\r\n0.0,0.0,0.0\r\n0.0,2.0,1.0\r\n");
        assert_eq!(lower, "X,Y,Z\r\n0.0,0.0,0.0\r\n0.0,-2.0,1.0\r\n");
    }

    #[test]
    fn unseparable_listing_gives_empty_strings() {
        let (upper, lower) = convert_to_csv("title\nparams\n0.0 0.0\n1.0 0.0", 100, true);
        assert!(upper.is_empty());
        assert!(lower.is_empty());
    }
}
