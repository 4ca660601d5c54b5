use std::str::FromStr;

use rust_decimal::Decimal;

/// Parses a decimal token exactly.
///
/// Accepts plain decimals (`0.0042603`), a missing leading digit (`-.0042603`)
/// and exponent notation (`4.2603E-3`). Returns `None` for anything else.
#[must_use]
pub fn parse_decimal(token: &str) -> Option<Decimal> {
    let token = token.trim();
    let padded;
    let token = match token.as_bytes() {
        [b'.', ..] => {
            padded = format!("0{token}");
            padded.as_str()
        }
        [sign @ (b'-' | b'+'), b'.', ..] => {
            padded = format!("{}0{}", char::from(*sign), &token[1..]);
            padded.as_str()
        }
        _ => token,
    };

    Decimal::from_str(token)
        .or_else(|_| Decimal::from_scientific(token))
        .ok()
}

/// Multiplies `value` by `scale` in decimal arithmetic and converts the
/// product to `f64`.
///
/// The product is rounded to the nearest `f64` exactly once, so decimal
/// inputs such as `0.0100000 * 100` land on `1.0` rather than on a value
/// perturbed by binary multiplication. A zero product is always `+0.0`.
/// Returns `None` if the product overflows the decimal range.
#[must_use]
pub fn scale_to_f64(value: Decimal, scale: i64) -> Option<f64> {
    let scaled = value.checked_mul(Decimal::from(scale))?;
    if scaled.is_zero() {
        return Some(0.0);
    }
    scaled.normalize().to_string().parse::<f64>().ok()
}

/// Parses `token` and scales it; see [`parse_decimal`] and [`scale_to_f64`].
#[must_use]
pub fn parse_scaled(token: &str, scale: i64) -> Option<f64> {
    scale_to_f64(parse_decimal(token)?, scale)
}
