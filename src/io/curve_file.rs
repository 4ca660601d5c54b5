use crate::error::{FormatError, Result};
use crate::math::Point3;

/// Parses a persisted curve file into its points.
///
/// The first line is a header and is skipped unread, as are blank lines.
/// Every other line must hold exactly three comma-separated finite numbers
/// `x,y,z`; `inf` and `nan` are rejected.
///
/// # Errors
///
/// Returns `FormatError::MalformedLine` (with the 1-based line number) for
/// the first line that is not a valid point.
pub fn parse_curve_points(text: &str) -> Result<Vec<Point3>> {
    let mut points = Vec::new();
    for (i, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let point = parse_xyz(line).ok_or_else(|| FormatError::MalformedLine {
            line: i + 1,
            content: line.to_owned(),
        })?;
        points.push(point);
    }
    Ok(points)
}

fn parse_xyz(line: &str) -> Option<Point3> {
    let mut fields = line
        .split(',')
        .map(|f| f.trim().parse::<f64>().ok().filter(|v| v.is_finite()));
    let x = fields.next()??;
    let y = fields.next()??;
    let z = fields.next()??;
    if fields.next().is_some() {
        return None;
    }
    Some(Point3::new(x, y, z))
}
