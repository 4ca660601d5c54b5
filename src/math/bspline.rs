use crate::error::{GeometryError, Result};

use super::{Point3, TOLERANCE};

/// Finds the knot span index `s` such that `knots[s] <= u < knots[s + 1]`.
///
/// `n` is the index of the last control point. Parameters at or past the end
/// of the domain map to the last non-empty span.
#[must_use]
pub fn find_span(n: usize, degree: usize, u: f64, knots: &[f64]) -> usize {
    if u >= knots[n + 1] {
        return n;
    }
    if u <= knots[degree] {
        return degree;
    }

    let mut lo = degree;
    let mut hi = n + 1;
    let mut mid = (lo + hi) / 2;
    while u < knots[mid] || u >= knots[mid + 1] {
        if u < knots[mid] {
            hi = mid;
        } else {
            lo = mid;
        }
        mid = (lo + hi) / 2;
    }
    mid
}

/// Evaluates the `degree + 1` non-zero basis functions at `u`.
///
/// Entry `r` of the result is `N[span - degree + r](u)`, computed with the
/// triangular Cox–de Boor scheme of The NURBS Book, A2.2.
#[must_use]
pub fn basis_functions(span: usize, u: f64, degree: usize, knots: &[f64]) -> Vec<f64> {
    let mut n = vec![0.0; degree + 1];
    let mut left = vec![0.0; degree + 1];
    let mut right = vec![0.0; degree + 1];
    n[0] = 1.0;

    for j in 1..=degree {
        left[j] = u - knots[span + 1 - j];
        right[j] = knots[span + j] - u;
        let mut saved = 0.0;
        for r in 0..j {
            let temp = n[r] / (right[r + 1] + left[j - r]);
            n[r] = saved + right[r + 1] * temp;
            saved = left[j - r] * temp;
        }
        n[j] = saved;
    }

    n
}

/// Assigns each point a parameter in `[0, 1]` proportional to the cumulative
/// chord length along the sequence.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] if two consecutive points coincide.
pub fn chord_length_parameters(points: &[Point3]) -> Result<Vec<f64>> {
    let mut params = Vec::with_capacity(points.len());
    let mut total = 0.0;
    params.push(0.0);

    for (i, pair) in points.windows(2).enumerate() {
        let step = (pair[1] - pair[0]).norm();
        if step < TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "points {i} and {} coincide",
                i + 1
            ))
            .into());
        }
        total += step;
        params.push(total);
    }

    for u in &mut params {
        *u /= total;
    }
    if let Some(last) = params.last_mut() {
        *last = 1.0;
    }
    Ok(params)
}

/// Builds the clamped knot vector for interpolating `params.len()` points.
///
/// Odd degrees place interior knots on the data parameters, skipping
/// `(degree - 1) / 2` at each end (the not-a-knot condition for cubics).
/// Even degrees place them midway between consecutive data parameters.
/// The result has `params.len() + degree + 1` entries.
#[must_use]
pub fn interpolation_knots(params: &[f64], degree: usize) -> Vec<f64> {
    let m = params.len();
    let mut knots = Vec::with_capacity(m + degree + 1);
    knots.extend(std::iter::repeat_n(0.0, degree + 1));

    let offset = (degree + 1) / 2;
    for i in 0..m.saturating_sub(degree + 1) {
        let knot = if degree % 2 == 1 {
            params[i + offset]
        } else {
            0.5 * (params[i + offset] + params[i + offset + 1])
        };
        knots.push(knot);
    }

    knots.extend(std::iter::repeat_n(1.0, degree + 1));
    knots
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const CLAMPED_CUBIC: [f64; 10] = [0.0, 0.0, 0.0, 0.0, 0.3, 0.6, 1.0, 1.0, 1.0, 1.0];

    #[test]
    fn span_at_domain_ends() {
        // 6 control points, n = 5.
        assert_eq!(find_span(5, 3, 0.0, &CLAMPED_CUBIC), 3);
        assert_eq!(find_span(5, 3, 1.0, &CLAMPED_CUBIC), 5);
    }

    #[test]
    fn span_in_interior() {
        assert_eq!(find_span(5, 3, 0.29, &CLAMPED_CUBIC), 3);
        assert_eq!(find_span(5, 3, 0.3, &CLAMPED_CUBIC), 4);
        assert_eq!(find_span(5, 3, 0.75, &CLAMPED_CUBIC), 5);
    }

    #[test]
    fn basis_is_partition_of_unity() {
        for &u in &[0.0, 0.1, 0.3, 0.45, 0.6, 0.99, 1.0] {
            let span = find_span(5, 3, u, &CLAMPED_CUBIC);
            let sum: f64 = basis_functions(span, u, 3, &CLAMPED_CUBIC).iter().sum();
            assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn basis_at_start_is_first_control_point_only() {
        let span = find_span(5, 3, 0.0, &CLAMPED_CUBIC);
        let n = basis_functions(span, 0.0, 3, &CLAMPED_CUBIC);
        assert_relative_eq!(n[0], 1.0);
        assert!(n[1..].iter().all(|v| v.abs() < 1e-12));
    }

    #[test]
    fn chord_parameters_follow_segment_lengths() {
        let pts = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 3.0, 0.0),
        ];
        let u = chord_length_parameters(&pts).unwrap();
        assert_eq!(u.len(), 3);
        assert_relative_eq!(u[0], 0.0);
        assert_relative_eq!(u[1], 0.25);
        assert_relative_eq!(u[2], 1.0);
    }

    #[test]
    fn chord_parameters_reject_repeated_point() {
        let pts = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        ];
        assert!(chord_length_parameters(&pts).is_err());
    }

    #[test]
    fn cubic_knots_skip_two_parameters_at_each_end() {
        let params = [0.0, 0.1, 0.2, 0.4, 0.7, 0.9, 1.0];
        let knots = interpolation_knots(&params, 3);
        assert_eq!(knots.len(), params.len() + 4);
        assert_eq!(
            knots,
            vec![0.0, 0.0, 0.0, 0.0, 0.2, 0.4, 0.7, 1.0, 1.0, 1.0, 1.0]
        );
    }

    #[test]
    fn four_points_give_bezier_knots() {
        let knots = interpolation_knots(&[0.0, 0.3, 0.6, 1.0], 3);
        assert_eq!(knots, vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn quadratic_knots_sit_between_parameters() {
        let knots = interpolation_knots(&[0.0, 0.2, 0.4, 0.8, 1.0], 2);
        assert_eq!(knots.len(), 8);
        assert_relative_eq!(knots[3], 0.3, epsilon = 1e-12);
        assert_relative_eq!(knots[4], 0.6, epsilon = 1e-12);
    }
}
