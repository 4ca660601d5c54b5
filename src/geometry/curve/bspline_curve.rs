use nalgebra::DMatrix;
use tracing::debug;

use crate::error::{GeometryError, OperationError, Result};
use crate::math::bspline::{
    basis_functions, chord_length_parameters, find_span, interpolation_knots,
};
use crate::math::{is_finite, Point3, Vector3};

use super::{Curve, CurveDomain};

/// A non-rational B-spline curve over the parameter domain `[0, 1]`, built by
/// [`interpolate`](Self::interpolate) to pass exactly through a sequence of
/// data points.
#[derive(Debug, Clone)]
pub struct BSplineCurve {
    degree: usize,
    knots: Vec<f64>,
    control_points: Vec<Point3>,
}

impl BSplineCurve {
    /// Fits the B-spline of the given degree that passes through every point.
    ///
    /// Points are parameterised by normalised cumulative chord length, so the
    /// first point sits at `t = 0` and the last at `t = 1`. There is no
    /// smoothing: the curve reproduces each input point up to round-off.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if fewer than `degree + 1` points are
    ///   given or any coordinate is not finite
    /// - `GeometryError::Degenerate` if two consecutive points coincide
    /// - `OperationError::Failed` if the collocation system cannot be solved
    pub fn interpolate(points: &[Point3], degree: usize) -> Result<Self> {
        check_point_count(points.len(), degree)?;
        if let Some(i) = points.iter().position(|p| !is_finite(p)) {
            return Err(OperationError::InvalidInput(format!(
                "point {i} has a non-finite coordinate"
            ))
            .into());
        }

        let params = chord_length_parameters(points)?;
        let knots = interpolation_knots(&params, degree);
        let m = points.len();

        let mut collocation = DMatrix::<f64>::zeros(m, m);
        for (row, &u) in params.iter().enumerate() {
            let span = find_span(m - 1, degree, u, &knots);
            for (k, value) in basis_functions(span, u, degree, &knots)
                .into_iter()
                .enumerate()
            {
                collocation[(row, span - degree + k)] = value;
            }
        }
        let rhs = DMatrix::from_fn(m, 3, |r, c| points[r][c]);

        let solution = collocation.lu().solve(&rhs).ok_or_else(|| {
            OperationError::Failed("spline interpolation system is singular".to_owned())
        })?;

        let control_points = (0..m)
            .map(|r| Point3::new(solution[(r, 0)], solution[(r, 1)], solution[(r, 2)]))
            .collect();

        debug!(points = m, degree, "fitted interpolating spline");

        Ok(Self {
            degree,
            knots,
            control_points,
        })
    }

    /// Evaluates the curve without a domain check.
    fn point_at(&self, u: f64) -> Point3 {
        let span = find_span(self.control_points.len() - 1, self.degree, u, &self.knots);
        let basis = basis_functions(span, u, self.degree, &self.knots);

        let mut acc = Vector3::zeros();
        for (k, weight) in basis.iter().enumerate() {
            acc += self.control_points[span - self.degree + k].coords * *weight;
        }
        Point3::from(acc)
    }

    fn check_parameter(&self, t: f64) -> Result<()> {
        let domain = self.domain();
        if domain.contains(t) {
            Ok(())
        } else {
            Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t,
                min: domain.start,
                max: domain.end,
            }
            .into())
        }
    }
}

impl Curve for BSplineCurve {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        self.check_parameter(t)?;
        Ok(self.point_at(t))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(self.knots[self.degree], self.knots[self.control_points.len()])
    }
}

fn check_point_count(count: usize, degree: usize) -> Result<()> {
    if degree == 0 {
        return Err(
            OperationError::InvalidInput("spline degree must be at least 1".to_owned()).into(),
        );
    }
    if count <= degree {
        return Err(OperationError::InvalidInput(format!(
            "at least {} points are required for a degree-{degree} spline, got {count}",
            degree + 1
        ))
        .into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::AirfoilError;
    use approx::assert_relative_eq;
    use std::f64::consts::TAU;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn wavy_points() -> Vec<Point3> {
        vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.5, 0.1),
            p(2.0, -0.3, 0.4),
            p(3.0, 0.8, 0.2),
            p(4.0, 0.1, -0.5),
            p(5.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn passes_through_every_input_point() {
        let pts = wavy_points();
        let curve = BSplineCurve::interpolate(&pts, 3).unwrap();
        let params = chord_length_parameters(&pts).unwrap();
        for (pt, &u) in pts.iter().zip(&params) {
            let q = curve.evaluate(u).unwrap();
            assert_relative_eq!(q, *pt, epsilon = 1e-9);
        }
    }

    #[test]
    fn endpoints_match_domain_ends() {
        let pts = wavy_points();
        let curve = BSplineCurve::interpolate(&pts, 3).unwrap();
        assert_eq!(curve.domain(), CurveDomain::new(0.0, 1.0));
        assert_relative_eq!(curve.evaluate(0.0).unwrap(), pts[0], epsilon = 1e-12);
        assert_relative_eq!(curve.evaluate(1.0).unwrap(), pts[5], epsilon = 1e-12);
    }

    #[test]
    fn minimum_point_count_is_degree_plus_one() {
        let pts = &wavy_points()[..4];
        assert!(BSplineCurve::interpolate(pts, 3).is_ok());

        let err = BSplineCurve::interpolate(&pts[..3], 3).unwrap_err();
        assert!(matches!(
            err,
            AirfoilError::Operation(OperationError::InvalidInput(_))
        ));
    }

    #[test]
    fn repeated_point_is_degenerate() {
        let mut pts = wavy_points();
        pts[3] = pts[2];
        let err = BSplineCurve::interpolate(&pts, 3).unwrap_err();
        assert!(matches!(
            err,
            AirfoilError::Geometry(GeometryError::Degenerate(_))
        ));
    }

    #[test]
    fn collinear_points_stay_on_the_line() {
        let pts: Vec<Point3> = (0..6).map(|i| p(f64::from(i), 0.0, 0.0)).collect();
        let curve = BSplineCurve::interpolate(&pts, 3).unwrap();
        let mid = curve.evaluate(0.5).unwrap();
        assert_relative_eq!(mid, p(2.5, 0.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn circle_samples_interpolate_close_to_radius() {
        let pts: Vec<Point3> = (0..=32)
            .map(|i| {
                let a = TAU * f64::from(i) / 32.0;
                p(a.cos(), a.sin(), 0.0)
            })
            .collect();
        let curve = BSplineCurve::interpolate(&pts, 3).unwrap();
        for i in 0..100 {
            let q = curve.evaluate(f64::from(i) / 99.0).unwrap();
            let r = (q.x * q.x + q.y * q.y).sqrt();
            assert!((r - 1.0).abs() < 1e-3, "radius {r} at sample {i}");
        }
    }

    #[test]
    fn evaluate_outside_domain_fails() {
        let curve = BSplineCurve::interpolate(&wavy_points(), 3).unwrap();
        assert!(matches!(
            curve.evaluate(1.5),
            Err(AirfoilError::Geometry(
                GeometryError::ParameterOutOfRange { .. }
            ))
        ));
        assert!(curve.evaluate(-0.1).is_err());
    }

    #[test]
    fn non_finite_point_is_rejected() {
        for bad in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let mut pts = wavy_points();
            pts[2].y = bad;
            match BSplineCurve::interpolate(&pts, 3) {
                Err(AirfoilError::Operation(OperationError::InvalidInput(msg))) => {
                    assert!(msg.contains("point 2"), "{msg}");
                }
                other => panic!("expected InvalidInput, got {other:?}"),
            }
        }
    }
}
