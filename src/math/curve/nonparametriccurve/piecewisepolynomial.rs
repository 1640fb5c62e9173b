use nalgebra::DVector;
use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;

use crate::math::curve::curve::Curve;
use crate::math::curve::nonparametriccurve::nonparametriccurve::{
    NonparametricCurve,
    Point2D
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpolationError {
    #[error("interpolation needs at least {required} points, {given} given")]
    NotEnoughPoints { required: usize, given: usize },

    #[error("abscissas must be strictly increasing (violated at index {index})")]
    NotStrictlyIncreasing { index: usize },

    #[error("{xs} abscissas but {ys} ordinates given")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("spline moment system is singular")]
    SingularSystem,
}

// ─────────────────────────────────────────────
// Subpolynomial
// ─────────────────────────────────────────────

/// One segment, coefficients stored highest order first for Horner evaluation
/// around `lhs_x`.
struct Subpolynomial {
    coefs: Vec<f64>,
    lhs_x: f64,
}

impl Subpolynomial {
    fn new(coefs: Vec<f64>, lhs_x: f64) -> Subpolynomial {
        Subpolynomial { coefs, lhs_x }
    }

    fn value(&self, x: f64) -> f64 {
        let x_diff = x - self.lhs_x;
        let mut result = self.coefs[0];
        for &beta in &self.coefs[1..] {
            result = f64::mul_add(result, x_diff, beta);
        }
        result
    }

    fn derivative(&self, x: f64) -> f64 {
        let order = self.coefs.len() - 1;
        if order == 0 {
            return 0.0;
        }
        let x_diff = x - self.lhs_x;
        let mut result = order as f64 * self.coefs[0];
        for (i, &beta) in self.coefs[1..order].iter().enumerate() {
            result = f64::mul_add(result, x_diff, (order - 1 - i) as f64 * beta);
        }
        result
    }
}

// ─────────────────────────────────────────────
// Coefficients
// ─────────────────────────────────────────────

fn segment_widths(points: &[Point2D]) -> Vec<f64> {
    points
        .windows(2)
        .map(|pair| pair[1].x() - pair[0].x())
        .collect()
}

fn generate_linear_coef_list(points: &[Point2D]) -> Vec<Vec<f64>> {
    points
        .windows(2)
        .map(|pair| vec![Point2D::slope(&pair[0], &pair[1]), pair[0].y()])
        .collect()
}

/// Per-segment cubic `[d, c, b, a]` from the knot second derivatives `m`:
///   S_i(x) = a + b*(x-x_i) + c*(x-x_i)^2 + d*(x-x_i)^3
fn cubic_coefs_from_moments(points: &[Point2D], h: &[f64], m: &[f64]) -> Vec<Vec<f64>> {
    (0..h.len())
        .map(|i| {
            let d = (m[i + 1] - m[i]) / (6.0 * h[i]);
            let c = m[i] / 2.0;
            let b = (points[i + 1].y() - points[i].y()) / h[i]
                  - h[i] * (2.0 * m[i] + m[i + 1]) / 6.0;
            let a = points[i].y();
            vec![d, c, b, a]
        })
        .collect()
}

/// Tridiagonal system `lower[i]*m[i-1] + diag[i]*m[i] + upper[i]*m[i+1] = rhs[i]`.
struct TridiagonalSystem {
    lower: DVector<f64>,
    diag: DVector<f64>,
    upper: DVector<f64>,
    rhs: DVector<f64>,
}

impl TridiagonalSystem {
    fn zeros(size: usize) -> TridiagonalSystem {
        TridiagonalSystem {
            lower: DVector::zeros(size),
            diag: DVector::zeros(size),
            upper: DVector::zeros(size),
            rhs: DVector::zeros(size),
        }
    }

    /// Thomas algorithm, O(n).
    fn solve(mut self) -> Result<DVector<f64>, InterpolationError> {
        let size = self.diag.len();
        for i in 1..size {
            let pivot = self.diag[i - 1];
            if pivot == 0.0 {
                return Err(InterpolationError::SingularSystem);
            }
            let w = self.lower[i] / pivot;
            self.diag[i] -= w * self.upper[i - 1];
            self.rhs[i] -= w * self.rhs[i - 1];
        }
        if self.diag[size - 1] == 0.0 {
            return Err(InterpolationError::SingularSystem);
        }

        let mut solution = DVector::zeros(size);
        solution[size - 1] = self.rhs[size - 1] / self.diag[size - 1];
        for i in (0..size - 1).rev() {
            solution[i] = (self.rhs[i] - self.upper[i] * solution[i + 1]) / self.diag[i];
        }
        Ok(solution)
    }
}

/// Interior rows come from C² continuity:
///   h[i-1]*m[i-1] + 2*(h[i-1]+h[i])*m[i] + h[i]*m[i+1]
///     = 6*((y[i+1]-y[i])/h[i] - (y[i]-y[i-1])/h[i-1])
/// Natural ends pin m[0] = m[n] = 0.
fn natural_cubic_system(points: &[Point2D], h: &[f64]) -> TridiagonalSystem {
    let n = h.len();
    let mut system = TridiagonalSystem::zeros(n + 1);
    for i in 1..n {
        system.lower[i] = h[i - 1];
        system.diag[i] = 2.0 * (h[i - 1] + h[i]);
        system.upper[i] = h[i];
        system.rhs[i] = 6.0 * (
            (points[i + 1].y() - points[i].y()) / h[i]
          - (points[i].y() - points[i - 1].y()) / h[i - 1]
        );
    }
    system.diag[0] = 1.0;
    system.diag[n] = 1.0;
    system
}

fn generate_natural_cubic_coef_list(points: &[Point2D]) -> Result<Vec<Vec<f64>>, InterpolationError> {
    let h = segment_widths(points);
    let m = natural_cubic_system(points, &h).solve()?;
    Ok(cubic_coefs_from_moments(points, &h, m.as_slice()))
}

// ─────────────────────────────────────────────
// PolynomialType
// ─────────────────────────────────────────────

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolynomialType {
    Linear,
    #[default]
    NaturalCubic,
}

fn get_necessary_points(polynomial_type: PolynomialType) -> usize {
    match polynomial_type {
        PolynomialType::Linear       => 2,
        PolynomialType::NaturalCubic => 2, // two points degenerate to a line
    }
}

// ─────────────────────────────────────────────
// PiecewisePolynomial
// ─────────────────────────────────────────────

pub struct PiecewisePolynomial {
    max_x: f64,
    subpolynomial_list: Vec<Subpolynomial>,
}

impl PiecewisePolynomial {
    pub fn new(
        polynomial_type: PolynomialType,
        points: &[Point2D],
    ) -> Result<PiecewisePolynomial, InterpolationError> {
        let required = get_necessary_points(polynomial_type);
        if points.len() < required {
            return Err(InterpolationError::NotEnoughPoints { required, given: points.len() });
        }
        if let Some(index) = (1..points.len()).find(|&i| !(points[i].x() > points[i - 1].x())) {
            return Err(InterpolationError::NotStrictlyIncreasing { index });
        }

        let coef_list = match polynomial_type {
            PolynomialType::Linear       => generate_linear_coef_list(points),
            PolynomialType::NaturalCubic => generate_natural_cubic_coef_list(points)?,
        };

        let subpolynomial_list = coef_list
            .into_iter()
            .zip(points.iter())
            .map(|(coefs, pt)| Subpolynomial::new(coefs, pt.x()))
            .collect();

        Ok(PiecewisePolynomial {
            subpolynomial_list,
            max_x: points[points.len() - 1].x(),
        })
    }

    /// Builds the interpolant from parallel abscissa and ordinate slices.
    pub fn from_xy(
        polynomial_type: PolynomialType,
        xs: &[f64],
        ys: &[f64],
    ) -> Result<PiecewisePolynomial, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::LengthMismatch { xs: xs.len(), ys: ys.len() });
        }
        let points: Vec<Point2D> = xs
            .iter()
            .zip(ys.iter())
            .map(|(&x, &y)| Point2D::new(x, y))
            .collect();
        Self::new(polynomial_type, &points)
    }

    /// Values outside the knot range are extrapolated with the end segments.
    fn find_segment(&self, x: f64) -> usize {
        if x <= self.min_x() {
            0
        } else if x >= self.max_x {
            self.subpolynomial_list.len() - 1
        } else {
            self.subpolynomial_list
                .partition_point(|s| s.lhs_x <= x)
                .saturating_sub(1)
        }
    }
}

impl NonparametricCurve for PiecewisePolynomial {
    fn points(&self) -> Vec<Point2D> {
        let mut pts: Vec<Point2D> = self
            .subpolynomial_list
            .iter()
            .map(|s| Point2D::new(s.lhs_x, s.value(s.lhs_x)))
            .collect();
        if let Some(last) = self.subpolynomial_list.last() {
            pts.push(Point2D::new(self.max_x, last.value(self.max_x)));
        }
        pts
    }

    fn min_x(&self) -> f64 {
        self.subpolynomial_list[0].lhs_x
    }

    fn max_x(&self) -> f64 {
        self.max_x
    }
}

impl Curve for PiecewisePolynomial {
    fn value(&self, x: f64) -> f64 {
        let i = self.find_segment(x);
        self.subpolynomial_list[i].value(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        let i = self.find_segment(x);
        self.subpolynomial_list[i].derivative(x)
    }
}
