use std::fmt;
use std::ops::{
    Add,
    Div,
    Mul,
    Sub
};
use std::str::FromStr;

use crate::math::curve::curve::Curve;
use crate::math::curve::nonparametriccurve::nonparametriccurve::Point2D;
use crate::math::curve::nonparametriccurve::piecewisepolynomial::{
    PiecewisePolynomial,
    PolynomialType
};
use super::overlap::Overlap;
use super::xy::XY;
use super::xyerror::XYError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOperation {
    Add,
    Subtract,
    Multiply,
    Divide
}

impl ArithmeticOperation {
    pub fn function(&self) -> fn(f64, f64) -> f64 {
        match self {
            ArithmeticOperation::Add => Add::add,
            ArithmeticOperation::Subtract => Sub::sub,
            ArithmeticOperation::Multiply => Mul::mul,
            ArithmeticOperation::Divide => Div::div
        }
    }

    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        (self.function())(lhs, rhs)
    }

    pub fn to_char(&self) -> char {
        match self {
            ArithmeticOperation::Add => '+',
            ArithmeticOperation::Subtract => '-',
            ArithmeticOperation::Multiply => '*',
            ArithmeticOperation::Divide => '/'
        }
    }
}

impl fmt::Display for ArithmeticOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for ArithmeticOperation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" | "+" => Ok(ArithmeticOperation::Add),
            "subtract" | "sub" | "-" => Ok(ArithmeticOperation::Subtract),
            "multiply" | "mul" | "*" => Ok(ArithmeticOperation::Multiply),
            "divide" | "div" | "/" => Ok(ArithmeticOperation::Divide),
            other => Err(format!("unknown arithmetic operation '{}'", other))
        }
    }
}

/// Pairs samples index by index. `None` as soon as one pair of abscissas
/// differs, so no partial result escapes.
fn pair_aligned(
    lhs: &[Point2D],
    rhs: &[Point2D],
    op: fn(f64, f64) -> f64,
) -> Option<Vec<Point2D>> {
    if lhs.len() != rhs.len() {
        return None;
    }
    lhs.iter()
        .zip(rhs.iter())
        .map(|(p1, p2)| (p1.x() == p2.x()).then(|| Point2D::new(p1.x(), op(p1.y(), p2.y()))))
        .collect()
}

/// Resamples `rhs` onto the abscissas of `lhs` and combines the ordinates.
fn pair_interpolated(
    lhs: &[Point2D],
    rhs: &[Point2D],
    op: fn(f64, f64) -> f64,
    polynomial_type: PolynomialType,
) -> Result<Vec<Point2D>, XYError> {
    let xs: Vec<f64> = lhs.iter().map(|p| p.x()).collect();
    let resampled = match rhs {
        [single] => vec![single.y(); xs.len()],
        _ => PiecewisePolynomial::new(polynomial_type, rhs)?.values(&xs),
    };
    Ok(lhs
        .iter()
        .zip(resampled)
        .map(|(p, y)| Point2D::new(p.x(), op(p.y(), y)))
        .collect())
}

impl XY {
    /// Combines the ordinates of two curves over their overlap.
    ///
    /// The result keeps the X-grid and metadata of `self`; points outside the
    /// overlap are dropped. When both overlap windows carry the same abscissas
    /// the samples are paired directly, otherwise `rhs` is resampled with a
    /// natural cubic spline.
    pub fn combine(&self, rhs: &XY, op: ArithmeticOperation) -> Result<XY, XYError> {
        self.combine_with(rhs, op, PolynomialType::NaturalCubic)
    }

    /// [`XY::combine`] with an explicit resampling polynomial.
    pub fn combine_with(
        &self,
        rhs: &XY,
        op: ArithmeticOperation,
        polynomial_type: PolynomialType,
    ) -> Result<XY, XYError> {
        let ol = Overlap::resolve(self, rhs)?;
        let lhs_window = &self.points()[ol.lhs().range()];
        let rhs_window = &rhs.points()[ol.rhs().range()];
        let f = op.function();

        let data = match pair_aligned(lhs_window, rhs_window, f) {
            Some(data) => {
                log::debug!("'{}' over [{}, {}]: abscissas coincide, pairing directly", op, ol.xl(), ol.xr());
                data
            }
            None => {
                log::debug!(
                    "'{}' over [{}, {}]: resampling {} points onto {} with {:?}",
                    op, ol.xl(), ol.xr(), rhs_window.len(), lhs_window.len(), polynomial_type
                );
                pair_interpolated(lhs_window, rhs_window, f, polynomial_type)?
            }
        };

        Ok(XY::from_sorted(data, self.meta().clone()))
    }

    pub fn add(&self, rhs: &XY) -> Result<XY, XYError> {
        self.combine(rhs, ArithmeticOperation::Add)
    }

    pub fn subtract(&self, rhs: &XY) -> Result<XY, XYError> {
        self.combine(rhs, ArithmeticOperation::Subtract)
    }

    pub fn multiply(&self, rhs: &XY) -> Result<XY, XYError> {
        self.combine(rhs, ArithmeticOperation::Multiply)
    }

    pub fn divide(&self, rhs: &XY) -> Result<XY, XYError> {
        self.combine(rhs, ArithmeticOperation::Divide)
    }
}

impl Add<&XY> for &XY {
    type Output = Result<XY, XYError>;

    fn add(self, rhs: &XY) -> Self::Output {
        self.combine(rhs, ArithmeticOperation::Add)
    }
}

impl Sub<&XY> for &XY {
    type Output = Result<XY, XYError>;

    fn sub(self, rhs: &XY) -> Self::Output {
        self.combine(rhs, ArithmeticOperation::Subtract)
    }
}

impl Mul<&XY> for &XY {
    type Output = Result<XY, XYError>;

    fn mul(self, rhs: &XY) -> Self::Output {
        self.combine(rhs, ArithmeticOperation::Multiply)
    }
}

impl Div<&XY> for &XY {
    type Output = Result<XY, XYError>;

    fn div(self, rhs: &XY) -> Self::Output {
        self.combine(rhs, ArithmeticOperation::Divide)
    }
}
