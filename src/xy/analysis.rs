use serde::{
    Deserialize,
    Serialize
};

use crate::math::curve::nonparametriccurve::nonparametriccurve::Point2D;
use crate::math::round::significant_digits;
use super::noisehistogram::NoiseHistogram;
use super::xy::XY;
use super::xyerror::XYError;

const DEFAULT_MIN_PRECISION: i32 = 4;

/// Rounding bounds for the noise histogram. The precision has no upper
/// bound unless `max_precision` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseOptions {
    min_precision: i32,
    max_precision: Option<i32>
}

impl NoiseOptions {
    pub fn new(min_precision: i32) -> NoiseOptions {
        NoiseOptions { min_precision, max_precision: None }
    }

    pub fn with_max_precision(mut self, max_precision: i32) -> NoiseOptions {
        self.max_precision = Some(max_precision);
        self
    }

    pub fn min_precision(&self) -> i32 {
        self.min_precision
    }

    pub fn max_precision(&self) -> Option<i32> {
        self.max_precision
    }

    /// Decimal digits used to bin ordinates ranging up to `y_max` with
    /// smallest non-zero magnitude `eps`.
    pub fn precision_for(&self, y_max: f64, eps: f64) -> i32 {
        significant_digits(y_max, eps, self.min_precision, self.max_precision)
    }
}

impl Default for NoiseOptions {
    fn default() -> Self {
        NoiseOptions::new(DEFAULT_MIN_PRECISION)
    }
}

/// The highest sample and the smallest non-zero ordinate magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxAndEps {
    x_max: f64,
    y_max: f64,
    eps: f64
}

impl MaxAndEps {
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Equals `y_max` when every ordinate is zero.
    pub fn eps(&self) -> f64 {
        self.eps
    }
}

impl XY {
    /// Trapezoidal integral over X. Works on a sorted copy, so the curve
    /// itself is left as is.
    pub fn area(&self) -> f64 {
        let mut data = self.points().to_vec();
        data.sort_by(|a, b| a.x().total_cmp(&b.x()));
        let twice_area: f64 = data
            .windows(2)
            .map(|pair| (pair[1].x() - pair[0].x()) * (pair[0].y() + pair[1].y()))
            .sum();
        twice_area / 2.0
    }

    pub fn max_and_eps(&self) -> Result<MaxAndEps, XYError> {
        let mut sorted_by_y = self.points().to_vec();
        sorted_by_y.sort_by(|a, b| a.y().total_cmp(&b.y()));
        let top = sorted_by_y.last().ok_or(XYError::EmptyData)?;

        let y_max = top.y();
        let eps = sorted_by_y
            .iter()
            .map(|p| p.y().abs())
            .fold(y_max, |eps, y| if y < eps && y != 0.0 { y } else { eps });

        Ok(MaxAndEps { x_max: top.x(), y_max, eps })
    }

    pub fn max_y(&self) -> Result<Point2D, XYError> {
        let max = self.max_and_eps()?;
        Ok(Point2D::new(max.x_max, max.y_max))
    }

    /// Noise level estimated from the distribution of the ordinates: the
    /// center of the half-maximum width of their histogram's peak.
    pub fn noise(&self) -> Result<f64, XYError> {
        self.noise_with(&NoiseOptions::default())
    }

    pub fn noise_with(&self, options: &NoiseOptions) -> Result<f64, XYError> {
        let max = self.max_and_eps()?;
        let precision = options.precision_for(max.y_max, max.eps);
        log::debug!(
            "noise: y_max {}, eps {}, binning with {} decimals",
            max.y_max, max.eps, precision
        );

        let histogram = NoiseHistogram::from_values(self.points().iter().map(|p| p.y()), precision);
        histogram.half_maximum_center().ok_or(XYError::EmptyData)
    }
}
