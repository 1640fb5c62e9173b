use thiserror::Error;

use crate::math::curve::nonparametriccurve::piecewisepolynomial::InterpolationError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum XYError {
    #[error("invalid border values: x1 ({x1}) must be less than x2 ({x2})")]
    InvalidRange { x1: f64, x2: f64 },

    #[error("X ranges do not overlap: [{lhs_min}, {lhs_max}] and [{rhs_min}, {rhs_max}]")]
    NoOverlap {
        lhs_min: f64,
        lhs_max: f64,
        rhs_min: f64,
        rhs_max: f64,
    },

    #[error("cannot find border indexes for [{x1}, {x2}]")]
    BordersNotFound { x1: f64, x2: f64 },

    #[error("empty data")]
    EmptyData,

    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}
