use std::collections::HashMap;

use crate::math::curve::nonparametriccurve::nonparametriccurve::Point2D;
use super::xyerror::XYError;

/// Sampled (X, Y) data with free-form string metadata.
///
/// Core operations (borders, overlap, arithmetic) assume the points are
/// sorted ascending by X. Every constructor except [`XY::from_sorted`]
/// sorts on the way in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XY {
    data: Vec<Point2D>,
    meta: HashMap<String, String>
}

impl XY {
    pub fn new() -> XY {
        XY::default()
    }

    pub fn with_capacity(capacity: usize) -> XY {
        XY { data: Vec::with_capacity(capacity), meta: HashMap::new() }
    }

    pub fn from_points(points: Vec<Point2D>) -> XY {
        let mut xy = XY { data: points, meta: HashMap::new() };
        xy.sort_by_x();
        xy
    }

    /// Takes points that the caller already sorted by X.
    pub fn from_sorted(points: Vec<Point2D>, meta: HashMap<String, String>) -> XY {
        XY { data: points, meta }
    }

    pub fn with_meta(mut self, meta: HashMap<String, String>) -> XY {
        self.meta = meta;
        self
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn points(&self) -> &[Point2D] {
        &self.data
    }

    pub fn into_points(self) -> Vec<Point2D> {
        self.data
    }

    pub(crate) fn points_mut(&mut self) -> &mut Vec<Point2D> {
        &mut self.data
    }

    pub fn xs(&self) -> Vec<f64> {
        self.data.iter().map(|p| p.x()).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.data.iter().map(|p| p.y()).collect()
    }

    pub fn meta(&self) -> &HashMap<String, String> {
        &self.meta
    }

    pub fn meta_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.meta
    }

    pub fn insert_meta(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.meta.insert(key.into(), value.into())
    }

    pub fn first_point(&self) -> Result<Point2D, XYError> {
        self.data.first().copied().ok_or(XYError::EmptyData)
    }

    pub fn last_point(&self) -> Result<Point2D, XYError> {
        self.data.last().copied().ok_or(XYError::EmptyData)
    }
}

impl From<Vec<(f64, f64)>> for XY {
    fn from(pairs: Vec<(f64, f64)>) -> XY {
        XY::from_points(pairs.into_iter().map(Point2D::from).collect())
    }
}

impl FromIterator<Point2D> for XY {
    fn from_iter<I: IntoIterator<Item = Point2D>>(iter: I) -> XY {
        XY::from_points(iter.into_iter().collect())
    }
}
