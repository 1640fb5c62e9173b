use std::ops::RangeInclusive;

use super::borders::locate_window;
use super::xy::XY;
use super::xyerror::XYError;

/// Inclusive pair of sample indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    left: usize,
    right: usize
}

impl IndexRange {
    pub fn new(left: usize, right: usize) -> IndexRange {
        IndexRange { left, right }
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub fn right(&self) -> usize {
        self.right
    }

    pub fn len(&self) -> usize {
        self.right - self.left + 1
    }

    pub fn range(&self) -> RangeInclusive<usize> {
        self.left..=self.right
    }
}

/// Shared X-range `[xl, xr]` of two curves and where it sits in each of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    xl: f64,
    xr: f64,
    lhs: IndexRange,
    rhs: IndexRange
}

impl Overlap {
    /// Intersects the X-ranges of two sorted curves.
    ///
    /// `xl == xr` (the curves touch in one abscissa) is a valid overlap.
    pub fn resolve(lhs: &XY, rhs: &XY) -> Result<Overlap, XYError> {
        let (lhs_first, lhs_last) = (lhs.first_point()?, lhs.last_point()?);
        let (rhs_first, rhs_last) = (rhs.first_point()?, rhs.last_point()?);

        let xl = lhs_first.x().max(rhs_first.x());
        let xr = lhs_last.x().min(rhs_last.x());

        if xl > xr {
            log::warn!(
                "X ranges do not overlap; headers of the first curve: {:?}; headers of the second curve: {:?}",
                lhs.meta(),
                rhs.meta()
            );
            return Err(XYError::NoOverlap {
                lhs_min: lhs_first.x(),
                lhs_max: lhs_last.x(),
                rhs_min: rhs_first.x(),
                rhs_max: rhs_last.x(),
            });
        }

        let locate = |xy: &XY| {
            locate_window(xy.points(), xl, xr)
                .map(|(left, right)| IndexRange::new(left, right))
                .inspect_err(|error| {
                    log::error!("border search failed inside overlap [{}, {}]: {}", xl, xr, error)
                })
        };

        Ok(Overlap { xl, xr, lhs: locate(lhs)?, rhs: locate(rhs)? })
    }

    pub fn xl(&self) -> f64 {
        self.xl
    }

    pub fn xr(&self) -> f64 {
        self.xr
    }

    /// Index range within the first curve passed to [`Overlap::resolve`].
    pub fn lhs(&self) -> IndexRange {
        self.lhs
    }

    /// Index range within the second curve passed to [`Overlap::resolve`].
    pub fn rhs(&self) -> IndexRange {
        self.rhs
    }
}
