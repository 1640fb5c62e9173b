use crate::math::curve::nonparametriccurve::nonparametriccurve::Point2D;
use super::xyerror::XYError;

/// Finds the inclusive index range of the samples whose X lies in `[x1, x2]`.
///
/// `data` must be sorted ascending by X. A bound beyond the data's extent
/// snaps to the first or last index. Fails with `InvalidRange` unless
/// `x1 < x2`, and with `BordersNotFound` when no sample falls inside: an
/// interval lying strictly between two neighbouring samples is an error,
/// not an empty (inverted) index pair.
pub fn find_borders(data: &[Point2D], x1: f64, x2: f64) -> Result<(usize, usize), XYError> {
    if !(x1 < x2) {
        return Err(XYError::InvalidRange { x1, x2 });
    }
    locate_window(data, x1, x2)
}

/// Same search as [`find_borders`] but also accepts the degenerate window
/// `x1 == x2`.
pub(crate) fn locate_window(data: &[Point2D], x1: f64, x2: f64) -> Result<(usize, usize), XYError> {
    let last = data.len().checked_sub(1).ok_or(XYError::EmptyData)?;
    let xmin = data[0].x();
    let xmax = data[last].x();

    let mut left = if x1 <= xmin { Some(0) } else { None };
    let mut right = if x2 >= xmax { Some(last) } else { None };
    if let (Some(l), Some(r)) = (left, right) {
        return Ok((l, r));
    }

    for (i, p) in data.iter().enumerate() {
        if left.is_none() && p.x() >= x1 {
            left = Some(i);
            if right.is_some() {
                break;
            }
        }
        if left.is_some() && right.is_none() && p.x() > x2 {
            right = i.checked_sub(1);
            break;
        }
    }

    match (left, right) {
        (Some(l), Some(r)) if l <= r => Ok((l, r)),
        _ => Err(XYError::BordersNotFound { x1, x2 }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(xs: &[f64]) -> Vec<Point2D> {
        xs.iter().map(|&x| Point2D::new(x, x * 10.0)).collect()
    }

    #[test]
    fn finds_inner_borders() {
        let data = points(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(find_borders(&data, 2.0, 4.0), Ok((1, 3)));
        assert_eq!(find_borders(&data, 1.5, 3.5), Ok((1, 2)));
    }

    #[test]
    fn bounds_beyond_data_snap_to_ends() {
        let data = points(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(find_borders(&data, 0.0, 10.0), Ok((0, 4)));
        assert_eq!(find_borders(&data, 1.0, 5.0), Ok((0, 4)));
        assert_eq!(find_borders(&data, -3.0, 2.5), Ok((0, 1)));
        assert_eq!(find_borders(&data, 3.5, 99.0), Ok((3, 4)));
    }

    #[test]
    fn repeated_abscissas_are_all_kept() {
        let data = points(&[1.0, 2.0, 2.0, 3.0]);
        assert_eq!(find_borders(&data, 2.0, 2.5), Ok((1, 2)));
    }

    #[test]
    fn rejects_reversed_or_empty_interval() {
        let data = points(&[1.0, 2.0, 3.0]);
        assert_eq!(find_borders(&data, 3.0, 2.0), Err(XYError::InvalidRange { x1: 3.0, x2: 2.0 }));
        assert_eq!(find_borders(&data, 2.0, 2.0), Err(XYError::InvalidRange { x1: 2.0, x2: 2.0 }));
        assert!(matches!(find_borders(&data, f64::NAN, 2.0), Err(XYError::InvalidRange { .. })));
    }

    #[test]
    fn interval_without_samples_is_not_found() {
        let data = points(&[1.0, 2.0, 3.0]);
        assert_eq!(find_borders(&data, 1.2, 1.8), Err(XYError::BordersNotFound { x1: 1.2, x2: 1.8 }));
        assert_eq!(find_borders(&data, -5.0, 0.5), Err(XYError::BordersNotFound { x1: -5.0, x2: 0.5 }));
        assert_eq!(find_borders(&data, 3.5, 4.0), Err(XYError::BordersNotFound { x1: 3.5, x2: 4.0 }));
    }

    #[test]
    fn empty_data_is_reported() {
        assert_eq!(find_borders(&[], 0.0, 1.0), Err(XYError::EmptyData));
    }

    #[test]
    fn degenerate_window_selects_matching_sample() {
        let data = points(&[1.0, 2.0, 3.0]);
        assert_eq!(locate_window(&data, 3.0, 3.0), Ok((2, 2)));
        assert_eq!(locate_window(&data, 1.0, 1.0), Ok((0, 0)));
        assert_eq!(locate_window(&data, 2.0, 2.0), Ok((1, 1)));
    }
}
