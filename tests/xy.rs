use std::collections::HashMap;

use approx::{assert_abs_diff_eq, assert_relative_eq};

use xydata::io::parser::ColumnSelection;
use xydata::math::curve::nonparametriccurve::nonparametriccurve::Point2D;
use xydata::math::curve::nonparametriccurve::piecewisepolynomial::PolynomialType;
use xydata::xy::arithmetic::ArithmeticOperation;
use xydata::xy::xy::XY;
use xydata::xy::xyerror::XYError;

/// Gaussian peak of height 10 at x = 14 on a baseline of 5.
fn peak(x: f64) -> f64 {
    5.0 + 10.0 * (-(x - 14.0).powi(2) / 50.0).exp()
}

fn sampled(offset: f64) -> XY {
    (1..=20)
        .map(|i| {
            let x = i as f64 + offset;
            Point2D::new(x, peak(x))
        })
        .collect()
}

fn wide_peak() -> XY {
    XY::from(vec![
        (1.0, 5.13945037358082),
        (2.0, 5.35474279421912),
        (3.0, 5.81654107234731),
        (4.0, 6.70064254215682),
        (5.0, 8.20493034257966),
        (6.0, 10.465057082495),
        (7.0, 13.4322089931297),
        (8.0, 16.7722255225981),
        (9.0, 19.8712110291761),
        (10.0, 21.9982671886829),
        (11.0, 22.5805929315872),
        (12.0, 21.452539296646),
        (13.0, 18.931661287365),
        (14.0, 15.6743989266113),
        (15.0, 12.4003882231),
        (16.0, 9.64233128392267),
        (17.0, 7.63504664116284),
        (18.0, 6.35335283236613),
        (19.0, 5.62893290550818),
        (20.0, 5.26446496710796),
    ])
}

#[test]
fn shifted_copy_cancels_after_spline_resampling() {
    let grid = sampled(0.0);
    let shifted = sampled(0.431);

    let diff = shifted.subtract(&grid).unwrap();
    assert_eq!(diff.len(), 19);
    assert_abs_diff_eq!(diff.first_point().unwrap().x(), 1.431, epsilon = 1e-12);
    assert_abs_diff_eq!(diff.last_point().unwrap().x(), 19.431, epsilon = 1e-12);
    for p in diff.points() {
        assert!(p.y().abs() < 0.05, "residual {} at x = {}", p.y(), p.x());
        if (3.0..18.5).contains(&p.x()) {
            assert!(p.y().abs() < 2e-3, "interior residual {} at x = {}", p.y(), p.x());
        }
    }
}

#[test]
fn linear_resampling_is_coarser_inside() {
    let grid = sampled(0.0);
    let shifted = sampled(0.431);

    let cubic = shifted.combine(&grid, ArithmeticOperation::Subtract).unwrap();
    let linear = shifted
        .combine_with(&grid, ArithmeticOperation::Subtract, PolynomialType::Linear)
        .unwrap();
    assert_eq!(cubic.xs(), linear.xs());

    let worst = |xy: &XY| {
        xy.points()
            .iter()
            .filter(|p| (3.0..18.5).contains(&p.x()))
            .map(|p| p.y().abs())
            .fold(0.0, f64::max)
    };
    assert!(worst(&linear) < 0.06);
    assert!(worst(&cubic) < worst(&linear));
}

#[test]
fn aligned_grids_combine_sample_by_sample() {
    let a = sampled(0.0);
    let b = wide_peak();

    let sum = (&a + &b).unwrap();
    assert_eq!(sum.xs(), a.xs());
    for ((s, p), q) in sum.points().iter().zip(a.points()).zip(b.points()) {
        assert_eq!(s.y(), p.y() + q.y());
    }
    assert_eq!(sum, (&b + &a).unwrap());

    let ratio = (&b / &b).unwrap();
    assert!(ratio.ys().iter().all(|&y| y == 1.0));

    let zero = (&a - &a).unwrap();
    assert!(zero.ys().iter().all(|&y| y == 0.0));

    let product = (&a * &b).unwrap();
    assert_relative_eq!(product.ys()[9], a.ys()[9] * b.ys()[9]);
}

#[test]
fn result_follows_the_left_operand() {
    let mut lhs = wide_peak();
    lhs.insert_meta("sample", "B");
    let mut rhs = sampled(0.431);
    rhs.insert_meta("sample", "A");

    let result = lhs.combine(&rhs, ArithmeticOperation::Add).unwrap();
    assert_eq!(result.meta().get("sample").map(String::as_str), Some("B"));
    assert_eq!(result.xs(), (2..=20).map(f64::from).collect::<Vec<_>>());
    assert_relative_eq!(result.ys()[0], wide_peak().ys()[1] + peak(2.0), max_relative = 2e-3);

    // operands are not mutated
    assert_eq!(lhs.len(), 20);
    assert_eq!(rhs.len(), 20);
}

#[test]
fn combining_disjoint_curves_fails() {
    let a = XY::from(vec![(1.0, 1.0), (2.0, 1.0)]);
    let b = XY::from(vec![(3.0, 1.0), (4.0, 1.0)]);
    for op in ["+", "sub", "multiply", "/"] {
        let op: ArithmeticOperation = op.parse().unwrap();
        assert!(matches!(a.combine(&b, op), Err(XYError::NoOverlap { .. })));
    }
    assert!("modulo".parse::<ArithmeticOperation>().is_err());
}

#[test]
fn trapezoidal_area_tracks_the_integral() {
    let xy = sampled(0.0);
    let area = xy.area();
    // exact integral over [1, 20] via erf
    assert_relative_eq!(area, 205.325376, max_relative = 1e-3);

    let mut left = xy.clone();
    left.cut(1.0, 14.0).unwrap();
    let mut right = xy.clone();
    right.cut(14.0, 20.0).unwrap();
    assert_relative_eq!(left.area() + right.area(), area, max_relative = 1e-12);
}

#[test]
fn maximum_of_the_peak() {
    let xy = sampled(0.0);
    let max = xy.max_and_eps().unwrap();
    assert_eq!((max.x_max(), max.y_max()), (14.0, 15.0));
    assert_relative_eq!(max.eps(), peak(1.0));
    assert_eq!(wide_peak().max_y().unwrap().x(), 11.0);
}

#[test]
fn noise_from_a_spectrum_file() {
    let baseline = [(1.0, 10), (0.9, 5), (1.1, 4)];
    let mut ys: Vec<f64> = baseline
        .iter()
        .flat_map(|&(y, n)| std::iter::repeat_n(y, n))
        .collect();
    ys.extend([3.0, 5.0, 8.0, 5.0, 3.0]);

    let mut text = String::from("# exported spectrum\nSample\tGaN\n");
    for (i, y) in ys.iter().enumerate() {
        text.push_str(&format!("{}\t{}\n", 400 + i, y));
    }
    let path = std::env::temp_dir().join(format!("xydata-noise-{}.tsv", std::process::id()));
    std::fs::write(&path, text).unwrap();
    let xy = XY::from_file(&path, ColumnSelection::default()).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(xy.len(), ys.len());
    assert_eq!(xy.meta(), &HashMap::from([("Sample".to_owned(), "GaN".to_owned())]));
    assert_relative_eq!(xy.noise().unwrap(), 1.0, max_relative = 1e-12);
    assert_eq!(xy.max_y().unwrap(), Point2D::new(421.0, 8.0));
}

#[test]
fn cut_then_write_and_read_back() {
    let mut xy = wide_peak();
    xy.insert_meta("Sample", "GaN");
    xy.cut(4.5, 9.0).unwrap();
    assert_eq!(xy.xs(), vec![5.0, 6.0, 7.0, 8.0, 9.0]);

    let back: XY = xy.to_string().parse().unwrap();
    assert_eq!(back.xs(), xy.xs());
    assert_eq!(back.meta(), xy.meta());
    for (p, q) in back.points().iter().zip(xy.points()) {
        assert_abs_diff_eq!(p.y(), q.y(), epsilon = 5e-7);
    }
}
