//! Every estimator reproduces a line that fits the sample exactly

mod common;

use common::*;
use robust_regression::test_data::collinear;
use robust_regression::{CrudeLms, FastLms, LeastSquares, LineFitter, OlsSolver};

#[test]
fn test_three_points_on_a_line() {
    let x = [1.0, 2.0, 3.0];
    let y = [3.0, 5.0, 7.0];

    let fitters: Vec<Box<dyn LineFitter>> = vec![
        Box::new(LeastSquares::new()),
        Box::new(LeastSquares::new().with_solver(OlsSolver::NormalEquations)),
        Box::new(CrudeLms::new()),
        Box::new(FastLms::new()),
    ];
    for fitter in &fitters {
        let line = fitter.fit(&x, &y).unwrap();
        assert_abs_diff_eq!(line.intercept, 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(line.slope, 2.0, epsilon = EPSILON);
    }
}

#[test]
fn test_collinear_sample() {
    let (x, y) = collinear(2.5, -0.75, 10);

    let crude = CrudeLms::new().fit_scored(&x, &y).unwrap();
    let fast = FastLms::new().fit_scored(&x, &y).unwrap();
    for fit in [crude, fast] {
        assert_abs_diff_eq!(fit.line.intercept, 2.5, epsilon = EPSILON);
        assert_abs_diff_eq!(fit.line.slope, -0.75, epsilon = EPSILON);
        assert_abs_diff_eq!(fit.score, 0.0, epsilon = EPSILON);
    }

    let ols = LeastSquares::new().fit(&x, &y).unwrap();
    assert_relative_eq!(ols.slope, -0.75, epsilon = EPSILON);
    assert_relative_eq!(ols.intercept, 2.5, epsilon = EPSILON);
}

#[test]
fn test_unsorted_collinear_sample() {
    let x = [4.0, -1.0, 2.0, 0.5, 3.0];
    let y: Vec<f64> = x.iter().map(|v| 3.0 - 2.0 * v).collect();

    for line in [
        CrudeLms::new().fit(&x, &y).unwrap(),
        FastLms::new().fit(&x, &y).unwrap(),
    ] {
        assert_abs_diff_eq!(line.intercept, 3.0, epsilon = EPSILON);
        assert_abs_diff_eq!(line.slope, -2.0, epsilon = EPSILON);
    }
}

#[test]
fn test_horizontal_line() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [4.0; 4];
    for line in [
        LeastSquares::new().fit(&x, &y).unwrap(),
        CrudeLms::new().fit(&x, &y).unwrap(),
        FastLms::new().fit(&x, &y).unwrap(),
    ] {
        assert_eq!(line.slope, 0.0);
        assert_eq!(line.intercept, 4.0);
    }
}
