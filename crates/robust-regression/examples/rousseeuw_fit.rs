//! Least squares versus least median of squares on Rousseeuw's example
//!
//! Run with `RUST_LOG=robust_regression=debug` to see the search statistics.

use robust_regression::test_data::{rousseeuw, SIMPLE_LINE};
use robust_regression::{CrudeLms, FastLms, LeastSquares, LineFitter, LineFitterProperties};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed = std::env::args()
        .nth(1)
        .map(|s| s.parse::<u64>())
        .transpose()?
        .unwrap_or(42);
    let (x, y) = rousseeuw(seed);

    println!("=== Rousseeuw's leverage example (seed {seed}) ===\n");
    println!("  {} points, 30 near {SIMPLE_LINE}, 20 clustered around (7, 2)\n", x.len());

    let fitters: Vec<Box<dyn LineFitter>> = vec![
        Box::new(LeastSquares::new()),
        Box::new(CrudeLms::new()),
        Box::new(FastLms::new()),
    ];

    for fitter in &fitters {
        let line = fitter.fit(&x, &y)?;
        println!("{}", fitter.name());
        println!("  {line}");
        println!(
            "  median |residual| = {:.4}, slope error = {:.4}",
            line.median_abs_residual(&x, &y),
            (line.slope - SIMPLE_LINE.slope).abs()
        );
    }

    Ok(())
}
