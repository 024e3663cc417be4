//! Reading a data file and fitting it end to end

use robust_linefit::prelude::*;
use robust_linefit::{fit, read_xy_path};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn write_data(name: &str, contents: &str) -> anyhow::Result<PathBuf> {
    let path = std::env::temp_dir().join(format!("robust-linefit-{}-{name}", std::process::id()));
    fs::write(&path, contents)?;
    Ok(path)
}

#[test]
fn test_file_with_outliers() -> anyhow::Result<()> {
    init_tracing();

    let mut contents = String::from("# time  signal\n");
    for i in 0..15 {
        let x = i as f64;
        let y = if i % 5 == 2 { 40.0 } else { 3.0 - 0.5 * x };
        contents.push_str(&format!("{x} {y}\n"));
    }
    contents.push_str("end of data\n");
    let path = write_data("outliers.dat", &contents)?;

    let sample = read_xy_path(&path, &ColumnSpec::default())?;
    fs::remove_file(&path)?;
    assert_eq!(sample.len(), 15);

    let lms = fit(FitMethod::LmsFast, &sample.x, &sample.y)?;
    assert_eq!(lms, LineFit::new(3.0, -0.5));

    let crude = sample.fit_with(&CrudeLms::new())?;
    assert_eq!(crude, lms);

    let ols = sample.fit_with(&LeastSquares::new())?;
    assert!(ols.intercept > 3.5);
    Ok(())
}

#[test]
fn test_csv_columns() -> anyhow::Result<()> {
    init_tracing();

    let path = write_data("columns.csv", "label,y,x\na,1,0\nb,3,1\nc,5,2\n")?;
    let spec = ColumnSpec::new(2, 1).with_separator(',');
    let sample = read_xy_path(&path, &spec)?;
    fs::remove_file(&path)?;

    let line = sample.fit_with(&LeastSquares::new())?;
    approx::assert_abs_diff_eq!(line.slope, 2.0, epsilon = 1e-12);
    approx::assert_abs_diff_eq!(line.intercept, 1.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_empty_file_is_insufficient() -> anyhow::Result<()> {
    let path = write_data("empty.dat", "no numbers here\n")?;
    let sample = read_xy_path(&path, &ColumnSpec::default())?;
    fs::remove_file(&path)?;

    let err = sample.fit_with(&LeastSquares::new()).unwrap_err();
    assert!(matches!(err, robust_linefit::Error::InsufficientData { .. }));
    Ok(())
}
