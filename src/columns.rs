//! Column-oriented text reader
//!
//! Reads paired `(x, y)` samples from whitespace- or separator-delimited
//! text, one observation per line. A line contributes only when both
//! configured columns exist and parse as numbers, so headers, comments and
//! ragged rows are skipped.

use robust_core::Result;
use robust_regression::{LineFit, LineFitter};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, instrument, trace};

/// Which columns hold x and y, and how a line is split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Zero-based column of the x-values
    pub x_column: usize,
    /// Zero-based column of the y-values
    pub y_column: usize,
    /// Token separator; `None` splits on runs of whitespace
    pub separator: Option<char>,
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self {
            x_column: 0,
            y_column: 1,
            separator: None,
        }
    }
}

impl ColumnSpec {
    pub fn new(x_column: usize, y_column: usize) -> Self {
        Self {
            x_column,
            y_column,
            separator: None,
        }
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Extract the `(x, y)` pair from one line, if it has one
    pub fn parse_line(&self, line: &str) -> Option<(f64, f64)> {
        let tokens: Vec<&str> = match self.separator {
            Some(sep) => line.split(sep).map(str::trim).collect(),
            None => line.split_whitespace().collect(),
        };
        let x = tokens.get(self.x_column)?.parse().ok()?;
        let y = tokens.get(self.y_column)?.parse().ok()?;
        Some((x, y))
    }
}

/// Paired observations read from a data source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Sample {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    /// Fit a line to the sample
    pub fn fit_with<F: LineFitter + ?Sized>(&self, fitter: &F) -> Result<LineFit> {
        fitter.fit(&self.x, &self.y)
    }
}

/// Read a sample from any buffered reader
#[instrument(skip_all, fields(x_column = spec.x_column, y_column = spec.y_column))]
pub fn read_xy<R: BufRead>(reader: R, spec: &ColumnSpec) -> Result<Sample> {
    let mut sample = Sample::default();
    let mut skipped = 0usize;

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        match spec.parse_line(&line) {
            Some((x, y)) => sample.push(x, y),
            None => {
                trace!(line = number + 1, "skipping line without a numeric x/y pair");
                skipped += 1;
            }
        }
    }

    debug!(observations = sample.len(), skipped, "read sample");
    Ok(sample)
}

/// Parse a sample from text already in memory
pub fn parse_xy(text: &str, spec: &ColumnSpec) -> Sample {
    let mut sample = Sample::default();
    for (x, y) in text.lines().filter_map(|line| spec.parse_line(line)) {
        sample.push(x, y);
    }
    sample
}

/// Read a sample from a file
pub fn read_xy_path<P: AsRef<Path>>(path: P, spec: &ColumnSpec) -> Result<Sample> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening sample file");
    let file = File::open(path)?;
    read_xy(BufReader::new(file), spec)
}
