//! Combined indicator dataset
//!
//! A [`Dataset`] holds the numeric columns of the combined, time-aligned
//! indicator table. Every kept column is stored as `Float64`; nulls are
//! surfaced as `NaN` when values are extracted so that downstream statistics
//! can apply their own missing-value rules (pairwise for correlation,
//! listwise for regression).

use crate::error::{DataError, Result};
use ndarray::{Array1, Array2};
use polars::prelude::*;
use std::path::Path;
use tracing::{debug, warn};

/// Number of rows polars inspects when inferring the CSV schema.
const DEFAULT_INFER_SCHEMA_LENGTH: usize = 1000;

/// Numeric view of the combined indicator table.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Where the data came from (file path or a caller-supplied label)
    source: String,
    /// Numeric columns only, all cast to `Float64`
    frame: DataFrame,
    /// Numeric column names in file order
    names: Vec<String>,
    /// Columns dropped because they are not numeric
    skipped: Vec<String>,
}

impl Dataset {
    /// Load a dataset from a CSV file with a header row.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, has no rows,
    /// or has no numeric columns.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        // Surface a missing file as an IO error rather than a polars one.
        std::fs::metadata(path)?;

        let frame = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(DEFAULT_INFER_SCHEMA_LENGTH))
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()?;

        debug!(
            path = %path.display(),
            rows = frame.height(),
            columns = frame.width(),
            "read csv"
        );

        Self::from_frame_with_source(frame, path.display().to_string())
    }

    /// Build a dataset from an in-memory frame.
    ///
    /// # Errors
    /// Returns an error if the frame has no rows or no numeric columns.
    pub fn from_frame(frame: DataFrame) -> Result<Self> {
        Self::from_frame_with_source(frame, "<memory>".to_string())
    }

    fn from_frame_with_source(frame: DataFrame, source: String) -> Result<Self> {
        if frame.height() == 0 {
            return Err(DataError::EmptyDataset(source));
        }

        let mut kept = Vec::with_capacity(frame.width());
        let mut names = Vec::with_capacity(frame.width());
        let mut skipped = Vec::new();

        for column in frame.get_columns() {
            let name = column.name().to_string();
            if is_numeric(column.dtype()) {
                let series = column
                    .as_materialized_series()
                    .cast(&DataType::Float64)?;
                kept.push(Column::from(series));
                names.push(name);
            } else {
                warn!(column = %name, dtype = %column.dtype(), "skipping non-numeric column");
                skipped.push(name);
            }
        }

        if kept.is_empty() {
            return Err(DataError::NoNumericColumns(source));
        }

        Ok(Self {
            source,
            frame: DataFrame::new(kept)?,
            names,
            skipped,
        })
    }

    /// Where the dataset was loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Numeric column names in file order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Columns that were present but not numeric.
    pub fn skipped_columns(&self) -> &[String] {
        &self.skipped
    }

    /// Number of observations (rows).
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Number of numeric columns.
    pub fn width(&self) -> usize {
        self.names.len()
    }

    /// Check whether a numeric column exists.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Underlying numeric frame.
    pub const fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Values of one column, `NaN` where the cell is missing.
    ///
    /// # Errors
    /// Returns [`DataError::MissingColumn`] if `name` is not a numeric column.
    pub fn column(&self, name: &str) -> Result<Vec<f64>> {
        if !self.contains(name) {
            return Err(DataError::MissingColumn(name.to_string()));
        }
        let values = self.frame.column(name)?.as_materialized_series().f64()?;
        Ok(values
            .into_iter()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect())
    }

    /// Observations x columns matrix for the requested columns.
    ///
    /// # Errors
    /// Returns [`DataError::MissingColumn`] if any name is unknown.
    pub fn columns<S: AsRef<str>>(&self, names: &[S]) -> Result<Array2<f64>> {
        let columns = names
            .iter()
            .map(|name| self.column(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Array2::from_shape_fn(
            (self.height(), columns.len()),
            |(row, col)| columns[col][row],
        ))
    }

    /// Matrix of every numeric column, in [`Self::column_names`] order.
    pub fn numeric_matrix(&self) -> Result<Array2<f64>> {
        self.columns(&self.names)
    }

    /// Response vector and regressor matrix restricted to complete rows.
    ///
    /// A row is kept only if the target and every regressor are finite in it.
    ///
    /// # Errors
    /// Returns [`DataError::MissingColumn`] if the target or a regressor is unknown.
    pub fn complete_rows<S: AsRef<str>>(
        &self,
        target: &str,
        regressors: &[S],
    ) -> Result<(Array1<f64>, Array2<f64>)> {
        let y = self.column(target)?;
        let x = self.columns(regressors)?;

        let keep: Vec<usize> = (0..self.height())
            .filter(|&row| y[row].is_finite() && x.row(row).iter().all(|v| v.is_finite()))
            .collect();

        let dropped = self.height() - keep.len();
        if dropped > 0 {
            debug!(response = target, dropped, kept = keep.len(), "dropped incomplete rows");
        }

        let response = keep.iter().map(|&row| y[row]).collect::<Array1<f64>>();
        let design = Array2::from_shape_fn((keep.len(), x.ncols()), |(i, j)| x[[keep[i], j]]);

        Ok((response, design))
    }
}

/// Integer and floating point dtypes are treated as indicator columns.
const fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int32
            | DataType::Int64
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> DataFrame {
        df!(
            "DATE" => ["2000-01-01", "2000-04-01", "2000-07-01", "2000-10-01"],
            "CSUSHPISA" => [100.0, 102.0, 105.0, 109.0],
            "UNRATE" => [Some(4.0), None, Some(3.9), Some(3.8)],
            "POP" => [280i64, 281, 282, 283]
        )
        .unwrap()
    }

    #[test]
    fn test_non_numeric_columns_are_skipped() {
        let dataset = Dataset::from_frame(sample_frame()).unwrap();
        assert_eq!(dataset.column_names(), ["CSUSHPISA", "UNRATE", "POP"]);
        assert_eq!(dataset.skipped_columns(), ["DATE"]);
        assert_eq!(dataset.height(), 4);
        assert_eq!(dataset.width(), 3);
    }

    #[test]
    fn test_integer_column_is_cast() {
        let dataset = Dataset::from_frame(sample_frame()).unwrap();
        assert_eq!(dataset.column("POP").unwrap(), vec![280.0, 281.0, 282.0, 283.0]);
    }

    #[test]
    fn test_nulls_become_nan() {
        let dataset = Dataset::from_frame(sample_frame()).unwrap();
        let unrate = dataset.column("UNRATE").unwrap();
        assert!(unrate[1].is_nan());
        assert_eq!(unrate[0], 4.0);
    }

    #[test]
    fn test_missing_column() {
        let dataset = Dataset::from_frame(sample_frame()).unwrap();
        assert!(matches!(
            dataset.column("DATE"),
            Err(DataError::MissingColumn(name)) if name == "DATE"
        ));
    }

    #[test]
    fn test_complete_rows_drops_incomplete() {
        let dataset = Dataset::from_frame(sample_frame()).unwrap();
        let (y, x) = dataset.complete_rows("CSUSHPISA", &["UNRATE", "POP"]).unwrap();
        assert_eq!(y.len(), 3);
        assert_eq!(x.dim(), (3, 2));
        assert_eq!(y[1], 105.0);
        assert_eq!(x[[1, 1]], 282.0);
    }

    #[test]
    fn test_numeric_matrix_shape() {
        let dataset = Dataset::from_frame(sample_frame()).unwrap();
        let matrix = dataset.numeric_matrix().unwrap();
        assert_eq!(matrix.dim(), (4, 3));
        assert_eq!(matrix[[3, 0]], 109.0);
    }

    #[test]
    fn test_no_numeric_columns() {
        let frame = df!("DATE" => ["2000-01-01"]).unwrap();
        assert!(matches!(
            Dataset::from_frame(frame),
            Err(DataError::NoNumericColumns(_))
        ));
    }

    #[test]
    fn test_empty_frame() {
        let frame = df!("CSUSHPISA" => Vec::<f64>::new()).unwrap();
        assert!(matches!(
            Dataset::from_frame(frame),
            Err(DataError::EmptyDataset(_))
        ));
    }
}
