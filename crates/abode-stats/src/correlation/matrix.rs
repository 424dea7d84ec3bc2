//! Named correlation matrix

use super::CorrelationError;
use ndarray::Array2;
use std::collections::{BTreeMap, HashMap};

/// Square, symmetric matrix of correlation coefficients indexed by factor name.
///
/// Immutable once built. The factor order is the order the names were given
/// in; lookups by name go through an index.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    names: Vec<String>,
    index: HashMap<String, usize>,
    values: Array2<f64>,
}

impl CorrelationMatrix {
    /// Build a matrix from factor names and an N x N array of coefficients.
    ///
    /// # Errors
    /// Returns an error if the array is not square, its size differs from the
    /// number of names, or a name is repeated.
    pub fn new(names: Vec<String>, values: Array2<f64>) -> Result<Self, CorrelationError> {
        let (rows, cols) = values.dim();
        if rows != cols {
            return Err(CorrelationError::DimensionMismatch {
                expected: rows,
                actual: cols,
            });
        }
        if names.len() != rows {
            return Err(CorrelationError::DimensionMismatch {
                expected: names.len(),
                actual: rows,
            });
        }

        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(CorrelationError::DuplicateFactor(name.clone()));
            }
        }

        Ok(Self {
            names,
            index,
            values,
        })
    }

    /// Build a matrix from a mapping of factor name to (factor name to coefficient).
    ///
    /// Factors are ordered by name. Every row must carry an entry for every factor.
    ///
    /// # Errors
    /// Returns [`CorrelationError::MissingEntry`] if any pair is absent.
    pub fn from_nested(
        nested: &BTreeMap<String, BTreeMap<String, f64>>,
    ) -> Result<Self, CorrelationError> {
        let names: Vec<String> = nested.keys().cloned().collect();
        let n = names.len();
        let mut values = Array2::<f64>::zeros((n, n));

        for (i, row_name) in names.iter().enumerate() {
            let row = &nested[row_name];
            for (j, col_name) in names.iter().enumerate() {
                let value = row
                    .get(col_name)
                    .ok_or_else(|| CorrelationError::MissingEntry {
                        row: row_name.clone(),
                        column: col_name.clone(),
                    })?;
                values[[i, j]] = *value;
            }
        }

        Self::new(names, values)
    }

    /// Factor names in matrix order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of factors.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the matrix has no factors.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether `name` is one of the factors.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Position of a factor in matrix order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Coefficient between two factors.
    pub fn get(&self, row: &str, column: &str) -> Option<f64> {
        let i = self.position(row)?;
        let j = self.position(column)?;
        Some(self.values[[i, j]])
    }

    /// Correlations of one factor with every factor, itself included.
    pub fn row(&self, name: &str) -> Option<Vec<(&str, f64)>> {
        let i = self.position(name)?;
        Some(
            self.names
                .iter()
                .zip(self.values.row(i))
                .map(|(n, &v)| (n.as_str(), v))
                .collect(),
        )
    }

    /// Raw coefficient array.
    pub const fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Mapping-of-mappings form, e.g. for JSON export.
    pub fn to_nested(&self) -> BTreeMap<String, BTreeMap<String, f64>> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let cols = self
                    .names
                    .iter()
                    .enumerate()
                    .map(|(j, col)| (col.clone(), self.values[[i, j]]))
                    .collect();
                (row.clone(), cols)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_lookup_by_name() {
        let m = CorrelationMatrix::new(
            names(&["A", "B"]),
            array![[1.0, 0.3], [0.3, 1.0]],
        )
        .unwrap();

        assert_eq!(m.len(), 2);
        assert!(m.contains("B"));
        assert!(!m.contains("C"));
        assert_eq!(m.get("A", "B"), Some(0.3));
        assert_eq!(m.get("A", "C"), None);
        assert_eq!(m.row("B").unwrap(), vec![("A", 0.3), ("B", 1.0)]);
    }

    #[test]
    fn test_non_square_rejected() {
        let result = CorrelationMatrix::new(names(&["A", "B"]), Array2::zeros((2, 3)));
        assert!(matches!(
            result,
            Err(CorrelationError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_name_count_mismatch_rejected() {
        let result = CorrelationMatrix::new(names(&["A"]), Array2::eye(2));
        assert!(matches!(
            result,
            Err(CorrelationError::DimensionMismatch {
                expected: 1,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = CorrelationMatrix::new(names(&["A", "A"]), Array2::eye(2));
        assert!(matches!(result, Err(CorrelationError::DuplicateFactor(n)) if n == "A"));
    }

    #[test]
    fn test_nested_round_trip() {
        let mut nested = BTreeMap::new();
        nested.insert(
            "A".to_string(),
            BTreeMap::from([("A".to_string(), 1.0), ("B".to_string(), -0.4)]),
        );
        nested.insert(
            "B".to_string(),
            BTreeMap::from([("A".to_string(), -0.4), ("B".to_string(), 1.0)]),
        );

        let m = CorrelationMatrix::from_nested(&nested).unwrap();
        assert_eq!(m.get("B", "A"), Some(-0.4));
        assert_eq!(m.to_nested(), nested);
    }

    #[test]
    fn test_nested_missing_entry() {
        let mut nested = BTreeMap::new();
        nested.insert("A".to_string(), BTreeMap::from([("A".to_string(), 1.0)]));
        nested.insert(
            "B".to_string(),
            BTreeMap::from([("A".to_string(), 0.1), ("B".to_string(), 1.0)]),
        );

        assert!(matches!(
            CorrelationMatrix::from_nested(&nested),
            Err(CorrelationError::MissingEntry { row, column }) if row == "A" && column == "B"
        ));
    }
}
