//! DataProvider Trait
//!
//! Read-only access to caller-owned rows. The table never mutates or
//! copies rows; every pipeline stage works on row indices.

use std::sync::Arc;

/// Trait for providing rows to the DataTable
pub trait DataProvider {
    type Row;

    /// Get the total number of rows
    fn len(&self) -> usize;

    /// Check if empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a row by index
    fn row(&self, index: usize) -> Option<&Self::Row>;

    /// Iterate rows with their indices in insertion order
    fn iter(&self) -> impl Iterator<Item = (usize, &Self::Row)> {
        (0..self.len()).filter_map(move |i| self.row(i).map(|row| (i, row)))
    }
}

/// Simple in-memory data provider over shared rows
#[derive(Debug)]
pub struct VecDataProvider<R> {
    rows: Arc<Vec<R>>,
}

impl<R> VecDataProvider<R> {
    /// Create a new VecDataProvider
    pub fn new(rows: Vec<R>) -> Self {
        Self {
            rows: Arc::new(rows),
        }
    }
}

impl<R> Clone for VecDataProvider<R> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<R> DataProvider for VecDataProvider<R> {
    type Row = R;

    fn len(&self) -> usize {
        self.rows.len()
    }

    fn row(&self, index: usize) -> Option<&Self::Row> {
        self.rows.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_provider() {
        let provider = VecDataProvider::new(vec!["a", "b", "c"]);
        assert_eq!(provider.len(), 3);
        assert_eq!(provider.row(1), Some(&"b"));
        assert_eq!(provider.row(3), None);

        let indices: Vec<usize> = provider.iter().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_clone_shares_rows() {
        let provider = VecDataProvider::new(vec![1, 2]);
        let copy = provider.clone();
        assert!(Arc::ptr_eq(&provider.rows, &copy.rows));
        assert_eq!(copy.row(1), Some(&2));
        assert!(!provider.is_empty());
    }
}
