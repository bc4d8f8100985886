//! Defines the `Classifier` trait.
use crate::error::{Result, TreeError};
use crate::sample::{ClassCounts, Row, Value};


/// A trait that defines the behavior of a trained classifier.
pub trait Classifier {
    /// Returns the label histogram of the leaf `row` falls into.
    fn classify(&self, row: &Row) -> Result<&ClassCounts>;


    /// Predicts the label of the given row:
    /// the most frequent label of its leaf.
    fn predict(&self, row: &Row) -> Result<Value> {
        self.classify(row)?
            .majority()
            .cloned()
            .ok_or(TreeError::EmptyDataset("a prediction"))
    }


    /// Predicts the labels of the given rows.
    fn predict_all(&self, rows: &[Row]) -> Result<Vec<Value>> {
        rows.iter()
            .map(|row| self.predict(row))
            .collect()
    }
}
