//! Gini impurity and the information gain of a split.
use crate::error::{Result, TreeError};
use crate::sample::{Row, ClassCounts, class_counts};


/// Returns the Gini impurity of the given rows,
/// `1 - sum_y (n_y / n)^2`.
#[inline]
pub fn gini(rows: &[&Row]) -> Result<f64> {
    if rows.is_empty() {
        return Err(TreeError::EmptyDataset("Gini impurity"));
    }
    let counts = class_counts(rows)?;
    Ok(gini_impurity(&counts))
}


/// Returns the gini-impurity of the given histogram.
#[inline(always)]
pub fn gini_impurity(counts: &ClassCounts) -> f64 {
    let total = counts.total() as f64;
    if total <= 0f64 { return 0f64; }

    let correct = counts.iter()
        .map(|(_, n)| (n as f64 / total).powi(2))
        .sum::<f64>();

    (1f64 - correct).max(0f64)
}


/// Returns the reduction of impurity obtained by splitting
/// a node of impurity `parent_impurity` into `left` and `right`.
/// Both sides must be non-empty.
pub fn info_gain(left: &[&Row], right: &[&Row], parent_impurity: f64)
    -> Result<f64>
{
    if left.is_empty() || right.is_empty() {
        return Err(TreeError::EmptyDataset("information gain"));
    }
    let p = left.len() as f64 / (left.len() + right.len()) as f64;
    let gain = parent_impurity
        - p * gini(left)?
        - (1f64 - p) * gini(right)?;
    Ok(gain)
}
