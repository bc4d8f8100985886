//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::error::{Result, TreeError};
use crate::sample::{Row, ValueKind};


/// Check whether the training rows form a valid table,
/// and returns the value kind of each column.
///
/// The rows must be non-empty, share one width of at least `1`,
/// and hold one value kind per column.
pub(crate) fn check_rows(rows: &[Row]) -> Result<Vec<ValueKind>> {
    let first = rows.first()
        .ok_or(TreeError::EmptyDataset("a dataset"))?;

    let width = first.width();
    if width == 0 { return Err(TreeError::EmptyRow); }

    let kinds = first.values()
        .iter()
        .map(|value| value.kind())
        .collect::<Vec<_>>();

    for row in &rows[1..] {
        if row.width() != width {
            return Err(TreeError::WidthMismatch {
                expected: width.to_string(),
                found: row.width(),
            });
        }
        check_kinds(row.values().iter().map(|v| v.kind()), &kinds)?;
    }

    Ok(kinds)
}


/// Check whether `row` can be classified by a tree trained on
/// a table with the given column kinds (label last).
///
/// The row may omit the label or carry it; the label is not checked.
pub(crate) fn check_row(row: &Row, kinds: &[ValueKind]) -> Result<()> {
    let n_features = kinds.len().saturating_sub(1);
    let width = row.width();
    if width != n_features && width != n_features + 1 {
        return Err(TreeError::WidthMismatch {
            expected: format!("{n_features} or {}", n_features + 1),
            found: width,
        });
    }

    let features = row.values()
        .iter()
        .take(n_features)
        .map(|v| v.kind());
    check_kinds(features, &kinds[..n_features])
}


fn check_kinds<I>(found: I, expected: &[ValueKind]) -> Result<()>
    where I: Iterator<Item = ValueKind>
{
    for (column, (found, &expected)) in found.zip(expected).enumerate() {
        if found != expected {
            return Err(TreeError::SchemaMismatch { column, expected, found });
        }
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::row;

    #[test]
    fn test_rows_success_01() {
        let rows = vec![row!["Green", 3, "Apple"], row!["Red", 1, "Grape"]];
        let kinds = check_rows(&rows).unwrap();
        assert_eq!(
            kinds,
            vec![ValueKind::Categorical, ValueKind::Numeric, ValueKind::Categorical]
        );
    }

    #[test]
    fn test_rows_failure_empty() {
        let res = check_rows(&[]);
        assert!(matches!(res, Err(TreeError::EmptyDataset(_))));
    }

    #[test]
    fn test_rows_failure_ragged() {
        let rows = vec![row!["Green", 3, "Apple"], row!["Red", "Grape"]];
        let res = check_rows(&rows);
        assert!(matches!(res, Err(TreeError::WidthMismatch { found: 2, .. })));
    }

    #[test]
    fn test_rows_failure_kind() {
        let rows = vec![row!["Green", 3, "Apple"], row!["Red", "big", "Grape"]];
        let res = check_rows(&rows);
        assert!(matches!(res, Err(TreeError::SchemaMismatch { column: 1, .. })));
    }

    #[test]
    fn test_row_with_or_without_label() {
        let kinds = [ValueKind::Categorical, ValueKind::Numeric, ValueKind::Categorical];
        assert!(check_row(&row!["Red", 2], &kinds).is_ok());
        assert!(check_row(&row!["Red", 2, "Grape"], &kinds).is_ok());
        // The label column is never checked.
        assert!(check_row(&row!["Red", 2, 7], &kinds).is_ok());
        assert!(check_row(&row!["Red"], &kinds).is_err());
        assert!(check_row(&row![2, "Red"], &kinds).is_err());
    }
}
