//! Defines the splitting rule held by each decision node.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::error::{Result, TreeError};
use crate::sample::{Row, Value};


/// The comparison a [`Question`] performs.
/// It is fixed by the kind of the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    /// `row[column] == threshold`, for categorical thresholds.
    Equal,
    /// `row[column] >= threshold`, for numeric thresholds.
    GreaterOrEqual,
}


impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            Self::Equal => "==",
            Self::GreaterOrEqual => ">=",
        };
        write!(f, "{op}")
    }
}


/// A test on a single column of a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    column: usize,
    threshold: Value,
    comparison: Comparison,
}


impl Question {
    /// Construct a question on `column`.
    /// A numeric threshold asks `>=`, a categorical one asks `==`.
    #[inline]
    pub fn new<V: Into<Value>>(column: usize, threshold: V) -> Self {
        let threshold = threshold.into();
        let comparison = match threshold {
            Value::Numeric(_) => Comparison::GreaterOrEqual,
            Value::Categorical(_) => Comparison::Equal,
        };
        Self { column, threshold, comparison }
    }


    /// The column this question looks at.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }


    /// The value compared against.
    #[inline]
    pub fn threshold(&self) -> &Value {
        &self.threshold
    }


    /// The comparison operator.
    #[inline]
    pub fn comparison(&self) -> Comparison {
        self.comparison
    }


    /// Returns `true` if `row` answers this question positively.
    ///
    /// Fails with `ColumnIndex` if the row is too short,
    /// and with `SchemaMismatch` if the cell's kind
    /// differs from the threshold's.
    pub fn matches(&self, row: &Row) -> Result<bool> {
        let value = row.get(self.column)?;
        match (self.comparison, &self.threshold, value) {
            (Comparison::GreaterOrEqual, Value::Numeric(t), Value::Numeric(v)) => {
                Ok(v >= t)
            },
            (Comparison::Equal, Value::Categorical(t), Value::Categorical(v)) => {
                Ok(v == t)
            },
            _ => {
                Err(TreeError::SchemaMismatch {
                    column: self.column,
                    expected: self.threshold.kind(),
                    found: value.kind(),
                })
            },
        }
    }


    /// Returns a displayable form that names the column
    /// by `header[column]`.
    #[inline]
    pub fn describe<'a>(&'a self, header: &'a [String]) -> Described<'a> {
        Described { question: self, header }
    }
}


impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Is column {} {} {}?",
            self.column, self.comparison, self.threshold
        )
    }
}


/// A [`Question`] paired with the column names.
/// See [`Question::describe`].
pub struct Described<'a> {
    question: &'a Question,
    header: &'a [String],
}


impl fmt::Display for Described<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let q = self.question;
        match self.header.get(q.column) {
            Some(name) => {
                write!(f, "Is {name} {} {}?", q.comparison, q.threshold)
            },
            None => write!(f, "{q}"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::row;

    #[test]
    fn test_comparison_follows_threshold_kind() {
        assert_eq!(Question::new(1, 3).comparison(), Comparison::GreaterOrEqual);
        assert_eq!(Question::new(0, "Red").comparison(), Comparison::Equal);
    }

    #[test]
    fn test_numeric_match_is_greater_or_equal() {
        let q = Question::new(1, 3);
        assert!(q.matches(&row!["Green", 3, "Apple"]).unwrap());
        assert!(q.matches(&row!["Yellow", 4, "Apple"]).unwrap());
        assert!(!q.matches(&row!["Red", 1, "Grape"]).unwrap());
    }

    #[test]
    fn test_categorical_match_is_equality() {
        let q = Question::new(0, "Red");
        assert!(q.matches(&row!["Red", 1, "Grape"]).unwrap());
        assert!(!q.matches(&row!["Yellow", 3, "Lemon"]).unwrap());
    }

    #[test]
    fn test_column_out_of_range() {
        let q = Question::new(4, "Red");
        let res = q.matches(&row!["Red", 1, "Grape"]);
        assert!(matches!(res, Err(TreeError::ColumnIndex { column: 4, width: 3 })));
    }

    #[test]
    fn test_kind_mismatch() {
        let q = Question::new(0, 2.5);
        let res = q.matches(&row!["Red", 1, "Grape"]);
        assert!(matches!(res, Err(TreeError::SchemaMismatch { column: 0, .. })));
    }

    #[test]
    fn test_describe_with_header() {
        let header = ["color", "diameter", "label"]
            .map(String::from);
        let q = Question::new(1, 3);
        assert_eq!(q.describe(&header).to_string(), "Is diameter >= 3?");
        let q = Question::new(0, "Red");
        assert_eq!(q.describe(&header).to_string(), "Is color == Red?");
        assert_eq!(q.to_string(), "Is column 0 == Red?");
    }
}
