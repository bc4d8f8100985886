use serde::{Serialize, Deserialize};

use std::fmt;
use std::ops::Index;

use crate::error::{Result, TreeError};
use super::value::Value;


/// An ordered sequence of feature values.
/// In a training set the last value is the label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(Vec<Value>);


/// Builds a [`Row`] from a list of literals.
/// Each item is converted by `Value::from`.
///
/// ```
/// use ginitree::{row, Value};
/// let row = row!["Green", 3, "Apple"];
/// assert_eq!(row[1], Value::Numeric(3.0));
/// ```
#[macro_export]
macro_rules! row {
    ($($value:expr),* $(,)?) => {
        $crate::Row::new(vec![$($crate::Value::from($value)),*])
    };
}


impl Row {
    /// Construct a new row.
    #[inline]
    pub fn new(values: Vec<Value>) -> Self {
        Self(values)
    }


    /// Number of columns, label included.
    #[inline]
    pub fn width(&self) -> usize {
        self.0.len()
    }


    /// Returns the value at `column`,
    /// or `TreeError::ColumnIndex` if the row is too short.
    #[inline]
    pub fn get(&self, column: usize) -> Result<&Value> {
        self.0.get(column)
            .ok_or(TreeError::ColumnIndex { column, width: self.width() })
    }


    /// Returns the last value.
    #[inline]
    pub fn label(&self) -> Result<&Value> {
        self.0.last().ok_or(TreeError::EmptyRow)
    }


    /// Returns every value but the last one.
    #[inline]
    pub fn features(&self) -> &[Value] {
        match self.0.split_last() {
            Some((_, features)) => features,
            None => &[],
        }
    }


    /// Returns all values.
    #[inline]
    pub fn values(&self) -> &[Value] {
        &self.0[..]
    }


    pub(crate) fn values_mut(&mut self) -> &mut Vec<Value> {
        &mut self.0
    }
}


impl Index<usize> for Row {
    type Output = Value;
    #[inline]
    fn index(&self, column: usize) -> &Self::Output {
        &self.0[column]
    }
}


impl From<Vec<Value>> for Row {
    #[inline]
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}


impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 { write!(f, ", ")?; }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
