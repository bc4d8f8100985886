use serde::{Serialize, Deserialize};

use std::fmt;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};


/// A single cell of a table.
/// Numeric cells are compared by threshold (`>=`),
/// categorical cells by equality (`==`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A numeric feature value or label.
    Numeric(f64),
    /// A categorical feature value or label.
    Categorical(String),
}


/// The tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// See [`Value::Numeric`].
    Numeric,
    /// See [`Value::Categorical`].
    Categorical,
}


impl Value {
    /// Returns the tag of this value.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Numeric(_) => ValueKind::Numeric,
            Self::Categorical(_) => ValueKind::Categorical,
        }
    }


    /// Returns `true` if this value is numeric.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        self.kind() == ValueKind::Numeric
    }


    /// Returns the number if this value is numeric.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Numeric(x) => Some(*x),
            Self::Categorical(_) => None,
        }
    }


    /// Returns the string if this value is categorical.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Numeric(_) => None,
            Self::Categorical(s) => Some(s),
        }
    }


    /// Parses a raw text cell.
    /// Anything that parses as `f64` becomes numeric.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<f64>() {
            Ok(x) => Self::Numeric(x),
            Err(_) => Self::Categorical(raw.to_string()),
        }
    }
}


// Numeric values are ordered by `f64::total_cmp` and come before
// every categorical value; categorical values are ordered
// lexicographically. `Eq` and `Hash` agree with this order.
impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Numeric(a), Self::Numeric(b)) => a.total_cmp(b),
            (Self::Categorical(a), Self::Categorical(b)) => a.cmp(b),
            (Self::Numeric(_), Self::Categorical(_)) => Ordering::Less,
            (Self::Categorical(_), Self::Numeric(_)) => Ordering::Greater,
        }
    }
}


impl PartialOrd for Value {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}


impl PartialEq for Value {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}


impl Eq for Value {}


impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Numeric(x) => {
                0u8.hash(state);
                x.to_bits().hash(state);
            },
            Self::Categorical(s) => {
                1u8.hash(state);
                s.hash(state);
            },
        }
    }
}


impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(x) => write!(f, "{x}"),
            Self::Categorical(s) => write!(f, "{s}"),
        }
    }
}


impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Numeric => "numeric",
            Self::Categorical => "categorical",
        };
        write!(f, "{name}")
    }
}


impl From<f64> for Value {
    #[inline]
    fn from(x: f64) -> Self {
        Self::Numeric(x)
    }
}


impl From<f32> for Value {
    #[inline]
    fn from(x: f32) -> Self {
        Self::Numeric(x as f64)
    }
}


impl From<i32> for Value {
    #[inline]
    fn from(x: i32) -> Self {
        Self::Numeric(x as f64)
    }
}


impl From<i64> for Value {
    #[inline]
    fn from(x: i64) -> Self {
        Self::Numeric(x as f64)
    }
}


impl From<usize> for Value {
    #[inline]
    fn from(x: usize) -> Self {
        Self::Numeric(x as f64)
    }
}


impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Self::Categorical(s.to_string())
    }
}


impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Self {
        Self::Categorical(s)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_literal() {
        assert_eq!(Value::from(3).kind(), ValueKind::Numeric);
        assert_eq!(Value::from(0.5).kind(), ValueKind::Numeric);
        assert_eq!(Value::from("Red").kind(), ValueKind::Categorical);
    }

    #[test]
    fn test_parse_cell() {
        assert_eq!(Value::parse(" 3 "), Value::Numeric(3.0));
        assert_eq!(Value::parse("-1.5e2"), Value::Numeric(-150.0));
        assert_eq!(Value::parse("Yellow"), Value::from("Yellow"));
    }

    #[test]
    fn test_numeric_before_categorical() {
        let mut values = vec![
            Value::from("b"),
            Value::from(10),
            Value::from("a"),
            Value::from(-2.5),
        ];
        values.sort();
        let expected = vec![
            Value::from(-2.5),
            Value::from(10),
            Value::from("a"),
            Value::from("b"),
        ];
        assert_eq!(values, expected);
    }

    #[test]
    fn test_display_integral_number() {
        assert_eq!(Value::from(3).to_string(), "3");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from("Grape").to_string(), "Grape");
    }
}
