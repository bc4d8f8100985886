use serde::{Serialize, Deserialize};

use std::fmt;
use std::collections::BTreeMap;

use super::value::Value;


/// The label histogram of a set of rows.
/// Labels are kept in `Value` order, so iteration is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "Vec<(Value, usize)>", from = "Vec<(Value, usize)>")]
pub struct ClassCounts {
    counts: BTreeMap<Value, usize>,
}


impl ClassCounts {
    /// Construct an empty histogram.
    #[inline]
    pub fn new() -> Self {
        Self { counts: BTreeMap::new() }
    }


    /// Count one more occurrence of `label`.
    #[inline]
    pub fn increment(&mut self, label: &Value) {
        match self.counts.get_mut(label) {
            Some(count) => { *count += 1; },
            None => { self.counts.insert(label.clone(), 1); },
        }
    }


    /// Occurrences of `label` (`0` if unseen).
    #[inline]
    pub fn get(&self, label: &Value) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }


    /// Returns `true` if `label` occurs at least once.
    #[inline]
    pub fn contains(&self, label: &Value) -> bool {
        self.counts.contains_key(label)
    }


    /// Total number of counted rows.
    #[inline]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }


    /// Number of distinct labels.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }


    /// Returns `true` if nothing was counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }


    /// Iterate over `(label, count)` pairs in label order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&Value, usize)> + '_ {
        self.counts.iter().map(|(label, &count)| (label, count))
    }


    /// The most frequent label.
    /// Ties go to the smallest label in `Value` order.
    pub fn majority(&self) -> Option<&Value> {
        let mut best: Option<(&Value, usize)> = None;
        for (label, count) in self.iter() {
            match best {
                Some((_, c)) if c >= count => {},
                _ => { best = Some((label, count)); },
            }
        }
        best.map(|(label, _)| label)
    }


    /// Empirical probability of each label.
    pub fn probabilities(&self) -> Vec<(&Value, f64)> {
        let total = self.total() as f64;
        self.iter()
            .map(|(label, count)| (label, count as f64 / total))
            .collect()
    }


    /// Percentage of each label, truncated toward zero.
    pub fn percentages(&self) -> Vec<(&Value, u32)> {
        let total = self.total() as f64;
        self.iter()
            .map(|(label, count)| {
                let percent = count as f64 / total * 100f64;
                (label, percent as u32)
            })
            .collect()
    }
}


impl<'a> Extend<&'a Value> for ClassCounts {
    fn extend<I: IntoIterator<Item = &'a Value>>(&mut self, labels: I) {
        labels.into_iter().for_each(|label| self.increment(label));
    }
}


impl From<Vec<(Value, usize)>> for ClassCounts {
    fn from(pairs: Vec<(Value, usize)>) -> Self {
        let mut counts = BTreeMap::new();
        for (label, count) in pairs {
            *counts.entry(label).or_insert(0) += count;
        }
        Self { counts }
    }
}


impl From<ClassCounts> for Vec<(Value, usize)> {
    fn from(counts: ClassCounts) -> Self {
        counts.counts.into_iter().collect()
    }
}


impl fmt::Display for ClassCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (label, count)) in self.iter().enumerate() {
            if i > 0 { write!(f, ", ")?; }
            write!(f, "{label}: {count}")?;
        }
        write!(f, "}}")
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, usize)]) -> ClassCounts {
        pairs.iter()
            .map(|&(label, count)| (Value::from(label), count))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_increment_and_total() {
        let mut c = ClassCounts::new();
        c.extend([Value::from("Apple"), Value::from("Grape"), Value::from("Apple")].iter());
        assert_eq!(c.get(&Value::from("Apple")), 2);
        assert_eq!(c.get(&Value::from("Grape")), 1);
        assert_eq!(c.get(&Value::from("Lemon")), 0);
        assert_eq!(c.total(), 3);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_majority_tie_goes_to_smallest_label() {
        let c = counts(&[("Lemon", 1), ("Apple", 1)]);
        assert_eq!(c.majority(), Some(&Value::from("Apple")));

        let c = counts(&[("Lemon", 3), ("Apple", 1)]);
        assert_eq!(c.majority(), Some(&Value::from("Lemon")));

        assert_eq!(ClassCounts::new().majority(), None);
    }

    #[test]
    fn test_percentages_truncate() {
        let c = counts(&[("a", 1), ("b", 2)]);
        let res = c.percentages()
            .into_iter()
            .map(|(_, p)| p)
            .collect::<Vec<_>>();
        assert_eq!(res, vec![33, 66]);
    }

    #[test]
    fn test_display() {
        let c = counts(&[("Lemon", 1), ("Apple", 1)]);
        assert_eq!(c.to_string(), "{Apple: 1, Lemon: 1}");
    }
}
