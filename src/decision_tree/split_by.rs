//! Exhaustive search for the question that maximizes information gain.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::error::{Result, TreeError};
use crate::sample::{Row, unique_values};
use super::question::Question;
use super::partition::partition;
use super::impurity::{gini, info_gain};


/// Gains not exceeding this value are treated as zero.
pub const GAIN_TOLERANCE: f64 = 1e-12;


/// Policy for choosing among questions with exactly the same gain.
///
/// Candidates are visited in ascending column order and,
/// within a column, in ascending [`Value`](crate::Value) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TieBreak {
    /// The last visited candidate wins
    /// (the best is replaced when `gain >= best`).
    #[default]
    Last,
    /// The first visited candidate wins
    /// (the best is replaced when `gain > best`).
    First,
}


impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Last => "Last candidate (gain >= best)",
            Self::First => "First candidate (gain > best)",
        };

        write!(f, "{name}")
    }
}


/// The outcome of [`best_split`].
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    /// Information gain of `question`, or `0` if there is none.
    pub gain: f64,
    /// The best question, if any improves the impurity.
    pub question: Option<Question>,
}


impl TieBreak {
    #[inline]
    fn prefers(&self, gain: f64, best: f64) -> bool {
        match self {
            Self::Last => gain >= best,
            Self::First => gain > best,
        }
    }
}


/// Returns the question with the largest information gain over `rows`.
///
/// Every distinct value of every feature column (the label excluded)
/// is tried once. Candidates that leave one side empty are skipped.
/// If no candidate has positive gain, the result holds gain `0`
/// and no question.
pub fn best_split(rows: &[&Row], tie_break: TieBreak) -> Result<Split> {
    let first = rows.first()
        .ok_or(TreeError::EmptyDataset("a split"))?;
    let parent_impurity = gini(rows)?;
    let n_features = first.width().saturating_sub(1);

    let mut best_gain = 0f64;
    let mut best_question = None;

    for column in 0..n_features {
        for value in unique_values(rows, column)? {
            let question = Question::new(column, value);
            let (matched, unmatched) = partition(rows, &question)?;

            if matched.is_empty() || unmatched.is_empty() { continue; }

            let gain = info_gain(&matched, &unmatched, parent_impurity)?;
            if gain > GAIN_TOLERANCE && tie_break.prefers(gain, best_gain) {
                best_gain = gain;
                best_question = Some(question);
            }
        }
    }

    let split = match best_question {
        Some(question) => Split { gain: best_gain, question: Some(question) },
        None => Split { gain: 0f64, question: None },
    };
    Ok(split)
}
