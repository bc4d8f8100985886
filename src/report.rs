//! Human-readable output of a trained tree.
//!
//! Nothing in the tree algorithms prints;
//! this module renders a [`Node`] or a [`ClassCounts`] for the terminal.
use colored::Colorize;

use std::fmt;

use crate::Classifier;
use crate::error::Result;
use crate::sample::{ClassCounts, Row};
use crate::decision_tree::{Node, DecisionTreeClassifier};

const INDENT: &str = "  ";
const FULL_WIDTH: usize = 60;


/// Renders a tree as an indented list of questions and leaves:
///
/// ```txt
/// Is diameter >= 3?
/// --> True:
///   Is color == Yellow?
///   --> True:
///     Predict {Apple: 1, Lemon: 1}
///   ...
/// ```
pub struct TreePrinter<'a> {
    root: &'a Node,
    header: &'a [String],
}


impl<'a> TreePrinter<'a> {
    /// Construct a printer for `root`.
    /// Column `i` is named `header[i]`.
    pub fn new(root: &'a Node, header: &'a [String]) -> Self {
        Self { root, header }
    }
}


impl<'a> From<&'a DecisionTreeClassifier> for TreePrinter<'a> {
    fn from(f: &'a DecisionTreeClassifier) -> Self {
        Self::new(f.root(), f.header())
    }
}


impl fmt::Display for TreePrinter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Line<'a> {
            Tree(&'a Node),
            Branch(&'static str),
        }

        let mut stack = vec![(Line::Tree(self.root), 0)];
        while let Some((line, depth)) = stack.pop() {
            let spacing = INDENT.repeat(depth);
            match line {
                Line::Branch(name) => {
                    writeln!(f, "{spacing}--> {name}:")?;
                },
                Line::Tree(Node::Leaf { counts }) => {
                    writeln!(f, "{spacing}Predict {counts}")?;
                },
                Line::Tree(Node::Decision { question, true_branch, false_branch }) => {
                    writeln!(f, "{spacing}{}", question.describe(self.header))?;
                    stack.push((Line::Tree(&**false_branch), depth + 1));
                    stack.push((Line::Branch("False"), depth));
                    stack.push((Line::Tree(&**true_branch), depth + 1));
                    stack.push((Line::Branch("True"), depth));
                },
            }
        }
        Ok(())
    }
}


/// Formats each label's share as a truncated percentage,
/// e.g. `{Apple: 50%, Lemon: 50%}`.
pub fn format_percentages(counts: &ClassCounts) -> String {
    let items = counts.percentages()
        .into_iter()
        .map(|(label, percent)| format!("{label}: {percent}%"))
        .collect::<Vec<_>>();
    format!("{{{}}}", items.join(", "))
}


/// Prints the tree of `f` to stdout.
pub fn print_tree(f: &DecisionTreeClassifier) {
    let header = format!(
        "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
        "", "TREE".bold(), "",
    );
    println!("{header}");
    print!("{}", TreePrinter::from(f));
    println!("{:=>FULL_WIDTH$}", "");
}


/// Classifies each row and prints its actual label
/// next to the predicted distribution.
/// Rows whose actual label is the majority of the leaf
/// are shown in green, the others in red.
pub fn print_predictions<C>(f: &C, rows: &[Row]) -> Result<()>
    where C: Classifier,
{
    for row in rows {
        let counts = f.classify(row)?;
        let actual = row.label()?;
        let predicted = format_percentages(counts);

        let hit = counts.majority() == Some(actual);
        let predicted = if hit { predicted.green() } else { predicted.red() };
        println!(
            "{} {}. {} {}",
            "Actual:".bold(),
            actual,
            "Predicted:".bold(),
            predicted,
        );
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Value;
    use crate::decision_tree::Question;

    fn counts(pairs: &[(&str, usize)]) -> ClassCounts {
        pairs.iter()
            .map(|&(label, n)| (Value::from(label), n))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_format_percentages() {
        let res = format_percentages(&counts(&[("Apple", 1), ("Lemon", 1)]));
        assert_eq!(res, "{Apple: 50%, Lemon: 50%}");

        let res = format_percentages(&counts(&[("a", 2), ("b", 1)]));
        assert_eq!(res, "{a: 66%, b: 33%}");
    }

    #[test]
    fn test_tree_printer() {
        let header = ["color", "diameter", "label"].map(String::from);
        let root = Node::decision(
            Question::new(1, 3),
            Box::new(Node::leaf(counts(&[("Apple", 2)]))),
            Box::new(Node::leaf(counts(&[("Grape", 2)]))),
        );
        let res = TreePrinter::new(&root, &header).to_string();
        let exp = "\
            Is diameter >= 3?\n\
            --> True:\n\
            \x20\x20Predict {Apple: 2}\n\
            --> False:\n\
            \x20\x20Predict {Grape: 2}\n";
        assert_eq!(res, exp);
    }
}
