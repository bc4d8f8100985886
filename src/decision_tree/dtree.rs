use std::fmt;

use crate::error::{Result, TreeError};
use crate::sample::{Dataset, Row, class_counts};
use super::{
    node::Node,
    question::Question,
    partition::partition,
    split_by::{TieBreak, best_split},
    dtree_classifier::DecisionTreeClassifier,
};


/// The Decision Tree algorithm.
/// Given a labeled [`Dataset`], [`DecisionTree`] grows a
/// [`DecisionTreeClassifier`] by splitting each node on the question
/// of largest Gini gain until no question improves the impurity.
///
/// The code follows the CART algorithm of the book:
/// [Classification and Regression Trees](https://www.amazon.com/Classification-Regression-Wadsworth-Statistics-Probability/dp/0412048418)
/// by Leo Breiman, Jerome H. Friedman, Richard A. Olshen, and Charles J. Stone.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::DecisionTreeBuilder).
///
/// # Example
/// ```
/// use ginitree::prelude::*;
///
/// let rows = vec![
///     row!["Green",  3, "Apple"],
///     row!["Yellow", 3, "Apple"],
///     row!["Red",    1, "Grape"],
///     row!["Red",    1, "Grape"],
///     row!["Yellow", 3, "Lemon"],
/// ];
/// let dataset = Dataset::new(["color", "diameter", "label"], rows).unwrap();
///
/// let tree = DecisionTreeBuilder::new()
///     .tie_break(TieBreak::Last)
///     .build();
/// let f = tree.fit(&dataset).unwrap();
///
/// let counts = f.classify(&row!["Red", 1]).unwrap();
/// assert_eq!(counts.get(&Value::from("Grape")), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionTree {
    tie_break: TieBreak,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }


    /// Returns the tie-breaking policy of the split search.
    #[inline]
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }


    /// Grows a tree over every row of `dataset`.
    pub fn fit(&self, dataset: &Dataset) -> Result<DecisionTreeClassifier> {
        let root = build_tree(&dataset.row_refs(), self.tie_break)?;
        let header = dataset.header().to_vec();
        let kinds = dataset.kinds().to_vec();

        Ok(DecisionTreeClassifier::new(root, header, kinds))
    }
}


enum Task<'a> {
    // Grow a subtree over these rows.
    Grow(Vec<&'a Row>),
    // Pop the two latest subtrees and join them under this question.
    Join(Question),
}


/// Grows a tree over `rows`.
///
/// A node becomes a leaf holding the label histogram of its rows
/// when no question has positive gain. Otherwise its rows are
/// partitioned by the best question and both sides are grown.
/// The work is driven by an explicit stack,
/// so deep trees do not exhaust the call stack.
pub fn build_tree(rows: &[&Row], tie_break: TieBreak) -> Result<Node> {
    if rows.is_empty() {
        return Err(TreeError::EmptyDataset("a tree"));
    }

    let mut tasks = vec![Task::Grow(rows.to_vec())];
    let mut built: Vec<Node> = Vec::new();

    while let Some(task) = tasks.pop() {
        match task {
            Task::Grow(rows) => {
                let split = best_split(&rows, tie_break)?;
                let Some(question) = split.question else {
                    built.push(Node::leaf(class_counts(&rows)?));
                    continue;
                };

                let (matched, unmatched) = partition(&rows, &question)?;

                // The true branch is grown first, so it is built first.
                tasks.push(Task::Join(question));
                tasks.push(Task::Grow(unmatched));
                tasks.push(Task::Grow(matched));
            },
            Task::Join(question) => {
                let false_branch = built.pop()
                    .expect("the false branch is built before its parent");
                let true_branch = built.pop()
                    .expect("the true branch is built before its parent");
                let node = Node::decision(
                    question, Box::new(true_branch), Box::new(false_branch)
                );
                built.push(node);
            },
        }
    }

    let root = built.pop().expect("the root is built last");
    Ok(root)
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # Decision Tree\n\n\
            - Impurity: Gini index\n\
            - Tie break: {}\n\
            ----------\
            ",
            self.tie_break,
        )
    }
}
