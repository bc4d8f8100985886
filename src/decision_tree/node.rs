//! A node struct used in the decision tree algorithm.
use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::sample::{Row, ClassCounts};
use super::question::Question;


/// Enumeration of decision nodes and leaves.
/// Each decision node exclusively owns its two children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that has two children.
    Decision {
        /// The test routing a row to one of the children.
        question: Question,
        /// Child for the rows that match `question`.
        true_branch: Box<Node>,
        /// Child for the rows that do not match `question`.
        false_branch: Box<Node>,
    },
    /// A node that has no child.
    Leaf {
        /// The label histogram of the training rows
        /// that reached this leaf.
        counts: ClassCounts,
    },
}


impl Node {
    /// Construct a decision node.
    #[inline]
    pub fn decision(
        question:     Question,
        true_branch:  Box<Node>,
        false_branch: Box<Node>,
    ) -> Self
    {
        Self::Decision { question, true_branch, false_branch }
    }


    /// Construct a leaf.
    #[inline]
    pub fn leaf(counts: ClassCounts) -> Self {
        Self::Leaf { counts }
    }


    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// Walks from this node down to a leaf,
    /// following the answers of `row`,
    /// and returns the histogram stored there.
    pub fn classify(&self, row: &Row) -> Result<&ClassCounts> {
        let mut node = self;
        loop {
            match node {
                Self::Decision { question, true_branch, false_branch } => {
                    node = if question.matches(row)? {
                        &**true_branch
                    } else {
                        &**false_branch
                    };
                },
                Self::Leaf { counts } => return Ok(counts),
            }
        }
    }


    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut stack = vec![(self, 0)];
        while let Some((node, d)) = stack.pop() {
            depth = depth.max(d);
            if let Self::Decision { true_branch, false_branch, .. } = node {
                stack.push((&**false_branch, d + 1));
                stack.push((&**true_branch, d + 1));
            }
        }
        depth
    }


    /// Returns the leaf histograms, true branches first.
    pub fn leaves(&self) -> Vec<&ClassCounts> {
        let mut leaves = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Self::Decision { true_branch, false_branch, .. } => {
                    stack.push(&**false_branch);
                    stack.push(&**true_branch);
                },
                Self::Leaf { counts } => leaves.push(counts),
            }
        }
        leaves
    }


    /// Number of leaves.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.leaves().len()
    }


    pub(crate) fn to_dot_info(&self, id: usize, header: &[String])
        -> (Vec<String>, usize)
    {
        match self {
            Node::Decision { question, true_branch, false_branch } => {
                let question = format!(
                    "\tnode_{id} [ label = \"{}\" ];\n",
                    question.describe(header),
                );

                let true_id = id + 1;
                let (mut info,  false_id) = true_branch.to_dot_info(true_id, header);
                let (mut right, return_id) = false_branch.to_dot_info(false_id, header);

                info.push(question);
                info.append(&mut right);

                let true_edge = format!(
                    "\tnode_{id} -- node_{true_id} [ label = \"True\" ];\n",
                );
                info.push(true_edge);
                let false_edge = format!(
                    "\tnode_{id} -- node_{false_id} [ label = \"False\" ];\n",
                );
                info.push(false_edge);

                (info, return_id)
            },
            Node::Leaf { counts } => {
                let info = format!(
                    "\tnode_{id} [ label = \"{counts}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::row;
    use crate::sample::Value;

    fn counts(label: &str, n: usize) -> ClassCounts {
        ClassCounts::from(vec![(Value::from(label), n)])
    }

    // Is diameter >= 3?
    //   True:  Is color == Yellow?
    //            True:  {Apple: 1, Lemon: 1}
    //            False: {Apple: 1}
    //   False: {Grape: 2}
    fn tree() -> Node {
        let yellow = Node::decision(
            Question::new(0, "Yellow"),
            Box::new(Node::leaf(ClassCounts::from(vec![
                (Value::from("Apple"), 1), (Value::from("Lemon"), 1),
            ]))),
            Box::new(Node::leaf(counts("Apple", 1))),
        );
        Node::decision(
            Question::new(1, 3),
            Box::new(yellow),
            Box::new(Node::leaf(counts("Grape", 2))),
        )
    }

    #[test]
    fn test_classify_walks_to_leaf() {
        let root = tree();
        let res = root.classify(&row!["Red", 1, "Grape"]).unwrap();
        assert_eq!(res, &counts("Grape", 2));

        let res = root.classify(&row!["Green", 3]).unwrap();
        assert_eq!(res, &counts("Apple", 1));
    }

    #[test]
    fn test_shape() {
        let root = tree();
        assert_eq!(root.depth(), 2);
        assert_eq!(root.n_leaves(), 3);
        assert!(!root.is_leaf());
        assert_eq!(root.leaves()[2], &counts("Grape", 2));
        assert_eq!(Node::leaf(counts("Grape", 2)).depth(), 0);
    }

    #[test]
    fn test_dot_info() {
        let header = ["color", "diameter", "label"].map(String::from);
        let (info, n_nodes) = tree().to_dot_info(0, &header);
        assert_eq!(n_nodes, 5);
        assert!(info.iter().any(|l| l.contains("Is diameter >= 3?")));
        assert!(info.iter().any(|l| l.contains("node_0 -- node_1")));
        assert!(info.iter().any(|l| l.contains("node_0 -- node_4")));
    }
}
