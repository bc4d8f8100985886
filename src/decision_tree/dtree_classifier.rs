//! Defines the decision tree classifier.
use serde::{Serialize, Deserialize};

use std::path::Path;
use std::fs::File;
use std::io::prelude::*;

use crate::Classifier;
use crate::common::checker;
use crate::error::Result;
use crate::sample::{ClassCounts, Row, ValueKind};
use super::node::Node;


/// Decision tree classifier.
/// This struct is a wrapper of the root [`Node`]
/// that also remembers the training schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
    header: Vec<String>,
    kinds: Vec<ValueKind>,
}


impl DecisionTreeClassifier {
    #[inline]
    pub(crate) fn new(
        root:   Node,
        header: Vec<String>,
        kinds:  Vec<ValueKind>,
    ) -> Self
    {
        Self { root, header, kinds }
    }


    /// The root of the tree.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Column names of the training set, label last.
    #[inline]
    pub fn header(&self) -> &[String] {
        &self.header[..]
    }


    /// Value kinds of the training set, label last.
    #[inline]
    pub fn kinds(&self) -> &[ValueKind] {
        &self.kinds[..]
    }


    /// Number of feature columns a row must provide.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.kinds.len().saturating_sub(1)
    }


    /// Write the current decision tree to dot file.
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0, &self.header).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }


    /// Render the tree as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }
}


impl Classifier for DecisionTreeClassifier {
    /// Checks `row` against the training schema,
    /// then walks the tree.
    /// The row may carry a trailing label, which is ignored.
    fn classify(&self, row: &Row) -> Result<&ClassCounts> {
        checker::check_row(row, &self.kinds)?;
        self.root.classify(row)
    }
}
