#![warn(missing_docs)]

//!
//! A crate that grows a CART-style decision tree classifier
//! over a small in-memory table.
//!
//! Each row of the table is a list of [`Value`]s,
//! either numeric or categorical, whose last entry is the label.
//! The tree is grown greedily:
//! at each node, every distinct value of every feature column
//! is tried as a [`Question`]
//! (`>=` for numeric values, `==` for categorical ones),
//! and the question with the largest Gini information gain
//! partitions the rows.
//! A node becomes a leaf, holding the label histogram
//! ([`ClassCounts`]) of its rows, when no question improves the impurity.
//!
//! ```
//! use ginitree::prelude::*;
//!
//! let rows = vec![
//!     row!["Green",  3, "Apple"],
//!     row!["Yellow", 3, "Apple"],
//!     row!["Red",    1, "Grape"],
//!     row!["Red",    1, "Grape"],
//!     row!["Yellow", 3, "Lemon"],
//! ];
//! let dataset = Dataset::new(["color", "diameter", "label"], rows).unwrap();
//!
//! let f = DecisionTreeBuilder::new()
//!     .build()
//!     .fit(&dataset)
//!     .unwrap();
//!
//! let counts = f.classify(&row!["Yellow", 4]).unwrap();
//! assert!(counts.contains(&Value::from("Apple")));
//! ```

pub mod error;
pub mod sample;
pub mod decision_tree;
pub mod classifier;
pub mod report;
pub mod prelude;

pub(crate) mod common;


pub use error::{Result, TreeError};

pub use sample::{
    Value,
    ValueKind,
    Row,
    ClassCounts,
    Dataset,
    DatasetReader,
    class_counts,
    unique_values,
};

pub use decision_tree::{
    Question,
    Comparison,
    Node,
    Split,
    TieBreak,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    partition,
    gini,
    info_gain,
    best_split,
    build_tree,
};

pub use classifier::Classifier;
