//! Exports the standard types and traits.
//!

pub use crate::row;

pub use crate::sample::{
    // Data ------------------------------------
    Value,
    ValueKind,
    Row,
    Dataset,
    DatasetReader,
    ClassCounts,
};


pub use crate::decision_tree::{
    // Tree growing ----------------------------
    DecisionTree,
    DecisionTreeBuilder,
    TieBreak,


    // Trained tree ----------------------------
    DecisionTreeClassifier,
    Node,
    Question,
};


pub use crate::classifier::Classifier;


pub use crate::report::{
    TreePrinter,
    format_percentages,
    print_tree,
    print_predictions,
};


pub use crate::error::TreeError;
