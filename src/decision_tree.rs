//! A CART decision tree grown by Gini impurity.

/// Defines the splitting rule.
pub mod question;
/// Defines the partitioner.
pub mod partition;
/// Defines the Gini impurity and the information gain.
pub mod impurity;
/// Defines the split search.
pub mod split_by;
/// Defines the inner representation of `DecisionTreeClassifier`.
pub mod node;
mod builder;
/// Defines the tree growing algorithm.
pub mod dtree;
/// Defines the classifier produced by `DecisionTree`.
pub mod dtree_classifier;


pub use question::{Question, Comparison};
pub use partition::partition;
pub use impurity::{gini, info_gain};
pub use split_by::{Split, TieBreak, best_split};
pub use node::Node;
pub use builder::DecisionTreeBuilder;
pub use dtree::{DecisionTree, build_tree};
pub use dtree_classifier::DecisionTreeClassifier;
