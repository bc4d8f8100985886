use super::dtree::DecisionTree;
use super::split_by::TieBreak;


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```
/// use ginitree::{DecisionTreeBuilder, TieBreak};
/// let tree = DecisionTreeBuilder::new()
///     .tie_break(TieBreak::First)
///     .build();
/// assert_eq!(tree.tie_break(), TieBreak::First);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionTreeBuilder {
    tie_break: TieBreak,
}


impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the policy applied to questions of equal gain.
    /// Default value is `TieBreak::Last`.
    /// See [`TieBreak`] for the other policy.
    #[inline]
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    #[inline]
    pub fn build(self) -> DecisionTree {
        DecisionTree::new(self.tie_break)
    }
}
