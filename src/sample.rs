//! Tabular data held in memory.
//! A [`Dataset`] is a non-empty batch of [`Row`]s
//! whose last column is the label.

// Provides the tagged cell type.
pub(crate) mod value;
// Provides the row type and the `row!` macro.
pub(crate) mod row;
// Provides the label histogram.
pub(crate) mod class_counts;
// Provides the dataset struct and column utilities.
pub(crate) mod dataset;
// Provides a struct that reads a file.
pub(crate) mod dataset_reader;


pub use value::{Value, ValueKind};
pub use row::Row;
pub use class_counts::ClassCounts;
pub use dataset::{Dataset, class_counts, unique_values};
pub use dataset_reader::DatasetReader;
