use std::path::{Path, PathBuf};

use crate::error::{Result, TreeError};
use super::dataset::Dataset;


/// A struct that returns [`Dataset`].
/// Using this struct, one can read a CSV format file to [`Dataset`].
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use ginitree::DatasetReader;
/// let filename = "/path/to/csv/file.csv";
/// let dataset = DatasetReader::new()
///     .file(filename)
///     .has_header(true)
///     .target_feature("label")
///     .read()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct DatasetReader {
    file: Option<PathBuf>,
    has_header: bool,
    target: Option<String>,
}


impl DatasetReader {
    /// Construct a new instance of [`DatasetReader`].
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the file name.
    pub fn file<P: AsRef<Path>>(mut self, file: P) -> Self {
        self.file = Some(file.as_ref().to_path_buf());
        self
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Set the column name that is used for the label.
    /// If not set, the last column is the label.
    pub fn target_feature<S: AsRef<str>>(mut self, column: S) -> Self {
        self.target = Some(column.as_ref().to_string());
        self
    }


    /// Reads the file based on the arguments,
    /// and returns `Result<Dataset>`.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Dataset> {
        let file = self.file.ok_or_else(|| {
            let message = "the file name is not set. \
                           Use `DatasetReader::file`.";
            TreeError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput, message
            ))
        })?;

        let dataset = Dataset::from_csv(file, self.has_header)?;
        match self.target {
            Some(target) => dataset.set_target(target),
            None => Ok(dataset),
        }
    }
}
