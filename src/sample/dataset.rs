use polars::prelude::{DataFrame, DataType, Series};

use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::collections::BTreeSet;

use crate::common::checker;
use crate::error::{Result, TreeError};
use super::value::{Value, ValueKind};
use super::row::Row;
use super::class_counts::ClassCounts;


/// Struct `Dataset` holds a batch of labeled rows
/// together with the name of each column.
/// The last column is the label.
///
/// A `Dataset` is never empty, its rows share one width,
/// and each column holds a single [`ValueKind`].
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    header: Vec<String>,
    kinds: Vec<ValueKind>,
    rows: Vec<Row>,
}


impl Dataset {
    /// Construct a new `Dataset` from column names and rows.
    pub fn new<S, I>(header: I, rows: Vec<Row>) -> Result<Self>
        where S: ToString,
              I: IntoIterator<Item = S>,
    {
        let header = header.into_iter()
            .map(|name| name.to_string())
            .collect::<Vec<_>>();
        let kinds = checker::check_rows(&rows)?;

        if header.len() != kinds.len() {
            return Err(TreeError::WidthMismatch {
                expected: header.len().to_string(),
                found: kinds.len(),
            });
        }

        Ok(Self { header, kinds, rows })
    }


    /// Construct a new `Dataset` with generated column names
    /// `Feat. [1]`, `Feat. [2]`, ..., `label`.
    pub fn from_rows(rows: Vec<Row>) -> Result<Self> {
        let width = rows.first().map(|row| row.width()).unwrap_or(0);
        let header = (1..width).map(|i| format!("Feat. [{i}]"))
            .chain(std::iter::once("label".to_string()))
            .collect::<Vec<_>>();
        Self::new(header, rows)
    }


    /// Read a CSV format file to `Dataset` type.
    /// The last column is the label; see [`Dataset::set_target`]
    /// to pick another one.
    pub fn from_csv<P>(file: P, has_header: bool) -> Result<Self>
        where P: AsRef<Path>,
    {
        let file = File::open(file)?;
        Self::from_reader(BufReader::new(file), has_header)
    }


    /// Read comma separated lines to `Dataset` type.
    ///
    /// Blank lines are skipped and cells are trimmed.
    /// A column whose cells all parse as `f64` becomes numeric,
    /// any other column is categorical.
    pub fn from_reader<R: BufRead>(reader: R, has_header: bool) -> Result<Self> {
        let mut header: Option<Vec<String>> = None;
        let mut cells: Vec<Vec<String>> = Vec::new();
        let mut width = None;

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let items = line.split(',')
                .map(|x| x.trim().to_string())
                .collect::<Vec<_>>();

            match width {
                None => { width = Some(items.len()); },
                Some(w) if w != items.len() => {
                    return Err(TreeError::Parse {
                        line: i + 1,
                        message: format!(
                            "expected {w} cells, found {}", items.len()
                        ),
                    });
                },
                Some(_) => {},
            }

            if has_header && header.is_none() {
                header = Some(items);
            } else {
                cells.push(items);
            }
        }

        let width = width.unwrap_or(0);
        let numeric = (0..width).map(|j| {
                cells.iter().all(|items| items[j].parse::<f64>().is_ok())
            })
            .collect::<Vec<_>>();

        let rows = cells.into_iter()
            .map(|items| {
                let values = items.into_iter()
                    .zip(&numeric)
                    .map(|(item, &is_numeric)| {
                        if is_numeric { Value::parse(&item) }
                        else { Value::Categorical(item) }
                    })
                    .collect::<Vec<_>>();
                Row::new(values)
            })
            .collect::<Vec<_>>();

        match header {
            Some(header) => Self::new(header, rows),
            None => Self::from_rows(rows),
        }
    }


    /// Convert `polars::DataFrame` and `polars::Series` into `Dataset`.
    /// This method takes the ownership for the given pair
    /// `data` and `target`; the target becomes the label column.
    pub fn from_dataframe(data: DataFrame, target: Series) -> Result<Self> {
        let n_rows = data.height();
        if target.len() != n_rows {
            return Err(TreeError::WidthMismatch {
                expected: n_rows.to_string(),
                found: target.len(),
            });
        }

        let mut header = data.get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect::<Vec<_>>();
        header.push(target.name().to_string());

        let mut columns = data.get_columns()
            .iter()
            .map(series_to_values)
            .collect::<Result<Vec<_>>>()?;
        columns.push(series_to_values(&target)?);

        let mut rows = (0..n_rows).map(|_| Row::new(Vec::with_capacity(columns.len())))
            .collect::<Vec<_>>();
        for column in columns {
            for (row, value) in rows.iter_mut().zip(column) {
                row.values_mut().push(value);
            }
        }

        Self::new(header, rows)
    }


    /// Move the column named `target` to the label position.
    pub fn set_target<S: AsRef<str>>(mut self, target: S) -> Result<Self> {
        let target = target.as_ref();
        let pos = self.header.iter()
            .position(|name| name == target)
            .ok_or_else(|| TreeError::MissingTarget(target.to_string()))?;

        let name = self.header.remove(pos);
        self.header.push(name);
        let kind = self.kinds.remove(pos);
        self.kinds.push(kind);
        for row in self.rows.iter_mut() {
            let values = row.values_mut();
            let label = values.remove(pos);
            values.push(label);
        }

        Ok(self)
    }


    /// Returns the pair of the number of rows and features.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.n_features())
    }


    /// Number of feature columns (the label excluded).
    #[inline]
    pub fn n_features(&self) -> usize {
        self.kinds.len() - 1
    }


    /// Column names, label last.
    #[inline]
    pub fn header(&self) -> &[String] {
        &self.header[..]
    }


    /// Value kind of each column, label last.
    #[inline]
    pub fn kinds(&self) -> &[ValueKind] {
        &self.kinds[..]
    }


    /// Returns the rows.
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows[..]
    }


    /// Returns a reference to each row.
    /// The tree algorithms work on such borrowed row sets.
    #[inline]
    pub fn row_refs(&self) -> Vec<&Row> {
        self.rows.iter().collect()
    }


    /// Returns the labels in row order.
    pub fn target(&self) -> Vec<&Value> {
        let label = self.kinds.len() - 1;
        self.rows.iter()
            .map(|row| &row[label])
            .collect()
    }


    /// Returns the distinct values of column `column`.
    #[inline]
    pub fn unique_values(&self, column: usize) -> Result<Vec<Value>> {
        unique_values(&self.row_refs(), column)
    }


    /// Returns the label histogram of the whole dataset.
    #[inline]
    pub fn class_counts(&self) -> Result<ClassCounts> {
        class_counts(&self.row_refs())
    }
}


/// Returns the distinct values appearing in column `column`,
/// in ascending `Value` order.
pub fn unique_values(rows: &[&Row], column: usize) -> Result<Vec<Value>> {
    let mut values = BTreeSet::new();
    for row in rows {
        values.insert(row.get(column)?);
    }
    Ok(values.into_iter().cloned().collect())
}


/// Counts the occurrences of each label (the last column).
pub fn class_counts(rows: &[&Row]) -> Result<ClassCounts> {
    if rows.is_empty() {
        return Err(TreeError::EmptyDataset("class counts"));
    }

    let mut counts = ClassCounts::new();
    for row in rows {
        counts.increment(row.label()?);
    }
    Ok(counts)
}


fn series_to_values(series: &Series) -> Result<Vec<Value>> {
    let name = series.name();
    let missing = |row: usize| TreeError::MissingValue {
        column: name.to_string(),
        row,
    };

    let dtype = series.dtype();
    let values = match dtype {
        DataType::Utf8 => {
            series.utf8()?
                .into_iter()
                .enumerate()
                .map(|(i, v)| v.map(Value::from).ok_or_else(|| missing(i)))
                .collect::<Result<Vec<_>>>()?
        },
        DataType::Boolean => {
            series.bool()?
                .into_iter()
                .enumerate()
                .map(|(i, v)| {
                    v.map(|b| Value::from(b.to_string()))
                        .ok_or_else(|| missing(i))
                })
                .collect::<Result<Vec<_>>>()?
        },
        dtype if dtype.is_numeric() => {
            let series = series.cast(&DataType::Float64)?;
            series.f64()?
                .into_iter()
                .enumerate()
                .map(|(i, v)| v.map(Value::Numeric).ok_or_else(|| missing(i)))
                .collect::<Result<Vec<_>>>()?
        },
        other => {
            return Err(TreeError::UnsupportedType {
                column: name.to_string(),
                dtype: other.to_string(),
            });
        },
    };
    Ok(values)
}
