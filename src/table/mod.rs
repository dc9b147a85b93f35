//! # Feature Table
//!
//! In-memory representation of an exported feature table: one row per detected
//! feature, one named column per annotation attribute.
//!
//! Cells are stored as optional text. Empty cells and the usual spreadsheet/pandas
//! spellings of "not available" (`NaN`, `NA`, `null`, ...) are normalised to `None`
//! on insertion, so every consumer sees a single notion of a missing value.
//! Numeric access parses on demand; a cell that does not parse is missing.
//!
//! Every row carries a key (its position in the table it was first loaded into).
//! Keys survive [`FeatureTable::retain`] and [`FeatureTable::select`], which makes
//! "this output is a subset of that input" checkable.

mod error;
mod io;

pub mod columns;

#[cfg(test)]
mod tests;

pub use error::TableError;
pub use io::Delimiter;

/// Spellings treated as a missing cell (compared after trimming), as pandas' `read_csv` defaults
const MISSING_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A single feature (row) of a [`FeatureTable`]
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    key: usize,
    cells: Vec<Option<String>>,
}

impl FeatureRow {
    /// Key of the row in the table it was loaded into
    pub fn key(&self) -> usize {
        self.key
    }

    /// Text of the cell at `index`, `None` if missing
    pub fn text(&self, index: usize) -> Option<&str> {
        self.cells.get(index).and_then(|c| c.as_deref())
    }

    /// Numeric value of the cell at `index`, `None` if missing or not a number
    pub fn number(&self, index: usize) -> Option<f64> {
        self.text(index)
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| !v.is_nan())
    }

    /// Whether the cell at `index` holds a value
    pub fn is_present(&self, index: usize) -> bool {
        self.text(index).is_some()
    }

    /// All cells in column order
    pub fn cells(&self) -> &[Option<String>] {
        &self.cells
    }
}

/// Feature table with named columns and missing-aware cells
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureTable {
    headers: Vec<String>,
    rows: Vec<FeatureRow>,
    next_key: usize,
}

impl FeatureTable {
    /// Create an empty table with the given column names
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Result<Self, TableError> {
        let headers: Vec<String> = headers.iter().map(|h| h.as_ref().to_string()).collect();
        for (i, header) in headers.iter().enumerate() {
            if headers[..i].contains(header) {
                return Err(TableError::InvalidFormat(format!(
                    "duplicate column '{}'",
                    header
                )));
            }
        }
        Ok(Self {
            headers,
            rows: Vec::new(),
            next_key: 0,
        })
    }

    /// Build a table from literal rows; handy for small hand-written tables
    pub fn from_rows<S: AsRef<str>>(
        headers: &[S],
        rows: Vec<Vec<Option<&str>>>,
    ) -> Result<Self, TableError> {
        let mut table = Self::new(headers)?;
        for row in rows {
            table.push_row(row.into_iter().map(|c| c.map(str::to_string)).collect());
        }
        Ok(table)
    }

    /// Append a row. Short rows are padded with missing cells, long rows truncated.
    pub fn push_row(&mut self, cells: Vec<Option<String>>) {
        let mut cells: Vec<Option<String>> = cells.into_iter().map(normalize_cell).collect();
        cells.resize(self.headers.len(), None);
        self.rows.push(FeatureRow {
            key: self.next_key,
            cells,
        });
        self.next_key += 1;
    }

    /// Column names in order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in order
    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    /// Keys of all rows in order
    pub fn keys(&self) -> Vec<usize> {
        self.rows.iter().map(FeatureRow::key).collect()
    }

    /// Whether a column with this name exists
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Position of the named column
    pub fn column_index(&self, name: &str) -> Result<usize, TableError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| TableError::MissingColumn(name.to_string()))
    }

    /// Text values of the named column
    pub fn column_text(&self, name: &str) -> Result<Vec<Option<&str>>, TableError> {
        let index = self.column_index(name)?;
        Ok(self.rows.iter().map(|r| r.text(index)).collect())
    }

    /// Keep only the rows for which `predicate` holds, preserving order.
    ///
    /// Returns the number of rows removed.
    pub fn retain<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&FeatureRow) -> bool,
    {
        let before = self.rows.len();
        self.rows.retain(|row| predicate(row));
        before - self.rows.len()
    }

    /// Append a column, or overwrite it if a column of that name already exists
    pub fn append_column(
        &mut self,
        name: &str,
        values: Vec<Option<String>>,
    ) -> Result<(), TableError> {
        if values.len() != self.rows.len() {
            return Err(TableError::InvalidFormat(format!(
                "column '{}' has {} values for {} rows",
                name,
                values.len(),
                self.rows.len()
            )));
        }

        let index = match self.column_index(name) {
            Ok(index) => index,
            Err(_) => {
                self.headers.push(name.to_string());
                for row in &mut self.rows {
                    row.cells.push(None);
                }
                self.headers.len() - 1
            }
        };

        for (row, value) in self.rows.iter_mut().zip(values) {
            row.cells[index] = normalize_cell(value);
        }
        Ok(())
    }

    /// Copy of the rows at the given positions, in the given order
    pub fn select(&self, positions: &[usize]) -> FeatureTable {
        FeatureTable {
            headers: self.headers.clone(),
            rows: positions
                .iter()
                .filter_map(|&i| self.rows.get(i).cloned())
                .collect(),
            next_key: self.next_key,
        }
    }
}

fn normalize_cell(cell: Option<String>) -> Option<String> {
    cell.filter(|c| !MISSING_MARKERS.contains(&c.trim()))
}
