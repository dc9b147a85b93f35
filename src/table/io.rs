use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

use log::debug;

use super::{FeatureTable, TableError};

/// Field delimiter of a feature table file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    /// Tab-separated values
    Tab,
    /// Comma-separated values
    #[default]
    Comma,
}

impl Delimiter {
    /// Guess the delimiter from the file extension (`.tsv`/`.tab`/`.txt` are tab-separated)
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("tsv" | "tab" | "txt") => Delimiter::Tab,
            _ => Delimiter::Comma,
        }
    }

    fn as_byte(self) -> u8 {
        match self {
            Delimiter::Tab => b'\t',
            Delimiter::Comma => b',',
        }
    }
}

impl FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tab" | "tsv" | "\\t" => Ok(Delimiter::Tab),
            "comma" | "csv" | "," => Ok(Delimiter::Comma),
            _ => Err(format!("Unknown delimiter '{}'. Valid options: tab, comma", s)),
        }
    }
}

impl FeatureTable {
    /// Load a feature table, guessing the delimiter from the extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let delimiter = Delimiter::from_path(&path);
        Self::from_path_with(path, delimiter)
    }

    /// Load a feature table with an explicit delimiter
    pub fn from_path_with<P: AsRef<Path>>(
        path: P,
        delimiter: Delimiter,
    ) -> Result<Self, TableError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), delimiter)
    }

    /// Parse a feature table from a reader
    pub fn from_reader<R: Read>(reader: R, delimiter: Delimiter) -> Result<Self, TableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter.as_byte())
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|s| s.trim().to_string())
            .collect();

        if headers.iter().all(|h| h.is_empty()) {
            return Err(TableError::InvalidFormat("table has no header row".to_string()));
        }

        let mut table = FeatureTable::new(&headers)?;
        for record in csv_reader.records() {
            let record = record?;
            table.push_row(record.iter().map(|v| Some(v.to_string())).collect());
        }

        debug!(
            "Loaded feature table: {} rows x {} columns",
            table.len(),
            table.headers().len()
        );
        Ok(table)
    }

    /// Write the table to a file, guessing the delimiter from the extension
    pub fn write_path<P: AsRef<Path>>(&self, path: P) -> Result<(), TableError> {
        let delimiter = Delimiter::from_path(&path);
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file), delimiter)
    }

    /// Write the table; missing cells are written as empty fields
    pub fn write_to<W: Write>(&self, writer: W, delimiter: Delimiter) -> Result<(), TableError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(delimiter.as_byte())
            .from_writer(writer);

        csv_writer.write_record(self.headers())?;
        for row in self.rows() {
            csv_writer.write_record(row.cells().iter().map(|c| c.as_deref().unwrap_or("")))?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
