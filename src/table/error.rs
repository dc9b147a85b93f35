/// Errors that can occur while loading, accessing or saving a feature table
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// I/O error reading or writing a table file
    #[error("Failed to access file: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV/TSV parsing error
    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    /// A column required by an operation is absent from the table
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Malformed table (duplicate headers, mismatched column lengths, ...)
    #[error("Invalid table format: {0}")]
    InvalidFormat(String),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}
