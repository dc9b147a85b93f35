use crate::table::TableError;

/// Errors raised by the consistency check. All of them abort the current call.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// A column the selected mode needs is absent from the feature table
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A mode parameter has an unrecognised value
    #[error("Invalid {parameter} '{value}'. Valid options: {expected}")]
    InvalidMode {
        /// Name of the parameter
        parameter: &'static str,
        /// Rejected value
        value: String,
        /// Accepted values, comma separated
        expected: String,
    },

    /// A proportion was requested over zero rows
    #[error("Cannot compute proportions for {0}: denominator is zero")]
    EmptyDenominator(String),

    /// Any other feature table failure
    #[error("Feature table error: {0}")]
    Table(TableError),
}

impl CheckError {
    pub(crate) fn invalid_mode(parameter: &'static str, value: &str, expected: &[&str]) -> Self {
        CheckError::InvalidMode {
            parameter,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}

impl From<TableError> for CheckError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::MissingColumn(name) => CheckError::MissingColumn(name),
            other => CheckError::Table(other),
        }
    }
}
