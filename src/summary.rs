//! Count/proportion tables handed to reporting and charting.
//!
//! Every table has the same three columns (`Matching level`, `Count`, `Relative`)
//! and serialises with those names, so chart tooling can consume the JSON export
//! without renaming anything.

use std::fmt;

use serde::Serialize;

use crate::check::CheckError;

/// Decimal places of the `Relative` column
pub const RELATIVE_DECIMALS: i32 = 2;

/// One line of a [`SummaryTable`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    /// Label of the counted subset
    #[serde(rename = "Matching level")]
    pub level: String,
    /// Number of rows in the subset
    #[serde(rename = "Count")]
    pub count: usize,
    /// `count` divided by the table denominator, rounded
    #[serde(rename = "Relative")]
    pub relative: f64,
}

/// Counts with proportions relative to a shared denominator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryTable {
    /// Table title
    pub title: String,
    /// Rows in display order
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    /// Build a table whose `Relative` column is `count / denominator`.
    ///
    /// A zero denominator is an error rather than a column of zeros.
    pub fn with_proportions(
        title: impl Into<String>,
        counts: Vec<(String, usize)>,
        denominator: usize,
    ) -> Result<Self, CheckError> {
        let title = title.into();
        if denominator == 0 {
            return Err(CheckError::EmptyDenominator(title));
        }
        let rows = counts
            .into_iter()
            .map(|(level, count)| {
                Ok(SummaryRow {
                    relative: proportion(count, denominator, &title)?,
                    level,
                    count,
                })
            })
            .collect::<Result<Vec<_>, CheckError>>()?;
        Ok(Self { title, rows })
    }

    /// Count of the row with the given label
    pub fn count(&self, level: &str) -> Option<usize> {
        self.rows.iter().find(|r| r.level == level).map(|r| r.count)
    }

    /// Proportion of the row with the given label
    pub fn relative(&self, level: &str) -> Option<f64> {
        self.rows.iter().find(|r| r.level == level).map(|r| r.relative)
    }
}

impl fmt::Display for SummaryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .map(|r| r.level.len())
            .chain(std::iter::once("Matching level".len()))
            .max()
            .unwrap_or_default();

        writeln!(f, "{}", self.title)?;
        writeln!(f, "{:<width$}  {:>7}  {:>8}", "Matching level", "Count", "Relative")?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<width$}  {:>7}  {:>8.2}",
                row.level, row.count, row.relative
            )?;
        }
        Ok(())
    }
}

/// `count / denominator` rounded to [`RELATIVE_DECIMALS`] places
pub fn proportion(count: usize, denominator: usize, what: &str) -> Result<f64, CheckError> {
    if denominator == 0 {
        return Err(CheckError::EmptyDenominator(what.to_string()));
    }
    Ok(round_decimals(count as f64 / denominator as f64, RELATIVE_DECIMALS))
}

/// Render a threshold for a row label; whole numbers keep one decimal (`1.0`, not `1`)
pub fn format_threshold(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Round half to even at the given number of decimal places
pub fn round_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}
