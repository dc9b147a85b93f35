//! TOML configuration file support.
//!
//! Thresholds and modes can be kept in a file instead of being repeated on every
//! command line:
//!
//! ```toml
//! # annocheck.toml
//! [check]
//! library_mode = "analogue"
//! ion_mode = "neg"
//! class_scope = "per-level"
//! score_threshold = 0.8
//! similarity_threshold = 0.7
//! shared_peaks_threshold = 6
//! ppm_error_threshold = 10.0
//!
//! [columns]
//! regular_prefix = "GNPS_LIB_"
//! analogue_prefix = "GNPS_LIBA_"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use annocheck::check::CheckParams;
use annocheck::table::columns::ColumnSet;

/// Root configuration structure for annocheck.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Check parameters.
    #[serde(default)]
    pub check: CheckConfig,

    /// Column prefixes of the feature table.
    pub columns: Option<ColumnSet>,
}

/// Configuration for the check command.
#[derive(Debug, Default, Deserialize)]
pub struct CheckConfig {
    /// "standard"/"regular" or "analogue".
    pub library_mode: Option<String>,

    /// "pos" or "neg".
    pub ion_mode: Option<String>,

    /// "all" or "per-level".
    pub class_scope: Option<String>,

    /// ZODIAC score threshold.
    pub score_threshold: Option<f64>,

    /// Spectral similarity threshold.
    pub similarity_threshold: Option<f64>,

    /// Shared peak threshold.
    pub shared_peaks_threshold: Option<u32>,

    /// Mass error threshold in ppm.
    pub ppm_error_threshold: Option<f64>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Apply the file values on top of `params`.
    pub fn apply(&self, params: &mut CheckParams) -> Result<()> {
        let check = &self.check;
        if let Some(mode) = &check.library_mode {
            params.library_mode = mode.parse()?;
        }
        if let Some(mode) = &check.ion_mode {
            params.ion_mode = mode.parse()?;
        }
        if let Some(scope) = &check.class_scope {
            params.class_scope = scope.parse()?;
        }
        if let Some(threshold) = check.score_threshold {
            params.score_threshold = threshold;
        }
        if let Some(threshold) = check.similarity_threshold {
            params.similarity_threshold = threshold;
        }
        if let Some(threshold) = check.shared_peaks_threshold {
            params.shared_peaks_threshold = threshold;
        }
        if let Some(threshold) = check.ppm_error_threshold {
            params.ppm_error_threshold = threshold;
        }
        if let Some(columns) = &self.columns {
            params.columns = columns.clone();
        }
        Ok(())
    }
}
