use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use annocheck::check::{check_matching_annotations, CheckParams, ClassScope, IonMode};
use annocheck::table::{Delimiter, FeatureTable};

use super::config::Config;
use super::CheckArgs;

impl CheckArgs {
    /// Apply command-line overrides on top of `params`.
    fn apply(&self, params: &mut CheckParams) -> Result<()> {
        if let Some(mode) = &self.library_mode {
            params.library_mode = mode.parse()?;
        }
        if let Some(mode) = self.ion_mode {
            params.ion_mode = IonMode::from(mode);
        }
        if let Some(scope) = self.class_scope {
            params.class_scope = ClassScope::from(scope);
        }
        if let Some(threshold) = self.score_threshold {
            params.score_threshold = threshold;
        }
        if let Some(threshold) = self.similarity {
            params.similarity_threshold = threshold;
        }
        if let Some(threshold) = self.shared_peaks {
            params.shared_peaks_threshold = threshold;
        }
        if let Some(threshold) = self.ppm_error {
            params.ppm_error_threshold = threshold;
        }
        Ok(())
    }
}

/// Resolve parameters: defaults, then config file, then command line.
fn resolve_params(config: Option<&Path>, args: &CheckArgs) -> Result<CheckParams> {
    let mut params = CheckParams::default();
    if let Some(path) = config {
        info!("Loading configuration from {}", path.display());
        Config::from_file(path)?.apply(&mut params)?;
    }
    args.apply(&mut params)?;
    Ok(params)
}

pub(super) fn load_table(path: &Path, delimiter: Option<Delimiter>) -> Result<FeatureTable> {
    if !path.exists() {
        anyhow::bail!("Feature table does not exist: {}", path.display());
    }
    let delimiter = delimiter.unwrap_or_else(|| Delimiter::from_path(path));
    FeatureTable::from_path_with(path, delimiter)
        .with_context(|| format!("Failed to load feature table {}", path.display()))
}

/// Run the consistency check on a feature table
pub fn run(
    table: PathBuf,
    config: Option<PathBuf>,
    delimiter: Option<Delimiter>,
    output: Option<PathBuf>,
    json: Option<PathBuf>,
    args: CheckArgs,
) -> Result<()> {
    let params = resolve_params(config.as_deref(), &args)?;

    info!("annocheck - annotation consistency");
    info!("==================================");
    info!("Table: {}", table.display());
    info!("Library mode: {}", params.library_mode);
    info!("Ion mode: {}", params.ion_mode);
    info!("Class scope: {}", params.class_scope);
    info!(
        "Thresholds: score > {}, similarity > {}, shared peaks > {}, ppm < {}",
        params.score_threshold,
        params.similarity_threshold,
        params.shared_peaks_threshold,
        params.ppm_error_threshold
    );

    let features = load_table(&table, delimiter)?;
    info!("Features = {}", features.len());

    let report = check_matching_annotations(&features, &params).context("Consistency check failed")?;

    // Use colorized output if available
    #[cfg(feature = "colorized_output")]
    {
        println!("{}", report.format_colored());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("{}", report);
    }

    if let Some(output) = output {
        report
            .annotations
            .write_path(&output)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        info!("Wrote {} annotated rows to {}", report.usable_pairs(), output.display());
    }

    if let Some(json) = json {
        let summary = report.summary_json()?;
        std::fs::write(&json, summary)
            .with_context(|| format!("Failed to write {}", json.display()))?;
        info!("Wrote summary tables to {}", json.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use annocheck::check::LibraryMode;

    #[test]
    fn test_cli_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("annocheck.toml");
        std::fs::write(
            &config,
            "[check]\nlibrary_mode = \"analogue\"\nscore_threshold = 0.9\n",
        )
        .unwrap();

        let args = CheckArgs {
            score_threshold: Some(0.5),
            ..Default::default()
        };
        let params = resolve_params(Some(&config), &args).unwrap();

        assert_eq!(params.library_mode, LibraryMode::Analogue);
        assert_eq!(params.score_threshold, 0.5);
        assert_eq!(params.ppm_error_threshold, 10.0);
    }

    #[test]
    fn test_missing_table() {
        let result = load_table(Path::new("does/not/exist.tsv"), None);
        assert!(result.is_err());
    }
}
