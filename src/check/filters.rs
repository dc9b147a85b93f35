use log::debug;
use serde::Serialize;

use super::{formula, CheckError, CheckParams, LibraryMode};
use crate::table::columns::{self, LibraryColumns};
use crate::table::{FeatureRow, FeatureTable};

/// Row counts around one filter stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterStage {
    /// Name of the stage
    pub name: String,
    /// Rows entering the stage
    pub rows_before: usize,
    /// Rows kept by the stage
    pub rows_after: usize,
}

impl FilterStage {
    /// Rows dropped by the stage
    pub fn removed(&self) -> usize {
        self.rows_before - self.rows_after
    }
}

/// Applies named predicates to a table in order and records what each one removed
pub(crate) struct FilterPipeline<'a> {
    table: &'a mut FeatureTable,
    stages: Vec<FilterStage>,
}

impl<'a> FilterPipeline<'a> {
    pub(crate) fn new(table: &'a mut FeatureTable) -> Self {
        Self {
            table,
            stages: Vec::new(),
        }
    }

    pub(crate) fn stage<F>(&mut self, name: impl Into<String>, predicate: F)
    where
        F: FnMut(&FeatureRow) -> bool,
    {
        let rows_before = self.table.len();
        self.table.retain(predicate);
        let stage = FilterStage {
            name: name.into(),
            rows_before,
            rows_after: self.table.len(),
        };
        debug!(
            "{}: {} -> {} rows ({} removed)",
            stage.name,
            stage.rows_before,
            stage.rows_after,
            stage.removed()
        );
        self.stages.push(stage);
    }

    pub(crate) fn rows(&self) -> usize {
        self.table.len()
    }

    pub(crate) fn finish(self) -> Vec<FilterStage> {
        self.stages
    }
}

/// Lower-cased ion mode cell starts with the requested prefix; missing fails
pub(crate) fn ion_mode_matches(cell: Option<&str>, prefix: &str) -> bool {
    cell.is_some_and(|mode| mode.to_lowercase().starts_with(prefix))
}

/// Column positions needed by the filters of one library mode
struct FilterColumns {
    identifier: usize,
    formula: usize,
    ion_mode: usize,
    charge: usize,
    shared_peaks: usize,
    similarity: usize,
    regular: Option<RegularColumns>,
}

struct RegularColumns {
    ppm_error: usize,
    adduct: usize,
}

impl FilterColumns {
    fn resolve(
        table: &FeatureTable,
        library: &LibraryColumns,
        mode: LibraryMode,
    ) -> Result<Self, CheckError> {
        let identifier = match mode {
            LibraryMode::Regular => &library.inchi,
            LibraryMode::Analogue => &library.superclass,
        };
        Ok(Self {
            identifier: table.column_index(identifier)?,
            formula: table.column_index(columns::SIRIUS_FORMULA)?,
            ion_mode: table.column_index(&library.ion_mode)?,
            charge: table.column_index(&library.charge)?,
            shared_peaks: table.column_index(&library.shared_peaks)?,
            similarity: table.column_index(&library.similarity)?,
            regular: match mode {
                LibraryMode::Regular => Some(RegularColumns {
                    ppm_error: table.column_index(&library.ppm_error)?,
                    adduct: table.column_index(&library.adduct)?,
                }),
                LibraryMode::Analogue => None,
            },
        })
    }
}

/// Outcome of [`filter_pairs`]
pub(crate) struct FilterOutcome {
    pub(crate) stages: Vec<FilterStage>,
    pub(crate) candidate_pairs: usize,
}

/// Narrow `table` down to the library/SIRIUS pairs worth comparing
pub(crate) fn filter_pairs(
    table: &mut FeatureTable,
    library: &LibraryColumns,
    params: &CheckParams,
) -> Result<FilterOutcome, CheckError> {
    let cols = FilterColumns::resolve(table, library, params.library_mode)?;
    let prefix = params.ion_mode.prefix();

    let mut pipeline = FilterPipeline::new(table);

    pipeline.stage("annotated by both tools", |row| {
        row.is_present(cols.identifier) && row.is_present(cols.formula)
    });
    let candidate_pairs = pipeline.rows();

    pipeline.stage(format!("ion mode {}", params.ion_mode), |row| {
        ion_mode_matches(row.text(cols.ion_mode), prefix)
    });
    pipeline.stage("charge <= 1", |row| {
        row.number(cols.charge).is_some_and(|z| z <= 1.0)
    });
    pipeline.stage(format!("shared peaks > {}", params.shared_peaks_threshold), |row| {
        row.number(cols.shared_peaks)
            .is_some_and(|n| n > params.shared_peaks_threshold as f64)
    });
    pipeline.stage(format!("similarity > {}", params.similarity_threshold), |row| {
        row.number(cols.similarity)
            .is_some_and(|s| s > params.similarity_threshold)
    });

    if let Some(regular) = &cols.regular {
        pipeline.stage(format!("mass error < {} ppm", params.ppm_error_threshold), |row| {
            row.number(regular.ppm_error)
                .is_some_and(|ppm| ppm < params.ppm_error_threshold)
        });
        pipeline.stage("no charged species or salts", |row| {
            row.text(cols.identifier).is_some_and(|inchi| !formula::is_charged(inchi))
        });
        pipeline.stage("standard InChI", |row| {
            row.text(cols.identifier).is_some_and(formula::is_inchi)
        });
        // a missing adduct is not evidence of an in-source fragment
        pipeline.stage("no in-source fragments", |row| {
            !row.text(regular.adduct).is_some_and(formula::is_in_source_fragment)
        });
        pipeline.stage("InChI formula starts with carbon", |row| {
            row.text(cols.identifier)
                .and_then(formula::inchi_formula)
                .is_some_and(formula::is_carbon_formula)
        });
    }

    Ok(FilterOutcome {
        stages: pipeline.finish(),
        candidate_pairs,
    })
}
