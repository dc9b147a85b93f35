//! # Annotation Consistency Check
//!
//! Compares GNPS spectral library matches with the SIRIUS molecular formula (ZODIAC)
//! and CANOPUS chemical class annotations of the same features.
//!
//! ## Steps
//!
//! 1. **Pairing**: keep features annotated by both tools (library InChI or, in
//!    analogue mode, library superclass; plus a SIRIUS formula)
//! 2. **Quality filters**: ionisation mode, charge, shared peaks, similarity and,
//!    for regular matches, mass error, charged species, InChI format and in-source
//!    fragments
//! 3. **Formula check** (regular mode): partial formula agreement
//! 4. **Class check**: superclass, class and subclass agreement with CANOPUS
//! 5. **Summary**: counts and proportions, overall and above the ZODIAC score
//!    threshold
//!
//! ## Usage
//!
//! ```rust,no_run
//! use annocheck::check::{check_matching_annotations, CheckParams, LibraryMode};
//! use annocheck::table::FeatureTable;
//!
//! let table = FeatureTable::from_path("feature_table.tsv")?;
//! let params = CheckParams {
//!     library_mode: LibraryMode::Analogue,
//!     ..Default::default()
//! };
//! let report = check_matching_annotations(&table, &params)?;
//! println!("{}", report);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use log::info;

pub use classification::{class_verdict, ClassLevel};
pub use error::CheckError;
pub use filters::FilterStage;
pub use formula::formula_verdict;
pub use mode::{ClassScope, IonMode, LibraryMode};
pub use report::{ConsistencyReport, FormulaSummary, LevelSummary, RowSubset};
pub use verdict::Verdict;

use crate::table::columns::{self, ColumnSet, LibraryColumns};
use crate::table::FeatureTable;

pub mod classification;
pub mod formula;

mod error;
mod filters;
mod mode;
mod report;
mod verdict;

/// Parameters of the consistency check
#[derive(Debug, Clone, PartialEq)]
pub struct CheckParams {
    /// Minimum ZODIAC score (exclusive) for the score-filtered counts
    pub score_threshold: f64,
    /// Ionisation mode of the library spectra to keep
    pub ion_mode: IonMode,
    /// Regular or analogue library matches
    pub library_mode: LibraryMode,
    /// CANOPUS columns used for the class check
    pub class_scope: ClassScope,
    /// Minimum spectral similarity (exclusive)
    pub similarity_threshold: f64,
    /// Minimum number of shared peaks (exclusive)
    pub shared_peaks_threshold: u32,
    /// Maximum precursor mass error in ppm (exclusive, regular mode only)
    pub ppm_error_threshold: f64,
    /// Column prefixes of the library matches
    pub columns: ColumnSet,
}

impl Default for CheckParams {
    fn default() -> Self {
        Self {
            score_threshold: 0.7,
            ion_mode: IonMode::Positive,
            library_mode: LibraryMode::Regular,
            class_scope: ClassScope::All,
            similarity_threshold: 0.7,
            shared_peaks_threshold: 6,
            ppm_error_threshold: 10.0,
            columns: ColumnSet::default(),
        }
    }
}

impl CheckParams {
    /// Library columns of the selected mode
    pub fn library_columns(&self) -> LibraryColumns {
        match self.library_mode {
            LibraryMode::Regular => LibraryColumns::with_prefix(&self.columns.regular_prefix),
            LibraryMode::Analogue => LibraryColumns::with_prefix(&self.columns.analogue_prefix),
        }
    }

    /// Columns the selected mode reads from the feature table
    pub fn required_columns(&self) -> Vec<String> {
        let library = self.library_columns();
        let mut required = vec![
            library.ion_mode.clone(),
            library.charge.clone(),
            library.shared_peaks.clone(),
            library.similarity.clone(),
            library.superclass.clone(),
            library.class.clone(),
            library.subclass.clone(),
        ];
        if self.library_mode == LibraryMode::Regular {
            required.extend([library.inchi, library.ppm_error, library.adduct]);
        }
        required.push(columns::SIRIUS_FORMULA.to_string());
        required.push(columns::ZODIAC_SCORE.to_string());
        for level in ClassLevel::ALL {
            let canopus = level.canopus_column(self.class_scope).to_string();
            if !required.contains(&canopus) {
                required.push(canopus);
            }
        }
        required
    }
}

/// Filtered feature pairs with their verdicts, before any proportions are taken
#[derive(Debug, Clone)]
pub struct AnnotatedPairs {
    /// Mode the pairs were built with
    pub library_mode: LibraryMode,
    /// Filtered table with the derived columns appended
    pub annotations: FeatureTable,
    /// Row counts of every filter stage
    pub stages: Vec<FilterStage>,
    /// Features annotated by both tools, before quality filters
    pub candidate_pairs: usize,
    /// ZODIAC score of every row of `annotations`
    pub scores: Vec<Option<f64>>,
    /// Formula verdicts (regular mode only)
    pub formula: Option<Vec<Verdict>>,
    /// Class verdicts, in [`ClassLevel::ALL`] order
    pub classes: [Vec<Verdict>; 3],
}

impl AnnotatedPairs {
    /// Pairs left after all filters
    pub fn usable_pairs(&self) -> usize {
        self.annotations.len()
    }

    /// Class verdicts of one level
    pub fn class_verdicts(&self, level: ClassLevel) -> &[Verdict] {
        match level {
            ClassLevel::Superclass => &self.classes[0],
            ClassLevel::Class => &self.classes[1],
            ClassLevel::Subclass => &self.classes[2],
        }
    }
}

/// Filter the table and compute every per-row verdict.
///
/// The input is left untouched; the returned table is a narrowed copy.
pub fn annotate_matches(
    table: &FeatureTable,
    params: &CheckParams,
) -> Result<AnnotatedPairs, CheckError> {
    let library = params.library_columns();
    let mut annotations = table.clone();

    match params.library_mode {
        LibraryMode::Regular => {
            info!("=== Looking at match between GNPS library in REGULAR mode and SIRIUS annotation ===")
        }
        LibraryMode::Analogue => {
            info!("=== Looking at match between GNPS library in ANALOGUE mode and SIRIUS annotation ===")
        }
    }

    let outcome = filters::filter_pairs(&mut annotations, &library, params)?;
    info!("GNPS/SIRIUS annotation pairs = {}", outcome.candidate_pairs);
    info!("Usable GNPS/SIRIUS annotations = {}", annotations.len());

    let score = annotations.column_index(columns::ZODIAC_SCORE)?;
    let scores: Vec<Option<f64>> = annotations.rows().iter().map(|r| r.number(score)).collect();

    let formula = match params.library_mode {
        LibraryMode::Regular => Some(annotate_formulas(&mut annotations, &library)?),
        LibraryMode::Analogue => None,
    };

    match params.class_scope {
        ClassScope::All => info!("Check with CANOPUS ALL classification level"),
        ClassScope::PerLevel => info!("Check with CANOPUS SPECIFIC classification levels"),
    }
    let mut classes: [Vec<Verdict>; 3] = Default::default();
    // appended most specific first, as in previously published tables
    for (i, level) in ClassLevel::ALL.iter().enumerate().rev() {
        classes[i] = annotate_classes(&mut annotations, &library, *level, params.class_scope)?;
    }

    Ok(AnnotatedPairs {
        library_mode: params.library_mode,
        annotations,
        stages: outcome.stages,
        candidate_pairs: outcome.candidate_pairs,
        scores,
        formula,
        classes,
    })
}

/// Run the full check: filters, verdicts and summary tables.
///
/// Fails with [`CheckError::EmptyDenominator`] when no pair survives far enough
/// for a proportion to be defined.
pub fn check_matching_annotations(
    table: &FeatureTable,
    params: &CheckParams,
) -> Result<ConsistencyReport, CheckError> {
    let pairs = annotate_matches(table, params)?;
    ConsistencyReport::summarize(pairs, params.score_threshold)
}

fn annotate_formulas(
    annotations: &mut FeatureTable,
    library: &LibraryColumns,
) -> Result<Vec<Verdict>, CheckError> {
    let inchi = annotations.column_index(&library.inchi)?;
    let sirius = annotations.column_index(columns::SIRIUS_FORMULA)?;

    let mut inchi_formulas = Vec::with_capacity(annotations.len());
    let mut inchi_partials = Vec::with_capacity(annotations.len());
    let mut sirius_partials = Vec::with_capacity(annotations.len());
    let mut verdicts = Vec::with_capacity(annotations.len());

    for row in annotations.rows() {
        let inchi_formula = row.text(inchi).and_then(formula::inchi_formula);
        let sirius_formula = row.text(sirius);

        inchi_formulas.push(inchi_formula.map(str::to_string));
        inchi_partials.push(inchi_formula.map(formula::partial_formula));
        sirius_partials.push(sirius_formula.map(formula::partial_formula));
        verdicts.push(formula_verdict(inchi_formula, sirius_formula));
    }

    annotations.append_column(&library.inchi_formula, inchi_formulas)?;
    annotations.append_column(&library.inchi_formula_partial, inchi_partials)?;
    annotations.append_column(columns::SIRIUS_FORMULA_PARTIAL, sirius_partials)?;
    annotations.append_column(
        columns::FORMULA_MATCH,
        verdicts.iter().map(|v| v.to_cell()).collect(),
    )?;

    Ok(verdicts)
}

fn annotate_classes(
    annotations: &mut FeatureTable,
    library: &LibraryColumns,
    level: ClassLevel,
    scope: ClassScope,
) -> Result<Vec<Verdict>, CheckError> {
    let gnps = annotations.column_index(level.library_column(library))?;
    let canopus = annotations.column_index(level.canopus_column(scope))?;

    let verdicts: Vec<Verdict> = annotations
        .rows()
        .iter()
        .map(|row| class_verdict(row.text(gnps), row.text(canopus)))
        .collect();

    annotations.append_column(
        level.match_column(),
        verdicts.iter().map(|v| v.to_cell()).collect(),
    )?;
    Ok(verdicts)
}
