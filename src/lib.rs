//! # annocheck - Cross-checking Metabolomics Annotations
//!
//! `annocheck` compares the annotations two independent tools produced for the same
//! LC-MS/MS features:
//!
//! - **GNPS spectral library matching** (regular or analogue search), which assigns a
//!   reference compound with an InChI and a ClassyFire classification
//! - **SIRIUS** with **ZODIAC** formula ranking and **CANOPUS** compound classes
//!
//! Both annotations are joined per feature in an exported feature table. The check
//! keeps the trustworthy library matches, then reports how often SIRIUS agrees with
//! them on the molecular formula and on the chemical class at three levels.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use annocheck::check::{check_matching_annotations, CheckParams};
//! use annocheck::table::FeatureTable;
//!
//! let table = FeatureTable::from_path("feature_table.tsv")?;
//! let report = check_matching_annotations(&table, &CheckParams::default())?;
//!
//! println!("{}", report.matching_table);
//! println!("{}", report.class_table);
//!
//! // Rows whose superclass agrees, above the ZODIAC threshold
//! let agreeing = report.rows(&report.superclass.matches);
//! println!("{} agreeing features", agreeing.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Feature Table Columns
//!
//! | Column | Source | Used for |
//! |--------|--------|----------|
//! | `GNPS_LIB_IonMode` / `GNPS_LIBA_IonMode` | GNPS | ionisation mode filter |
//! | `GNPS_LIB_SpecCharge` | GNPS | charge filter |
//! | `GNPS_LIB_SharedPeaks` | GNPS | shared peak filter |
//! | `GNPS_LIB_MQScore` | GNPS | similarity filter |
//! | `GNPS_LIB_MZErrorPPM` | GNPS | mass error filter (regular) |
//! | `GNPS_LIB_INCHI` | GNPS | formula extraction (regular) |
//! | `GNPS_LIB_Adduct` | GNPS | in-source fragment filter (regular) |
//! | `GNPS_LIB_superclass`, `_class`, `_subclass` | GNPS | class check |
//! | `SIR_MF_Zod_molecularFormula` | SIRIUS | formula check |
//! | `SIR_MF_Zod_ZodiacScore` | ZODIAC | score-filtered counts |
//! | `CAN_superclass`, `CAN_class`, `CAN_subclass`, `CAN_all classifications` | CANOPUS | class check |
//!
//! The library is organized into the following modules:
//!
//! - [`table`]: feature table loading, cell access, filtering and export
//! - [`check`]: filters, formula and class verdicts, the consistency report
//! - [`summary`]: count/proportion tables

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod check;
pub mod summary;
pub mod table;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::check::{
        annotate_matches, check_matching_annotations, AnnotatedPairs, CheckError, CheckParams,
        ClassLevel, ClassScope, ConsistencyReport, FilterStage, IonMode, LevelSummary,
        LibraryMode, Verdict,
    };
    pub use crate::summary::{SummaryRow, SummaryTable};
    pub use crate::table::columns::ColumnSet;
    pub use crate::table::{Delimiter, FeatureRow, FeatureTable, TableError};
}
