//! Column names of the exported feature table.
//!
//! Source A (GNPS library matching) columns share a prefix per search mode, so only
//! their suffixes are listed here; [`LibraryColumns`] resolves full names.

use serde::{Deserialize, Serialize};

/// Prefix of regular (exact) library match columns
pub const REGULAR_PREFIX: &str = "GNPS_LIB_";
/// Prefix of analogue library match columns
pub const ANALOGUE_PREFIX: &str = "GNPS_LIBA_";

/// Ionisation mode of the matched library spectrum
pub const ION_MODE: &str = "IonMode";
/// Charge of the matched library spectrum
pub const SPEC_CHARGE: &str = "SpecCharge";
/// Spectral similarity (cosine) score
pub const MQ_SCORE: &str = "MQScore";
/// Number of peaks shared with the library spectrum
pub const SHARED_PEAKS: &str = "SharedPeaks";
/// Precursor mass error in ppm
pub const MZ_ERROR_PPM: &str = "MZErrorPPM";
/// InChI of the library compound
pub const INCHI: &str = "INCHI";
/// Adduct of the library spectrum
pub const ADDUCT: &str = "Adduct";
/// Library compound superclass
pub const SUPERCLASS: &str = "superclass";
/// Library compound class
pub const CLASS: &str = "class";
/// Library compound subclass
pub const SUBCLASS: &str = "subclass";

/// ZODIAC-ranked molecular formula (SIRIUS)
pub const SIRIUS_FORMULA: &str = "SIR_MF_Zod_molecularFormula";
/// ZODIAC score of the molecular formula
pub const ZODIAC_SCORE: &str = "SIR_MF_Zod_ZodiacScore";
/// CANOPUS superclass
pub const CANOPUS_SUPERCLASS: &str = "CAN_superclass";
/// CANOPUS class
pub const CANOPUS_CLASS: &str = "CAN_class";
/// CANOPUS subclass
pub const CANOPUS_SUBCLASS: &str = "CAN_subclass";
/// All CANOPUS classifications joined in one field
pub const CANOPUS_ALL: &str = "CAN_all classifications";

// Derived columns
/// First three characters of the SIRIUS formula
pub const SIRIUS_FORMULA_PARTIAL: &str = "SIR_MF_Zod_molecularFormula_partial";
/// Molecular formula verdict
pub const FORMULA_MATCH: &str = "MF_match";
/// Superclass verdict
pub const MATCH_SUPERCLASS: &str = "Match_GNPSsuperclass-SIRIUS";
/// Class verdict
pub const MATCH_CLASS: &str = "Match_GNPSclass-SIRIUS";
/// Subclass verdict
pub const MATCH_SUBCLASS: &str = "Match_GNPSsubclass-SIRIUS";

/// Column prefixes of the two library search modes.
///
/// Feature tables from older exports sometimes use different prefixes, so they can
/// be overridden from the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSet {
    /// Prefix of regular library match columns
    pub regular_prefix: String,
    /// Prefix of analogue library match columns
    pub analogue_prefix: String,
}

impl Default for ColumnSet {
    fn default() -> Self {
        Self {
            regular_prefix: REGULAR_PREFIX.to_string(),
            analogue_prefix: ANALOGUE_PREFIX.to_string(),
        }
    }
}

/// Fully qualified source A column names for one library search mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryColumns {
    /// Ionisation mode
    pub ion_mode: String,
    /// Spectrum charge
    pub charge: String,
    /// Similarity score
    pub similarity: String,
    /// Shared peak count
    pub shared_peaks: String,
    /// Mass error (ppm)
    pub ppm_error: String,
    /// InChI identifier
    pub inchi: String,
    /// Adduct descriptor
    pub adduct: String,
    /// Superclass label
    pub superclass: String,
    /// Class label
    pub class: String,
    /// Subclass label
    pub subclass: String,
    /// Derived: formula layer of the InChI
    pub inchi_formula: String,
    /// Derived: first three characters of the InChI formula
    pub inchi_formula_partial: String,
}

impl LibraryColumns {
    /// Resolve column names for the given prefix
    pub fn with_prefix(prefix: &str) -> Self {
        let name = |suffix: &str| format!("{}{}", prefix, suffix);
        Self {
            ion_mode: name(ION_MODE),
            charge: name(SPEC_CHARGE),
            similarity: name(MQ_SCORE),
            shared_peaks: name(SHARED_PEAKS),
            ppm_error: name(MZ_ERROR_PPM),
            inchi: name(INCHI),
            adduct: name(ADDUCT),
            superclass: name(SUPERCLASS),
            class: name(CLASS),
            subclass: name(SUBCLASS),
            inchi_formula: name("INCHI_MF"),
            inchi_formula_partial: name("INCHI_MF_partial"),
        }
    }
}
