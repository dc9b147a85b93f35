//! Operating modes of the consistency check.

use std::fmt;
use std::str::FromStr;

use super::CheckError;

/// Which GNPS library search results are compared
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LibraryMode {
    /// Exact library matches; the InChI provides a formula to compare
    #[default]
    Regular,
    /// Analogue matches; only the chemical classes are compared
    Analogue,
}

impl LibraryMode {
    /// Returns all accepted spellings.
    pub fn variants() -> &'static [&'static str] {
        &["standard", "regular", "analogue"]
    }
}

impl fmt::Display for LibraryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryMode::Regular => write!(f, "regular"),
            LibraryMode::Analogue => write!(f, "analogue"),
        }
    }
}

impl FromStr for LibraryMode {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if lower.starts_with("ana") {
            Ok(LibraryMode::Analogue)
        } else if lower.starts_with("reg") || lower == "standard" || lower == "std" {
            Ok(LibraryMode::Regular)
        } else {
            Err(CheckError::invalid_mode("library mode", s, Self::variants()))
        }
    }
}

/// Ionisation mode of the acquisition
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IonMode {
    /// Positive ionisation
    #[default]
    Positive,
    /// Negative ionisation
    Negative,
}

impl IonMode {
    /// Lower-case prefix an `IonMode` cell must start with
    pub fn prefix(&self) -> &'static str {
        match self {
            IonMode::Positive => "pos",
            IonMode::Negative => "neg",
        }
    }

    /// Returns all accepted spellings.
    pub fn variants() -> &'static [&'static str] {
        &["pos", "neg"]
    }
}

impl fmt::Display for IonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

impl FromStr for IonMode {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pos" | "positive" | "+" => Ok(IonMode::Positive),
            "neg" | "negative" | "-" => Ok(IonMode::Negative),
            _ => Err(CheckError::invalid_mode("ionisation mode", s, Self::variants())),
        }
    }
}

/// Which CANOPUS columns the library classes are compared against
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClassScope {
    /// Every level is looked up in `CAN_all classifications`
    #[default]
    All,
    /// Each level is compared with the CANOPUS column of the same level
    PerLevel,
}

impl ClassScope {
    /// Returns all accepted spellings.
    pub fn variants() -> &'static [&'static str] {
        &["all", "per-level"]
    }
}

impl fmt::Display for ClassScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassScope::All => write!(f, "all"),
            ClassScope::PerLevel => write!(f, "per-level"),
        }
    }
}

impl FromStr for ClassScope {
    type Err = CheckError;

    // Anything but "all" selects the per-level columns
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(ClassScope::All),
            "" => Err(CheckError::invalid_mode("classification scope", s, Self::variants())),
            _ => Ok(ClassScope::PerLevel),
        }
    }
}
