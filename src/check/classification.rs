//! Chemical class agreement between GNPS library compounds and CANOPUS.
//!
//! A library label agrees when it occurs verbatim (case-sensitive substring) in
//! the CANOPUS field. Short labels can therefore match inside unrelated longer
//! ones; this is kept as is so results stay comparable with earlier reports.

use std::fmt;

use super::{ClassScope, Verdict};
use crate::table::columns::{self, LibraryColumns};

/// Granularity of a chemical classification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClassLevel {
    /// Broadest level
    Superclass,
    /// Middle level
    Class,
    /// Most specific level compared
    Subclass,
}

impl ClassLevel {
    /// All compared levels, broadest first
    pub const ALL: [ClassLevel; 3] = [ClassLevel::Superclass, ClassLevel::Class, ClassLevel::Subclass];

    /// Library column holding this level
    pub fn library_column<'a>(&self, library: &'a LibraryColumns) -> &'a str {
        match self {
            ClassLevel::Superclass => &library.superclass,
            ClassLevel::Class => &library.class,
            ClassLevel::Subclass => &library.subclass,
        }
    }

    /// CANOPUS column the library label is looked up in
    pub fn canopus_column(&self, scope: ClassScope) -> &'static str {
        match (scope, self) {
            (ClassScope::All, _) => columns::CANOPUS_ALL,
            (ClassScope::PerLevel, ClassLevel::Superclass) => columns::CANOPUS_SUPERCLASS,
            (ClassScope::PerLevel, ClassLevel::Class) => columns::CANOPUS_CLASS,
            (ClassScope::PerLevel, ClassLevel::Subclass) => columns::CANOPUS_SUBCLASS,
        }
    }

    /// Derived verdict column
    pub fn match_column(&self) -> &'static str {
        match self {
            ClassLevel::Superclass => columns::MATCH_SUPERCLASS,
            ClassLevel::Class => columns::MATCH_CLASS,
            ClassLevel::Subclass => columns::MATCH_SUBCLASS,
        }
    }
}

impl fmt::Display for ClassLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassLevel::Superclass => write!(f, "superclass"),
            ClassLevel::Class => write!(f, "class"),
            ClassLevel::Subclass => write!(f, "subclass"),
        }
    }
}

/// Whether the library label occurs in the CANOPUS field
pub fn class_verdict(library: Option<&str>, canopus: Option<&str>) -> Verdict {
    Verdict::compare(library, canopus, |label, field| field.contains(label))
}
