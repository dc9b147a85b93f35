use std::fmt;

/// Outcome of comparing one annotation of source A with one of source B.
///
/// `Unknown` means one side had nothing to compare; such rows are left out of
/// every denominator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Both annotations agree
    Yes,
    /// Both annotations are present and disagree
    No,
    /// At least one annotation is missing
    Unknown,
}

impl Verdict {
    /// Compare two optional values with `agree`; missing on either side is `Unknown`
    pub fn compare<F>(a: Option<&str>, b: Option<&str>, agree: F) -> Self
    where
        F: FnOnce(&str, &str) -> bool,
    {
        match (a, b) {
            (Some(a), Some(b)) if agree(a, b) => Verdict::Yes,
            (Some(_), Some(_)) => Verdict::No,
            _ => Verdict::Unknown,
        }
    }

    /// Whether both sides were available
    pub fn is_known(&self) -> bool {
        !matches!(self, Verdict::Unknown)
    }

    /// Whether the annotations agree
    pub fn is_yes(&self) -> bool {
        matches!(self, Verdict::Yes)
    }

    /// Cell value in the augmented table (`Unknown` is a missing cell)
    pub fn to_cell(self) -> Option<String> {
        match self {
            Verdict::Yes => Some("yes".to_string()),
            Verdict::No => Some("no".to_string()),
            Verdict::Unknown => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Yes => write!(f, "yes"),
            Verdict::No => write!(f, "no"),
            Verdict::Unknown => write!(f, "unknown"),
        }
    }
}
