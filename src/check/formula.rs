//! InChI sanity checks and the partial molecular formula comparison.
//!
//! SIRIUS formulas follow the ionisation model (water losses, ammonium adducts,
//! ...) and rarely equal the neutral formula in the library InChI character for
//! character. Only the first three characters are compared, which in practice is
//! the carbon count of the two formulas.

use super::Verdict;

/// Substrings marking charged species or salts in an InChI
pub const CHARGED_TOKENS: [&str; 4] = ["q:+", "p+1", "p+2", "p-1"];

/// Accepted leading tokens of an InChI (compared upper-cased)
pub const INCHI_PREFIXES: [&str; 2] = ["INCHI", "1S"];

/// Substrings marking in-source fragment or isotope adducts
pub const FRAGMENT_MARKERS: [&str; 2] = ["-C", "i"];

/// Number of leading formula characters compared
pub const PARTIAL_FORMULA_LEN: usize = 3;

/// Whether the InChI describes a charged species or a salt
pub fn is_charged(inchi: &str) -> bool {
    CHARGED_TOKENS.iter().any(|t| inchi.contains(t))
}

/// Whether the identifier looks like a standard InChI
pub fn is_inchi(identifier: &str) -> bool {
    let upper = identifier.to_uppercase();
    INCHI_PREFIXES.iter().any(|p| upper.starts_with(p))
}

/// Whether the adduct marks an in-source fragment or isotope match
pub fn is_in_source_fragment(adduct: &str) -> bool {
    FRAGMENT_MARKERS.iter().any(|m| adduct.contains(m))
}

/// Formula layer of an InChI: the second `/`-separated field
pub fn inchi_formula(inchi: &str) -> Option<&str> {
    inchi.split('/').nth(1)
}

/// Whether a formula starts with carbon (rules out odd InChI layers)
pub fn is_carbon_formula(formula: &str) -> bool {
    formula
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'C'))
}

/// Leading characters used for the comparison
pub fn partial_formula(formula: &str) -> String {
    formula.chars().take(PARTIAL_FORMULA_LEN).collect()
}

/// Compare the partial formulas of library and SIRIUS annotations
pub fn formula_verdict(library: Option<&str>, sirius: Option<&str>) -> Verdict {
    Verdict::compare(library, sirius, |a, b| partial_formula(a) == partial_formula(b))
}
