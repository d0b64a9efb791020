//! The four standard RNA base kinds.

use std::fmt;

/// One of the four standard RNA bases.
///
/// The kind decides which atom payload a template carries and which ring
/// nitrogen anchors the glycosidic bond: N9 for purines, N1 for pyrimidines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseKind {
    Adenine,
    Cytosine,
    Guanine,
    Uracil,
}

impl BaseKind {
    /// Parses a one-letter base code.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "A" => Some(BaseKind::Adenine),
            "C" => Some(BaseKind::Cytosine),
            "G" => Some(BaseKind::Guanine),
            "U" => Some(BaseKind::Uracil),
            _ => None,
        }
    }

    /// The one-letter base code.
    pub fn code(&self) -> &'static str {
        match self {
            BaseKind::Adenine => "A",
            BaseKind::Cytosine => "C",
            BaseKind::Guanine => "G",
            BaseKind::Uracil => "U",
        }
    }

    /// True for the two-ring bases A and G.
    pub fn is_purine(&self) -> bool {
        matches!(self, BaseKind::Adenine | BaseKind::Guanine)
    }

    /// True for the single-ring bases C and U.
    pub fn is_pyrimidine(&self) -> bool {
        !self.is_purine()
    }
}

impl fmt::Display for BaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
