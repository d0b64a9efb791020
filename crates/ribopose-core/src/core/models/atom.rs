//! The closed vocabulary of RNA atom names.
//!
//! Every atom a template can carry is one of the [`AtomName`] variants below.
//! Text names follow the PDB convention for nucleic acids, with primes on the
//! ribose atoms (`O5'`, `H2''`). The ordering weights define the canonical
//! output order used when structures are written to disk: phosphate first,
//! then the ribose backbone 5' to 3', then the base.

use phf::{Map, phf_map};
use std::fmt;

/// A chemically meaningful atom name within a nucleotide.
///
/// The set is closed: 25 names shared by all four bases plus the base-specific
/// names carried by the payload structs in
/// [`template`](crate::core::models::template).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomName {
    // Phosphate group.
    P,
    Op1,
    Op2,
    // Ribose and backbone.
    O5p,
    C5p,
    H5p,
    H5pp,
    C4p,
    H4p,
    O4p,
    C1p,
    H1p,
    C2p,
    H2pp,
    O2p,
    H2p,
    C3p,
    H3p,
    O3p,
    // Six-membered base ring, present in all four bases.
    N1,
    N3,
    C2,
    C4,
    C5,
    C6,
    // Base-specific ring atoms and substituents.
    N2,
    N4,
    N6,
    N7,
    N9,
    C8,
    O2,
    O4,
    O6,
    H1,
    H2,
    H3,
    H5,
    H6,
    H8,
    H21,
    H22,
    H41,
    H42,
    H61,
    H62,
}

#[rustfmt::skip]
static ATOM_NAMES: Map<&'static str, AtomName> = phf_map! {
    "P" => AtomName::P, "OP1" => AtomName::Op1, "OP2" => AtomName::Op2,
    "O5'" => AtomName::O5p, "C5'" => AtomName::C5p,
    "H5'" => AtomName::H5p, "H5''" => AtomName::H5pp,
    "C4'" => AtomName::C4p, "H4'" => AtomName::H4p, "O4'" => AtomName::O4p,
    "C1'" => AtomName::C1p, "H1'" => AtomName::H1p,
    "C2'" => AtomName::C2p, "H2''" => AtomName::H2pp,
    "O2'" => AtomName::O2p, "H2'" => AtomName::H2p,
    "C3'" => AtomName::C3p, "H3'" => AtomName::H3p, "O3'" => AtomName::O3p,
    "N1" => AtomName::N1, "N3" => AtomName::N3,
    "C2" => AtomName::C2, "C4" => AtomName::C4,
    "C5" => AtomName::C5, "C6" => AtomName::C6,
    "N2" => AtomName::N2, "N4" => AtomName::N4, "N6" => AtomName::N6,
    "N7" => AtomName::N7, "N9" => AtomName::N9, "C8" => AtomName::C8,
    "O2" => AtomName::O2, "O4" => AtomName::O4, "O6" => AtomName::O6,
    "H1" => AtomName::H1, "H2" => AtomName::H2, "H3" => AtomName::H3,
    "H5" => AtomName::H5, "H6" => AtomName::H6, "H8" => AtomName::H8,
    "H21" => AtomName::H21, "H22" => AtomName::H22,
    "H41" => AtomName::H41, "H42" => AtomName::H42,
    "H61" => AtomName::H61, "H62" => AtomName::H62,
};

#[rustfmt::skip]
static ATOM_ORDER_WEIGHTS: Map<&'static str, i32> = phf_map! {
    // --- Phosphate group (0-99) ---
    "P" => 0, "OP1" => 10, "OP2" => 20,

    // --- Ribose backbone, 5' to 3' (100-299) ---
    "O5'" => 100,
    "C5'" => 110, "H5'" => 111, "H5''" => 112,
    "C4'" => 120, "H4'" => 121,
    "O4'" => 130,
    "C1'" => 140, "H1'" => 141,
    "C2'" => 150, "H2''" => 151,
    "O2'" => 160, "H2'" => 161,
    "C3'" => 170, "H3'" => 171,
    "O3'" => 180,

    // --- Six-membered base ring with substituents (300-499) ---
    "N1" => 300, "H1" => 301,
    "C2" => 310, "H2" => 311,
    "N2" => 320, "H21" => 321, "H22" => 322,
    "O2" => 330,
    "N3" => 340, "H3" => 341,
    "C4" => 350,
    "N4" => 360, "H41" => 361, "H42" => 362,
    "O4" => 365,
    "C5" => 370, "H5" => 371,
    "C6" => 380, "H6" => 381,
    "N6" => 390, "H61" => 391, "H62" => 392,
    "O6" => 395,

    // --- Purine imidazole ring (500-599) ---
    "N7" => 500,
    "C8" => 510, "H8" => 511,
    "N9" => 520,
};

impl AtomName {
    /// Parses a PDB-style atom name, e.g. `"O5'"` or `"H2''"`.
    pub fn parse(name: &str) -> Option<Self> {
        ATOM_NAMES.get(name).copied()
    }

    /// The PDB-style text form of the name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AtomName::P => "P",
            AtomName::Op1 => "OP1",
            AtomName::Op2 => "OP2",
            AtomName::O5p => "O5'",
            AtomName::C5p => "C5'",
            AtomName::H5p => "H5'",
            AtomName::H5pp => "H5''",
            AtomName::C4p => "C4'",
            AtomName::H4p => "H4'",
            AtomName::O4p => "O4'",
            AtomName::C1p => "C1'",
            AtomName::H1p => "H1'",
            AtomName::C2p => "C2'",
            AtomName::H2pp => "H2''",
            AtomName::O2p => "O2'",
            AtomName::H2p => "H2'",
            AtomName::C3p => "C3'",
            AtomName::H3p => "H3'",
            AtomName::O3p => "O3'",
            AtomName::N1 => "N1",
            AtomName::N3 => "N3",
            AtomName::C2 => "C2",
            AtomName::C4 => "C4",
            AtomName::C5 => "C5",
            AtomName::C6 => "C6",
            AtomName::N2 => "N2",
            AtomName::N4 => "N4",
            AtomName::N6 => "N6",
            AtomName::N7 => "N7",
            AtomName::N9 => "N9",
            AtomName::C8 => "C8",
            AtomName::O2 => "O2",
            AtomName::O4 => "O4",
            AtomName::O6 => "O6",
            AtomName::H1 => "H1",
            AtomName::H2 => "H2",
            AtomName::H3 => "H3",
            AtomName::H5 => "H5",
            AtomName::H6 => "H6",
            AtomName::H8 => "H8",
            AtomName::H21 => "H21",
            AtomName::H22 => "H22",
            AtomName::H41 => "H41",
            AtomName::H42 => "H42",
            AtomName::H61 => "H61",
            AtomName::H62 => "H62",
        }
    }

    /// The element symbol, derived from the leading letter of the name.
    pub fn element(&self) -> &'static str {
        match self.as_str().as_bytes().first() {
            Some(b'C') => "C",
            Some(b'N') => "N",
            Some(b'O') => "O",
            Some(b'P') => "P",
            _ => "H",
        }
    }

    /// The canonical output weight. Lower weights are written first within
    /// a residue.
    pub fn ordering_weight(&self) -> i32 {
        ATOM_ORDER_WEIGHTS
            .get(self.as_str())
            .copied()
            .unwrap_or(i32::MAX)
    }
}

impl fmt::Display for AtomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_primed_ribose_names() {
        assert_eq!(AtomName::parse("O5'"), Some(AtomName::O5p));
        assert_eq!(AtomName::parse("H5''"), Some(AtomName::H5pp));
        assert_eq!(AtomName::parse("C1'"), Some(AtomName::C1p));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(AtomName::parse("CA"), None);
        assert_eq!(AtomName::parse("o5'"), None);
        assert_eq!(AtomName::parse(""), None);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for name in [
            AtomName::P,
            AtomName::O5p,
            AtomName::H2pp,
            AtomName::N9,
            AtomName::H61,
        ] {
            assert_eq!(AtomName::parse(name.as_str()), Some(name));
        }
    }

    #[test]
    fn ordering_weights_follow_backbone_then_base() {
        assert!(AtomName::P.ordering_weight() < AtomName::O5p.ordering_weight());
        assert!(AtomName::O5p.ordering_weight() < AtomName::O3p.ordering_weight());
        assert!(AtomName::O3p.ordering_weight() < AtomName::N1.ordering_weight());
        assert!(AtomName::N1.ordering_weight() < AtomName::N9.ordering_weight());
    }

    #[test]
    fn elements_are_derived_from_the_leading_letter() {
        assert_eq!(AtomName::P.element(), "P");
        assert_eq!(AtomName::Op1.element(), "O");
        assert_eq!(AtomName::H5pp.element(), "H");
        assert_eq!(AtomName::N9.element(), "N");
        assert_eq!(AtomName::C1p.element(), "C");
    }
}
