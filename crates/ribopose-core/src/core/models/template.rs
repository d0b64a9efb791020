//! Rigid nucleotide conformations and their alignment transforms.
//!
//! A [`NucleotideTemplate`] is an immutable bundle of local atom coordinates
//! together with the precomputed transforms the placement generators need: the
//! standard-frame transform that carries the stored atoms into the canonical
//! base frame, and the three backbone continuation rotamers that hang a
//! successor phosphate off the template's O3'.
//!
//! Atom storage is split into the 25 coordinates every base shares
//! ([`CommonAtoms`]) and a base-specific payload ([`BasePayload`]), so asking
//! a uracil template for its N9 is an explicit error rather than a silent
//! garbage coordinate.

use nalgebra::Point3;
use thiserror::Error;

use super::atom::AtomName;
use super::base::BaseKind;
use crate::core::geometry::Transform;

/// Errors raised by atom lookups against a template.
#[derive(Debug, Error, PartialEq)]
pub enum TemplateError {
    /// The requested atom does not exist for the template's base kind.
    #[error("template '{template}' ({kind}) does not carry atom {atom}")]
    InvalidVariant {
        template: String,
        kind: BaseKind,
        atom: AtomName,
    },
}

/// The 25 atoms shared by all four bases: the phosphate group, the ribose
/// with its hydrogens, and the six-membered base ring.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonAtoms {
    pub p: Point3<f64>,
    pub op1: Point3<f64>,
    pub op2: Point3<f64>,
    pub o5p: Point3<f64>,
    pub c5p: Point3<f64>,
    pub h5p: Point3<f64>,
    pub h5pp: Point3<f64>,
    pub c4p: Point3<f64>,
    pub h4p: Point3<f64>,
    pub o4p: Point3<f64>,
    pub c1p: Point3<f64>,
    pub h1p: Point3<f64>,
    pub c2p: Point3<f64>,
    pub h2pp: Point3<f64>,
    pub o2p: Point3<f64>,
    pub h2p: Point3<f64>,
    pub c3p: Point3<f64>,
    pub h3p: Point3<f64>,
    pub o3p: Point3<f64>,
    pub n1: Point3<f64>,
    pub n3: Point3<f64>,
    pub c2: Point3<f64>,
    pub c4: Point3<f64>,
    pub c5: Point3<f64>,
    pub c6: Point3<f64>,
}

impl CommonAtoms {
    fn atom(&self, name: AtomName) -> Option<Point3<f64>> {
        match name {
            AtomName::P => Some(self.p),
            AtomName::Op1 => Some(self.op1),
            AtomName::Op2 => Some(self.op2),
            AtomName::O5p => Some(self.o5p),
            AtomName::C5p => Some(self.c5p),
            AtomName::H5p => Some(self.h5p),
            AtomName::H5pp => Some(self.h5pp),
            AtomName::C4p => Some(self.c4p),
            AtomName::H4p => Some(self.h4p),
            AtomName::O4p => Some(self.o4p),
            AtomName::C1p => Some(self.c1p),
            AtomName::H1p => Some(self.h1p),
            AtomName::C2p => Some(self.c2p),
            AtomName::H2pp => Some(self.h2pp),
            AtomName::O2p => Some(self.o2p),
            AtomName::H2p => Some(self.h2p),
            AtomName::C3p => Some(self.c3p),
            AtomName::H3p => Some(self.h3p),
            AtomName::O3p => Some(self.o3p),
            AtomName::N1 => Some(self.n1),
            AtomName::N3 => Some(self.n3),
            AtomName::C2 => Some(self.c2),
            AtomName::C4 => Some(self.c4),
            AtomName::C5 => Some(self.c5),
            AtomName::C6 => Some(self.c6),
            _ => None,
        }
    }

    fn atoms(&self) -> std::array::IntoIter<(AtomName, Point3<f64>), 25> {
        [
            (AtomName::P, self.p),
            (AtomName::Op1, self.op1),
            (AtomName::Op2, self.op2),
            (AtomName::O5p, self.o5p),
            (AtomName::C5p, self.c5p),
            (AtomName::H5p, self.h5p),
            (AtomName::H5pp, self.h5pp),
            (AtomName::C4p, self.c4p),
            (AtomName::H4p, self.h4p),
            (AtomName::O4p, self.o4p),
            (AtomName::C1p, self.c1p),
            (AtomName::H1p, self.h1p),
            (AtomName::C2p, self.c2p),
            (AtomName::H2pp, self.h2pp),
            (AtomName::O2p, self.o2p),
            (AtomName::H2p, self.h2p),
            (AtomName::C3p, self.c3p),
            (AtomName::H3p, self.h3p),
            (AtomName::O3p, self.o3p),
            (AtomName::N1, self.n1),
            (AtomName::N3, self.n3),
            (AtomName::C2, self.c2),
            (AtomName::C4, self.c4),
            (AtomName::C5, self.c5),
            (AtomName::C6, self.c6),
        ]
        .into_iter()
    }
}

/// Adenine-specific atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct AdenineAtoms {
    pub n6: Point3<f64>,
    pub n7: Point3<f64>,
    pub n9: Point3<f64>,
    pub c8: Point3<f64>,
    pub h2: Point3<f64>,
    pub h61: Point3<f64>,
    pub h62: Point3<f64>,
    pub h8: Point3<f64>,
}

/// Cytosine-specific atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct CytosineAtoms {
    pub n4: Point3<f64>,
    pub o2: Point3<f64>,
    pub h41: Point3<f64>,
    pub h42: Point3<f64>,
    pub h5: Point3<f64>,
    pub h6: Point3<f64>,
}

/// Guanine-specific atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct GuanineAtoms {
    pub n2: Point3<f64>,
    pub n7: Point3<f64>,
    pub n9: Point3<f64>,
    pub c8: Point3<f64>,
    pub o6: Point3<f64>,
    pub h1: Point3<f64>,
    pub h21: Point3<f64>,
    pub h22: Point3<f64>,
    pub h8: Point3<f64>,
}

/// Uracil-specific atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct UracilAtoms {
    pub o2: Point3<f64>,
    pub o4: Point3<f64>,
    pub h3: Point3<f64>,
    pub h5: Point3<f64>,
    pub h6: Point3<f64>,
}

/// The base-specific half of a template's atom set.
///
/// The payload variant is the single source of truth for the template's base
/// kind, so a template can never claim to be a guanine while carrying uracil
/// atoms.
#[derive(Debug, Clone, PartialEq)]
pub enum BasePayload {
    Adenine(AdenineAtoms),
    Cytosine(CytosineAtoms),
    Guanine(GuanineAtoms),
    Uracil(UracilAtoms),
}

impl BasePayload {
    /// The base kind implied by the payload variant.
    pub fn kind(&self) -> BaseKind {
        match self {
            BasePayload::Adenine(_) => BaseKind::Adenine,
            BasePayload::Cytosine(_) => BaseKind::Cytosine,
            BasePayload::Guanine(_) => BaseKind::Guanine,
            BasePayload::Uracil(_) => BaseKind::Uracil,
        }
    }

    fn atom(&self, name: AtomName) -> Option<Point3<f64>> {
        match (self, name) {
            (BasePayload::Adenine(a), AtomName::N6) => Some(a.n6),
            (BasePayload::Adenine(a), AtomName::N7) => Some(a.n7),
            (BasePayload::Adenine(a), AtomName::N9) => Some(a.n9),
            (BasePayload::Adenine(a), AtomName::C8) => Some(a.c8),
            (BasePayload::Adenine(a), AtomName::H2) => Some(a.h2),
            (BasePayload::Adenine(a), AtomName::H61) => Some(a.h61),
            (BasePayload::Adenine(a), AtomName::H62) => Some(a.h62),
            (BasePayload::Adenine(a), AtomName::H8) => Some(a.h8),
            (BasePayload::Cytosine(c), AtomName::N4) => Some(c.n4),
            (BasePayload::Cytosine(c), AtomName::O2) => Some(c.o2),
            (BasePayload::Cytosine(c), AtomName::H41) => Some(c.h41),
            (BasePayload::Cytosine(c), AtomName::H42) => Some(c.h42),
            (BasePayload::Cytosine(c), AtomName::H5) => Some(c.h5),
            (BasePayload::Cytosine(c), AtomName::H6) => Some(c.h6),
            (BasePayload::Guanine(g), AtomName::N2) => Some(g.n2),
            (BasePayload::Guanine(g), AtomName::N7) => Some(g.n7),
            (BasePayload::Guanine(g), AtomName::N9) => Some(g.n9),
            (BasePayload::Guanine(g), AtomName::C8) => Some(g.c8),
            (BasePayload::Guanine(g), AtomName::O6) => Some(g.o6),
            (BasePayload::Guanine(g), AtomName::H1) => Some(g.h1),
            (BasePayload::Guanine(g), AtomName::H21) => Some(g.h21),
            (BasePayload::Guanine(g), AtomName::H22) => Some(g.h22),
            (BasePayload::Guanine(g), AtomName::H8) => Some(g.h8),
            (BasePayload::Uracil(u), AtomName::O2) => Some(u.o2),
            (BasePayload::Uracil(u), AtomName::O4) => Some(u.o4),
            (BasePayload::Uracil(u), AtomName::H3) => Some(u.h3),
            (BasePayload::Uracil(u), AtomName::H5) => Some(u.h5),
            (BasePayload::Uracil(u), AtomName::H6) => Some(u.h6),
            _ => None,
        }
    }

    fn atoms(&self) -> std::vec::IntoIter<(AtomName, Point3<f64>)> {
        let atoms = match self {
            BasePayload::Adenine(a) => vec![
                (AtomName::N6, a.n6),
                (AtomName::N7, a.n7),
                (AtomName::N9, a.n9),
                (AtomName::C8, a.c8),
                (AtomName::H2, a.h2),
                (AtomName::H61, a.h61),
                (AtomName::H62, a.h62),
                (AtomName::H8, a.h8),
            ],
            BasePayload::Cytosine(c) => vec![
                (AtomName::N4, c.n4),
                (AtomName::O2, c.o2),
                (AtomName::H41, c.h41),
                (AtomName::H42, c.h42),
                (AtomName::H5, c.h5),
                (AtomName::H6, c.h6),
            ],
            BasePayload::Guanine(g) => vec![
                (AtomName::N2, g.n2),
                (AtomName::N7, g.n7),
                (AtomName::N9, g.n9),
                (AtomName::C8, g.c8),
                (AtomName::O6, g.o6),
                (AtomName::H1, g.h1),
                (AtomName::H21, g.h21),
                (AtomName::H22, g.h22),
                (AtomName::H8, g.h8),
            ],
            BasePayload::Uracil(u) => vec![
                (AtomName::O2, u.o2),
                (AtomName::O4, u.o4),
                (AtomName::H3, u.h3),
                (AtomName::H5, u.h5),
                (AtomName::H6, u.h6),
            ],
        };
        atoms.into_iter()
    }
}

/// A rigid nucleotide conformation ready for placement.
///
/// Atom coordinates live in the template's own local frame. The
/// standard-frame transform carries them into the canonical base frame (C1'
/// at the origin, glycosidic nitrogen on +Y, base in the YZ plane), which is
/// the frame all fixed pairing and stacking relations are expressed in. The
/// three backbone rotamer transforms each map canonical base-frame
/// coordinates onto a successor placed across the P-O3' linkage.
#[derive(Debug, Clone, PartialEq)]
pub struct NucleotideTemplate {
    name: String,
    base_frame_tfo: Transform,
    po3_rotamer_60: Transform,
    po3_rotamer_180: Transform,
    po3_rotamer_275: Transform,
    common: CommonAtoms,
    payload: BasePayload,
}

impl NucleotideTemplate {
    /// Bundles a template from its parts. The rotamer transforms are given in
    /// ascending rotation order: roughly 60, 180, and 275 degrees about the
    /// backbone axis.
    pub fn new(
        name: impl Into<String>,
        base_frame_tfo: Transform,
        po3_rotamer_60: Transform,
        po3_rotamer_180: Transform,
        po3_rotamer_275: Transform,
        common: CommonAtoms,
        payload: BasePayload,
    ) -> Self {
        Self {
            name: name.into(),
            base_frame_tfo,
            po3_rotamer_60,
            po3_rotamer_180,
            po3_rotamer_275,
            common,
            payload,
        }
    }

    /// The template's library name, e.g. `"A"` or `"G02"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The base kind, derived from the atom payload.
    pub fn kind(&self) -> BaseKind {
        self.payload.kind()
    }

    /// The atoms shared by all base kinds.
    pub fn common(&self) -> &CommonAtoms {
        &self.common
    }

    /// The base-specific atoms.
    pub fn payload(&self) -> &BasePayload {
        &self.payload
    }

    /// The transform from stored coordinates into the canonical base frame.
    pub fn base_frame_tfo(&self) -> &Transform {
        &self.base_frame_tfo
    }

    /// The three backbone continuation rotamers, in ascending rotation order.
    pub fn po3_rotamers(&self) -> [&Transform; 3] {
        [
            &self.po3_rotamer_60,
            &self.po3_rotamer_180,
            &self.po3_rotamer_275,
        ]
    }

    /// The anchor triple defining the base frame: C1', the glycosidic ring
    /// nitrogen, and the adjacent ring carbon. Purines anchor through N9 and
    /// C4, pyrimidines through N1 and C2.
    pub fn base_frame_anchors(&self) -> (Point3<f64>, Point3<f64>, Point3<f64>) {
        match &self.payload {
            BasePayload::Adenine(a) => (self.common.c1p, a.n9, self.common.c4),
            BasePayload::Guanine(g) => (self.common.c1p, g.n9, self.common.c4),
            BasePayload::Cytosine(_) | BasePayload::Uracil(_) => {
                (self.common.c1p, self.common.n1, self.common.c2)
            }
        }
    }

    /// Local coordinates of a named atom.
    ///
    /// Returns [`TemplateError::InvalidVariant`] when the base kind cannot
    /// carry the requested atom.
    pub fn atom(&self, name: AtomName) -> Result<Point3<f64>, TemplateError> {
        if let Some(point) = self.common.atom(name) {
            return Ok(point);
        }
        self.payload
            .atom(name)
            .ok_or_else(|| TemplateError::InvalidVariant {
                template: self.name.clone(),
                kind: self.kind(),
                atom: name,
            })
    }

    /// Iterates over every atom the template carries, common atoms first.
    /// The iterator owns its data and does not borrow the template.
    pub fn atoms(&self) -> impl Iterator<Item = (AtomName, Point3<f64>)> + use<> {
        self.common.atoms().chain(self.payload.atoms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::templates::TemplateLibrary;

    fn builtin(name: &str) -> std::sync::Arc<NucleotideTemplate> {
        TemplateLibrary::builtin()
            .get(name)
            .expect("builtin template should exist")
            .clone()
    }

    #[test]
    fn kind_is_derived_from_the_payload() {
        assert_eq!(builtin("A").kind(), BaseKind::Adenine);
        assert_eq!(builtin("C02").kind(), BaseKind::Cytosine);
        assert_eq!(builtin("G").kind(), BaseKind::Guanine);
        assert_eq!(builtin("U03").kind(), BaseKind::Uracil);
    }

    #[test]
    fn common_atoms_resolve_for_every_kind() {
        for name in ["A", "C", "G", "U"] {
            let template = builtin(name);
            assert!(template.atom(AtomName::C1p).is_ok());
            assert!(template.atom(AtomName::O3p).is_ok());
            assert!(template.atom(AtomName::N1).is_ok());
        }
    }

    #[test]
    fn payload_atoms_resolve_only_for_their_kind() {
        let adenine = builtin("A");
        assert!(adenine.atom(AtomName::N9).is_ok());
        assert!(adenine.atom(AtomName::H61).is_ok());

        let uracil = builtin("U");
        let error = uracil.atom(AtomName::N9).unwrap_err();
        assert_eq!(
            error,
            TemplateError::InvalidVariant {
                template: "U".to_string(),
                kind: BaseKind::Uracil,
                atom: AtomName::N9,
            }
        );
    }

    #[test]
    fn purines_and_pyrimidines_use_different_frame_anchors() {
        let guanine = builtin("G");
        let (origin, glyco, ring) = guanine.base_frame_anchors();
        assert_eq!(origin, guanine.common().c1p);
        assert_eq!(glyco, guanine.atom(AtomName::N9).unwrap());
        assert_eq!(ring, guanine.common().c4);

        let cytosine = builtin("C");
        let (origin, glyco, ring) = cytosine.base_frame_anchors();
        assert_eq!(origin, cytosine.common().c1p);
        assert_eq!(glyco, cytosine.common().n1);
        assert_eq!(ring, cytosine.common().c2);
    }

    #[test]
    fn atom_counts_match_the_base_chemistry() {
        assert_eq!(builtin("A").atoms().count(), 33);
        assert_eq!(builtin("C").atoms().count(), 31);
        assert_eq!(builtin("G").atoms().count(), 34);
        assert_eq!(builtin("U").atoms().count(), 30);
    }

    #[test]
    fn atoms_iterator_agrees_with_single_lookups() {
        let template = builtin("G01");
        for (name, point) in template.atoms() {
            assert_eq!(template.atom(name).unwrap(), point);
        }
    }
}
