//! Residue identities and placed residues.

use std::fmt;
use std::sync::Arc;

use nalgebra::Point3;

use super::atom::AtomName;
use super::template::{NucleotideTemplate, TemplateError};
use crate::core::geometry::Transform;

/// The identity of a residue slot within an assembly problem.
///
/// Identities are opaque labels chosen by the problem definition; they carry
/// sequence numbering but no positional meaning of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResidueId(pub u32);

impl fmt::Display for ResidueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A nucleotide template bound to a residue identity and a world pose.
///
/// Placed residues are the atoms of the search state: candidates proposed by
/// generators, entries in a partial assignment, and rows of a finished
/// solution are all values of this type. The template is shared through an
/// [`Arc`], so cloning a placed residue never copies coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedResidue {
    pub id: ResidueId,
    pub transform: Transform,
    pub template: Arc<NucleotideTemplate>,
}

impl PlacedResidue {
    pub fn new(id: ResidueId, transform: Transform, template: Arc<NucleotideTemplate>) -> Self {
        Self {
            id,
            transform,
            template,
        }
    }

    /// World position of one of the template's atoms.
    ///
    /// Fails when the template's base kind cannot carry the requested atom.
    pub fn world_atom(&self, name: AtomName) -> Result<Point3<f64>, TemplateError> {
        Ok(self.transform.apply(&self.template.atom(name)?))
    }

    /// World position of an arbitrary point given in template coordinates.
    pub fn world_point(&self, local: &Point3<f64>) -> Point3<f64> {
        self.transform.apply(local)
    }
}
