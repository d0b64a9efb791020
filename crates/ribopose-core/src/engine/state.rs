//! The growing partial assignment of the backtracking search.

use nalgebra::Point3;

use super::error::EngineError;
use crate::core::models::atom::AtomName;
use crate::core::models::residue::{PlacedResidue, ResidueId};

/// An ordered set of placed residues.
///
/// During search an assignment is the mutable spine of the depth-first walk:
/// residues are pushed as levels commit and popped on backtrack, always in
/// placement order. A complete assignment, one residue per placement
/// variable, is a solution.
///
/// Lookup is by residue identity, not by position, so constraints do not
/// need to know where in the placement order their reference residues sit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assignment {
    residues: Vec<PlacedResidue>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// The placed residues, in placement order.
    pub fn residues(&self) -> &[PlacedResidue] {
        &self.residues
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedResidue> {
        self.residues.iter()
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Finds a placed residue by identity.
    pub fn get(&self, id: ResidueId) -> Result<&PlacedResidue, EngineError> {
        self.residues
            .iter()
            .find(|r| r.id == id)
            .ok_or(EngineError::UnknownResidue(id))
    }

    /// World position of a named atom on a previously placed residue.
    pub fn world_atom_position(
        &self,
        id: ResidueId,
        name: AtomName,
    ) -> Result<Point3<f64>, EngineError> {
        self.get(id)?
            .world_atom(name)
            .map_err(|source| EngineError::Template { id, source })
    }

    pub(crate) fn push(&mut self, residue: PlacedResidue) {
        self.residues.push(residue);
    }

    pub(crate) fn pop(&mut self) -> Option<PlacedResidue> {
        self.residues.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Transform;
    use crate::core::templates::TemplateLibrary;
    use nalgebra::Vector3;

    fn placed(id: u32, shift: f64) -> PlacedResidue {
        PlacedResidue::new(
            ResidueId(id),
            Transform::from_translation(Vector3::new(shift, 0.0, 0.0)),
            TemplateLibrary::builtin().get("A").unwrap().clone(),
        )
    }

    #[test]
    fn lookup_is_by_identity_not_position() {
        let mut assignment = Assignment::new();
        assignment.push(placed(27, 0.0));
        assignment.push(placed(43, 5.0));

        assert_eq!(assignment.len(), 2);
        assert_eq!(assignment.get(ResidueId(43)).unwrap().id, ResidueId(43));
        assert_eq!(assignment.get(ResidueId(27)).unwrap().id, ResidueId(27));
    }

    #[test]
    fn missing_identities_are_reported() {
        let mut assignment = Assignment::new();
        assignment.push(placed(1, 0.0));

        assert!(matches!(
            assignment.get(ResidueId(2)),
            Err(EngineError::UnknownResidue(ResidueId(2)))
        ));
    }

    #[test]
    fn world_atom_position_uses_the_residue_pose() {
        let mut assignment = Assignment::new();
        assignment.push(placed(1, 0.0));
        assignment.push(placed(2, 7.5));

        let base = assignment
            .world_atom_position(ResidueId(1), AtomName::P)
            .unwrap();
        let shifted = assignment
            .world_atom_position(ResidueId(2), AtomName::P)
            .unwrap();
        assert!((shifted.x - base.x - 7.5).abs() < 1e-12);
        assert!((shifted.y - base.y).abs() < 1e-12);
    }

    #[test]
    fn world_atom_position_wraps_template_errors_with_the_identity() {
        let mut assignment = Assignment::new();
        assignment.push(placed(9, 0.0));

        let error = assignment
            .world_atom_position(ResidueId(9), AtomName::O4)
            .unwrap_err();
        assert!(matches!(
            error,
            EngineError::Template {
                id: ResidueId(9),
                ..
            }
        ));
    }

    #[test]
    fn push_and_pop_preserve_placement_order() {
        let mut assignment = Assignment::new();
        assignment.push(placed(1, 0.0));
        assignment.push(placed(2, 0.0));
        assignment.push(placed(3, 0.0));

        assert_eq!(assignment.pop().unwrap().id, ResidueId(3));
        let ids: Vec<ResidueId> = assignment.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![ResidueId(1), ResidueId(2)]);
    }
}
