//! Placement generator combinators.
//!
//! A generator proposes candidate poses for one placement variable given the
//! current partial assignment. All generators here work the same way: the
//! fixed rigid-body relation they encode is expressed in canonical base-frame
//! coordinates, and at proposal time it is conjugated through the reference
//! residue's world base frame. A relation therefore works unchanged wherever
//! and however the reference happens to be placed.
//!
//! Candidate order within a generator is part of the engine's contract:
//! solutions are enumerated depth-first in exactly the order candidates are
//! proposed, so reordering a generator reorders every downstream solution
//! list.

use std::sync::Arc;

use crate::core::geometry::{Transform, align_frame};
use crate::core::models::residue::{PlacedResidue, ResidueId};
use crate::core::models::template::NucleotideTemplate;

use super::relations;
use super::search::DomainFn;
use super::state::Assignment;

/// Places `template` at the identity pose, anchoring the search.
///
/// Every problem starts with exactly one reference generator; all other
/// placements are chained off it directly or transitively.
pub fn reference(template: Arc<NucleotideTemplate>, id: ResidueId) -> DomainFn {
    Box::new(move |_assignment: &Assignment| {
        Ok(vec![PlacedResidue::new(
            id,
            Transform::identity(),
            Arc::clone(&template),
        )])
    })
}

/// Watson-Crick pairing with the reference residue.
pub fn wc(template: Arc<NucleotideTemplate>, id: ResidueId, reference_id: ResidueId) -> DomainFn {
    related(&relations::WC, template, id, reference_id)
}

/// The alternative Watson-Crick pairing geometry, with a slightly tilted
/// pairing axis. Useful for paired regions under strain.
pub fn wc_dumas(
    template: Arc<NucleotideTemplate>,
    id: ResidueId,
    reference_id: ResidueId,
) -> DomainFn {
    related(&relations::WC_DUMAS, template, id, reference_id)
}

/// One helical step from the reference towards the 5' end of the strand.
pub fn helix5p(
    template: Arc<NucleotideTemplate>,
    id: ResidueId,
    reference_id: ResidueId,
) -> DomainFn {
    related(&relations::HELIX5P, template, id, reference_id)
}

/// One helical step from the reference towards the 3' end of the strand.
pub fn helix3p(
    template: Arc<NucleotideTemplate>,
    id: ResidueId,
    reference_id: ResidueId,
) -> DomainFn {
    related(&relations::HELIX3P, template, id, reference_id)
}

/// Coaxial stacking on the 5' side: the dedicated stacked geometry first,
/// then the plain helical step as a second candidate.
pub fn stacked5p(
    template: Arc<NucleotideTemplate>,
    id: ResidueId,
    reference_id: ResidueId,
) -> DomainFn {
    stacked(
        &relations::STACKED5P,
        &relations::HELIX5P,
        template,
        id,
        reference_id,
    )
}

/// Coaxial stacking on the 3' side: the dedicated stacked geometry first,
/// then the plain helical step as a second candidate.
pub fn stacked3p(
    template: Arc<NucleotideTemplate>,
    id: ResidueId,
    reference_id: ResidueId,
) -> DomainFn {
    stacked(
        &relations::STACKED3P,
        &relations::HELIX3P,
        template,
        id,
        reference_id,
    )
}

/// Backbone continuation across the P-O3' linkage.
///
/// Proposes every template in `templates` under each of its three backbone
/// rotamers, template-major: all rotamers of the first template, then all
/// rotamers of the second, and so on. This is the only generator that can
/// vary which template a variable uses, which is how conformer sweeps enter
/// a problem. Each candidate's phosphorus lands exactly one P-O3' bond away
/// from the reference's O3'.
pub fn p_o3p(
    templates: Vec<Arc<NucleotideTemplate>>,
    id: ResidueId,
    reference_id: ResidueId,
) -> DomainFn {
    Box::new(move |assignment: &Assignment| {
        let reference = assignment.get(reference_id)?;
        let inverse = backbone_frame(reference).inverse_orthonormal();

        let mut candidates = Vec::with_capacity(3 * templates.len());
        for template in &templates {
            for rotamer in template.po3_rotamers() {
                candidates.push(PlacedResidue::new(
                    id,
                    rotamer.combine(&inverse),
                    Arc::clone(template),
                ));
            }
        }
        Ok(candidates)
    })
}

fn related(
    relation: &'static Transform,
    template: Arc<NucleotideTemplate>,
    id: ResidueId,
    reference_id: ResidueId,
) -> DomainFn {
    Box::new(move |assignment: &Assignment| {
        let reference = assignment.get(reference_id)?;
        Ok(vec![PlacedResidue::new(
            id,
            align_to_reference(relation, &template, reference),
            Arc::clone(&template),
        )])
    })
}

fn stacked(
    stack_relation: &'static Transform,
    helix_relation: &'static Transform,
    template: Arc<NucleotideTemplate>,
    id: ResidueId,
    reference_id: ResidueId,
) -> DomainFn {
    Box::new(move |assignment: &Assignment| {
        let reference = assignment.get(reference_id)?;
        Ok(vec![
            PlacedResidue::new(
                id,
                align_to_reference(stack_relation, &template, reference),
                Arc::clone(&template),
            ),
            PlacedResidue::new(
                id,
                align_to_reference(helix_relation, &template, reference),
                Arc::clone(&template),
            ),
        ])
    })
}

/// Conjugates a canonical base-frame relation into the world pose for
/// `template`, anchored at the reference's placed base frame.
pub(crate) fn align_to_reference(
    relation: &Transform,
    template: &NucleotideTemplate,
    reference: &PlacedResidue,
) -> Transform {
    let frame = reference_frame(reference);
    template
        .base_frame_tfo()
        .combine(&relation.combine(&frame.inverse_orthonormal()))
}

/// The world base frame of a placed residue: the alignment of its anchor
/// triple as placed.
fn reference_frame(reference: &PlacedResidue) -> Transform {
    let (origin, glyco, ring) = reference.template.base_frame_anchors();
    align_frame(
        &reference.world_point(&origin),
        &reference.world_point(&glyco),
        &reference.world_point(&ring),
    )
}

/// The backbone continuation frame of a placed residue, anchored on its
/// O3', C3', and C4' atoms.
fn backbone_frame(reference: &PlacedResidue) -> Transform {
    let common = reference.template.common();
    align_frame(
        &reference.world_point(&common.o3p),
        &reference.world_point(&common.c3p),
        &reference.world_point(&common.c4p),
    )
}
