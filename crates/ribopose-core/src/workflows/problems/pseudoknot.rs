//! A 23-residue RNA pseudoknot.

use super::{Problem, conformer_sweep, required};
use crate::core::geometry::distance;
use crate::core::models::atom::AtomName;
use crate::core::models::base::BaseKind;
use crate::core::models::residue::ResidueId;
use crate::core::templates::TemplateLibrary;
use crate::engine::error::EngineError;
use crate::engine::generators;
use crate::engine::search::{ConstraintFn, DomainFn};

/// Residue 18's O3' must reach residue 19's P to thread the first loop
/// across the major groove of stem two.
const STEM_JUNCTION_CUTOFF: f64 = 4.0;

/// Residue 6's O3' must reach residue 7's P to close the second loop.
const LOOP_CLOSURE_CUTOFF: f64 = 4.5;

/// Builds the pseudoknot problem: two coaxially stacked helical stems whose
/// connecting loops cross each other's grooves.
///
/// Stem one (pairs 23-8 down to 19-12) grows in the 3' direction from the
/// reference residue 23, each level adding one helical step and its
/// Watson-Crick partner. Stem two (pairs 3-13 down to 1-15) continues the
/// same coaxial stack. Loop one (16, 17, 18) then runs from residue 15 back
/// toward stem two's far strand, and loop two (4, 5, 6) runs from residue 3
/// toward the stacked residue 7 capping stem one. Both loops are backbone
/// continuation sweeps; the two distance constraints keep only chains in
/// which each loop actually reaches the strand it must rejoin.
pub fn pseudoknot(library: &TemplateLibrary) -> Result<Problem, EngineError> {
    let a = required(library, "A")?;
    let c = required(library, "C")?;
    let g = required(library, "G")?;
    let u = required(library, "U")?;
    let u01 = required(library, "U01")?;

    let domains: Vec<DomainFn> = vec![
        generators::reference(a.clone(), ResidueId(23)),
        generators::wc_dumas(u.clone(), ResidueId(8), ResidueId(23)),
        generators::helix3p(g.clone(), ResidueId(22), ResidueId(23)),
        generators::wc_dumas(c.clone(), ResidueId(9), ResidueId(22)),
        generators::helix3p(g.clone(), ResidueId(21), ResidueId(22)),
        generators::wc_dumas(c.clone(), ResidueId(10), ResidueId(21)),
        generators::helix3p(c.clone(), ResidueId(20), ResidueId(21)),
        generators::wc_dumas(g.clone(), ResidueId(11), ResidueId(20)),
        generators::helix3p(u.clone(), ResidueId(19), ResidueId(20)),
        generators::wc_dumas(a.clone(), ResidueId(12), ResidueId(19)),
        generators::helix3p(c.clone(), ResidueId(3), ResidueId(19)),
        generators::wc_dumas(g.clone(), ResidueId(13), ResidueId(3)),
        generators::helix3p(c.clone(), ResidueId(2), ResidueId(3)),
        generators::wc_dumas(g.clone(), ResidueId(14), ResidueId(2)),
        generators::helix3p(u.clone(), ResidueId(1), ResidueId(2)),
        generators::wc_dumas(a.clone(), ResidueId(15), ResidueId(1)),
        generators::p_o3p(vec![u01], ResidueId(16), ResidueId(15)),
        generators::p_o3p(
            conformer_sweep(library, BaseKind::Cytosine)?,
            ResidueId(17),
            ResidueId(16),
        ),
        generators::p_o3p(vec![a.clone()], ResidueId(18), ResidueId(17)),
        generators::stacked5p(u.clone(), ResidueId(7), ResidueId(8)),
        generators::p_o3p(
            conformer_sweep(library, BaseKind::Cytosine)?,
            ResidueId(4),
            ResidueId(3),
        ),
        generators::p_o3p(vec![u.clone()], ResidueId(5), ResidueId(4)),
        generators::p_o3p(
            conformer_sweep(library, BaseKind::Adenine)?,
            ResidueId(6),
            ResidueId(5),
        ),
    ];

    let constraint: ConstraintFn = Box::new(|candidate, assignment| {
        let (anchor_id, cutoff) = match candidate.id {
            ResidueId(18) => (ResidueId(19), STEM_JUNCTION_CUTOFF),
            ResidueId(6) => (ResidueId(7), LOOP_CLOSURE_CUTOFF),
            _ => return Ok(true),
        };
        let anchor = assignment.world_atom_position(anchor_id, AtomName::P)?;
        let o3p = candidate.world_point(&candidate.template.common().o3p);
        Ok(distance(&anchor, &o3p) <= cutoff)
    });

    Ok(Problem {
        name: "pseudoknot",
        description: "RNA pseudoknot with two coaxial stems and crossing loops",
        domains,
        constraint,
    })
}
