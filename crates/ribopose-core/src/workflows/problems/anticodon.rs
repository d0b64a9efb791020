//! The tRNA anticodon stem-loop.

use super::{Problem, conformer_sweep, required};
use crate::core::geometry::distance;
use crate::core::models::atom::AtomName;
use crate::core::models::base::BaseKind;
use crate::core::models::residue::ResidueId;
use crate::core::templates::TemplateLibrary;
use crate::engine::error::EngineError;
use crate::engine::generators;
use crate::engine::search::{ConstraintFn, DomainFn};

/// Residue 33's O3' must come at least this close to residue 34's P for the
/// loop to close.
const CLOSURE_CUTOFF: f64 = 3.0;

/// Builds the anticodon stem-loop problem, numbered 27 through 43 as in the
/// yeast tRNA-Phe convention.
///
/// The 5' strand of the stem grows helically from the reference residue 27
/// up to 31, the 3' strand is seeded by pairing 39 across the stem and grown
/// helically to 43, and the loop descends from 39 through five stacked
/// placements back to 34. Residues 32 and 33 close the loop with backbone
/// continuation sweeps over the cytosine and uracil conformers; the closure
/// constraint keeps only chains whose final O3' lands within reach of 34's
/// phosphate.
pub fn anticodon(library: &TemplateLibrary) -> Result<Problem, EngineError> {
    let a = required(library, "A")?;
    let c = required(library, "C")?;
    let g = required(library, "G")?;
    let u = required(library, "U")?;

    let domains: Vec<DomainFn> = vec![
        generators::reference(c.clone(), ResidueId(27)),
        generators::helix5p(c.clone(), ResidueId(28), ResidueId(27)),
        generators::helix5p(a.clone(), ResidueId(29), ResidueId(28)),
        generators::helix5p(g.clone(), ResidueId(30), ResidueId(29)),
        generators::helix5p(a.clone(), ResidueId(31), ResidueId(30)),
        generators::wc(u.clone(), ResidueId(39), ResidueId(31)),
        generators::helix5p(c.clone(), ResidueId(40), ResidueId(39)),
        generators::helix5p(u.clone(), ResidueId(41), ResidueId(40)),
        generators::helix5p(g.clone(), ResidueId(42), ResidueId(41)),
        generators::helix5p(g.clone(), ResidueId(43), ResidueId(42)),
        generators::stacked5p(a.clone(), ResidueId(38), ResidueId(39)),
        generators::stacked5p(g.clone(), ResidueId(37), ResidueId(38)),
        generators::stacked5p(c.clone(), ResidueId(36), ResidueId(37)),
        generators::stacked5p(u.clone(), ResidueId(35), ResidueId(36)),
        generators::stacked5p(g.clone(), ResidueId(34), ResidueId(35)),
        generators::p_o3p(
            conformer_sweep(library, BaseKind::Cytosine)?,
            ResidueId(32),
            ResidueId(31),
        ),
        generators::p_o3p(
            conformer_sweep(library, BaseKind::Uracil)?,
            ResidueId(33),
            ResidueId(32),
        ),
    ];

    let constraint: ConstraintFn = Box::new(|candidate, assignment| {
        if candidate.id != ResidueId(33) {
            return Ok(true);
        }
        let anchor = assignment.world_atom_position(ResidueId(34), AtomName::P)?;
        let o3p = candidate.world_point(&candidate.template.common().o3p);
        Ok(distance(&anchor, &o3p) <= CLOSURE_CUTOFF)
    });

    Ok(Problem {
        name: "anticodon",
        description: "tRNA anticodon stem-loop closed by a two-residue conformer sweep",
        domains,
        constraint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::search::{search, search_all, unconstrained};
    use crate::engine::state::Assignment;
    use nalgebra::Point3;

    fn solutions() -> Vec<Assignment> {
        let problem = anticodon(TemplateLibrary::builtin()).unwrap();
        search_all(&problem.domains, &problem.constraint).unwrap()
    }

    #[test]
    fn unconstrained_space_counts_every_candidate_combination() {
        let problem = anticodon(TemplateLibrary::builtin()).unwrap();
        let accept_all = unconstrained();
        let count = search(&problem.domains, &accept_all)
            .map(|s| s.unwrap())
            .count();
        // 10 single-candidate levels, 5 stacked pairs, 2 nine-way sweeps.
        assert_eq!(count, 2592);
    }

    #[test]
    fn closure_constraint_keeps_eight_chains() {
        assert_eq!(solutions().len(), 8);
    }

    #[test]
    fn every_solution_satisfies_the_closure_bound() {
        for solution in solutions() {
            let anchor = solution
                .world_atom_position(ResidueId(34), AtomName::P)
                .unwrap();
            let o3p = solution
                .world_atom_position(ResidueId(33), AtomName::O3p)
                .unwrap();
            assert!(distance(&anchor, &o3p) <= CLOSURE_CUTOFF);
        }
    }

    #[test]
    fn first_solution_places_the_recorded_templates() {
        let solutions = solutions();
        let first = &solutions[0];

        let ids: Vec<u32> = first.iter().map(|r| r.id.0).collect();
        assert_eq!(
            ids,
            vec![27, 28, 29, 30, 31, 39, 40, 41, 42, 43, 38, 37, 36, 35, 34, 32, 33]
        );

        let templates: Vec<&str> = first.iter().map(|r| r.template.name()).collect();
        assert_eq!(
            templates,
            vec![
                "C", "C", "A", "G", "A", "U", "C", "U", "G", "G", "A", "G", "C", "U", "G",
                "C01", "U01"
            ]
        );
    }

    #[test]
    fn first_solution_pins_the_closing_residue_position() {
        let solutions = solutions();
        let c1p = solutions[0]
            .world_atom_position(ResidueId(33), AtomName::C1p)
            .unwrap();
        let expected = Point3::new(
            -9.436052484418367,
            14.500645773532195,
            -3.2058218539215284,
        );
        assert!(
            distance(&c1p, &expected) < 1e-6,
            "C1' of residue 33 drifted to {c1p:?}"
        );
    }

    #[test]
    fn loosening_the_cutoff_only_adds_solutions() {
        let problem = anticodon(TemplateLibrary::builtin()).unwrap();
        let strict = solutions();

        let loose: ConstraintFn = Box::new(|candidate, assignment| {
            if candidate.id != ResidueId(33) {
                return Ok(true);
            }
            let anchor = assignment.world_atom_position(ResidueId(34), AtomName::P)?;
            let o3p = candidate.world_point(&candidate.template.common().o3p);
            Ok(distance(&anchor, &o3p) <= 2.0 * CLOSURE_CUTOFF)
        });
        let relaxed = search_all(&problem.domains, &loose).unwrap();

        assert!(relaxed.len() >= strict.len());
        for solution in &strict {
            assert!(relaxed.contains(solution));
        }
    }
}
