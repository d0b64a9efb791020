//! Lazy depth-first search over placement domains.
//!
//! The search treats a problem as an ordered list of placement variables,
//! each with a [`DomainFn`] proposing candidate poses from the partial
//! assignment built so far, plus one [`ConstraintFn`] consulted before any
//! candidate commits. Enumeration is depth-first and fully deterministic:
//! candidates are tried in exactly the order their generator proposes them,
//! so two runs over the same problem produce the same solution list.
//!
//! [`Solutions`] is pull-based. Nothing past the next solution is ever
//! computed, which keeps problems with enormous unconstrained spaces cheap
//! to sample from the front.

use super::error::EngineError;
use super::state::Assignment;
use crate::core::models::residue::PlacedResidue;

/// Proposes candidate placements for one variable, given the partial
/// assignment of all earlier variables.
pub type DomainFn =
    Box<dyn Fn(&Assignment) -> Result<Vec<PlacedResidue>, EngineError> + Send + Sync>;

/// Decides whether a candidate may join the partial assignment. The
/// candidate is not yet part of the assignment when the constraint runs.
pub type ConstraintFn =
    Box<dyn Fn(&PlacedResidue, &Assignment) -> Result<bool, EngineError> + Send + Sync>;

/// A constraint that accepts every candidate.
pub fn unconstrained() -> ConstraintFn {
    Box::new(|_, _| Ok(true))
}

struct Frame {
    candidates: Vec<PlacedResidue>,
    next: usize,
}

/// A lazy stream of complete assignments in depth-first order.
///
/// The iterator owns its partial assignment and an explicit stack of
/// candidate frames, one frame per expanded level. A yielded `Ok` holds a
/// complete assignment: the prefix residues (if any) followed by one residue
/// per domain, in placement order.
///
/// The stream yields `Err` at most once. The first generator or constraint
/// failure ends the enumeration; afterwards the iterator is fused.
pub struct Solutions<'a> {
    domains: &'a [DomainFn],
    constraint: &'a ConstraintFn,
    assignment: Assignment,
    stack: Vec<Frame>,
    started: bool,
    finished: bool,
}

impl<'a> Solutions<'a> {
    /// Searches all domains starting from an empty assignment.
    pub fn new(domains: &'a [DomainFn], constraint: &'a ConstraintFn) -> Self {
        Self::with_prefix(domains, constraint, Assignment::new())
    }

    /// Searches `domains` with `prefix` already committed. Domains and the
    /// constraint see the prefix residues exactly as if earlier levels had
    /// placed them.
    pub(crate) fn with_prefix(
        domains: &'a [DomainFn],
        constraint: &'a ConstraintFn,
        prefix: Assignment,
    ) -> Self {
        Self {
            domains,
            constraint,
            assignment: prefix,
            stack: Vec::with_capacity(domains.len()),
            started: false,
            finished: false,
        }
    }

    fn expand(&mut self, level: usize) -> Result<Frame, EngineError> {
        let candidates = (self.domains[level])(&self.assignment)?;
        Ok(Frame {
            candidates,
            next: 0,
        })
    }

    fn fail(&mut self, error: EngineError) -> Option<Result<Assignment, EngineError>> {
        self.finished = true;
        Some(Err(error))
    }
}

impl Iterator for Solutions<'_> {
    type Item = Result<Assignment, EngineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if !self.started {
            self.started = true;
            if self.domains.is_empty() {
                // Zero variables: the prefix itself is the single solution.
                self.finished = true;
                return Some(Ok(self.assignment.clone()));
            }
            match self.expand(0) {
                Ok(frame) => self.stack.push(frame),
                Err(error) => return self.fail(error),
            }
        }

        loop {
            let Some(frame) = self.stack.last_mut() else {
                self.finished = true;
                return None;
            };

            let Some(candidate) = frame.candidates.get(frame.next).cloned() else {
                // Level exhausted: backtrack one level.
                self.stack.pop();
                if !self.stack.is_empty() {
                    self.assignment.pop();
                }
                continue;
            };
            frame.next += 1;

            match (self.constraint)(&candidate, &self.assignment) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(error) => return self.fail(error),
            }

            self.assignment.push(candidate);
            if self.stack.len() == self.domains.len() {
                let solution = self.assignment.clone();
                self.assignment.pop();
                return Some(Ok(solution));
            }

            let level = self.stack.len();
            match self.expand(level) {
                Ok(next_frame) => self.stack.push(next_frame),
                Err(error) => return self.fail(error),
            }
        }
    }
}

/// Lazily enumerates every complete assignment in depth-first order.
pub fn search<'a>(domains: &'a [DomainFn], constraint: &'a ConstraintFn) -> Solutions<'a> {
    Solutions::new(domains, constraint)
}

/// Collects every solution eagerly. The first generator or constraint
/// failure aborts the search and is returned instead.
pub fn search_all(
    domains: &[DomainFn],
    constraint: &ConstraintFn,
) -> Result<Vec<Assignment>, EngineError> {
    search(domains, constraint).collect()
}

/// Explores the first variable's candidates in parallel on the rayon pool.
///
/// Each root candidate seeds an independent sequential sub-search over the
/// remaining domains; branch results are concatenated in candidate order
/// and cut off at `limit`. The outcome matches collecting at most `limit`
/// items from [`search`] exactly. In particular a failure inside a branch
/// is reported only when concatenation still needs that branch, just as
/// the lazy sequential stream never computes past its cut-off.
#[cfg(feature = "parallel")]
pub fn search_parallel(
    domains: &[DomainFn],
    constraint: &ConstraintFn,
    limit: Option<usize>,
) -> Result<Vec<Assignment>, EngineError> {
    use rayon::prelude::*;
    use tracing::debug;

    let cap = limit.unwrap_or(usize::MAX);
    if cap == 0 {
        return Ok(Vec::new());
    }

    let Some((root_domain, rest)) = domains.split_first() else {
        return Ok(vec![Assignment::new()]);
    };

    let empty = Assignment::new();
    let roots = root_domain(&empty)?;
    debug!(branches = roots.len(), "Fanning out root candidates.");

    // Every branch checks its own root against the constraint and gathers
    // at most `cap` solutions, recording a failure only if it hits one
    // first. Later branches can only fill what the cap leaves open, so
    // `cap` per branch is always enough.
    let branches: Vec<(Vec<Assignment>, Option<EngineError>)> = roots
        .into_par_iter()
        .map(|candidate| {
            match (constraint)(&candidate, &empty) {
                Ok(true) => {}
                Ok(false) => return (Vec::new(), None),
                Err(error) => return (Vec::new(), Some(error)),
            }

            let mut prefix = Assignment::new();
            prefix.push(candidate);
            let mut found = Vec::new();
            let mut failure = None;
            for item in Solutions::with_prefix(rest, constraint, prefix) {
                match item {
                    Ok(solution) => {
                        found.push(solution);
                        if found.len() == cap {
                            break;
                        }
                    }
                    Err(error) => {
                        failure = Some(error);
                        break;
                    }
                }
            }
            (found, failure)
        })
        .collect();

    // Concatenate in candidate order. A recorded failure counts only while
    // the cap is unmet; once it is met, the sequential stream would have
    // stopped short of everything that follows.
    let mut solutions = Vec::new();
    for (found, failure) in branches {
        let remaining = cap - solutions.len();
        solutions.extend(found.into_iter().take(remaining));
        if solutions.len() == cap {
            return Ok(solutions);
        }
        if let Some(error) = failure {
            return Err(error);
        }
    }
    Ok(solutions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::{Transform, distance};
    use crate::core::models::atom::AtomName;
    use crate::core::models::residue::ResidueId;
    use crate::core::models::template::NucleotideTemplate;
    use crate::core::templates::TemplateLibrary;
    use crate::engine::generators::{self, align_to_reference};
    use nalgebra::Vector3;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn template() -> Arc<NucleotideTemplate> {
        TemplateLibrary::builtin().get("A").unwrap().clone()
    }

    /// A domain with `count` candidates at x = 0, 1, ... regardless of the
    /// assignment, optionally counting how often it is invoked.
    fn grid_domain(id: u32, count: usize, calls: Option<Arc<AtomicUsize>>) -> DomainFn {
        let tpl = template();
        Box::new(move |_assignment| {
            if let Some(calls) = &calls {
                calls.fetch_add(1, Ordering::SeqCst);
            }
            Ok((0..count)
                .map(|k| {
                    PlacedResidue::new(
                        ResidueId(id),
                        Transform::from_translation(Vector3::new(k as f64, 0.0, 0.0)),
                        Arc::clone(&tpl),
                    )
                })
                .collect())
        })
    }

    fn candidate_xs(assignment: &Assignment) -> Vec<f64> {
        assignment
            .iter()
            .map(|r| r.transform.translation().x)
            .collect()
    }

    #[test]
    fn empty_domain_list_yields_one_empty_assignment() {
        let domains: Vec<DomainFn> = Vec::new();
        let constraint = unconstrained();
        let mut solutions = search(&domains, &constraint);

        let only = solutions.next().unwrap().unwrap();
        assert!(only.is_empty());
        assert!(solutions.next().is_none());
        assert!(solutions.next().is_none());
    }

    #[test]
    fn solutions_enumerate_depth_first_in_candidate_order() {
        let domains = vec![grid_domain(1, 2, None), grid_domain(2, 3, None)];
        let constraint = unconstrained();

        let solutions = search_all(&domains, &constraint).unwrap();
        let orders: Vec<Vec<f64>> = solutions.iter().map(candidate_xs).collect();
        assert_eq!(
            orders,
            vec![
                vec![0.0, 0.0],
                vec![0.0, 1.0],
                vec![0.0, 2.0],
                vec![1.0, 0.0],
                vec![1.0, 1.0],
                vec![1.0, 2.0],
            ]
        );
    }

    #[test]
    fn constraint_prunes_entire_subtrees_without_expanding_them() {
        let second_level_calls = Arc::new(AtomicUsize::new(0));
        let domains = vec![
            grid_domain(1, 2, None),
            grid_domain(2, 2, Some(second_level_calls.clone())),
        ];
        // Reject the first root candidate outright.
        let constraint: ConstraintFn = Box::new(|candidate, _assignment| {
            Ok(candidate.id != ResidueId(1) || candidate.transform.translation().x > 0.5)
        });

        let solutions = search_all(&domains, &constraint).unwrap();
        assert_eq!(solutions.len(), 2);
        assert!(solutions.iter().all(|s| candidate_xs(s)[0] == 1.0));
        // The second level was only ever expanded under the surviving root.
        assert_eq!(second_level_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn leaf_candidates_failing_the_constraint_are_skipped() {
        let domains = vec![grid_domain(1, 1, None), grid_domain(2, 3, None)];
        let constraint: ConstraintFn = Box::new(|candidate, _| {
            Ok(candidate.id != ResidueId(2) || candidate.transform.translation().x != 1.0)
        });

        let solutions = search_all(&domains, &constraint).unwrap();
        let xs: Vec<f64> = solutions.iter().map(|s| candidate_xs(s)[1]).collect();
        assert_eq!(xs, vec![0.0, 2.0]);
    }

    #[test]
    fn enumeration_is_lazy() {
        let root_calls = Arc::new(AtomicUsize::new(0));
        let leaf_calls = Arc::new(AtomicUsize::new(0));
        let domains = vec![
            grid_domain(1, 2, Some(root_calls.clone())),
            grid_domain(2, 2, Some(leaf_calls.clone())),
        ];
        let constraint = unconstrained();

        let first = search(&domains, &constraint).next().unwrap().unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(root_calls.load(Ordering::SeqCst), 1);
        // Only the first root's subtree was entered for the first solution.
        assert_eq!(leaf_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn generator_errors_end_the_stream_after_one_item() {
        let failing: DomainFn =
            Box::new(|_| Err(EngineError::Setup("no candidates for you".into())));
        let domains = vec![grid_domain(1, 2, None), failing];
        let constraint = unconstrained();

        let mut solutions = search(&domains, &constraint);
        assert!(matches!(
            solutions.next(),
            Some(Err(EngineError::Setup(_)))
        ));
        assert!(solutions.next().is_none());
    }

    #[test]
    fn constraint_errors_end_the_stream_after_one_item() {
        let domains = vec![grid_domain(7, 3, None)];
        let constraint: ConstraintFn = Box::new(|candidate, assignment| {
            // Constraints may look residues up; a bad identity surfaces here.
            assignment.get(ResidueId(99))?;
            let _ = candidate;
            Ok(true)
        });

        let mut solutions = search(&domains, &constraint);
        assert!(matches!(
            solutions.next(),
            Some(Err(EngineError::UnknownResidue(ResidueId(99))))
        ));
        assert!(solutions.next().is_none());
    }

    #[test]
    fn domains_with_no_candidates_produce_no_solutions() {
        let domains = vec![grid_domain(1, 2, None), grid_domain(2, 0, None)];
        let constraint = unconstrained();
        assert!(search_all(&domains, &constraint).unwrap().is_empty());
    }

    // --- Screw-chain integration tests ---
    //
    // A quarter turn about Z with rise r has an exactly analyzable orbit:
    // four successive applications amount to a pure translation by 4r, and
    // the per-step displacement of an atom with canonical coordinates q is
    // sqrt(2 * (q.x^2 + q.y^2) + r^2).

    fn quarter_turn(rise: f64) -> Transform {
        Transform::from_coefficients(
            0.0, 1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, rise,
        )
    }

    fn screw_domain(id: u32, reference_id: u32, rises: Vec<f64>) -> DomainFn {
        let tpl = template();
        Box::new(move |assignment: &Assignment| {
            let reference = assignment.get(ResidueId(reference_id))?;
            Ok(rises
                .iter()
                .map(|&rise| {
                    PlacedResidue::new(
                        ResidueId(id),
                        align_to_reference(&quarter_turn(rise), &tpl, reference),
                        Arc::clone(&tpl),
                    )
                })
                .collect())
        })
    }

    fn screw_chain(rises: Vec<f64>) -> Vec<DomainFn> {
        vec![
            generators::reference(template(), ResidueId(1)),
            screw_domain(2, 1, rises.clone()),
            screw_domain(3, 2, rises.clone()),
            screw_domain(4, 3, rises.clone()),
            screw_domain(5, 4, rises),
        ]
    }

    fn step_length(rise: f64) -> f64 {
        let tpl = template();
        let q = tpl.base_frame_tfo().apply(&tpl.common().p);
        (2.0 * (q.x * q.x + q.y * q.y) + rise * rise).sqrt()
    }

    #[test]
    fn four_quarter_turns_telescope_to_a_pure_translation() {
        let rise = 3.7;
        let domains = screw_chain(vec![rise]);
        let constraint = unconstrained();

        let solutions = search_all(&domains, &constraint).unwrap();
        assert_eq!(solutions.len(), 1);
        let chain = &solutions[0];

        let first = chain.get(ResidueId(1)).unwrap();
        let last = chain.get(ResidueId(5)).unwrap();
        for (name, _) in template().atoms() {
            let a = first.world_atom(name).unwrap();
            let b = last.world_atom(name).unwrap();
            assert!(
                (distance(&a, &b) - 4.0 * rise).abs() < 1e-6,
                "atom {name} moved by {}",
                distance(&a, &b)
            );
        }
    }

    #[test]
    fn distance_constraint_selects_the_short_pitch_chain() {
        let short = 2.6;
        let long = 5.9;
        let domains = screw_chain(vec![short, long]);

        let constraint = unconstrained();
        let unconstrained_count = search_all(&domains, &constraint).unwrap().len();
        assert_eq!(unconstrained_count, 16);

        let threshold = (step_length(short) + step_length(long)) / 2.0;
        let constraint: ConstraintFn = Box::new(move |candidate, assignment| {
            if candidate.id == ResidueId(1) {
                return Ok(true);
            }
            let previous =
                assignment.world_atom_position(ResidueId(candidate.id.0 - 1), AtomName::P)?;
            let p = candidate
                .world_atom(AtomName::P)
                .map_err(|source| EngineError::Template {
                    id: candidate.id,
                    source,
                })?;
            Ok(distance(&previous, &p) <= threshold)
        });

        let solutions = search_all(&domains, &constraint).unwrap();
        assert_eq!(solutions.len(), 1);

        let chain = &solutions[0];
        let expected = step_length(short);
        for id in 2..=5u32 {
            let previous = chain
                .world_atom_position(ResidueId(id - 1), AtomName::P)
                .unwrap();
            let current = chain.world_atom_position(ResidueId(id), AtomName::P).unwrap();
            assert!((distance(&previous, &current) - expected).abs() < 1e-6);
        }
    }

    #[cfg(feature = "parallel")]
    mod parallel {
        use super::*;

        #[test]
        fn parallel_search_matches_sequential_output_exactly() {
            let domains = vec![
                grid_domain(1, 3, None),
                grid_domain(2, 2, None),
                grid_domain(3, 2, None),
            ];
            let constraint: ConstraintFn = Box::new(|candidate, _| {
                Ok(candidate.transform.translation().x < 1.5 || candidate.id != ResidueId(2))
            });

            let sequential = search_all(&domains, &constraint).unwrap();
            let parallel = search_parallel(&domains, &constraint, None).unwrap();
            assert_eq!(sequential, parallel);
        }

        #[test]
        fn parallel_screw_chain_matches_sequential() {
            let domains = screw_chain(vec![2.6, 5.9]);
            let constraint = unconstrained();

            let sequential = search_all(&domains, &constraint).unwrap();
            let parallel = search_parallel(&domains, &constraint, None).unwrap();
            assert_eq!(sequential.len(), 16);
            assert_eq!(sequential, parallel);
        }

        #[test]
        fn parallel_empty_domain_list_yields_one_empty_assignment() {
            let domains: Vec<DomainFn> = Vec::new();
            let constraint = unconstrained();
            let solutions = search_parallel(&domains, &constraint, None).unwrap();
            assert_eq!(solutions.len(), 1);
            assert!(solutions[0].is_empty());
        }

        /// A second level that fails under any root placed past x = 0.5.
        fn failing_past_the_first_root(id: u32) -> DomainFn {
            let tpl = template();
            Box::new(move |assignment: &Assignment| {
                if assignment.get(ResidueId(1))?.transform.translation().x > 0.5 {
                    return Err(EngineError::Setup("no placements for this root".into()));
                }
                Ok(vec![PlacedResidue::new(
                    ResidueId(id),
                    Transform::identity(),
                    Arc::clone(&tpl),
                )])
            })
        }

        #[test]
        fn capped_parallel_search_matches_the_lazy_prefix() {
            let domains = vec![grid_domain(1, 3, None), grid_domain(2, 2, None)];
            let constraint = unconstrained();

            let prefix: Vec<Assignment> = search(&domains, &constraint)
                .take(4)
                .collect::<Result<_, _>>()
                .unwrap();
            let capped = search_parallel(&domains, &constraint, Some(4)).unwrap();

            assert_eq!(capped.len(), 4);
            assert_eq!(capped, prefix);
            assert!(
                search_parallel(&domains, &constraint, Some(0))
                    .unwrap()
                    .is_empty()
            );
        }

        #[test]
        fn capped_parallel_search_skips_failures_the_cap_never_reaches() {
            let domains = vec![grid_domain(1, 2, None), failing_past_the_first_root(2)];
            let constraint = unconstrained();

            // Uncapped, the failing branch sinks the whole search.
            assert!(matches!(
                search_parallel(&domains, &constraint, None),
                Err(EngineError::Setup(_))
            ));

            // Capped to one, the first branch satisfies the whole request
            // and the failing branch is never consulted.
            let prefix: Vec<Assignment> = search(&domains, &constraint)
                .take(1)
                .collect::<Result<_, _>>()
                .unwrap();
            let capped = search_parallel(&domains, &constraint, Some(1)).unwrap();
            assert_eq!(capped.len(), 1);
            assert_eq!(capped, prefix);
        }

        #[test]
        fn failures_inside_the_cap_still_surface_in_parallel() {
            let domains = vec![grid_domain(1, 2, None), failing_past_the_first_root(2)];
            let constraint = unconstrained();

            // Only one solution exists ahead of the failure, so a cap of
            // two has to reach it.
            assert!(matches!(
                search_parallel(&domains, &constraint, Some(2)),
                Err(EngineError::Setup(_))
            ));
        }
    }
}
