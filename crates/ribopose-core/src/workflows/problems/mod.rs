//! Built-in assembly problems.
//!
//! A problem is a fully wired search space: an ordered list of placement
//! domains plus the constraint that prunes candidates. The built-in problems
//! resolve their templates against whatever library they are given, so a
//! custom template set changes the geometry without touching the wiring.

mod anticodon;
mod pseudoknot;

pub use anticodon::anticodon;
pub use pseudoknot::pseudoknot;

use std::sync::Arc;

use crate::core::models::base::BaseKind;
use crate::core::models::template::NucleotideTemplate;
use crate::core::templates::TemplateLibrary;
use crate::engine::error::EngineError;
use crate::engine::search::{ConstraintFn, DomainFn};

/// A fully wired assembly problem.
pub struct Problem {
    pub name: &'static str,
    pub description: &'static str,
    /// Placement domains in search order, one per residue.
    pub domains: Vec<DomainFn>,
    /// The pruning constraint, consulted for every candidate.
    pub constraint: ConstraintFn,
}

impl Problem {
    /// Number of placement variables, i.e. residues per solution.
    pub fn residue_count(&self) -> usize {
        self.domains.len()
    }
}

/// The names of all built-in problems, in presentation order.
pub fn names() -> &'static [&'static str] {
    &["anticodon", "pseudoknot"]
}

/// Resolves a built-in problem by name against the given template library.
/// Returns `Ok(None)` for names that are not built in.
pub fn by_name(name: &str, library: &TemplateLibrary) -> Result<Option<Problem>, EngineError> {
    match name {
        "anticodon" => anticodon(library).map(Some),
        "pseudoknot" => pseudoknot(library).map(Some),
        _ => Ok(None),
    }
}

/// Instantiates every built-in problem.
pub fn all(library: &TemplateLibrary) -> Result<Vec<Problem>, EngineError> {
    names()
        .iter()
        .filter_map(|name| by_name(name, library).transpose())
        .collect()
}

/// Looks up a template the problem cannot do without.
fn required(
    library: &TemplateLibrary,
    name: &str,
) -> Result<Arc<NucleotideTemplate>, EngineError> {
    library
        .get(name)
        .cloned()
        .ok_or_else(|| EngineError::Setup(format!("template '{name}' is not in the library")))
}

/// The conformer sweep for a base kind. An empty sweep would silently erase
/// every solution, so it is a setup error instead.
fn conformer_sweep(
    library: &TemplateLibrary,
    kind: BaseKind,
) -> Result<Vec<Arc<NucleotideTemplate>>, EngineError> {
    let conformers = library.conformers(kind);
    if conformers.is_empty() {
        return Err(EngineError::Setup(format!(
            "the library has no {kind} conformers to sweep"
        )));
    }
    Ok(conformers)
}
