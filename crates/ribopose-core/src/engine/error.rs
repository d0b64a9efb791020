//! Engine-specific error types.

use thiserror::Error;

use crate::core::models::residue::ResidueId;
use crate::core::models::template::TemplateError;

/// Errors raised while setting up a problem, generating candidates, or
/// searching for solutions.
///
/// Generators and constraints are fallible because they look residues and
/// atoms up by identity; a malformed problem definition surfaces here rather
/// than as a panic deep inside the search.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A generator or constraint referred to a residue that the current
    /// partial assignment has not placed.
    #[error("no residue with identity {0} has been placed yet")]
    UnknownResidue(ResidueId),

    /// An atom lookup against a placed residue's template failed.
    #[error("atom lookup failed for residue {id}: {source}")]
    Template {
        id: ResidueId,
        #[source]
        source: TemplateError,
    },

    /// A problem could not be assembled from its inputs, e.g. because a
    /// required template is missing from the library.
    #[error("problem setup failed: {0}")]
    Setup(String),
}
