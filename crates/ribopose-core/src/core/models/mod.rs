//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent
//! nucleotide conformations in RiboPose, providing the foundation for all
//! placement operations.
//!
//! ## Overview
//!
//! The models module defines the vocabulary of the fragment world: which atoms
//! a nucleotide can carry, which base it is, what a rigid template looks like,
//! and what it means for a template to be placed in space. These models are
//! designed to:
//!
//! - **Represent rigid conformations** - Immutable local coordinates plus a world transform
//! - **Make invalid lookups explicit** - Requests for atoms a base cannot carry return errors
//! - **Stay cheap to copy** - Placed residues share their template through an `Arc`
//! - **Maintain type safety** - Base-specific atom payloads are separate structs
//!
//! ## Key Components
//!
//! - [`atom`] - The closed set of RNA atom names with parsing and output ordering
//! - [`base`] - The four standard base kinds and purine/pyrimidine classification
//! - [`template`] - Rigid nucleotide conformations with their alignment transforms
//! - [`residue`] - A template bound to a sequence identity and a world pose

pub mod atom;
pub mod base;
pub mod residue;
pub mod template;
