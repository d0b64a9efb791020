//! # Engine Module
//!
//! This module implements the placement machinery for fragment assembly in
//! RiboPose: candidate generation, the growing partial assignment, and the
//! exhaustive backtracking search over both.
//!
//! ## Overview
//!
//! An assembly problem is an ordered list of placement variables. For each
//! variable a generator proposes candidate poses derived from residues placed
//! earlier, and a single constraint decides which candidates may commit. The
//! engine walks this space depth-first, lazily, and in a deterministic order,
//! so identical problems always enumerate identical solution lists.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different
//! aspects of the search:
//!
//! - **Candidate Generation** ([`generators`]) - Placement combinators built on fixed rigid-body relations
//! - **Search State** ([`state`]) - The partial assignment with identity-based residue lookup
//! - **Enumeration** ([`search`]) - The lazy depth-first solution stream and its parallel variant
//! - **Progress Monitoring** ([`progress`]) - Progress reporting without terminal coupling
//! - **Error Handling** ([`error`]) - Engine-specific error types and propagation
//!
//! ## Key Capabilities
//!
//! - **Deterministic enumeration** with candidate order as the single source of truth
//! - **Lazy evaluation** so only the requested prefix of the solution space is computed
//! - **Constraint pruning** that cuts entire subtrees before they are expanded
//! - **Optional root-level parallelism** producing bit-identical results to the sequential walk
//! - **Error fusing** so a failing generator or constraint ends a stream exactly once

pub mod error;
pub mod generators;
pub mod progress;
pub(crate) mod relations;
pub mod search;
pub mod state;
