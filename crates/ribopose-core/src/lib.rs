//! # RiboPose Core Library
//!
//! A library for assembling three-dimensional RNA fragments from rigid nucleotide
//! templates, driven by exhaustive constraint search over geometric placement rules.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains the rigid-transform algebra (`geometry`),
//!   stateless data models (`NucleotideTemplate`, `PlacedResidue`), and the built-in
//!   and file-loaded template libraries.
//!
//! - **[`engine`]: The Logic Core.** This layer implements the placement machinery:
//!   generator combinators that propose candidate residue poses from fixed rigid-body
//!   relations, the growing partial `Assignment`, and the lazy depth-first `Solutions`
//!   search with optional constraint pruning.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer.
//!   It ties the `engine` and `core` together to execute complete assembly problems,
//!   such as the built-in tRNA anticodon loop, and reports aggregate statistics over
//!   the solution set.

pub mod core;
pub mod engine;
pub mod workflows;
