//! # Core Module
//!
//! This module provides the fundamental building blocks for nucleic acid fragment
//! assembly in RiboPose, serving as the computational core of the library.
//!
//! ## Overview
//!
//! The core module implements the data structures and geometric algorithms required
//! to describe rigid nucleotide conformations and to move them through space. It
//! provides a complete framework for representing templates, placed residues, and
//! the orthonormal transforms that relate them.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different aspects
//! of the fragment model:
//!
//! - **Rigid Motions** ([`geometry`]) - Row-vector transform algebra and frame alignment
//! - **Molecular Representation** ([`models`]) - Atom names, base kinds, templates, and placed residues
//! - **Conformational Libraries** ([`templates`]) - The built-in idealized template library and the TOML template-set loader
//!
//! ## Key Capabilities
//!
//! - **Closed transform algebra** with composition and orthonormal inversion
//! - **Canonical base frames** anchored at C1' with the glycosidic nitrogen on +Y
//! - **Per-base atom payloads** so that impossible atom lookups are type errors
//! - **Swappable template sets** loaded from TOML with full validation

pub mod geometry;
pub mod models;
pub mod templates;
