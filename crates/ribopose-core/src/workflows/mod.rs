//! # Workflows Module
//!
//! This module provides the high-level entry points that orchestrate complete
//! fragment assembly runs in RiboPose.
//!
//! ## Overview
//!
//! Workflows tie the engine and core layers together: a [`problems::Problem`]
//! bundles placement domains with their pruning constraint, and
//! [`assemble::run`] enumerates its solutions, reports progress, and returns
//! the solution set with aggregate statistics. Applications embedding the
//! library normally touch nothing below this layer.
//!
//! ## Architecture
//!
//! - **Assembly Workflow** ([`assemble`]) - Solution enumeration with options,
//!   progress reporting, and statistics over the result set.
//! - **Built-in Problems** ([`problems`]) - The tRNA anticodon stem-loop and
//!   the viral pseudoknot, wired against a template library.

pub mod assemble;
pub mod problems;
