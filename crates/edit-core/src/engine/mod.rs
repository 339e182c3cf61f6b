//! # Engine Module
//!
//! The mutation engine: pure, column-exact text-to-text edit operations over
//! PDB-format structure text.
//!
//! ## Overview
//!
//! Every operation walks the source text line by line, classifies each line
//! through the record model, and decides per line whether to keep it verbatim,
//! rewrite specific columns, or drop it. Operations here never touch the
//! store; the [`crate::workflows`] layer resolves the source text, runs the
//! operation, and commits the result under a derived identifier.
//!
//! ## Architecture
//!
//! - **Parameters** ([`config`]) - Typed operation parameters with validation
//!   into effective, canonicalized parameter sets.
//! - **Operations** ([`ops`]) - The four edits (ligand/water removal, chain
//!   removal, metal substitution, residue mutation) plus the read-only
//!   heterogen survey.
//! - **Error Handling** ([`error`]) - The engine-level error type unifying
//!   store, parameter, and mutation-target failures.

pub mod config;
pub mod error;
pub mod ops;
