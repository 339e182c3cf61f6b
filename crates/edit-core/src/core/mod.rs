//! # Core Module
//!
//! Stateless building blocks shared by the store and the mutation engine.
//!
//! ## Overview
//!
//! Everything in this module is a pure function or a static table: there is no
//! shared state and nothing here performs I/O. The submodules capture the three
//! kinds of knowledge the rest of the library needs:
//!
//! - **Record Model** ([`records`]) - A typed, borrow-based view over one
//!   fixed-column PDB line, with per-field offsets and "field absent" semantics
//!   for lines shorter than an offset.
//! - **Residue Knowledge** ([`residues`]) - Static tables for backbone atoms,
//!   per-residue side-chain composition, mutation atom renames, water residue
//!   codes, and element full names.
//! - **Identifiers** ([`ids`]) - The accession shape validator and the
//!   derived-identifier grammar used to name edit results.

pub mod ids;
pub mod records;
pub mod residues;
