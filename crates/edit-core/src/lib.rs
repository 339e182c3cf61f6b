//! # pdbedit Core Library
//!
//! An in-memory store and column-exact mutation engine for PDB-format
//! macromolecular structure text.
//!
//! The library holds fixed-column coordinate text under versioned identifiers
//! and applies surgical, column-exact edits (removing ligands and waters,
//! removing chains, swapping metal ions, mutating amino-acid residues). Every
//! edit produces a *new* entry under a deterministically derived identifier;
//! originals are never modified, so an entire derivation history stays
//! addressable for the life of the process.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict layered architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Stateless building blocks: the typed view
//!   over fixed-column records ([`core::records`]), static residue and element
//!   knowledge tables ([`core::residues`]), and the accession validator plus
//!   derived-identifier grammar ([`core::ids`]).
//!
//! - **[`store`]: The State.** The shared identifier-to-text mapping
//!   ([`store::StructureStore`]) and the seam to the external retrieval
//!   collaborator ([`store::StructureFetcher`]). Entries are immutable once
//!   written; cache-miss loads are serialized per key.
//!
//! - **[`engine`]: The Logic Core.** Pure text-to-text edit operations and
//!   their parameter types. Each operation classifies every line, decides
//!   keep/rewrite/drop, and reassembles the record without touching any
//!   column it does not own.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer.
//!   It resolves a source identifier (loading on demand), runs an engine
//!   operation, commits the result under a derived identifier, and returns
//!   a structured report.
//!
//! ## Fidelity Guarantee
//!
//! The engine guarantees *syntactic* fidelity only: unedited lines and
//! unedited columns of edited lines are carried through byte-for-byte. It does
//! not validate chemical plausibility, and it performs no geometry or energy
//! calculations on the coordinates it preserves.

pub mod core;
pub mod engine;
pub mod store;
pub mod workflows;
