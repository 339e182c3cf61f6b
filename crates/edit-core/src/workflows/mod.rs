//! # Workflows Module
//!
//! High-level entry points that tie the store and the engine together.
//!
//! ## Overview
//!
//! Every workflow follows the same pipeline: resolve the source identifier
//! (fetching through the collaborator seam on a cache miss), run the pure
//! engine operation over the resident text, commit the result under a
//! deterministically derived identifier, and return a structured,
//! serializable report. The store is only written after the full rewrite has
//! succeeded, so a failed operation leaves it exactly as it was.
//!
//! ## Architecture
//!
//! - **Edits** ([`edits`]) - The four mutations: ligand/water removal, chain
//!   removal, metal substitution, and residue mutation.
//! - **Inventory** ([`inventory`]) - Read-only heterogen and chain survey.
//! - **Intake** ([`intake`]) - Moving structure text across the store
//!   boundary: explicit injection of caller-supplied text and retrieval of
//!   any resident version by identifier.

pub mod edits;
pub mod intake;
pub mod inventory;

pub use edits::{
    ChainRemovalReport, HetatmRemovalReport, MetalSwapReport, MutationReport, mutate_residue,
    remove_chain, remove_hetatm, replace_metal,
};
pub use intake::{UploadReport, structure_text, upload_from_path, upload_structure};
pub use inventory::{HetatmInventory, list_hetatm};
