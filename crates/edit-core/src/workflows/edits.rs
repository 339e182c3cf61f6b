use crate::core::ids;
use crate::engine::config::{ChainRemoval, HetatmRemoval, MetalSwap, ResidueMutation};
use crate::engine::error::EditError;
use crate::engine::ops;
use crate::store::{StoreError, StructureFetcher, StructureStore};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Debug, Clone, Serialize)]
pub struct HetatmRemovalReport {
    pub new_id: String,
    /// Removed atom counts per residue code.
    pub removed: BTreeMap<String, usize>,
    pub total_atoms_removed: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChainRemovalReport {
    pub new_id: String,
    pub chains_removed: Vec<char>,
    pub lines_removed: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetalSwapReport {
    pub new_id: String,
    pub old_metal: String,
    pub new_metal: String,
    pub atoms_replaced: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MutationReport {
    pub new_id: String,
    pub old_residue: String,
    pub new_residue: String,
    pub atoms_modified: usize,
}

/// Removes HETATM residues (ligands, ions, water) from a structure.
///
/// The result is committed under `<SRC>_NO<CODE1>_<CODE2>_...` with the
/// effective codes sorted ascending, so identical requests always derive the
/// same identifier.
#[instrument(skip(store, fetcher), name = "remove_hetatm")]
pub fn remove_hetatm(
    store: &StructureStore,
    fetcher: &dyn StructureFetcher,
    id: &str,
    params: &HetatmRemoval,
) -> Result<HetatmRemovalReport, EditError> {
    let codes = params.effective_codes()?;
    let (source, text) = resolve_source(store, fetcher, id)?;

    let outcome = ops::remove_hetatm::apply(&text, &codes);
    let new_id = ids::removal_id(&source, &codes);
    store.put(new_id.clone(), outcome.text);

    let total_atoms_removed = outcome.removed.values().sum();
    info!(source = %source, new_id = %new_id, total_atoms_removed, "hetatm removal committed");
    Ok(HetatmRemovalReport {
        new_id,
        removed: outcome.removed,
        total_atoms_removed,
    })
}

/// Removes whole chains from a structure.
///
/// The result is committed under `<SRC>_NO<LETTERS>` with the chain letters
/// sorted ascending and concatenated without a separator.
#[instrument(skip(store, fetcher), name = "remove_chain")]
pub fn remove_chain(
    store: &StructureStore,
    fetcher: &dyn StructureFetcher,
    id: &str,
    params: &ChainRemoval,
) -> Result<ChainRemovalReport, EditError> {
    let chains = params.effective_chains()?;
    let (source, text) = resolve_source(store, fetcher, id)?;

    let outcome = ops::remove_chain::apply(&text, &chains);
    let new_id = ids::chain_removal_id(&source, &chains);
    store.put(new_id.clone(), outcome.text);

    info!(source = %source, new_id = %new_id, lines_removed = outcome.lines_removed, "chain removal committed");
    Ok(ChainRemovalReport {
        new_id,
        chains_removed: chains.into_iter().collect(),
        lines_removed: outcome.lines_removed,
    })
}

/// Substitutes one metal ion for another across a structure.
///
/// The result is committed under `<SRC>_<NEWSYMBOL>`.
#[instrument(skip(store, fetcher), name = "replace_metal")]
pub fn replace_metal(
    store: &StructureStore,
    fetcher: &dyn StructureFetcher,
    id: &str,
    params: &MetalSwap,
) -> Result<MetalSwapReport, EditError> {
    let (old_symbol, new_symbol) = params.effective_symbols()?;
    let (source, text) = resolve_source(store, fetcher, id)?;

    let outcome = ops::replace_metal::apply(&text, &old_symbol, &new_symbol);
    let new_id = ids::metal_swap_id(&source, &new_symbol);
    store.put(new_id.clone(), outcome.text);

    info!(source = %source, new_id = %new_id, atoms_replaced = outcome.atoms_replaced, "metal swap committed");
    Ok(MetalSwapReport {
        new_id,
        old_metal: old_symbol,
        new_metal: new_symbol,
        atoms_replaced: outcome.atoms_replaced,
    })
}

/// Mutates one amino-acid residue in a structure.
///
/// The result is committed under `<SRC>_<OLD1><NUM><NEW1>`. When no line
/// matches the residue number (and chain filter, if given), the operation
/// fails with [`EditError::ResidueNotFound`] and commits nothing.
#[instrument(skip(store, fetcher), name = "mutate_residue")]
pub fn mutate_residue(
    store: &StructureStore,
    fetcher: &dyn StructureFetcher,
    id: &str,
    params: &ResidueMutation,
) -> Result<MutationReport, EditError> {
    let (new_residue, chain_filter) = params.effective_target()?;
    let (source, text) = resolve_source(store, fetcher, id)?;

    let outcome = ops::mutate_residue::apply(&text, params.residue_number, &new_residue, chain_filter)
        .ok_or_else(|| EditError::ResidueNotFound {
            id: source.clone(),
            residue_number: params.residue_number,
        })?;
    let new_id = ids::mutation_id(&source, &outcome.old_residue, params.residue_number, &new_residue);
    store.put(new_id.clone(), outcome.text);

    info!(
        source = %source,
        new_id = %new_id,
        old_residue = %outcome.old_residue,
        atoms_modified = outcome.atoms_modified,
        "residue mutation committed"
    );
    Ok(MutationReport {
        new_id,
        old_residue: outcome.old_residue,
        new_residue,
        atoms_modified: outcome.atoms_modified,
    })
}

/// Resolves a source identifier to its canonical key and resident text,
/// loading external accessions on demand.
pub(crate) fn resolve_source(
    store: &StructureStore,
    fetcher: &dyn StructureFetcher,
    id: &str,
) -> Result<(String, Arc<str>), EditError> {
    let key = store.ensure_loaded(fetcher, id)?;
    let text = store
        .get(&key)
        .ok_or_else(|| StoreError::NotFound { id: key.clone() })?;
    Ok((key, text))
}
