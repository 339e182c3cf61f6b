use crate::engine::error::EditError;
use crate::engine::ops::survey::{self, HetGroup};
use crate::store::{StructureFetcher, StructureStore};
use crate::workflows::edits::resolve_source;
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HetatmInventory {
    pub id: String,
    /// Chain identifiers seen on ATOM or HETATM records.
    pub chains: Vec<char>,
    pub hetatm_types: Vec<HetGroup>,
}

/// Lists all HETATM residue types (ligands, ions, water) and chains in a
/// structure, loading it on demand like the mutation operations. Read-only:
/// nothing is committed.
#[instrument(skip(store, fetcher))]
pub fn list_hetatm(
    store: &StructureStore,
    fetcher: &dyn StructureFetcher,
    id: &str,
) -> Result<HetatmInventory, EditError> {
    let (source, text) = resolve_source(store, fetcher, id)?;
    let survey = survey::apply(&text);
    Ok(HetatmInventory {
        id: source,
        chains: survey.chains,
        hetatm_types: survey.het_groups,
    })
}
