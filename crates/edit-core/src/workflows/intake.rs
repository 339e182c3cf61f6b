use crate::core::ids;
use crate::core::records::RecordKind;
use crate::engine::error::EditError;
use crate::store::{StoreError, StructureStore};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadReport {
    /// The key the structure is now resident under.
    pub id: String,
    pub lines: usize,
    /// ATOM and HETATM record count.
    pub atom_records: usize,
}

/// Injects caller-supplied structure text into the store under the
/// upper-cased identifier. This is the explicit injection boundary: apart
/// from cache-miss loading and mutation commits, nothing else writes the
/// store.
#[instrument(skip(store, text))]
pub fn upload_structure(store: &StructureStore, id: &str, text: &str) -> UploadReport {
    let key = ids::canonical_key(id);
    let lines = text.lines().count();
    let atom_records = text
        .lines()
        .filter(|line| RecordKind::of(line).is_coordinate())
        .count();
    store.put(key.clone(), text);
    info!(id = %key, lines, atom_records, "structure uploaded");
    UploadReport {
        id: key,
        lines,
        atom_records,
    }
}

/// Reads structure text from a file and injects it, for callers that stage
/// large payloads on disk instead of passing them through a control channel.
#[instrument(skip(store))]
pub fn upload_from_path(
    store: &StructureStore,
    id: &str,
    path: &Path,
) -> Result<UploadReport, EditError> {
    let text = fs::read_to_string(path)?;
    Ok(upload_structure(store, id, &text))
}

/// Retrieves the raw text of any resident version by identifier: exact key
/// first, then one upper-cased retry. Never triggers a fetch — absent
/// identifiers (derived ones included) report [`StoreError::NotFound`].
pub fn structure_text(store: &StructureStore, id: &str) -> Result<Arc<str>, EditError> {
    store
        .get(id)
        .ok_or_else(|| StoreError::NotFound { id: id.to_string() }.into())
}
