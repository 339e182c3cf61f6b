use crate::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("residue {residue_number} not found in structure '{id}'")]
    ResidueNotFound { id: String, residue_number: isize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
