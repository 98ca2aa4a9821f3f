use crate::modules::protocol::FieldSpec;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("missing subject: enter a core subject before generating a prompt")]
    MissingSubject,
    #[error("unknown context: {0:?}")]
    UnknownContext(String),
    #[error("field {0} has no per-context option list")]
    UnknownField(FieldSpec),
    #[error("{value:?} is not an option for {field} in the active context")]
    UnknownOption { field: FieldSpec, value: String },
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error("catalog parse failed: {0}")]
    CatalogParse(#[from] serde_json::Error),
    #[error("failed to read catalog {}: {source}", path.display())]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
