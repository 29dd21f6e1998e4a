//! Generator errors. Every variant aborts the run.

use std::io;
use std::path::PathBuf;

use cmpkit_registry::RegistryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("failed to read {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    SourceParse {
        path: PathBuf,
        #[source]
        source: syn::Error,
    },

    #[error("cannot render `{name}`: {reason}")]
    TemplateRender { name: String, reason: String },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("failed to serialize catalog: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = GenError> = std::result::Result<T, E>;
