use crate::models::Document;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum DocumentIoError {
    #[error("Failed to read document at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse document at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to serialize document for {path}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to write document to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read a JSON document from disk
pub fn load_document(path: &Path) -> Result<Document, DocumentIoError> {
    let content = fs::read_to_string(path).map_err(|source| DocumentIoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| DocumentIoError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a document as pretty JSON, creating parent directories as needed
pub fn save_document(path: &Path, document: &Document) -> Result<(), DocumentIoError> {
    let content =
        serde_json::to_string_pretty(document).map_err(|source| DocumentIoError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| DocumentIoError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, content).map_err(|source| DocumentIoError::Write {
        path: path.to_path_buf(),
        source,
    })
}
