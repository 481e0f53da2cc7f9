//! Errores de construcción y conversión de handles.

use thiserror::Error;

use crate::model::FileKind;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FileError {
    #[error("construction helper has an empty path")]
    EmptyPath,
    #[error("path does not name a file: {0}")]
    DirectoryPath(String),
    #[error("path is not valid UTF-8: {0}")]
    NonUtf8Path(String),
    #[error("construction helper has no producing job id")]
    MissingJobId,
    #[error("construction helper has no producing tool id")]
    MissingToolId,
    #[error("file kind mismatch: expected {expected}, found {found}")]
    KindMismatch { expected: FileKind, found: FileKind },
    #[error("unknown file kind: {0}")]
    UnknownKind(String),
    #[error("serialization: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for FileError {
    fn from(e: serde_json::Error) -> Self {
        FileError::Serialization(e.to_string())
    }
}
