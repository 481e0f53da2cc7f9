use std::path::Path;

use uuid::Uuid;

use crate::errors::FileError;
use crate::model::{BaseFile, ConstructionHelper, FileKind, JobRef};

use super::AnyFile;

/// Capacidades comunes de cualquier handle de archivo.
pub trait FileArtifact {
    fn base(&self) -> &BaseFile;

    fn handle_id(&self) -> Uuid { self.base().handle_id() }
    fn kind(&self) -> FileKind { self.base().kind() }
    fn path(&self) -> &Path { self.base().path() }
    fn job(&self) -> &JobRef { self.base().job() }
    fn is_valid(&self) -> bool { self.base().is_valid() }
    fn fingerprint(&self) -> &str { self.base().fingerprint() }
}

impl FileArtifact for BaseFile {
    fn base(&self) -> &BaseFile { self }
}

/// Handle con tipo de archivo fijo en compilación.
pub trait TypedFile: FileArtifact + Into<AnyFile> + TryFrom<AnyFile, Error = FileError> {
    const KIND: FileKind;

    /// Construye el handle delegando por completo en `BaseFile::new`.
    fn construct(helper: &ConstructionHelper) -> Result<Self, FileError>;

    /// Vista tipada de un `AnyFile` si es de este tipo.
    fn from_any(any: &AnyFile) -> Option<&Self>;
}
