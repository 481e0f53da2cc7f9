//! Variante etiquetada para manejar handles de distintos tipos juntos.
use serde::Serialize;

use super::{FileArtifact, FlagstatsFile, InsertSizesTextFile, TypedFile};
use crate::errors::FileError;
use crate::model::{BaseFile, ConstructionHelper, FileKind};

/// Cualquier handle conocido. Se serializa como su `BaseFile` (que ya
/// incluye `kind`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnyFile {
    Flagstats(FlagstatsFile),
    InsertSizesText(InsertSizesTextFile),
}

impl AnyFile {
    /// Construcción con el tipo elegido en runtime.
    pub fn new(kind: FileKind, helper: &ConstructionHelper) -> Result<Self, FileError> {
        Ok(match kind {
            FileKind::Flagstats => FlagstatsFile::new(helper)?.into(),
            FileKind::InsertSizesText => InsertSizesTextFile::new(helper)?.into(),
        })
    }

    pub fn kind(&self) -> FileKind { self.base().kind() }

    pub fn as_flagstats(&self) -> Option<&FlagstatsFile> { FlagstatsFile::from_any(self) }

    pub fn as_insert_sizes_text(&self) -> Option<&InsertSizesTextFile> { InsertSizesTextFile::from_any(self) }

    pub fn downcast_ref<T: TypedFile>(&self) -> Option<&T> { T::from_any(self) }

    /// Manifest JSON (pretty) del handle.
    pub fn to_manifest_json(&self) -> Result<String, FileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FileArtifact for AnyFile {
    fn base(&self) -> &BaseFile {
        match self {
            AnyFile::Flagstats(f) => f.as_base(),
            AnyFile::InsertSizesText(f) => f.as_base(),
        }
    }
}

/// Primer handle de tipo `T` en una lista heterogénea.
pub fn find_first<T: TypedFile>(files: &[AnyFile]) -> Option<&T> {
    files.iter().find_map(T::from_any)
}

/// Todos los handles de tipo `T`, en orden.
pub fn filter_kind<'a, T: TypedFile + 'a>(files: &'a [AnyFile]) -> impl Iterator<Item = &'a T> {
    files.iter().filter_map(T::from_any)
}
