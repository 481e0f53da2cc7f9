//! Discriminante en runtime del tipo de archivo.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FileError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileKind {
    /// Reporte flagstat de un alineamiento (conteos de reads mapeados, etc.).
    Flagstats,
    /// Distribución de tamaños de inserto en formato texto.
    InsertSizesText,
}

impl FileKind {
    pub const ALL: [FileKind; 2] = [FileKind::Flagstats, FileKind::InsertSizesText];

    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Flagstats => "flagstats",
            FileKind::InsertSizesText => "insert_sizes_text",
        }
    }

    /// Sufijo convencional; sólo lo usa `ConstructionHelper::for_sample`.
    pub fn default_suffix(&self) -> &'static str {
        match self {
            FileKind::Flagstats => ".flagstat",
            FileKind::InsertSizesText => ".insertsizes.txt",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FileKind {
    type Err = FileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flagstats" | "flagstat" => Ok(FileKind::Flagstats),
            "insert_sizes_text" | "insertsizes" | "insert_sizes" => Ok(FileKind::InsertSizesText),
            _ => Err(FileError::UnknownKind(s.to_string())),
        }
    }
}
