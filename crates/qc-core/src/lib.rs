//! qc-core: handles tipados para los archivos de salida del workflow de
//! alineamiento y QC.
//!
//! Un handle describe un artifact en disco (ruta, job productor, contexto)
//! sin poseer sus bytes. Cada tipo de archivo es un wrapper nominal sobre
//! `BaseFile`; el workflow distingue tipos en compilación (`FlagstatsFile`,
//! `InsertSizesTextFile`) o en runtime (`AnyFile`, `FileKind`).
pub mod config;
pub mod constants;
pub mod errors;
pub mod files;
pub mod hashing;
pub mod model;
pub mod registry;

pub use config::QcConfig;
pub use errors::FileError;
pub use files::{filter_kind, find_first, AnyFile, FileArtifact, FlagstatsFile, InsertSizesTextFile, TypedFile};
pub use model::{BaseFile, ConstructionHelper, FileKind, JobRef, ProcessingContext};
pub use registry::{FileRegistry, InMemoryFileRegistry};
