//! Handles concretos y capacidades compartidas.
//!
//! - `FileArtifact`: acceso a ruta, job, validez y fingerprint.
//! - `TypedFile`: tipo nominal con `KIND` fijo y conversión desde/hacia
//!   `AnyFile`.
//! - `FlagstatsFile` / `InsertSizesTextFile`: declarados con `typed_file!`.
//! - `AnyFile`: variante etiquetada para colecciones heterogéneas.

pub mod any;
pub mod artifact;
pub mod kinds;
pub mod macros;

pub use any::{filter_kind, find_first, AnyFile};
pub use artifact::{FileArtifact, TypedFile};
pub use kinds::{FlagstatsFile, InsertSizesTextFile};
