//! Modelo de handles: tipo de archivo, helper de construcción y base común.

pub mod base_file;
pub mod fingerprint;
pub mod helper;
pub mod kind;

pub use base_file::BaseFile;
pub use fingerprint::FileFingerprintInput;
pub use helper::{ConstructionHelper, JobRef, ProcessingContext};
pub use kind::FileKind;
