use serde::Serialize;

use super::{FileKind, JobRef, ProcessingContext};

/// Insumos del fingerprint de un handle, antes de canonicalizar.
/// `handle_id` y `valid` no participan: dos handles del mismo helper y tipo
/// comparten fingerprint.
#[derive(Serialize)]
pub struct FileFingerprintInput<'a> {
    pub version: &'a str,
    pub kind: FileKind,
    pub path: &'a str,
    pub job: &'a JobRef,
    pub context: &'a ProcessingContext,
}
