//! Manifest JSON de los archivos registrados para un job.

use serde::Serialize;

use qc_core::{AnyFile, FileError, FileRegistry};

#[derive(Debug, Serialize)]
pub struct JobManifest {
    pub job_id: String,
    pub files: Vec<AnyFile>,
}

impl JobManifest {
    pub fn from_registry<R: FileRegistry>(registry: &R, job_id: &str) -> Self {
        Self { job_id: job_id.to_string(),
               files: registry.list(job_id) }
    }

    pub fn to_json(&self) -> Result<String, FileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
