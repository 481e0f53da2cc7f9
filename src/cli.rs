//! Lógica del binario `qcflow-demo`, separada de `main` para poder testearla.
//!
//! Uso: `qcflow-demo <flagstats|insertsizes> <path> [job_id]`
use log::{info, warn};

use qc_core::{AnyFile, ConstructionHelper, FileArtifact, FileError, FileKind, FileRegistry, JobRef, QcConfig};

use crate::manifest::JobManifest;

pub const USAGE: &str = "usage: qcflow-demo <flagstats|insertsizes> <path> [job_id]";
pub const DEFAULT_JOB_ID: &str = "demo-job";
pub const TOOL_ID: &str = "qcflow-demo";

/// Código de salida para argumentos insuficientes.
pub const EXIT_USAGE: u8 = 2;

/// Construye el handle pedido, lo registra y devuelve el manifest del job.
pub fn build_manifest<R: FileRegistry>(registry: &mut R,
                                       kind: &str,
                                       path: &str,
                                       job_id: &str,
                                       cfg: &QcConfig)
                                       -> Result<JobManifest, FileError> {
    let kind: FileKind = kind.parse()?;
    let helper = ConstructionHelper::new(path, JobRef::new(job_id, TOOL_ID)).with_context(cfg.context());

    let file = AnyFile::new(kind, &helper)?;
    info!("cli:built kind={} path={} exists={}", file.kind(), file.path().display(), file.base().exists_on_disk());

    let fingerprint = file.fingerprint().to_string();
    if !registry.register(file) {
        warn!("cli:already registered job_id={job_id} fingerprint={fingerprint}");
    }
    Ok(JobManifest::from_registry(registry, job_id))
}
