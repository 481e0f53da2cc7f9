use std::collections::HashMap;

use indexmap::IndexMap;
use log::{debug, warn};

use crate::files::{AnyFile, FileArtifact, TypedFile};
use crate::model::FileKind;

/// Registro append-only de handles agrupados por `job_id`.
pub trait FileRegistry {
    /// Registra un handle. Devuelve `false` si el job ya tenía uno con el mismo
    /// fingerprint; en ese caso se conserva el primero.
    fn register(&mut self, file: AnyFile) -> bool;
    /// Handles de un job en orden de registro.
    fn list(&self, job_id: &str) -> Vec<AnyFile>;
    /// Jobs con al menos un handle, ordenados.
    fn job_ids(&self) -> Vec<String>;

    fn list_kind(&self, job_id: &str, kind: FileKind) -> Vec<AnyFile> {
        self.list(job_id).into_iter().filter(|f| f.kind() == kind).collect()
    }

    /// Primer handle de tipo `T` producido por el job.
    fn find<T: TypedFile>(&self, job_id: &str) -> Option<T>
        where Self: Sized
    {
        self.list(job_id).into_iter().find_map(|f| T::try_from(f).ok())
    }
}

#[derive(Default)]
pub struct InMemoryFileRegistry {
    inner: HashMap<String, IndexMap<String, AnyFile>>,
}

impl InMemoryFileRegistry {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.inner.values().map(IndexMap::len).sum() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl FileRegistry for InMemoryFileRegistry {
    fn register(&mut self, file: AnyFile) -> bool {
        let job_id = file.job().job_id.clone();
        let entries = self.inner.entry(job_id.clone()).or_default();
        if entries.contains_key(file.fingerprint()) {
            warn!("register:duplicate job_id={job_id} fingerprint={} path={}",
                  file.fingerprint(),
                  file.path().display());
            return false;
        }
        debug!("register job_id={job_id} kind={} handle_id={}", file.kind(), file.handle_id());
        entries.insert(file.fingerprint().to_string(), file);
        true
    }

    fn list(&self, job_id: &str) -> Vec<AnyFile> {
        self.inner.get(job_id).map(|m| m.values().cloned().collect()).unwrap_or_default()
    }

    fn job_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.inner.keys().cloned().collect();
        ids.sort();
        ids
    }
}
