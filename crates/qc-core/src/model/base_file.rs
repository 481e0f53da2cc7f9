//! Base común de todos los handles de archivo.
//!
//! `BaseFile` concentra lo que cada tipo de archivo hereda: identidad
//! (`handle_id`), ruta resuelta, job productor, contexto, flag de validez y
//! fingerprint. Es inmutable: no hay setters, y un handle nunca se
//! reconfigura después de construido.
//!
//! Reglas de construcción (`BaseFile::new`):
//! - ruta y `output_dir` en UTF-8 válido (el fingerprint y el manifest los
//!   representan como texto);
//! - ruta no vacía y que nombre un archivo (no termina en separador);
//! - `job_id` y `tool_id` no vacíos;
//! - rutas relativas se resuelven contra `context.output_dir` si existe;
//! - `handle_id` es un UUID v4 nuevo por construcción;
//! - `fingerprint` = blake3 del JSON canónico de `FileFingerprintInput`.
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use log::debug;
use serde::Serialize;
use uuid::Uuid;

use super::{ConstructionHelper, FileFingerprintInput, FileKind, JobRef, ProcessingContext};
use crate::constants::FINGERPRINT_VERSION;
use crate::errors::FileError;
use crate::hashing::hash_value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseFile {
    handle_id: Uuid,
    kind: FileKind,
    path: PathBuf,
    job: JobRef,
    context: ProcessingContext,
    valid: bool,
    fingerprint: String,
}

impl BaseFile {
    pub fn new(kind: FileKind, helper: &ConstructionHelper) -> Result<Self, FileError> {
        validate(helper)?;
        let path = resolve_path(helper.path(), helper.context().output_dir.as_deref());
        let fingerprint = compute_fingerprint(kind, &path, helper.job(), helper.context())?;
        let handle_id = Uuid::new_v4();
        debug!("base_file:new kind={kind} path={} job_id={} handle_id={handle_id}",
               path.display(),
               helper.job().job_id);
        Ok(Self { handle_id,
                  kind,
                  path,
                  job: helper.job().clone(),
                  context: helper.context().clone(),
                  valid: helper.is_valid(),
                  fingerprint })
    }

    pub fn handle_id(&self) -> Uuid { self.handle_id }
    pub fn kind(&self) -> FileKind { self.kind }
    pub fn path(&self) -> &Path { &self.path }
    pub fn job(&self) -> &JobRef { &self.job }
    pub fn context(&self) -> &ProcessingContext { &self.context }
    pub fn is_valid(&self) -> bool { self.valid }
    pub fn fingerprint(&self) -> &str { &self.fingerprint }

    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }

    /// Consulta de sólo lectura al filesystem; no altera el handle.
    pub fn exists_on_disk(&self) -> bool {
        std::fs::metadata(&self.path).map(|m| m.is_file()).unwrap_or(false)
    }
}

fn validate(helper: &ConstructionHelper) -> Result<(), FileError> {
    let raw = helper.path()
                    .to_str()
                    .ok_or_else(|| FileError::NonUtf8Path(helper.path().to_string_lossy().into_owned()))?;
    if let Some(dir) = helper.context().output_dir.as_deref() {
        if dir.to_str().is_none() {
            return Err(FileError::NonUtf8Path(dir.to_string_lossy().into_owned()));
        }
    }
    if raw.trim().is_empty() {
        return Err(FileError::EmptyPath);
    }
    if raw.ends_with('/') || raw.ends_with(MAIN_SEPARATOR) || helper.path().file_name().is_none() {
        return Err(FileError::DirectoryPath(raw.to_string()));
    }
    if helper.job().job_id.trim().is_empty() {
        return Err(FileError::MissingJobId);
    }
    if helper.job().tool_id.trim().is_empty() {
        return Err(FileError::MissingToolId);
    }
    Ok(())
}

fn resolve_path(path: &Path, output_dir: Option<&Path>) -> PathBuf {
    match output_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

fn compute_fingerprint(kind: FileKind,
                       path: &Path,
                       job: &JobRef,
                       context: &ProcessingContext)
                       -> Result<String, FileError> {
    let path = path.to_string_lossy();
    let input = FileFingerprintInput { version: FINGERPRINT_VERSION,
                                       kind,
                                       path: &path,
                                       job,
                                       context };
    Ok(hash_value(&serde_json::to_value(&input)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> JobRef { JobRef::new("job-7", "flagstat") }

    #[test]
    fn relative_path_is_joined_onto_output_dir() {
        let h = ConstructionHelper::new("s1.flagstat", job()).with_output_dir("/data/run1");
        let f = BaseFile::new(FileKind::Flagstats, &h).unwrap();
        assert_eq!(f.path(), Path::new("/data/run1/s1.flagstat"));
        assert_eq!(f.file_name(), Some("s1.flagstat"));
    }

    #[test]
    fn absolute_path_ignores_output_dir() {
        let h = ConstructionHelper::new("/abs/s1.flagstat", job()).with_output_dir("/data/run1");
        let f = BaseFile::new(FileKind::Flagstats, &h).unwrap();
        assert_eq!(f.path(), Path::new("/abs/s1.flagstat"));
    }

    #[test]
    fn validation_errors() {
        let empty = ConstructionHelper::new("", job());
        assert_eq!(BaseFile::new(FileKind::Flagstats, &empty), Err(FileError::EmptyPath));

        let dir = ConstructionHelper::new("out/", job());
        assert_eq!(BaseFile::new(FileKind::Flagstats, &dir), Err(FileError::DirectoryPath("out/".into())));

        let no_job = ConstructionHelper::new("a.flagstat", JobRef::new("  ", "flagstat"));
        assert_eq!(BaseFile::new(FileKind::Flagstats, &no_job), Err(FileError::MissingJobId));

        let no_tool = ConstructionHelper::new("a.flagstat", JobRef::new("j", ""));
        assert_eq!(BaseFile::new(FileKind::Flagstats, &no_tool), Err(FileError::MissingToolId));
    }

    #[test]
    fn fingerprint_depends_on_kind_and_location_not_identity() {
        let h = ConstructionHelper::new("s1.txt", job());
        let a = BaseFile::new(FileKind::Flagstats, &h).unwrap();
        let b = BaseFile::new(FileKind::Flagstats, &h).unwrap();
        let c = BaseFile::new(FileKind::InsertSizesText, &h).unwrap();
        let d = BaseFile::new(FileKind::Flagstats, &h.clone().with_valid(false)).unwrap();
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint().len(), 64);
        assert_ne!(a.fingerprint(), c.fingerprint());
        assert_eq!(a.fingerprint(), d.fingerprint());
        assert!(!d.is_valid());
        assert_ne!(a.handle_id(), b.handle_id());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_paths_are_rejected_before_hashing() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let a = ConstructionHelper::new(OsStr::from_bytes(b"s\xff.flagstat"), job());
        let b = ConstructionHelper::new(OsStr::from_bytes(b"s\xfe.flagstat"), job());
        for h in [&a, &b] {
            assert!(matches!(BaseFile::new(FileKind::Flagstats, h), Err(FileError::NonUtf8Path(_))));
        }

        let dir = ConstructionHelper::new("s1.flagstat", job()).with_output_dir(OsStr::from_bytes(b"/data/r\xff"));
        assert_eq!(BaseFile::new(FileKind::Flagstats, &dir),
                   Err(FileError::NonUtf8Path("/data/r\u{FFFD}".into())));
    }

    #[test]
    fn exists_on_disk_probes_without_mutation() {
        let dir = std::env::temp_dir();
        let name = format!("qc-core-{}.flagstat", Uuid::new_v4());
        let h = ConstructionHelper::new(name.as_str(), job()).with_output_dir(&dir);
        let f = BaseFile::new(FileKind::Flagstats, &h).unwrap();
        assert!(!f.exists_on_disk());
        std::fs::write(f.path(), "0 + 0 in total\n").unwrap();
        assert!(f.exists_on_disk());
        std::fs::remove_file(f.path()).unwrap();
    }
}
