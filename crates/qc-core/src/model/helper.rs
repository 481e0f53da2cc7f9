//! Parámetros de construcción compartidos por todos los handles.
//!
//! `ConstructionHelper` agrupa lo que un handle necesita al nacer: ruta, job
//! productor y contexto de procesamiento. Los métodos `with_*` sólo ensamblan
//! y nunca fallan; la validación ocurre en `BaseFile::new`. Los constructores
//! de handles reciben `&ConstructionHelper`, por lo que el helper queda
//! intacto y puede reutilizarse.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::FileKind;

/// Job que produce el archivo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobRef {
    pub job_id: String,
    pub tool_id: String,
}

impl JobRef {
    pub fn new(job_id: impl Into<String>, tool_id: impl Into<String>) -> Self {
        Self { job_id: job_id.into(),
               tool_id: tool_id.into() }
    }
}

/// Contexto de procesamiento (dataset, muestra, directorio de salida).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessingContext {
    /// Base para resolver rutas relativas. `None` deja la ruta tal cual.
    pub output_dir: Option<PathBuf>,
    pub dataset_id: Option<String>,
    pub sample_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructionHelper {
    path: PathBuf,
    job: JobRef,
    #[serde(default)]
    context: ProcessingContext,
    #[serde(default = "default_valid")]
    valid: bool,
}

fn default_valid() -> bool { true }

impl ConstructionHelper {
    pub fn new(path: impl Into<PathBuf>, job: JobRef) -> Self {
        Self { path: path.into(),
               job,
               context: ProcessingContext::default(),
               valid: true }
    }

    /// Helper con la ruta convencional `<sample_id><sufijo del kind>`.
    pub fn for_sample(kind: FileKind, sample_id: &str, job: JobRef, context: ProcessingContext) -> Self {
        let path = format!("{sample_id}{}", kind.default_suffix());
        let context = ProcessingContext { sample_id: Some(sample_id.to_string()),
                                          ..context };
        Self::new(path, job).with_context(context)
    }

    pub fn with_context(mut self, context: ProcessingContext) -> Self {
        self.context = context;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.context.output_dir = Some(dir.into());
        self
    }

    pub fn with_dataset_id(mut self, dataset_id: impl Into<String>) -> Self {
        self.context.dataset_id = Some(dataset_id.into());
        self
    }

    /// Marca el artifact como no válido (p.ej. salida de un job fallido).
    pub fn with_valid(mut self, valid: bool) -> Self {
        self.valid = valid;
        self
    }

    pub fn path(&self) -> &Path { &self.path }
    pub fn job(&self) -> &JobRef { &self.job }
    pub fn context(&self) -> &ProcessingContext { &self.context }
    pub fn is_valid(&self) -> bool { self.valid }
}
