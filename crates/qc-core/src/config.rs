//! Configuración por defecto del contexto de procesamiento desde variables de
//! entorno (`QC_OUTPUT_DIR`, `QC_DATASET_ID`). Ambas son opcionales.

use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

use crate::constants::{ENV_DATASET_ID, ENV_OUTPUT_DIR};
use crate::model::ProcessingContext;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QcConfig {
    pub output_dir: Option<PathBuf>,
    pub dataset_id: Option<String>,
}

impl QcConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente arbitraria de valores. Valores
    /// vacíos cuentan como ausentes.
    pub fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        Self { output_dir: read(ENV_OUTPUT_DIR).map(PathBuf::from),
               dataset_id: read(ENV_DATASET_ID) }
    }

    /// Contexto base para helpers; `sample_id` queda a cargo del llamador.
    pub fn context(&self) -> ProcessingContext {
        ProcessingContext { output_dir: self.output_dir.clone(),
                            dataset_id: self.dataset_id.clone(),
                            sample_id: None }
    }
}
