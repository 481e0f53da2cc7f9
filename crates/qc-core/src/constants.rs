//! Constantes del núcleo de handles.

/// Versión del esquema de fingerprint. Forma parte del input del hash: un
/// cambio aquí invalida todos los fingerprints previos aunque la ruta, el job
/// y el contexto no cambien.
pub const FINGERPRINT_VERSION: &str = "QC1";

/// Variable de entorno con el directorio de salida por defecto.
pub const ENV_OUTPUT_DIR: &str = "QC_OUTPUT_DIR";

/// Variable de entorno con el identificador de dataset por defecto.
pub const ENV_DATASET_ID: &str = "QC_DATASET_ID";
