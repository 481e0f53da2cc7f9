//! QcFlow Rust Library
//!
//! Punto de entrada del workspace:
//! - Re-exporta `qc_core` (handles tipados, helper, registro).
//! - Expone `manifest` para volcar las salidas de un job como JSON.
//! - `cli` contiene la lógica del binario `qcflow-demo`.

pub mod cli;
pub mod manifest;

pub use qc_core::*;
