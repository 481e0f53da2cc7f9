//! Registro de handles por job productor.

pub mod store;

pub use store::{FileRegistry, InMemoryFileRegistry};
