// src/config/mod.rs

//! Input documents and planning options.
//!
//! Responsibilities:
//! - Read a document from disk as TOML or JSON (`loader.rs`).
//! - Define the options that steer planning (`model.rs`).
//!
//! The planner itself only ever sees the parsed value tree.

pub mod loader;
pub mod model;

pub use loader::{default_document_path, load_document, parse_document};
pub use model::PlanOptions;
