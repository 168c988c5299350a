//! Common types and utilities for the Swagger Client Generator
//!
//! This crate contains the shared document and binding IR, error types,
//! diagnostics, and generation-target configuration used across the parser,
//! generator, and CLI components.

pub mod binding;
pub mod document;
pub mod naming;

mod target;

pub use target::{GenerationTarget, RepresentationMode, SpecVariant, TargetManifest};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during client generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Naming collision: synthesized type `{0}` generated twice in one pass")]
    NamingCollision(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Warning produced while resolving a schema node that matched no known
/// structural kind. Collected during a pass and surfaced by the driver once
/// the pass completes; never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Where the node was encountered, e.g. `Pet.status`
    pub context: String,
    /// The document's declared `type`, if any
    pub declared_type: Option<String>,
    /// The document's declared `format`, if any
    pub format: Option<String>,
}

impl Diagnostic {
    pub fn unrecognized_shape(
        context: impl Into<String>,
        declared_type: Option<String>,
        format: Option<String>,
    ) -> Self {
        Self {
            context: context.into(),
            declared_type,
            format,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} | {}",
            self.context,
            self.declared_type.as_deref().unwrap_or("-"),
            self.format.as_deref().unwrap_or("-")
        )
    }
}
