//! Generation target configuration and YAML manifest loading
//!
//! A target names one API document and the shape of the output generated
//! from it. Targets arrive either from CLI flags or from a YAML manifest
//! listing several of them for batch generation.

use crate::{GeneratorError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// API description document variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecVariant {
    /// Swagger 2.0 (`"swagger": "2.0"`)
    Swagger2,
    /// OpenAPI 3.x (`"openapi": "3.x.y"`)
    Openapi3,
}

/// Output shape for generated data models.
///
/// One mode per generation run; the resolution algorithm is identical for
/// both, only the emitted shape differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepresentationMode {
    /// One file per type, public mutable fields
    MutableRecord,
    /// One umbrella module, constructor-bound fields
    ImmutableRecord,
}

impl Default for RepresentationMode {
    fn default() -> Self {
        Self::MutableRecord
    }
}

/// One generation target: document location plus output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationTarget {
    /// Target name, used as the generated module directory name
    pub name: String,
    /// Document location: filesystem path or http(s) URL
    pub location: String,
    /// Document variant
    pub variant: SpecVariant,
    /// Model representation mode
    #[serde(default)]
    pub mode: RepresentationMode,
}

/// Root structure for target manifest YAML files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetManifest {
    /// Manifest format version
    pub version: u32,
    /// Generation targets, processed sequentially in listed order
    pub targets: Vec<GenerationTarget>,
}

impl TargetManifest {
    /// Load a manifest from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GeneratorError::Parse(format!("Failed to read manifest file {:?}: {}", path, e))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse a manifest from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| GeneratorError::Parse(format!("Failed to parse manifest YAML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_from_yaml() {
        let yaml = r#"
version: 1
targets:
  - name: petstore
    location: ./petstore.json
    variant: swagger2
    mode: immutable-record
  - name: tracker
    location: https://example.com/openapi.json
    variant: openapi3
"#;
        let manifest = TargetManifest::from_yaml(yaml).unwrap();
        assert_eq!(manifest.version, 1);
        assert_eq!(manifest.targets.len(), 2);
        assert_eq!(manifest.targets[0].name, "petstore");
        assert_eq!(manifest.targets[0].variant, SpecVariant::Swagger2);
        assert_eq!(manifest.targets[0].mode, RepresentationMode::ImmutableRecord);
        // mode defaults to mutable when omitted
        assert_eq!(manifest.targets[1].mode, RepresentationMode::MutableRecord);
    }

    #[test]
    fn test_manifest_rejects_unknown_variant() {
        let yaml = r#"
version: 1
targets:
  - name: petstore
    location: ./petstore.json
    variant: raml
"#;
        assert!(TargetManifest::from_yaml(yaml).is_err());
    }
}
