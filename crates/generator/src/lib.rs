//! Schema resolution and client-binding generation
//!
//! This crate transforms a parsed `ApiDocument` into typed model
//! definitions, synthesized types, and client method descriptors, then
//! renders them to Rust source text through templates.
//!
//! One `ClientGenerator` per generation target. Each pass owns its
//! synthesized-type registry exclusively and discards it after the flush, so
//! passes never leak state into each other.

mod client;
mod emit;
mod model;
mod resolver;
mod templates;

pub use client::{ClientBindingBuilder, ParameterClassifier, ReturnTypeResolver};
pub use emit::rust_type;
pub use model::ModelBuilder;
pub use resolver::{SynthesizedRegistry, TypeResolver};

use std::fs;
use std::path::Path;

use swagger_client_generator_common::binding::{ClientMethod, ModelDefinition, SynthesizedType};
use swagger_client_generator_common::document::ApiDocument;
use swagger_client_generator_common::{
    naming, Diagnostic, GenerationTarget, GeneratorError, RepresentationMode, Result,
};
use tera::Tera;

/// Everything one pass resolved, before rendering
#[derive(Debug)]
pub struct ResolvedApi {
    pub models: Vec<ModelDefinition>,
    pub synthesized: Vec<SynthesizedType>,
    pub methods: Vec<ClientMethod>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Outcome of one generation pass
#[derive(Debug)]
pub struct GenerationReport {
    pub models: usize,
    pub synthesized: usize,
    pub methods: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Client generator
///
/// Transforms one target's document into a generated module directory:
/// - mod.rs (module index)
/// - transport.rs (transport contract)
/// - client.rs (typed client methods)
/// - models (one file per type, or one umbrella module)
/// - README.md
pub struct ClientGenerator {
    target: GenerationTarget,
    document: ApiDocument,
    tera: Tera,
}

impl ClientGenerator {
    /// Create a generator for one target
    pub fn new(target: GenerationTarget, document: ApiDocument) -> Result<Self> {
        let tera = templates::load_templates()?;
        Ok(Self {
            target,
            document,
            tera,
        })
    }

    /// Run the resolution passes: the schema table first, then the paths.
    ///
    /// References are late-bound by name (known as soon as the schema table
    /// is loaded), so the path pass never depends on model construction
    /// having resolved a schema's body first.
    pub fn resolve(&self) -> Result<ResolvedApi> {
        let mut resolver = TypeResolver::new();
        let models = ModelBuilder::build_models(&mut resolver, &self.document)?;
        let methods = ClientBindingBuilder::build_all(&mut resolver, &self.document)?;
        let (synthesized, diagnostics) = resolver.finish();
        Ok(ResolvedApi {
            models,
            synthesized,
            methods,
            diagnostics,
        })
    }

    /// Generate the target's module directory under `output_dir`
    pub fn generate_to_directory(&self, output_dir: &Path) -> Result<GenerationReport> {
        let resolved = self.resolve()?;

        let target_dir = output_dir.join(&self.target.name);
        fs::create_dir_all(&target_dir).map_err(|e| {
            GeneratorError::Generation(format!("Failed to create output directory: {}", e))
        })?;

        // models first, then synthesized types, in registration order
        let mut units: Vec<emit::TypeUnitView> =
            resolved.models.iter().map(emit::model_unit).collect();
        units.extend(resolved.synthesized.iter().map(emit::synthesized_unit));

        let methods: Vec<emit::MethodView> =
            resolved.methods.iter().map(emit::method_view).collect();

        let client_name = format!(
            "{}ApiClient",
            naming::capitalize(&naming::strip_invalid(&self.target.name))
        );

        let mut context = tera::Context::new();
        context.insert("target_name", &self.target.name);
        context.insert("location", &self.target.location);
        context.insert(
            "title",
            &self
                .document
                .title
                .clone()
                .unwrap_or_else(|| self.target.name.clone()),
        );
        context.insert("base_url", &self.document.base_url);
        context.insert("client_name", &client_name);
        context.insert("units", &units);
        context.insert("methods", &methods);

        self.render_to(&target_dir, "mod.rs", "mod.rs", &context)?;
        self.render_to(&target_dir, "transport.rs", "transport.rs", &context)?;
        self.render_to(&target_dir, "client.rs", "client.rs", &context)?;
        self.render_to(&target_dir, "README.md", "README.md", &context)?;

        match self.target.mode {
            // every type is an independent top-level unit
            RepresentationMode::MutableRecord => {
                let models_dir = target_dir.join("models");
                fs::create_dir_all(&models_dir).map_err(|e| {
                    GeneratorError::Generation(format!("Failed to create models directory: {}", e))
                })?;
                self.render_to(&models_dir, "models_mod.rs", "mod.rs", &context)?;
                for unit in &units {
                    let mut unit_context = context.clone();
                    unit_context.insert("unit", unit);
                    self.render_to(
                        &models_dir,
                        "model_unit.rs",
                        &format!("{}.rs", unit.file_name),
                        &unit_context,
                    )?;
                }
            }
            // the whole model surface nests under one umbrella module
            RepresentationMode::ImmutableRecord => {
                self.render_to(&target_dir, "models_umbrella.rs", "models.rs", &context)?;
            }
        }

        Ok(GenerationReport {
            models: resolved.models.len(),
            synthesized: resolved.synthesized.len(),
            methods: resolved.methods.len(),
            diagnostics: resolved.diagnostics,
        })
    }

    fn render_to(
        &self,
        dir: &Path,
        template: &str,
        file_name: &str,
        context: &tera::Context,
    ) -> Result<()> {
        let rendered = self.tera.render(template, context).map_err(|e| {
            GeneratorError::Generation(format!("Template error in {}: {}", template, e))
        })?;

        let output_path = dir.join(file_name);
        fs::write(&output_path, rendered).map_err(|e| {
            GeneratorError::Generation(format!(
                "Failed to write {}: {}",
                output_path.display(),
                e
            ))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use swagger_client_generator_common::SpecVariant;

    #[test]
    fn test_generator_creation() {
        let target = GenerationTarget {
            name: "petstore".to_string(),
            location: "./petstore.json".to_string(),
            variant: SpecVariant::Swagger2,
            mode: RepresentationMode::MutableRecord,
        };
        let document = ApiDocument {
            title: None,
            base_url: None,
            schemas: IndexMap::new(),
            paths: vec![],
        };

        let result = ClientGenerator::new(target, document);
        assert!(result.is_ok());
    }
}
