//! Swagger Client Generator CLI
//!
//! Command-line interface for generating typed API clients and data models
//! from Swagger 2.0 and OpenAPI 3.x documents.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use std::path::{Path, PathBuf};
use swagger_client_generator_common::{
    Diagnostic, GenerationTarget, RepresentationMode, SpecVariant, TargetManifest,
};
use swagger_client_generator_generator::ClientGenerator;
use swagger_client_generator_parser::{detect_variant, lower_document, DefaultSource, DocumentSource};

#[derive(Parser)]
#[command(name = "swagger-client-generator")]
#[command(version, about = "Generate typed API clients and models from Swagger/OpenAPI documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and display the extracted schema/path summary
    #[command(after_help = "EXAMPLES:\n  \
        # Inspect a local Swagger 2.0 document\n  \
        swagger-client-generator parse --spec petstore.json --variant swagger2\n\n  \
        # Auto-detect the variant\n  \
        swagger-client-generator parse --spec https://petstore3.swagger.io/api/v3/openapi.json")]
    Parse {
        /// Document location: filesystem path or http(s) URL
        #[arg(short, long)]
        spec: String,

        /// Document variant (auto-detected if not specified)
        #[arg(long)]
        variant: Option<VariantArg>,
    },

    /// Generate a client module from a single document
    #[command(after_help = "EXAMPLES:\n  \
        # Generate mutable-record models\n  \
        swagger-client-generator generate \\\n    \
        --spec petstore.json \\\n    \
        --name petstore \\\n    \
        --output ./generated\n\n  \
        # Generate one umbrella model module instead\n  \
        swagger-client-generator generate \\\n    \
        --spec petstore.json \\\n    \
        --name petstore \\\n    \
        --mode immutable-record")]
    Generate {
        /// Document location: filesystem path or http(s) URL
        #[arg(short, long)]
        spec: String,

        /// Target name, used as the generated module directory name
        #[arg(short, long)]
        name: String,

        /// Document variant (auto-detected if not specified)
        #[arg(long)]
        variant: Option<VariantArg>,

        /// Model representation mode
        #[arg(long, value_enum, default_value_t = ModeArg::MutableRecord)]
        mode: ModeArg,

        /// Output directory
        #[arg(short, long, default_value = "./generated")]
        output: PathBuf,
    },

    /// Generate every target listed in a YAML manifest
    #[command(after_help = "EXAMPLES:\n  \
        swagger-client-generator generate-all \\\n    \
        --targets targets.yaml \\\n    \
        --output ./generated")]
    GenerateAll {
        /// Manifest file listing generation targets
        #[arg(short, long)]
        targets: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "./generated")]
        output: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantArg {
    /// Swagger 2.0
    Swagger2,
    /// OpenAPI 3.x
    Openapi3,
}

impl std::fmt::Display for VariantArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariantArg::Swagger2 => write!(f, "swagger2"),
            VariantArg::Openapi3 => write!(f, "openapi3"),
        }
    }
}

impl From<VariantArg> for SpecVariant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::Swagger2 => SpecVariant::Swagger2,
            VariantArg::Openapi3 => SpecVariant::Openapi3,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// One file per type, public mutable fields
    MutableRecord,
    /// One umbrella module, constructor-bound fields
    ImmutableRecord,
}

impl std::fmt::Display for ModeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModeArg::MutableRecord => write!(f, "mutable-record"),
            ModeArg::ImmutableRecord => write!(f, "immutable-record"),
        }
    }
}

impl From<ModeArg> for RepresentationMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::MutableRecord => RepresentationMode::MutableRecord,
            ModeArg::ImmutableRecord => RepresentationMode::ImmutableRecord,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { spec, variant } => {
            parse_command(&spec, variant.map(Into::into), cli.verbose)?;
        }
        Commands::Generate {
            spec,
            name,
            variant,
            mode,
            output,
        } => {
            generate_command(
                &spec,
                &name,
                variant.map(Into::into),
                mode.into(),
                output.as_path(),
                cli.verbose,
            )?;
        }
        Commands::GenerateAll { targets, output } => {
            generate_all_command(targets.as_path(), output.as_path(), cli.verbose)?;
        }
    }

    Ok(())
}

/// Fetch a document and resolve its variant, honoring an explicit choice
fn fetch_document(spec: &str, variant: Option<SpecVariant>) -> Result<(String, SpecVariant)> {
    let raw = DefaultSource
        .fetch(spec)
        .with_context(|| format!("Failed to fetch document: {}", spec))?;

    let resolved = variant.unwrap_or_else(|| {
        let detected = detect_variant(spec, &raw);
        println!(
            "{} Auto-detected variant: {}",
            "→".cyan(),
            format!("{:?}", detected).yellow()
        );
        detected
    });

    Ok((raw, resolved))
}

fn parse_command(spec: &str, variant: Option<SpecVariant>, verbose: bool) -> Result<()> {
    println!("{} Parsing document: {}", "→".cyan(), spec);

    let (raw, resolved_variant) = fetch_document(spec, variant)?;
    let document =
        lower_document(&raw, spec, resolved_variant).context("Failed to parse document")?;

    println!("\n{}", "✓ Parse successful!".green().bold());
    println!("\n{}", "Document:".bold());
    println!(
        "  Title: {}",
        document.title.as_deref().unwrap_or("(none)").yellow()
    );
    if let Some(base_url) = &document.base_url {
        println!("  Base URL: {}", base_url.yellow());
    }
    println!("  Schemas: {}", document.schemas.len());
    println!("  Paths: {}", document.paths.len());

    if verbose {
        println!("\n{}", "Schemas:".bold());
        for name in document.schemas.keys() {
            println!("  • {}", name.cyan());
        }
        println!("\n{}", "Paths:".bold());
        for path in &document.paths {
            let verbs: Vec<&str> = path
                .operations
                .iter()
                .map(|(method, _)| method.as_str())
                .collect();
            println!("  • {} ({})", path.template.cyan(), verbs.join(", "));
        }
    }

    Ok(())
}

fn generate_command(
    spec: &str,
    name: &str,
    variant: Option<SpecVariant>,
    mode: RepresentationMode,
    output: &Path,
    verbose: bool,
) -> Result<()> {
    println!("{} Generating client from: {}", "→".cyan(), spec);

    let (raw, resolved_variant) = fetch_document(spec, variant)?;

    let target = GenerationTarget {
        name: name.to_string(),
        location: spec.to_string(),
        variant: resolved_variant,
        mode,
    };

    if verbose {
        println!("  Target: {}", target.name);
        println!("  Variant: {:?}", target.variant);
        println!("  Mode: {:?}", target.mode);
        println!("  Output: {}", output.display());
    }

    generate_target(&target, &raw, output)?;

    println!("\n{}", "Next steps:".bold());
    println!(
        "  1. Review generated files in {}/{}",
        output.display(),
        name
    );
    println!("  2. Add the module to your crate and implement ApiTransport");

    Ok(())
}

fn generate_all_command(manifest_path: &Path, output: &Path, verbose: bool) -> Result<()> {
    let manifest = TargetManifest::load(manifest_path)
        .with_context(|| format!("Failed to load manifest: {}", manifest_path.display()))?;

    if manifest.targets.is_empty() {
        anyhow::bail!("Manifest lists no targets");
    }

    println!(
        "{} Generating {} targets from {}",
        "→".cyan(),
        manifest.targets.len(),
        manifest_path.display()
    );

    // Targets run sequentially, each with its own generator and registry, so
    // a failed target never corrupts the next one's pass.
    let mut generated = 0;
    let mut skipped = 0;
    for target in &manifest.targets {
        println!(
            "\n{} Target {}: {}",
            "→".cyan(),
            target.name.yellow(),
            target.location
        );

        if verbose {
            println!("  Variant: {:?}", target.variant);
            println!("  Mode: {:?}", target.mode);
        }

        let result: Result<()> = (|| {
            let raw = DefaultSource
                .fetch(&target.location)
                .with_context(|| format!("Failed to fetch document: {}", target.location))?;
            generate_target(target, &raw, output)
        })();

        match result {
            Ok(()) => generated += 1,
            Err(e) => {
                eprintln!("{} Skipping {}: {:#}", "⚠".yellow(), target.name, e);
                skipped += 1;
            }
        }
    }

    println!(
        "\n{} Generated {} target(s), skipped {}",
        "✓".green().bold(),
        generated,
        skipped
    );

    if skipped > 0 {
        anyhow::bail!("{} target(s) failed", skipped);
    }

    Ok(())
}

/// Run one generation pass and report the outcome
fn generate_target(target: &GenerationTarget, raw: &str, output: &Path) -> Result<()> {
    let document = lower_document(raw, &target.location, target.variant)
        .context("Failed to parse document")?;

    println!(
        "{} Parsed {} schemas, {} paths",
        "✓".green(),
        document.schemas.len(),
        document.paths.len()
    );

    let generator = ClientGenerator::new(target.clone(), document)
        .context("Failed to create generator")?;
    let report = generator
        .generate_to_directory(output)
        .context("Failed to generate client module")?;

    println!(
        "{} Generated {} models, {} synthesized types, {} client methods",
        "✓".green(),
        report.models,
        report.synthesized,
        report.methods
    );

    print_diagnostics(&report.diagnostics);

    Ok(())
}

/// Surface resolution diagnostics after the pass completes
fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        println!(
            "{} Unrecognized schema shape, fell back to String: {}",
            "⚠".yellow(),
            diagnostic
        );
    }
}
