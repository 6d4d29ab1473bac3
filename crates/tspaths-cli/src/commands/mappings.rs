use super::load_project;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::Path;
use tspaths_core::version::OUTPUT_SCHEMA_VERSION;
use tspaths_core::{Config, MappingSummary};

/// Mappings output for JSON.
#[derive(Serialize)]
struct MappingsOutput<'a> {
    schema_version: u32,
    config: String,
    platform: &'static str,
    base_url: Option<&'a str>,
    mappings: &'a [MappingSummary],
}

/// Run the mappings command.
pub fn run(config: &Config, project: Option<&Path>, json: bool) -> Result<()> {
    let tsconfig = load_project(config, project)?;
    let resolver = tsconfig
        .build_resolver(config.platform)
        .into_diagnostic()?;

    if json {
        let output = MappingsOutput {
            schema_version: OUTPUT_SCHEMA_VERSION,
            config: tsconfig.path.display().to_string(),
            platform: resolver.platform().as_str(),
            base_url: resolver.base_url(),
            mappings: resolver.mappings(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).into_diagnostic()?
        );
        return Ok(());
    }

    println!("config:   {}", tsconfig.path.display());
    println!("platform: {}", resolver.platform());
    println!("baseUrl:  {}", resolver.base_url().unwrap_or("(none)"));

    if resolver.mappings().is_empty() {
        println!("paths:    (none)");
        return Ok(());
    }

    println!("paths:");
    for mapping in resolver.mappings() {
        println!("  {}  ({})", mapping.key, mapping.pattern);
        for path in &mapping.paths {
            println!("    -> {path}");
        }
    }

    Ok(())
}
