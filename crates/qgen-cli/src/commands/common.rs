//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use qgen_algo::{AuxData, GeneratorConfig};

/// Parse the `--data` argument: inline JSON, or `@path` to read it from a file.
pub fn parse_aux(data: Option<&str>) -> Result<AuxData> {
    let Some(data) = data else {
        return Ok(AuxData::default());
    };

    let json = match data.strip_prefix('@') {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read auxiliary data file: {path}"))?,
        None => data.to_string(),
    };

    Ok(AuxData::from_json(&json)?)
}

/// Load generator settings from a JSON file, or the defaults.
pub fn load_config(path: Option<&str>) -> Result<GeneratorConfig> {
    let Some(path) = path else {
        return Ok(GeneratorConfig::default());
    };

    if !Path::new(path).exists() {
        anyhow::bail!("Config file not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;
    let config: GeneratorConfig = serde_json::from_str(&source)
        .with_context(|| format!("Invalid generator config: {path}"))?;
    config.validate()?;
    Ok(config)
}

/// Write `content` to `output`, or to stdout when no path is given.
pub fn write_output(content: &str, output: Option<&str>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write file: {path}"))
        }
        None => {
            print!("{content}");
            if !content.ends_with('\n') {
                println!();
            }
            Ok(())
        }
    }
}
