//! Write JSON schemas for the public schema types into `schemas/`

use anyhow::{Context, Result};
use schemars::{schema_for, Schema};
use std::fs;
use std::path::{Path, PathBuf};

fn workspace_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask must live one level below the workspace root")
}

fn write_schema(dir: &Path, name: &str, schema: &Schema) -> Result<()> {
    let path = dir.join(format!("{name}.schema.json"));
    let json = serde_json::to_string_pretty(schema)?;
    fs::write(&path, json + "\n").with_context(|| format!("writing {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

pub fn run() -> Result<()> {
    let out_dir = workspace_root()?.join("schemas");
    fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let schemas = [
        ("probe-request", schema_for!(schema::ProbeRequest)),
        ("probe-report", schema_for!(schema::ProbeReport)),
        ("agent-options", schema_for!(schema::AgentOptions)),
        ("rest-agent-options", schema_for!(schema::RestAgentOptions)),
        ("probe-defaults", schema_for!(schema::ProbeDefaults)),
        ("endpoint", schema_for!(schema::Endpoint)),
        ("agent-section", schema_for!(schema::AgentSection)),
    ];

    for (name, schema) in &schemas {
        write_schema(&out_dir, name, schema)?;
    }
    Ok(())
}
