use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use dream_world_graph::{LayoutConfig, TaggedRecord};
use serde_json::Value;

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read records from stdin")?;
        Ok(raw)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

/// Accepts either a bare array of records or an object with a `records`
/// (or `dreams`) array.
fn parse_records(raw: &str) -> Result<Vec<TaggedRecord>> {
    let parsed: Value = serde_json::from_str(raw).context("invalid JSON in records input")?;
    let list = match parsed {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut object) => object
            .remove("records")
            .or_else(|| object.remove("dreams"))
            .ok_or_else(|| anyhow!("records object has no `records` array"))?,
        _ => return Err(anyhow!("unexpected JSON type for records input")),
    };

    serde_json::from_value(list).context("invalid record in records input")
}

pub fn load_records(path: &Path) -> Result<Vec<TaggedRecord>> {
    let raw = read_input(path)?;
    parse_records(&raw).with_context(|| format!("failed to parse records from {}", path.display()))
}

pub fn load_config(path: Option<&Path>) -> Result<LayoutConfig> {
    let Some(path) = path else {
        return Ok(LayoutConfig::default());
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid layout config in {}", path.display()))
}
