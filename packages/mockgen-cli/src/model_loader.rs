//! Loads JSON package models from disk.

use anyhow::Context;
use gomockgen::Package;
use std::fs;
use std::path::Path;

/// Reads a JSON package model from `path`.
pub fn load_package(path: &Path) -> anyhow::Result<Package> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read model {}", path.display()))?;
    parse_package(&content).with_context(|| format!("invalid model {}", path.display()))
}

pub fn parse_package(content: &str) -> anyhow::Result<Package> {
    let pkg = Package::from_json(content)?;
    pkg.validate()?;
    Ok(pkg)
}
