//! tsconfig resolution.
//!
//! Searches ancestor directories for `tsconfig.json`, falling back to a
//! minimal default. A missing file is a normal case; a malformed one is a
//! fatal parse error. That asymmetry is deliberate.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolved TypeScript configuration, threaded through traversal and
/// extraction instead of being looked up ambiently.
#[derive(Debug, Clone)]
pub struct TsConfig {
    value: Value,
}

impl TsConfig {
    /// Locate and parse `tsconfig.json`, searching upward from `start_dir`.
    ///
    /// Whatever the source, `compilerOptions.allowSyntheticDefaultImports`
    /// is forced on — the extractor needs it to resolve default imports.
    pub fn resolve(start_dir: &Path) -> Result<Self> {
        let value = match find_up("tsconfig.json", start_dir) {
            Some(path) => {
                let raw = fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("failed to parse {}", path.display()))?
            }
            None => {
                println!("tsconfig.json not found, using default configuration");
                json!({})
            }
        };
        Ok(Self::from_value(value))
    }

    fn from_value(mut value: Value) -> Self {
        if !value.is_object() {
            value = json!({});
        }
        let obj = value.as_object_mut().unwrap();
        let options = obj
            .entry("compilerOptions")
            .or_insert_with(|| json!({}));
        if !options.is_object() {
            *options = json!({});
        }
        options
            .as_object_mut()
            .unwrap()
            .insert("allowSyntheticDefaultImports".to_string(), json!(true));
        Self { value }
    }

    /// The `compilerOptions` object, serialized for the extractor command.
    pub fn compiler_options(&self) -> &Value {
        &self.value["compilerOptions"]
    }
}

/// Walk ancestor directories looking for a file named `name`.
fn find_up(name: &str, start_dir: &Path) -> Option<PathBuf> {
    let mut dir = Some(start_dir);
    while let Some(d) = dir {
        let candidate = d.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = d.parent();
    }
    None
}
