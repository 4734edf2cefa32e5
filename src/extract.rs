//! Doc extraction seam.
//!
//! The type-aware parsing itself lives in an external docgen command; this
//! module only defines the boundary and the process-spawning implementation.
//! Tests substitute their own `DocExtractor`.

use crate::config::TsConfig;
use crate::model::ComponentDoc;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Extracts component documentation for a single source file.
pub trait DocExtractor {
    fn extract(&self, config: &TsConfig, file: &Path) -> Result<Vec<ComponentDoc>>;
}

/// Production extractor: runs the external docgen command with the resolved
/// compiler options and reads a JSON array of component docs from stdout.
pub struct DocgenCommand {
    program: String,
}

impl DocgenCommand {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }
}

impl DocExtractor for DocgenCommand {
    fn extract(&self, config: &TsConfig, file: &Path) -> Result<Vec<ComponentDoc>> {
        let options = serde_json::to_string(config.compiler_options())?;
        let output = Command::new(&self.program)
            .arg("--config")
            .arg(&options)
            .arg(file)
            .output()
            .with_context(|| format!("failed to run {}", self.program))?;

        if !output.status.success() {
            anyhow::bail!(
                "{} failed on {}: {}",
                self.program,
                file.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        serde_json::from_slice(&output.stdout)
            .with_context(|| format!("invalid docgen output for {}", file.display()))
    }
}
