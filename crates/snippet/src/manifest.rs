//! TOML snippet files.
//!
//! A snippet file names a set of snippets in attachment order:
//!
//! ```toml
//! name = "tint"
//!
//! [[snippets]]
//! hook = "fragment"
//! declarations = "uniform vec4 tint;"
//! post = "cogl_color_out *= tint;"
//! ```
//!
//! Types:
//!
//! - `SnippetFile` is the parsed document; each `[[snippets]]` table is one
//!   `Snippet`.
//! - `ManifestError` classifies missing files, parse failures, validation
//!   issues and I/O errors.
//!
//! Functions:
//!
//! - `SnippetFile::load` reads, parses and validates a file on disk.
//! - `SnippetFile::validate` returns human-readable issues without failing.
//! - `SnippetFile::into_list` attaches every entry to a fresh `SnippetList`.
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::list::SnippetList;
use crate::snippet::Snippet;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("snippet file not found at {0}")]
    Missing(PathBuf),

    #[error("failed to parse snippet file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("snippet file validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SnippetFile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub snippets: Vec<Snippet>,
}

impl SnippetFile {
    pub fn from_toml_str(input: &str) -> Result<Self, ManifestError> {
        let file: Self = toml::from_str(input)?;
        let issues = file.validate();
        if !issues.is_empty() {
            return Err(ManifestError::Validation(issues));
        }
        Ok(file)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ManifestError::Missing(path.to_path_buf()));
        }
        let raw = fs::read_to_string(path)?;
        let file = Self::from_toml_str(&raw)?;
        tracing::debug!(
            path = %path.display(),
            snippets = file.snippets.len(),
            "loaded snippet file"
        );
        Ok(file)
    }

    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.snippets.is_empty() {
            issues.push("snippet file must declare at least one snippet".to_string());
        }
        for (index, snippet) in self.snippets.iter().enumerate() {
            if snippet.is_empty() {
                issues.push(format!(
                    "snippet #{index} ({}) has no source sections",
                    snippet.hook()
                ));
            }
            for (section, text) in snippet.sections() {
                if matches!(text, Some(text) if text.trim().is_empty()) {
                    issues.push(format!(
                        "snippet #{index} ({}) has an empty '{section}' section",
                        snippet.hook()
                    ));
                }
            }
        }
        issues
    }

    pub fn into_list(self) -> SnippetList {
        self.snippets.into_iter().collect()
    }
}
