//! File-based Decision Model Source
//!
//! Reads a decision model from disk. `.yaml` / `.yml` files are parsed as
//! YAML, everything else as JSON.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::ahp::DecisionModel;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::DecisionModelSource;

/// On-disk encoding of a model file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    Yaml,
    Json,
}

impl ModelFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => ModelFormat::Yaml,
            _ => ModelFormat::Json,
        }
    }

    /// Parses model text in this format.
    pub fn parse(self, content: &str) -> Result<DecisionModel, DomainError> {
        let parsed = match self {
            ModelFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            ModelFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|reason| {
            DomainError::new(
                ErrorCode::ModelUnreadable,
                format!("Decision model could not be parsed: {}", reason),
            )
        })
    }
}

/// Loads the decision model from a file
#[derive(Debug, Clone)]
pub struct FileModelSource {
    path: PathBuf,
}

impl FileModelSource {
    /// Create a source reading from `path`
    ///
    /// # Example
    /// ```ignore
    /// let source = FileModelSource::new("./data/crew_scheduling.yaml");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DecisionModelSource for FileModelSource {
    async fn load(&self) -> Result<DecisionModel, DomainError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            let code = if e.kind() == ErrorKind::NotFound {
                ErrorCode::ModelNotFound
            } else {
                ErrorCode::ModelUnreadable
            };
            DomainError::new(code, format!("Cannot read {}: {}", self.path.display(), e))
                .with_detail("path", self.path.display().to_string())
        })?;

        ModelFormat::from_path(&self.path)
            .parse(&content)
            .map_err(|e| e.with_detail("path", self.path.display().to_string()))
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
