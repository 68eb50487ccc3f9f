//! Environment configuration files (key=value lines)

use std::path::Path;

use tracing::info;

use crate::errors::StackError;
use crate::filesys::file::File;

/// Keys that must be present in the production configuration before any
/// stateful action runs.
pub const REQUIRED_PRODUCTION_KEYS: [&str; 4] =
    ["DB_USER", "DB_PASSWORD", "SECRET_KEY", "MYSQL_ROOT_PASSWORD"];

/// An environment configuration file
#[derive(Debug, Clone)]
pub struct EnvFile {
    file: File,
}

impl EnvFile {
    pub fn new(file: File) -> Self {
        Self { file }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub async fn exists(&self) -> bool {
        self.file.exists().await
    }

    /// Synthesize this file from the checked-in example template.
    ///
    /// The copy is byte for byte; the operator edits the result afterwards.
    pub async fn seed_from(&self, example: &File) -> Result<(), StackError> {
        if !example.exists().await {
            return Err(StackError::ConfigError(format!(
                "Example configuration not found: {}",
                example.path().display()
            )));
        }

        self.file.copy_from(example).await?;
        info!(
            "Created {} from {}",
            self.path().display(),
            example.path().display()
        );
        Ok(())
    }

    /// Verify a `KEY=` line exists for each required key.
    ///
    /// Checking stops at the first missing key so the operator sees exactly
    /// which one to fix; nothing stateful may run after a failure here.
    pub async fn check_required_keys(&self, keys: &[&str]) -> Result<(), StackError> {
        if !self.exists().await {
            return Err(StackError::ConfigError(format!(
                "Configuration file not found: {}",
                self.path().display()
            )));
        }

        let contents = self.file.read_string().await?;
        for key in keys {
            if !has_key(&contents, key) {
                return Err(StackError::MissingKey {
                    key: key.to_string(),
                    file: self.path().display().to_string(),
                });
            }
        }

        Ok(())
    }
}

fn has_key(contents: &str, key: &str) -> bool {
    contents
        .lines()
        .any(|line| line.strip_prefix(key).is_some_and(|rest| rest.starts_with('=')))
}
