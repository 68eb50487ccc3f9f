//! Project file layout

use std::path::PathBuf;

use crate::cli::Environment;
use crate::filesys::file::File;

/// File layout of a Duso project checkout.
///
/// All paths the orchestrator touches derive from the project root and the
/// selected environment; nothing else is consulted.
#[derive(Debug, Clone)]
pub struct StackLayout {
    /// Project root directory
    pub project_root: PathBuf,
}

impl StackLayout {
    /// Create a layout rooted at the given directory
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    /// Get the compose stack definition for an environment
    pub fn stack_file(&self, environment: Environment) -> File {
        let name = match environment {
            Environment::Development => "docker-compose.dev.yml",
            Environment::Production => "docker-compose.prod.yml",
        };
        File::new(self.project_root.join(name))
    }

    /// Get the environment configuration file
    pub fn env_file(&self, environment: Environment) -> File {
        let name = match environment {
            Environment::Development => "development.env",
            Environment::Production => "production.env",
        };
        File::new(self.project_root.join("env").join(name))
    }

    /// Get the checked-in seed template for the development configuration
    pub fn example_env_file(&self) -> File {
        File::new(self.project_root.join("env").join("example.env"))
    }

    /// Get the build context for the shared base image
    pub fn base_image_context(&self) -> PathBuf {
        self.project_root.join("docker").join("base")
    }
}

impl Default for StackLayout {
    fn default() -> Self {
        Self::new(".")
    }
}
