//! Resolved orchestration context

use std::path::PathBuf;

use tracing::warn;

use crate::cli::Environment;
use crate::config::envfile::{EnvFile, REQUIRED_PRODUCTION_KEYS};
use crate::config::layout::StackLayout;
use crate::errors::StackError;

/// Everything an orchestration run needs, resolved once at startup.
///
/// Constructed before any container operation; resolution itself has a
/// single side effect, the one-time synthesis of the development
/// configuration from the example template.
#[derive(Debug, Clone)]
pub struct StackContext {
    pub environment: Environment,
    pub layout: StackLayout,

    /// Compose stack definition, verified to exist
    pub stack_file: PathBuf,

    /// Environment configuration file passed to the compose tool
    pub env_file: PathBuf,
}

impl StackContext {
    /// Resolve the context for an environment.
    ///
    /// Fails when the stack definition is missing, or when the production
    /// configuration file is absent. A missing development configuration is
    /// synthesized from `env/example.env` instead.
    pub async fn resolve(
        environment: Environment,
        layout: StackLayout,
    ) -> Result<Self, StackError> {
        let stack_file = layout.stack_file(environment);
        if !stack_file.exists().await {
            return Err(StackError::ConfigError(format!(
                "Stack definition not found: {}",
                stack_file.path().display()
            )));
        }

        let env_file = EnvFile::new(layout.env_file(environment));
        if !env_file.exists().await {
            match environment {
                Environment::Development => {
                    warn!(
                        "Configuration {} missing, seeding from example",
                        env_file.path().display()
                    );
                    env_file.seed_from(&layout.example_env_file()).await?;
                }
                Environment::Production => {
                    return Err(StackError::ConfigError(format!(
                        "Production configuration not found: {}. Create it before running stackctl.",
                        env_file.path().display()
                    )));
                }
            }
        }

        Ok(Self {
            environment,
            stack_file: stack_file.path().to_path_buf(),
            env_file: env_file.path().to_path_buf(),
            layout,
        })
    }

    /// Production precondition check, run before any mutating action.
    ///
    /// Re-verifies the configuration file exists and that every required
    /// key has a `KEY=` line, stopping at the first missing key.
    pub async fn check_production_preconditions(&self) -> Result<(), StackError> {
        let env_file = EnvFile::new(self.layout.env_file(self.environment));
        env_file
            .check_required_keys(&REQUIRED_PRODUCTION_KEYS)
            .await
    }
}
