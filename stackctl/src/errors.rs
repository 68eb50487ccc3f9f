//! Error types for stackctl

use thiserror::Error;

/// Main error type for the orchestrator
#[derive(Error, Debug)]
pub enum StackError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Usage error: {0}")]
    UsageError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Missing required key '{key}' in {file}")]
    MissingKey { key: String, file: String },

    #[error("Command `{command}` failed{}", describe_code(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
    },

    #[error("Storage service not ready after {attempts} attempts")]
    ReadinessTimeout { attempts: u32 },

    #[error("Internal error: {0}")]
    Internal(String),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {}", code),
        None => " (terminated by signal)".to_string(),
    }
}

impl StackError {
    /// Exit code this error should terminate the process with.
    ///
    /// External-tool failures reuse the child's own exit code so the
    /// orchestrator is transparent to scripts wrapping it.
    pub fn exit_code(&self) -> u8 {
        match self {
            StackError::CommandFailed { code: Some(code), .. } => {
                u8::try_from(*code).unwrap_or(1)
            }
            _ => 1,
        }
    }
}

impl From<anyhow::Error> for StackError {
    fn from(err: anyhow::Error) -> Self {
        StackError::Internal(err.to_string())
    }
}
