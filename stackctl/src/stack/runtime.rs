//! Container tooling interface

use std::path::Path;

use async_trait::async_trait;

use crate::errors::StackError;

/// Narrow seam over the container build and orchestration tools.
///
/// Every external process the orchestrator runs goes through this trait, so
/// the dispatch logic can be exercised in tests with a recording fake
/// instead of a live container runtime.
#[async_trait]
pub trait ComposeRuntime: Send + Sync {
    /// Build the shared base image from a build context
    async fn build_image(&self, context: &Path, tag: &str) -> Result<(), StackError>;

    /// Bring the stack up, detached
    async fn stack_up(&self) -> Result<(), StackError>;

    /// Tear the stack down
    async fn stack_down(&self) -> Result<(), StackError>;

    /// Stream stack logs in follow mode until interrupted
    async fn stream_logs(&self) -> Result<(), StackError>;

    /// Build the stack service images
    async fn stack_build(&self) -> Result<(), StackError>;

    /// Run a one-shot command inside a running service container
    async fn exec_in_service(&self, service: &str, command: &[&str]) -> Result<(), StackError>;

    /// Open an interactive shell inside a running service container
    async fn open_shell(&self, service: &str) -> Result<(), StackError>;

    /// Whether the service currently answers its health command.
    ///
    /// Any failure (service not up yet, command not found inside the
    /// container) reads as "not ready"; the bounded retry around this call
    /// decides when to give up.
    async fn probe_health(&self, service: &str) -> bool;
}
