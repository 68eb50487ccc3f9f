//! Action dispatch

use tracing::{error, info};

use crate::cli::Action;
use crate::config::context::StackContext;
use crate::errors::StackError;
use crate::stack::provision::provision_storage;
use crate::stack::retry::RetryPolicy;
use crate::stack::runtime::ComposeRuntime;
use crate::stack::{BASE_IMAGE_TAG, PRIMARY_SERVICE};

/// Drives one validated invocation against the container tooling.
///
/// Ordering contract: for mutating actions the production key check runs
/// first, then the base image build, then the stack operation. Read-only
/// actions skip validation entirely.
pub struct Orchestrator<'a> {
    context: &'a StackContext,
    runtime: &'a dyn ComposeRuntime,
    retry: RetryPolicy,
}

impl<'a> Orchestrator<'a> {
    pub fn new(context: &'a StackContext, runtime: &'a dyn ComposeRuntime) -> Self {
        Self {
            context,
            runtime,
            retry: RetryPolicy::default(),
        }
    }

    /// Override the readiness retry policy (tests use short policies)
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Execute one action to completion
    pub async fn execute(&self, action: Action) -> Result<(), StackError> {
        info!(
            "Running action '{}' for environment '{}'",
            action, self.context.environment
        );

        match action {
            Action::Up => {
                self.check_mutation_preconditions().await?;
                self.build_base_image().await?;
                self.runtime.stack_up().await?;

                if self.context.environment.is_development() {
                    if let Err(e) = provision_storage(self.runtime, &self.retry).await {
                        if matches!(e, StackError::ReadinessTimeout { .. }) {
                            error!(
                                "{}. The stack is still running; run `stackctl dev down` before retrying.",
                                e
                            );
                        }
                        return Err(e);
                    }
                }

                Ok(())
            }
            Action::Build => {
                self.check_mutation_preconditions().await?;
                self.build_base_image().await?;
                self.runtime.stack_build().await
            }
            Action::Down => self.runtime.stack_down().await,
            Action::Logs => self.runtime.stream_logs().await,
            Action::Shell => self.runtime.open_shell(PRIMARY_SERVICE).await,
        }
    }

    /// Production configuration must be complete before anything mutates
    async fn check_mutation_preconditions(&self) -> Result<(), StackError> {
        if self.context.environment.is_production() {
            self.context.check_production_preconditions().await?;
        }
        Ok(())
    }

    async fn build_base_image(&self) -> Result<(), StackError> {
        self.runtime
            .build_image(&self.context.layout.base_image_context(), BASE_IMAGE_TAG)
            .await
    }
}
