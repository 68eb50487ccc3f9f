//! Docker Compose runtime

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::config::context::StackContext;
use crate::errors::StackError;
use crate::stack::runtime::ComposeRuntime;

/// How the compose tool is invoked on this host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComposeFlavor {
    /// Standalone `docker-compose` binary
    Standalone,
    /// `docker compose` plugin (newer installations)
    Plugin,
}

/// Real runtime driving `docker` and the compose tool
#[derive(Debug)]
pub struct DockerCompose {
    stack_file: String,
    env_file: String,
    flavor: ComposeFlavor,
}

impl DockerCompose {
    /// Build a runtime for the resolved context, probing which compose
    /// flavor is installed. Prefers the standalone binary, falls back to
    /// the `docker compose` plugin.
    pub async fn detect(context: &StackContext) -> Self {
        let flavor = if Command::new("docker-compose")
            .arg("version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .is_ok_and(|status| status.success())
        {
            ComposeFlavor::Standalone
        } else {
            debug!("docker-compose not found, using 'docker compose'");
            ComposeFlavor::Plugin
        };

        Self {
            stack_file: context.stack_file.display().to_string(),
            env_file: context.env_file.display().to_string(),
            flavor,
        }
    }

    /// Base compose invocation with the stack and env files applied
    fn compose_command(&self) -> (Command, String) {
        let mut cmd;
        let mut label;
        match self.flavor {
            ComposeFlavor::Standalone => {
                cmd = Command::new("docker-compose");
                label = String::from("docker-compose");
            }
            ComposeFlavor::Plugin => {
                cmd = Command::new("docker");
                cmd.arg("compose");
                label = String::from("docker compose");
            }
        }
        cmd.args(["-f", &self.stack_file, "--env-file", &self.env_file]);
        label.push_str(&format!(" -f {}", self.stack_file));
        (cmd, label)
    }

    /// Await a command, mapping a non-zero exit to `CommandFailed` so the
    /// child's status can propagate as the process exit code.
    async fn run_checked(mut cmd: Command, label: String) -> Result<(), StackError> {
        debug!("Running: {}", label);
        let status = cmd
            .status()
            .await
            .map_err(|e| StackError::Internal(format!("Failed to run `{}`: {}", label, e)))?;

        if !status.success() {
            return Err(StackError::CommandFailed {
                command: label,
                code: status.code(),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl ComposeRuntime for DockerCompose {
    async fn build_image(&self, context: &Path, tag: &str) -> Result<(), StackError> {
        info!("Building base image {} from {}", tag, context.display());
        let mut cmd = Command::new("docker");
        cmd.arg("build").args(["-t", tag]).arg(context);
        Self::run_checked(cmd, format!("docker build -t {}", tag)).await
    }

    async fn stack_up(&self) -> Result<(), StackError> {
        info!("Starting stack: {}", self.stack_file);
        let (mut cmd, mut label) = self.compose_command();
        cmd.args(["up", "-d"]);
        label.push_str(" up -d");
        Self::run_checked(cmd, label).await
    }

    async fn stack_down(&self) -> Result<(), StackError> {
        info!("Stopping stack: {}", self.stack_file);
        let (mut cmd, mut label) = self.compose_command();
        cmd.arg("down");
        label.push_str(" down");
        Self::run_checked(cmd, label).await
    }

    async fn stream_logs(&self) -> Result<(), StackError> {
        let (mut cmd, mut label) = self.compose_command();
        cmd.args(["logs", "-f"]);
        label.push_str(" logs -f");
        Self::run_checked(cmd, label).await
    }

    async fn stack_build(&self) -> Result<(), StackError> {
        info!("Building stack services: {}", self.stack_file);
        let (mut cmd, mut label) = self.compose_command();
        cmd.arg("build");
        label.push_str(" build");
        Self::run_checked(cmd, label).await
    }

    async fn exec_in_service(&self, service: &str, command: &[&str]) -> Result<(), StackError> {
        let (mut cmd, mut label) = self.compose_command();
        cmd.args(["exec", "-T", service]).args(command);
        label.push_str(&format!(" exec -T {} {}", service, command.join(" ")));
        Self::run_checked(cmd, label).await
    }

    async fn open_shell(&self, service: &str) -> Result<(), StackError> {
        info!("Opening shell in service: {}", service);
        let (mut cmd, mut label) = self.compose_command();
        cmd.args(["exec", service, "/bin/bash"]);
        label.push_str(&format!(" exec {} /bin/bash", service));
        Self::run_checked(cmd, label).await
    }

    async fn probe_health(&self, service: &str) -> bool {
        let (mut cmd, _) = self.compose_command();
        cmd.args(["exec", "-T", service, "awslocal", "s3", "ls"])
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        cmd.status()
            .await
            .is_ok_and(|status| status.success())
    }
}
