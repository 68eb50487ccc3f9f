//! Command-line argument parsing

use std::fmt;

use crate::errors::StackError;

/// Target environment for the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Short name as used on the command line and in log output
    pub fn short_name(&self) -> &'static str {
        match self {
            Environment::Development => "dev",
            Environment::Production => "prod",
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(format!(
                "Invalid environment: {}. Must be one of [dev, prod]",
                s
            )),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Orchestration action to run against the selected environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Bring the stack up, detached
    Up,

    /// Tear the stack down
    Down,

    /// Stream stack logs (follow mode)
    Logs,

    /// Build the stack service images
    Build,

    /// Open an interactive shell in the primary service
    Shell,
}

impl Action {
    /// Whether this action creates or mutates stack resources.
    ///
    /// Only mutating actions run the production configuration check and the
    /// base image build.
    pub fn mutates_stack(&self) -> bool {
        matches!(self, Action::Up | Action::Build)
    }
}

impl std::str::FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Action::Up),
            "down" => Ok(Action::Down),
            "logs" => Ok(Action::Logs),
            "build" => Ok(Action::Build),
            "shell" => Ok(Action::Shell),
            _ => Err(format!(
                "Invalid action: {}. Must be one of [up, down, logs, build, shell]",
                s
            )),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Logs => "logs",
            Action::Build => "build",
            Action::Shell => "shell",
        };
        f.write_str(name)
    }
}

/// A validated command-line invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation {
    pub environment: Environment,
    pub action: Action,
}

impl Invocation {
    /// Parse the positional arguments (binary name already stripped).
    ///
    /// Parsing performs no side effects; missing or unrecognized values
    /// come back as `UsageError` so the caller can print help and exit
    /// non-zero before anything touches the container runtime.
    pub fn parse(args: &[String]) -> Result<Self, StackError> {
        if args.len() < 2 {
            return Err(StackError::UsageError(
                "expected <environment> <action>".to_string(),
            ));
        }

        let environment = args[0]
            .parse::<Environment>()
            .map_err(StackError::UsageError)?;
        let action = args[1].parse::<Action>().map_err(StackError::UsageError)?;

        Ok(Self {
            environment,
            action,
        })
    }
}

/// Usage help, printed to stdout on invalid or missing arguments
pub fn usage() -> String {
    [
        "Usage: stackctl <environment> <action>",
        "",
        "  environment   dev | prod",
        "  action        up | down | logs | build | shell",
        "",
        "  up      build the base image and start the stack (detached)",
        "  down    stop the stack",
        "  logs    follow the stack logs",
        "  build   build the base image and the stack service images",
        "  shell   open an interactive shell in the api service",
    ]
    .join("\n")
}
