//! stackctl - Entry Point
//!
//! Environment orchestrator for the Duso container stack. Validates an
//! (environment, action) invocation, enforces production configuration
//! preconditions, then drives the container build and compose tooling.

use std::env;
use std::process::ExitCode;

use stackctl::cli::{self, Invocation};
use stackctl::config::context::StackContext;
use stackctl::config::layout::StackLayout;
use stackctl::errors::StackError;
use stackctl::logs::{init_logging, LogOptions};
use stackctl::stack::compose::DockerCompose;
use stackctl::stack::orchestrator::Orchestrator;
use stackctl::utils::version_info;

use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    // Print version and exit
    if args.iter().any(|arg| arg == "--version") {
        println!(
            "{}",
            serde_json::to_string_pretty(&version_info()).unwrap_or_default()
        );
        return ExitCode::SUCCESS;
    }

    // Validate arguments before anything else; no side effects on failure
    let invocation = match Invocation::parse(&args) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            println!("{}", cli::usage());
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(LogOptions::default()) {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(invocation).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("[ERROR] {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(invocation: Invocation) -> Result<(), StackError> {
    let context = StackContext::resolve(invocation.environment, StackLayout::default()).await?;
    let runtime = DockerCompose::detect(&context).await;

    Orchestrator::new(&context, &runtime)
        .execute(invocation.action)
        .await
}
