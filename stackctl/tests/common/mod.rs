//! Shared test fixtures: a recording fake runtime and project scaffolding

// Not every test crate uses every fixture.
#![allow(dead_code)]

use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use stackctl::cli::Environment;
use stackctl::config::context::StackContext;
use stackctl::config::layout::StackLayout;
use stackctl::errors::StackError;
use stackctl::stack::runtime::ComposeRuntime;

/// A complete production configuration
pub const FULL_PROD_ENV: &str =
    "DB_USER=duso\nDB_PASSWORD=secret\nSECRET_KEY=abc123\nMYSQL_ROOT_PASSWORD=root\n";

/// Recording fake for the container tooling seam.
///
/// Every call is appended to `calls`; probe readiness is scripted through
/// `ready_after` (None = never ready).
pub struct FakeRuntime {
    calls: Mutex<Vec<String>>,
    probe_count: AtomicU32,
    ready_after: Option<u32>,
}

impl FakeRuntime {
    /// Storage answers on the first probe
    pub fn new() -> Self {
        Self::ready_after(1)
    }

    /// Storage answers on the nth probe
    pub fn ready_after(attempt: u32) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            probe_count: AtomicU32::new(0),
            ready_after: Some(attempt),
        }
    }

    /// Storage never answers
    pub fn never_ready() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            probe_count: AtomicU32::new(0),
            ready_after: None,
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls excluding health probes
    pub fn operations(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|call| !call.starts_with("probe_health"))
            .collect()
    }

    pub fn probe_count(&self) -> u32 {
        self.probe_count.load(Ordering::SeqCst)
    }

    fn record(&self, entry: String) -> Result<(), StackError> {
        self.calls.lock().unwrap().push(entry);
        Ok(())
    }
}

#[async_trait]
impl ComposeRuntime for FakeRuntime {
    async fn build_image(&self, _context: &Path, tag: &str) -> Result<(), StackError> {
        self.record(format!("build_image {}", tag))
    }

    async fn stack_up(&self) -> Result<(), StackError> {
        self.record("stack_up".to_string())
    }

    async fn stack_down(&self) -> Result<(), StackError> {
        self.record("stack_down".to_string())
    }

    async fn stream_logs(&self) -> Result<(), StackError> {
        self.record("stream_logs".to_string())
    }

    async fn stack_build(&self) -> Result<(), StackError> {
        self.record("stack_build".to_string())
    }

    async fn exec_in_service(&self, service: &str, command: &[&str]) -> Result<(), StackError> {
        self.record(format!("exec {} {}", service, command.join(" ")))
    }

    async fn open_shell(&self, service: &str) -> Result<(), StackError> {
        self.record(format!("open_shell {}", service))
    }

    async fn probe_health(&self, service: &str) -> bool {
        let attempt = self.probe_count.fetch_add(1, Ordering::SeqCst) + 1;
        self.calls
            .lock()
            .unwrap()
            .push(format!("probe_health {}", service));
        self.ready_after.is_some_and(|ready| attempt >= ready)
    }
}

/// Lay out a project checkout under `root` with both stack files, the
/// example template, and optionally an environment configuration file.
pub fn write_project(root: &Path, environment: Environment, env_contents: Option<&str>) {
    std::fs::write(root.join("docker-compose.dev.yml"), "services: {}\n").unwrap();
    std::fs::write(root.join("docker-compose.prod.yml"), "services: {}\n").unwrap();

    let env_dir = root.join("env");
    std::fs::create_dir_all(&env_dir).unwrap();
    std::fs::write(env_dir.join("example.env"), "DB_USER=duso\nDB_PASSWORD=\n").unwrap();

    if let Some(contents) = env_contents {
        let name = match environment {
            Environment::Development => "development.env",
            Environment::Production => "production.env",
        };
        std::fs::write(env_dir.join(name), contents).unwrap();
    }
}

/// Resolve a context against a scaffolded project
pub async fn resolve(root: &Path, environment: Environment) -> Result<StackContext, StackError> {
    StackContext::resolve(environment, StackLayout::new(root)).await
}
