//! Stack orchestration

pub mod compose;
pub mod orchestrator;
pub mod provision;
pub mod retry;
pub mod runtime;

/// Service that runs the user-management API; target of the `shell` action
pub const PRIMARY_SERVICE: &str = "api";

/// Object-storage emulator service, present in development only
pub const STORAGE_SERVICE: &str = "localstack";

/// Bucket provisioned on the storage emulator once it is ready
pub const UPLOAD_BUCKET: &str = "duso-uploads";

/// Tag of the shared base image all service images build on
pub const BASE_IMAGE_TAG: &str = "duso-base:latest";
