//! Storage readiness wait and bucket provisioning

use tracing::{debug, info};

use crate::errors::StackError;
use crate::stack::retry::RetryPolicy;
use crate::stack::runtime::ComposeRuntime;
use crate::stack::{STORAGE_SERVICE, UPLOAD_BUCKET};

/// Wait for the storage emulator to answer, then provision the upload
/// bucket and open its access policy.
///
/// Runs once per development `up`. On readiness timeout no provisioning
/// happens and the already-started stack is left as-is.
pub async fn provision_storage(
    runtime: &dyn ComposeRuntime,
    policy: &RetryPolicy,
) -> Result<(), StackError> {
    info!(
        "Waiting for {} to accept storage commands (up to {} attempts)...",
        STORAGE_SERVICE, policy.max_attempts
    );

    let attempts = policy
        .wait_until(|| runtime.probe_health(STORAGE_SERVICE))
        .await?;
    debug!("{} ready after {} attempts", STORAGE_SERVICE, attempts);

    let bucket_uri = format!("s3://{}", UPLOAD_BUCKET);
    runtime
        .exec_in_service(STORAGE_SERVICE, &["awslocal", "s3", "mb", bucket_uri.as_str()])
        .await?;
    runtime
        .exec_in_service(
            STORAGE_SERVICE,
            &[
                "awslocal",
                "s3api",
                "put-bucket-acl",
                "--bucket",
                UPLOAD_BUCKET,
                "--acl",
                "public-read",
            ],
        )
        .await?;

    info!("Bucket {} created and set to public-read", UPLOAD_BUCKET);
    Ok(())
}
