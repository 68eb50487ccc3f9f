//! Readiness-wait properties under a paused clock

mod common;

use std::time::Duration;

use common::FakeRuntime;
use stackctl::errors::StackError;
use stackctl::stack::provision::provision_storage;
use stackctl::stack::retry::RetryPolicy;

#[tokio::test(start_paused = true)]
async fn provisions_once_after_sixth_attempt() {
    let runtime = FakeRuntime::ready_after(6);

    provision_storage(&runtime, &RetryPolicy::default())
        .await
        .unwrap();

    assert_eq!(runtime.probe_count(), 6, "no polling after first success");

    let provisioning: Vec<String> = runtime
        .calls()
        .into_iter()
        .filter(|call| call.starts_with("exec"))
        .collect();
    assert_eq!(
        provisioning,
        vec![
            "exec localstack awslocal s3 mb s3://duso-uploads",
            "exec localstack awslocal s3api put-bucket-acl --bucket duso-uploads --acl public-read",
        ]
    );

    // Provisioning happens after the last probe
    let calls = runtime.calls();
    let last_probe = calls
        .iter()
        .rposition(|call| call.starts_with("probe_health"))
        .unwrap();
    let first_exec = calls
        .iter()
        .position(|call| call.starts_with("exec"))
        .unwrap();
    assert!(first_exec > last_probe);
}

#[tokio::test(start_paused = true)]
async fn exhausted_probe_makes_zero_provisioning_calls() {
    let runtime = FakeRuntime::never_ready();

    let start = tokio::time::Instant::now();
    let err = provision_storage(&runtime, &RetryPolicy::default())
        .await
        .unwrap_err();

    assert!(matches!(err, StackError::ReadinessTimeout { attempts: 30 }));
    assert_eq!(runtime.probe_count(), 30);
    assert!(runtime.calls().iter().all(|call| !call.starts_with("exec")));

    // 30 attempts separated by 29 two-second delays
    assert_eq!(start.elapsed(), Duration::from_secs(58));
}
