//! Build script for stackctl
//! Captures build-time metadata for version info

use chrono::Utc;
use std::process::Command;

fn git_hash() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    println!("cargo:rustc-env=GIT_HASH={}", git_hash());
    println!(
        "cargo:rustc-env=BUILD_TIME={}",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );

    // Rerun if git HEAD changes
    println!("cargo:rerun-if-changed=.git/HEAD");
}
