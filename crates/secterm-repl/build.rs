//! Stamps `secterm --version` with the commit and the day it was built.

use std::process::Command;

fn main() {
    // No .git in a packaged source tree
    if std::path::Path::new("../../.git").exists() {
        println!("cargo::rerun-if-changed=../../.git/HEAD");
        println!("cargo::rerun-if-changed=../../.git/refs/heads/");
    }

    let commit = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let built_on = chrono::Utc::now().date_naive();

    println!("cargo:rustc-env=SECTERM_GIT_HASH={commit}");
    println!("cargo:rustc-env=SECTERM_BUILD_DATE={built_on}");
}
