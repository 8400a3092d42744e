//! # Container Environment Helpers

use super::DEFAULT_POSTGRES_TAG;
use std::env;
use std::process::{Command, Stdio};

/// Environment variable that overrides the PostgreSQL image tag
pub const POSTGRES_TAG_ENV: &str = "CUSTOMER_TEST_POSTGRES_TAG";

/// PostgreSQL image tag, taken from `CUSTOMER_TEST_POSTGRES_TAG` when set
pub fn postgres_tag_from_env() -> String {
    resolve_tag(env::var(POSTGRES_TAG_ENV).ok())
}

fn resolve_tag(value: Option<String>) -> String {
    value
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .unwrap_or_else(|| DEFAULT_POSTGRES_TAG.to_string())
}

/// Whether a Docker daemon answers `docker info`
pub fn docker_available() -> bool {
    Command::new("docker")
        .arg("info")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}
