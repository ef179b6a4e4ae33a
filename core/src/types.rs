//! DTOs exchanged with the daemon.
//!
//! Defined independently from the mock daemon; integration tests catch
//! schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// Deployment status reported by `GET /status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DaemonStatus {
    pub version: String,
    pub branch: String,
    pub commit_hash: String,
    pub commit_message: String,
    pub build_type: String,
    #[serde(default)]
    pub containers: Vec<String>,
    #[serde(default)]
    pub build_container_active: bool,
}
