//! Content listing and deletion configuration.

use serde::{Deserialize, Serialize};

/// Behaviour of the content element endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Page size used when a list request carries no `limit`.
    #[serde(default = "default_limit")]
    pub default_limit: u64,
    /// Test mode: deletes remove rows instead of marking them deleted.
    #[serde(default)]
    pub test_mode: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            test_mode: false,
        }
    }
}

fn default_limit() -> u64 {
    5
}
