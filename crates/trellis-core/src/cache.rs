//! Build-cache configuration carried by the pipeline model.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A remote build-cache node generated jobs point their builds at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BuildCacheNode {
    pub url: String,
    pub push: bool,
}

impl BuildCacheNode {
    /// The shared remote node the built-in definition uses for both the
    /// parent and child caches.
    pub fn builtin_remote() -> Self {
        Self {
            url: "https://eu-build-cache.gradle.org/cache/".to_string(),
            push: true,
        }
    }
}
