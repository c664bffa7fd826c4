//! The top-level pipeline model.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use trellis_core::Subproject;
use trellis_core::cache::BuildCacheNode;

use crate::stage::Stage;

/// The single source of truth a pipeline definition is derived from.
///
/// Constructed once, never mutated; [`crate::graph::PipelineGraph::build`]
/// validates it and derives the object graph handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PipelineModel {
    /// Global prefix every generated identifier starts with.
    pub project_prefix: String,
    pub root_project_name: String,
    pub tag_builds: bool,
    pub publish_status_to_github: bool,
    pub master_and_release_branches: Vec<String>,
    pub parent_build_cache: BuildCacheNode,
    pub child_build_cache: BuildCacheNode,
    pub build_scan_tags: Vec<String>,
    /// How many worker jobs each performance coordinator fans out to.
    pub performance_test_partitions: u32,
    pub stages: Vec<Stage>,
    pub subprojects: Vec<Subproject>,
}
