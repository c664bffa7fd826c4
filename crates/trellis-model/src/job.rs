//! Concrete jobs in the assembled graph.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use trellis_core::PerformanceTestKind;

use crate::specific::SpecificBuild;

/// One concrete job the external renderer materializes.
///
/// This is the whole per-job surface the renderer needs: generated
/// identifier, display name, dependency identifiers, timeout, and any extra
/// runtime flags inherited from the job's axis values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Job {
    pub id: String,
    /// Stable identity used across regenerations. Equal to `id` unless the
    /// axis carries a legacy identity.
    pub uuid: String,
    pub name: String,
    pub description: String,
    pub kind: JobKind,
    pub depends_on: Vec<String>,
    pub timeout_minutes: u32,
    pub extra_flags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JobKind {
    SpecificBuild {
        build: SpecificBuild,
    },
    FunctionalTest {
        coverage_id: u32,
        subprojects: Vec<String>,
    },
    PerformanceCoordinator {
        kind: PerformanceTestKind,
    },
    PerformanceWorker {
        kind: PerformanceTestKind,
        partition: u32,
    },
}

impl Job {
    pub fn is_functional_test(&self) -> bool {
        matches!(self.kind, JobKind::FunctionalTest { .. })
    }
}
