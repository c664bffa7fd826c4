//! The specific-build registry.
//!
//! A closed set of named singleton jobs attached to stages independently of
//! subproject bucketing. Each case maps to exactly one construction recipe;
//! extending the set means adding a case here, not registering anything at
//! runtime.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use trellis_core::JvmCategory;

use crate::job::{Job, JobKind};
use crate::pipeline::PipelineModel;
use crate::stage::Stage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SpecificBuild {
    CompileAll,
    SanityCheck,
    BuildDistributions,
    Gradleception,
    SmokeTestsMinJavaVersion,
    SmokeTestsMaxJavaVersion,
    DependenciesCheck,
}

impl SpecificBuild {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SpecificBuild::CompileAll => "CompileAll",
            SpecificBuild::SanityCheck => "SanityCheck",
            SpecificBuild::BuildDistributions => "BuildDistributions",
            SpecificBuild::Gradleception => "Gradleception",
            SpecificBuild::SmokeTestsMinJavaVersion => "SmokeTestsMinJavaVersion",
            SpecificBuild::SmokeTestsMaxJavaVersion => "SmokeTestsMaxJavaVersion",
            SpecificBuild::DependenciesCheck => "DependenciesCheck",
        }
    }

    pub fn configuration_id(&self, model: &PipelineModel) -> String {
        format!("{}{}", model.project_prefix, self.as_str())
    }

    /// Construct the singleton job for this build in the given stage.
    pub fn create(&self, model: &PipelineModel, stage: &Stage) -> Job {
        let (name, description, timeout_minutes) = match self {
            SpecificBuild::CompileAll => (
                "Compile All".to_string(),
                "Compiles all production and test code and warms up the build cache".to_string(),
                30,
            ),
            SpecificBuild::SanityCheck => (
                "Sanity Check".to_string(),
                "Static code analysis, code quality checks, release notes verification".to_string(),
                30,
            ),
            SpecificBuild::BuildDistributions => (
                "Build Distributions".to_string(),
                "Creation and verification of the distribution and documentation".to_string(),
                180,
            ),
            SpecificBuild::Gradleception => (
                "Gradleception".to_string(),
                "Builds the tool with the version currently under development".to_string(),
                180,
            ),
            SpecificBuild::SmokeTestsMinJavaVersion => {
                smoke_test_recipe(JvmCategory::Min)
            }
            SpecificBuild::SmokeTestsMaxJavaVersion => {
                smoke_test_recipe(JvmCategory::Max)
            }
            SpecificBuild::DependenciesCheck => (
                "Dependencies Check".to_string(),
                "Checks declared external dependencies for known published vulnerabilities"
                    .to_string(),
                30,
            ),
        };

        let id = self.configuration_id(model);
        // Every job in a stage gated on the sanity check depends on it, no
        // matter which stage declares it; the id is prefix-global.
        let depends_on = if stage.depends_on_sanity_check && *self != SpecificBuild::SanityCheck {
            vec![SpecificBuild::SanityCheck.configuration_id(model)]
        } else {
            Vec::new()
        };

        Job {
            uuid: id.clone(),
            id,
            name,
            description,
            kind: JobKind::SpecificBuild { build: *self },
            depends_on,
            timeout_minutes,
            extra_flags: Vec::new(),
        }
    }
}

fn smoke_test_recipe(jvm: JvmCategory) -> (String, String, u32) {
    let bound = match jvm {
        JvmCategory::Min => "minimum",
        _ => "maximum",
    };
    (
        format!("Smoke Tests ({})", jvm.version().capitalized()),
        format!("Smoke tests against the {bound} supported JVM"),
        60,
    )
}
