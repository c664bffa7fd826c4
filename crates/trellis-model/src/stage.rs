//! Stage declarations.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use trellis_core::{PerformanceTestKind, TestCoverage, Trigger};

use crate::specific::SpecificBuild;

/// Name, description, and identifier of a stage.
///
/// The identifier defaults to the title with spaces and dashes removed; a
/// few stages keep the identifier they were first registered under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StageLabel {
    pub title: String,
    pub description: String,
    pub id: String,
}

impl StageLabel {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        let title = title.into();
        let id = title.replace([' ', '-'], "");
        Self {
            title,
            description: description.into(),
            id,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// One declared phase of the pipeline.
///
/// Dependency behavior is driven entirely by the explicit fields, never by
/// position in the declared list: `follows` names the predecessor stage, and
/// the boolean flags control job-level wiring inside the stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Stage {
    pub label: StageLabel,
    pub specific_builds: Vec<SpecificBuild>,
    pub performance_tests: Vec<PerformanceTestKind>,
    pub functional_tests: Vec<TestCoverage>,
    pub trigger: Trigger,
    pub functional_tests_depend_on_specific_builds: bool,
    pub runs_independently: bool,
    pub omits_slow_projects: bool,
    pub depends_on_sanity_check: bool,
    /// Identifier of the predecessor stage, if any. Must stay unset on
    /// independent stages.
    pub follows: Option<String>,
}

impl Stage {
    pub fn new(label: StageLabel) -> Self {
        Self {
            label,
            specific_builds: Vec::new(),
            performance_tests: Vec::new(),
            functional_tests: Vec::new(),
            trigger: Trigger::Never,
            functional_tests_depend_on_specific_builds: false,
            runs_independently: false,
            omits_slow_projects: false,
            depends_on_sanity_check: false,
            follows: None,
        }
    }

    pub fn with_specific_builds(mut self, builds: Vec<SpecificBuild>) -> Self {
        self.specific_builds = builds;
        self
    }

    pub fn with_performance_tests(mut self, kinds: Vec<PerformanceTestKind>) -> Self {
        self.performance_tests = kinds;
        self
    }

    pub fn with_functional_tests(mut self, coverage: Vec<TestCoverage>) -> Self {
        self.functional_tests = coverage;
        self
    }

    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn follows(mut self, stage_id: impl Into<String>) -> Self {
        self.follows = Some(stage_id.into());
        self
    }

    pub fn functional_tests_depend_on_specific_builds(mut self) -> Self {
        self.functional_tests_depend_on_specific_builds = true;
        self
    }

    pub fn runs_independently(mut self) -> Self {
        self.runs_independently = true;
        self
    }

    pub fn omits_slow_projects(mut self) -> Self {
        self.omits_slow_projects = true;
        self
    }

    pub fn depends_on_sanity_check(mut self) -> Self {
        self.depends_on_sanity_check = true;
        self
    }
}
