//! Enumerated axes of the pipeline model.
//!
//! Closed sets of test categories, operating systems, JVM variants,
//! performance-test kinds, and trigger policies. Each value carries fixed
//! behavioral metadata (timeouts, which test classes apply, default
//! baselines, extra flags) and never changes after process start.

use crate::ident::capitalize;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which test classes a coverage entry exercises, and under what timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TestCategory {
    /// Cross version tests select a very small set of versions, including
    /// the current one.
    Quick,
    /// Cross version tests select a very small set of versions, including
    /// the current one.
    Platform,
    /// Cross version tests select a small set of versions.
    QuickFeedbackCrossVersion,
    /// Cross version tests select all versions.
    AllVersionsCrossVersion,
    /// Multi-version integration tests run against all covered versions.
    AllVersionsIntegMultiVersion,
    Parallel,
    NoDaemon,
    Instant,
    Soak,
    ForceRealizeDependencyManagement,
}

impl TestCategory {
    pub const fn unit_tests(&self) -> bool {
        matches!(self, TestCategory::Quick | TestCategory::Platform)
    }

    pub const fn functional_tests(&self) -> bool {
        !matches!(
            self,
            TestCategory::QuickFeedbackCrossVersion
                | TestCategory::AllVersionsCrossVersion
                | TestCategory::Soak
        )
    }

    pub const fn cross_version_tests(&self) -> bool {
        matches!(
            self,
            TestCategory::Quick
                | TestCategory::Platform
                | TestCategory::QuickFeedbackCrossVersion
                | TestCategory::AllVersionsCrossVersion
        )
    }

    pub const fn timeout_minutes(&self) -> u32 {
        match self {
            TestCategory::Quick => 60,
            TestCategory::AllVersionsCrossVersion | TestCategory::NoDaemon => 240,
            _ => 180,
        }
    }

    /// The lowerCamel axis name used in generated identifiers.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TestCategory::Quick => "quick",
            TestCategory::Platform => "platform",
            TestCategory::QuickFeedbackCrossVersion => "quickFeedbackCrossVersion",
            TestCategory::AllVersionsCrossVersion => "allVersionsCrossVersion",
            TestCategory::AllVersionsIntegMultiVersion => "allVersionsIntegMultiVersion",
            TestCategory::Parallel => "parallel",
            TestCategory::NoDaemon => "noDaemon",
            TestCategory::Instant => "instant",
            TestCategory::Soak => "soak",
            TestCategory::ForceRealizeDependencyManagement => "forceRealizeDependencyManagement",
        }
    }

    pub fn capitalized(&self) -> String {
        capitalize(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Os {
    Linux,
    Windows,
    Macos,
}

impl Os {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Os::Linux => "linux",
            Os::Windows => "windows",
            Os::Macos => "macos",
        }
    }

    pub fn capitalized(&self) -> String {
        capitalize(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum JvmVersion {
    Java8,
    Java11,
    Java14,
}

impl JvmVersion {
    pub const fn as_str(&self) -> &'static str {
        match self {
            JvmVersion::Java8 => "java8",
            JvmVersion::Java11 => "java11",
            JvmVersion::Java14 => "java14",
        }
    }

    pub fn capitalized(&self) -> String {
        capitalize(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum JvmVendor {
    Oracle,
    OpenJdk,
}

impl JvmVendor {
    pub const fn as_str(&self) -> &'static str {
        match self {
            JvmVendor::Oracle => "oracle",
            JvmVendor::OpenJdk => "openjdk",
        }
    }

    pub fn capitalized(&self) -> String {
        capitalize(self.as_str())
    }
}

/// Named (version, vendor) pairs the stage definitions reference instead of
/// spelling out raw combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum JvmCategory {
    Min,
    Max,
    Experimental,
}

impl JvmCategory {
    pub const fn version(&self) -> JvmVersion {
        match self {
            JvmCategory::Min => JvmVersion::Java8,
            JvmCategory::Max => JvmVersion::Java11,
            JvmCategory::Experimental => JvmVersion::Java14,
        }
    }

    pub const fn vendor(&self) -> JvmVendor {
        match self {
            JvmCategory::Min => JvmVendor::Oracle,
            JvmCategory::Max => JvmVendor::OpenJdk,
            JvmCategory::Experimental => JvmVendor::OpenJdk,
        }
    }
}

/// Kinds of performance-test runs a stage can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTestKind {
    Test,
    Slow,
    Experiment,
    FlakinessDetection,
    Historical,
}

impl PerformanceTestKind {
    /// The build-tool task the workers invoke.
    pub const fn task_id(&self) -> &'static str {
        match self {
            PerformanceTestKind::Test => "PerformanceTest",
            PerformanceTestKind::Slow => "SlowPerformanceTest",
            PerformanceTestKind::Experiment => "PerformanceExperiment",
            PerformanceTestKind::FlakinessDetection => "FlakinessDetection",
            PerformanceTestKind::Historical => "HistoricalPerformanceTest",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            PerformanceTestKind::Test => "Performance Regression Test",
            PerformanceTestKind::Slow => "Slow Performance Regression Test",
            PerformanceTestKind::Experiment => "Performance Experiment",
            PerformanceTestKind::FlakinessDetection => "Performance Test Flakiness Detection",
            PerformanceTestKind::Historical => "Historical Performance Test",
        }
    }

    pub const fn timeout_minutes(&self) -> u32 {
        match self {
            PerformanceTestKind::FlakinessDetection => 600,
            PerformanceTestKind::Historical => 2280,
            _ => 420,
        }
    }

    /// Baseline versions results are compared against.
    pub const fn default_baselines(&self) -> &'static str {
        match self {
            PerformanceTestKind::FlakinessDetection => "flakiness-detection-commit",
            PerformanceTestKind::Historical => "3.5.1,4.10.3,5.6.4,last",
            _ => "defaults",
        }
    }

    pub const fn extra_parameters(&self) -> &'static str {
        match self {
            PerformanceTestKind::Historical => "--checks none",
            _ => "",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            PerformanceTestKind::Test => "test",
            PerformanceTestKind::Slow => "slow",
            PerformanceTestKind::Experiment => "experiment",
            PerformanceTestKind::FlakinessDetection => "flakinessDetection",
            PerformanceTestKind::Historical => "historical",
        }
    }

    pub fn coordinator_id(&self, project_prefix: &str) -> String {
        format!(
            "{}Performance{}Coordinator",
            project_prefix,
            capitalize(self.as_str())
        )
    }

    /// Stable identity for the coordinator. A couple of kinds kept the id
    /// they were first registered under, so regenerating the pipeline does
    /// not orphan their history.
    pub fn coordinator_uuid(&self, project_prefix: &str) -> String {
        match self {
            PerformanceTestKind::Slow => format!("{project_prefix}PerformanceExperimentCoordinator"),
            PerformanceTestKind::Experiment => {
                format!("{project_prefix}PerformanceExperimentOnlyCoordinator")
            }
            _ => self.coordinator_id(project_prefix),
        }
    }
}

/// Scheduling policy for automatically starting a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    Never,
    EachCommit,
    Daily,
    Weekly,
}

impl Trigger {
    pub const fn is_scheduled(&self) -> bool {
        matches!(self, Trigger::Daily | Trigger::Weekly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_class_flags() {
        assert!(TestCategory::Quick.unit_tests());
        assert!(TestCategory::Quick.functional_tests());
        assert!(TestCategory::Quick.cross_version_tests());

        assert!(!TestCategory::QuickFeedbackCrossVersion.unit_tests());
        assert!(!TestCategory::QuickFeedbackCrossVersion.functional_tests());
        assert!(TestCategory::QuickFeedbackCrossVersion.cross_version_tests());

        assert!(!TestCategory::Soak.unit_tests());
        assert!(!TestCategory::Soak.functional_tests());
        assert!(!TestCategory::Soak.cross_version_tests());

        assert!(TestCategory::AllVersionsIntegMultiVersion.functional_tests());
        assert!(!TestCategory::AllVersionsIntegMultiVersion.cross_version_tests());
    }

    #[test]
    fn test_category_timeouts() {
        assert_eq!(TestCategory::Quick.timeout_minutes(), 60);
        assert_eq!(TestCategory::Platform.timeout_minutes(), 180);
        assert_eq!(TestCategory::NoDaemon.timeout_minutes(), 240);
        assert_eq!(TestCategory::AllVersionsCrossVersion.timeout_minutes(), 240);
    }

    #[test]
    fn test_coordinator_ids() {
        assert_eq!(
            PerformanceTestKind::Test.coordinator_id("Gradle_Check_"),
            "Gradle_Check_PerformanceTestCoordinator"
        );
        assert_eq!(
            PerformanceTestKind::FlakinessDetection.coordinator_id("Gradle_Check_"),
            "Gradle_Check_PerformanceFlakinessDetectionCoordinator"
        );
    }

    #[test]
    fn test_coordinator_uuid_legacy_overrides() {
        assert_eq!(
            PerformanceTestKind::Slow.coordinator_uuid("Gradle_Check_"),
            "Gradle_Check_PerformanceExperimentCoordinator"
        );
        assert_eq!(
            PerformanceTestKind::Experiment.coordinator_uuid("Gradle_Check_"),
            "Gradle_Check_PerformanceExperimentOnlyCoordinator"
        );
        // Everything else keeps uuid == id.
        assert_eq!(
            PerformanceTestKind::Historical.coordinator_uuid("Gradle_Check_"),
            PerformanceTestKind::Historical.coordinator_id("Gradle_Check_")
        );
    }

    #[test]
    fn test_jvm_categories() {
        assert_eq!(JvmCategory::Min.version(), JvmVersion::Java8);
        assert_eq!(JvmCategory::Min.vendor(), JvmVendor::Oracle);
        assert_eq!(JvmCategory::Max.version(), JvmVersion::Java11);
        assert_eq!(JvmCategory::Experimental.version(), JvmVersion::Java14);
    }

    #[test]
    fn test_trigger_serialization() {
        assert_eq!(
            serde_json::to_string(&Trigger::EachCommit).unwrap(),
            "\"each_commit\""
        );
        assert_eq!(serde_json::to_string(&Trigger::Never).unwrap(), "\"never\"");
        assert!(Trigger::Daily.is_scheduled());
        assert!(!Trigger::EachCommit.is_scheduled());
    }
}
