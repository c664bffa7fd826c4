//! The built-in pipeline definition.
//!
//! Stage list and subproject registry for the covered multi-module build.
//! Coverage ids are unique across the whole model; the on-demand stages use
//! the 21+ range so they never collide with the scheduled stages.

use trellis_core::cache::BuildCacheNode;
use trellis_core::{JvmCategory, Os, PerformanceTestKind, Subproject, TestCategory, TestCoverage, Trigger};

use crate::pipeline::PipelineModel;
use crate::specific::SpecificBuild;
use crate::stage::{Stage, StageLabel};

impl Default for PipelineModel {
    fn default() -> Self {
        PipelineModel {
            project_prefix: "Gradle_Check_".to_string(),
            root_project_name: "Check".to_string(),
            tag_builds: true,
            publish_status_to_github: true,
            master_and_release_branches: vec!["master".to_string(), "release".to_string()],
            parent_build_cache: BuildCacheNode::builtin_remote(),
            child_build_cache: BuildCacheNode::builtin_remote(),
            build_scan_tags: Vec::new(),
            performance_test_partitions: 8,
            stages: builtin_stages(),
            subprojects: builtin_subprojects(),
        }
    }
}

fn builtin_stages() -> Vec<Stage> {
    use JvmCategory::{Experimental, Max, Min};
    use TestCategory::*;

    vec![
        Stage::new(StageLabel::new(
            "Quick Feedback - Linux Only",
            "Run checks and functional tests (embedded executer, Linux)",
        ))
        .with_specific_builds(vec![SpecificBuild::CompileAll, SpecificBuild::SanityCheck])
        .with_functional_tests(vec![TestCoverage::new(1, Quick, Os::Linux, Max)])
        .omits_slow_projects(),
        Stage::new(StageLabel::new(
            "Quick Feedback",
            "Run checks and functional tests (embedded executer, Windows)",
        ))
        .follows("QuickFeedbackLinuxOnly")
        .with_functional_tests(vec![TestCoverage::new(2, Quick, Os::Windows, Min)])
        .functional_tests_depend_on_specific_builds()
        .omits_slow_projects()
        .depends_on_sanity_check(),
        Stage::new(
            StageLabel::new(
                "Ready for Merge",
                "Run performance and functional tests (against distribution)",
            )
            .with_id("BranchBuildAccept"),
        )
        .follows("QuickFeedback")
        .with_specific_builds(vec![
            SpecificBuild::BuildDistributions,
            SpecificBuild::Gradleception,
            SpecificBuild::SmokeTestsMinJavaVersion,
            SpecificBuild::SmokeTestsMaxJavaVersion,
        ])
        .with_functional_tests(vec![
            TestCoverage::new(3, Platform, Os::Linux, Min),
            TestCoverage::new(4, Platform, Os::Windows, Max),
            TestCoverage::new(20, Instant, Os::Linux, Min),
        ])
        .with_performance_tests(vec![PerformanceTestKind::Test])
        .omits_slow_projects(),
        Stage::new(
            StageLabel::new(
                "Ready for Nightly",
                "Rerun tests in different environments / 3rd party components",
            )
            .with_id("MasterAccept"),
        )
        .follows("BranchBuildAccept")
        .with_trigger(Trigger::EachCommit)
        .with_functional_tests(vec![
            TestCoverage::new(5, QuickFeedbackCrossVersion, Os::Linux, Min),
            TestCoverage::new(6, QuickFeedbackCrossVersion, Os::Windows, Min),
            TestCoverage::new(7, Parallel, Os::Linux, Max),
        ]),
        Stage::new(
            StageLabel::new(
                "Ready for Release",
                "Once a day: Rerun tests in more environments",
            )
            .with_id("ReleaseAccept"),
        )
        .follows("MasterAccept")
        .with_trigger(Trigger::Daily)
        .with_functional_tests(vec![
            TestCoverage::new(8, Soak, Os::Linux, Max),
            TestCoverage::new(9, Soak, Os::Windows, Min),
            TestCoverage::new(10, AllVersionsCrossVersion, Os::Linux, Min),
            TestCoverage::new(11, AllVersionsCrossVersion, Os::Windows, Min),
            TestCoverage::new(12, NoDaemon, Os::Linux, Min),
            TestCoverage::new(13, NoDaemon, Os::Windows, Max),
            TestCoverage::new(14, Platform, Os::Macos, Min),
            TestCoverage::new(15, ForceRealizeDependencyManagement, Os::Linux, Min),
            TestCoverage::new(16, AllVersionsIntegMultiVersion, Os::Linux, Min),
            TestCoverage::new(17, AllVersionsIntegMultiVersion, Os::Windows, Min),
        ])
        .with_performance_tests(vec![PerformanceTestKind::Slow]),
        Stage::new(StageLabel::new(
            "Historical Performance",
            "Once a week: Run performance tests for multiple versions",
        ))
        .follows("ReleaseAccept")
        .with_trigger(Trigger::Weekly)
        .with_performance_tests(vec![
            PerformanceTestKind::Historical,
            PerformanceTestKind::FlakinessDetection,
            PerformanceTestKind::Experiment,
        ]),
        Stage::new(StageLabel::new(
            "Experimental",
            "On demand: Run experimental tests",
        ))
        .runs_independently()
        .with_functional_tests(vec![
            TestCoverage::new(21, Quick, Os::Linux, Experimental),
            TestCoverage::new(22, Quick, Os::Windows, Experimental),
            TestCoverage::new(23, Platform, Os::Linux, Experimental),
            TestCoverage::new(24, Platform, Os::Windows, Experimental),
        ]),
        Stage::new(StageLabel::new(
            "Experimental Windows10",
            "On demand checks to test Windows 10 agents",
        ))
        .runs_independently()
        .with_functional_tests(vec![TestCoverage::new(25, Quick, Os::Windows, Max)]),
    ]
}

fn builtin_subprojects() -> Vec<Subproject> {
    vec![
        Subproject::new("antlr"),
        Subproject::new("baseServices"),
        Subproject::new("baseServicesGroovy").without_functional_tests(),
        Subproject::new("bootstrap")
            .without_unit_tests()
            .without_functional_tests(),
        Subproject::new("buildCache"),
        Subproject::new("buildCacheHttp").without_unit_tests(),
        Subproject::new("buildCachePackaging").without_functional_tests(),
        Subproject::new("buildEvents"),
        Subproject::new("buildProfile"),
        Subproject::new("buildOption").without_functional_tests(),
        Subproject::new("buildInit"),
        Subproject::new("cli").without_functional_tests(),
        Subproject::new("codeQuality"),
        Subproject::new("compositeBuilds"),
        Subproject::new("core").with_cross_version_tests(),
        Subproject::new("coreApi").without_functional_tests(),
        Subproject::new("dependencyManagement").with_cross_version_tests(),
        Subproject::new("diagnostics"),
        Subproject::new("ear"),
        Subproject::new("execution"),
        Subproject::new("fileCollections"),
        Subproject::new("files").without_functional_tests(),
        Subproject::new("hashing").without_functional_tests(),
        Subproject::new("ide").with_cross_version_tests(),
        Subproject::new("ideNative"),
        Subproject::new("idePlay").without_unit_tests(),
        Subproject::new("instantExecution"),
        Subproject::new("instantExecutionReport")
            .without_unit_tests()
            .without_functional_tests(),
        Subproject::new("integTest")
            .without_unit_tests()
            .with_cross_version_tests(),
        Subproject::new("internalIntegTesting"),
        Subproject::new("internalPerformanceTesting"),
        Subproject::new("internalTesting").without_functional_tests(),
        Subproject::new("ivy").with_cross_version_tests(),
        Subproject::new("jacoco"),
        Subproject::new("javascript"),
        Subproject::new("jvmServices").without_functional_tests(),
        Subproject::new("languageGroovy"),
        Subproject::new("languageJava").with_cross_version_tests(),
        Subproject::new("languageJvm"),
        Subproject::new("languageNative"),
        Subproject::new("languageScala"),
        Subproject::new("launcher"),
        Subproject::new("logging"),
        Subproject::new("maven").with_cross_version_tests(),
        Subproject::new("messaging"),
        Subproject::new("modelCore"),
        Subproject::new("modelGroovy"),
        Subproject::new("native"),
        Subproject::new("persistentCache"),
        Subproject::new("pineapple")
            .without_unit_tests()
            .without_functional_tests(),
        Subproject::new("platformBase"),
        Subproject::new("platformJvm"),
        Subproject::new("platformNative"),
        Subproject::new("platformPlay").with_slow_tests(),
        Subproject::new("pluginDevelopment"),
        Subproject::new("pluginUse"),
        Subproject::new("plugins"),
        Subproject::new("processServices"),
        Subproject::new("publish"),
        Subproject::new("reporting"),
        Subproject::new("resources"),
        Subproject::new("resourcesGcs"),
        Subproject::new("resourcesHttp"),
        Subproject::new("resourcesS3"),
        Subproject::new("resourcesSftp"),
        Subproject::new("scala"),
        Subproject::new("signing"),
        Subproject::new("snapshots"),
        Subproject::new("samples").without_unit_tests(),
        Subproject::new("testKit"),
        Subproject::new("testingBase"),
        Subproject::new("testingJvm"),
        Subproject::new("testingJunitPlatform")
            .without_unit_tests()
            .without_functional_tests(),
        Subproject::new("testingNative"),
        Subproject::new("toolingApi").with_cross_version_tests(),
        Subproject::new("toolingApiBuilders").without_functional_tests(),
        Subproject::new("toolingNative")
            .without_unit_tests()
            .without_functional_tests()
            .with_cross_version_tests(),
        Subproject::new("versionControl"),
        Subproject::new("workers"),
        Subproject::new("workerProcesses")
            .without_unit_tests()
            .without_functional_tests(),
        Subproject::new("wrapper").with_cross_version_tests(),
        Subproject::new("soak")
            .without_unit_tests()
            .without_functional_tests(),
        Subproject::new("apiMetadata")
            .without_unit_tests()
            .without_functional_tests(),
        Subproject::new("kotlinDsl"),
        Subproject::new("kotlinDslProviderPlugins").without_functional_tests(),
        Subproject::new("kotlinDslToolingModels")
            .without_unit_tests()
            .without_functional_tests(),
        Subproject::new("kotlinDslToolingBuilders").with_cross_version_tests(),
        Subproject::new("kotlinDslPlugins").without_unit_tests(),
        Subproject::new("kotlinDslTestFixtures").without_functional_tests(),
        Subproject::new("kotlinDslIntegTests").without_unit_tests(),
        Subproject::new("kotlinCompilerEmbeddable")
            .without_unit_tests()
            .without_functional_tests(),
        Subproject::new("architectureTest")
            .without_unit_tests()
            .without_functional_tests(),
        Subproject::new("distributionsDependencies")
            .without_unit_tests()
            .without_functional_tests(),
        Subproject::new("buildScanPerformance")
            .without_unit_tests()
            .without_functional_tests(),
        Subproject::new("distributions")
            .without_unit_tests()
            .without_functional_tests(),
        Subproject::new("docs")
            .without_unit_tests()
            .without_functional_tests(),
        Subproject::new("installationBeacon")
            .without_unit_tests()
            .without_functional_tests(),
        Subproject::new("internalAndroidPerformanceTesting")
            .without_unit_tests()
            .without_functional_tests(),
        Subproject::new("performance")
            .without_unit_tests()
            .without_functional_tests(),
        Subproject::new("runtimeApiInfo")
            .without_unit_tests()
            .without_functional_tests(),
        Subproject::new("smokeTest")
            .without_unit_tests()
            .without_functional_tests(),
    ]
}
