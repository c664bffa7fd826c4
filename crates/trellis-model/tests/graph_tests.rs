//! End-to-end assembly tests over the built-in pipeline definition.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use trellis_core::ident::MAX_IDENTIFIER_LEN;
use trellis_model::{JobKind, PipelineGraph, PipelineModel, SpecificBuild};

fn graph() -> PipelineGraph {
    PipelineGraph::build(&PipelineModel::default()).expect("built-in model must assemble")
}

fn stage<'a>(graph: &'a PipelineGraph, id: &str) -> &'a trellis_model::StagePlan {
    graph
        .stages
        .iter()
        .find(|s| s.id == id)
        .unwrap_or_else(|| panic!("no stage {id}"))
}

#[test]
fn test_builtin_model_assembles() {
    let graph = graph();
    assert_eq!(graph.stages.len(), 8);
    assert_eq!(graph.project_prefix, "Gradle_Check_");
    assert!(graph.jobs().count() > 300);
}

#[test]
fn test_every_identifier_is_unique_and_bounded() {
    let graph = graph();
    let mut seen = HashSet::new();
    for job in graph.jobs() {
        assert!(job.id.len() <= MAX_IDENTIFIER_LEN, "{} too long", job.id);
        assert!(seen.insert(job.id.clone()), "duplicate id {}", job.id);
    }
}

#[test]
fn test_assembly_is_deterministic() {
    let model = PipelineModel::default();
    let first = PipelineGraph::build(&model).unwrap();
    let second = PipelineGraph::build(&model).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_graph_serialization_roundtrip() {
    let graph = graph();
    let json = serde_json::to_string(&graph).expect("serialize");
    let parsed: PipelineGraph = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(graph, parsed);
}

#[test]
fn test_abbreviated_identifier_in_ready_for_merge() {
    let graph = graph();
    let merge = stage(&graph, "BranchBuildAccept");
    let ids: Vec<&str> = merge.jobs.iter().map(|j| j.id.as_str()).collect();
    // Abbreviation fits the budget, so no vowel stripping.
    assert!(
        ids.contains(&"Gradle_Check_Platform_3_iIntegT"),
        "missing abbreviated id, got: {ids:?}"
    );
    assert!(!ids.iter().any(|id| id.contains("Pltfrm")));
}

#[test]
fn test_quick_stages_omit_slow_subprojects() {
    let graph = graph();
    for stage_id in ["QuickFeedbackLinuxOnly", "QuickFeedback", "BranchBuildAccept"] {
        let plan = stage(&graph, stage_id);
        for job in &plan.jobs {
            if let JobKind::FunctionalTest { subprojects, .. } = &job.kind {
                assert!(
                    !subprojects.contains(&"platformPlay".to_string()),
                    "{stage_id} emitted a job for a slow subproject"
                );
            }
        }
    }

    // Later stages still cover it.
    let release = stage(&graph, "ReleaseAccept");
    assert!(release.jobs.iter().any(|job| matches!(
        &job.kind,
        JobKind::FunctionalTest { subprojects, .. } if subprojects.contains(&"platformPlay".to_string())
    )));
}

#[test]
fn test_sanity_gated_stage_depends_on_sanity_check_everywhere() {
    let graph = graph();
    let sanity_id = "Gradle_Check_SanityCheck".to_string();
    let quick_feedback = stage(&graph, "QuickFeedback");
    assert!(!quick_feedback.jobs.is_empty());
    for job in &quick_feedback.jobs {
        assert!(
            job.depends_on.contains(&sanity_id),
            "{} misses the sanity check dependency",
            job.id
        );
    }

    // The sanity check itself lives in the first stage.
    let first = stage(&graph, "QuickFeedbackLinuxOnly");
    assert!(first.jobs.iter().any(|j| j.id == sanity_id));
}

#[test]
fn test_ready_for_merge_specific_builds() {
    let graph = graph();
    let merge = stage(&graph, "BranchBuildAccept");
    let specific: Vec<SpecificBuild> = merge
        .jobs
        .iter()
        .filter_map(|j| match &j.kind {
            JobKind::SpecificBuild { build } => Some(*build),
            _ => None,
        })
        .collect();
    assert_eq!(
        specific,
        vec![
            SpecificBuild::BuildDistributions,
            SpecificBuild::Gradleception,
            SpecificBuild::SmokeTestsMinJavaVersion,
            SpecificBuild::SmokeTestsMaxJavaVersion,
        ]
    );
}

#[test]
fn test_performance_coordinators_and_workers() {
    let graph = graph();
    let model = PipelineModel::default();
    let release = stage(&graph, "ReleaseAccept");

    let coordinator = release
        .jobs
        .iter()
        .find(|j| matches!(j.kind, JobKind::PerformanceCoordinator { .. }))
        .expect("slow performance coordinator");
    assert_eq!(coordinator.id, "Gradle_Check_PerformanceSlowCoordinator");
    // Legacy identity survives regeneration.
    assert_eq!(coordinator.uuid, "Gradle_Check_PerformanceExperimentCoordinator");

    let workers: Vec<_> = release
        .jobs
        .iter()
        .filter(|j| matches!(j.kind, JobKind::PerformanceWorker { .. }))
        .collect();
    assert_eq!(workers.len(), model.performance_test_partitions as usize);
    for worker in &workers {
        assert!(coordinator.depends_on.contains(&worker.id));
    }
}

#[test]
fn test_independent_stages_have_no_predecessor() {
    let graph = graph();
    for stage_id in ["Experimental", "ExperimentalWindows10"] {
        let plan = stage(&graph, stage_id);
        assert!(plan.runs_independently);
        assert_eq!(plan.follows, None);
    }
}

#[test]
fn test_functional_jobs_inherit_category_timeout() {
    let graph = graph();
    let release = stage(&graph, "ReleaseAccept");
    for job in &release.jobs {
        if let JobKind::FunctionalTest { coverage_id, .. } = &job.kind {
            // Coverage 10 and 11 are allVersionsCrossVersion, 12 and 13 run
            // without a daemon; both classes get the long timeout.
            if [10, 11, 12, 13].contains(coverage_id) {
                assert_eq!(job.timeout_minutes, 240, "{}", job.id);
            }
        }
    }
}
