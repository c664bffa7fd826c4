//! Pipeline graph assembly.
//!
//! Derives the validated, immutable object graph from a [`PipelineModel`]:
//! every stage's concrete job set with identifiers, display names, timeouts,
//! and dependency edges. Construction fails fast on any static configuration
//! defect; a graph that builds is safe to hand to the renderer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;
use trellis_core::ident::{MAX_IDENTIFIER_LEN, capitalize};
use trellis_core::{ModelError, PerformanceTestKind, Result, Trigger};

use crate::bucket::functional_test_jobs;
use crate::dag::StageDag;
use crate::job::{Job, JobKind};
use crate::pipeline::PipelineModel;
use crate::specific::SpecificBuild;
use crate::stage::Stage;

/// One stage of the assembled graph, jobs in generation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StagePlan {
    pub id: String,
    pub title: String,
    pub description: String,
    pub trigger: Trigger,
    pub follows: Option<String>,
    pub runs_independently: bool,
    pub jobs: Vec<Job>,
}

/// The assembled pipeline: what the external renderer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PipelineGraph {
    pub project_prefix: String,
    pub root_project_name: String,
    pub stages: Vec<StagePlan>,
}

impl PipelineGraph {
    /// Assemble and validate the graph.
    ///
    /// Checks, in order: subproject name uniqueness, stage wiring (unique
    /// ids, known predecessors, no cycles, no predecessor on independent
    /// stages), coverage id uniqueness across the whole model, sanity-check
    /// availability, and finally uniqueness and length of every generated
    /// job identifier.
    pub fn build(model: &PipelineModel) -> Result<Self> {
        let mut seen_subprojects = HashMap::new();
        for sub in &model.subprojects {
            if seen_subprojects.insert(sub.name.as_str(), ()).is_some() {
                return Err(ModelError::DuplicateSubproject(sub.name.clone()));
            }
        }

        StageDag::build(&model.stages)?;

        let mut coverage_owner: HashMap<u32, &str> = HashMap::new();
        for stage in &model.stages {
            for coverage in &stage.functional_tests {
                if let Some(first) = coverage_owner.insert(coverage.id, &stage.label.id) {
                    return Err(ModelError::DuplicateCoverageId {
                        id: coverage.id,
                        first: first.to_string(),
                        second: stage.label.id.clone(),
                    });
                }
            }
        }

        let sanity_declared = model
            .stages
            .iter()
            .any(|s| s.specific_builds.contains(&SpecificBuild::SanityCheck));

        let mut stages = Vec::with_capacity(model.stages.len());
        for stage in &model.stages {
            if stage.depends_on_sanity_check && !sanity_declared {
                return Err(ModelError::MissingSanityCheck(stage.label.id.clone()));
            }
            let jobs = assemble_stage_jobs(model, stage);
            debug!(
                stage = %stage.label.id,
                jobs = jobs.len(),
                "assembled stage plan"
            );
            stages.push(StagePlan {
                id: stage.label.id.clone(),
                title: stage.label.title.clone(),
                description: stage.label.description.clone(),
                trigger: stage.trigger,
                follows: stage.follows.clone(),
                runs_independently: stage.runs_independently,
                jobs,
            });
        }

        let graph = PipelineGraph {
            project_prefix: model.project_prefix.clone(),
            root_project_name: model.root_project_name.clone(),
            stages,
        };
        graph.check_identifiers()?;
        Ok(graph)
    }

    /// All jobs across all stages, in generation order.
    pub fn jobs(&self) -> impl Iterator<Item = &Job> {
        self.stages.iter().flat_map(|stage| stage.jobs.iter())
    }

    /// The shortening fallback is a heuristic, so uniqueness and length of
    /// generated identifiers are verified here rather than assumed.
    fn check_identifiers(&self) -> Result<()> {
        let mut seen: HashMap<&str, &str> = HashMap::new();
        for job in self.jobs() {
            if job.id.len() > MAX_IDENTIFIER_LEN {
                return Err(ModelError::IdentifierTooLong {
                    id: job.id.clone(),
                    len: job.id.len(),
                    limit: MAX_IDENTIFIER_LEN,
                });
            }
            if let Some(first) = seen.insert(&job.id, &job.name) {
                return Err(ModelError::DuplicateJobId {
                    id: job.id.clone(),
                    first: first.to_string(),
                    second: job.name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// A stage's job set: specific builds, then performance workers and their
/// coordinator, then bucketed functional tests per declared coverage.
fn assemble_stage_jobs(model: &PipelineModel, stage: &Stage) -> Vec<Job> {
    let mut jobs = Vec::new();

    for build in &stage.specific_builds {
        jobs.push(build.create(model, stage));
    }

    for kind in &stage.performance_tests {
        let (workers, coordinator) = performance_jobs(model, stage, *kind);
        jobs.extend(workers);
        jobs.push(coordinator);
    }

    for coverage in &stage.functional_tests {
        jobs.extend(functional_test_jobs(model, stage, coverage));
    }

    jobs
}

fn performance_jobs(
    model: &PipelineModel,
    stage: &Stage,
    kind: PerformanceTestKind,
) -> (Vec<Job>, Job) {
    let prefix = &model.project_prefix;
    let sanity_dep = stage
        .depends_on_sanity_check
        .then(|| SpecificBuild::SanityCheck.configuration_id(model));

    let mut extra_flags = vec![format!("--baselines {}", kind.default_baselines())];
    if !kind.extra_parameters().is_empty() {
        extra_flags.push(kind.extra_parameters().to_string());
    }

    let workers: Vec<Job> = (1..=model.performance_test_partitions)
        .map(|partition| {
            let id = format!(
                "{}Performance{}Bucket{}",
                prefix,
                capitalize(kind.as_str()),
                partition
            );
            Job {
                uuid: id.clone(),
                id,
                name: format!("{} - Bucket {}", kind.display_name(), partition),
                description: format!(
                    "Partition {} of {} for the {} task",
                    partition,
                    model.performance_test_partitions,
                    kind.task_id()
                ),
                kind: JobKind::PerformanceWorker { kind, partition },
                depends_on: sanity_dep.iter().cloned().collect(),
                timeout_minutes: kind.timeout_minutes(),
                extra_flags: extra_flags.clone(),
            }
        })
        .collect();

    let mut depends_on: Vec<String> = workers.iter().map(|w| w.id.clone()).collect();
    depends_on.extend(sanity_dep);
    let coordinator = Job {
        id: kind.coordinator_id(prefix),
        uuid: kind.coordinator_uuid(prefix),
        name: format!("{} Coordinator", kind.display_name()),
        description: format!(
            "Aggregates the partitioned {} workers",
            kind.display_name()
        ),
        kind: JobKind::PerformanceCoordinator { kind },
        depends_on,
        timeout_minutes: kind.timeout_minutes(),
        extra_flags,
    };

    (workers, coordinator)
}
