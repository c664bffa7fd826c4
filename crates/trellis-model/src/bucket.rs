//! Bucketing: mapping a stage's coverage requirements onto subprojects.

use trellis_core::{Subproject, TestCoverage};

use crate::job::{Job, JobKind};
use crate::pipeline::PipelineModel;
use crate::specific::SpecificBuild;
use crate::stage::Stage;

/// A unit of work-splitting for functional tests.
///
/// A bucket turns one (stage, coverage) requirement into one or more
/// concrete jobs. Today the only bucket is a single subproject, which
/// produces exactly one job; alternative strategies that split a coverage
/// requirement across several generated jobs can implement this without the
/// stage graph changing.
pub trait BuildBucket {
    fn functional_tests_for(
        &self,
        model: &PipelineModel,
        stage: &Stage,
        coverage: &TestCoverage,
    ) -> Vec<Job>;
}

impl BuildBucket for Subproject {
    fn functional_tests_for(
        &self,
        model: &PipelineModel,
        stage: &Stage,
        coverage: &TestCoverage,
    ) -> Vec<Job> {
        let id = coverage.configuration_id(&model.project_prefix, Some(&self.name));
        let mut depends_on = Vec::new();
        if stage.functional_tests_depend_on_specific_builds {
            depends_on.extend(
                stage
                    .specific_builds
                    .iter()
                    .map(|build| build.configuration_id(model)),
            );
        }
        if stage.depends_on_sanity_check {
            let sanity = SpecificBuild::SanityCheck.configuration_id(model);
            if !depends_on.contains(&sanity) {
                depends_on.push(sanity);
            }
        }

        vec![Job {
            uuid: id.clone(),
            id,
            name: format!("{} ({})", coverage.display_name(), self.name),
            description: format!("{} for {}", coverage.display_name(), self.name),
            kind: JobKind::FunctionalTest {
                coverage_id: coverage.id,
                subprojects: vec![self.name.clone()],
            },
            depends_on,
            timeout_minutes: coverage.category.timeout_minutes(),
            extra_flags: Vec::new(),
        }]
    }
}

/// Subprojects eligible for one coverage entry of a stage, in declared
/// registry order. Registry order keeps generated job ordering stable across
/// regenerations, which matters for tooling that diffs the rendered output.
pub fn eligible_buckets<'a>(
    model: &'a PipelineModel,
    stage: &Stage,
    coverage: &TestCoverage,
) -> Vec<&'a Subproject> {
    model
        .subprojects
        .iter()
        .filter(|sub| sub.has_tests_of(coverage.category))
        .filter(|sub| !(stage.omits_slow_projects && sub.contains_slow_tests))
        .collect()
}

/// All functional-test jobs for one coverage entry of a stage.
pub fn functional_test_jobs(
    model: &PipelineModel,
    stage: &Stage,
    coverage: &TestCoverage,
) -> Vec<Job> {
    eligible_buckets(model, stage, coverage)
        .into_iter()
        .flat_map(|sub| sub.functional_tests_for(model, stage, coverage))
        .collect()
}
