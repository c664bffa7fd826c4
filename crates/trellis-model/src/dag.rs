//! Stage dependency DAG.
//!
//! Stages name their predecessor explicitly (`follows`); declaration order
//! in the model is presentation only. This graph makes "previous stage"
//! unambiguous and rejects bad wiring at construction time.

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use trellis_core::{ModelError, Result};

use crate::stage::Stage;

#[derive(Debug)]
pub struct StageDag {
    graph: DiGraph<String, ()>,
    id_to_index: HashMap<String, NodeIndex>,
}

impl StageDag {
    /// Build the DAG from declared stages.
    ///
    /// Fails on an unknown predecessor id, on an independent stage that
    /// declares one, and on cycles.
    pub fn build(stages: &[Stage]) -> Result<Self> {
        if stages.is_empty() {
            return Err(ModelError::EmptyPipeline);
        }

        let mut graph = DiGraph::new();
        let mut id_to_index = HashMap::new();

        for stage in stages {
            let idx = graph.add_node(stage.label.id.clone());
            if id_to_index.insert(stage.label.id.clone(), idx).is_some() {
                return Err(ModelError::DuplicateStage(stage.label.id.clone()));
            }
        }

        for stage in stages {
            let Some(follows) = &stage.follows else {
                continue;
            };
            if stage.runs_independently {
                return Err(ModelError::IndependentStageWithPredecessor(
                    stage.label.id.clone(),
                ));
            }
            let pred_idx = id_to_index.get(follows).ok_or_else(|| {
                ModelError::UnknownPredecessor {
                    stage: stage.label.id.clone(),
                    follows: follows.clone(),
                }
            })?;
            graph.add_edge(*pred_idx, id_to_index[&stage.label.id], ());
        }

        let dag = StageDag { graph, id_to_index };
        dag.topological_order()?;
        Ok(dag)
    }

    /// Stage ids with no predecessor (entry points of the pipeline).
    pub fn roots(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .neighbors_directed(idx, petgraph::Direction::Incoming)
                    .count()
                    == 0
            })
            .filter_map(|idx| self.graph.node_weight(idx).map(String::as_str))
            .collect()
    }

    /// Stages that must complete before the given stage runs.
    pub fn predecessors(&self, stage_id: &str) -> Vec<&str> {
        self.neighbors(stage_id, petgraph::Direction::Incoming)
    }

    /// Stages gated on the given stage.
    pub fn successors(&self, stage_id: &str) -> Vec<&str> {
        self.neighbors(stage_id, petgraph::Direction::Outgoing)
    }

    fn neighbors(&self, stage_id: &str, direction: petgraph::Direction) -> Vec<&str> {
        self.id_to_index
            .get(stage_id)
            .map(|&idx| {
                self.graph
                    .neighbors_directed(idx, direction)
                    .filter_map(|n| self.graph.node_weight(n).map(String::as_str))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn topological_order(&self) -> Result<Vec<&str>> {
        toposort(&self.graph, None)
            .map(|indices| {
                indices
                    .iter()
                    .filter_map(|&idx| self.graph.node_weight(idx).map(String::as_str))
                    .collect()
            })
            .map_err(|_| ModelError::StageCycle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::PipelineModel;
    use crate::stage::StageLabel;
    use pretty_assertions::assert_eq;

    fn stage(title: &str) -> Stage {
        Stage::new(StageLabel::new(title, "test"))
    }

    #[test]
    fn test_builtin_chain() {
        let model = PipelineModel::default();
        let dag = StageDag::build(&model.stages).unwrap();

        let mut roots = dag.roots();
        roots.sort_unstable();
        assert_eq!(
            roots,
            vec!["Experimental", "ExperimentalWindows10", "QuickFeedbackLinuxOnly"]
        );
        assert_eq!(dag.successors("QuickFeedbackLinuxOnly"), vec!["QuickFeedback"]);
        assert_eq!(dag.predecessors("BranchBuildAccept"), vec!["QuickFeedback"]);
        assert!(dag.predecessors("Experimental").is_empty());
    }

    #[test]
    fn test_unknown_predecessor_rejected() {
        let stages = vec![stage("First"), stage("Second").follows("Missing")];
        let err = StageDag::build(&stages).unwrap_err();
        assert!(matches!(err, ModelError::UnknownPredecessor { .. }));
    }

    #[test]
    fn test_independent_stage_with_predecessor_rejected() {
        let stages = vec![
            stage("First"),
            stage("Second").runs_independently().follows("First"),
        ];
        let err = StageDag::build(&stages).unwrap_err();
        assert!(matches!(
            err,
            ModelError::IndependentStageWithPredecessor(id) if id == "Second"
        ));
    }

    #[test]
    fn test_cycle_rejected() {
        let stages = vec![stage("First").follows("Second"), stage("Second").follows("First")];
        let err = StageDag::build(&stages).unwrap_err();
        assert!(matches!(err, ModelError::StageCycle));
    }

    #[test]
    fn test_duplicate_stage_rejected() {
        let stages = vec![stage("Same"), stage("Same")];
        let err = StageDag::build(&stages).unwrap_err();
        assert!(matches!(err, ModelError::DuplicateStage(id) if id == "Same"));
    }

    #[test]
    fn test_empty_pipeline_rejected() {
        let err = StageDag::build(&[]).unwrap_err();
        assert!(matches!(err, ModelError::EmptyPipeline));
    }
}
