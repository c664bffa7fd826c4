//! Error types for Trellis.
//!
//! Every error here is a static configuration error detected while the
//! pipeline model is assembled. All of them are fatal: the model is pure
//! data derivation, so there is no partial success or retry.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Duplicate subproject name: {0}")]
    DuplicateSubproject(String),

    #[error("Duplicate stage id: {0}")]
    DuplicateStage(String),

    #[error("Duplicate test coverage id {id} (declared by stages {first} and {second})")]
    DuplicateCoverageId {
        id: u32,
        first: String,
        second: String,
    },

    #[error("Configuration id {id} generated for both {first} and {second}")]
    DuplicateJobId {
        id: String,
        first: String,
        second: String,
    },

    #[error("Configuration id {id} is {len} characters, over the {limit} character limit")]
    IdentifierTooLong { id: String, len: usize, limit: usize },

    #[error("Stage {stage} follows unknown stage {follows}")]
    UnknownPredecessor { stage: String, follows: String },

    #[error("Stage {0} runs independently but declares a predecessor")]
    IndependentStageWithPredecessor(String),

    #[error("Cycle detected in stage predecessors")]
    StageCycle,

    #[error("Stage {0} depends on the sanity check but no stage declares one")]
    MissingSanityCheck(String),

    #[error("Empty pipeline: no stages declared")]
    EmptyPipeline,
}

pub type Result<T> = std::result::Result<T, ModelError>;
