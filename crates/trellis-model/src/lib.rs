//! Trellis pipeline model.
//!
//! Turns a static pipeline definition (stages, test coverage, subprojects)
//! into a validated, immutable object graph of concrete jobs with unique
//! identifiers and explicit dependency edges. The graph is consumed by an
//! external renderer that materializes it into the host CI system's native
//! format; nothing here talks to a CI server or runs a build.

pub mod bucket;
pub mod builtin;
pub mod dag;
pub mod graph;
pub mod job;
pub mod pipeline;
pub mod specific;
pub mod stage;

pub use bucket::BuildBucket;
pub use dag::StageDag;
pub use graph::{PipelineGraph, StagePlan};
pub use job::{Job, JobKind};
pub use pipeline::PipelineModel;
pub use specific::SpecificBuild;
pub use stage::{Stage, StageLabel};
