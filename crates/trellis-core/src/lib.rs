//! Trellis Core
//!
//! Shared vocabulary for the Trellis pipeline model: enumerated axes,
//! the subproject registry, the test-coverage descriptor, the identifier
//! engine, and the configuration-error taxonomy. This crate has minimal
//! dependencies and defines the types used across all other crates.

pub mod axes;
pub mod cache;
pub mod coverage;
pub mod error;
pub mod ident;
pub mod subproject;

pub use axes::{JvmCategory, JvmVendor, JvmVersion, Os, PerformanceTestKind, TestCategory, Trigger};
pub use coverage::TestCoverage;
pub use error::{ModelError, Result};
pub use subproject::Subproject;
