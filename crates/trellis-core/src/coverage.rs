//! Test-coverage descriptors.

use crate::axes::{JvmCategory, JvmVendor, JvmVersion, Os, TestCategory};
use crate::ident::shorten;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One (test category × environment) combination a stage must validate.
///
/// The numeric `id` disambiguates generated identifiers: the same category
/// and environment may intentionally repeat across stages, so the id must be
/// unique across the whole model (checked at graph assembly).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TestCoverage {
    pub id: u32,
    pub category: TestCategory,
    pub os: Os,
    pub test_jvm_version: JvmVersion,
    pub vendor: JvmVendor,
    pub build_jvm_version: JvmVersion,
}

impl TestCoverage {
    pub fn new(id: u32, category: TestCategory, os: Os, jvm: JvmCategory) -> Self {
        Self {
            id,
            category,
            os,
            test_jvm_version: jvm.version(),
            vendor: jvm.vendor(),
            build_jvm_version: JvmVersion::Java11,
        }
    }

    /// `Platform_3` and friends: the disambiguating prefix every identifier
    /// derived from this coverage starts with.
    fn prefix(&self) -> String {
        format!("{}_{}", self.category.capitalized(), self.id)
    }

    /// Identifier of the coverage entry itself.
    pub fn as_id(&self, project_prefix: &str) -> String {
        format!("{}{}", project_prefix, self.prefix())
    }

    /// Full configuration identifier for this coverage, optionally scoped to
    /// one subproject. Subproject-scoped ids go through the shortening pass
    /// so the result stays within the host system's length budget.
    pub fn configuration_id(&self, project_prefix: &str, subproject: Option<&str>) -> String {
        match subproject {
            Some(name) => {
                let full = format!("{}_{}", self.prefix(), name);
                format!("{}{}", project_prefix, shorten(project_prefix, &full))
            }
            None => format!("{}{}_0", project_prefix, self.prefix()),
        }
    }

    /// Human-readable name, unshortened.
    pub fn display_name(&self) -> String {
        format!(
            "Test Coverage - {} {} {} {}",
            self.category.capitalized(),
            self.test_jvm_version.capitalized(),
            self.vendor.capitalized(),
            self.os.capitalized()
        )
    }
}
