//! The subproject registry.

use crate::axes::TestCategory;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One buildable unit of the covered project.
///
/// The participation flags say which test classes the subproject takes part
/// in; `contains_slow_tests` lets early stages skip it entirely. The name is
/// unique across the registry and is used verbatim in derived identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Subproject {
    pub name: String,
    pub unit_tests: bool,
    pub functional_tests: bool,
    pub cross_version_tests: bool,
    pub contains_slow_tests: bool,
}

impl Subproject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit_tests: true,
            functional_tests: true,
            cross_version_tests: false,
            contains_slow_tests: false,
        }
    }

    pub fn without_unit_tests(mut self) -> Self {
        self.unit_tests = false;
        self
    }

    pub fn without_functional_tests(mut self) -> Self {
        self.functional_tests = false;
        self
    }

    pub fn with_cross_version_tests(mut self) -> Self {
        self.cross_version_tests = true;
        self
    }

    pub fn with_slow_tests(mut self) -> Self {
        self.contains_slow_tests = true;
        self
    }

    /// Whether this subproject has any tests of the classes the category
    /// covers.
    pub fn has_tests_of(&self, category: TestCategory) -> bool {
        (self.unit_tests && category.unit_tests())
            || (self.functional_tests && category.functional_tests())
            || (self.cross_version_tests && category.cross_version_tests())
    }

    /// Directory the subproject lives in: camelCase name to kebab-case.
    pub fn directory_name(&self) -> String {
        let mut out = String::with_capacity(self.name.len() + 4);
        for c in self.name.chars() {
            if c.is_ascii_uppercase() {
                out.push('-');
                out.push(c.to_ascii_lowercase());
            } else {
                out.push(c);
            }
        }
        out
    }
}
