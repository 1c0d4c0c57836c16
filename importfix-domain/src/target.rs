use importfix_types::{DepsAttribute, TargetContext};

/// Suffix of the wrapper target some test macros generate around the real `py_library`.
pub const TEST_WRAPPER_SUFFIX: &str = "_swift_test_pylib";

/// Resolves the invoked label to the label that actually declares the dependencies.
#[derive(Debug, Clone)]
pub struct TargetResolver {
    test_wrapper_suffix: String,
}

impl Default for TargetResolver {
    fn default() -> Self {
        Self::new(TEST_WRAPPER_SUFFIX)
    }
}

impl TargetResolver {
    pub fn new(test_wrapper_suffix: impl Into<String>) -> Self {
        Self {
            test_wrapper_suffix: test_wrapper_suffix.into(),
        }
    }

    pub fn resolve(&self, label: &str, package_path: &str) -> TargetContext {
        let wrapped = if self.test_wrapper_suffix.is_empty() {
            None
        } else {
            label.strip_suffix(self.test_wrapper_suffix.as_str())
        };

        let (actual, attribute) = match wrapped {
            Some(real) => (real, DepsAttribute::TestDeps),
            None => (label, DepsAttribute::Deps),
        };

        TargetContext {
            requested_label: label.to_string(),
            label: actual.to_string(),
            attribute,
            package_folder: package_folder(package_path).to_string(),
        }
    }
}

/// Resolve with the default wrapper suffix.
pub fn resolve(label: &str, package_path: &str) -> TargetContext {
    TargetResolver::default().resolve(label, package_path)
}

fn package_folder(package_path: &str) -> &str {
    let trimmed = package_path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
