//! Resolution of file references against the analysed project's root.
//!
//! Paths are handled as opaque strings: the generated document is consumed on
//! the host running the analyser, not necessarily on the machine building it.

/// The root directory of the analysed project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPath {
    root: String,
}

impl ProjectPath {
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Resolves `path` relative to the project root.
    ///
    /// Absolute paths and stream wrapper paths such as
    /// `phar://phpstan.phar/conf/bleedingEdge.neon` are returned unchanged.
    #[must_use]
    pub fn resolve(&self, path: &str) -> String {
        if is_absolute(path) {
            return path.to_string();
        }

        format!("{}/{}", self.root.trim_end_matches('/'), path)
    }
}

fn is_absolute(path: &str) -> bool {
    if path.starts_with('/') {
        return true;
    }

    // scheme://
    match path.split_once("://") {
        Some((scheme, _)) => {
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}
