//! Parameter sets
//!
//! A set groups the parameters of one framework integration (Symfony,
//! Doctrine, TYPO3, ...) behind named setters. The [`Config`](crate::Config)
//! builder merges the parameters of every registered set into the final
//! document.
//!
//! Two independent capabilities exist:
//!
//! - [`ParameterizableSet`]: the set contributes parameters.
//! - [`PathAwareSet`]: the set resolves file references and wants the project
//!   path injected before it is configured.
//!
//! A set opts into the second capability by overriding
//! [`ParameterizableSet::as_path_aware`].
//!
//! # Implementing a Custom Set
//!
//! ```rust
//! use phpstan_config::{Collection, Config, ParameterizableSet};
//!
//! #[derive(Debug, Default)]
//! struct LaravelSet {
//!     parameters: Collection,
//! }
//!
//! impl LaravelSet {
//!     fn check_model_properties(&mut self) -> &mut Self {
//!         self.parameters.set("checkModelProperties", true);
//!         self
//!     }
//! }
//!
//! impl ParameterizableSet for LaravelSet {
//!     fn parameters(&self) -> Collection {
//!         self.parameters.clone()
//!     }
//! }
//!
//! let mut config = Config::create("/app");
//! config.with_set(|set: &mut LaravelSet| {
//!     set.check_model_properties();
//! });
//! ```

use crate::collection::Collection;
use crate::path::ProjectPath;
use std::fmt::Debug;

/// A set that contributes parameters to the configuration document.
pub trait ParameterizableSet: Debug {
    /// Returns the parameters configured on this set.
    fn parameters(&self) -> Collection;

    /// Returns the set as [`PathAwareSet`] if it resolves file references.
    fn as_path_aware(&mut self) -> Option<&mut dyn PathAwareSet> {
        None
    }
}

/// A set that resolves file references against the project path.
pub trait PathAwareSet {
    fn set_project_path(&mut self, project_path: ProjectPath);
}

/// Resolves `file` with the injected project path, if there is one.
pub(crate) fn resolve_with(project_path: Option<&ProjectPath>, file: &str) -> String {
    match project_path {
        Some(project_path) => project_path.resolve(file),
        None => file.to_string(),
    }
}
