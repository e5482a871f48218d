//! Fluent configuration builder.
//!
//! [`Config`] collects includes and parameters for one project and turns them
//! into a [`ConfigDocument`]. Relative file references passed to the builder
//! are resolved against the project path given to [`Config::create`].
//!
//! ```rust
//! use phpstan_config::{Config, ErrorFormat, IgnoreError, SymfonySet};
//!
//! # fn main() -> phpstan_config::Result<()> {
//! let mut config = Config::create("/app");
//! config
//!     .in_paths(["src", "tests"])
//!     .not_paths(["tests/Fixtures"])
//!     .max_level()
//!     .with_bleeding_edge()
//!     .format_as(ErrorFormat::GitHub)
//!     .ignore_error(IgnoreError::identifier("missingType.iterableValue")?)
//!     .with_set(|set: &mut SymfonySet| {
//!         set.with_container_xml_path("var/cache/dev/App_KernelDevDebugContainer.xml");
//!     });
//!
//! let document = config.to_document();
//! assert_eq!(document.includes, ["phar://phpstan.phar/conf/bleedingEdge.neon"]);
//! # Ok(())
//! # }
//! ```

use crate::collection::Collection;
use crate::document::ConfigDocument;
use crate::error_format::ErrorFormat;
use crate::ignore_error::IgnoreError;
use crate::path::ProjectPath;
use crate::set::ParameterizableSet;

/// Include that enables the analyser's bleeding edge features.
pub const BLEEDING_EDGE_INCLUDE: &str = "phar://phpstan.phar/conf/bleedingEdge.neon";

/// Baseline file used by [`Config::with_baseline`].
pub const DEFAULT_BASELINE_FILE: &str = "phpstan-baseline.neon";

/// Builder of a configuration document.
#[derive(Debug)]
pub struct Config {
    project_path: ProjectPath,
    parameters: Collection,
    includes: Vec<String>,
    sets: Vec<Box<dyn ParameterizableSet>>,
}

impl Config {
    /// Creates an empty configuration for the project at `project_path`.
    #[must_use]
    pub fn create(project_path: impl Into<String>) -> Self {
        Self {
            project_path: ProjectPath::new(project_path),
            parameters: Collection::create(),
            includes: Vec::new(),
            sets: Vec::new(),
        }
    }

    #[must_use]
    pub fn project_path(&self) -> &ProjectPath {
        &self.project_path
    }

    /// Registers already configured sets.
    ///
    /// Path-aware sets receive the project path; file references they
    /// resolved before registration are left as they are.
    pub fn with_sets<I>(&mut self, sets: I) -> &mut Self
    where
        I: IntoIterator<Item = Box<dyn ParameterizableSet>>,
    {
        for mut set in sets {
            self.inject_project_path(&mut *set);
            tracing::debug!(?set, "Registering parameter set");
            self.sets.push(set);
        }
        self
    }

    /// Creates a set of type `S`, injects the project path and lets
    /// `configure` set it up before it is registered.
    pub fn with_set<S, F>(&mut self, configure: F) -> &mut Self
    where
        S: ParameterizableSet + Default + 'static,
        F: FnOnce(&mut S),
    {
        let mut set = S::default();
        self.inject_project_path(&mut set);
        configure(&mut set);
        self.with_sets([Box::new(set) as Box<dyn ParameterizableSet>])
    }

    /// Adds paths to analyse.
    ///
    /// See <https://phpstan.org/config-reference#analysed-files>.
    pub fn in_paths<I, S>(&mut self, paths: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let paths = self.resolve_all(paths);
        self.parameters.add("paths", paths);
        self
    }

    /// Excludes paths from analysis and scanning.
    pub fn not_paths<I, S>(&mut self, paths: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let paths = self.resolve_all(paths);
        self.parameters.add("excludePaths/analyseAndScan", paths);
        self
    }

    /// Sets the rule level, usually between 0 and 9.
    ///
    /// See <https://phpstan.org/user-guide/rule-levels>.
    pub fn level(&mut self, level: u8) -> &mut Self {
        self.parameters.set("level", level);
        self
    }

    /// Sets the rule level to `max`, the highest level of the installed
    /// analyser version.
    pub fn max_level(&mut self) -> &mut Self {
        self.parameters.set("level", "max");
        self
    }

    /// Includes the bleeding edge configuration.
    ///
    /// See <https://phpstan.org/blog/what-is-bleeding-edge>.
    pub fn with_bleeding_edge(&mut self) -> &mut Self {
        self.includes.push(BLEEDING_EDGE_INCLUDE.to_string());
        self
    }

    /// Includes the bleeding edge configuration and toggles single features.
    pub fn with_bleeding_edge_toggles<I, S>(&mut self, toggles: I) -> &mut Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        self.with_bleeding_edge();
        for (feature, enabled) in toggles {
            let path = format!("featureToggles/{}", feature.as_ref());
            self.parameters.set(&path, enabled);
        }
        self
    }

    /// Includes the default baseline file `phpstan-baseline.neon`.
    ///
    /// See <https://phpstan.org/user-guide/baseline>.
    pub fn with_baseline(&mut self) -> &mut Self {
        self.with_baseline_file(DEFAULT_BASELINE_FILE)
    }

    /// Includes a baseline file, resolved against the project path.
    pub fn with_baseline_file(&mut self, file: &str) -> &mut Self {
        self.with([file])
    }

    /// Includes further configuration files.
    ///
    /// See <https://phpstan.org/config-reference#multiple-files>.
    pub fn with<I, S>(&mut self, files: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let files = self.resolve_all(files);
        self.includes.extend(files);
        self
    }

    /// See <https://phpstan.org/config-reference#bootstrap>.
    pub fn bootstrap_files<I, S>(&mut self, files: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.parameters
            .add("bootstrapFiles", files.into_iter().map(|f| f.as_ref().to_string()));
        self
    }

    /// See <https://phpstan.org/config-reference#stub-files>.
    pub fn stub_files<I, S>(&mut self, files: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.parameters
            .add("stubFiles", files.into_iter().map(|f| f.as_ref().to_string()));
        self
    }

    /// See <https://phpstan.org/config-reference#caching>.
    pub fn use_cache_dir(&mut self, cache_dir: &str) -> &mut Self {
        let cache_dir = self.project_path.resolve(cache_dir);
        self.parameters.set("tmpDir", cache_dir);
        self
    }

    /// Appends an `ignoreErrors` entry.
    pub fn ignore_error(&mut self, entry: IgnoreError) -> &mut Self {
        let value = entry.to_value(&self.project_path);
        self.parameters.add("ignoreErrors", [value]);
        self
    }

    /// See <https://phpstan.org/user-guide/ignoring-errors#reporting-unused-ignores>.
    pub fn report_unmatched_ignored_errors(&mut self, enable: bool) -> &mut Self {
        self.parameters.set("reportUnmatchedIgnoredErrors", enable);
        self
    }

    /// See <https://phpstan.org/config-reference#errorformat>.
    pub fn format_as(&mut self, format: ErrorFormat) -> &mut Self {
        self.parameters.set("errorFormat", format.as_str());
        self
    }

    /// See <https://phpstan.org/config-reference#treatphpdoctypesascertain>.
    pub fn treat_phpdoc_types_as_certain(&mut self, enable: bool) -> &mut Self {
        self.parameters.set("treatPhpDocTypesAsCertain", enable);
        self
    }

    /// See <https://phpstan.org/blog/bring-your-exceptions-under-control>.
    pub fn check_too_wide_throw_types(&mut self, enable: bool) -> &mut Self {
        self.parameters
            .set("exceptions/check/tooWideThrowType", enable);
        self
    }

    /// Requires checked exceptions to be declared in `@throws`.
    pub fn check_missing_checked_exception_in_throws(&mut self, enable: bool) -> &mut Self {
        self.parameters
            .set("exceptions/check/missingCheckedExceptionInThrows", enable);
        self
    }

    /// Reports `catch` blocks for unchecked exceptions that are never thrown.
    pub fn report_unchecked_exception_dead_catch(&mut self, enable: bool) -> &mut Self {
        self.parameters
            .set("exceptions/reportUncheckedExceptionDeadCatch", enable);
        self
    }

    /// Enables or disables a custom rule by writing `<name>/enabled`.
    pub fn use_custom_rule(&mut self, name: &str, enable: bool) -> &mut Self {
        let path = format!("{}/enabled", name);
        self.parameters.set(&path, enable);
        self
    }

    /// Builds the document, merging the parameters of all registered sets in
    /// registration order.
    #[must_use]
    pub fn to_document(&self) -> ConfigDocument {
        let parameters = self
            .sets
            .iter()
            .fold(self.parameters.clone(), |parameters, set| {
                parameters.merge(&set.parameters())
            });

        tracing::debug!(
            includes = self.includes.len(),
            sets = self.sets.len(),
            "Built configuration document"
        );

        ConfigDocument {
            includes: self.includes.clone(),
            parameters: parameters.into_mapping(),
        }
    }

    fn inject_project_path(&self, set: &mut dyn ParameterizableSet) {
        if let Some(path_aware) = set.as_path_aware() {
            path_aware.set_project_path(self.project_path.clone());
        }
    }

    fn resolve_all<I, S>(&self, paths: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paths
            .into_iter()
            .map(|path| self.project_path.resolve(path.as_ref()))
            .collect()
    }
}
