//! Parameters of the `phpstan/phpstan-symfony` extension.
//!
//! See <https://github.com/phpstan/phpstan-symfony#configuration>.

use crate::collection::Collection;
use crate::path::ProjectPath;
use crate::set::{ParameterizableSet, PathAwareSet, resolve_with};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymfonySet {
    parameters: Collection,
    project_path: Option<ProjectPath>,
}

impl SymfonySet {
    #[must_use]
    pub fn create() -> Self {
        Self::default()
    }

    /// Configures the loader used to analyse console commands.
    pub fn with_console_application_loader(&mut self, file: &str) -> &mut Self {
        let file = resolve_with(self.project_path.as_ref(), file);
        self.parameters.set("symfony/consoleApplicationLoader", file);
        self
    }

    /// Configures the path of the dumped service container XML.
    pub fn with_container_xml_path(&mut self, file: &str) -> &mut Self {
        let file = resolve_with(self.project_path.as_ref(), file);
        self.parameters.set("symfony/containerXmlPath", file);
        self
    }

    pub fn disable_constant_hassers(&mut self) -> &mut Self {
        self.parameters.set("symfony/constantHassers", false);
        self
    }
}

impl ParameterizableSet for SymfonySet {
    fn parameters(&self) -> Collection {
        self.parameters.clone()
    }

    fn as_path_aware(&mut self) -> Option<&mut dyn PathAwareSet> {
        Some(self)
    }
}

impl PathAwareSet for SymfonySet {
    fn set_project_path(&mut self, project_path: ProjectPath) {
        self.project_path = Some(project_path);
    }
}
