//! Parameters of the `phpstan/phpstan-doctrine` extension.
//!
//! See <https://github.com/phpstan/phpstan-doctrine#configuration>.

use crate::collection::Collection;
use crate::path::ProjectPath;
use crate::set::{ParameterizableSet, PathAwareSet, resolve_with};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoctrineSet {
    parameters: Collection,
    project_path: Option<ProjectPath>,
}

impl DoctrineSet {
    #[must_use]
    pub fn create() -> Self {
        Self::default()
    }

    /// Configures the script returning the application's object manager.
    pub fn with_object_manager_loader(&mut self, file: &str) -> &mut Self {
        let file = resolve_with(self.project_path.as_ref(), file);
        self.parameters.set("doctrine/objectManagerLoader", file);
        self
    }

    pub fn with_orm_repository_class(&mut self, class_name: &str) -> &mut Self {
        self.parameters.set("doctrine/ormRepositoryClass", class_name);
        self
    }

    pub fn with_odm_repository_class(&mut self, class_name: &str) -> &mut Self {
        self.parameters.set("doctrine/odmRepositoryClass", class_name);
        self
    }
}

impl ParameterizableSet for DoctrineSet {
    fn parameters(&self) -> Collection {
        self.parameters.clone()
    }

    fn as_path_aware(&mut self) -> Option<&mut dyn PathAwareSet> {
        Some(self)
    }
}

impl PathAwareSet for DoctrineSet {
    fn set_project_path(&mut self, project_path: ProjectPath) {
        self.project_path = Some(project_path);
    }
}
