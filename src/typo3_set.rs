//! Parameters of the `saschaegerer/phpstan-typo3` extension.
//!
//! See <https://github.com/sascha-egerer/phpstan-typo3>.

use crate::collection::Collection;
use crate::set::ParameterizableSet;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Typo3Set {
    parameters: Collection,
}

impl Typo3Set {
    #[must_use]
    pub fn create() -> Self {
        Self::default()
    }

    /// Maps a custom Context API aspect name to its class.
    pub fn with_custom_aspect(&mut self, name: &str, class_name: &str) -> &mut Self {
        self.set_mapping("contextApiGetAspectMapping", name, class_name)
    }

    /// Maps a custom request attribute name to its type.
    pub fn with_custom_request_attribute(&mut self, name: &str, type_name: &str) -> &mut Self {
        self.set_mapping("requestGetAttributeMapping", name, type_name)
    }

    /// Maps a custom site attribute name to its type.
    pub fn with_custom_site_attribute(&mut self, name: &str, type_name: &str) -> &mut Self {
        self.set_mapping("siteGetAttributeMapping", name, type_name)
    }

    fn set_mapping(&mut self, mapping: &str, name: &str, value: &str) -> &mut Self {
        // Attribute names such as `routing/site` contain the path delimiter.
        let path = format!(
            "typo3/{}/{}",
            mapping,
            self.parameters.quote_segment(name)
        );
        self.parameters.set(&path, value);
        self
    }
}

impl ParameterizableSet for Typo3Set {
    fn parameters(&self) -> Collection {
        self.parameters.clone()
    }
}
