//! The finished configuration document.
//!
//! A [`ConfigDocument`] is what [`Config::to_document`](crate::Config::to_document)
//! produces: the list of included configuration files plus the parameter
//! tree. Writing it to disk is left to the caller; the render helpers only
//! produce strings.

use crate::error::Result;
use crate::value::Mapping;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Included configuration files, in registration order.
    pub includes: Vec<String>,

    /// The parameter tree with all sets merged in.
    pub parameters: Mapping,
}

impl ConfigDocument {
    /// Renders the document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError::SerializationError`](crate::ConfigError::SerializationError)
    /// if rendering fails.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Renders the document as YAML. The output stays within the subset that
    /// NEON loaders accept for plain scalars, lists and mappings.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError::SerializationError`](crate::ConfigError::SerializationError)
    /// if rendering fails.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Renders the document as TOML.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError::SerializationError`](crate::ConfigError::SerializationError)
    /// if the tree contains values TOML cannot represent, such as nulls.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::value::Value;

    fn document() -> ConfigDocument {
        let mut parameters = Mapping::new();
        parameters.insert("level".to_string(), Value::from(6));
        parameters.insert("paths".to_string(), Value::from(vec!["/app/src"]));
        ConfigDocument {
            includes: vec!["phar://phpstan.phar/conf/bleedingEdge.neon".to_string()],
            parameters,
        }
    }

    #[test]
    fn test_to_json_string_renders_both_keys() {
        let json = document().to_json_string().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed,
            serde_json::json!({
                "includes": ["phar://phpstan.phar/conf/bleedingEdge.neon"],
                "parameters": {"level": 6, "paths": ["/app/src"]},
            })
        );
    }

    #[test]
    fn test_to_yaml_string_round_trips() {
        let yaml = document().to_yaml_string().unwrap();
        assert!(yaml.contains("level: 6"));

        let parsed: ConfigDocument = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, document());
    }

    #[test]
    fn test_to_toml_string_renders_parameters_table() {
        let toml = document().to_toml_string().unwrap();
        assert!(toml.contains("[parameters]"));
        assert!(toml.contains("level = 6"));
    }

    #[test]
    fn test_to_toml_string_fails_for_null_values() {
        let mut document = document();
        document
            .parameters
            .insert("tmpDir".to_string(), Value::Null);

        let err = document.to_toml_string().unwrap_err();
        assert!(matches!(err, ConfigError::SerializationError { format: "toml", .. }));
    }
}
