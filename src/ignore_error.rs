//! Entries of the `ignoreErrors` parameter.
//!
//! See <https://phpstan.org/config-reference#ignoring-errors>.

use crate::error::{ConfigError, Result};
use crate::path::ProjectPath;
use crate::value::{Mapping, Value};

/// Delimiter of the generated message patterns.
const PATTERN_DELIMITER: char = '#';

/// A single `ignoreErrors` entry.
///
/// An entry needs at least a message pattern or an error identifier; this is
/// checked when the entry is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreError {
    message: Option<String>,
    identifier: Option<String>,
    path: Option<String>,
    count: Option<u32>,
    report_unmatched: Option<bool>,
}

impl IgnoreError {
    /// Creates an entry matching `message` and/or `identifier`.
    ///
    /// A message that does not start with `#` is treated as plain text and
    /// converted into an anchored, quoted pattern (`foo` becomes `#^foo$#`).
    /// Empty strings count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEntry`] if neither a message nor an
    /// identifier is given.
    pub fn new(message: Option<&str>, identifier: Option<&str>) -> Result<Self> {
        let message = message.filter(|m| !m.is_empty());
        let identifier = identifier.filter(|i| !i.is_empty());

        if message.is_none() && identifier.is_none() {
            return Err(ConfigError::invalid_ignore_error_entry());
        }

        Ok(Self {
            message: message.map(to_pattern),
            identifier: identifier.map(str::to_string),
            path: None,
            count: None,
            report_unmatched: None,
        })
    }

    /// Shorthand for an entry matching only a message.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEntry`] if `message` is empty.
    pub fn message(message: &str) -> Result<Self> {
        Self::new(Some(message), None)
    }

    /// Shorthand for an entry matching only an error identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEntry`] if `identifier` is empty.
    pub fn identifier(identifier: &str) -> Result<Self> {
        Self::new(None, Some(identifier))
    }

    /// Restricts the entry to a file or directory.
    #[must_use]
    pub fn in_path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    /// Expects the error to occur exactly `count` times.
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Overrides `reportUnmatchedIgnoredErrors` for this entry.
    #[must_use]
    pub fn report_unmatched(mut self, report: bool) -> Self {
        self.report_unmatched = Some(report);
        self
    }

    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Builds the parameter value, resolving the path against `project_path`.
    #[must_use]
    pub fn to_value(&self, project_path: &ProjectPath) -> Value {
        let mut entry = Mapping::new();

        if let Some(message) = &self.message {
            entry.insert("message".to_string(), Value::from(message.as_str()));
        }
        if let Some(path) = &self.path {
            entry.insert("path".to_string(), Value::from(project_path.resolve(path)));
        }
        if let Some(count) = self.count {
            entry.insert("count".to_string(), Value::from(count));
        }
        if let Some(report_unmatched) = self.report_unmatched {
            entry.insert("reportUnmatched".to_string(), Value::from(report_unmatched));
        }
        if let Some(identifier) = &self.identifier {
            entry.insert("identifier".to_string(), Value::from(identifier.as_str()));
        }

        Value::Map(entry)
    }
}

fn to_pattern(message: &str) -> String {
    if message.starts_with(PATTERN_DELIMITER) {
        return message.to_string();
    }

    format!(
        "{d}^{}${d}",
        quote_pattern(message),
        d = PATTERN_DELIMITER
    )
}

/// Escapes PCRE meta characters and the pattern delimiter.
fn quote_pattern(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '.' | '\\' | '+' | '*' | '?' | '[' | '^' | ']' | '$' | '(' | ')' | '{' | '}' | '='
            | '!' | '<' | '>' | '|' | ':' | '-' | PATTERN_DELIMITER => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\0' => quoted.push_str("\\000"),
            _ => quoted.push(c),
        }
    }
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> ProjectPath {
        ProjectPath::new("/my-project")
    }

    #[test]
    fn test_new_rejects_entry_without_message_and_identifier() {
        let err = IgnoreError::new(None, None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEntry { .. }));
    }

    #[test]
    fn test_new_treats_empty_strings_as_absent() {
        assert!(IgnoreError::new(Some(""), Some("")).is_err());
        assert!(IgnoreError::message("").is_err());
    }

    #[test]
    fn test_identifier_only_is_valid() {
        let entry = IgnoreError::identifier("foo").unwrap();
        let value = entry.to_value(&project());
        let map = value.as_map().unwrap();

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("identifier"), Some(&Value::from("foo")));
    }

    #[test]
    fn test_plain_message_is_converted_to_pattern() {
        let entry = IgnoreError::message("foo").unwrap();
        assert_eq!(entry.pattern(), Some("#^foo$#"));
    }

    #[test]
    fn test_pattern_message_is_kept() {
        let entry = IgnoreError::message("#foo#").unwrap();
        assert_eq!(entry.pattern(), Some("#foo#"));
    }

    #[test]
    fn test_plain_message_meta_characters_are_quoted() {
        let entry = IgnoreError::message("Call to method foo() on App\\Bar.").unwrap();
        assert_eq!(
            entry.pattern(),
            Some("#^Call to method foo\\(\\) on App\\\\Bar\\.$#")
        );
    }

    #[test]
    fn test_delimiter_inside_plain_message_is_quoted() {
        assert_eq!(quote_pattern("a#b"), "a\\#b");
    }

    #[test]
    fn test_slash_inside_plain_message_is_kept() {
        let entry = IgnoreError::message("Path src/Foo.php not found").unwrap();
        assert_eq!(entry.pattern(), Some("#^Path src/Foo\\.php not found$#"));
    }

    #[test]
    fn test_to_value_orders_and_resolves_all_fields() {
        let entry = IgnoreError::new(Some("foo"), Some("boo"))
            .unwrap()
            .in_path("baz")
            .with_count(3)
            .report_unmatched(true);

        let value = entry.to_value(&project());
        let map = value.as_map().unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();

        assert_eq!(
            keys,
            vec!["message", "path", "count", "reportUnmatched", "identifier"]
        );
        assert_eq!(map.get("path"), Some(&Value::from("/my-project/baz")));
        assert_eq!(map.get("count"), Some(&Value::Integer(3)));
    }

    #[test]
    fn test_absolute_path_is_not_resolved() {
        let entry = IgnoreError::message("foo").unwrap().in_path("/foo/baz");
        let value = entry.to_value(&project());
        assert_eq!(
            value.as_map().unwrap().get("path"),
            Some(&Value::from("/foo/baz"))
        );
    }
}
