//! Path-addressable parameter tree.
//!
//! A [`Collection`] is the backing store of every configuration document and
//! parameter set. Keys are addressed with delimited paths such as
//! `exceptions/check/tooWideThrowType`; intermediate mappings are created on
//! demand.
//!
//! # Path syntax
//!
//! Paths are split like a single CSV record whose separator is the
//! collection's delimiter. A segment enclosed in double quotes may therefore
//! contain the delimiter literally (`"typo3/\"a/b\""` addresses the key `a/b`
//! below `typo3`), and `""` inside quotes is a literal quote. A path is
//! always one record: line breaks are kept as part of their segment.
//! [`Collection::quote_segment`] produces the quoted form of a key.
//!
//! # Write policy
//!
//! Writes never fail. A non-mapping value found on the way to the terminal
//! segment is replaced by an empty mapping, and [`Collection::add`] discards a
//! terminal that is not already a list.
//!
//! ```
//! use phpstan_config::{Collection, Value};
//!
//! let mut parameters = Collection::create();
//! parameters.set("level", 6).add("paths", ["src", "tests"]);
//!
//! assert_eq!(parameters.get("level"), Some(&Value::Integer(6)));
//! assert_eq!(parameters.get("paths"), Some(&Value::from(vec!["src", "tests"])));
//! ```

use crate::error::{ConfigError, Result};
use crate::value::{Mapping, Value};

/// Never part of a UTF-8 string, so a path is always read as one record and
/// line breaks stay inside their segment.
const RECORD_TERMINATOR: u8 = 0xFF;

/// A mutable tree of parameters addressed by delimited paths.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    delimiter: u8,
    root: Mapping,
}

impl Default for Collection {
    fn default() -> Self {
        Self::create()
    }
}

impl Collection {
    /// Creates an empty collection using `/` as path delimiter.
    #[must_use]
    pub fn create() -> Self {
        Self {
            delimiter: b'/',
            root: Mapping::new(),
        }
    }

    /// Creates an empty collection with a custom path delimiter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDelimiter`] unless `delimiter` is exactly
    /// one ASCII character other than a quote or a line break.
    pub fn with_delimiter(delimiter: &str) -> Result<Self> {
        Ok(Self {
            delimiter: parse_delimiter(delimiter)?,
            root: Mapping::new(),
        })
    }

    /// Wraps an existing tree, e.g. to seed defaults. The tree is taken over.
    #[must_use]
    pub fn from_mapping(root: Mapping) -> Self {
        Self {
            delimiter: b'/',
            root,
        }
    }

    /// Wraps an existing tree and uses a custom path delimiter.
    ///
    /// # Errors
    ///
    /// See [`Collection::with_delimiter`].
    pub fn from_mapping_with_delimiter(root: Mapping, delimiter: &str) -> Result<Self> {
        Ok(Self {
            delimiter: parse_delimiter(delimiter)?,
            root,
        })
    }

    /// Returns the path delimiter.
    #[must_use]
    pub fn delimiter(&self) -> char {
        char::from(self.delimiter)
    }

    /// Quotes `segment` so it is read back as a single literal key, even if
    /// it contains the delimiter or quotes.
    #[must_use]
    pub fn quote_segment(&self, segment: &str) -> String {
        if segment.contains([self.delimiter(), '"']) {
            format!("\"{}\"", segment.replace('"', "\"\""))
        } else {
            segment.to_string()
        }
    }

    /// Replaces whatever is stored at `path` with `value`.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> &mut Self {
        *self.terminal_mut(path) = value.into();
        self
    }

    /// Appends `values` to the list stored at `path`.
    ///
    /// A terminal that is not a list yet is replaced by an empty list first.
    pub fn add<I>(&mut self, path: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let terminal = self.terminal_mut(path);
        if !matches!(terminal, Value::List(_)) {
            *terminal = Value::List(Vec::new());
        }
        if let Value::List(items) = terminal {
            items.extend(values.into_iter().map(Into::into));
        }
        self
    }

    /// Returns the value stored at `path`, if any.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = self.split_path(path);
        let last = segments.pop().unwrap_or_default();
        let mut node = &self.root;
        for segment in &segments {
            node = node.get(segment)?.as_map()?;
        }
        node.get(&last)
    }

    /// Deep-merges `other` into a copy of this collection.
    ///
    /// Colliding mappings are merged recursively. Any other collision ends up
    /// as a list holding this collection's items before `other`'s items,
    /// where a non-list side counts as a single item. Neither operand is
    /// modified; the result keeps this collection's delimiter.
    #[must_use]
    pub fn merge(&self, other: &Collection) -> Collection {
        tracing::trace!(
            left_keys = self.root.len(),
            right_keys = other.root.len(),
            "Merging parameter collections"
        );
        Collection {
            delimiter: self.delimiter,
            root: merge_mappings(self.root.clone(), other.root.clone()),
        }
    }

    /// Returns the tree as stored.
    #[must_use]
    pub fn to_mapping(&self) -> &Mapping {
        &self.root
    }

    /// Consumes the collection and returns its tree.
    #[must_use]
    pub fn into_mapping(self) -> Mapping {
        self.root
    }

    /// Returns `true` if no parameter has been stored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Walks `path`, creating mappings for every segment but the last, and
    /// returns the terminal slot. A missing terminal is created as `Null`.
    fn terminal_mut(&mut self, path: &str) -> &mut Value {
        let mut segments = self.split_path(path);
        let last = segments.pop().unwrap_or_default();
        let mut node = &mut self.root;
        for segment in segments {
            node = ensure_map(node.entry(segment).or_insert(Value::Null));
        }
        node.entry(last).or_insert(Value::Null)
    }

    /// Splits `path` into segments. Always yields at least one segment.
    fn split_path(&self, path: &str) -> Vec<String> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .terminator(csv::Terminator::Any(RECORD_TERMINATOR))
            .from_reader(path.as_bytes());

        let mut record = csv::ByteRecord::new();
        // Reading from a byte slice cannot fail.
        if !reader.read_byte_record(&mut record).unwrap_or(false) {
            return vec![String::new()];
        }

        // Fields end at ASCII bytes, so each one is still valid UTF-8.
        record
            .iter()
            .map(|field| String::from_utf8_lossy(field).into_owned())
            .collect()
    }
}

fn parse_delimiter(delimiter: &str) -> Result<u8> {
    match delimiter.as_bytes() {
        [byte] if byte.is_ascii() && !matches!(*byte, b'"' | b'\n' | b'\r') => Ok(*byte),
        _ => Err(ConfigError::invalid_delimiter(delimiter)),
    }
}

fn ensure_map(value: &mut Value) -> &mut Mapping {
    if !matches!(value, Value::Map(_)) {
        *value = Value::Map(Mapping::new());
    }
    match value {
        Value::Map(map) => map,
        _ => unreachable!("value was replaced by a mapping above"),
    }
}

fn merge_mappings(mut left: Mapping, right: Mapping) -> Mapping {
    for (key, value) in right {
        match left.get_mut(&key) {
            Some(existing) => {
                let current = std::mem::replace(existing, Value::Null);
                *existing = merge_values(current, value);
            }
            None => {
                left.insert(key, value);
            }
        }
    }
    left
}

fn merge_values(left: Value, right: Value) -> Value {
    match (left, right) {
        (Value::Map(left), Value::Map(right)) => Value::Map(merge_mappings(left, right)),
        (left, right) => {
            let mut items = left.into_items();
            items.extend(right.into_items());
            Value::List(items)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(entries: Vec<(&str, Value)>) -> Mapping {
        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }

    #[test]
    fn test_create_returns_empty_collection() {
        let collection = Collection::create();
        assert!(collection.is_empty());
        assert_eq!(collection.delimiter(), '/');
    }

    #[test]
    fn test_with_delimiter_rejects_empty_delimiter() {
        let err = Collection::with_delimiter("").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDelimiter { .. }));
    }

    #[test]
    fn test_with_delimiter_rejects_multi_character_delimiter() {
        assert!(Collection::with_delimiter("::").is_err());
        assert!(Collection::with_delimiter("\"").is_err());
        assert!(Collection::with_delimiter("ä").is_err());
    }

    #[test]
    fn test_custom_delimiter_does_not_split_on_slash() {
        let mut collection = Collection::with_delimiter(".").unwrap();
        collection.set("foo.foo", "baz");
        collection.set("foo/foo", "baz");

        let expected = mapping(vec![
            ("foo", Value::Map(mapping(vec![("foo", Value::from("baz"))]))),
            ("foo/foo", Value::from("baz")),
        ]);
        assert_eq!(collection.to_mapping(), &expected);
    }

    #[test]
    fn test_from_mapping_with_delimiter_keeps_existing_entries() {
        let seed = mapping(vec![("baz", Value::from("baz"))]);
        let mut collection = Collection::from_mapping_with_delimiter(seed, ".").unwrap();
        collection.set("foo.foo", "baz");
        collection.set("foo/foo", "baz");

        let keys: Vec<&str> = collection.to_mapping().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["baz", "foo", "foo/foo"]);
    }

    #[test]
    fn test_set_replaces_value_of_key() {
        let mut collection = Collection::create();
        collection.set("foo", "baz");
        assert_eq!(collection.get("foo"), Some(&Value::from("baz")));

        collection.set("foo", "foo");
        assert_eq!(
            collection.to_mapping(),
            &mapping(vec![("foo", Value::from("foo"))])
        );
    }

    #[test]
    fn test_set_replaces_mapping_with_scalar() {
        let mut collection = Collection::create();
        collection.set("foo/baz", "baz");
        assert_eq!(
            collection.to_mapping(),
            &mapping(vec![(
                "foo",
                Value::Map(mapping(vec![("baz", Value::from("baz"))]))
            )])
        );

        collection.set("foo", "baz");
        assert_eq!(
            collection.to_mapping(),
            &mapping(vec![("foo", Value::from("baz"))])
        );
    }

    #[test]
    fn test_set_through_scalar_replaces_it_with_mapping() {
        let mut collection = Collection::create();
        collection.set("level", 6);
        collection.set("level/nested", true);

        assert_eq!(collection.get("level/nested"), Some(&Value::Bool(true)));
        assert!(collection.get("level").unwrap().as_map().is_some());
    }

    #[test]
    fn test_add_appends_values_in_call_order() {
        let mut collection = Collection::create();
        collection.add("foo", ["baz"]);
        collection.add("foo", ["dummy"]);

        assert_eq!(collection.get("foo"), Some(&Value::from(vec!["baz", "dummy"])));
    }

    #[test]
    fn test_add_appends_values_at_nested_path() {
        let mut collection = Collection::create();
        collection.add("foo/baz", ["baz"]).add("foo/baz", ["dummy"]);

        assert_eq!(
            collection.to_mapping(),
            &mapping(vec![(
                "foo",
                Value::Map(mapping(vec![("baz", Value::from(vec!["baz", "dummy"]))]))
            )])
        );
    }

    #[test]
    fn test_add_discards_existing_scalar() {
        let mut collection = Collection::create();
        collection.set("foo", "baz");
        collection.add("foo", ["baz"]);

        assert_eq!(collection.get("foo"), Some(&Value::from(vec!["baz"])));
    }

    #[test]
    fn test_add_discards_existing_mapping() {
        let mut collection = Collection::create();
        collection.set("foo/bar", 1);
        collection.add("foo", ["baz"]);

        assert_eq!(collection.get("foo"), Some(&Value::from(vec!["baz"])));
    }

    #[test]
    fn test_add_without_values_creates_empty_list() {
        let mut collection = Collection::create();
        collection.add("paths", Vec::<Value>::new());

        assert_eq!(collection.get("paths"), Some(&Value::List(Vec::new())));
    }

    #[test]
    fn test_quoted_segment_keeps_delimiter() {
        let mut collection = Collection::create();
        collection.set(r#"typo3/"a/b""#, "c");

        let typo3 = collection.get("typo3").unwrap().as_map().unwrap();
        assert_eq!(typo3.get("a/b"), Some(&Value::from("c")));
    }

    #[test]
    fn test_line_breaks_are_part_of_the_key() {
        let mut collection = Collection::create();
        collection.set("typo3/siteGetAttributeMapping/foo", "keep");
        collection.set("typo3\nlost", "x").set("level\r", 6).set("a\r\nb/c", true);

        let root = collection.to_mapping();
        let keys: Vec<&str> = root.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["typo3", "typo3\nlost", "level\r", "a\r\nb"]);
        assert_eq!(
            collection.get("typo3/siteGetAttributeMapping/foo"),
            Some(&Value::from("keep"))
        );
        assert_eq!(collection.get("typo3\nlost"), Some(&Value::from("x")));
        assert_eq!(collection.get("level\r"), Some(&Value::Integer(6)));
        assert_eq!(collection.get("a\r\nb/c"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_quote_segment_round_trips_through_path() {
        let collection = Collection::create();
        assert_eq!(collection.quote_segment("plain"), "plain");
        assert_eq!(collection.quote_segment("a/b"), r#""a/b""#);
        assert_eq!(collection.quote_segment(r#"say "hi""#), r#""say ""hi""""#);

        let mut collection = Collection::with_delimiter(".").unwrap();
        assert_eq!(collection.quote_segment("a/b"), "a/b");
        let path = format!("root.{}", collection.quote_segment("x.\"y\"\nz"));
        collection.set(&path, 1);

        let root = collection.get("root").unwrap().as_map().unwrap();
        assert_eq!(root.get("x.\"y\"\nz"), Some(&Value::Integer(1)));
    }

    #[test]
    fn test_empty_segments_become_empty_keys() {
        let mut collection = Collection::create();
        collection.set("/foo", 1);
        collection.set("", 2);

        let root = collection.to_mapping();
        assert_eq!(root.get(""), Some(&Value::Integer(2)));
    }

    #[test]
    fn test_trailing_delimiter_addresses_empty_key() {
        let mut collection = Collection::create();
        collection.set("foo/", 1);

        let foo = collection.get("foo").unwrap().as_map().unwrap();
        assert_eq!(foo.get(""), Some(&Value::Integer(1)));
    }

    #[test]
    fn test_get_returns_none_for_missing_or_scalar_parent() {
        let mut collection = Collection::create();
        collection.set("level", 6);

        assert_eq!(collection.get("missing"), None);
        assert_eq!(collection.get("level/deeper"), None);
    }

    #[test]
    fn test_merge_concatenates_lists() {
        let other = Collection::from_mapping(mapping(vec![("foo", Value::from(vec!["dummy"]))]));
        let mut collection = Collection::create();
        collection.add("foo", ["baz"]);

        let merged = collection.merge(&other);

        assert_eq!(merged.get("foo"), Some(&Value::from(vec!["baz", "dummy"])));
        assert_eq!(collection.get("foo"), Some(&Value::from(vec!["baz"])));
        assert_eq!(other.get("foo"), Some(&Value::from(vec!["dummy"])));
    }

    #[test]
    fn test_merge_is_not_commutative_for_lists() {
        let a = Collection::from_mapping(mapping(vec![("foo", Value::from(vec!["a"]))]));
        let b = Collection::from_mapping(mapping(vec![("foo", Value::from(vec!["b"]))]));

        assert_ne!(a.merge(&b), b.merge(&a));
    }

    #[test]
    fn test_merge_wraps_colliding_scalars() {
        let a = Collection::from_mapping(mapping(vec![("level", Value::from(5))]));
        let b = Collection::from_mapping(mapping(vec![("level", Value::from(vec![6, 7]))]));

        assert_eq!(
            a.merge(&b).get("level"),
            Some(&Value::from(vec![5, 6, 7]))
        );
    }

    #[test]
    fn test_merge_recurses_into_mappings() {
        let mut a = Collection::create();
        a.set("symfony/containerXmlPath", "var/a.xml");
        a.set("doctrine/ormRepositoryClass", "A");
        let mut b = Collection::create();
        b.set("symfony/constantHassers", false);

        let merged = a.merge(&b);

        let symfony = merged.get("symfony").unwrap().as_map().unwrap();
        let keys: Vec<&str> = symfony.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["containerXmlPath", "constantHassers"]);
        assert_eq!(
            merged.get("doctrine/ormRepositoryClass"),
            Some(&Value::from("A"))
        );
    }

    #[test]
    fn test_merge_keeps_left_delimiter() {
        let a = Collection::with_delimiter(".").unwrap();
        let b = Collection::create();
        assert_eq!(a.merge(&b).delimiter(), '.');
    }

    #[test]
    fn test_from_mapping_round_trips() {
        let tree = mapping(vec![
            ("foo", Value::from("baz")),
            ("paths", Value::from(vec!["src"])),
        ]);
        assert_eq!(Collection::from_mapping(tree.clone()).into_mapping(), tree);
    }
}
