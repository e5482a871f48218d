//! # phpstan-config - Typed PHPStan configuration
//!
//! This crate builds PHPStan configuration documents from Rust and ships a
//! custom rule for the analyser. It provides:
//!
//! - **Collection**: A nested mapping addressed by delimited paths such as
//!   `exceptions/check/tooWideThrowType`
//! - **Config**: A fluent builder for the `includes` and `parameters` sections
//! - **Parameter sets**: Framework integrations (Symfony, Doctrine, TYPO3)
//!   merged into the final document
//! - **Ignore annotation rule**: Reports `@phpstan-ignore-*` annotations that
//!   do not name an error identifier
//!
//! ## Architecture
//!
//! - [`collection`] - Path-addressable nested mapping
//! - [`value`] - Configuration value tree
//! - [`config`] - Configuration builder
//! - [`document`] - Finished document and its JSON, YAML and TOML renderings
//! - [`ignore_error`] - Entries of the `ignoreErrors` parameter
//! - [`error_format`] - Supported `errorFormat` values
//! - [`path`] - Project-relative path resolution
//! - [`set`] - Capabilities of parameter sets
//! - [`symfony_set`], [`doctrine_set`], [`typo3_set`] - Bundled sets
//! - [`rule`] - Rule trait, nodes and rule errors
//! - [`phpdoc`] - Documentation comment resolution
//! - [`ignore_annotation_rule`] - The ignore annotation rule
//! - [`error`] - Centralized error types for the crate
//!
//! ## Usage as a Library
//!
//! ```rust
//! use phpstan_config::{Config, IgnoreError, SymfonySet};
//!
//! # fn main() -> phpstan_config::Result<()> {
//! let mut config = Config::create("/app");
//! config
//!     .in_paths(["src", "tests"])
//!     .level(8)
//!     .ignore_error(IgnoreError::identifier("missingType.iterableValue")?)
//!     .with_set(|set: &mut SymfonySet| {
//!         set.with_container_xml_path("var/cache/dev/App_KernelDevDebugContainer.xml");
//!     });
//!
//! let json = config.to_document().to_json_string()?;
//! assert!(json.contains("/app/src"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All functions that can fail return [`Result<T>`], which is a type alias for
//! `std::result::Result<T, ConfigError>`. See the [`error`] module for details.

// Module declarations
pub mod collection;
pub mod config;
pub mod doctrine_set;
pub mod document;
pub mod error;
pub mod error_format;
pub mod ignore_annotation_rule;
pub mod ignore_error;
pub mod path;
pub mod phpdoc;
pub mod rule;
pub mod set;
pub mod symfony_set;
pub mod typo3_set;
pub mod value;

// Resource exports
pub use crate::collection::Collection;
pub use crate::value::{Mapping, Value};

// Config exports
pub use crate::config::Config;
pub use crate::document::ConfigDocument;
pub use crate::error_format::ErrorFormat;
pub use crate::ignore_error::IgnoreError;
pub use crate::path::ProjectPath;

// Set exports
pub use crate::doctrine_set::DoctrineSet;
pub use crate::set::{ParameterizableSet, PathAwareSet};
pub use crate::symfony_set::SymfonySet;
pub use crate::typo3_set::Typo3Set;

// Rule exports
pub use crate::ignore_annotation_rule::IgnoreAnnotationWithoutErrorIdentifierRule;
pub use crate::phpdoc::{DocCommentResolver, PhpDocParser, ResolvedPhpDoc};
pub use crate::rule::{Comment, Rule, RuleError, RuleErrorBuilder, Scope, Statement};

// Error exports
pub use crate::error::{ConfigError, ConfigError as Error, Result};
