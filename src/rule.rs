//! Rule Trait
//!
//! This module defines the [`Rule`] trait, the interface custom rules of this
//! package implement, together with the node, scope and error types a rule
//! works with.
//!
//! # Overview
//!
//! A rule is registered for one node type. The host analyser hands every
//! node of that type to [`Rule::process_node`], together with the [`Scope`]
//! it was found in, and reports the returned [`RuleError`]s.
//!
//! # Implementing a Custom Rule
//!
//! ```rust
//! use phpstan_config::rule::{Rule, RuleError, RuleErrorBuilder, Scope, Statement};
//!
//! struct NoTodoCommentsRule;
//!
//! impl Rule for NoTodoCommentsRule {
//!     type Node = Statement;
//!
//!     fn name() -> &'static str {
//!         "no_todo_comments"
//!     }
//!
//!     fn description() -> &'static str {
//!         "Reports statements preceded by a TODO comment"
//!     }
//!
//!     fn process_node(&self, node: &Statement, _scope: &Scope) -> Vec<RuleError> {
//!         node.comments
//!             .iter()
//!             .filter(|comment| comment.text.contains("TODO"))
//!             .map(|_| {
//!                 RuleErrorBuilder::message("Resolve the TODO before merging.")
//!                     .identifier("comment.todo")
//!                     .line(node.line)
//!                     .build()
//!             })
//!             .collect()
//!     }
//! }
//! ```

use serde::{Serialize, Serializer};

/// Common trait for all rules of this package.
pub trait Rule: Sized {
    /// The node type this rule inspects.
    type Node;

    /// Returns the name of this rule. Should be a unique, snake_case string.
    fn name() -> &'static str;

    /// Returns a human-readable description of this rule.
    fn description() -> &'static str;

    /// Inspects `node` and returns one error per violation.
    ///
    /// Rules never fail; input they cannot make sense of yields no errors.
    fn process_node(&self, node: &Self::Node, scope: &Scope) -> Vec<RuleError>;
}

/// Where a node was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    /// The analysed file.
    pub file: String,
    /// Fully qualified name of the enclosing class, if any.
    pub class_name: Option<String>,
    /// Fully qualified name of the enclosing trait, if any.
    pub trait_name: Option<String>,
    /// Name of the enclosing function or method, if any.
    pub function_name: Option<String>,
}

impl Scope {
    #[must_use]
    pub fn in_file(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }
}

/// A comment attached to a node, with the line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Raw comment text including its markers (`//`, `/* */`, `/** */`).
    pub text: String,
    /// 1-based line the comment starts on.
    pub line: usize,
}

impl Comment {
    #[must_use]
    pub fn new(text: impl Into<String>, line: usize) -> Self {
        Self {
            text: text.into(),
            line,
        }
    }
}

/// A statement node and the comments preceding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// 1-based line the statement starts on.
    pub line: usize,
    /// Comments directly preceding the statement, in source order.
    pub comments: Vec<Comment>,
}

impl Statement {
    #[must_use]
    pub fn new(line: usize, comments: Vec<Comment>) -> Self {
        Self { line, comments }
    }
}

/// A diagnostic reported by a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleError {
    pub message: String,
    pub line: usize,
    pub tip: Option<String>,
    pub identifier: Option<String>,
    /// Non-ignorable errors cannot be silenced by ignore annotations or
    /// `ignoreErrors` entries.
    #[serde(rename = "suppressible", serialize_with = "serialize_inverted")]
    pub non_ignorable: bool,
}

fn serialize_inverted<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_bool(!value)
}

/// Builder for [`RuleError`].
#[derive(Debug, Clone)]
pub struct RuleErrorBuilder {
    error: RuleError,
}

impl RuleErrorBuilder {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            error: RuleError {
                message: message.into(),
                line: 0,
                tip: None,
                identifier: None,
                non_ignorable: false,
            },
        }
    }

    #[must_use]
    pub fn line(mut self, line: usize) -> Self {
        self.error.line = line;
        self
    }

    #[must_use]
    pub fn tip(mut self, tip: impl Into<String>) -> Self {
        self.error.tip = Some(tip.into());
        self
    }

    #[must_use]
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.error.identifier = Some(identifier.into());
        self
    }

    #[must_use]
    pub fn non_ignorable(mut self) -> Self {
        self.error.non_ignorable = true;
        self
    }

    #[must_use]
    pub fn build(self) -> RuleError {
        self.error
    }
}
