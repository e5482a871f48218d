//! Documentation comment resolution.
//!
//! Rules do not parse comments themselves; they ask a [`DocCommentResolver`]
//! for the tag tree of a comment. In the analyser this is a service that also
//! resolves types in the comment's scope, so the trait receives the full
//! [`Scope`]. [`PhpDocParser`] is a resolver that only splits the comment
//! into tags and text, which is all the rules of this package need.

use crate::rule::Scope;
use regex::Regex;
use std::sync::LazyLock;

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(@\S+)(.*)$").unwrap());

/// A tag such as `@phpstan-ignore-next-line argument.type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagNode {
    /// Tag name including the leading `@`.
    pub name: String,
    /// Remaining text on the tag's line, trimmed. Possibly empty.
    pub value: String,
    /// 1-based source line of the tag.
    pub line: usize,
}

/// A child of a [`PhpDocNode`]: a tag or a line of free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhpDocChild {
    Tag(TagNode),
    Text(String),
}

/// One parsed documentation comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhpDocNode {
    pub children: Vec<PhpDocChild>,
}

impl PhpDocNode {
    /// Returns the tag children, skipping text.
    pub fn tags(&self) -> impl Iterator<Item = &TagNode> {
        self.children.iter().filter_map(|child| match child {
            PhpDocChild::Tag(tag) => Some(tag),
            PhpDocChild::Text(_) => None,
        })
    }
}

/// The result of resolving a comment. Empty if the comment was malformed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedPhpDoc {
    nodes: Vec<PhpDocNode>,
}

impl ResolvedPhpDoc {
    #[must_use]
    pub fn new(nodes: Vec<PhpDocNode>) -> Self {
        Self { nodes }
    }

    #[must_use]
    pub fn php_doc_nodes(&self) -> &[PhpDocNode] {
        &self.nodes
    }
}

/// Resolves documentation comment text into tag nodes.
pub trait DocCommentResolver {
    /// Resolves `text`, a comment starting on line `line` inside `scope`.
    fn resolve(&self, scope: &Scope, text: &str, line: usize) -> ResolvedPhpDoc;
}

/// Line-based documentation comment parser.
///
/// Only `/** ... */` comments are understood. Every line is stripped of its
/// leading `*`; a line starting with `@` opens a tag whose name runs up to the
/// next whitespace and whose value is the rest of that line.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhpDocParser;

impl PhpDocParser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn parse(&self, text: &str, line: usize) -> ResolvedPhpDoc {
        let Some(inner) = text
            .trim()
            .strip_prefix("/**")
            .and_then(|rest| rest.strip_suffix("*/"))
        else {
            tracing::trace!(%text, "Skipping comment that is not a doc comment");
            return ResolvedPhpDoc::default();
        };

        let mut node = PhpDocNode::default();
        for (offset, raw_line) in inner.lines().enumerate() {
            let content = raw_line.trim_start();
            let content = content.strip_prefix('*').unwrap_or(content).trim();
            if content.is_empty() {
                continue;
            }

            let child = match TAG_REGEX.captures(content) {
                Some(captures) => PhpDocChild::Tag(TagNode {
                    name: captures[1].to_string(),
                    value: captures[2].trim().to_string(),
                    line: line + offset,
                }),
                None => PhpDocChild::Text(content.to_string()),
            };
            node.children.push(child);
        }

        ResolvedPhpDoc::new(vec![node])
    }
}

impl DocCommentResolver for PhpDocParser {
    fn resolve(&self, _scope: &Scope, text: &str, line: usize) -> ResolvedPhpDoc {
        self.parse(text, line)
    }
}
