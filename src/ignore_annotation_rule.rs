//! Reports ignore annotations that do not name an error identifier.
//!
//! `@phpstan-ignore-next-line` without an identifier silences every error on
//! the following line, including ones introduced later. This rule requires
//! the identifier form, e.g. `@phpstan-ignore-next-line argument.type`.

use crate::phpdoc::{DocCommentResolver, PhpDocParser};
use crate::rule::{Rule, RuleError, RuleErrorBuilder, Scope, Statement};

/// Annotations checked when none are configured.
pub const DEFAULT_MONITORED_ANNOTATIONS: &[&str] =
    &["phpstan-ignore-line", "phpstan-ignore-next-line"];

/// Error identifier of the reported errors.
pub const IDENTIFIER: &str = "ignoreAnnotation.withoutErrorIdentifier";

/// Tip attached to the reported errors.
pub const TIP: &str = "Read more at https://phpstan.org/user-guide/ignoring-errors and learn how to properly ignore errors.";

/// Reports monitored ignore annotations whose value is empty.
///
/// Comments of each statement are resolved through `R`; every offending tag
/// yields one non-ignorable error on the statement's line.
pub struct IgnoreAnnotationWithoutErrorIdentifierRule<R: DocCommentResolver = PhpDocParser> {
    resolver: R,
    monitored_annotations: Vec<String>,
}

impl Default for IgnoreAnnotationWithoutErrorIdentifierRule<PhpDocParser> {
    fn default() -> Self {
        Self::new(PhpDocParser::new(), DEFAULT_MONITORED_ANNOTATIONS.iter().copied())
    }
}

impl<R: DocCommentResolver> IgnoreAnnotationWithoutErrorIdentifierRule<R> {
    /// Creates the rule. Annotation names are given without the leading `@`.
    pub fn new<I, S>(resolver: R, monitored_annotations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            resolver,
            monitored_annotations: monitored_annotations.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn monitored_annotations(&self) -> &[String] {
        &self.monitored_annotations
    }

    fn is_monitored(&self, name: &str) -> bool {
        self.monitored_annotations.iter().any(|m| m == name)
    }
}

impl<R: DocCommentResolver> Rule for IgnoreAnnotationWithoutErrorIdentifierRule<R> {
    type Node = Statement;

    fn name() -> &'static str {
        "ignore_annotation_without_error_identifier"
    }

    fn description() -> &'static str {
        "Reports ignore annotations that do not specify an error identifier"
    }

    fn process_node(&self, node: &Statement, scope: &Scope) -> Vec<RuleError> {
        let mut errors = Vec::new();

        for comment in &node.comments {
            let text = normalize_comment(&comment.text);
            let resolved = self.resolver.resolve(scope, &text, comment.line);

            for php_doc_node in resolved.php_doc_nodes() {
                for tag in php_doc_node.tags() {
                    let name = tag.name.trim_start_matches('@');
                    if !self.is_monitored(name) || !tag.value.trim().is_empty() {
                        continue;
                    }

                    tracing::debug!(
                        file = %scope.file,
                        line = node.line,
                        annotation = name,
                        "Found ignore annotation without error identifier"
                    );
                    errors.push(create_rule_error(name, node.line));
                }
            }
        }

        errors
    }
}

/// Turns `//` and `/* */` comments into doc comments so the resolver accepts
/// them.
fn normalize_comment(text: &str) -> String {
    if text.starts_with("/**") {
        return text.to_string();
    }

    let inner = text
        .strip_prefix("/*")
        .or_else(|| text.strip_prefix("//"))
        .unwrap_or(text);
    let inner = inner.strip_suffix("*/").unwrap_or(inner);

    format!("/** {} */", inner)
}

fn create_rule_error(annotation: &str, line: usize) -> RuleError {
    RuleErrorBuilder::message(format!(
        "Using an @{} annotation without specifying an error identifier is not allowed.",
        annotation
    ))
    .identifier(IDENTIFIER)
    .tip(TIP)
    .line(line)
    .non_ignorable()
    .build()
}
