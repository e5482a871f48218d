//! Built-in error formatters of the analyser.
//!
//! See <https://phpstan.org/user-guide/output-format>.

use std::fmt;

/// Value of the `errorFormat` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorFormat {
    Checkstyle,
    GitHub,
    GitLab,
    Json,
    JUnit,
    PrettyJson,
    Raw,
    Table,
    TeamCity,
}

impl ErrorFormat {
    /// Returns the formatter name as expected by the `errorFormat` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Checkstyle => "checkstyle",
            Self::GitHub => "github",
            Self::GitLab => "gitlab",
            Self::Json => "json",
            Self::JUnit => "junit",
            Self::PrettyJson => "prettyJson",
            Self::Raw => "raw",
            Self::Table => "table",
            Self::TeamCity => "teamcity",
        }
    }
}

impl fmt::Display for ErrorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
