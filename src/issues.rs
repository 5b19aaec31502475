//! Issue types for message code analysis results.
//!
//! Each issue is self-contained with all information the reporter needs to
//! display it.

use enum_dispatch::enum_dispatch;

use crate::core::SourceContext;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingCode,
    UnresolvedCode,
    ReadError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingCode => write!(f, "missing-code"),
            Rule::UnresolvedCode => write!(f, "unresolved-code"),
            Rule::ReadError => write!(f, "read-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Message code referenced in a template but not declared in the properties file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingCodeIssue {
    pub context: SourceContext,
    /// The resolved (macro-substituted) code.
    pub code: String,
    /// The attribute value as written, when it differs from `code`.
    pub raw: Option<String>,
}

impl MissingCodeIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingCode
    }
}

/// Message code that still contains a `${...}` expression after substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedCodeIssue {
    pub context: SourceContext,
    /// The code as written, e.g. `${MACRO}.title`.
    pub code: String,
    pub hint: Option<String>,
}

impl UnresolvedCodeIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::UnresolvedCode
    }
}

/// Template file that could not be read and was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ReadErrorIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::ReadError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found while checking templates.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingCode(MissingCodeIssue),
    UnresolvedCode(UnresolvedCodeIssue),
    ReadError(ReadErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::MissingCode(_) => MissingCodeIssue::severity(),
            Issue::UnresolvedCode(_) => UnresolvedCodeIssue::severity(),
            Issue::ReadError(_) => ReadErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::MissingCode(_) => MissingCodeIssue::rule(),
            Issue::UnresolvedCode(_) => UnresolvedCodeIssue::rule(),
            Issue::ReadError(_) => ReadErrorIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Template location (has source_line for context display).
    Source(&'a SourceContext),
    /// File-level only (for ReadError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (code, error, etc.).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for MissingCodeIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.code.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        self.raw.as_ref().map(|raw| format!("resolved from \"{}\"", raw))
    }
}

impl Report for UnresolvedCodeIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.code.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }
}

impl Report for ReadErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
