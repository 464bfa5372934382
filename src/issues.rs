//! Issue types reported by the `scan` and `verify` commands.

use std::fmt;

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Location of a finding inside a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceContext {
    pub file_path: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub col: usize,
    /// The full source line, without its line terminator.
    pub source_line: String,
}

/// Thai text left in a template after conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntranslatedTextIssue {
    pub context: SourceContext,
    /// The run of Thai text found.
    pub text: String,
    /// Table key for `text`, when the table knows it.
    pub known_key: Option<String>,
}

impl UntranslatedTextIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule_name() -> &'static str {
        "untranslated-text"
    }

    pub fn hint(&self) -> String {
        match &self.known_key {
            Some(key) => format!(
                "key `{}` exists, but the text is not in a position any rule rewrites",
                key
            ),
            None => "add an entry to `extraTranslations` and run the conversion again".to_string(),
        }
    }
}

/// Lookup key used in a template but not defined in the language file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeyIssue {
    pub context: SourceContext,
    /// The missing translation key.
    pub key: String,
    /// Language file the key was looked up in, as configured.
    pub languages_file: String,
}

impl MissingKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule_name() -> &'static str {
        "missing-key"
    }

    pub fn hint(&self) -> String {
        format!("add `{}: '...'` to {}", self.key, self.languages_file)
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Common view of an issue for the cargo-style printer.
pub trait Report {
    fn context(&self) -> &SourceContext;

    /// Primary message (the text or key).
    fn message(&self) -> &str;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> &'static str;

    fn report_hint(&self) -> String;
}

impl Report for UntranslatedTextIssue {
    fn context(&self) -> &SourceContext {
        &self.context
    }

    fn message(&self) -> &str {
        &self.text
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> &'static str {
        Self::rule_name()
    }

    fn report_hint(&self) -> String {
        self.hint()
    }
}

impl Report for MissingKeyIssue {
    fn context(&self) -> &SourceContext {
        &self.context
    }

    fn message(&self) -> &str {
        &self.key
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> &'static str {
        Self::rule_name()
    }

    fn report_hint(&self) -> String {
        self.hint()
    }
}
