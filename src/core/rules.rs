//! Substitution rules.
//!
//! Each table entry is tried against four fixed textual contexts. Patterns
//! are matched literally; nothing here understands markup.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubstitutionRule {
    /// `>text<` element content.
    ElementText,
    /// `placeholder="text"` attribute value.
    Placeholder,
    /// `'text'` single-quoted script literal.
    ScriptLiteral,
    /// `</i>text` label following an icon element.
    AfterIcon,
}

impl SubstitutionRule {
    /// Rules in application order.
    pub const ALL: [SubstitutionRule; 4] = [
        SubstitutionRule::ElementText,
        SubstitutionRule::Placeholder,
        SubstitutionRule::ScriptLiteral,
        SubstitutionRule::AfterIcon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SubstitutionRule::ElementText => "element-text",
            SubstitutionRule::Placeholder => "placeholder",
            SubstitutionRule::ScriptLiteral => "script-literal",
            SubstitutionRule::AfterIcon => "after-icon",
        }
    }

    /// Literal text searched for in the template.
    pub fn pattern(self, source: &str) -> String {
        match self {
            SubstitutionRule::ElementText => format!(">{}<", source),
            SubstitutionRule::Placeholder => format!("placeholder=\"{}\"", source),
            SubstitutionRule::ScriptLiteral => format!("'{}'", source),
            SubstitutionRule::AfterIcon => format!("</i>{}", source),
        }
    }

    /// Text each occurrence of [`pattern`](Self::pattern) is replaced with.
    pub fn replacement(self, key: &str) -> String {
        match self {
            // Element text has always been written with two spaces after `<%=`.
            SubstitutionRule::ElementText => format!("><%=  t('{}') %><", key),
            SubstitutionRule::Placeholder => {
                format!("placeholder=\"{}\"", lookup_expression(key))
            }
            SubstitutionRule::ScriptLiteral => format!("'{}'", lookup_expression(key)),
            SubstitutionRule::AfterIcon => format!("</i>{}", lookup_expression(key)),
        }
    }
}

impl fmt::Display for SubstitutionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// EJS output tag calling the runtime `t()` lookup with `key`.
pub fn lookup_expression(key: &str) -> String {
    format!("<%= t('{}') %>", key)
}
