//! Security and code-quality audit report prompt.

use std::fmt;
use std::str::FromStr;

use crate::config::Language;

use super::review::language_label;
use super::text::truncate_chars;

/// Context used when the selected scope has no changes.
pub const NO_CHANGES_AUDIT_CONTEXT: &str = "No git changes found for the selected scope. Provide a general audit of architecture, security posture, and likely risk areas based on the repository structure.";

/// Document format the audit report should be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuditFormat {
    #[default]
    Markdown,
    Latex,
}

impl AuditFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditFormat::Markdown => "markdown",
            AuditFormat::Latex => "latex",
        }
    }

    fn structure(&self) -> &'static str {
        match self {
            AuditFormat::Markdown => MARKDOWN_STRUCTURE,
            AuditFormat::Latex => LATEX_STRUCTURE,
        }
    }
}

impl fmt::Display for AuditFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Ok(AuditFormat::Markdown),
            "latex" | "tex" => Ok(AuditFormat::Latex),
            other => Err(format!(
                "unsupported audit format '{}' (expected markdown or latex)",
                other
            )),
        }
    }
}

const MARKDOWN_STRUCTURE: &str = r#"OUTPUT FORMAT: MARKDOWN (.md)
STRUCTURE:
# Technical Security & Code Quality Audit
## 1. Executive Summary
(Brief overview of changes and risks for management)
## 2. Risk Assessment Table
| Severity | File | Issue | Recommendation |
|----------|------|-------|----------------|
| High/Med | ...  | ...   | ...            |
## 3. Detailed Technical Analysis
(Deep dive into logic, efficiency, and clean code violations)
## 4. Refactoring Roadmap
(Code blocks showing BEFORE vs AFTER)"#;

const LATEX_STRUCTURE: &str = r#"OUTPUT FORMAT: LATEX (.tex)
Requirement: Use standard article class.
STRUCTURE:
\section{Executive Summary}
\section{Vulnerability Analysis}
\begin{table} ... \end{table}
\section{Optimization Proposals}"#;

/// Build the audit prompt.
///
/// `diff` of `None` asks for a general repository audit instead.
pub fn build_audit_prompt(
    diff: Option<&str>,
    format: AuditFormat,
    language: Language,
    max_chars: usize,
) -> String {
    let context = diff.unwrap_or(NO_CHANGES_AUDIT_CONTEXT);

    format!(
        r#"ACT AS: Senior Software Architect & Security Auditor.
TASK: Write a comprehensive security + code quality audit report for the following changes.
FORMAT: {format} (Strictly follow the structure below).
LANGUAGE: {language}.

{structure}

CODE TO AUDIT:
{context}"#,
        format = format.as_str().to_uppercase(),
        language = language_label(language),
        structure = format.structure(),
        context = truncate_chars(context, max_chars),
    )
}
