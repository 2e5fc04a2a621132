//! # FlowCanvas Linter
//!
//! Structural checks over canonical documents and editor graphs. The same
//! rules back the CLI `lint` command and any compliance hook that reads a
//! saved document.

mod diagnostic;
mod linter;
mod rules;

pub use diagnostic::{has_errors, Diagnostic, DiagnosticLevel};
pub use linter::{lint_document, lint_tree_graph, LintOptions};
pub use rules::{LintRule, RuleRegistry};
