//! Textual output formats: Graphviz dot, PlantUML sequence, Markdown report.

pub mod dot;
pub mod report;
pub mod sequence;

/// Escape a name for use inside a double-quoted dot/PlantUML string.
pub(crate) fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
