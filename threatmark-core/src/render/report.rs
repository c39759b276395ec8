//! Markdown report and plain-text findings table.

use chrono::Utc;

use crate::models::Model;
use crate::threats::{Finding, Severity};

const SEVERITIES_DESC: [Severity; 4] = [
    Severity::Critical,
    Severity::High,
    Severity::Medium,
    Severity::Low,
];

fn count(findings: &[Finding], severity: Severity) -> usize {
    findings.iter().filter(|f| f.severity == severity).count()
}

fn summary_line(findings: &[Finding]) -> String {
    let counts: Vec<String> = SEVERITIES_DESC
        .iter()
        .map(|s| format!("{} {}", count(findings, *s), s.as_str()))
        .collect();
    format!("{} findings: {}", findings.len(), counts.join(", "))
}

/// Plain fixed-width findings table, the default CLI output.
pub fn findings_table(findings: &[Finding]) -> String {
    if findings.is_empty() {
        return "No findings.".to_string();
    }

    let target_width = findings
        .iter()
        .map(|f| f.target.len())
        .max()
        .unwrap_or(0)
        .max("TARGET".len());

    let mut output = String::new();
    output.push_str(&format!(
        "{:<6} {:<9} {:<width$} {}\n",
        "ID",
        "SEVERITY",
        "TARGET",
        "TITLE",
        width = target_width
    ));
    for finding in findings {
        output.push_str(&format!(
            "{:<6} {:<9} {:<width$} {}\n",
            finding.threat_id,
            finding.severity.as_str(),
            finding.target,
            finding.title,
            width = target_width
        ));
    }
    output.push('\n');
    output.push_str(&summary_line(findings));
    output
}

/// Full Markdown report: model header, element and flow tables, findings
/// grouped by severity.
pub fn render(model: &Model, findings: &[Finding]) -> String {
    let mut output = String::new();

    output.push_str(&format!("# Threat Model Report: {}\n\n", model.name()));
    if !model.description().is_empty() {
        output.push_str(&format!("{}\n\n", model.description()));
    }
    output.push_str(&format!(
        "Generated: {}\n\n",
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    ));

    output.push_str("## Elements\n\n");
    output.push_str("| Name | Kind | In scope |\n");
    output.push_str("|------|------|----------|\n");
    for element in model.elements() {
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            element.name(),
            element.kind().as_str(),
            if element.in_scope() { "yes" } else { "no" }
        ));
    }
    output.push('\n');

    output.push_str("## Data Flows\n\n");
    output.push_str("| Source | Sink | Data | Protocol |\n");
    output.push_str("|--------|------|------|----------|\n");
    for flow in model.dataflows() {
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            model.endpoint_name(flow.source),
            model.endpoint_name(flow.sink),
            flow.label,
            flow.protocol.as_deref().unwrap_or("-")
        ));
    }
    output.push('\n');

    output.push_str(&format!("## Findings ({})\n", findings.len()));
    if findings.is_empty() {
        output.push_str("\nNo findings.\n");
        return output;
    }

    for severity in SEVERITIES_DESC {
        let group: Vec<&Finding> = findings.iter().filter(|f| f.severity == severity).collect();
        if group.is_empty() {
            continue;
        }
        output.push_str(&format!("\n### {} ({})\n\n", severity.label(), group.len()));
        for finding in group {
            output.push_str(&format!(
                "- **[{}] {}** ({}) on `{}`\n",
                finding.threat_id,
                finding.title,
                finding.category.label().to_lowercase(),
                finding.target
            ));
            output.push_str(&format!("  {}\n", finding.description));
            output.push_str(&format!("  Mitigation: {}\n", finding.mitigation));
        }
    }

    output
}
