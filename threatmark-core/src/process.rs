//! Processing entry point: the one call a model declaration makes.

use std::path::PathBuf;

use crate::db::Dump;
use crate::error::Result;
use crate::models::{Kind, Model};
use crate::render::{dot, report, sequence};
use crate::threats::{scan, Catalog, Finding};

/// What to do with a declared model.
#[derive(Debug, Clone)]
pub enum Operation {
    /// Scan and print the findings table.
    Analyze,
    /// Data-flow diagram, Graphviz dot.
    Dfd,
    /// Dataflow sequence diagram, PlantUML.
    Sequence,
    /// Full Markdown report.
    Report,
    /// Model and findings as pretty-printed JSON.
    Json,
    /// The built-in threat catalog.
    List,
    /// Attribute sheet for one element kind.
    Describe(Kind),
    /// Dump model and findings into a SQLite file.
    SqlDump(PathBuf),
}

/// Check the model, execute one operation, and return its textual output.
///
/// `SqlDump` additionally writes the database file and returns a
/// confirmation line.
pub fn run(model: &Model, operation: Operation) -> Result<String> {
    model.check()?;
    tracing::debug!("processing \"{}\": {:?}", model.name(), operation);

    match operation {
        Operation::Analyze => {
            let findings = scan_builtin(model)?;
            Ok(report::findings_table(&findings))
        }
        Operation::Dfd => Ok(dot::render(model)),
        Operation::Sequence => Ok(sequence::render(model)),
        Operation::Report => {
            let findings = scan_builtin(model)?;
            Ok(report::render(model, &findings))
        }
        Operation::Json => {
            let findings = scan_builtin(model)?;
            let payload = serde_json::json!({
                "model": model,
                "findings": findings,
                "generated_at": chrono::Utc::now().to_rfc3339(),
            });
            Ok(serde_json::to_string_pretty(&payload)?)
        }
        Operation::List => {
            let catalog = Catalog::builtin()?;
            Ok(catalog_table(&catalog))
        }
        Operation::Describe(kind) => Ok(kind.describe().to_string()),
        Operation::SqlDump(path) => {
            let findings = scan_builtin(model)?;
            let mut dump = Dump::create(&path)?;
            dump.write(model, &findings)?;
            Ok(format!("Threat model written to {}", path.display()))
        }
    }
}

fn scan_builtin(model: &Model) -> Result<Vec<Finding>> {
    let catalog = Catalog::builtin()?;
    Ok(scan(model, &catalog))
}

fn catalog_table(catalog: &Catalog) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:<6} {:<9} {:<24} {}\n",
        "ID", "SEVERITY", "CATEGORY", "TITLE"
    ));
    for threat in catalog.threats() {
        output.push_str(&format!(
            "{:<6} {:<9} {:<24} {}\n",
            threat.id,
            threat.severity.as_str(),
            threat.category.label(),
            threat.title
        ));
    }
    output.push_str(&format!("\n{} threats in catalog", catalog.len()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::Server;

    #[test]
    fn test_run_checks_the_model_first() {
        let model = Model::new("Empty", "");
        let err = run(&model, Operation::Dfd).expect_err("empty model processed");
        assert!(matches!(err, Error::EmptyModel));
    }

    #[test]
    fn test_list_shows_the_whole_catalog() {
        let mut model = Model::new("Shop", "");
        model.add_server(Server::new("Web"));

        let output = run(&model, Operation::List).expect("list failed");
        let catalog = Catalog::builtin().expect("built-in catalog is invalid");
        for threat in catalog.threats() {
            assert!(output.contains(&threat.id));
        }
        assert!(output.contains(&format!("{} threats in catalog", catalog.len())));
    }

    #[test]
    fn test_describe_prints_the_attribute_sheet() {
        let mut model = Model::new("Shop", "");
        model.add_server(Server::new("Web"));

        let output = run(&model, Operation::Describe(Kind::Server)).expect("describe failed");
        assert!(output.starts_with("server:"));
        assert!(output.contains("sanitizes_input"));
    }
}
