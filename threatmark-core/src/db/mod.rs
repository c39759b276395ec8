//! SQLite dump of a processed model.
//!
//! The dump is a snapshot for downstream querying (dashboards, diffing two
//! runs), not a live store: `Dump::create` starts from an empty file and
//! writes the whole model and finding set in one transaction.

mod schema;

use std::path::Path;

use rusqlite::{params, Connection};

use crate::error::Result;
use crate::models::Model;
use crate::threats::Finding;

pub struct Dump {
    conn: Connection,
}

impl Dump {
    /// Open a dump database at `path`, replacing any existing file.
    pub fn create(path: &Path) -> Result<Self> {
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        schema::create_tables(&conn)?;
        Ok(Self { conn })
    }

    /// In-memory dump, used by tests.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::create_tables(&conn)?;
        Ok(Self { conn })
    }

    /// Write the model and its findings in one transaction.
    pub fn write(&mut self, model: &Model, findings: &[Finding]) -> Result<()> {
        let tx = self.conn.transaction()?;

        tx.execute(
            "INSERT INTO model (name, description, generated_at) VALUES (?1, ?2, ?3)",
            params![
                model.name(),
                model.description(),
                chrono::Utc::now().to_rfc3339()
            ],
        )?;

        for element in model.elements() {
            tx.execute(
                "INSERT INTO elements (id, name, kind, in_scope, attributes)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    element.id.to_string(),
                    element.name(),
                    element.kind().as_str(),
                    element.in_scope(),
                    serde_json::to_string(&element.node)?,
                ],
            )?;
        }

        for flow in model.dataflows() {
            tx.execute(
                "INSERT INTO dataflows (source_id, sink_id, label, protocol, encrypted, authenticated, in_scope)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    flow.source.to_string(),
                    flow.sink.to_string(),
                    flow.label,
                    flow.protocol,
                    flow.encrypted,
                    flow.authenticated,
                    flow.in_scope,
                ],
            )?;
        }

        for finding in findings {
            tx.execute(
                "INSERT INTO findings (threat_id, title, category, severity, target, target_kind, description, mitigation)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    finding.threat_id,
                    finding.title,
                    finding.category.as_str(),
                    finding.severity.as_str(),
                    finding.target,
                    finding.target_kind.as_str(),
                    finding.description,
                    finding.mitigation,
                ],
            )?;
        }

        tx.commit()?;
        tracing::info!(
            "dumped {} elements, {} dataflows, {} findings",
            model.elements().len(),
            model.dataflows().len(),
            findings.len()
        );
        Ok(())
    }

    #[cfg(test)]
    fn count(&self, table: &str) -> i64 {
        self.conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })
            .expect("count query failed")
    }
}
