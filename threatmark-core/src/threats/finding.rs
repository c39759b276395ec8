use serde::Serialize;

use crate::models::Kind;

use super::{Category, Severity, Threat};

/// One satisfied threat against one model target.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub threat_id: String,
    pub title: String,
    pub category: Category,
    pub severity: Severity,
    /// Element name or dataflow label.
    pub target: String,
    pub target_kind: Kind,
    pub description: String,
    pub mitigation: String,
}

impl Finding {
    pub(crate) fn record(threat: &Threat, target: &str, target_kind: Kind) -> Self {
        Self {
            threat_id: threat.id.clone(),
            title: threat.title.clone(),
            category: threat.category,
            severity: threat.severity,
            target: target.to_string(),
            target_kind,
            description: threat.description.clone(),
            mitigation: threat.mitigation.clone(),
        }
    }
}
