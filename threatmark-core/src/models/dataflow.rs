use serde::Serialize;

use super::ElementId;

/// A directed, labeled edge carrying data between two declared elements.
///
/// Both endpoints must already exist in the model; [`super::Model::add_dataflow`]
/// rejects a flow whose endpoint ids it does not know.
#[derive(Debug, Clone, Serialize)]
pub struct Dataflow {
    pub source: ElementId,
    pub sink: ElementId,
    /// What travels on this edge, e.g. "HTTPS Request".
    pub label: String,
    /// Transport protocol name, shown on diagrams when set.
    pub protocol: Option<String>,
    pub encrypted: bool,
    pub authenticated: bool,
    pub in_scope: bool,
}

impl Dataflow {
    pub fn new(source: ElementId, sink: ElementId, label: impl Into<String>) -> Self {
        Self {
            source,
            sink,
            label: label.into(),
            protocol: None,
            encrypted: false,
            authenticated: false,
            in_scope: true,
        }
    }

    pub(crate) fn bool_attr(&self, attr: &str) -> Option<bool> {
        match attr {
            "encrypted" => Some(self.encrypted),
            "authenticated" => Some(self.authenticated),
            _ => None,
        }
    }
}
