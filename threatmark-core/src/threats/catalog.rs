use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{Error, Result};

use super::Threat;

/// The built-in threat library, shipped inside the crate.
const BUILTIN: &str = include_str!("catalog.json");

/// An ordered collection of threats. Catalog order is part of the engine's
/// output order, so it is preserved as loaded.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    threats: Vec<Threat>,
}

impl Catalog {
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn threats(&self) -> &[Threat] {
        &self.threats
    }

    pub fn len(&self) -> usize {
        self.threats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.threats.is_empty()
    }

    fn validate(&self) -> Result<()> {
        if self.threats.is_empty() {
            return Err(Error::Catalog("catalog contains no threats".to_string()));
        }

        let mut ids = HashSet::new();
        for threat in &self.threats {
            if threat.id.trim().is_empty() {
                return Err(Error::Catalog(format!(
                    "threat \"{}\" has an empty id",
                    threat.title
                )));
            }
            if !ids.insert(threat.id.as_str()) {
                return Err(Error::Catalog(format!("duplicate threat id {}", threat.id)));
            }
            if threat.targets.is_empty() {
                return Err(Error::Catalog(format!(
                    "threat {} targets no element kind",
                    threat.id
                )));
            }
        }

        Ok(())
    }
}
