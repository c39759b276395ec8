use serde::{Deserialize, Serialize};

use crate::models::Kind;

/// STRIDE threat category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Spoofing,
    Tampering,
    Repudiation,
    InformationDisclosure,
    DenialOfService,
    ElevationOfPrivilege,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spoofing => "spoofing",
            Self::Tampering => "tampering",
            Self::Repudiation => "repudiation",
            Self::InformationDisclosure => "information_disclosure",
            Self::DenialOfService => "denial_of_service",
            Self::ElevationOfPrivilege => "elevation_of_privilege",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Spoofing => "Spoofing",
            Self::Tampering => "Tampering",
            Self::Repudiation => "Repudiation",
            Self::InformationDisclosure => "Information disclosure",
            Self::DenialOfService => "Denial of service",
            Self::ElevationOfPrivilege => "Elevation of privilege",
        }
    }
}

/// Finding severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

/// A boolean attribute predicate. The threat applies only when the target's
/// attribute `attr` has the value `is`.
#[derive(Debug, Clone, Deserialize)]
pub struct Predicate {
    pub attr: String,
    pub is: bool,
}

/// One catalog entry.
///
/// `when` is a conjunction; an empty list makes the threat unconditional for
/// its target kinds. An attribute unknown to the target's kind satisfies
/// nothing, so a mistyped predicate silently disables the threat instead of
/// flagging every element.
#[derive(Debug, Clone, Deserialize)]
pub struct Threat {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub severity: Severity,
    pub targets: Vec<Kind>,
    #[serde(default)]
    pub when: Vec<Predicate>,
    pub description: String,
    pub mitigation: String,
}

impl Threat {
    pub fn applies_to(&self, kind: Kind) -> bool {
        self.targets.contains(&kind)
    }

    /// Evaluate the condition against an attribute lookup.
    pub fn matches(&self, attr: impl Fn(&str) -> Option<bool>) -> bool {
        self.when.iter().all(|p| attr(&p.attr) == Some(p.is))
    }
}
