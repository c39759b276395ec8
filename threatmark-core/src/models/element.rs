use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use super::Kind;

/// Opaque identity of a declared element.
///
/// Ids are generated when an element is added to a [`super::Model`] and are
/// the only way to reference an element from a dataflow.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub struct ElementId(Uuid);

impl ElementId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// An external human or system initiator.
#[derive(Debug, Clone, Serialize)]
pub struct Actor {
    pub name: String,
    pub description: Option<String>,
    pub in_scope: bool,
    /// Whether the actor's identity is strongly verified (MFA, federation)
    /// before its requests are trusted.
    pub verified_identity: bool,
}

impl Actor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            in_scope: true,
            verified_identity: false,
        }
    }
}

/// A compute node that receives, processes, and forwards data.
#[derive(Debug, Clone, Serialize)]
pub struct Server {
    pub name: String,
    pub description: Option<String>,
    pub in_scope: bool,
    pub sanitizes_input: bool,
    pub authenticates_requests: bool,
    pub audit_logging: bool,
    pub rate_limited: bool,
}

impl Server {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            in_scope: true,
            sanitizes_input: false,
            authenticates_requests: false,
            audit_logging: false,
            rate_limited: false,
        }
    }
}

/// A node that persists data beyond the lifetime of a request.
#[derive(Debug, Clone, Serialize)]
pub struct Datastore {
    pub name: String,
    pub description: Option<String>,
    pub in_scope: bool,
    pub encrypted_at_rest: bool,
    pub contains_pii: bool,
    pub replicated: bool,
}

impl Datastore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            in_scope: true,
            encrypted_at_rest: false,
            contains_pii: false,
            replicated: false,
        }
    }
}

/// Kind-specific payload of a declared element.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Actor(Actor),
    Server(Server),
    Datastore(Datastore),
}

/// A declared element: generated id plus kind-specific payload.
#[derive(Debug, Clone, Serialize)]
pub struct Element {
    pub id: ElementId,
    #[serde(flatten)]
    pub node: Node,
}

impl Element {
    pub fn name(&self) -> &str {
        match &self.node {
            Node::Actor(a) => &a.name,
            Node::Server(s) => &s.name,
            Node::Datastore(d) => &d.name,
        }
    }

    pub fn kind(&self) -> Kind {
        match &self.node {
            Node::Actor(_) => Kind::Actor,
            Node::Server(_) => Kind::Server,
            Node::Datastore(_) => Kind::Datastore,
        }
    }

    pub fn in_scope(&self) -> bool {
        match &self.node {
            Node::Actor(a) => a.in_scope,
            Node::Server(s) => s.in_scope,
            Node::Datastore(d) => d.in_scope,
        }
    }

    /// Look up a boolean security attribute by its catalog name.
    ///
    /// Returns `None` when the attribute does not exist for this kind, which
    /// makes a rule with a mistyped attribute match nothing rather than
    /// everything.
    pub(crate) fn bool_attr(&self, attr: &str) -> Option<bool> {
        match &self.node {
            Node::Actor(a) => match attr {
                "verified_identity" => Some(a.verified_identity),
                _ => None,
            },
            Node::Server(s) => match attr {
                "sanitizes_input" => Some(s.sanitizes_input),
                "authenticates_requests" => Some(s.authenticates_requests),
                "audit_logging" => Some(s.audit_logging),
                "rate_limited" => Some(s.rate_limited),
                _ => None,
            },
            Node::Datastore(d) => match attr {
                "encrypted_at_rest" => Some(d.encrypted_at_rest),
                "contains_pii" => Some(d.contains_pii),
                "replicated" => Some(d.replicated),
                _ => None,
            },
        }
    }
}
