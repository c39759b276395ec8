use serde::{Deserialize, Serialize};

/// The kind of a model node or edge.
///
/// Threat rules target kinds, renderers pick shapes by kind, and the CLI's
/// `describe` operation prints the attribute sheet for a kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Actor,
    Server,
    Datastore,
    Dataflow,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Actor => "actor",
            Self::Server => "server",
            Self::Datastore => "datastore",
            Self::Dataflow => "dataflow",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "actor" => Some(Self::Actor),
            "server" => Some(Self::Server),
            "datastore" => Some(Self::Datastore),
            "dataflow" => Some(Self::Dataflow),
            _ => None,
        }
    }

    /// Human-readable attribute sheet for this kind.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Actor => {
                "\
actor: an external human or system that initiates flows into the model.

attributes:
  verified_identity  (default false)  identity is strongly verified before requests are trusted
  in_scope           (default true)   include the element in threat analysis"
            }
            Self::Server => {
                "\
server: a compute node that receives, processes, and forwards data.

attributes:
  sanitizes_input         (default false)  input is validated before it reaches interpreters
  authenticates_requests  (default false)  callers must authenticate before being served
  audit_logging           (default false)  security-relevant actions are written to an audit log
  rate_limited            (default false)  per-client request rates are capped
  in_scope                (default true)   include the element in threat analysis"
            }
            Self::Datastore => {
                "\
datastore: a node that persists data beyond the lifetime of a request.

attributes:
  encrypted_at_rest  (default false)  stored data is encrypted on disk
  contains_pii       (default false)  the store holds personally identifiable information
  replicated         (default false)  the store has a replica to fail over to
  in_scope           (default true)   include the element in threat analysis"
            }
            Self::Dataflow => {
                "\
dataflow: a directed, labeled edge carrying data between two declared elements.

attributes:
  protocol       (default none)   transport protocol name, shown on diagrams
  encrypted      (default false)  the channel is encrypted in transit
  authenticated  (default false)  the endpoints authenticate each other
  in_scope       (default true)   include the flow in threat analysis"
            }
        }
    }
}
