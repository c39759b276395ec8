//! Domain models for threat modelling.
//!
//! # Core Concepts
//!
//! - [`Model`]: the named container for one threat-modelling run. Elements
//!   and dataflows are declared once, in order, and never mutated afterwards.
//! - [`Actor`], [`Server`], [`Datastore`]: the three element kinds. Each
//!   carries a name plus a small set of boolean security attributes whose
//!   defaults assume the protection is absent, so an attribute-free
//!   declaration yields the worst-case finding set.
//! - [`Dataflow`]: a directed, labeled edge between two previously declared
//!   elements. Both endpoints are validated when the flow is added.
//! - [`Kind`]: the flat element-kind discriminator used by threat rules,
//!   renderers, and the CLI's `describe` operation.

mod dataflow;
mod element;
mod kind;
mod model;

pub use dataflow::*;
pub use element::*;
pub use kind::*;
pub use model::*;
