//! Core threat modelling library.
//!
//! A model is declared once (elements, then the dataflows connecting them)
//! and handed to [`process::run`], which validates it and executes one
//! [`process::Operation`]: STRIDE analysis, diagram rendering (dot,
//! PlantUML), a Markdown report, JSON export, or a SQLite dump.

pub mod db;
pub mod error;
pub mod models;
pub mod process;
pub mod render;
pub mod threats;

pub use error::{Error, Result};
pub use models::{Actor, Dataflow, Datastore, Element, ElementId, Kind, Model, Node, Server};
pub use process::Operation;
pub use threats::{Catalog, Category, Finding, Severity, Threat};
