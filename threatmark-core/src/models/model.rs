use std::collections::HashSet;

use serde::Serialize;

use crate::error::{Error, Result};

use super::{Actor, Dataflow, Datastore, Element, ElementId, Node, Server};

/// The named container for one threat-modelling run.
///
/// Elements and dataflows are declared in order and kept in declaration
/// order; every downstream output (findings, diagrams, dumps) is
/// deterministic because of it.
#[derive(Debug, Clone, Serialize)]
pub struct Model {
    name: String,
    description: String,
    elements: Vec<Element>,
    dataflows: Vec<Dataflow>,
}

impl Model {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            elements: Vec::new(),
            dataflows: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn dataflows(&self) -> &[Dataflow] {
        &self.dataflows
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn add_actor(&mut self, actor: Actor) -> ElementId {
        self.add_node(Node::Actor(actor))
    }

    pub fn add_server(&mut self, server: Server) -> ElementId {
        self.add_node(Node::Server(server))
    }

    pub fn add_datastore(&mut self, datastore: Datastore) -> ElementId {
        self.add_node(Node::Datastore(datastore))
    }

    fn add_node(&mut self, node: Node) -> ElementId {
        let id = ElementId::generate();
        self.elements.push(Element { id, node });
        id
    }

    /// Add a dataflow after verifying both endpoints were declared on this
    /// model.
    pub fn add_dataflow(&mut self, flow: Dataflow) -> Result<()> {
        for endpoint in [flow.source, flow.sink] {
            if self.element(endpoint).is_none() {
                return Err(Error::UnknownEndpoint {
                    label: flow.label.clone(),
                    endpoint: endpoint.as_uuid(),
                });
            }
        }
        self.dataflows.push(flow);
        Ok(())
    }

    /// Validate the assembled model before analysis.
    ///
    /// Duplicate names are allowed but logged, since findings and diagrams
    /// refer to elements by name.
    pub fn check(&self) -> Result<()> {
        if self.elements.is_empty() {
            return Err(Error::EmptyModel);
        }

        for element in &self.elements {
            if element.name().trim().is_empty() {
                return Err(Error::EmptyName {
                    kind: element.kind().as_str(),
                });
            }
        }

        for flow in &self.dataflows {
            if flow.label.trim().is_empty() {
                return Err(Error::UnlabeledDataflow {
                    from: self.endpoint_name(flow.source).to_string(),
                    sink: self.endpoint_name(flow.sink).to_string(),
                });
            }
        }

        let mut seen = HashSet::new();
        for element in &self.elements {
            if !seen.insert(element.name()) {
                tracing::warn!(
                    "model \"{}\" declares more than one element named \"{}\"",
                    self.name,
                    element.name()
                );
            }
        }

        Ok(())
    }

    /// Name of a flow endpoint, for display. Unknown ids cannot occur for
    /// flows admitted through `add_dataflow`.
    pub fn endpoint_name(&self, id: ElementId) -> &str {
        self.element(id).map(Element::name).unwrap_or("?")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_node_model() -> (Model, ElementId, ElementId) {
        let mut model = Model::new("Shop", "test model");
        let user = model.add_actor(Actor::new("User"));
        let web = model.add_server(Server::new("Web"));
        (model, user, web)
    }

    #[test]
    fn test_elements_keep_declaration_order() {
        let (mut model, user, web) = two_node_model();
        let db = model.add_datastore(Datastore::new("Database"));

        let names: Vec<&str> = model.elements().iter().map(Element::name).collect();
        assert_eq!(names, vec!["User", "Web", "Database"]);
        assert_eq!(model.element(user).map(Element::name), Some("User"));
        assert_eq!(model.element(web).map(Element::name), Some("Web"));
        assert_eq!(model.element(db).map(Element::name), Some("Database"));
    }

    #[test]
    fn test_dataflow_endpoints_must_exist() {
        let (mut model, user, web) = two_node_model();

        model
            .add_dataflow(Dataflow::new(user, web, "Login"))
            .expect("valid flow rejected");

        let mut other = Model::new("Other", "");
        let foreign = other.add_server(Server::new("Elsewhere"));

        let err = model
            .add_dataflow(Dataflow::new(user, foreign, "Cross-model"))
            .expect_err("foreign endpoint accepted");
        assert!(matches!(err, Error::UnknownEndpoint { .. }));
        assert_eq!(model.dataflows().len(), 1);
    }

    #[test]
    fn test_check_rejects_empty_model() {
        let model = Model::new("Empty", "");
        assert!(matches!(model.check(), Err(Error::EmptyModel)));
    }

    #[test]
    fn test_check_rejects_unnamed_elements() {
        let mut model = Model::new("Shop", "");
        model.add_server(Server::new("  "));
        assert!(matches!(
            model.check(),
            Err(Error::EmptyName { kind: "server" })
        ));
    }

    #[test]
    fn test_check_rejects_unlabeled_flows() {
        let (mut model, user, web) = two_node_model();
        model
            .add_dataflow(Dataflow::new(user, web, ""))
            .expect("flow rejected before label check");
        assert!(matches!(
            model.check(),
            Err(Error::UnlabeledDataflow { .. })
        ));
    }

    #[test]
    fn test_check_allows_duplicate_names() {
        let mut model = Model::new("Shop", "");
        model.add_server(Server::new("Twin"));
        model.add_server(Server::new("Twin"));
        model.check().expect("duplicate names should only warn");
    }
}
