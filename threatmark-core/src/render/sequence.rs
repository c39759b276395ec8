//! Dataflow sequence rendering in PlantUML format.

use std::collections::HashMap;

use crate::models::{Element, ElementId, Model, Node};

use super::escape;

fn participant_keyword(element: &Element) -> &'static str {
    match &element.node {
        Node::Actor(_) => "actor",
        Node::Server(_) => "participant",
        Node::Datastore(_) => "database",
    }
}

/// Render the model's dataflows as a PlantUML sequence diagram.
///
/// Example output:
/// ```text
/// @startuml
/// actor "User" as n0
/// participant "Web" as n1
///
/// n0 -> n1 : Login
/// @enduml
/// ```
pub fn render(model: &Model) -> String {
    let mut output = String::from("@startuml\n");

    let mut index: HashMap<ElementId, usize> = HashMap::new();
    for (i, element) in model.elements().iter().enumerate() {
        index.insert(element.id, i);
        output.push_str(&format!(
            "{} \"{}\" as n{}\n",
            participant_keyword(element),
            escape(element.name()),
            i
        ));
    }

    if !model.dataflows().is_empty() {
        output.push('\n');
    }
    for flow in model.dataflows() {
        let (Some(source), Some(sink)) = (index.get(&flow.source), index.get(&flow.sink)) else {
            continue;
        };
        output.push_str(&format!("n{} -> n{} : {}\n", source, sink, flow.label));
    }

    output.push_str("@enduml\n");
    output
}
