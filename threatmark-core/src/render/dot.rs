//! Data-flow diagram rendering in Graphviz dot format.

use std::collections::HashMap;

use crate::models::{Element, ElementId, Model, Node};

use super::escape;

fn shape(element: &Element) -> &'static str {
    match &element.node {
        Node::Actor(_) => "box",
        Node::Server(_) => "ellipse",
        Node::Datastore(_) => "cylinder",
    }
}

/// Render the model as a left-to-right dot digraph.
///
/// Example output:
/// ```text
/// digraph "Shop" {
///     rankdir = LR;
///     n0 [label = "User", shape = box];
///     n1 [label = "Web", shape = ellipse];
///
///     n0 -> n1 [label = "Login"];
/// }
/// ```
pub fn render(model: &Model) -> String {
    let mut output = String::new();
    output.push_str(&format!("digraph \"{}\" {{\n", escape(model.name())));
    output.push_str("    rankdir = LR;\n");

    let mut index: HashMap<ElementId, usize> = HashMap::new();
    for (i, element) in model.elements().iter().enumerate() {
        index.insert(element.id, i);
        output.push_str(&format!(
            "    n{} [label = \"{}\", shape = {}];\n",
            i,
            escape(element.name()),
            shape(element)
        ));
    }

    if !model.dataflows().is_empty() {
        output.push('\n');
    }
    for flow in model.dataflows() {
        let (Some(source), Some(sink)) = (index.get(&flow.source), index.get(&flow.sink)) else {
            continue;
        };
        let label = match &flow.protocol {
            Some(protocol) => format!("{} ({})", flow.label, protocol),
            None => flow.label.clone(),
        };
        output.push_str(&format!(
            "    n{} -> n{} [label = \"{}\"];\n",
            source,
            sink,
            escape(&label)
        ));
    }

    output.push_str("}\n");
    output
}
