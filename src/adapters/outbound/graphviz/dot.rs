use crate::graph_generation::domain::DependencyGraph;

/// Serializes a graph to Graphviz DOT source.
///
/// Nodes are listed before edges, each in first-emission order, so the
/// output is deterministic for a given traversal. Identifiers are quoted
/// and escaped; package identifiers routinely contain dots, which bare
/// DOT identifiers would reject.
pub fn to_dot(graph: &DependencyGraph) -> String {
    let mut out = String::from("digraph dependencies {\n");

    for node in graph.nodes() {
        out.push_str("    ");
        out.push_str(&quote(node));
        out.push_str(";\n");
    }

    for (from, to) in graph.edges() {
        out.push_str("    ");
        out.push_str(&quote(from));
        out.push_str(" -> ");
        out.push_str(&quote(to));
        out.push_str(";\n");
    }

    out.push_str("}\n");
    out
}

fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}
