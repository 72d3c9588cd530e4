use std::collections::HashSet;

/// DependencyGraph aggregate: a deduplicated set of package nodes and
/// directed (package, dependency) edges.
///
/// First-emission order is remembered so that serialized output is
/// deterministic. An edge may reference an identifier that never became
/// a node (the traversal ran out of depth right after emitting the
/// edge); renderers must tolerate this, and Graphviz does by creating
/// such nodes implicitly.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: Vec<String>,
    edges: Vec<(String, String)>,
    node_set: HashSet<String>,
    edge_set: HashSet<(String, String)>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node, returning `true` if it was not already present.
    pub fn add_node(&mut self, id: &str) -> bool {
        if self.node_set.insert(id.to_string()) {
            self.nodes.push(id.to_string());
            true
        } else {
            false
        }
    }

    /// Adds a directed edge, returning `true` if it was not already present.
    pub fn add_edge(&mut self, from: &str, to: &str) -> bool {
        let edge = (from.to_string(), to.to_string());
        if self.edge_set.insert(edge.clone()) {
            self.edges.push(edge);
            true
        } else {
            false
        }
    }

    /// Nodes in first-emission order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Edges in first-emission order.
    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_set.contains(id)
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.edge_set
            .contains(&(from.to_string(), to.to_string()))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// The node set, ignoring emission order. Useful for set comparisons.
    pub fn node_set(&self) -> &HashSet<String> {
        &self.node_set
    }

    /// The edge set, ignoring emission order. Useful for set comparisons.
    pub fn edge_set(&self) -> &HashSet<(String, String)> {
        &self.edge_set
    }
}
