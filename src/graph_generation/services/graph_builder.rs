use crate::graph_generation::domain::{AdjacencyListing, DependencyGraph};

/// GraphBuilder service for turning an adjacency listing into a
/// deduplicated dependency graph.
///
/// This service contains pure business logic with no I/O dependencies.
pub struct GraphBuilder;

impl GraphBuilder {
    /// Builds the graph of packages reachable from `root` within
    /// `max_depth` levels of recursion.
    ///
    /// The traversal is depth-first in dependency declaration order.
    /// Each distinct package becomes one node and each distinct
    /// (package, dependency) pair one directed edge, regardless of how
    /// many times it is encountered.
    ///
    /// An already-emitted package is still re-entered when reached along
    /// another path, spending `depth - 1` on its subtree each time.
    /// Residual depth from a later path can therefore expose nodes that
    /// an earlier, shorter path could not reach: the node set is not a
    /// strict shortest-path-within-depth bound. Callers tuning
    /// `max_depth` rely on this; a visited-at-depth check would change
    /// the emitted sets.
    ///
    /// # Arguments
    /// * `listing` - Adjacency listing to traverse (read-only)
    /// * `root` - Package identifier to start from
    /// * `max_depth` - Remaining recursion budget; negative values or a
    ///   `root` absent from `listing` yield an empty graph
    ///
    /// # Returns
    /// The constructed graph. Absence of data is not an error; it simply
    /// yields an empty graph.
    pub fn build(listing: &AdjacencyListing, root: &str, max_depth: i32) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        Self::visit(listing, root, max_depth, &mut graph);
        graph
    }

    /// Recursively emits `package` and its dependency edges into `graph`.
    ///
    /// Termination: `depth` strictly decreases on every recursive call
    /// and the walk stops once it goes negative, which also bounds
    /// cycles in the listing.
    fn visit(listing: &AdjacencyListing, package: &str, depth: i32, graph: &mut DependencyGraph) {
        if depth < 0 {
            return;
        }
        let deps = match listing.direct_dependencies(package) {
            Some(deps) => deps,
            None => return,
        };

        graph.add_node(package);

        for dep in deps {
            graph.add_edge(package, dep);
            Self::visit(listing, dep, depth - 1, graph);
        }
    }
}
