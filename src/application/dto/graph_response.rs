use crate::graph_generation::domain::DependencyGraph;
use crate::ports::outbound::ExtractionStatus;

/// Response DTO carrying the built graph and how extraction concluded.
#[derive(Debug, Clone)]
pub struct GraphResponse {
    /// The deduplicated dependency graph, ready for rendering.
    pub graph: DependencyGraph,
    /// How the manifest extraction concluded; degraded statuses explain
    /// an empty graph.
    pub extraction_status: ExtractionStatus,
    /// Number of packages known to the adjacency listing, including
    /// dependency-only entries.
    pub package_count: usize,
}
