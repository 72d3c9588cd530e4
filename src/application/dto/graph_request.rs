/// Request DTO for building a dependency graph.
#[derive(Debug, Clone)]
pub struct GraphRequest {
    /// Package identifier whose archive should be inspected.
    pub package: String,
    /// Maximum traversal depth; negative values yield an empty graph.
    pub max_depth: i32,
}

impl GraphRequest {
    pub fn new(package: impl Into<String>, max_depth: i32) -> Self {
        Self {
            package: package.into(),
            max_depth,
        }
    }
}
