use nupkg_graph::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock GraphRenderer for testing that records render invocations
#[derive(Default, Clone)]
pub struct MockGraphRenderer {
    pub calls: Arc<Mutex<Vec<RenderCall>>>,
}

#[derive(Debug, Clone)]
pub struct RenderCall {
    pub node_count: usize,
    pub edge_count: usize,
    pub output_path: PathBuf,
    pub format: ImageFormat,
}

impl MockGraphRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<RenderCall> {
        self.calls.lock().unwrap().last().cloned()
    }
}

impl GraphRenderer for MockGraphRenderer {
    fn render(
        &self,
        graph: &DependencyGraph,
        output_path: &Path,
        format: ImageFormat,
    ) -> Result<()> {
        self.calls.lock().unwrap().push(RenderCall {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            output_path: output_path.to_path_buf(),
            format,
        });
        Ok(())
    }
}
