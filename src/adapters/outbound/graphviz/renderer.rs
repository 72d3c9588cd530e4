use crate::adapters::outbound::graphviz::dot::to_dot;
use crate::graph_generation::domain::DependencyGraph;
use crate::ports::outbound::{GraphRenderer, ImageFormat};
use crate::shared::error::GraphError;
use crate::shared::Result;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;

/// DotRenderer adapter implementing the GraphRenderer port with the
/// Graphviz toolchain.
///
/// DOT output is written directly; image formats are produced by piping
/// the DOT source through the external `dot` binary, which must be on
/// PATH.
pub struct DotRenderer;

impl DotRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_with_graphviz(
        &self,
        dot_source: &str,
        output_path: &Path,
        format: ImageFormat,
    ) -> Result<()> {
        let mut source_file = tempfile::NamedTempFile::new().map_err(|e| {
            GraphError::RenderError {
                path: output_path.to_path_buf(),
                details: format!("Failed to create temporary DOT file: {}", e),
            }
        })?;
        source_file
            .write_all(dot_source.as_bytes())
            .map_err(|e| GraphError::RenderError {
                path: output_path.to_path_buf(),
                details: format!("Failed to write temporary DOT file: {}", e),
            })?;

        let output = Command::new("dot")
            .arg(format!("-T{}", format.graphviz_arg()))
            .arg("-o")
            .arg(output_path)
            .arg(source_file.path())
            .output()
            .map_err(|e| {
                let details = if e.kind() == std::io::ErrorKind::NotFound {
                    "the Graphviz 'dot' binary was not found on PATH".to_string()
                } else {
                    e.to_string()
                };
                GraphError::RenderError {
                    path: output_path.to_path_buf(),
                    details,
                }
            })?;

        if !output.status.success() {
            return Err(GraphError::RenderError {
                path: output_path.to_path_buf(),
                details: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for DotRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphRenderer for DotRenderer {
    fn render(
        &self,
        graph: &DependencyGraph,
        output_path: &Path,
        format: ImageFormat,
    ) -> Result<()> {
        let dot_source = to_dot(graph);

        match format {
            ImageFormat::Dot => {
                fs::write(output_path, dot_source).map_err(|e| GraphError::FileWriteError {
                    path: output_path.to_path_buf(),
                    details: e.to_string(),
                })?;
                Ok(())
            }
            ImageFormat::Png | ImageFormat::Svg => {
                self.render_with_graphviz(&dot_source, output_path, format)
            }
        }
    }
}
