use crate::graph_generation::domain::DependencyGraph;
use crate::shared::Result;
use std::path::Path;

/// Output formats supported by graph renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Raw Graphviz DOT source, no external tooling required.
    Dot,
    Png,
    Svg,
}

impl std::str::FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dot" => Ok(ImageFormat::Dot),
            "png" => Ok(ImageFormat::Png),
            "svg" => Ok(ImageFormat::Svg),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'dot', 'png' or 'svg'",
                s
            )),
        }
    }
}

impl ImageFormat {
    /// Infers the format from an output path extension, defaulting to
    /// PNG when the extension is absent or unrecognized.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("dot") => ImageFormat::Dot,
            Some(ext) if ext.eq_ignore_ascii_case("svg") => ImageFormat::Svg,
            _ => ImageFormat::Png,
        }
    }

    /// The `-T` argument the Graphviz `dot` binary expects.
    pub fn graphviz_arg(&self) -> &'static str {
        match self {
            ImageFormat::Dot => "dot",
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

/// GraphRenderer port for serializing a graph to an image file
///
/// The graph-building core has no opinion on image formats; rendering is
/// delegated to an external collaborator behind this port.
pub trait GraphRenderer {
    /// Renders `graph` to `output_path` in the requested format.
    ///
    /// # Arguments
    /// * `graph` - The graph to serialize
    /// * `output_path` - Destination file path
    /// * `format` - Target output format
    ///
    /// # Errors
    /// Returns an error if the output file cannot be written or the
    /// external rendering tool is unavailable or fails.
    fn render(&self, graph: &DependencyGraph, output_path: &Path, format: ImageFormat)
        -> Result<()>;
}
