/// Graphviz adapter: DOT serialization and image rendering through the
/// external `dot` binary.
mod dot;
mod renderer;

pub use dot::to_dot;
pub use renderer::DotRenderer;
