/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (package archives, the rendering
/// toolchain, the console).
pub mod dependency_source;
pub mod graph_renderer;
pub mod progress_reporter;

pub use dependency_source::{DependencySource, ExtractionOutcome, ExtractionStatus};
pub use graph_renderer::{GraphRenderer, ImageFormat};
pub use progress_reporter::ProgressReporter;
