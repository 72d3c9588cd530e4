//! nupkg-graph - dependency graph visualizer for NuGet packages
//!
//! This library extracts the declared dependency metadata of a locally
//! available `.nupkg` archive and renders the dependency relationships
//! as a directed graph, following hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`graph_generation`): Pure domain models and the
//!   traversal service
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use nupkg_graph::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let dependency_source = NupkgDependencySource::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = BuildGraphUseCase::new(dependency_source, progress_reporter);
//!
//! // Execute
//! let request = GraphRequest::new("Newtonsoft.Json", 3);
//! let response = use_case.execute(request)?;
//!
//! // Render the graph
//! if !response.graph.is_empty() {
//!     let renderer = DotRenderer::new();
//!     renderer.render(&response.graph, Path::new("deps.png"), ImageFormat::Png)?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod graph_generation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::graphviz::{to_dot, DotRenderer};
    pub use crate::adapters::outbound::nupkg::NupkgDependencySource;
    pub use crate::application::dto::{GraphRequest, GraphResponse};
    pub use crate::application::use_cases::BuildGraphUseCase;
    pub use crate::graph_generation::domain::{AdjacencyListing, DependencyGraph};
    pub use crate::graph_generation::services::GraphBuilder;
    pub use crate::ports::outbound::{
        DependencySource, ExtractionOutcome, ExtractionStatus, GraphRenderer, ImageFormat,
        ProgressReporter,
    };
    pub use crate::shared::Result;
}
