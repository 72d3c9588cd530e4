use crate::application::dto::{GraphRequest, GraphResponse};
use crate::graph_generation::services::GraphBuilder;
use crate::ports::outbound::{DependencySource, ExtractionStatus, ProgressReporter};
use crate::shared::Result;

/// BuildGraphUseCase - Core use case for dependency graph construction
///
/// Orchestrates extraction and traversal using generic dependency
/// injection for the infrastructure ports. Extraction failures degrade
/// to an empty listing (reported as warnings), so the use case itself
/// only fails on errors outside the documented degradation taxonomy.
///
/// # Type Parameters
/// * `DS` - DependencySource implementation
/// * `PR` - ProgressReporter implementation
pub struct BuildGraphUseCase<DS, PR> {
    dependency_source: DS,
    progress_reporter: PR,
}

impl<DS, PR> BuildGraphUseCase<DS, PR>
where
    DS: DependencySource,
    PR: ProgressReporter,
{
    /// Creates a new BuildGraphUseCase with injected dependencies
    pub fn new(dependency_source: DS, progress_reporter: PR) -> Self {
        Self {
            dependency_source,
            progress_reporter,
        }
    }

    /// Executes the graph-building use case
    ///
    /// # Arguments
    /// * `request` - Request containing the target package and depth bound
    ///
    /// # Returns
    /// GraphResponse containing the built graph and the extraction status.
    /// An empty graph is a valid outcome, not an error.
    pub fn execute(&self, request: GraphRequest) -> Result<GraphResponse> {
        self.progress_reporter.report(&format!(
            "📦 Extracting dependency declarations for: {}",
            request.package
        ));

        let outcome = self.dependency_source.extract(&request.package)?;
        self.report_extraction(&request.package, &outcome.status, outcome.listing.package_count());

        let graph = GraphBuilder::build(&outcome.listing, &request.package, request.max_depth);
        self.progress_reporter.report(&format!(
            "🔗 Graph contains {} node(s) and {} edge(s)",
            graph.node_count(),
            graph.edge_count()
        ));

        Ok(GraphResponse {
            graph,
            extraction_status: outcome.status,
            package_count: outcome.listing.package_count(),
        })
    }

    fn report_extraction(&self, package: &str, status: &ExtractionStatus, package_count: usize) {
        match status {
            ExtractionStatus::Complete => {
                self.progress_reporter
                    .report(&format!("✅ Detected {} package(s)", package_count));
            }
            ExtractionStatus::ArchiveMissing { path } => {
                self.progress_reporter.report_warning(&format!(
                    "⚠️  {} not found - continuing with an empty dependency listing",
                    path.display()
                ));
            }
            ExtractionStatus::ContainerUnreadable { details } => {
                self.progress_reporter.report_warning(&format!(
                    "⚠️  Could not read package archive for {}: {}",
                    package, details
                ));
            }
            ExtractionStatus::ManifestMissing => {
                self.progress_reporter.report_warning(&format!(
                    "⚠️  No manifest entry found in the archive for {}",
                    package
                ));
            }
            ExtractionStatus::ManifestInvalid { details } => {
                self.progress_reporter.report_warning(&format!(
                    "⚠️  Failed to parse manifest for {}: {}",
                    package, details
                ));
            }
        }
    }
}
