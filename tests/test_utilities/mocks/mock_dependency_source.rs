use nupkg_graph::prelude::*;

/// Mock DependencySource for testing
pub struct MockDependencySource {
    pub outcome: ExtractionOutcome,
    pub should_fail: bool,
}

impl MockDependencySource {
    /// Completed extraction with the given adjacency entries.
    pub fn with_listing(entries: &[(&str, &[&str])]) -> Self {
        let mut listing = AdjacencyListing::new();
        for (package, deps) in entries {
            listing.ensure_package(package);
            for dep in *deps {
                listing.insert_dependency(package, dep);
            }
        }
        Self {
            outcome: ExtractionOutcome {
                listing,
                status: ExtractionStatus::Complete,
            },
            should_fail: false,
        }
    }

    /// Degraded extraction with an empty listing.
    pub fn with_status(status: ExtractionStatus) -> Self {
        Self {
            outcome: ExtractionOutcome {
                listing: AdjacencyListing::new(),
                status,
            },
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            outcome: ExtractionOutcome {
                listing: AdjacencyListing::new(),
                status: ExtractionStatus::Complete,
            },
            should_fail: true,
        }
    }
}

impl DependencySource for MockDependencySource {
    fn extract(&self, _package: &str) -> Result<ExtractionOutcome> {
        if self.should_fail {
            anyhow::bail!("Mock extraction failure");
        }
        Ok(self.outcome.clone())
    }
}
