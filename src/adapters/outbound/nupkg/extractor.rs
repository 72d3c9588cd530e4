use crate::adapters::outbound::nupkg::manifest::{parse_manifest, MANIFEST_EXTENSION};
use crate::graph_generation::domain::AdjacencyListing;
use crate::ports::outbound::{DependencySource, ExtractionOutcome, ExtractionStatus};
use crate::shared::Result;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use zip::ZipArchive;

/// File extension of NuGet package archives.
const ARCHIVE_EXTENSION: &str = "nupkg";

/// Maximum decompressed manifest size (10 MB). A nuspec larger than this
/// is not a plausible manifest.
const MAX_MANIFEST_SIZE: u64 = 10 * 1024 * 1024;

/// NupkgDependencySource adapter reading dependency declarations out of
/// `<package>.nupkg` archives.
///
/// A nupkg is a zip container holding exactly one `.nuspec` manifest in
/// practice; when several entries match, the first in container-listing
/// order is used. Every failure mode degrades to an empty listing with a
/// descriptive `ExtractionStatus` instead of an error, keeping the tool
/// usable on broken or absent archives.
pub struct NupkgDependencySource {
    base_dir: PathBuf,
}

impl NupkgDependencySource {
    /// Resolves archives relative to the current working directory.
    pub fn new() -> Self {
        Self {
            base_dir: PathBuf::from("."),
        }
    }

    /// Resolves archives relative to `base_dir` instead.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn archive_path(&self, package: &str) -> PathBuf {
        self.base_dir.join(format!("{}.{}", package, ARCHIVE_EXTENSION))
    }

    /// Locates the manifest entry and returns its decompressed bytes,
    /// or a degraded status when the container or entry is unusable.
    fn read_manifest_bytes(
        archive: &mut ZipArchive<fs::File>,
    ) -> std::result::Result<Option<Vec<u8>>, ExtractionStatus> {
        for index in 0..archive.len() {
            let mut entry = archive.by_index(index).map_err(|e| {
                ExtractionStatus::ContainerUnreadable {
                    details: e.to_string(),
                }
            })?;

            if !entry.name().ends_with(MANIFEST_EXTENSION) {
                continue;
            }

            if entry.size() > MAX_MANIFEST_SIZE {
                return Err(ExtractionStatus::ContainerUnreadable {
                    details: format!(
                        "manifest entry {} is too large ({} bytes)",
                        entry.name(),
                        entry.size()
                    ),
                });
            }

            let mut contents = Vec::with_capacity(entry.size() as usize);
            entry.read_to_end(&mut contents).map_err(|e| {
                ExtractionStatus::ContainerUnreadable {
                    details: e.to_string(),
                }
            })?;
            return Ok(Some(contents));
        }

        Ok(None)
    }
}

impl Default for NupkgDependencySource {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencySource for NupkgDependencySource {
    fn extract(&self, package: &str) -> Result<ExtractionOutcome> {
        let archive_path = self.archive_path(package);

        if !archive_path.exists() {
            return Ok(ExtractionOutcome::degraded(
                ExtractionStatus::ArchiveMissing { path: archive_path },
            ));
        }

        let file = match fs::File::open(&archive_path) {
            Ok(file) => file,
            Err(e) => {
                return Ok(ExtractionOutcome::degraded(
                    ExtractionStatus::ContainerUnreadable {
                        details: e.to_string(),
                    },
                ));
            }
        };

        // The archive is opened, read and dropped within this call.
        let mut archive = match ZipArchive::new(file) {
            Ok(archive) => archive,
            Err(e) => {
                return Ok(ExtractionOutcome::degraded(
                    ExtractionStatus::ContainerUnreadable {
                        details: e.to_string(),
                    },
                ));
            }
        };

        let manifest_bytes = match Self::read_manifest_bytes(&mut archive) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                return Ok(ExtractionOutcome::degraded(ExtractionStatus::ManifestMissing));
            }
            Err(status) => return Ok(ExtractionOutcome::degraded(status)),
        };

        let mut listing = AdjacencyListing::new();
        let status = match parse_manifest(&manifest_bytes, package, &mut listing) {
            Ok(()) => ExtractionStatus::Complete,
            // Keep whatever was accumulated before the parse failure.
            Err(e) => ExtractionStatus::ManifestInvalid {
                details: e.to_string(),
            },
        };

        Ok(ExtractionOutcome { listing, status })
    }
}
