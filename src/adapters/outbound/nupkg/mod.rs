/// Package archive adapter: extracts dependency declarations from the
/// nuspec manifest inside a `.nupkg` zip container.
mod extractor;
mod manifest;

pub use extractor::NupkgDependencySource;
