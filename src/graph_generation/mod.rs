/// Dependency graph generation bounded context.
///
/// Contains the domain models (adjacency listing, graph) and the pure
/// traversal service that turns one into the other. No I/O happens in
/// this module; archives and rendering live behind ports.
pub mod domain;
pub mod services;
