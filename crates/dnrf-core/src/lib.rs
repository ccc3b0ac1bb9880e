#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod graph;
pub mod network;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use graph::{
    EdgeKind, EdgeWeight, GraphBuildError, QueryError, Subgraph, TopologyGraph, VertexKind,
    VertexWeight, alternative_edges, build_graph, downstream_vertices, enabled_subgraph,
    has_cycle, is_connected,
};
pub use network::{EdgeId, NetworkDescription, Terminal, Vertex, VertexId};
pub use validation::{
    Duplicate, ValidationError, find_duplicate, first_unknown_attachment,
    first_unknown_endpoint, lengths_match, validate,
};

/// Returns the current version of the dnrf-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
