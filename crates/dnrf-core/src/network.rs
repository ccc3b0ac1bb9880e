/// Boundary types describing a distribution network topology.
///
/// [`NetworkDescription`] is the root type handed to
/// [`build_graph`][crate::graph::build_graph] by an external loader. It
/// corresponds to the columnar component arrays produced by grid-model
/// exports: one identifier list per component class, with per-edge auxiliary
/// arrays (`endpoints`, `enabled`) aligned by position.
///
/// # Unknown attribute preservation
///
/// `Vertex` and `Terminal` carry a `#[serde(flatten)]` catch-all so that
/// loader attributes this crate does not interpret (rated voltage,
/// coordinates, ...) survive a round trip. The topology engine never reads
/// them.
use serde::{Deserialize, Serialize};

/// Identifier of a vertex (busbar, junction, or terminal connection point).
///
/// Identifiers are opaque values assigned by the external loader; the core
/// only compares them for equality and orders query output by them.
pub type VertexId = u64;

/// Identifier of a switchable line edge.
pub type EdgeId = u64;

/// A structural vertex in the network description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Unique identifier of this vertex within the description.
    pub id: VertexId,

    /// Loader-supplied attributes, preserved but not interpreted.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A terminal (load) connection point.
///
/// A terminal enters the topology as a degree-one vertex plus an implied
/// leaf-attachment edge to the named structural vertex. The attachment edge
/// reuses the terminal's id, is always enabled, and is not switchable, so it
/// can never participate in a cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Terminal {
    /// Unique identifier of this terminal. Shares the vertex id namespace.
    pub id: VertexId,

    /// The structural vertex this terminal hangs off.
    pub vertex: VertexId,

    /// Loader-supplied attributes, preserved but not interpreted.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The full description of a network topology, as supplied by the loader.
///
/// Line-edge data is columnar: `endpoints` and `enabled` must each carry
/// exactly one entry per entry in `edge_ids`. [`validate`][crate::validation::validate]
/// enforces this along with identifier uniqueness and referential integrity
/// before a [`TopologyGraph`][crate::graph::TopologyGraph] is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDescription {
    /// Structural vertices.
    pub vertices: Vec<Vertex>,

    /// Identifiers of the switchable line edges.
    pub edge_ids: Vec<EdgeId>,

    /// Unordered endpoint pair for each line edge, aligned with `edge_ids`.
    pub endpoints: Vec<(VertexId, VertexId)>,

    /// Initial enabled flag for each line edge, aligned with `edge_ids`.
    pub enabled: Vec<bool>,

    /// Terminal connection points. May be empty.
    #[serde(default)]
    pub terminals: Vec<Terminal>,

    /// The designated source vertex; must be a structural vertex.
    pub source: VertexId,
}
