/// Topology construction and storage on top of `petgraph`.
///
/// [`TopologyGraph`] wraps a `StableUnGraph` with typed [`VertexWeight`] and
/// [`EdgeWeight`] structs and maintains `HashMap` indexes for O(1) lookup of
/// vertices and line edges by identifier. The graph is built once from a
/// validated [`NetworkDescription`] and is never grown or shrunk afterwards;
/// the only mutable state is the per-line-edge `enabled` flag (and the source
/// vertex, see [`TopologyGraph::set_source`]).
///
/// # Construction
///
/// [`build_graph`] runs the [`validation`][crate::validation] checks in their
/// fixed order, inserts structural vertices, terminals (a degree-one vertex
/// plus an always-enabled attachment edge), and line edges, then confirms
/// that the enabled-edge subgraph is a spanning tree: connected
/// ([`is_connected`]) and acyclic ([`has_cycle`]). Construction is
/// all-or-nothing — a failed build returns an error and no graph.
///
/// # Queries
///
/// See [`filter`] for the enabled-edge projection, [`connectivity`] and
/// [`cycles`] for the structural checks, [`queries`] for downstream
/// reachability, and [`contingency`] for the single-edge-swap search.
pub mod connectivity;
pub mod contingency;
pub mod cycles;
pub mod filter;
pub mod queries;

pub use connectivity::is_connected;
pub use contingency::alternative_edges;
pub use cycles::has_cycle;
pub use filter::{Subgraph, enabled_subgraph};
pub use queries::downstream_vertices;

use std::collections::HashMap;
use std::fmt;

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableUnGraph};

use crate::network::{EdgeId, NetworkDescription, VertexId};
use crate::validation::{self, ValidationError};

/// Classification of a vertex, carried as data on its weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexKind {
    /// A busbar or junction; line edges connect structural vertices.
    Structural,
    /// A terminal (load) connection point with exactly one attachment edge.
    Terminal,
}

/// Classification of an edge, carried as data on its weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// A switchable line edge between two structural vertices.
    Line,
    /// A leaf-attachment edge from a terminal to its structural vertex.
    /// Always enabled; not addressable through the switch operations.
    Attachment,
}

/// Weight stored inline on each petgraph node.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexWeight {
    /// Loader-assigned vertex identifier.
    pub id: VertexId,
    /// Structural or terminal.
    pub kind: VertexKind,
}

/// Weight stored inline on each petgraph edge.
///
/// For attachment edges `id` reuses the owning terminal's identifier and
/// `enabled` is always `true`.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeWeight {
    /// Loader-assigned edge identifier (terminal id for attachment edges).
    pub id: EdgeId,
    /// Line or attachment.
    pub kind: EdgeKind,
    /// Whether the edge currently carries the connection.
    pub enabled: bool,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur while building a [`TopologyGraph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphBuildError {
    /// The description failed an input-validation check.
    Validation(ValidationError),
    /// The enabled-edge subgraph does not span every vertex.
    NotConnected,
    /// The enabled-edge subgraph contains a cycle.
    CycleDetected,
}

impl fmt::Display for GraphBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "invalid description: {e}"),
            Self::NotConnected => {
                f.write_str("enabled-edge subgraph does not span every vertex")
            }
            Self::CycleDetected => f.write_str("enabled-edge subgraph contains a cycle"),
        }
    }
}

impl std::error::Error for GraphBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::NotConnected | Self::CycleDetected => None,
        }
    }
}

impl From<ValidationError> for GraphBuildError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

/// Errors that can occur during runtime operations on a built graph.
///
/// All are caller-input errors; the graph is left unchanged by a failed
/// operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The given id does not name a line edge.
    EdgeNotFound(EdgeId),
    /// The source vertex does not exist in the graph. Can only occur after
    /// [`TopologyGraph::set_source`] rebound the source to an unknown id.
    SourceNotFound(VertexId),
    /// A disable request (or a contingency cut) targets an edge that is
    /// already disabled.
    EdgeAlreadyDisabled(EdgeId),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EdgeNotFound(id) => write!(f, "line edge not found: {id}"),
            Self::SourceNotFound(id) => write!(f, "source vertex not found: {id}"),
            Self::EdgeAlreadyDisabled(id) => write!(f, "edge {id} is already disabled"),
        }
    }
}

impl std::error::Error for QueryError {}

// ---------------------------------------------------------------------------
// TopologyGraph
// ---------------------------------------------------------------------------

/// An undirected network topology with switchable line edges.
///
/// Owns every vertex and edge; all mutation goes through
/// [`set_edge_enabled`][TopologyGraph::set_edge_enabled] (and the
/// [`set_source`][TopologyGraph::set_source] maintenance operation), so no
/// external aliasing of edge state is possible. Construct with
/// [`build_graph`].
#[derive(Debug, Clone)]
pub struct TopologyGraph {
    graph: StableUnGraph<VertexWeight, EdgeWeight>,
    vertex_indices: HashMap<VertexId, NodeIndex>,
    line_indices: HashMap<EdgeId, EdgeIndex>,
    /// Line edges in description order; fixes the candidate iteration order
    /// of [`alternative_edges`].
    line_order: Vec<EdgeIndex>,
    source: VertexId,
}

impl PartialEq for TopologyGraph {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.vertex_indices == other.vertex_indices
            && self.line_indices == other.line_indices
            && self.line_order == other.line_order
            && self.graph.node_count() == other.graph.node_count()
            && self.graph.edge_count() == other.graph.edge_count()
            && self
                .graph
                .node_indices()
                .all(|i| self.graph.node_weight(i) == other.graph.node_weight(i))
            && self.graph.edge_indices().all(|e| {
                self.graph.edge_endpoints(e) == other.graph.edge_endpoints(e)
                    && self.graph.edge_weight(e) == other.graph.edge_weight(e)
            })
    }
}

impl TopologyGraph {
    /// Returns the number of vertices, terminals included.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges, attachment edges included.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns the number of switchable line edges.
    pub fn line_count(&self) -> usize {
        self.line_order.len()
    }

    /// Looks up the [`NodeIndex`] for a vertex identifier.
    pub fn vertex_index(&self, id: VertexId) -> Option<&NodeIndex> {
        self.vertex_indices.get(&id)
    }

    /// Looks up the [`EdgeIndex`] for a *line* edge identifier.
    ///
    /// Attachment edges are not addressable; their terminal's id resolves to
    /// `None` here.
    pub fn line_index(&self, id: EdgeId) -> Option<&EdgeIndex> {
        self.line_indices.get(&id)
    }

    /// Returns the [`VertexWeight`] for the given index, if it exists.
    pub fn vertex_weight(&self, idx: NodeIndex) -> Option<&VertexWeight> {
        self.graph.node_weight(idx)
    }

    /// Returns the [`EdgeWeight`] for the given index, if it exists.
    pub fn edge_weight(&self, idx: EdgeIndex) -> Option<&EdgeWeight> {
        self.graph.edge_weight(idx)
    }

    /// Returns a reference to the underlying graph for traversal code.
    pub fn graph(&self) -> &StableUnGraph<VertexWeight, EdgeWeight> {
        &self.graph
    }

    /// Iterates the line edges in description order.
    pub fn line_edges(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.line_order.iter().copied()
    }

    /// The designated source vertex identifier.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Rebinds the source vertex without re-validation.
    ///
    /// Maintenance operation for analyses that measure reachability from a
    /// different root. The new id is *not* checked against the vertex set;
    /// queries that need the source resolve it lazily and report
    /// [`QueryError::SourceNotFound`] if it is unknown.
    pub fn set_source(&mut self, id: VertexId) {
        self.source = id;
    }

    /// Returns whether the line edge with the given id is enabled.
    ///
    /// # Errors
    ///
    /// [`QueryError::EdgeNotFound`] if the id does not name a line edge.
    pub fn is_edge_enabled(&self, edge_id: EdgeId) -> Result<bool, QueryError> {
        let idx = *self
            .line_indices
            .get(&edge_id)
            .ok_or_else(|| QueryError::EdgeNotFound(edge_id))?;
        Ok(self.graph.edge_weight(idx).is_some_and(|w| w.enabled))
    }

    /// Sets the enabled flag of the line edge with the given id.
    ///
    /// Enabling is idempotent. Disabling an already-disabled edge is a
    /// caller error, distinct from the two silent transitions. The
    /// spanning-tree invariant is deliberately *not* re-verified here:
    /// callers may drive the graph into disconnected or cyclic states for
    /// what-if analysis and re-establish the invariant through
    /// [`is_connected`] and [`has_cycle`].
    ///
    /// # Errors
    ///
    /// - [`QueryError::EdgeNotFound`] if the id does not name a line edge.
    /// - [`QueryError::EdgeAlreadyDisabled`] if `enabled` is `false` and the
    ///   edge is already disabled.
    pub fn set_edge_enabled(&mut self, edge_id: EdgeId, enabled: bool) -> Result<(), QueryError> {
        let idx = *self
            .line_indices
            .get(&edge_id)
            .ok_or_else(|| QueryError::EdgeNotFound(edge_id))?;
        let Some(weight) = self.graph.edge_weight_mut(idx) else {
            return Err(QueryError::EdgeNotFound(edge_id));
        };
        if !enabled && !weight.enabled {
            return Err(QueryError::EdgeAlreadyDisabled(edge_id));
        }
        weight.enabled = enabled;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// build_graph
// ---------------------------------------------------------------------------

/// Constructs a [`TopologyGraph`] from a [`NetworkDescription`].
///
/// Runs the fixed-order validation checks, then builds the graph in three
/// passes — structural vertices, terminals (vertex + attachment edge), line
/// edges — and finally confirms the spanning-tree invariant over the
/// enabled-edge subgraph. Construction is O(V + E).
///
/// # Errors
///
/// - [`GraphBuildError::Validation`] — the description failed an input
///   check; the wrapped [`ValidationError`] names the offending entry.
/// - [`GraphBuildError::NotConnected`] — a vertex is unreachable from the
///   source over enabled edges.
/// - [`GraphBuildError::CycleDetected`] — the enabled-edge subgraph contains
///   a cycle.
pub fn build_graph(description: &NetworkDescription) -> Result<TopologyGraph, GraphBuildError> {
    validation::validate(description)?;

    let vertex_cap = description.vertices.len() + description.terminals.len();
    let edge_cap = description.edge_ids.len() + description.terminals.len();

    let mut graph: StableUnGraph<VertexWeight, EdgeWeight> =
        StableUnGraph::with_capacity(vertex_cap, edge_cap);
    let mut vertex_indices: HashMap<VertexId, NodeIndex> = HashMap::with_capacity(vertex_cap);
    let mut line_indices: HashMap<EdgeId, EdgeIndex> =
        HashMap::with_capacity(description.edge_ids.len());
    let mut line_order: Vec<EdgeIndex> = Vec::with_capacity(description.edge_ids.len());

    for vertex in &description.vertices {
        let idx = graph.add_node(VertexWeight {
            id: vertex.id,
            kind: VertexKind::Structural,
        });
        vertex_indices.insert(vertex.id, idx);
    }

    for terminal in &description.terminals {
        let attach_idx = *vertex_indices.get(&terminal.vertex).ok_or_else(|| {
            GraphBuildError::Validation(ValidationError::UnknownAttachment {
                terminal_id: terminal.id,
                vertex_id: terminal.vertex,
            })
        })?;
        let idx = graph.add_node(VertexWeight {
            id: terminal.id,
            kind: VertexKind::Terminal,
        });
        vertex_indices.insert(terminal.id, idx);
        graph.add_edge(
            idx,
            attach_idx,
            EdgeWeight {
                id: terminal.id,
                kind: EdgeKind::Attachment,
                enabled: true,
            },
        );
    }

    for ((&edge_id, &(a, b)), &enabled) in description
        .edge_ids
        .iter()
        .zip(&description.endpoints)
        .zip(&description.enabled)
    {
        let a_idx = *vertex_indices.get(&a).ok_or_else(|| {
            GraphBuildError::Validation(ValidationError::UnknownEndpoint {
                edge_id,
                vertex_id: a,
            })
        })?;
        let b_idx = *vertex_indices.get(&b).ok_or_else(|| {
            GraphBuildError::Validation(ValidationError::UnknownEndpoint {
                edge_id,
                vertex_id: b,
            })
        })?;
        let idx = graph.add_edge(
            a_idx,
            b_idx,
            EdgeWeight {
                id: edge_id,
                kind: EdgeKind::Line,
                enabled,
            },
        );
        line_indices.insert(edge_id, idx);
        line_order.push(idx);
    }

    let topology = TopologyGraph {
        graph,
        vertex_indices,
        line_indices,
        line_order,
        source: description.source,
    };

    let view = filter::enabled_subgraph(&topology, false);
    if !connectivity::is_connected(&view) {
        return Err(GraphBuildError::NotConnected);
    }
    if cycles::has_cycle(&view) {
        return Err(GraphBuildError::CycleDetected);
    }

    Ok(topology)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
