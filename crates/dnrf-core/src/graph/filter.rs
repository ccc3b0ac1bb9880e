/// Enabled-edge subgraph projection.
///
/// Every higher-level query runs over a [`Subgraph`]: a read-only view of
/// the vertices and the currently-enabled edges of a [`TopologyGraph`],
/// optionally with terminals (and their attachment edges) excluded so that
/// load connection points cannot skew structural connectivity checks.
///
/// The crate-internal [`enabled_subgraph_with`] variant additionally applies
/// a hypothetical enabled-state overlay without touching the live graph;
/// this is how the contingency search evaluates edge-swap candidates against
/// independent flag copies instead of mutating shared state.
use std::collections::{HashMap, HashSet};

use petgraph::stable_graph::{EdgeIndex, NodeIndex};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use crate::graph::{EdgeKind, TopologyGraph, VertexKind};
use crate::network::EdgeId;

/// A read-only projection of a [`TopologyGraph`].
///
/// Holds the vertex and edge index sets of the projection plus the resolved
/// source index. Views borrow the graph they project; they never mutate it.
#[derive(Debug)]
pub struct Subgraph<'g> {
    graph: &'g TopologyGraph,
    vertices: HashSet<NodeIndex>,
    edges: HashSet<EdgeIndex>,
    source: Option<NodeIndex>,
}

impl<'g> Subgraph<'g> {
    /// The graph this view projects.
    pub fn graph(&self) -> &'g TopologyGraph {
        self.graph
    }

    /// Number of vertices in the view.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges in the view.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the view contains the given vertex.
    pub fn contains_vertex(&self, idx: NodeIndex) -> bool {
        self.vertices.contains(&idx)
    }

    /// Whether the view contains the given edge.
    pub fn contains_edge(&self, idx: EdgeIndex) -> bool {
        self.edges.contains(&idx)
    }

    /// Iterates the vertices of the view in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.vertices.iter().copied()
    }

    /// The source vertex resolved into the view, or `None` if the graph's
    /// source id is unknown or excluded from this projection.
    pub fn source_index(&self) -> Option<NodeIndex> {
        self.source
    }

    /// Collects the neighbours of `vertex` reachable over view edges, as
    /// `(edge, other endpoint)` pairs.
    pub(crate) fn neighbours(&self, vertex: NodeIndex) -> Vec<(EdgeIndex, NodeIndex)> {
        let g = self.graph.graph();
        let mut result = Vec::new();
        for edge_ref in g.edges(vertex) {
            if !self.edges.contains(&edge_ref.id()) {
                continue;
            }
            let other = if edge_ref.source() == vertex {
                edge_ref.target()
            } else {
                edge_ref.source()
            };
            result.push((edge_ref.id(), other));
        }
        result
    }
}

/// Projects the subgraph induced by the currently-enabled edges.
///
/// With `exclude_terminals` set, attachment edges *and* the terminal
/// vertices they would otherwise connect are dropped, so no spurious
/// isolated vertices appear in the view. The source vertex reference is
/// carried over (a structural source is never excluded).
pub fn enabled_subgraph(graph: &TopologyGraph, exclude_terminals: bool) -> Subgraph<'_> {
    enabled_subgraph_with(graph, exclude_terminals, &HashMap::new())
}

/// [`enabled_subgraph`] with a hypothetical enabled-state overlay.
///
/// `overrides` maps line-edge ids to their hypothetical enabled state; edges
/// absent from the map keep their live flag. Attachment edges are unaffected
/// by overrides.
pub(crate) fn enabled_subgraph_with<'g>(
    graph: &'g TopologyGraph,
    exclude_terminals: bool,
    overrides: &HashMap<EdgeId, bool>,
) -> Subgraph<'g> {
    let g = graph.graph();

    let mut vertices: HashSet<NodeIndex> = HashSet::with_capacity(g.node_count());
    for idx in g.node_indices() {
        let Some(weight) = g.node_weight(idx) else {
            continue;
        };
        if exclude_terminals && weight.kind == VertexKind::Terminal {
            continue;
        }
        vertices.insert(idx);
    }

    let mut edges: HashSet<EdgeIndex> = HashSet::with_capacity(g.edge_count());
    for edge_ref in g.edge_references() {
        let weight = edge_ref.weight();
        let keep = match weight.kind {
            EdgeKind::Attachment => !exclude_terminals,
            EdgeKind::Line => overrides.get(&weight.id).copied().unwrap_or(weight.enabled),
        };
        if keep {
            edges.insert(edge_ref.id());
        }
    }

    let source = graph
        .vertex_index(graph.source())
        .copied()
        .filter(|idx| vertices.contains(idx));

    Subgraph {
        graph,
        vertices,
        edges,
        source,
    }
}
