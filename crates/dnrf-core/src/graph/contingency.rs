/// Single-edge-swap contingency search.
///
/// Given an enabled edge to hypothetically cut, finds every currently
/// disabled line edge whose activation restores full connectivity. Candidate
/// states are evaluated against enabled-state overlays, never by mutating
/// the live graph, so concurrent queries observe a stable topology.
use std::collections::HashMap;

use crate::graph::connectivity::is_connected;
use crate::graph::filter::enabled_subgraph_with;
use crate::graph::{QueryError, TopologyGraph};
use crate::network::EdgeId;

/// Returns the disabled line edges whose activation keeps the network
/// spanning after cutting `edge_id`.
///
/// Candidates are the edges disabled in the *live* graph, tried in
/// description order; accepted ids are returned in that same order (stable
/// and deterministic, not sorted by value). The network starts as a
/// spanning tree, so cutting one edge and adding exactly one other keeps the
/// tree edge count; a connectivity pass alone therefore certifies the
/// resulting state is both connected and acyclic.
///
/// # Errors
///
/// - [`QueryError::EdgeNotFound`] if `edge_id` does not name a line edge.
/// - [`QueryError::EdgeAlreadyDisabled`] if `edge_id` is already disabled —
///   only enabled edges can be hypothetically cut.
pub fn alternative_edges(
    graph: &TopologyGraph,
    edge_id: EdgeId,
) -> Result<Vec<EdgeId>, QueryError> {
    let edge_idx = *graph
        .line_index(edge_id)
        .ok_or_else(|| QueryError::EdgeNotFound(edge_id))?;

    if !graph.edge_weight(edge_idx).is_some_and(|w| w.enabled) {
        return Err(QueryError::EdgeAlreadyDisabled(edge_id));
    }

    let mut accepted: Vec<EdgeId> = Vec::new();

    for candidate_idx in graph.line_edges() {
        let Some(weight) = graph.edge_weight(candidate_idx) else {
            continue;
        };
        if weight.enabled {
            continue;
        }

        let overrides: HashMap<EdgeId, bool> =
            [(edge_id, false), (weight.id, true)].into_iter().collect();
        let view = enabled_subgraph_with(graph, false, &overrides);
        if is_connected(&view) {
            accepted.push(weight.id);
        }
    }

    Ok(accepted)
}
