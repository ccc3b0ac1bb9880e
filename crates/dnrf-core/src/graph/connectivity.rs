/// Connectivity check over a filtered subgraph view.
///
/// Used at construction time to establish the spanning-tree invariant and
/// repeatedly by the contingency search against hypothetical edge-state
/// overlays.
use std::collections::{HashSet, VecDeque};

use petgraph::stable_graph::NodeIndex;

use crate::graph::filter::Subgraph;

/// Returns `true` if every vertex of the view is reachable from the source.
///
/// Performs a BFS from the resolved source index over the view's edges; the
/// traversal order is irrelevant for the result. A view whose source vertex
/// cannot be resolved (possible only after the source was rebound to an
/// unknown id) is reported as not connected rather than an error.
pub fn is_connected(subgraph: &Subgraph<'_>) -> bool {
    let Some(start) = subgraph.source_index() else {
        return false;
    };

    let mut visited: HashSet<NodeIndex> = HashSet::new();
    let mut queue: VecDeque<NodeIndex> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for (_, neighbour) in subgraph.neighbours(current) {
            if !visited.contains(&neighbour) {
                visited.insert(neighbour);
                queue.push_back(neighbour);
            }
        }
    }

    visited.len() == subgraph.vertex_count()
}
