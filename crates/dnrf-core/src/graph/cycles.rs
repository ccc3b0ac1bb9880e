/// Cycle detection over an undirected subgraph view.
///
/// The detector walks edges depth-first with an explicit stack, starting at
/// the source vertex and then at every still-unexplored vertex, so it covers
/// disconnected hypothetical states as well.
///
/// # Why not a directed cycle primitive
///
/// In an undirected graph every edge would look like a 2-cycle to a directed
/// traversal (walk `a-b`, then walk back `b-a`). The walk therefore consumes
/// each undirected edge exactly once, tracked in a global used-edge set, and
/// a cycle is reported only when an *unused* edge reaches a vertex that is
/// already on the backtrack-corrected active path. The active path is
/// maintained by stack discipline: a vertex leaves the path when its frame
/// is popped.
use std::collections::HashSet;

use petgraph::stable_graph::{EdgeIndex, NodeIndex};

use crate::graph::filter::Subgraph;

/// Returns `true` if the view contains a cycle.
///
/// Runs in O(V + E) over the view. Attachment edges can be left in the view:
/// terminals have degree one, so they never close a cycle. Callers
/// conventionally pass the enabled-edge view so that disabled edges cannot
/// trigger false positives.
pub fn has_cycle(subgraph: &Subgraph<'_>) -> bool {
    let mut seen: HashSet<NodeIndex> = HashSet::new();
    let mut used: HashSet<EdgeIndex> = HashSet::new();

    let roots: Vec<NodeIndex> = subgraph
        .source_index()
        .into_iter()
        .chain(subgraph.vertices())
        .collect();

    for root in roots {
        if seen.contains(&root) {
            continue;
        }
        seen.insert(root);

        let mut on_path: HashSet<NodeIndex> = HashSet::new();
        on_path.insert(root);

        // Stack frame: (vertex, incident view edges, next edge to take).
        let mut stack: Vec<(NodeIndex, Vec<(EdgeIndex, NodeIndex)>, usize)> =
            vec![(root, subgraph.neighbours(root), 0)];

        while let Some(frame) = stack.last_mut() {
            let (vertex, edges, next) = frame;
            let vertex = *vertex;

            if *next >= edges.len() {
                // Every incident edge consumed: backtrack off the active path.
                stack.pop();
                on_path.remove(&vertex);
                continue;
            }

            let (edge, head) = edges[*next];
            *next += 1;

            if used.contains(&edge) {
                // Either the edge we arrived on or one already walked from
                // the other side; never a cycle on its own.
                continue;
            }
            used.insert(edge);

            if on_path.contains(&head) {
                return true;
            }

            seen.insert(head);
            on_path.insert(head);
            stack.push((head, subgraph.neighbours(head), 0));
        }
    }

    false
}
