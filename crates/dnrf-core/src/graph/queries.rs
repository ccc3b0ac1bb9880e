/// Downstream reachability query.
///
/// Answers "which vertices lie on the far side of this edge from the
/// source?" by building a BFS tree over the enabled-edge view and collecting
/// the descendant set of the queried edge's far endpoint. Results are sorted
/// by vertex identifier so repeated calls are directly comparable.
use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::stable_graph::NodeIndex;

use crate::graph::filter::enabled_subgraph;
use crate::graph::{QueryError, TopologyGraph};
use crate::network::{EdgeId, VertexId};

/// Returns the vertices downstream of the given line edge, sorted by id.
///
/// A disabled edge has no downstream by definition and yields an empty
/// result. With `exclude_terminals` set the BFS tree is built over the
/// structural subgraph only, so terminal ids never appear in the result.
///
/// In hypothetical states the queried edge may not be part of the BFS tree
/// at all — because its endpoints are unreachable, or because the edge is a
/// chord of a cycle. Both cases yield an empty result rather than an error:
/// nothing hangs off an edge the tree does not use.
///
/// # Errors
///
/// - [`QueryError::EdgeNotFound`] if `edge_id` does not name a line edge.
/// - [`QueryError::SourceNotFound`] if the source vertex was rebound to an
///   id absent from the vertex set.
pub fn downstream_vertices(
    graph: &TopologyGraph,
    edge_id: EdgeId,
    exclude_terminals: bool,
) -> Result<Vec<VertexId>, QueryError> {
    let edge_idx = *graph
        .line_index(edge_id)
        .ok_or_else(|| QueryError::EdgeNotFound(edge_id))?;

    if !graph.edge_weight(edge_idx).is_some_and(|w| w.enabled) {
        return Ok(Vec::new());
    }

    let source_idx = *graph
        .vertex_index(graph.source())
        .ok_or_else(|| QueryError::SourceNotFound(graph.source()))?;

    let view = enabled_subgraph(graph, exclude_terminals);

    // BFS tree rooted at the source: parent and children relations over the
    // view's edges.
    let mut parent: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut children: HashMap<NodeIndex, Vec<NodeIndex>> = HashMap::new();
    let mut visited: HashSet<NodeIndex> = HashSet::new();
    let mut queue: VecDeque<NodeIndex> = VecDeque::new();

    visited.insert(source_idx);
    queue.push_back(source_idx);

    while let Some(current) = queue.pop_front() {
        for (_, neighbour) in view.neighbours(current) {
            if !visited.contains(&neighbour) {
                visited.insert(neighbour);
                parent.insert(neighbour, current);
                children.entry(current).or_default().push(neighbour);
                queue.push_back(neighbour);
            }
        }
    }

    let Some((tail, head)) = graph.graph().edge_endpoints(edge_idx) else {
        return Ok(Vec::new());
    };

    // The far endpoint is the one the BFS tree reaches *via* the edge, i.e.
    // the child side of the parent relation.
    let far = if parent.get(&head) == Some(&tail) {
        head
    } else if parent.get(&tail) == Some(&head) {
        tail
    } else {
        return Ok(Vec::new());
    };

    // The far endpoint plus its full descendant set within the BFS tree.
    let mut result: Vec<VertexId> = Vec::new();
    let mut stack: Vec<NodeIndex> = vec![far];
    while let Some(current) = stack.pop() {
        if let Some(weight) = graph.vertex_weight(current) {
            result.push(weight.id);
        }
        if let Some(kids) = children.get(&current) {
            stack.extend(kids.iter().copied());
        }
    }
    result.sort_unstable();

    Ok(result)
}
