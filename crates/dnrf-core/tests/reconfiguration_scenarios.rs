//! Integration tests: end-to-end reconfiguration-planning scenarios over the
//! public API — construction, downstream queries, contingency search, and
//! the what-if toggle workflow.
#![allow(clippy::expect_used)]

use dnrf_core::{
    GraphBuildError, NetworkDescription, QueryError, Terminal, TopologyGraph, ValidationError,
    Vertex, alternative_edges, build_graph, downstream_vertices, enabled_subgraph, has_cycle,
    is_connected,
};

fn vertex(id: u64) -> Vertex {
    Vertex {
        id,
        extra: serde_json::Map::new(),
    }
}

fn terminal(id: u64, attached_to: u64) -> Terminal {
    Terminal {
        id,
        vertex: attached_to,
        extra: serde_json::Map::new(),
    }
}

fn description(
    vertices: &[u64],
    lines: &[(u64, u64, u64, bool)],
    terminals: &[(u64, u64)],
    source: u64,
) -> NetworkDescription {
    NetworkDescription {
        vertices: vertices.iter().map(|&id| vertex(id)).collect(),
        edge_ids: lines.iter().map(|l| l.0).collect(),
        endpoints: lines.iter().map(|l| (l.1, l.2)).collect(),
        enabled: lines.iter().map(|l| l.3).collect(),
        terminals: terminals
            .iter()
            .map(|&(id, attached_to)| terminal(id, attached_to))
            .collect(),
        source,
    }
}

fn build(
    vertices: &[u64],
    lines: &[(u64, u64, u64, bool)],
    terminals: &[(u64, u64)],
    source: u64,
) -> TopologyGraph {
    build_graph(&description(vertices, lines, terminals, source)).expect("network should build")
}

/// Downstream sets of a fully enabled radial feeder.
///
/// 1 --6-- 2 --7-- 3
///         |
///         8
///         |
///         4 --9-- 5
#[test]
fn downstream_on_radial_feeder() {
    let g = build(
        &[1, 2, 3, 4, 5],
        &[
            (6, 1, 2, true),
            (7, 2, 3, true),
            (8, 2, 4, true),
            (9, 4, 5, true),
        ],
        &[],
        1,
    );
    assert_eq!(
        downstream_vertices(&g, 6, true).expect("query should succeed"),
        vec![2, 3, 4, 5]
    );
    assert_eq!(
        downstream_vertices(&g, 7, true).expect("query should succeed"),
        vec![3]
    );
    assert_eq!(
        downstream_vertices(&g, 9, true).expect("query should succeed"),
        vec![5]
    );
}

/// Contingency search on a star network with two tie edges.
#[test]
fn alternatives_on_star_network() {
    let g = build(
        &[0, 2, 4, 6, 10],
        &[
            (1, 0, 2, true),
            (3, 0, 4, true),
            (5, 0, 6, true),
            (7, 2, 4, false),
            (8, 4, 6, false),
            (9, 2, 10, true),
        ],
        &[],
        0,
    );
    assert_eq!(
        alternative_edges(&g, 1).expect("query should succeed"),
        vec![7]
    );
    assert_eq!(
        alternative_edges(&g, 3).expect("query should succeed"),
        vec![7, 8]
    );
    assert_eq!(
        alternative_edges(&g, 5).expect("query should succeed"),
        vec![8]
    );
    assert_eq!(
        alternative_edges(&g, 9).expect("query should succeed"),
        Vec::<u64>::new()
    );
}

/// A duplicate vertex id is reported with both of its positions.
#[test]
fn duplicate_vertex_id_reports_both_positions() {
    let d = description(
        &[1, 2, 3, 4, 4, 6],
        &[(9, 1, 2, true)],
        &[],
        1,
    );
    assert_eq!(
        build_graph(&d),
        Err(GraphBuildError::Validation(
            ValidationError::DuplicateVertexId {
                id: 4,
                first: 3,
                second: 4,
            }
        ))
    );
}

/// A disabled edge that strands a vertex fails construction even though the
/// full edge set would connect everything.
#[test]
fn disabled_edge_stranding_a_vertex_fails_construction() {
    let d = description(
        &[1, 2, 3, 4, 5],
        &[
            (6, 1, 2, true),
            (7, 2, 3, true),
            (8, 2, 4, true),
            (9, 4, 5, false),
        ],
        &[],
        1,
    );
    assert_eq!(build_graph(&d), Err(GraphBuildError::NotConnected));
}

/// The what-if workflow of the planning layer: toggle edges freely, then
/// re-establish the spanning-tree invariant through the explicit checks.
#[test]
fn what_if_toggle_workflow() {
    let mut g = build(
        &[1, 2, 3, 4],
        &[
            (5, 1, 2, true),
            (6, 2, 3, true),
            (7, 3, 4, true),
            (8, 4, 1, false),
        ],
        &[],
        1,
    );

    // Cut 6 and bring in the tie edge 8: still a spanning tree.
    g.set_edge_enabled(6, false).expect("disable should succeed");
    g.set_edge_enabled(8, true).expect("enable should succeed");
    let view = enabled_subgraph(&g, false);
    assert!(is_connected(&view));
    assert!(!has_cycle(&view));

    // Re-enable 6 as well: connected but over-connected.
    g.set_edge_enabled(6, true).expect("enable should succeed");
    let view = enabled_subgraph(&g, false);
    assert!(is_connected(&view));
    assert!(has_cycle(&view));

    // Toggling never re-validates; the graph happily holds the cyclic state.
    assert_eq!(g.is_edge_enabled(8), Ok(true));
}

/// A description arriving as loader JSON drives the same pipeline.
#[test]
fn json_description_end_to_end() {
    let json = r#"{
        "vertices": [
            {"id": 1, "u_rated": 10500.0},
            {"id": 2, "u_rated": 400.0},
            {"id": 3, "u_rated": 400.0}
        ],
        "edge_ids": [7, 8, 9],
        "endpoints": [[1, 2], [2, 3], [3, 1]],
        "enabled": [true, true, false],
        "terminals": [{"id": 16, "vertex": 3, "p_specified": 10000.0}],
        "source": 1
    }"#;
    let d: NetworkDescription = serde_json::from_str(json).expect("description should parse");
    let g = build_graph(&d).expect("network should build");

    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.line_count(), 3);
    assert_eq!(
        downstream_vertices(&g, 8, false).expect("query should succeed"),
        vec![3, 16]
    );
    assert_eq!(
        alternative_edges(&g, 7).expect("query should succeed"),
        vec![9]
    );
}

/// Query failures leave the graph unchanged and name the offending id.
#[test]
fn query_errors_are_specific() {
    let g = build(&[1, 2], &[(6, 1, 2, true), (7, 1, 2, false)], &[], 1);
    assert_eq!(
        downstream_vertices(&g, 99, true),
        Err(QueryError::EdgeNotFound(99))
    );
    assert_eq!(
        alternative_edges(&g, 7),
        Err(QueryError::EdgeAlreadyDisabled(7))
    );
    assert_eq!(g.is_edge_enabled(6), Ok(true));
    assert_eq!(g.is_edge_enabled(7), Ok(false));
}
