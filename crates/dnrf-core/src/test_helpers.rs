//! Shared test helper functions for constructing network fixtures.
//!
//! This module is compiled only in test builds and provides common
//! constructors for [`NetworkDescription`] and [`TopologyGraph`] used across
//! unit test modules throughout `dnrf-core`.
//!
//! Integration tests in `crates/dnrf-core/tests/` define their own local
//! helpers because they link against the non-test library build where this
//! module is not available.
#![allow(clippy::expect_used)]

use crate::graph::{TopologyGraph, build_graph};
use crate::network::{EdgeId, NetworkDescription, Terminal, Vertex, VertexId};

/// Creates a [`Vertex`] with no attributes.
pub fn vertex(id: VertexId) -> Vertex {
    Vertex {
        id,
        extra: serde_json::Map::new(),
    }
}

/// Creates a [`Terminal`] attached to the given structural vertex.
pub fn terminal(id: VertexId, attached_to: VertexId) -> Terminal {
    Terminal {
        id,
        vertex: attached_to,
        extra: serde_json::Map::new(),
    }
}

/// Builds a [`NetworkDescription`] from compact fixture data.
///
/// `lines` entries are `(edge id, endpoint a, endpoint b, enabled)` tuples;
/// `terminals` entries are `(terminal id, attachment vertex)` pairs.
pub fn description(
    vertices: &[VertexId],
    lines: &[(EdgeId, VertexId, VertexId, bool)],
    terminals: &[(VertexId, VertexId)],
    source: VertexId,
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

/// Builds a [`TopologyGraph`] from compact fixture data, panicking on a
/// build failure (test-only).
pub fn build(
    vertices: &[VertexId],
    lines: &[(EdgeId, VertexId, VertexId, bool)],
    terminals: &[(VertexId, VertexId)],
    source: VertexId,
) -> TopologyGraph {
    build_graph(&description(vertices, lines, terminals, source)).expect("fixture should build")
}

/// The radial feeder used across the unit tests.
///
/// ```text
/// 15> 1 --6-- 2 --7-- 3 ---- (12)
///     |
///     |      [10]           10: 2-4, disabled
///     |
///     +--8-- 4 ------- (13)
///     |
///     |      [11]           11: 4-5, disabled
///     |
///     +--9-- 5 ------- (14)
/// ```
///
/// Five structural vertices, four enabled lines, two disabled tie lines,
/// three terminals, source at vertex 1.
pub fn radial_fixture() -> TopologyGraph {
    build(
        &[1, 2, 3, 4, 5],
        &[
            (6, 1, 2, true),
            (7, 2, 3, true),
            (8, 1, 4, true),
            (9, 1, 5, true),
            (10, 2, 4, false),
            (11, 4, 5, false),
        ],
        &[(12, 3), (13, 4), (14, 5)],
        1,
    )
}
