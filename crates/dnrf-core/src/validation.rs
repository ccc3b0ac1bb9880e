/// Input validation for a [`NetworkDescription`].
///
/// The checks are pure functions over the raw identifier collections; none of
/// them touch graph state. [`validate`] runs them in a fixed order and
/// reports the *first* violated precondition — later checks are not
/// evaluated once an earlier one fails, so a caller always sees one
/// well-defined error per invalid description:
///
/// 1. vertex-id uniqueness (structural vertices, then terminals);
/// 2. edge-id uniqueness;
/// 3. endpoint-pair count match;
/// 4. endpoint validity (line endpoints must name structural vertices);
/// 5. terminal-attachment validity;
/// 6. enabled-flag count match;
/// 7. source-vertex membership.
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::network::{EdgeId, NetworkDescription, Terminal, VertexId};

// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/// A violated construction precondition.
///
/// Every variant names the offending identifiers so the loader can point the
/// user at the exact entry in its input. Positions are zero-based indices
/// into the relevant identifier sequence; for vertices that sequence is the
/// structural vertices followed by the terminals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A vertex or terminal identifier appears more than once.
    DuplicateVertexId {
        /// The repeated identifier.
        id: VertexId,
        /// Position of its first occurrence.
        first: usize,
        /// Position of the repeat.
        second: usize,
    },
    /// A line-edge identifier appears more than once.
    DuplicateEdgeId {
        /// The repeated identifier.
        id: EdgeId,
        /// Position of its first occurrence.
        first: usize,
        /// Position of the repeat.
        second: usize,
    },
    /// `endpoints` does not carry exactly one pair per edge identifier.
    EndpointCountMismatch {
        /// Number of edge identifiers.
        edges: usize,
        /// Number of endpoint pairs supplied.
        endpoints: usize,
    },
    /// `enabled` does not carry exactly one flag per edge identifier.
    StatusCountMismatch {
        /// Number of edge identifiers.
        edges: usize,
        /// Number of enabled flags supplied.
        statuses: usize,
    },
    /// A line edge endpoint names a vertex absent from the structural set.
    UnknownEndpoint {
        /// The edge containing the dangling reference.
        edge_id: EdgeId,
        /// The vertex id that could not be resolved.
        vertex_id: VertexId,
    },
    /// A terminal attaches to a vertex absent from the structural set.
    UnknownAttachment {
        /// The terminal containing the dangling reference.
        terminal_id: VertexId,
        /// The vertex id that could not be resolved.
        vertex_id: VertexId,
    },
    /// The designated source vertex is absent from the structural set.
    UnknownSource {
        /// The vertex id that could not be resolved.
        vertex_id: VertexId,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateVertexId { id, first, second } => {
                write!(f, "duplicate vertex id {id} at positions {first} and {second}")
            }
            Self::DuplicateEdgeId { id, first, second } => {
                write!(f, "duplicate edge id {id} at positions {first} and {second}")
            }
            Self::EndpointCountMismatch { edges, endpoints } => {
                write!(f, "expected {edges} endpoint pairs, got {endpoints}")
            }
            Self::StatusCountMismatch { edges, statuses } => {
                write!(f, "expected {edges} enabled flags, got {statuses}")
            }
            Self::UnknownEndpoint { edge_id, vertex_id } => {
                write!(f, "edge {edge_id} references unknown vertex {vertex_id}")
            }
            Self::UnknownAttachment {
                terminal_id,
                vertex_id,
            } => {
                write!(f, "terminal {terminal_id} attaches to unknown vertex {vertex_id}")
            }
            Self::UnknownSource { vertex_id } => {
                write!(f, "source vertex {vertex_id} is not in the vertex set")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// Pure checks
// ---------------------------------------------------------------------------

/// A repeated identifier together with both of its positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duplicate {
    /// The repeated value.
    pub id: u64,
    /// Position of the first occurrence.
    pub first: usize,
    /// Position of the repeat.
    pub second: usize,
}

/// Returns the first repeated value in `ids`, if any.
///
/// "First" means the repeat whose second occurrence comes earliest in the
/// sequence, so the reported positions are stable for a given input.
pub fn find_duplicate(ids: impl IntoIterator<Item = u64>) -> Option<Duplicate> {
    let mut first_seen: HashMap<u64, usize> = HashMap::new();
    for (position, id) in ids.into_iter().enumerate() {
        if let Some(&first) = first_seen.get(&id) {
            return Some(Duplicate {
                id,
                first,
                second: position,
            });
        }
        first_seen.insert(id, position);
    }
    None
}

/// Returns `true` if a per-edge auxiliary collection has one entry per edge.
pub fn lengths_match(edges: usize, auxiliary: usize) -> bool {
    edges == auxiliary
}

/// Returns the first line endpoint that names a vertex outside `known`.
///
/// Pairs are scanned in order, first element before second; the result
/// carries the edge id the dangling reference belongs to.
pub fn first_unknown_endpoint(
    known: &HashSet<VertexId>,
    edge_ids: &[EdgeId],
    endpoints: &[(VertexId, VertexId)],
) -> Option<(EdgeId, VertexId)> {
    for (&edge_id, &(a, b)) in edge_ids.iter().zip(endpoints) {
        if !known.contains(&a) {
            return Some((edge_id, a));
        }
        if !known.contains(&b) {
            return Some((edge_id, b));
        }
    }
    None
}

/// Returns the first terminal whose attachment vertex is outside `known`.
pub fn first_unknown_attachment(
    known: &HashSet<VertexId>,
    terminals: &[Terminal],
) -> Option<(VertexId, VertexId)> {
    terminals
        .iter()
        .find(|t| !known.contains(&t.vertex))
        .map(|t| (t.id, t.vertex))
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

/// Validates a [`NetworkDescription`] against the construction preconditions.
///
/// Checks run in the fixed order listed in the module documentation; the
/// first failing check's error is returned and later checks are skipped.
/// A description that passes is structurally sound — identifier-unique,
/// length-consistent, and referentially closed — but may still fail the
/// connectivity and acyclicity checks applied during
/// [`build_graph`][crate::graph::build_graph].
pub fn validate(description: &NetworkDescription) -> Result<(), ValidationError> {
    let vertex_ids = description
        .vertices
        .iter()
        .map(|v| v.id)
        .chain(description.terminals.iter().map(|t| t.id));
    if let Some(dup) = find_duplicate(vertex_ids) {
        return Err(ValidationError::DuplicateVertexId {
            id: dup.id,
            first: dup.first,
            second: dup.second,
        });
    }

    if let Some(dup) = find_duplicate(description.edge_ids.iter().copied()) {
        return Err(ValidationError::DuplicateEdgeId {
            id: dup.id,
            first: dup.first,
            second: dup.second,
        });
    }

    if !lengths_match(description.edge_ids.len(), description.endpoints.len()) {
        return Err(ValidationError::EndpointCountMismatch {
            edges: description.edge_ids.len(),
            endpoints: description.endpoints.len(),
        });
    }

    let known: HashSet<VertexId> = description.vertices.iter().map(|v| v.id).collect();

    if let Some((edge_id, vertex_id)) =
        first_unknown_endpoint(&known, &description.edge_ids, &description.endpoints)
    {
        return Err(ValidationError::UnknownEndpoint { edge_id, vertex_id });
    }

    if let Some((terminal_id, vertex_id)) =
        first_unknown_attachment(&known, &description.terminals)
    {
        return Err(ValidationError::UnknownAttachment {
            terminal_id,
            vertex_id,
        });
    }

    if !lengths_match(description.edge_ids.len(), description.enabled.len()) {
        return Err(ValidationError::StatusCountMismatch {
            edges: description.edge_ids.len(),
            statuses: description.enabled.len(),
        });
    }

    if !known.contains(&description.source) {
        return Err(ValidationError::UnknownSource {
            vertex_id: description.source,
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
