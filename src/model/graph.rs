// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of permgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::Deserialize;

use super::ids::{EdgeId, VertexId};

/// Which corner an edge's L-shaped connector bends around.
///
/// With `a` the endpoint further left, `Left` runs vertically out of `a` and then horizontally
/// into `b`; `Right` runs horizontally out of `a` and then vertically into `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    u: VertexId,
    v: VertexId,
    side: Side,
}

impl Edge {
    pub fn side(&self) -> Side {
        self.side
    }

    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.u, self.v)
    }

    /// Returns the endpoint opposite to `vertex`, or `None` if `vertex` is not on this edge.
    pub fn other(&self, vertex: VertexId) -> Option<VertexId> {
        if self.u == vertex {
            Some(self.v)
        } else if self.v == vertex {
            Some(self.u)
        } else {
            None
        }
    }
}

/// An undirected graph with per-edge corner sides.
///
/// Edge ids are insertion positions. Parallel edges are allowed; self-loops are not, because an
/// L-shaped connector cannot start and end on the same vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Builds a graph from endpoint pairs and one side tag per edge.
    pub fn new(
        vertex_count: usize,
        endpoints: &[(usize, usize)],
        sides: &[Side],
    ) -> Result<Self, GraphError> {
        if sides.len() < endpoints.len() {
            return Err(GraphError::MissingSide {
                edge: EdgeId::new(sides.len()),
            });
        }
        if sides.len() > endpoints.len() {
            return Err(GraphError::ExtraSides {
                edges: endpoints.len(),
                sides: sides.len(),
            });
        }

        let mut edges = Vec::with_capacity(endpoints.len());
        for (idx, (&(u, v), &side)) in endpoints.iter().zip(sides).enumerate() {
            let edge = EdgeId::new(idx);
            for vertex in [u, v] {
                if vertex >= vertex_count {
                    return Err(GraphError::EndpointOutOfRange {
                        edge,
                        vertex,
                        vertex_count,
                    });
                }
            }
            if u == v {
                return Err(GraphError::SelfLoop {
                    edge,
                    vertex: VertexId::new(u),
                });
            }
            edges.push(Edge {
                u: VertexId::new(u),
                v: VertexId::new(v),
                side,
            });
        }

        Ok(Self {
            vertex_count,
            edges,
        })
    }

    /// Builds a graph whose edges alternate `Left`, `Right`, `Left`, ... by insertion order.
    pub fn with_alternating_sides(
        vertex_count: usize,
        endpoints: &[(usize, usize)],
    ) -> Result<Self, GraphError> {
        let sides = (0..endpoints.len())
            .map(|idx| if idx % 2 == 0 { Side::Left } else { Side::Right })
            .collect::<Vec<_>>();
        Self::new(vertex_count, endpoints, &sides)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, edge_id: EdgeId) -> Option<&Edge> {
        self.edges.get(edge_id.index())
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertex_count).map(VertexId::new)
    }

    /// Iterates `(edge_id, edge)` in insertion order.
    pub fn edges_enumerated(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(idx, edge)| (EdgeId::new(idx), edge))
    }

    /// Iterates `(edge_id, neighbor)` for every edge touching `vertex`, in edge id order.
    pub fn incident(&self, vertex: VertexId) -> impl Iterator<Item = (EdgeId, VertexId)> + '_ {
        self.edges_enumerated()
            .filter_map(move |(edge_id, edge)| edge.other(vertex).map(|other| (edge_id, other)))
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.index() < self.vertex_count
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    EndpointOutOfRange {
        edge: EdgeId,
        vertex: usize,
        vertex_count: usize,
    },
    SelfLoop {
        edge: EdgeId,
        vertex: VertexId,
    },
    MissingSide {
        edge: EdgeId,
    },
    ExtraSides {
        edges: usize,
        sides: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndpointOutOfRange {
                edge,
                vertex,
                vertex_count,
            } => write!(
                f,
                "edge {edge} references vertex {vertex}, but the graph has {vertex_count} vertices"
            ),
            Self::SelfLoop { edge, vertex } => {
                write!(f, "edge {edge} is a self-loop on vertex {vertex}")
            }
            Self::MissingSide { edge } => write!(f, "edge {edge} has no side tag"),
            Self::ExtraSides { edges, sides } => {
                write!(f, "{sides} side tags given for {edges} edges")
            }
        }
    }
}

impl std::error::Error for GraphError {}
