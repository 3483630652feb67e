// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of permgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Step-by-step graph traversals that drive a [`ColorOverlay`].
//!
//! Both traversals are lazy iterators yielding one [`Step`] per vertex as it is settled, so a
//! driver can repaint the diagram between steps. Edges are undirected for traversal purposes.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;
use std::str::FromStr;

use crate::model::{ColorOverlay, EdgeId, Graph, VertexId};

pub mod dijkstra;
pub mod prim;

pub use dijkstra::{dijkstra, Dijkstra};
pub use prim::{prim, Prim};

/// One non-negative weight per edge, indexed by edge id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weights(Vec<u64>);

impl Weights {
    pub fn new(graph: &Graph, values: Vec<u64>) -> Result<Self, TraverseError> {
        if values.len() != graph.edge_count() {
            return Err(TraverseError::WeightCountMismatch {
                edges: graph.edge_count(),
                weights: values.len(),
            });
        }
        Ok(Self(values))
    }

    /// Weight 1 on every edge.
    pub fn uniform(graph: &Graph) -> Self {
        Self(vec![1; graph.edge_count()])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, edge: EdgeId) -> u64 {
        self.0[edge.index()]
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }
}

/// A vertex joining the settled set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub vertex: VertexId,
    /// The edge the vertex was reached through; `None` for the start vertex.
    pub via: Option<EdgeId>,
    /// Path length from the start for Dijkstra, weight of `via` for Prim.
    pub distance: u64,
}

impl Step {
    /// Paints the settled vertex and, if there is one, the edge it was reached through.
    pub fn apply<P>(&self, overlay: &mut ColorOverlay<P>, vertex_paint: P, edge_paint: P) {
        overlay.set_vertex(self.vertex, vertex_paint);
        if let Some(edge) = self.via {
            overlay.set_edge(edge, edge_paint);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Dijkstra,
    Prim,
}

impl Algorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dijkstra => "dijkstra",
            Self::Prim => "prim",
        }
    }

    /// Runs the traversal to completion.
    pub fn steps(
        self,
        graph: &Graph,
        weights: &Weights,
        start: VertexId,
    ) -> Result<Vec<Step>, TraverseError> {
        Ok(match self {
            Self::Dijkstra => dijkstra(graph, weights, start)?.collect(),
            Self::Prim => prim(graph, weights, start)?.collect(),
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError;

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown traversal (expected `dijkstra` or `prim`)")
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dijkstra" => Ok(Self::Dijkstra),
            "prim" | "prims" => Ok(Self::Prim),
            _ => Err(ParseAlgorithmError),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraverseError {
    StartOutOfRange { start: VertexId, vertex_count: usize },
    WeightCountMismatch { edges: usize, weights: usize },
}

impl fmt::Display for TraverseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfRange {
                start,
                vertex_count,
            } => write!(
                f,
                "start vertex {start} is out of range for a graph with {vertex_count} vertices"
            ),
            Self::WeightCountMismatch { edges, weights } => {
                write!(f, "{weights} weights given for {edges} edges")
            }
        }
    }
}

impl std::error::Error for TraverseError {}

fn check_inputs(graph: &Graph, weights: &Weights, start: VertexId) -> Result<(), TraverseError> {
    if !graph.contains_vertex(start) {
        return Err(TraverseError::StartOutOfRange {
            start,
            vertex_count: graph.vertex_count(),
        });
    }
    if weights.len() != graph.edge_count() {
        return Err(TraverseError::WeightCountMismatch {
            edges: graph.edge_count(),
            weights: weights.len(),
        });
    }
    Ok(())
}

/// Queue entries order by key, then vertex id, then edge id, so ties settle deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    key: u64,
    vertex: VertexId,
    via: Option<EdgeId>,
}

/// Min-queue of tentative keys with lazy deletion of stale entries.
#[derive(Debug, Clone)]
struct Frontier {
    heap: BinaryHeap<Reverse<Entry>>,
    best: Vec<Option<u64>>,
    settled: Vec<bool>,
}

impl Frontier {
    fn new(vertex_count: usize, start: VertexId) -> Self {
        let mut frontier = Self {
            heap: BinaryHeap::new(),
            best: vec![None; vertex_count],
            settled: vec![false; vertex_count],
        };
        frontier.offer(start, 0, None);
        frontier
    }

    /// Queues `vertex` under `key` unless it is settled or already queued with a key at most as
    /// small.
    fn offer(&mut self, vertex: VertexId, key: u64, via: Option<EdgeId>) {
        let idx = vertex.index();
        if self.settled[idx] || self.best[idx].is_some_and(|best| best <= key) {
            return;
        }
        self.best[idx] = Some(key);
        self.heap.push(Reverse(Entry { key, vertex, via }));
    }

    /// Pops the smallest entry whose vertex is not settled yet and settles it.
    fn settle(&mut self) -> Option<Entry> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            let idx = entry.vertex.index();
            if self.settled[idx] {
                continue;
            }
            self.settled[idx] = true;
            return Some(entry);
        }
        None
    }

    fn is_settled(&self, vertex: VertexId) -> bool {
        self.settled[vertex.index()]
    }
}
