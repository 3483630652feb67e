// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of permgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{EdgeId, Graph, VertexId};

use super::{check_inputs, Frontier, Step, TraverseError, Weights};

/// Minimum spanning tree growth from a start vertex.
///
/// Each step attaches the vertex reachable through the lightest edge leaving the tree. Only the
/// start's component is spanned.
#[derive(Debug, Clone)]
pub struct Prim<'g> {
    graph: &'g Graph,
    weights: &'g Weights,
    frontier: Frontier,
    tree_edges: Vec<EdgeId>,
}

pub fn prim<'g>(
    graph: &'g Graph,
    weights: &'g Weights,
    start: VertexId,
) -> Result<Prim<'g>, TraverseError> {
    check_inputs(graph, weights, start)?;
    Ok(Prim {
        graph,
        weights,
        frontier: Frontier::new(graph.vertex_count(), start),
        tree_edges: Vec::new(),
    })
}

impl Prim<'_> {
    /// Tree edges chosen so far, in the order they were added.
    pub fn tree_edges(&self) -> &[EdgeId] {
        &self.tree_edges
    }

    pub fn total_weight(&self) -> u64 {
        self.tree_edges
            .iter()
            .map(|&edge| self.weights.get(edge))
            .sum()
    }
}

impl Iterator for Prim<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let entry = self.frontier.settle()?;
        if let Some(edge) = entry.via {
            self.tree_edges.push(edge);
        }

        for (edge, neighbor) in self.graph.incident(entry.vertex) {
            if !self.frontier.is_settled(neighbor) {
                self.frontier.offer(neighbor, self.weights.get(edge), Some(edge));
            }
        }

        tracing::trace!(vertex = %entry.vertex, weight = entry.key, "prim attached");
        Some(Step {
            vertex: entry.vertex,
            via: entry.via,
            distance: entry.key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::prim;
    use crate::model::{fixtures, EdgeId, VertexId};
    use crate::traverse::{dijkstra, Step, Weights};

    fn ids(values: &[usize]) -> Vec<EdgeId> {
        values.iter().copied().map(EdgeId::new).collect()
    }

    #[test]
    fn small_demo_tree() {
        let demo = fixtures::small();
        let weights = Weights::new(&demo.graph, demo.weights.clone()).unwrap();
        let mut run = prim(&demo.graph, &weights, demo.start).unwrap();
        let order: Vec<usize> = run.by_ref().map(|step| step.vertex.index()).collect();

        assert_eq!(order, vec![0, 2, 1, 3, 4]);
        assert_eq!(run.tree_edges(), ids(&[1, 2, 3, 6]).as_slice());
        assert_eq!(run.total_weight(), 10);
    }

    #[test]
    fn keys_are_edge_weights_not_path_lengths() {
        let demo = fixtures::weighted();
        let weights = Weights::new(&demo.graph, demo.weights.clone()).unwrap();
        let steps: Vec<Step> = prim(&demo.graph, &weights, demo.start).unwrap().collect();

        let tail = steps.last().unwrap();
        assert_eq!(tail.vertex, VertexId::new(6));
        assert_eq!(tail.distance, 8);
    }

    #[test]
    fn order_differs_from_path_length_keying() {
        let demo = fixtures::small();
        let weights = Weights::new(&demo.graph, demo.weights.clone()).unwrap();
        let by_edge: Vec<usize> = prim(&demo.graph, &weights, demo.start)
            .unwrap()
            .map(|step| step.vertex.index())
            .collect();
        let by_path: Vec<usize> = dijkstra(&demo.graph, &weights, demo.start)
            .unwrap()
            .map(|step| step.vertex.index())
            .collect();

        // Intentional: the frontier is keyed on the connecting edge alone. Keying on
        // `distance(u) + weight(u, v)` would settle 4 (7) before 3 (8); edge keys attach 3 through
        // the weight-1 edge first.
        assert_eq!(by_edge, vec![0, 2, 1, 3, 4]);
        assert_eq!(by_path, vec![0, 2, 1, 4, 3]);
    }

    #[test]
    fn complete_graph_is_a_star_from_zero() {
        let demo = fixtures::complete();
        let weights = Weights::new(&demo.graph, demo.weights.clone()).unwrap();
        let mut run = prim(&demo.graph, &weights, VertexId::new(0)).unwrap();
        run.by_ref().for_each(drop);

        // Edges 0..7 are (0, 1) .. (0, 7), the seven lightest.
        assert_eq!(run.tree_edges(), ids(&[0, 1, 2, 3, 4, 5, 6]).as_slice());
    }
}
