// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of permgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Graph, VertexId};

use super::{check_inputs, Frontier, Step, TraverseError, Weights};

/// Shortest-path traversal, yielding vertices in the order their distance becomes final.
#[derive(Debug, Clone)]
pub struct Dijkstra<'g> {
    graph: &'g Graph,
    weights: &'g Weights,
    frontier: Frontier,
    distances: Vec<Option<u64>>,
}

pub fn dijkstra<'g>(
    graph: &'g Graph,
    weights: &'g Weights,
    start: VertexId,
) -> Result<Dijkstra<'g>, TraverseError> {
    check_inputs(graph, weights, start)?;
    Ok(Dijkstra {
        graph,
        weights,
        frontier: Frontier::new(graph.vertex_count(), start),
        distances: vec![None; graph.vertex_count()],
    })
}

impl Dijkstra<'_> {
    /// Final distance per vertex, by vertex id. `None` until settled (or forever, if unreachable).
    pub fn distances(&self) -> &[Option<u64>] {
        &self.distances
    }

    pub fn distance(&self, vertex: VertexId) -> Option<u64> {
        self.distances.get(vertex.index()).copied().flatten()
    }
}

impl Iterator for Dijkstra<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let entry = self.frontier.settle()?;
        self.distances[entry.vertex.index()] = Some(entry.key);

        for (edge, neighbor) in self.graph.incident(entry.vertex) {
            if self.frontier.is_settled(neighbor) {
                continue;
            }
            let through = entry.key.saturating_add(self.weights.get(edge));
            self.frontier.offer(neighbor, through, Some(edge));
        }

        tracing::trace!(vertex = %entry.vertex, distance = entry.key, "dijkstra settled");
        Some(Step {
            vertex: entry.vertex,
            via: entry.via,
            distance: entry.key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::dijkstra;
    use crate::model::{fixtures, EdgeId, Graph, VertexId};
    use crate::traverse::{Step, Weights};

    fn step(vertex: usize, via: Option<usize>, distance: u64) -> Step {
        Step {
            vertex: VertexId::new(vertex),
            via: via.map(EdgeId::new),
            distance,
        }
    }

    #[test]
    fn small_demo_settle_order() {
        let demo = fixtures::small();
        let weights = Weights::new(&demo.graph, demo.weights.clone()).unwrap();
        let mut run = dijkstra(&demo.graph, &weights, demo.start).unwrap();
        let steps: Vec<Step> = run.by_ref().collect();

        assert_eq!(
            steps,
            vec![
                step(0, None, 0),
                step(2, Some(1), 5),
                // 1 and 4 tie at 7; the lower id settles first.
                step(1, Some(2), 7),
                step(4, Some(6), 7),
                step(3, Some(3), 8),
            ]
        );
        assert_eq!(
            run.distances(),
            &[Some(0), Some(7), Some(5), Some(8), Some(7)]
        );
    }

    #[test]
    fn weighted_demo_reaches_the_tail() {
        let demo = fixtures::weighted();
        let weights = Weights::new(&demo.graph, demo.weights.clone()).unwrap();
        let mut run = dijkstra(&demo.graph, &weights, demo.start).unwrap();
        let last = run.by_ref().last().unwrap();

        assert_eq!(last, step(6, Some(10), 22));
        assert_eq!(run.distance(VertexId::new(5)), Some(14));
    }

    #[test]
    fn parallel_edges_use_the_lighter_one() {
        let graph = Graph::with_alternating_sides(2, &[(0, 1), (1, 0)]).unwrap();
        let weights = Weights::new(&graph, vec![9, 4]).unwrap();
        let steps: Vec<Step> = dijkstra(&graph, &weights, VertexId::new(0))
            .unwrap()
            .collect();
        assert_eq!(steps[1], step(1, Some(1), 4));
    }

    #[test]
    fn unreachable_distance_stays_none() {
        let graph = Graph::with_alternating_sides(3, &[(0, 1)]).unwrap();
        let weights = Weights::uniform(&graph);
        let mut run = dijkstra(&graph, &weights, VertexId::new(1)).unwrap();
        assert_eq!(run.by_ref().count(), 2);
        assert_eq!(run.distances(), &[Some(1), Some(0), None]);
    }
}
