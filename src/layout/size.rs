// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of permgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Graph, Layout};

use super::orient_edges;

/// Number of connectors leaving each vertex per [`super::Direction`], indexed by `Direction::idx`.
pub type DirectionCounts = [usize; 4];

/// Counts, per vertex, the connectors that leave it through each side.
pub fn direction_counts(graph: &Graph, layout: &Layout) -> Vec<DirectionCounts> {
    let mut counts = vec![[0usize; 4]; graph.vertex_count()];
    for edge in orient_edges(graph, layout) {
        counts[edge.a.index()][edge.corner.exit().idx()] += 1;
        counts[edge.b.index()][edge.corner.entry().idx()] += 1;
    }
    counts
}

/// Rows/columns each vertex must reserve so that no two connectors share a lane.
///
/// A vertex needs one lane per connector leaving it through the same side; connectors leaving
/// through different sides never compete, so the size is the busiest side (at least 1).
pub fn compute_needed_size(graph: &Graph, layout: &Layout) -> Vec<usize> {
    let needed = direction_counts(graph, layout)
        .iter()
        .map(|counts| counts.iter().copied().max().unwrap_or(0).max(1))
        .collect::<Vec<_>>();

    tracing::debug!(
        vertices = needed.len(),
        grid = needed.iter().sum::<usize>(),
        "computed needed sizes"
    );
    needed
}
