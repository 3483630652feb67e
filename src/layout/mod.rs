// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of permgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Grid layout: how many rows/columns each vertex reserves and where those land.
//!
//! Every edge is drawn as a single L-shaped connector. Which of the four L shapes is used depends
//! only on the edge's [`Side`] and on whether its left endpoint sits above or below its right
//! endpoint, so both the size calculator and the router share [`Corner::classify`].

use std::fmt;

use crate::model::{EdgeId, Graph, Layout, Side, VertexId};

pub mod expand;
pub mod size;

pub use expand::{SizedAxis, SizedLayout};
pub use size::{compute_needed_size, direction_counts, DirectionCounts};

/// A side of a cell or vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Top,
    Left,
    Right,
    Bottom,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Top, Self::Left, Self::Right, Self::Bottom];

    pub const fn idx(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Left => 1,
            Self::Right => 2,
            Self::Bottom => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Right => "right",
            Self::Bottom => "bottom",
        })
    }
}

/// The four L shapes, named by where the bend sits.
///
/// ```text
/// BottomLeft   TopLeft   TopRight   BottomRight
///   a ·         ╭─b        a─╮         · b
///   ╰─b         a ·        · b         a─╯
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    BottomLeft,
    TopLeft,
    TopRight,
    BottomRight,
}

impl Corner {
    pub const fn classify(side: Side, a_above_b: bool) -> Self {
        match (side, a_above_b) {
            (Side::Left, true) => Self::BottomLeft,
            (Side::Left, false) => Self::TopLeft,
            (Side::Right, true) => Self::TopRight,
            (Side::Right, false) => Self::BottomRight,
        }
    }

    /// Side of the left endpoint `a` the connector leaves through.
    pub const fn exit(self) -> Direction {
        match self {
            Self::BottomLeft => Direction::Bottom,
            Self::TopLeft => Direction::Top,
            Self::TopRight | Self::BottomRight => Direction::Right,
        }
    }

    /// Side of the right endpoint `b` the connector enters through.
    pub const fn entry(self) -> Direction {
        match self {
            Self::BottomLeft | Self::TopLeft => Direction::Left,
            Self::TopRight => Direction::Top,
            Self::BottomRight => Direction::Bottom,
        }
    }
}

/// An edge with endpoints ordered by horizontal rank and its L shape resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientedEdge {
    pub id: EdgeId,
    /// Endpoint with the smaller horizontal rank.
    pub a: VertexId,
    pub b: VertexId,
    pub corner: Corner,
}

/// Orients every edge of `graph` against `layout`, in edge id order.
///
/// `graph` and `layout` must cover the same vertex count.
pub fn orient_edges<'a>(
    graph: &'a Graph,
    layout: &'a Layout,
) -> impl Iterator<Item = OrientedEdge> + 'a {
    graph.edges_enumerated().map(move |(id, edge)| {
        let (u, v) = edge.endpoints();
        let (a, b) = if layout.row().rank(u) < layout.row().rank(v) {
            (u, v)
        } else {
            (v, u)
        };
        let a_above_b = layout.col().rank(a) < layout.col().rank(b);
        OrientedEdge {
            id,
            a,
            b,
            corner: Corner::classify(edge.side(), a_above_b),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{orient_edges, Corner, Direction};
    use crate::model::{Graph, Layout, Side, VertexId};

    #[test]
    fn classify_covers_all_four_shapes() {
        assert_eq!(Corner::classify(Side::Left, true), Corner::BottomLeft);
        assert_eq!(Corner::classify(Side::Left, false), Corner::TopLeft);
        assert_eq!(Corner::classify(Side::Right, true), Corner::TopRight);
        assert_eq!(Corner::classify(Side::Right, false), Corner::BottomRight);
    }

    #[test]
    fn exit_and_entry_never_coincide() {
        for corner in [
            Corner::BottomLeft,
            Corner::TopLeft,
            Corner::TopRight,
            Corner::BottomRight,
        ] {
            assert_ne!(corner.exit(), corner.entry());
        }
        assert_eq!(Corner::BottomRight.entry(), Direction::Bottom);
    }

    #[test]
    fn orients_by_row_rank_not_by_id() {
        let graph = Graph::new(2, &[(0, 1)], &[Side::Left]).unwrap();
        let layout = Layout::new(&[1, 0], &[0, 1]).unwrap();

        let oriented = orient_edges(&graph, &layout).collect::<Vec<_>>();
        assert_eq!(oriented.len(), 1);
        assert_eq!(oriented[0].a, VertexId::new(1));
        assert_eq!(oriented[0].b, VertexId::new(0));
        // Vertex 1 sits below vertex 0.
        assert_eq!(oriented[0].corner, Corner::TopLeft);
    }
}
