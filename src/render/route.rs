// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of permgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::layout::{orient_edges, Corner, Direction, OrientedEdge, SizedAxis, SizedLayout};
use crate::model::{EdgeId, Graph, Layout, VertexId};

use super::cell::Glyph;
use super::grid::{GeometryError, Grid};

/// Per-vertex, per-direction count of lanes already handed out.
///
/// Lanes for Top/Bottom connectors are columns (taken from the horizontal axis); lanes for
/// Left/Right connectors are lines (taken from the vertical axis). Within one vertex and
/// direction they are handed out first come, first served.
struct RoutingCounters<'a> {
    sized: &'a SizedLayout,
    used: Vec<[usize; 4]>,
}

impl<'a> RoutingCounters<'a> {
    fn new(sized: &'a SizedLayout) -> Self {
        Self {
            sized,
            used: vec![[0; 4]; sized.needed_size().len()],
        }
    }

    fn take(
        &mut self,
        edge: EdgeId,
        vertex: VertexId,
        direction: Direction,
    ) -> Result<usize, GeometryError> {
        let axis = match direction {
            Direction::Top | Direction::Bottom => self.sized.row(),
            Direction::Left | Direction::Right => self.sized.col(),
        };
        let used = &mut self.used[vertex.index()][direction.idx()];
        let slot = axis.slot(vertex, *used).ok_or(GeometryError::SlotExhausted {
            edge,
            vertex,
            direction,
            reserved: axis.slots(vertex).len(),
        })?;
        *used += 1;
        Ok(slot)
    }
}

fn first(
    axis: &SizedAxis,
    edge: EdgeId,
    vertex: VertexId,
    direction: Direction,
) -> Result<usize, GeometryError> {
    axis.first(vertex).ok_or(GeometryError::SlotExhausted {
        edge,
        vertex,
        direction,
        reserved: 0,
    })
}

fn last(
    axis: &SizedAxis,
    edge: EdgeId,
    vertex: VertexId,
    direction: Direction,
) -> Result<usize, GeometryError> {
    axis.last(vertex).ok_or(GeometryError::SlotExhausted {
        edge,
        vertex,
        direction,
        reserved: 0,
    })
}

/// Draws every edge of `graph` into `grid` as an L-shaped connector, in edge id order.
///
/// `grid` must have been built from `sized`, and `sized` from `layout` with sizes covering every
/// connector. Crossing connectors merge into `┼`; any other overlap aborts with the offending edge.
pub fn route_edges(
    grid: &mut Grid,
    graph: &Graph,
    layout: &Layout,
    sized: &SizedLayout,
) -> Result<(), GeometryError> {
    let mut counters = RoutingCounters::new(sized);
    for edge in orient_edges(graph, layout) {
        route_edge(grid, sized, &mut counters, edge)?;
    }
    Ok(())
}

fn route_edge(
    grid: &mut Grid,
    sized: &SizedLayout,
    counters: &mut RoutingCounters<'_>,
    edge: OrientedEdge,
) -> Result<(), GeometryError> {
    let OrientedEdge { id, a, b, corner } = edge;
    let (row, col) = (sized.row(), sized.col());
    let exit = corner.exit();
    let entry = corner.entry();

    tracing::trace!(edge = %id, a = %a, b = %b, ?corner, "routing edge");

    match corner {
        Corner::BottomLeft => {
            // a ·
            // ╰─b
            let ax = counters.take(id, a, exit)?;
            let ay = last(col, id, a, exit)?;
            let bx = first(row, id, b, entry)?;
            let by = counters.take(id, b, entry)?;

            grid.draw_vline(ax, ay + 1, by, id)?;
            grid.stamp(ax, by, Glyph::BottomLeft, id)?;
            grid.draw_hline(ax + 1, bx, by, id)?;
        }
        Corner::TopLeft => {
            // ╭─b
            // a ·
            let ax = counters.take(id, a, exit)?;
            let ay = first(col, id, a, exit)?;
            let bx = first(row, id, b, entry)?;
            let by = counters.take(id, b, entry)?;

            grid.draw_vline(ax, by + 1, ay, id)?;
            grid.stamp(ax, by, Glyph::TopLeft, id)?;
            grid.draw_hline(ax + 1, bx, by, id)?;
        }
        Corner::TopRight => {
            // a─╮
            // · b
            let ax = last(row, id, a, exit)?;
            let ay = counters.take(id, a, exit)?;
            let bx = counters.take(id, b, entry)?;
            let by = first(col, id, b, entry)?;

            grid.draw_vline(bx, ay + 1, by, id)?;
            grid.stamp(bx, ay, Glyph::TopRight, id)?;
            grid.draw_hline(ax + 1, bx, ay, id)?;
        }
        Corner::BottomRight => {
            // · b
            // a─╯
            let ax = last(row, id, a, exit)?;
            let ay = counters.take(id, a, exit)?;
            let bx = counters.take(id, b, entry)?;
            let by = last(col, id, b, entry)?;

            grid.draw_vline(bx, by + 1, ay, id)?;
            grid.stamp(bx, ay, Glyph::BottomRight, id)?;
            grid.draw_hline(ax + 1, bx, ay, id)?;
        }
    }

    Ok(())
}
