// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of permgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text rendering for permuted-grid diagrams.
//!
//! A render call runs four stages, each rebuilt from scratch:
//! 1. [`crate::layout::compute_needed_size`] decides how many lanes each vertex reserves.
//! 2. [`crate::layout::SizedLayout`] expands both permutations by those sizes.
//! 3. [`Grid::build`] places vertex blocks and [`route_edges`] draws one L per edge.
//! 4. The grid is turned into a [`Diagram`], which is painted through a [`ColorOverlay`].

use std::fmt;

use crate::layout::{compute_needed_size, SizedLayout};
use crate::model::{Graph, Layout};

pub mod cell;
pub mod diagram;
pub mod grid;
pub mod paint;
pub mod route;

pub use crate::model::ColorOverlay;
pub use cell::{Cell, Glyph, Path};
pub use diagram::{Diagram, Fragment, Owner};
pub use grid::{GeometryError, Grid};
pub use paint::{NoPaint, Paint};
pub use route::route_edges;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Printed for cells no vertex or connector occupies.
    pub empty_cell: char,
    /// Printed between two cells that are not joined by a connector.
    pub gap: char,
    /// Box-drawing glyphs when set, `| - +` otherwise.
    pub unicode: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            empty_cell: '·',
            gap: ' ',
            unicode: true,
        }
    }
}

impl RenderOptions {
    /// Pure ASCII output for sinks without box-drawing support.
    pub fn ascii() -> Self {
        Self {
            empty_cell: '.',
            gap: ' ',
            unicode: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    VertexCountMismatch { graph: usize, layout: usize },
    Geometry(GeometryError),
    /// Two joined cells at `(x - 1, y)` and `(x, y)` carry no owned arm between them.
    NoSharedArm { x: usize, y: usize },
    /// A paint token failed to write its fragment.
    Paint(fmt::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexCountMismatch { graph, layout } => write!(
                f,
                "graph has {graph} vertices but the layout permutes {layout}"
            ),
            Self::Geometry(err) => write!(f, "geometry error: {err}"),
            Self::NoSharedArm { x, y } => write!(
                f,
                "no connector arm to take a color from between cells ({},{y}) and ({x},{y})",
                x.saturating_sub(1)
            ),
            Self::Paint(err) => write!(f, "paint failed: {err}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Geometry(err) => Some(err),
            Self::Paint(err) => Some(err),
            Self::VertexCountMismatch { .. } | Self::NoSharedArm { .. } => None,
        }
    }
}

impl From<GeometryError> for RenderError {
    fn from(value: GeometryError) -> Self {
        Self::Geometry(value)
    }
}

/// Sizes, expands, places and routes: everything up to (not including) text conversion.
pub fn build_grid(graph: &Graph, layout: &Layout) -> Result<Grid, RenderError> {
    if graph.vertex_count() != layout.vertex_count() {
        return Err(RenderError::VertexCountMismatch {
            graph: graph.vertex_count(),
            layout: layout.vertex_count(),
        });
    }

    let sized = SizedLayout::new(layout, compute_needed_size(graph, layout));
    let mut grid = Grid::build(&sized)?;
    route_edges(&mut grid, graph, layout, &sized)?;

    tracing::debug!(
        width = grid.width(),
        height = grid.height(),
        edges = graph.edge_count(),
        "routed grid"
    );
    Ok(grid)
}

/// Renders without applying any colors.
pub fn render_diagram(
    graph: &Graph,
    layout: &Layout,
    options: &RenderOptions,
) -> Result<Diagram, RenderError> {
    let grid = build_grid(graph, layout)?;
    diagram::draw(&grid, options)
}

/// Renders with default options and paints every element `overlay` has an entry for.
pub fn render<P: Paint>(
    graph: &Graph,
    layout: &Layout,
    overlay: &ColorOverlay<P>,
) -> Result<String, RenderError> {
    render_with_options(graph, layout, overlay, &RenderOptions::default())
}

pub fn render_with_options<P: Paint>(
    graph: &Graph,
    layout: &Layout,
    overlay: &ColorOverlay<P>,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    render_diagram(graph, layout, options)?
        .paint(overlay)
        .map_err(RenderError::Paint)
}
