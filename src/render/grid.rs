// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of permgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::layout::{Direction, SizedLayout};
use crate::model::{EdgeId, VertexId};

use super::cell::{Cell, Glyph, Path};

/// A fixed-size, bounds-checked grid of [`Cell`]s, indexed `(x, y)` with `y` growing downwards.
///
/// Collision behavior is strict:
/// - a straight glyph stamped across the orthogonal straight glyph merges into `┼`
/// - anything else stamped onto a non-empty cell is a [`GeometryError`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-empty grid.
    pub fn new(width: usize, height: usize) -> Result<Self, GeometryError> {
        let len = width
            .checked_mul(height)
            .ok_or(GeometryError::AreaOverflow { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Empty; len],
        })
    }

    /// Places a vertex cell wherever both sized permutations name the same vertex.
    ///
    /// A vertex reserving `n` lanes occupies an `n × n` block of vertex cells, so connectors may
    /// attach to any of them.
    pub fn build(sized: &SizedLayout) -> Result<Self, GeometryError> {
        let mut grid = Self::new(sized.width(), sized.height())?;
        for (y, &row_vertex) in sized.col().sized_perm().iter().enumerate() {
            for (x, &col_vertex) in sized.row().sized_perm().iter().enumerate() {
                if row_vertex == col_vertex {
                    let idx = grid.index_of(x, y)?;
                    grid.cells[idx] = Cell::Vertex(col_vertex);
                }
            }
        }

        tracing::trace!(width = grid.width, height = grid.height, "built vertex grid");
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Returns the cell at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<&Cell, GeometryError> {
        let idx = self.index_of(x, y)?;
        Ok(&self.cells[idx])
    }

    /// Iterates the cells of line `y`, left to right. Empty if `y` is out of bounds.
    pub fn row(&self, y: usize) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Draws `glyph` at `(x, y)` on behalf of `edge`.
    pub fn stamp(
        &mut self,
        x: usize,
        y: usize,
        glyph: Glyph,
        edge: EdgeId,
    ) -> Result<(), GeometryError> {
        let idx = self.index_of(x, y)?;
        let cell = &mut self.cells[idx];
        match cell {
            Cell::Empty => {
                *cell = Cell::Path(Path::new(glyph, edge));
                Ok(())
            }
            Cell::Vertex(vertex) => Err(GeometryError::OverVertex {
                edge,
                vertex: *vertex,
                x,
                y,
            }),
            Cell::Path(path) => {
                let existing_owner = path.color_owner();
                path.merge(glyph, edge)
                    .map_err(|existing| GeometryError::Collision {
                        edge,
                        existing_owner,
                        x,
                        y,
                        existing: existing.unicode(),
                        incoming: glyph.unicode(),
                    })
            }
        }
    }

    /// Draws `─` on line `y` for every `x` in `x0..x1` (exclusive).
    pub fn draw_hline(
        &mut self,
        x0: usize,
        x1: usize,
        y: usize,
        edge: EdgeId,
    ) -> Result<(), GeometryError> {
        for x in x0..x1 {
            self.stamp(x, y, Glyph::Horizontal, edge)?;
        }
        Ok(())
    }

    /// Draws `│` in column `x` for every `y` in `y0..y1` (exclusive).
    pub fn draw_vline(
        &mut self,
        x: usize,
        y0: usize,
        y1: usize,
        edge: EdgeId,
    ) -> Result<(), GeometryError> {
        for y in y0..y1 {
            self.stamp(x, y, Glyph::Vertical, edge)?;
        }
        Ok(())
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, GeometryError> {
        if !self.in_bounds(x, y) {
            return Err(GeometryError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok((y * self.width) + x)
    }
}

/// A connector could not be drawn without corrupting the diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    AreaOverflow {
        width: usize,
        height: usize,
    },
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    /// `edge` needs more lanes on `vertex`'s `direction` side than were reserved.
    SlotExhausted {
        edge: EdgeId,
        vertex: VertexId,
        direction: Direction,
        reserved: usize,
    },
    /// Two connectors want the same cell and cannot merge into a crossing.
    Collision {
        edge: EdgeId,
        existing_owner: Option<EdgeId>,
        x: usize,
        y: usize,
        existing: char,
        incoming: char,
    },
    OverVertex {
        edge: EdgeId,
        vertex: VertexId,
        x: usize,
        y: usize,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { width, height } => {
                write!(f, "grid area overflow: {width}*{height}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(f, "out of bounds: ({x},{y}) for {width}x{height} grid"),
            Self::SlotExhausted {
                edge,
                vertex,
                direction,
                reserved,
            } => write!(
                f,
                "edge {edge} needs another {direction} lane on vertex {vertex}, \
                 but only {reserved} were reserved"
            ),
            Self::Collision {
                edge,
                existing_owner,
                x,
                y,
                existing,
                incoming,
            } => {
                write!(f, "edge {edge} cannot draw `{incoming}` over `{existing}` at ({x},{y})")?;
                if let Some(owner) = existing_owner {
                    write!(f, " (owned by edge {owner})")?;
                }
                Ok(())
            }
            Self::OverVertex { edge, vertex, x, y } => {
                write!(f, "edge {edge} runs through vertex {vertex} at ({x},{y})")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

#[cfg(test)]
mod tests {
    use super::{GeometryError, Grid};
    use crate::layout::SizedLayout;
    use crate::model::{EdgeId, Layout, VertexId};
    use crate::render::cell::{Cell, Glyph};

    #[test]
    fn build_places_vertex_blocks() {
        let layout = Layout::new(&[1, 0], &[0, 1]).unwrap();
        let sized = SizedLayout::new(&layout, vec![1, 2]);
        let grid = Grid::build(&sized).unwrap();

        assert_eq!((grid.width(), grid.height()), (3, 3));
        // Vertex 1 owns x 0..2 and y 1..3; vertex 0 owns x 2 and y 0.
        assert_eq!(grid.get(2, 0).unwrap(), &Cell::Vertex(VertexId::new(0)));
        for (x, y) in [(0, 1), (1, 1), (0, 2), (1, 2)] {
            assert_eq!(grid.get(x, y).unwrap(), &Cell::Vertex(VertexId::new(1)));
        }
        assert!(grid.get(0, 0).unwrap().is_empty());
        assert!(grid.get(2, 2).unwrap().is_empty());
    }

    #[test]
    fn get_out_of_bounds_errors() {
        let grid = Grid::new(2, 2).unwrap();
        assert_eq!(
            grid.get(0, 2).unwrap_err(),
            GeometryError::OutOfBounds {
                x: 0,
                y: 2,
                width: 2,
                height: 2
            }
        );
        assert!(grid.row(2).is_empty());
    }

    #[test]
    fn rejects_area_overflow() {
        let err = Grid::new(usize::MAX, 2).unwrap_err();
        assert_eq!(
            err,
            GeometryError::AreaOverflow {
                width: usize::MAX,
                height: 2
            }
        );
    }

    #[test]
    fn crossing_lines_merge_in_either_order() {
        let mut vertical_first = Grid::new(3, 3).unwrap();
        vertical_first.draw_vline(1, 0, 3, EdgeId::new(0)).unwrap();
        vertical_first.draw_hline(0, 3, 1, EdgeId::new(1)).unwrap();

        let mut horizontal_first = Grid::new(3, 3).unwrap();
        horizontal_first.draw_hline(0, 3, 1, EdgeId::new(1)).unwrap();
        horizontal_first.draw_vline(1, 0, 3, EdgeId::new(0)).unwrap();

        assert_eq!(vertical_first, horizontal_first);
        let center = vertical_first.get(1, 1).unwrap().as_path().unwrap();
        assert_eq!(center.glyph(), Glyph::Cross);
        assert_eq!(center.color_owner(), Some(EdgeId::new(0)));
    }

    #[test]
    fn collinear_overlap_is_an_error() {
        let mut grid = Grid::new(4, 1).unwrap();
        grid.draw_hline(0, 3, 0, EdgeId::new(0)).unwrap();
        let err = grid.draw_hline(2, 4, 0, EdgeId::new(1)).unwrap_err();
        assert_eq!(
            err,
            GeometryError::Collision {
                edge: EdgeId::new(1),
                existing_owner: Some(EdgeId::new(0)),
                x: 2,
                y: 0,
                existing: '─',
                incoming: '─',
            }
        );
        assert_eq!(
            err.to_string(),
            "edge 1 cannot draw `─` over `─` at (2,0) (owned by edge 0)"
        );
    }

    #[test]
    fn stamping_over_a_vertex_is_an_error() {
        let layout = Layout::identity(1);
        let sized = SizedLayout::new(&layout, vec![1]);
        let mut grid = Grid::build(&sized).unwrap();
        let err = grid.stamp(0, 0, Glyph::Vertical, EdgeId::new(7)).unwrap_err();
        assert_eq!(
            err,
            GeometryError::OverVertex {
                edge: EdgeId::new(7),
                vertex: VertexId::new(0),
                x: 0,
                y: 0
            }
        );
    }
}
