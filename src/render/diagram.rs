// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of permgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smol_str::SmolStr;

use crate::layout::Direction;
use crate::model::{ColorOverlay, EdgeId, VertexId};

use super::cell::{Cell, ASCII_HORIZONTAL, UNICODE_BOX_HORIZONTAL};
use super::grid::Grid;
use super::paint::Paint;
use super::{RenderError, RenderOptions};

/// The graph element a fragment of text belongs to, and therefore takes its color from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Owner {
    Vertex(VertexId),
    Edge(EdgeId),
}

/// A run of text with at most one owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    text: SmolStr,
    owner: Option<Owner>,
}

impl Fragment {
    fn new(text: impl Into<SmolStr>, owner: Option<Owner>) -> Self {
        Self {
            text: text.into(),
            owner,
        }
    }

    fn glyph(ch: char, owner: Option<Owner>) -> Self {
        let mut buf = [0u8; 4];
        Self::new(&*ch.encode_utf8(&mut buf), owner)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn owner(&self) -> Option<Owner> {
        self.owner
    }
}

/// A rendered grid before any colors are applied.
///
/// Each line alternates cell fragments with the gap fragments between them, so a grid `w` cells
/// wide yields `2w - 1` fragments per line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Diagram {
    lines: Vec<Vec<Fragment>>,
}

impl Diagram {
    pub fn lines(&self) -> &[Vec<Fragment>] {
        &self.lines
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Writes the diagram, wrapping every fragment whose owner has an entry in `overlay`.
    pub fn write_painted<P: Paint>(
        &self,
        overlay: &ColorOverlay<P>,
        out: &mut dyn fmt::Write,
    ) -> fmt::Result {
        for (y, line) in self.lines.iter().enumerate() {
            if y > 0 {
                out.write_char('\n')?;
            }
            for fragment in line {
                let paint = match fragment.owner {
                    Some(Owner::Vertex(vertex)) => overlay.vertex(vertex),
                    Some(Owner::Edge(edge)) => overlay.edge(edge),
                    None => None,
                };
                match paint {
                    Some(paint) => paint.paint(fragment.text(), out)?,
                    None => out.write_str(fragment.text())?,
                }
            }
        }
        Ok(())
    }

    /// Lines joined with `\n`, no trailing line break.
    ///
    /// Fails if any paint token fails; no partially painted text is returned.
    pub fn paint<P: Paint>(&self, overlay: &ColorOverlay<P>) -> Result<String, fmt::Error> {
        let mut out = String::new();
        self.write_painted(overlay, &mut out)?;
        Ok(out)
    }

    pub fn to_plain(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, line) in self.lines.iter().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for fragment in line {
                f.write_str(fragment.text())?;
            }
        }
        Ok(())
    }
}

/// Converts a routed grid into text, row-major.
pub(crate) fn draw(grid: &Grid, options: &RenderOptions) -> Result<Diagram, RenderError> {
    let mut ids = itoa::Buffer::new();
    let mut lines = Vec::with_capacity(grid.height());

    for y in 0..grid.height() {
        let row = grid.row(y);
        let mut line = Vec::with_capacity(row.len() * 2);
        for (x, cell) in row.iter().enumerate() {
            if x > 0 {
                line.push(gap(&row[x - 1], cell, x, y, options)?);
            }
            line.push(match cell {
                Cell::Empty => Fragment::glyph(options.empty_cell, None),
                Cell::Vertex(vertex) => Fragment::new(
                    ids.format(vertex.index()),
                    Some(Owner::Vertex(*vertex)),
                ),
                Cell::Path(path) => {
                    let ch = if options.unicode {
                        path.glyph().unicode()
                    } else {
                        path.glyph().ascii()
                    };
                    Fragment::glyph(ch, path.color_owner().map(Owner::Edge))
                }
            });
        }
        lines.push(line);
    }

    Ok(Diagram { lines })
}

/// The fragment between `left` and `right`, where `right` sits at `(x, y)`.
fn gap(
    left: &Cell,
    right: &Cell,
    x: usize,
    y: usize,
    options: &RenderOptions,
) -> Result<Fragment, RenderError> {
    let joined = !left.is_empty()
        && !right.is_empty()
        && !(left.is_vertex() && right.is_vertex())
        && left.connects_from(Direction::Right)
        && right.connects_from(Direction::Left);
    if !joined {
        return Ok(Fragment::glyph(options.gap, None));
    }

    let owner = left
        .as_path()
        .and_then(|path| path.owner(Direction::Right))
        .or_else(|| right.as_path().and_then(|path| path.owner(Direction::Left)))
        .ok_or(RenderError::NoSharedArm { x, y })?;
    let ch = if options.unicode {
        UNICODE_BOX_HORIZONTAL
    } else {
        ASCII_HORIZONTAL
    };
    Ok(Fragment::glyph(ch, Some(Owner::Edge(owner))))
}
