// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of permgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::layout::Direction;
use crate::model::{EdgeId, VertexId};

pub const UNICODE_BOX_HORIZONTAL: char = '─';
pub const UNICODE_BOX_VERTICAL: char = '│';
pub const UNICODE_ARC_TOP_LEFT: char = '╭';
pub const UNICODE_ARC_TOP_RIGHT: char = '╮';
pub const UNICODE_ARC_BOTTOM_RIGHT: char = '╯';
pub const UNICODE_ARC_BOTTOM_LEFT: char = '╰';
pub const UNICODE_BOX_CROSS: char = '┼';

pub const ASCII_HORIZONTAL: char = '-';
pub const ASCII_VERTICAL: char = '|';
pub const ASCII_JUNCTION: char = '+';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Arms(u8);

impl Arms {
    const TOP: Self = Self(1 << 0);
    const LEFT: Self = Self(1 << 1);
    const RIGHT: Self = Self(1 << 2);
    const BOTTOM: Self = Self(1 << 3);

    const fn of(direction: Direction) -> Self {
        match direction {
            Direction::Top => Self::TOP,
            Direction::Left => Self::LEFT,
            Direction::Right => Self::RIGHT,
            Direction::Bottom => Self::BOTTOM,
        }
    }

    const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    const fn contains(self, direction: Direction) -> bool {
        (self.0 & Self::of(direction).0) != 0
    }
}

/// A line-drawing glyph a path cell can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Vertical,
    Horizontal,
    /// `╭`
    TopLeft,
    /// `╮`
    TopRight,
    /// `╯`
    BottomRight,
    /// `╰`
    BottomLeft,
    Cross,
}

impl Glyph {
    const fn arms(self) -> Arms {
        match self {
            Self::Vertical => Arms::TOP.union(Arms::BOTTOM),
            Self::Horizontal => Arms::LEFT.union(Arms::RIGHT),
            Self::TopLeft => Arms::RIGHT.union(Arms::BOTTOM),
            Self::TopRight => Arms::LEFT.union(Arms::BOTTOM),
            Self::BottomRight => Arms::TOP.union(Arms::LEFT),
            Self::BottomLeft => Arms::TOP.union(Arms::RIGHT),
            Self::Cross => Arms::TOP
                .union(Arms::LEFT)
                .union(Arms::RIGHT)
                .union(Arms::BOTTOM),
        }
    }

    /// Whether this glyph has an arm pointing out of `direction`.
    pub const fn connects_from(self, direction: Direction) -> bool {
        self.arms().contains(direction)
    }

    pub const fn unicode(self) -> char {
        match self {
            Self::Vertical => UNICODE_BOX_VERTICAL,
            Self::Horizontal => UNICODE_BOX_HORIZONTAL,
            Self::TopLeft => UNICODE_ARC_TOP_LEFT,
            Self::TopRight => UNICODE_ARC_TOP_RIGHT,
            Self::BottomRight => UNICODE_ARC_BOTTOM_RIGHT,
            Self::BottomLeft => UNICODE_ARC_BOTTOM_LEFT,
            Self::Cross => UNICODE_BOX_CROSS,
        }
    }

    pub const fn ascii(self) -> char {
        match self {
            Self::Vertical => ASCII_VERTICAL,
            Self::Horizontal => ASCII_HORIZONTAL,
            Self::TopLeft | Self::TopRight | Self::BottomRight | Self::BottomLeft | Self::Cross => {
                ASCII_JUNCTION
            }
        }
    }
}

/// A path cell: one glyph plus the edge that owns each of its arms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Path {
    glyph: Glyph,
    owners: [Option<EdgeId>; 4],
}

impl Path {
    pub fn new(glyph: Glyph, edge: EdgeId) -> Self {
        let mut owners = [None; 4];
        for direction in Direction::ALL {
            if glyph.connects_from(direction) {
                owners[direction.idx()] = Some(edge);
            }
        }
        Self { glyph, owners }
    }

    pub fn glyph(&self) -> Glyph {
        self.glyph
    }

    /// Edge owning the arm that points out of `direction`, if the glyph has one.
    pub fn owner(&self, direction: Direction) -> Option<EdgeId> {
        self.owners[direction.idx()]
    }

    /// The edge whose color this cell is painted with.
    ///
    /// A crossing carries two edges but is painted with one: the vertical edge (Top, then
    /// Bottom) wins. Any other glyph is owned by a single edge.
    pub fn color_owner(&self) -> Option<EdgeId> {
        if self.glyph == Glyph::Cross {
            return self
                .owner(Direction::Top)
                .or_else(|| self.owner(Direction::Bottom));
        }
        Direction::ALL
            .iter()
            .find(|&&direction| self.glyph.connects_from(direction))
            .and_then(|&direction| self.owner(direction))
    }

    /// Lays `incoming` over this path on behalf of `edge`.
    ///
    /// Only a straight glyph crossing the orthogonal straight glyph merges (into `┼`); the
    /// existing arms keep their owner and the incoming arms take `edge`. Every other combination
    /// leaves the path untouched and returns `Err(existing_glyph)`.
    pub fn merge(&mut self, incoming: Glyph, edge: EdgeId) -> Result<(), Glyph> {
        let new_arms = match (self.glyph, incoming) {
            (Glyph::Vertical, Glyph::Horizontal) => [Direction::Left, Direction::Right],
            (Glyph::Horizontal, Glyph::Vertical) => [Direction::Top, Direction::Bottom],
            (existing, _) => return Err(existing),
        };
        for direction in new_arms {
            self.owners[direction.idx()] = Some(edge);
        }
        self.glyph = Glyph::Cross;
        Ok(())
    }
}

/// One grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Vertex(VertexId),
    Path(Path),
}

impl Cell {
    /// Vertices connect on every side; empty cells never do.
    pub fn connects_from(&self, direction: Direction) -> bool {
        match self {
            Self::Empty => false,
            Self::Vertex(_) => true,
            Self::Path(path) => path.glyph().connects_from(direction),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn is_vertex(&self) -> bool {
        matches!(self, Self::Vertex(_))
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Self::Path(path) => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Cell, Glyph, Path};
    use crate::layout::Direction::{self, Bottom, Left, Right, Top};
    use crate::model::{EdgeId, VertexId};

    #[rstest]
    #[case(Glyph::Vertical, &[Top, Bottom])]
    #[case(Glyph::Horizontal, &[Left, Right])]
    #[case(Glyph::TopLeft, &[Right, Bottom])]
    #[case(Glyph::TopRight, &[Left, Bottom])]
    #[case(Glyph::BottomRight, &[Top, Left])]
    #[case(Glyph::BottomLeft, &[Top, Right])]
    #[case(Glyph::Cross, &[Top, Left, Right, Bottom])]
    fn glyph_arms_match_their_shape(#[case] glyph: Glyph, #[case] arms: &[Direction]) {
        for direction in Direction::ALL {
            assert_eq!(
                glyph.connects_from(direction),
                arms.contains(&direction),
                "{glyph:?} {direction}"
            );
        }
    }

    #[test]
    fn vertex_connects_everywhere_and_empty_nowhere() {
        let vertex = Cell::Vertex(VertexId::new(0));
        let empty = Cell::Empty;
        for direction in Direction::ALL {
            assert!(vertex.connects_from(direction));
            assert!(!empty.connects_from(direction));
        }
    }

    #[test]
    fn new_path_owns_only_exposed_arms() {
        let path = Path::new(Glyph::BottomLeft, EdgeId::new(3));
        assert_eq!(path.owner(Top), Some(EdgeId::new(3)));
        assert_eq!(path.owner(Right), Some(EdgeId::new(3)));
        assert_eq!(path.owner(Left), None);
        assert_eq!(path.owner(Bottom), None);
        assert_eq!(path.color_owner(), Some(EdgeId::new(3)));
    }

    #[test]
    fn horizontal_over_vertical_keeps_vertical_owner() {
        let mut path = Path::new(Glyph::Vertical, EdgeId::new(1));
        path.merge(Glyph::Horizontal, EdgeId::new(2)).unwrap();

        assert_eq!(path.glyph(), Glyph::Cross);
        assert_eq!(path.owner(Top), Some(EdgeId::new(1)));
        assert_eq!(path.owner(Bottom), Some(EdgeId::new(1)));
        assert_eq!(path.owner(Left), Some(EdgeId::new(2)));
        assert_eq!(path.owner(Right), Some(EdgeId::new(2)));
        assert_eq!(path.color_owner(), Some(EdgeId::new(1)));
    }

    #[test]
    fn merge_order_decides_which_edge_owns_which_pair() {
        let mut vertical_first = Path::new(Glyph::Vertical, EdgeId::new(1));
        vertical_first.merge(Glyph::Horizontal, EdgeId::new(2)).unwrap();

        let mut horizontal_first = Path::new(Glyph::Horizontal, EdgeId::new(2));
        horizontal_first.merge(Glyph::Vertical, EdgeId::new(1)).unwrap();

        // Same edge on the same axis either way round.
        assert_eq!(vertical_first, horizontal_first);

        let mut swapped = Path::new(Glyph::Horizontal, EdgeId::new(1));
        swapped.merge(Glyph::Vertical, EdgeId::new(2)).unwrap();
        assert_eq!(swapped.glyph(), Glyph::Cross);
        assert_eq!(swapped.owner(Left), Some(EdgeId::new(1)));
        assert_eq!(swapped.owner(Top), Some(EdgeId::new(2)));
        assert_eq!(swapped.color_owner(), Some(EdgeId::new(2)));
    }

    #[rstest]
    #[case(Glyph::Vertical, Glyph::Vertical)]
    #[case(Glyph::Horizontal, Glyph::Horizontal)]
    #[case(Glyph::Vertical, Glyph::BottomLeft)]
    #[case(Glyph::TopRight, Glyph::Horizontal)]
    #[case(Glyph::Cross, Glyph::Vertical)]
    fn rejects_non_crossing_merges(#[case] existing: Glyph, #[case] incoming: Glyph) {
        let mut path = Path::new(existing, EdgeId::new(0));
        let before = path;
        assert_eq!(path.merge(incoming, EdgeId::new(1)), Err(existing));
        assert_eq!(path, before);
    }

    #[test]
    fn ascii_charset_collapses_corners() {
        assert_eq!(Glyph::Vertical.ascii(), '|');
        assert_eq!(Glyph::Horizontal.ascii(), '-');
        assert_eq!(Glyph::BottomLeft.ascii(), '+');
        assert_eq!(Glyph::Cross.unicode(), '┼');
    }
}
