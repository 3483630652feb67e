// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of permgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::ids::VertexId;

/// A validated bijection over `0..len`, stored together with its inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    order: Vec<VertexId>,
    rank: Vec<usize>,
}

impl Permutation {
    pub fn new(order: &[usize]) -> Result<Self, PermutationError> {
        let len = order.len();
        let mut rank = vec![usize::MAX; len];

        for (position, &value) in order.iter().enumerate() {
            let slot = rank.get_mut(value).ok_or(PermutationError::OutOfRange {
                position,
                value,
                len,
            })?;
            if *slot != usize::MAX {
                return Err(PermutationError::Duplicate {
                    value,
                    first: *slot,
                    second: position,
                });
            }
            *slot = position;
        }

        Ok(Self {
            order: order.iter().copied().map(VertexId::new).collect(),
            rank,
        })
    }

    pub fn identity(len: usize) -> Self {
        Self {
            order: (0..len).map(VertexId::new).collect(),
            rank: (0..len).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Vertices in placement order.
    pub fn order(&self) -> &[VertexId] {
        &self.order
    }

    /// Position of `vertex` in [`Self::order`].
    ///
    /// # Panics
    ///
    /// Panics if `vertex.index() >= self.len()`. Callers pair a layout with a graph of the same
    /// vertex count (see [`crate::render::build_grid`]), which keeps every graph vertex in range.
    pub fn rank(&self, vertex: VertexId) -> usize {
        self.rank[vertex.index()]
    }

}

/// Placement of every vertex on the two grid axes.
///
/// `row` orders vertices along the horizontal axis: reading any printed line left to right, the
/// vertices' columns appear in `row` order. `col` orders vertices along the vertical axis, top to
/// bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    row: Permutation,
    col: Permutation,
}

impl Layout {
    pub fn new(perm_row: &[usize], perm_col: &[usize]) -> Result<Self, LayoutError> {
        if perm_row.len() != perm_col.len() {
            return Err(LayoutError::LengthMismatch {
                row: perm_row.len(),
                col: perm_col.len(),
            });
        }
        let row = Permutation::new(perm_row).map_err(LayoutError::Row)?;
        let col = Permutation::new(perm_col).map_err(LayoutError::Column)?;
        Ok(Self { row, col })
    }

    pub fn identity(vertex_count: usize) -> Self {
        Self {
            row: Permutation::identity(vertex_count),
            col: Permutation::identity(vertex_count),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.row.len()
    }

    pub fn row(&self) -> &Permutation {
        &self.row
    }

    pub fn col(&self) -> &Permutation {
        &self.col
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermutationError {
    OutOfRange {
        position: usize,
        value: usize,
        len: usize,
    },
    Duplicate {
        value: usize,
        first: usize,
        second: usize,
    },
}

impl fmt::Display for PermutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                position,
                value,
                len,
            } => write!(
                f,
                "value {value} at position {position} is outside 0..{len}"
            ),
            Self::Duplicate {
                value,
                first,
                second,
            } => write!(
                f,
                "value {value} appears at positions {first} and {second}"
            ),
        }
    }
}

impl std::error::Error for PermutationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    Row(PermutationError),
    Column(PermutationError),
    LengthMismatch { row: usize, col: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(err) => write!(f, "row permutation: {err}"),
            Self::Column(err) => write!(f, "column permutation: {err}"),
            Self::LengthMismatch { row, col } => write!(
                f,
                "row permutation has {row} entries but column permutation has {col}"
            ),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Row(err) | Self::Column(err) => Some(err),
            Self::LengthMismatch { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Layout, LayoutError, Permutation, PermutationError};
    use crate::model::ids::VertexId;

    #[rstest]
    #[case(&[0])]
    #[case(&[1, 0])]
    #[case(&[3, 0, 2, 1])]
    #[case(&[3, 1, 2, 0, 4, 5, 6])]
    fn rank_inverts_order(#[case] order: &[usize]) {
        let perm = Permutation::new(order).unwrap();
        for (position, &vertex) in perm.order().iter().enumerate() {
            assert_eq!(perm.rank(vertex), position);
        }
    }

    #[test]
    fn rejects_out_of_range_values() {
        let err = Permutation::new(&[0, 3, 1]).unwrap_err();
        assert_eq!(
            err,
            PermutationError::OutOfRange {
                position: 1,
                value: 3,
                len: 3
            }
        );
    }

    #[test]
    fn rejects_duplicates() {
        let err = Permutation::new(&[2, 0, 2]).unwrap_err();
        assert_eq!(
            err,
            PermutationError::Duplicate {
                value: 2,
                first: 0,
                second: 2
            }
        );
    }

    #[test]
    fn layout_checks_both_axes() {
        let err = Layout::new(&[0, 1], &[0, 0]).unwrap_err();
        assert!(matches!(err, LayoutError::Column(PermutationError::Duplicate { .. })));

        let err = Layout::new(&[0, 1], &[0]).unwrap_err();
        assert_eq!(err, LayoutError::LengthMismatch { row: 2, col: 1 });
    }

    #[test]
    fn identity_layout_ranks_by_id() {
        let layout = Layout::identity(3);
        assert_eq!(layout.vertex_count(), 3);
        assert_eq!(layout.row().rank(VertexId::new(2)), 2);
        assert_eq!(layout.col().rank(VertexId::new(0)), 0);
    }

    #[test]
    #[should_panic]
    fn rank_of_a_foreign_vertex_panics() {
        let perm = Permutation::identity(2);
        perm.rank(VertexId::new(2));
    }
}
