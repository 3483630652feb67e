// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of permgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use crate::model::{Layout, Permutation, VertexId};

/// Grid coordinates reserved by one vertex on one axis, increasing.
pub type Slots = SmallVec<[usize; 4]>;

/// One axis of the sized grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizedAxis {
    sized_perm: Vec<VertexId>,
    slots: Vec<Slots>,
}

impl SizedAxis {
    /// Repeats each vertex of `perm` `needed_size[v]` times, keeping `perm`'s order.
    ///
    /// `needed_size` is indexed by vertex id and must cover every vertex of `perm`.
    pub fn expand(perm: &Permutation, needed_size: &[usize]) -> Self {
        let total = perm.order().iter().map(|v| needed_size[v.index()]).sum();
        let mut sized_perm = Vec::with_capacity(total);
        let mut slots = vec![Slots::new(); perm.len()];

        for &vertex in perm.order() {
            for _ in 0..needed_size[vertex.index()] {
                slots[vertex.index()].push(sized_perm.len());
                sized_perm.push(vertex);
            }
        }

        Self { sized_perm, slots }
    }

    /// Number of grid coordinates on this axis.
    pub fn len(&self) -> usize {
        self.sized_perm.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sized_perm.is_empty()
    }

    pub fn sized_perm(&self) -> &[VertexId] {
        &self.sized_perm
    }

    /// Vertex owning grid coordinate `at`.
    pub fn vertex_at(&self, at: usize) -> Option<VertexId> {
        self.sized_perm.get(at).copied()
    }

    /// Coordinates reserved by `vertex`, in increasing order.
    pub fn slots(&self, vertex: VertexId) -> &[usize] {
        self.slots.get(vertex.index()).map(|s| s.as_slice()).unwrap_or(&[])
    }

    /// The `k`-th reserved coordinate of `vertex`.
    pub fn slot(&self, vertex: VertexId, k: usize) -> Option<usize> {
        self.slots(vertex).get(k).copied()
    }

    pub fn first(&self, vertex: VertexId) -> Option<usize> {
        self.slots(vertex).first().copied()
    }

    pub fn last(&self, vertex: VertexId) -> Option<usize> {
        self.slots(vertex).last().copied()
    }
}

/// Both axes of the sized grid plus the sizes they were expanded with.
///
/// Both axes use the same per-vertex sizes, so the grid is always square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizedLayout {
    needed_size: Vec<usize>,
    row: SizedAxis,
    col: SizedAxis,
}

impl SizedLayout {
    pub fn new(layout: &Layout, needed_size: Vec<usize>) -> Self {
        let row = SizedAxis::expand(layout.row(), &needed_size);
        let col = SizedAxis::expand(layout.col(), &needed_size);
        Self {
            needed_size,
            row,
            col,
        }
    }

    pub fn needed_size(&self) -> &[usize] {
        &self.needed_size
    }

    /// Horizontal axis (`x` coordinates).
    pub fn row(&self) -> &SizedAxis {
        &self.row
    }

    /// Vertical axis (`y` coordinates).
    pub fn col(&self) -> &SizedAxis {
        &self.col
    }

    pub fn width(&self) -> usize {
        self.row.len()
    }

    pub fn height(&self) -> usize {
        self.col.len()
    }
}
