// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of permgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::ids::{EdgeId, VertexId};

/// Per-vertex and per-edge paint assignments.
///
/// The overlay is owned by whoever drives the diagram (usually a traversal) and is only read by
/// the renderer. `P` is an opaque paint token; see [`crate::render::Paint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorOverlay<P> {
    vertices: BTreeMap<VertexId, P>,
    edges: BTreeMap<EdgeId, P>,
}

impl<P> Default for ColorOverlay<P> {
    fn default() -> Self {
        Self {
            vertices: BTreeMap::new(),
            edges: BTreeMap::new(),
        }
    }
}

impl<P> ColorOverlay<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex(&self, vertex: VertexId) -> Option<&P> {
        self.vertices.get(&vertex)
    }

    pub fn edge(&self, edge: EdgeId) -> Option<&P> {
        self.edges.get(&edge)
    }

    /// Sets the paint for `vertex`, returning the previous one.
    pub fn set_vertex(&mut self, vertex: VertexId, paint: P) -> Option<P> {
        self.vertices.insert(vertex, paint)
    }

    /// Sets the paint for `edge`, returning the previous one.
    pub fn set_edge(&mut self, edge: EdgeId, paint: P) -> Option<P> {
        self.edges.insert(edge, paint)
    }

    pub fn clear_edge(&mut self, edge: EdgeId) -> Option<P> {
        self.edges.remove(&edge)
    }

    /// Drops every assignment.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &P)> + '_ {
        self.vertices.iter().map(|(vertex, paint)| (*vertex, paint))
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &P)> + '_ {
        self.edges.iter().map(|(edge, paint)| (*edge, paint))
    }
}

#[cfg(test)]
mod tests {
    use super::ColorOverlay;
    use crate::model::ids::{EdgeId, VertexId};

    #[test]
    fn set_and_clear_round_trip() {
        let mut overlay = ColorOverlay::<&'static str>::new();
        assert!(overlay.is_empty());

        assert_eq!(overlay.set_vertex(VertexId::new(1), "red"), None);
        assert_eq!(overlay.set_vertex(VertexId::new(1), "blue"), Some("red"));
        overlay.set_edge(EdgeId::new(4), "green");

        assert_eq!(overlay.vertex(VertexId::new(1)), Some(&"blue"));
        assert_eq!(overlay.edge(EdgeId::new(4)), Some(&"green"));
        assert_eq!(overlay.edge(EdgeId::new(0)), None);

        overlay.clear_edge(EdgeId::new(4));
        assert_eq!(overlay.edges().count(), 0);
        overlay.clear();
        assert!(overlay.is_empty());
    }
}
