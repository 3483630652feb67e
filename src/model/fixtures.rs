// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of permgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in demo graphs used by the CLI, benches and tests.

use super::graph::{Graph, Side};
use super::ids::VertexId;
use super::layout::Layout;

/// A ready-to-render graph plus the traversal inputs that go with it.
#[derive(Debug, Clone)]
pub struct Demo {
    pub name: &'static str,
    pub graph: Graph,
    pub layout: Layout,
    pub weights: Vec<u64>,
    pub start: VertexId,
}

pub const DEMO_NAMES: [&str; 4] = ["crossing", "small", "weighted", "complete"];

pub fn demo(name: &str) -> Option<Demo> {
    match name {
        "crossing" => Some(crossing()),
        "small" => Some(small()),
        "weighted" => Some(weighted()),
        "complete" => Some(complete()),
        _ => None,
    }
}

fn build(
    name: &'static str,
    vertex_count: usize,
    endpoints: &[(usize, usize)],
    sides: Option<&[Side]>,
    weights: Vec<u64>,
    perm_row: &[usize],
    perm_col: &[usize],
) -> Demo {
    // Demo tables are static and covered by tests; a failure here is a programming error.
    let graph = match sides {
        Some(sides) => Graph::new(vertex_count, endpoints, sides),
        None => Graph::with_alternating_sides(vertex_count, endpoints),
    }
    .unwrap_or_else(|err| panic!("demo graph {name}: {err}"));
    let layout =
        Layout::new(perm_row, perm_col).unwrap_or_else(|err| panic!("demo layout {name}: {err}"));

    Demo {
        name,
        graph,
        layout,
        weights,
        start: VertexId::new(0),
    }
}

/// Four vertices whose connectors cross twice.
pub fn crossing() -> Demo {
    use Side::{Left, Right};
    build(
        "crossing",
        4,
        &[(0, 2), (0, 1), (0, 3), (3, 2), (3, 1)],
        Some(&[Right, Right, Left, Left, Right]),
        vec![1; 5],
        &[3, 0, 2, 1],
        &[3, 1, 2, 0],
    )
}

/// The five-vertex weighted graph the traversals default to.
pub fn small() -> Demo {
    build(
        "small",
        5,
        &[
            (0, 1),
            (0, 2),
            (1, 2),
            (1, 3),
            (2, 1),
            (2, 3),
            (2, 4),
            (3, 4),
            (4, 3),
        ],
        None,
        vec![10, 5, 2, 1, 3, 9, 2, 4, 6],
        &[0, 1, 2, 3, 4],
        &[3, 1, 2, 0, 4],
    )
}

/// `small` extended by a two-vertex tail.
pub fn weighted() -> Demo {
    build(
        "weighted",
        7,
        &[
            (0, 1),
            (0, 2),
            (1, 2),
            (1, 3),
            (2, 1),
            (2, 3),
            (2, 4),
            (3, 4),
            (4, 3),
            (4, 5),
            (5, 6),
        ],
        None,
        vec![10, 5, 2, 1, 3, 9, 2, 4, 6, 7, 8],
        &[0, 1, 2, 3, 4, 5, 6],
        &[3, 1, 2, 0, 4, 5, 6],
    )
}

/// The complete graph on eight vertices, weighted `1..=28` in edge order.
pub fn complete() -> Demo {
    let mut endpoints = Vec::with_capacity(28);
    for u in 0..8 {
        for v in (u + 1)..8 {
            endpoints.push((u, v));
        }
    }
    let weights = (1..=endpoints.len() as u64).collect();

    build(
        "complete",
        8,
        &endpoints,
        None,
        weights,
        &[0, 1, 2, 3, 4, 5, 6, 7],
        &[3, 1, 2, 0, 4, 5, 6, 7],
    )
}
