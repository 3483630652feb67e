// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of permgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::{Graph, GraphError, Layout, LayoutError, Side};
use crate::traverse::{TraverseError, Weights};

/// On-disk shape of a graph file.
///
/// ```json
/// { "vertices": 4, "edges": [[0, 2], [0, 1]], "sides": ["left", "right"],
///   "weights": [3, 1], "perm_row": [3, 0, 2, 1], "perm_col": [3, 1, 2, 0] }
/// ```
///
/// `sides` defaults to alternating left/right, `weights` to 1 per edge and both permutations to
/// the identity.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct GraphFileJson {
    vertices: usize,
    #[serde(default)]
    edges: Vec<(usize, usize)>,
    #[serde(default)]
    sides: Option<Vec<Side>>,
    #[serde(default)]
    weights: Option<Vec<u64>>,
    #[serde(default)]
    perm_row: Option<Vec<usize>>,
    #[serde(default)]
    perm_col: Option<Vec<usize>>,
}

/// A validated graph file: everything a render or traversal needs.
#[derive(Debug, Clone)]
pub struct GraphFile {
    pub graph: Graph,
    pub layout: Layout,
    pub weights: Weights,
}

pub fn parse_graph_file(input: &str) -> Result<GraphFile, GraphFileError> {
    let json: GraphFileJson = serde_json::from_str(input).map_err(GraphFileError::Json)?;

    let graph = match &json.sides {
        Some(sides) => Graph::new(json.vertices, &json.edges, sides)?,
        None => Graph::with_alternating_sides(json.vertices, &json.edges)?,
    };

    let identity = (0..json.vertices).collect::<Vec<_>>();
    let perm_row = json.perm_row.as_deref().unwrap_or(&identity);
    let perm_col = json.perm_col.as_deref().unwrap_or(&identity);
    let layout = Layout::new(perm_row, perm_col)?;
    if layout.vertex_count() != graph.vertex_count() {
        return Err(GraphFileError::VertexCountMismatch {
            vertices: graph.vertex_count(),
            permuted: layout.vertex_count(),
        });
    }

    let weights = match json.weights {
        Some(values) => Weights::new(&graph, values)?,
        None => Weights::uniform(&graph),
    };

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "parsed graph file"
    );
    Ok(GraphFile {
        graph,
        layout,
        weights,
    })
}

pub fn load_graph_file(path: &Path) -> Result<GraphFile, GraphFileError> {
    let input = fs::read_to_string(path).map_err(|source| GraphFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_graph_file(&input)
}

#[derive(Debug)]
pub enum GraphFileError {
    Io { path: PathBuf, source: io::Error },
    Json(serde_json::Error),
    Graph(GraphError),
    Layout(LayoutError),
    VertexCountMismatch { vertices: usize, permuted: usize },
    Weights(TraverseError),
}

impl fmt::Display for GraphFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json(source) => write!(f, "invalid graph json: {source}"),
            Self::Graph(source) => write!(f, "invalid graph: {source}"),
            Self::Layout(source) => write!(f, "invalid layout: {source}"),
            Self::VertexCountMismatch { vertices, permuted } => write!(
                f,
                "graph has {vertices} vertices but the permutations cover {permuted}"
            ),
            Self::Weights(source) => write!(f, "invalid weights: {source}"),
        }
    }
}

impl std::error::Error for GraphFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(source) => Some(source),
            Self::Graph(source) => Some(source),
            Self::Layout(source) => Some(source),
            Self::VertexCountMismatch { .. } => None,
            Self::Weights(source) => Some(source),
        }
    }
}

impl From<GraphError> for GraphFileError {
    fn from(value: GraphError) -> Self {
        Self::Graph(value)
    }
}

impl From<LayoutError> for GraphFileError {
    fn from(value: LayoutError) -> Self {
        Self::Layout(value)
    }
}

impl From<TraverseError> for GraphFileError {
    fn from(value: TraverseError) -> Self {
        Self::Weights(value)
    }
}
