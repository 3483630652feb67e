// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of permgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Input data model: graphs with side-tagged edges, axis permutations, and color overlays.

pub mod fixtures;
pub mod graph;
pub mod ids;
pub mod layout;
pub mod overlay;

pub use fixtures::{demo, Demo, DEMO_NAMES};
pub use graph::{Edge, Graph, GraphError, Side};
pub use ids::{EdgeId, Index, VertexId};
pub use layout::{Layout, LayoutError, Permutation, PermutationError};
pub use overlay::ColorOverlay;
