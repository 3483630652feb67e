// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of permgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! permgrid: text rendering of graphs on a permuted grid.
//!
//! Every vertex sits on the diagonal of a square character grid whose row and column orders are
//! two independent permutations. Each edge is drawn as a single L-shaped connector that leaves
//! its upper endpoint on the left or right and enters the lower one from above or below.
//!
//! - [`model`]: graphs, permutations, layouts and color overlays.
//! - [`layout`]: grid sizing and permutation expansion.
//! - [`render`]: edge routing, cells and the colored text renderer.
//! - [`traverse`]: Dijkstra and Prim step sequences for overlays.
//! - [`format`]: the JSON graph file.
//! - [`tui`]: interactive and line-oriented step drivers.

pub mod format;
pub mod layout;
pub mod model;
pub mod render;
pub mod traverse;
pub mod tui;
