// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of permgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Display attributes a [`super::ColorOverlay`] can carry.
//!
//! The renderer never looks inside a paint token; it only asks it to wrap a fragment of text.

use std::fmt;

use crossterm::style::{Color, ContentStyle};

/// Wraps rendered text in whatever escape sequences the sink understands.
pub trait Paint {
    fn paint(&self, text: &str, out: &mut dyn fmt::Write) -> fmt::Result;
}

/// Writes text unchanged. Used for plain output and for overlays that only exist to be queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoPaint;

impl Paint for NoPaint {
    fn paint(&self, text: &str, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str(text)
    }
}

/// Foreground color only.
impl Paint for Color {
    fn paint(&self, text: &str, out: &mut dyn fmt::Write) -> fmt::Result {
        let style = ContentStyle {
            foreground_color: Some(*self),
            ..ContentStyle::default()
        };
        style.paint(text, out)
    }
}

impl Paint for ContentStyle {
    fn paint(&self, text: &str, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{}", (*self).apply(text))
    }
}
