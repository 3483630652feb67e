// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of permgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::{env, error::Error, fmt};

use crossterm::style::Color as AnsiColor;
use ratatui::style::{Color, Modifier, Style};

pub const PALETTE_ENV: &str = "PERMGRID_PALETTE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Color::Rgb(value.r, value.g, value.b)
    }
}

impl From<Rgb> for AnsiColor {
    fn from(value: Rgb) -> Self {
        AnsiColor::Rgb {
            r: value.r,
            g: value.g,
            b: value.b,
        }
    }
}

/// Colors a traversal paints with: settled vertices and the edges that reached them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub vertex: Rgb,
    pub edge: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            vertex: Rgb::new(0xff, 0x00, 0x00),
            edge: Rgb::new(0x00, 0x00, 0xff),
        }
    }
}

impl Palette {
    /// Reads `PERMGRID_PALETTE=<vertex>,<edge>`; unset or blank keeps the defaults.
    pub fn from_env() -> Result<Self, ThemeError> {
        let value = match env::var(PALETTE_ENV) {
            Ok(value) => value,
            Err(env::VarError::NotPresent) => return Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ThemeError::InvalidEnv {
                    name: PALETTE_ENV.to_string(),
                    value: "<non-unicode>".to_string(),
                });
            }
        };

        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        Self::parse_csv(trimmed).map_err(|error| ThemeError::InvalidEnv {
            name: PALETTE_ENV.to_string(),
            value: format!("{trimmed} ({error})"),
        })
    }

    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts: Vec<&str> = value.split(',').map(|part| part.trim()).collect();
        match parts.as_slice() {
            [vertex, edge] => Ok(Self {
                vertex: parse_palette_color(vertex)?,
                edge: parse_palette_color(edge)?,
            }),
            _ => Err(format!(
                "expected 2 comma-separated colors (vertex,edge), got {}",
                parts.len()
            )),
        }
    }

    pub fn vertex_style(&self) -> Style {
        Style::default()
            .fg(self.vertex.into())
            .add_modifier(Modifier::BOLD)
    }

    pub fn edge_style(&self) -> Style {
        Style::default().fg(self.edge.into())
    }
}

fn parse_palette_color(value: &str) -> Result<Rgb, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty color".to_string());
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix("rgb:") {
        let parts: Vec<&str> = rest.split('/').collect();
        if parts.len() != 3 {
            return Err(format!("invalid rgb: value: {trimmed}"));
        }
        let r = parse_hex_channel(parts[0])?;
        let g = parse_hex_channel(parts[1])?;
        let b = parse_hex_channel(parts[2])?;
        return Ok(Rgb::new(r, g, b));
    }

    let hex = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: {trimmed} (expected #RRGGBB)"));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| format!("invalid hex color: {trimmed}"))?;
    let r = ((rgb >> 16) & 0xFF) as u8;
    let g = ((rgb >> 8) & 0xFF) as u8;
    let b = (rgb & 0xFF) as u8;
    Ok(Rgb::new(r, g, b))
}

fn parse_hex_channel(value: &str) -> Result<u8, String> {
    let value = value.trim();
    if value.len() == 2 {
        return u8::from_str_radix(value, 16).map_err(|_| format!("invalid rgb: component {value}"));
    }
    if value.len() == 4 {
        let parsed = u16::from_str_radix(value, 16)
            .map_err(|_| format!("invalid rgb: component {value}"))?;
        return Ok((parsed >> 8) as u8);
    }
    Err(format!(
        "invalid rgb: component {value} (expected 2 or 4 hex digits)"
    ))
}

#[derive(Debug, Clone)]
pub enum ThemeError {
    InvalidEnv { name: String, value: String },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { name, value } => write!(f, "invalid env {name}={value}"),
        }
    }
}

impl Error for ThemeError {}
