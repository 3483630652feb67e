// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of permgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Step-through drivers for traversal overlays.
//!
//! Provides the interactive stepper (ratatui + crossterm) and a line-oriented fallback that
//! prints one ANSI-colored frame per step.

use std::{
    fmt,
    io::{self, BufRead, Write},
    time::Duration,
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    style::Color as AnsiColor,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as SplitDirection, Layout as Split},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::model::{ColorOverlay, Graph, Layout};
use crate::render::{render_diagram, Diagram, Owner, RenderError, RenderOptions};
use crate::traverse::Step;

mod theme;
#[cfg(test)]
mod tests;

pub use theme::{Palette, Rgb, ThemeError, PALETTE_ENV};

/// Which prefix of a traversal is currently painted.
///
/// Frame 0 is the bare diagram; frame `k` has the first `k` steps applied.
#[derive(Debug, Clone)]
pub struct Stepper<'s> {
    steps: &'s [Step],
    applied: usize,
}

impl<'s> Stepper<'s> {
    pub fn new(steps: &'s [Step]) -> Self {
        Self { steps, applied: 0 }
    }

    pub fn applied(&self) -> usize {
        self.applied
    }

    pub fn total(&self) -> usize {
        self.steps.len()
    }

    pub fn is_done(&self) -> bool {
        self.applied == self.steps.len()
    }

    pub fn last(&self) -> Option<&Step> {
        self.applied
            .checked_sub(1)
            .and_then(|idx| self.steps.get(idx))
    }

    /// Returns `false` once every step is applied.
    pub fn advance(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.applied += 1;
        true
    }

    pub fn back(&mut self) -> bool {
        if self.applied == 0 {
            return false;
        }
        self.applied -= 1;
        true
    }

    /// Overlay with the applied steps painted in order.
    pub fn overlay<P: Clone>(&self, vertex_paint: &P, edge_paint: &P) -> ColorOverlay<P> {
        let mut overlay = ColorOverlay::new();
        for step in &self.steps[..self.applied] {
            step.apply(&mut overlay, vertex_paint.clone(), edge_paint.clone());
        }
        overlay
    }

    pub fn status(&self) -> String {
        let mut status = format!("step {}/{}", self.applied, self.total());
        if let Some(step) = self.last() {
            status.push_str(&format!(
                "  settled {} (distance {})",
                step.vertex, step.distance
            ));
            if let Some(edge) = step.via {
                status.push_str(&format!(" via edge {edge}"));
            }
        }
        if self.is_done() {
            status.push_str("  done");
        }
        status
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Next,
    Previous,
    Quit,
    Ignore,
}

fn key_action(code: KeyCode) -> KeyAction {
    match code {
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Right | KeyCode::Char('n') => {
            KeyAction::Next
        }
        KeyCode::Left | KeyCode::Char('p') => KeyAction::Previous,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        _ => KeyAction::Ignore,
    }
}

/// Converts a rendered diagram into styled ratatui text.
pub fn diagram_text(diagram: &Diagram, overlay: &ColorOverlay<Style>) -> Text<'static> {
    let lines = diagram
        .lines()
        .iter()
        .map(|line| {
            let spans = line
                .iter()
                .map(|fragment| {
                    let style = match fragment.owner() {
                        Some(Owner::Vertex(vertex)) => overlay.vertex(vertex).copied(),
                        Some(Owner::Edge(edge)) => overlay.edge(edge).copied(),
                        None => None,
                    };
                    Span::styled(fragment.text().to_owned(), style.unwrap_or_default())
                })
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect::<Vec<_>>();
    Text::from(lines)
}

/// Runs the interactive stepper until the user quits.
///
/// Space, Enter, Right or `n` applies the next step; Left or `p` takes one back; `q` or Esc quits.
pub fn run_steps(
    graph: &Graph,
    layout: &Layout,
    steps: &[Step],
    palette: &Palette,
    options: &RenderOptions,
) -> Result<(), DriverError> {
    let diagram = render_diagram(graph, layout, options)?;
    let vertex_style = palette.vertex_style();
    let edge_style = palette.edge_style();
    let mut stepper = Stepper::new(steps);
    let mut terminal = TerminalSession::new()?;

    loop {
        let text = diagram_text(&diagram, &stepper.overlay(&vertex_style, &edge_style));
        let status = stepper.status();
        terminal.draw(|frame| draw(frame, text, &status))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key_action(key.code) {
                KeyAction::Next => {
                    stepper.advance();
                }
                KeyAction::Previous => {
                    stepper.back();
                }
                KeyAction::Quit => break,
                KeyAction::Ignore => {}
            }
            tracing::debug!(applied = stepper.applied(), "stepper moved");
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame<'_>, text: Text<'static>, status: &str) {
    let chunks = Split::default()
        .direction(SplitDirection::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.size());

    let block = Block::default().borders(Borders::ALL).title(" permgrid ");
    frame.render_widget(Paragraph::new(text).block(block), chunks[0]);

    let footer = Line::from(vec![
        Span::styled(status.to_owned(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("   [space] next  [p] back  [q] quit"),
    ]);
    frame.render_widget(Paragraph::new(footer), chunks[1]);
}

/// Prints one frame per step to `output`, waiting for a line on `input` between frames.
///
/// `palette` of `None` prints plain text. Stops early when `input` reaches end of file.
pub fn run_plain(
    graph: &Graph,
    layout: &Layout,
    steps: &[Step],
    palette: Option<&Palette>,
    options: &RenderOptions,
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<(), DriverError> {
    let diagram = render_diagram(graph, layout, options)?;
    let mut stepper = Stepper::new(steps);
    let mut line = String::new();

    while stepper.advance() {
        let frame = match palette {
            Some(palette) => {
                let vertex = AnsiColor::from(palette.vertex);
                let edge = AnsiColor::from(palette.edge);
                diagram
                    .paint(&stepper.overlay(&vertex, &edge))
                    .map_err(RenderError::Paint)?
            }
            None => diagram.to_plain(),
        };
        writeln!(output, "{frame}\n{}\n", stepper.status())?;
        output.flush()?;

        if stepper.is_done() {
            break;
        }
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
    }

    Ok(())
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

#[derive(Debug)]
pub enum DriverError {
    Render(RenderError),
    Io(io::Error),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(source) => write!(f, "render failed: {source}"),
            Self::Io(source) => write!(f, "terminal io failed: {source}"),
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(source) => Some(source),
            Self::Io(source) => Some(source),
        }
    }
}

impl From<RenderError> for DriverError {
    fn from(value: RenderError) -> Self {
        Self::Render(value)
    }
}

impl From<io::Error> for DriverError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}
