// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of permgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::io::Cursor;

use crossterm::event::KeyCode;
use ratatui::style::Style;
use rstest::rstest;

use super::{diagram_text, key_action, run_plain, KeyAction, Palette, Stepper};
use crate::model::{fixtures, ColorOverlay, EdgeId, Graph, Layout, Side, VertexId};
use crate::render::{render_diagram, RenderOptions};
use crate::traverse::{Algorithm, Step, Weights};

fn small_steps() -> (fixtures::Demo, Vec<Step>) {
    let demo = fixtures::small();
    let weights = Weights::new(&demo.graph, demo.weights.clone()).expect("weights");
    let steps = Algorithm::Dijkstra
        .steps(&demo.graph, &weights, demo.start)
        .expect("steps");
    (demo, steps)
}

#[test]
fn stepper_walks_forward_and_back() {
    let (_, steps) = small_steps();
    let mut stepper = Stepper::new(&steps);
    assert_eq!(stepper.status(), "step 0/5");
    assert!(stepper.last().is_none());

    assert!(stepper.advance());
    assert!(stepper.advance());
    assert_eq!(
        stepper.status(),
        "step 2/5  settled 2 (distance 5) via edge 1"
    );

    assert!(stepper.back());
    assert_eq!(stepper.status(), "step 1/5  settled 0 (distance 0)");
    assert!(stepper.back());
    assert!(!stepper.back());

    while stepper.advance() {}
    assert!(stepper.is_done());
    assert!(stepper.status().ends_with("done"));
}

#[test]
fn overlay_covers_only_applied_steps() {
    let (_, steps) = small_steps();
    let mut stepper = Stepper::new(&steps);
    stepper.advance();
    stepper.advance();

    let overlay = stepper.overlay(&'v', &'e');
    assert_eq!(overlay.vertex(VertexId::new(0)), Some(&'v'));
    assert_eq!(overlay.vertex(VertexId::new(2)), Some(&'v'));
    assert_eq!(overlay.vertex(VertexId::new(1)), None);
    assert_eq!(overlay.edges().count(), 1);
    assert_eq!(overlay.edge(EdgeId::new(1)), Some(&'e'));
}

#[rstest]
#[case(KeyCode::Char(' '), KeyAction::Next)]
#[case(KeyCode::Enter, KeyAction::Next)]
#[case(KeyCode::Right, KeyAction::Next)]
#[case(KeyCode::Char('n'), KeyAction::Next)]
#[case(KeyCode::Left, KeyAction::Previous)]
#[case(KeyCode::Char('q'), KeyAction::Quit)]
#[case(KeyCode::Esc, KeyAction::Quit)]
#[case(KeyCode::Char('x'), KeyAction::Ignore)]
fn key_bindings(#[case] code: KeyCode, #[case] expected: KeyAction) {
    assert_eq!(key_action(code), expected);
}

#[test]
fn diagram_text_styles_owned_spans() {
    let graph = Graph::new(2, &[(0, 1)], &[Side::Left]).unwrap();
    let diagram = render_diagram(&graph, &Layout::identity(2), &RenderOptions::default()).unwrap();
    let palette = Palette::default();
    let mut overlay = ColorOverlay::<Style>::new();
    overlay.set_edge(EdgeId::new(0), palette.edge_style());

    let text = diagram_text(&diagram, &overlay);
    assert_eq!(text.lines.len(), 2);

    let bottom = &text.lines[1].spans;
    assert_eq!(bottom[0].content, "╰");
    assert_eq!(bottom[0].style, palette.edge_style());
    assert_eq!(bottom[1].style, palette.edge_style());
    assert_eq!(bottom[2].content, "1");
    assert_eq!(bottom[2].style, Style::default());
}

#[test]
fn plain_driver_prints_a_frame_per_step() {
    let (demo, steps) = small_steps();
    let input = Cursor::new("\n".repeat(steps.len()));
    let mut output = Vec::new();

    run_plain(
        &demo.graph,
        &demo.layout,
        &steps,
        None,
        &RenderOptions::default(),
        input,
        &mut output,
    )
    .unwrap();

    let output = String::from_utf8(output).unwrap();
    assert_eq!(output.matches("step ").count(), steps.len());
    assert!(output.contains("step 5/5  settled 3 (distance 8) via edge 3  done"));
}

#[test]
fn plain_driver_stops_at_end_of_input() {
    let (demo, steps) = small_steps();
    let mut output = Vec::new();

    run_plain(
        &demo.graph,
        &demo.layout,
        &steps,
        Some(&Palette::default()),
        &RenderOptions::default(),
        Cursor::new(""),
        &mut output,
    )
    .unwrap();

    let output = String::from_utf8(output).unwrap();
    assert_eq!(output.matches("step ").count(), 1);
    assert!(output.contains('\u{1b}'), "colored frame expected");
}
