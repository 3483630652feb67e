// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of permgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! permgrid CLI entrypoint.
//!
//! Renders a built-in demo or a JSON graph file and steps through a traversal, either in the
//! interactive TUI (default) or as plain ANSI frames on stdout (`--plain`).

use std::error::Error;
use std::io;
use std::path::Path;

use permgrid::format::load_graph_file;
use permgrid::model::{fixtures, Graph, Layout, VertexId};
use permgrid::render::{render_diagram, RenderOptions};
use permgrid::traverse::{Algorithm, Weights};
use permgrid::tui::{self, Palette};

const LOG_ENV: &str = "PERMGRID_LOG";
const DEFAULT_DEMO: &str = "small";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--demo <name> | --graph <file.json>] [--algo <dijkstra|prim|none>] [--start <v>]\n      [--plain] [--ascii] [--no-color]\n\nDemos: {}. Without --demo or --graph the `{DEFAULT_DEMO}` demo is shown.\n--algo defaults to dijkstra; `none` prints the diagram once and exits.\n--plain prints one frame per step to stdout and waits for Enter between frames.\n--ascii draws with ASCII glyphs. --no-color disables ANSI colors in --plain mode.\n\nColors come from {} (`<vertex>,<edge>`, e.g. `#ff0000,#0000ff`).\nLogs go to stderr when {LOG_ENV} is set (e.g. `{LOG_ENV}=debug`).",
        fixtures::DEMO_NAMES.join(", "),
        tui::PALETTE_ENV,
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Traversal {
    Off,
    Run(Algorithm),
}

impl Default for Traversal {
    fn default() -> Self {
        Self::Run(Algorithm::Dijkstra)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: Option<String>,
    graph: Option<String>,
    traversal: Option<Traversal>,
    start: Option<usize>,
    plain: bool,
    ascii: bool,
    no_color: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo.is_some() {
                    return Err(());
                }
                let name = args.next().ok_or(())?;
                if fixtures::demo(&name).is_none() {
                    return Err(());
                }
                options.demo = Some(name);
            }
            "--graph" => {
                if options.graph.is_some() {
                    return Err(());
                }
                options.graph = Some(args.next().ok_or(())?);
            }
            "--algo" => {
                if options.traversal.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let traversal = if raw.eq_ignore_ascii_case("none") {
                    Traversal::Off
                } else {
                    Traversal::Run(raw.parse().map_err(|_| ())?)
                };
                options.traversal = Some(traversal);
            }
            "--start" => {
                if options.start.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let start: usize = raw.parse().map_err(|_| ())?;
                options.start = Some(start);
            }
            "--plain" => {
                if options.plain {
                    return Err(());
                }
                options.plain = true;
            }
            "--ascii" => {
                if options.ascii {
                    return Err(());
                }
                options.ascii = true;
            }
            "--no-color" => {
                if options.no_color {
                    return Err(());
                }
                options.no_color = true;
            }
            _ => return Err(()),
        }
    }

    if options.demo.is_some() && options.graph.is_some() {
        return Err(());
    }

    Ok(options)
}

fn init_logging() -> Result<(), Box<dyn Error>> {
    let Ok(directives) = std::env::var(LOG_ENV) else {
        return Ok(());
    };
    let filter = tracing_subscriber::EnvFilter::try_new(directives.trim())?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

struct Input {
    graph: Graph,
    layout: Layout,
    weights: Weights,
    start: VertexId,
}

fn load_input(options: &CliOptions) -> Result<Input, Box<dyn Error>> {
    let mut input = match &options.graph {
        Some(path) => {
            let file = load_graph_file(Path::new(path))?;
            Input {
                graph: file.graph,
                layout: file.layout,
                weights: file.weights,
                start: VertexId::new(0),
            }
        }
        None => {
            let name = options.demo.as_deref().unwrap_or(DEFAULT_DEMO);
            let demo = fixtures::demo(name).ok_or_else(|| format!("unknown demo `{name}`"))?;
            let weights = Weights::new(&demo.graph, demo.weights)?;
            Input {
                graph: demo.graph,
                layout: demo.layout,
                weights,
                start: demo.start,
            }
        }
    };

    if let Some(start) = options.start {
        input.start = VertexId::new(start);
    }
    Ok(input)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "permgrid".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_logging()?;

        let input = load_input(&options)?;
        let render_options = if options.ascii {
            RenderOptions::ascii()
        } else {
            RenderOptions::default()
        };

        let algorithm = match options.traversal.unwrap_or_default() {
            Traversal::Off => {
                let diagram = render_diagram(&input.graph, &input.layout, &render_options)?;
                println!("{diagram}");
                return Ok(());
            }
            Traversal::Run(algorithm) => algorithm,
        };

        let steps = algorithm.steps(&input.graph, &input.weights, input.start)?;
        tracing::debug!(%algorithm, steps = steps.len(), "traversal computed");

        if options.plain {
            let palette = if options.no_color {
                None
            } else {
                Some(Palette::from_env()?)
            };
            let stdin = io::stdin();
            tui::run_plain(
                &input.graph,
                &input.layout,
                &steps,
                palette.as_ref(),
                &render_options,
                stdin.lock(),
                io::stdout().lock(),
            )?;
            return Ok(());
        }

        let palette = Palette::from_env()?;
        tui::run_steps(
            &input.graph,
            &input.layout,
            &steps,
            &palette,
            &render_options,
        )?;
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("permgrid: {err}");
        std::process::exit(1);
    }
}
