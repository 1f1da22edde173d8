//! Render one frame of the room to SVG.
//!
//! ```bash
//! cargo run --bin room_svg -- --moves ffffl -o room.svg
//! cargo run --bin room_svg -- --at 2,7.5 > room.svg
//! ```

use std::{fs, io::Write, path::PathBuf, time::Instant};

use anyhow::Context;
use clap::Parser;
use glam::Vec2;
use log::info;

use gridroom::{
    cli::{ConfigArgs, parse_moves, parse_point},
    renderer::{Overlay, RendererExt, SvgCanvas},
    sim::Session,
};

#[derive(Parser, Debug)]
#[command(about = "Write a single gridroom frame as SVG")]
struct Args {
    #[command(flatten)]
    cfg: ConfigArgs,
    /// Starting viewpoint `x,y` (defaults to the grid center).
    #[arg(long, value_parser = parse_point)]
    at: Option<Vec2>,
    /// Moves applied before rendering, e.g. `ffrl` or `wwda`.
    #[arg(long, default_value = "")]
    moves: String,
    /// Output file; stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let cfg = args.cfg.to_config();
    let mut session = match args.at {
        Some(at) => Session::with_viewpoint(cfg, at),
        None => Session::new(cfg),
    }
    .context("invalid configuration")?;

    let moves = parse_moves(&args.moves).map_err(anyhow::Error::msg)?;
    for dir in moves {
        session.apply(dir);
    }

    let frame = session.frame();
    let readout = session.readout();
    let overlay = Overlay {
        readout: &readout,
        pad: None,
        now: Instant::now(),
    };
    let mut svg = SvgCanvas::default();
    svg.draw_frame(&frame, Some(&overlay), |_, _, _| {});

    match &args.output {
        Some(path) => {
            fs::write(path, svg.document())
                .with_context(|| format!("writing {}", path.display()))?;
            info!("wrote {} at {}", path.display(), readout);
        }
        None => std::io::stdout()
            .write_all(svg.document().as_bytes())
            .context("writing to stdout")?,
    }
    Ok(())
}
