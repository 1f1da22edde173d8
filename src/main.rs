//! Walk an 11×11 grid room in first person.
//!
//! Controls  W/↑ = forward  S/↓ = back  A/← = left  D/→ = right
//!           click the on-screen pad  Esc = quit
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- --width 1024 --height 768
//! ```

use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use glam::vec2;
use log::info;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use gridroom::{
    cli::ConfigArgs,
    renderer::{Overlay, RendererExt, Software},
    sim::{Direction, MoveOutcome, NavPad, ResizeDebouncer, Session, direction_for_key},
};

const TITLE: &str = "gridroom";

#[derive(Parser, Debug)]
#[command(about = "First-person view of a grid room")]
struct Args {
    #[command(flatten)]
    cfg: ConfigArgs,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut session = Session::new(args.cfg.to_config()).context("invalid configuration")?;
    let (w, h) = (session.viewport().width, session.viewport().height);

    let mut win = Window::new(
        TITLE,
        w,
        h,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )
    .context("opening window")?;
    win.set_target_fps(60);
    win.set_title(&format!("{TITLE} {}", session.readout()));

    let mut renderer = Software::default();
    let mut pad = NavPad::new(session.viewport());
    let mut resize = ResizeDebouncer::new((w, h));
    let mut frame = session.frame();
    let mut mouse_was_down = false;

    info!("{TITLE} ready at {}", session.readout());

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let now = Instant::now();

        /* --------------- gather directional commands --------------------- */
        let mut moves: Vec<Direction> = win
            .get_keys_pressed(KeyRepeat::Yes)
            .into_iter()
            .filter_map(direction_for_key)
            .collect();

        let mouse_down = win.get_mouse_down(MouseButton::Left);
        if mouse_down && !mouse_was_down {
            let hit = win
                .get_mouse_pos(MouseMode::Discard)
                .and_then(|(x, y)| pad.hit(vec2(x, y)));
            moves.extend(hit);
        }
        mouse_was_down = mouse_down;

        /* --------------- apply: each commit is a full rebuild ------------ */
        for dir in moves {
            if session.apply(dir) == MoveOutcome::Moved {
                pad.press(dir, now);
                frame = session.frame();
                win.set_title(&format!("{TITLE} {}", session.readout()));
            }
        }

        /* --------------- debounced resize -------------------------------- */
        resize.signal(win.get_size(), now);
        if let Some((w, h)) = resize.poll(now) {
            if session.resize(w, h) {
                pad.layout(session.viewport());
                frame = session.frame();
            }
        }

        /* --------------- draw ------------------------------------------- */
        let readout = session.readout();
        let overlay = Overlay {
            readout: &readout,
            pad: Some(&pad),
            now,
        };
        let mut shown = Ok(());
        renderer.draw_frame(&frame, Some(&overlay), |fb, w, h| {
            shown = win.update_with_buffer(fb, w, h);
        });
        shown.context("presenting frame")?;
    }
    Ok(())
}
