//! First-person view of a small grid room, projected and drawn as 2-D vectors.
//!
//! A stimulus (move or resize) runs the whole pipeline:
//!
//! ```text
//! Session ─► engine::rebuild ─► engine::order ─► engine::place_labels ─► Renderer
//! ```
//!
//! * [`world`] – configuration, camera projection, snapshot types.
//! * [`engine`] – geometry building, painter's ordering, label placement.
//! * [`sim`] – viewpoint control, input mapping, resize debounce, session.
//! * [`renderer`] – drawing sinks (CPU raster, SVG).
//! * [`cli`] – command-line configuration for the binaries.

pub mod cli;
pub mod engine;
pub mod renderer;
pub mod sim;
pub mod world;
