mod debounce;
mod input;
mod session;
mod viewpoint;

pub use debounce::{RESIZE_QUIET, ResizeDebouncer};
pub use input::{KEY_BINDINGS, NavButton, NavPad, PRESS_FEEDBACK, direction_for_key};
pub use session::Session;
pub use viewpoint::{Direction, MOVE_EPSILON, MoveOutcome, Viewpoint};
