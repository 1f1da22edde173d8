pub mod builder;
pub mod compositor;
pub mod labels;
pub mod pipeline;

pub use builder::rebuild;
pub use compositor::{Primitive, PrimitiveKind, order, wall_key};
pub use labels::{Anchor, Label, LabelContext, Placement, place_label, place_labels};
pub use pipeline::{Frame, compose};
