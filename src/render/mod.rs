mod color;

pub use color::{color_of, colorize, pack_rgba};
