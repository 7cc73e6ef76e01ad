//! Pretty-printer for Boolean combination trees.
//!
//! [`render`] writes a tree in-order, one space between tokens and no
//! parentheses, the way combinations are echoed back to the user. Flat
//! output is ambiguous for non-canonical trees; [`render_with`] with
//! [`Grouping::Minimal`] adds just the parentheses needed for the text to
//! parse back to the same tree.
//!
//! Rendering is a pure function of the tree: callers decide where the
//! text goes. [`render_into`] writes through any [`Emitter`].

pub mod emitter;
mod printer;

pub use emitter::{Emitter, StringEmitter};
pub use printer::{render, render_into, render_with, Grouping, RenderOptions};
