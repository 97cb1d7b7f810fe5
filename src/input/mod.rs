//! Pointer-driven drag interaction.
//!
//! Pick up a placed bead, move it 1:1 with the pointer, and on release
//! either return it to the loop or remove it, depending on how far from
//! the string it was dropped. The engine holds at most one
//! [`DragSession`] at a time; input events are serialized by the host's
//! event loop.

mod drag;

pub use drag::{resolve_drop, DragSession, DropOutcome};
