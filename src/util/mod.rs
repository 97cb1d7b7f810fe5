//! Small shared helpers.

pub mod tick_timing;

pub use tick_timing::TickTiming;
