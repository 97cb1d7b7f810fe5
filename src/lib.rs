// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive bead-layout engine for a bracelet customization storefront.
//!
//! Beadloop places variable-sized circular beads evenly around a
//! dynamically-sized loop, animates their arrival and removal, supports
//! drag-to-remove, and keeps circumference, bead count, and price in sync
//! in real time.
//!
//! # Key entry points
//!
//! - [`engine::DesignEngine`] - the design session: add/remove/drag/tick
//! - [`geometry::LoopLayout`] - pure layout math for a diameter sequence
//! - [`options::Options`] - runtime tuning (sizing, interpolation feel,
//!   drag thresholds)
//! - [`store`] - collaborator traits to the surrounding application
//!
//! # Architecture
//!
//! The engine is single-threaded and tick-driven: the host forwards input
//! events and calls [`tick`](engine::DesignEngine::tick) once per frame.
//! Every add/remove recomputes target geometry; rendered state chases the
//! targets with a first-order lag and snaps when close. Persistence and
//! auth stay behind the [`store`] traits — the engine never sees HTTP or
//! a database.

pub mod animation;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod options;
pub mod store;
pub mod strand;
pub mod util;
