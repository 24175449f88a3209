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
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
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

//! Smoothed camera zoom for top-down and RTS-style cameras.
//!
//! A [`camera::ZoomController`] turns per-frame zoom input into either a
//! camera translation along the view axis or a field-of-view change. Two
//! behaviors layer on top of the plain zoom:
//!
//! - terrain-offset compensation lifts the camera while elevated terrain
//!   sits under the viewport center, and lowers it again afterwards
//! - near-minimum-height pivoting retreats the camera and flattens its
//!   pitch as it approaches the ground
//!
//! # Key entry points
//!
//! - [`camera::ZoomController`] - the controller, built with
//!   [`camera::ZoomController::builder`]
//! - [`camera::services`] - terrain, rotation, pan and notification
//!   contracts the host implements
//! - [`input`] - scroll and keyboard zoom sources
//! - [`options::Options`] - zoom and input configuration with TOML presets
//!
//! # Frame loop
//!
//! ```ignore
//! controller.update_input(&mut input_source, dt);
//! controller.apply(dt);
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;

pub use camera::{ZoomController, ZoomRuntimeState};
pub use error::{ConfigError, ZoomError};
pub use options::Options;
