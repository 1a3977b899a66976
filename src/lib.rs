// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::private_intra_doc_links)]
#![warn(rustdoc::bare_urls)]
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
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
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
#![warn(unused_results)]
#![warn(unused_qualifications)]
// Cast hygiene
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// Tests unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! Coordinate-transform and animation engine for exploring the real line
//! and the complex plane.
//!
//! The crate turns pan, zoom and rotation of a view into pixel ↔ plane
//! conversions, keeps point labels readable without overlap, and animates
//! the sum or product of the plotted points as a sequence of smooth view
//! transitions. Windowing, drawing and event pumping stay with the host,
//! which plugs in through [`FrameDriver`] and [`labels::TextMeasure`].
//!
//! # Key entry points
//!
//! - [`PlaneSession`] - executes [`PlaneCommand`]s and composes frames
//! - [`CoordinateFrame`] - view parameters and pixel ↔ plane conversion
//! - [`labels::LabelLayout`] - per-frame non-overlapping label selection
//! - [`animation::TransitionAnimator`] - perceptually paced transitions
//! - [`arithmetic::ArithmeticChoreographer`] - animated sum/product
//!   reduction
//! - [`Options`] - TOML presets for every tunable
//!
//! # Frame model
//!
//! Everything runs on the caller's thread. Animated operations block until
//! their last frame has been handed to [`FrameDriver::present`]; between
//! frames they collect [`FrameDriver::poll_input`] so the host's event
//! queue keeps draining. Input received while animating is queued or
//! dropped, never applied mid-animation.

pub mod animation;
pub mod arithmetic;
pub mod error;
pub mod frame;
pub mod input;
pub mod labels;
pub mod options;
pub mod points;
pub mod scene;
pub mod session;
pub mod util;

pub use animation::{FrameDriver, FrameSignal};
pub use error::PlaneError;
pub use frame::CoordinateFrame;
pub use options::Options;
pub use scene::{FrameSnapshot, Scene};
pub use session::{PlaneCommand, PlaneSession};
pub use util::complex::Complex;
