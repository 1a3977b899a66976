//! View transitions: planning, pacing and frame-by-frame application.
//!
//! [`plan`] turns a start and target value into per-frame values whose
//! perceived step size is constant: log-spaced for zoom, constant pixel
//! speed for panning, shortest arc for rotation. [`TransitionAnimator`]
//! applies a plan to a [`Scene`](crate::scene::Scene), presenting one
//! frame per step through a [`FrameDriver`].

/// The host's frame capability.
pub mod driver;
/// Progress curves.
pub mod easing;
/// Rate limiting for held-key steps.
pub mod pacing;
/// Per-frame value sequences.
pub mod plan;
/// Applying plans to the scene.
pub mod transition;

pub use driver::{FrameDriver, FrameSignal};
pub use easing::EasingFunction;
pub use pacing::StepPacer;
pub use plan::RangeStep;
pub use transition::TransitionAnimator;
