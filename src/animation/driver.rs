//! The host's "advance one frame" capability.

use crate::scene::FrameSnapshot;
use crate::session::PlaneCommand;

/// What the host wants after a frame was presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSignal {
    /// Keep going.
    Continue,
    /// The host is shutting down; abandon the running animation.
    Quit,
}

/// Presents composed frames and reports pending user input.
///
/// Transitions and reductions call [`present`](Self::present) once per
/// intermediate step and then [`poll_input`](Self::poll_input), so a host
/// event pump never starves while an animation blocks its caller.
pub trait FrameDriver {
    /// Draw one frame.
    fn present(&mut self, frame: &FrameSnapshot) -> FrameSignal;

    /// Commands the user issued since the last poll.
    fn poll_input(&mut self) -> Vec<PlaneCommand> {
        Vec::new()
    }
}

impl<F> FrameDriver for F
where
    F: FnMut(&FrameSnapshot) -> FrameSignal,
{
    fn present(&mut self, frame: &FrameSnapshot) -> FrameSignal {
        self(frame)
    }
}
