use crate::foundation::core::Point;
use crate::signature::input::InputPhase;

/// Whether a stroke is in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaptureState {
    #[default]
    Idle,
    Drawing,
}

/// What the surface should do in response to one event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    /// Start a path at the mapped point.
    Begin(Point),
    /// Extend the current path to the mapped point.
    Extend(Point),
    /// The stroke ended; serialize and commit the raster.
    Commit,
    /// Nothing to do.
    Ignored,
}

/// Press/move/release state machine for one pad.
///
/// ```text
/// Idle    --press-->               Drawing  (Begin)
/// Drawing --move-->                Drawing  (Extend)
/// Drawing --release | leave-->     Idle     (Commit)
/// ```
///
/// Every other combination is ignored. A press while already drawing restarts the path at the
/// new point without committing.
#[derive(Clone, Copy, Debug, Default)]
pub struct CaptureSession {
    state: CaptureState,
}

impl CaptureSession {
    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state == CaptureState::Drawing
    }

    /// Advance on an event whose position is already mapped into surface space.
    pub fn advance(&mut self, phase: InputPhase, mapped: Option<Point>) -> Transition {
        match (self.state, phase, mapped) {
            (_, InputPhase::Press, Some(p)) => {
                self.state = CaptureState::Drawing;
                Transition::Begin(p)
            }
            (CaptureState::Drawing, InputPhase::Move, Some(p)) => Transition::Extend(p),
            (CaptureState::Drawing, InputPhase::Release | InputPhase::Leave, _) => {
                self.state = CaptureState::Idle;
                Transition::Commit
            }
            _ => Transition::Ignored,
        }
    }

    pub fn reset(&mut self) {
        self.state = CaptureState::Idle;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/signature/session.rs"]
mod tests;
