//! Pointer and touch events, normalized to one event type before they reach the capture session.

use crate::foundation::core::Point;

/// Phase of a unified input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputPhase {
    /// Mouse button down or first touch start.
    Press,
    Move,
    /// Mouse button up or touch end.
    Release,
    /// Pointer left the surface. Ends an active stroke like a release.
    Leave,
}

/// A single input event in viewport coordinates.
///
/// `position` is `None` when the source carried no usable coordinates, e.g. a touch end whose
/// touch list is already empty.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputEvent {
    pub phase: InputPhase,
    pub position: Option<Point>,
}

impl InputEvent {
    pub fn press(x: f64, y: f64) -> Self {
        Self {
            phase: InputPhase::Press,
            position: Some(Point::new(x, y)),
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            phase: InputPhase::Move,
            position: Some(Point::new(x, y)),
        }
    }

    pub fn release() -> Self {
        Self {
            phase: InputPhase::Release,
            position: None,
        }
    }

    pub fn leave() -> Self {
        Self {
            phase: InputPhase::Leave,
            position: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Leave,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchKind {
    Start,
    Move,
    End,
}

/// One active touch point in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

/// Raw event as delivered by a host toolkit.
#[derive(Clone, Debug, PartialEq)]
pub enum RawInput {
    Pointer {
        kind: PointerKind,
        client_x: f64,
        client_y: f64,
    },
    Touch {
        kind: TouchKind,
        touches: Vec<TouchPoint>,
    },
}

impl RawInput {
    /// Collapse into an [`InputEvent`]. Only the first touch of a multi-touch event is used.
    pub fn normalize(&self) -> InputEvent {
        match self {
            Self::Pointer {
                kind,
                client_x,
                client_y,
            } => InputEvent {
                phase: match kind {
                    PointerKind::Down => InputPhase::Press,
                    PointerKind::Move => InputPhase::Move,
                    PointerKind::Up => InputPhase::Release,
                    PointerKind::Leave => InputPhase::Leave,
                },
                position: Some(Point::new(*client_x, *client_y)),
            },
            Self::Touch { kind, touches } => InputEvent {
                phase: match kind {
                    TouchKind::Start => InputPhase::Press,
                    TouchKind::Move => InputPhase::Move,
                    TouchKind::End => InputPhase::Release,
                },
                position: touches.first().map(|t| Point::new(t.x, t.y)),
            },
        }
    }
}

impl From<&RawInput> for InputEvent {
    fn from(raw: &RawInput) -> Self {
        raw.normalize()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/signature/input.rs"]
mod tests;
