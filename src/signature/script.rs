//! Recorded input scripts, replayed into a pad or a claim form.
//!
//! ```json
//! [
//!   { "type": "resize", "container_width": 616, "rect": { "left": 8, "top": 8, "width": 600, "height": 150 } },
//!   { "type": "mouse_down", "x": 18, "y": 18 },
//!   { "type": "mouse_move", "x": 58, "y": 58 },
//!   { "type": "mouse_up" }
//! ]
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::DisplayRect;
use crate::foundation::error::{ClaimError, ClaimResult};
use crate::signature::input::{PointerKind, RawInput, TouchKind, TouchPoint};
use crate::signature::pad::{PadOutcome, SignaturePad};
use crate::signature::surface::SignatureSurface;

/// One recorded step.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptStep {
    MouseDown {
        x: f64,
        y: f64,
    },
    MouseMove {
        x: f64,
        y: f64,
    },
    MouseUp {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
    MouseLeave {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
    TouchStart {
        touches: Vec<TouchPoint>,
    },
    TouchMove {
        touches: Vec<TouchPoint>,
    },
    TouchEnd {
        #[serde(default)]
        touches: Vec<TouchPoint>,
    },
    Resize {
        container_width: f64,
        #[serde(default)]
        rect: Option<DisplayRect>,
    },
    Clear,
}

/// What a step asks the host to do.
#[derive(Clone, Debug, PartialEq)]
pub enum StepAction {
    Input(RawInput),
    Resize {
        container_width: f64,
        rect: Option<DisplayRect>,
    },
    Clear,
}

impl ScriptStep {
    pub fn action(&self) -> StepAction {
        let pointer = |kind, x: &f64, y: &f64| {
            StepAction::Input(RawInput::Pointer {
                kind,
                client_x: *x,
                client_y: *y,
            })
        };
        let touch = |kind, touches: &Vec<TouchPoint>| {
            StepAction::Input(RawInput::Touch {
                kind,
                touches: touches.clone(),
            })
        };
        match self {
            Self::MouseDown { x, y } => pointer(PointerKind::Down, x, y),
            Self::MouseMove { x, y } => pointer(PointerKind::Move, x, y),
            Self::MouseUp { x, y } => pointer(PointerKind::Up, x, y),
            Self::MouseLeave { x, y } => pointer(PointerKind::Leave, x, y),
            Self::TouchStart { touches } => touch(TouchKind::Start, touches),
            Self::TouchMove { touches } => touch(TouchKind::Move, touches),
            Self::TouchEnd { touches } => touch(TouchKind::End, touches),
            Self::Resize {
                container_width,
                rect,
            } => StepAction::Resize {
                container_width: *container_width,
                rect: *rect,
            },
            Self::Clear => StepAction::Clear,
        }
    }
}

/// An ordered list of steps.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct EventScript {
    pub steps: Vec<ScriptStep>,
}

impl EventScript {
    pub fn from_json_str(s: &str) -> ClaimResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| ClaimError::serde(format!("parse event script JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> ClaimResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ClaimError::validation(format!("open event script '{}': {e}", path.display()))
        })?;
        serde_json::from_reader(BufReader::new(f))
            .map_err(|e| ClaimError::serde(format!("parse event script JSON: {e}")))
    }
}

/// Counts gathered while replaying a script.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub steps: usize,
    pub commits: usize,
    pub clears: usize,
    pub resizes: usize,
    pub ignored: usize,
}

impl ReplaySummary {
    pub(crate) fn record(&mut self, outcome: PadOutcome) {
        match outcome {
            PadOutcome::Committed => self.commits += 1,
            PadOutcome::Ignored => self.ignored += 1,
            PadOutcome::Drawing => {}
        }
    }
}

/// Replay `script` directly into a pad.
pub fn replay<S: SignatureSurface>(
    pad: &mut SignaturePad<S>,
    script: &EventScript,
) -> ClaimResult<ReplaySummary> {
    let mut summary = ReplaySummary::default();
    for step in &script.steps {
        summary.steps += 1;
        match step.action() {
            StepAction::Input(raw) => summary.record(pad.handle_raw(&raw)?),
            StepAction::Resize {
                container_width,
                rect,
            } => {
                pad.resize(container_width, rect)?;
                summary.resizes += 1;
            }
            StepAction::Clear => {
                pad.reset();
                summary.clears += 1;
            }
        }
    }
    Ok(summary)
}

#[cfg(test)]
#[path = "../../tests/unit/signature/script.rs"]
mod tests;
