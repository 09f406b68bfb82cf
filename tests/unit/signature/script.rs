use super::*;
use crate::signature::config::PadConfig;

const SCRIPT: &str = r#"
[
  { "type": "resize", "container_width": 616, "rect": { "left": 8, "top": 8, "width": 300, "height": 75 } },
  { "type": "mouse_move", "x": 20, "y": 20 },
  { "type": "mouse_down", "x": 13, "y": 13 },
  { "type": "mouse_move", "x": 33, "y": 33 },
  { "type": "mouse_up" },
  { "type": "touch_start", "touches": [{ "x": 40, "y": 20 }, { "x": 0, "y": 0 }] },
  { "type": "touch_move", "touches": [{ "x": 80, "y": 40 }] },
  { "type": "touch_end" }
]
"#;

#[test]
fn script_parses_all_step_kinds() {
    let script = EventScript::from_json_str(SCRIPT).unwrap();
    assert_eq!(script.steps.len(), 8);
    assert_eq!(
        script.steps[4],
        ScriptStep::MouseUp { x: 0.0, y: 0.0 }
    );
    assert_eq!(
        script.steps[7],
        ScriptStep::TouchEnd {
            touches: Vec::new()
        }
    );
    assert!(EventScript::from_json_str(r#"[{ "type": "wiggle" }]"#).is_err());
}

#[test]
fn clear_step_maps_to_clear_action() {
    let script = EventScript::from_json_str(r#"[{ "type": "clear" }]"#).unwrap();
    assert_eq!(script.steps[0].action(), StepAction::Clear);
}

#[test]
fn replay_commits_each_stroke() {
    let script = EventScript::from_json_str(SCRIPT).unwrap();
    let mut pad = SignaturePad::new(PadConfig::default()).unwrap();

    let summary = replay(&mut pad, &script).unwrap();
    assert_eq!(summary.steps, 8);
    assert_eq!(summary.resizes, 1);
    assert_eq!(summary.commits, 2);
    assert_eq!(summary.ignored, 1);
    assert!(pad.is_signed());
    assert!(!pad.surface().is_blank());
}

#[test]
fn replay_with_trailing_clear_leaves_pad_unsigned() {
    let mut script = EventScript::from_json_str(SCRIPT).unwrap();
    script.steps.push(ScriptStep::Clear);
    let mut pad = SignaturePad::new(PadConfig::default()).unwrap();

    let summary = replay(&mut pad, &script).unwrap();
    assert_eq!(summary.clears, 1);
    assert!(!pad.is_signed());
    assert!(pad.surface().is_blank());
}

#[test]
fn rectless_resize_keeps_strokes_where_they_were_drawn() {
    let script = EventScript::from_json_str(
        r#"
[
  { "type": "resize", "container_width": 616, "rect": { "left": 0, "top": 0, "width": 300, "height": 75 } },
  { "type": "resize", "container_width": 416 },
  { "type": "mouse_down", "x": 100, "y": 40 },
  { "type": "mouse_move", "x": 150, "y": 60 },
  { "type": "mouse_up" }
]
"#,
    )
    .unwrap();
    let mut pad = SignaturePad::new(PadConfig::default()).unwrap();

    let summary = replay(&mut pad, &script).unwrap();
    assert_eq!(summary.resizes, 2);
    assert_eq!(summary.commits, 1);
    assert_eq!(
        pad.display_rect(),
        Some(DisplayRect::new(0.0, 0.0, 300.0, 75.0))
    );
    // (100, 40) on a 300x75 rect maps to (133.3, 80) on the 400x150 surface.
    assert!(pad.surface().alpha_at(133, 80).unwrap() > 0);
    assert_eq!(pad.surface().alpha_at(0, 0), Some(0));
}
