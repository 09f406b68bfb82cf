use super::*;

fn p(x: f64, y: f64) -> Option<Point> {
    Some(Point::new(x, y))
}

#[test]
fn press_move_release_cycle() {
    let mut s = CaptureSession::default();
    assert_eq!(s.state(), CaptureState::Idle);

    assert_eq!(
        s.advance(InputPhase::Press, p(1.0, 2.0)),
        Transition::Begin(Point::new(1.0, 2.0))
    );
    assert!(s.is_drawing());
    assert_eq!(
        s.advance(InputPhase::Move, p(3.0, 4.0)),
        Transition::Extend(Point::new(3.0, 4.0))
    );
    assert_eq!(s.advance(InputPhase::Release, None), Transition::Commit);
    assert_eq!(s.state(), CaptureState::Idle);
}

#[test]
fn leave_while_drawing_commits() {
    let mut s = CaptureSession::default();
    s.advance(InputPhase::Press, p(0.0, 0.0));
    assert_eq!(s.advance(InputPhase::Leave, p(9.0, 9.0)), Transition::Commit);
    assert!(!s.is_drawing());
}

#[test]
fn idle_ignores_move_release_and_leave() {
    let mut s = CaptureSession::default();
    assert_eq!(s.advance(InputPhase::Move, p(1.0, 1.0)), Transition::Ignored);
    assert_eq!(s.advance(InputPhase::Release, None), Transition::Ignored);
    assert_eq!(s.advance(InputPhase::Leave, None), Transition::Ignored);
    assert_eq!(s.state(), CaptureState::Idle);
}

#[test]
fn press_without_position_is_ignored() {
    let mut s = CaptureSession::default();
    assert_eq!(s.advance(InputPhase::Press, None), Transition::Ignored);
    assert_eq!(s.state(), CaptureState::Idle);
}

#[test]
fn move_without_position_keeps_drawing() {
    let mut s = CaptureSession::default();
    s.advance(InputPhase::Press, p(0.0, 0.0));
    assert_eq!(s.advance(InputPhase::Move, None), Transition::Ignored);
    assert!(s.is_drawing());
}

#[test]
fn second_press_restarts_path() {
    let mut s = CaptureSession::default();
    s.advance(InputPhase::Press, p(0.0, 0.0));
    assert_eq!(
        s.advance(InputPhase::Press, p(5.0, 5.0)),
        Transition::Begin(Point::new(5.0, 5.0))
    );
    assert!(s.is_drawing());
}

#[test]
fn reset_returns_to_idle() {
    let mut s = CaptureSession::default();
    s.advance(InputPhase::Press, p(0.0, 0.0));
    s.reset();
    assert_eq!(s.state(), CaptureState::Idle);
}
