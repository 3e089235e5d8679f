//! End-to-end gesture scenarios driven through the robot harness.

use swiperow::{ActionMode, Color, TriggerState, TriggerStates, ViewHandle};
use swiperow_testing::{RobotEvent, SwipeRobot};

const RED: Color = Color::rgb(0.9, 0.2, 0.2);
const GREEN: Color = Color::rgb(0.2, 0.8, 0.3);

fn right_short(robot: &SwipeRobot, mode: ActionMode) {
    robot.bind_recording(
        TriggerStates::only(TriggerState::RightShort),
        ViewHandle(1),
        GREEN,
        mode,
    );
}

#[test]
fn exit_gesture_fires_one_completion_with_state_and_mode() {
    let mut robot = SwipeRobot::new(320.0, 44.0);
    right_short(&robot, ActionMode::Exit);

    robot.begin(60.0);
    robot.drag_to_fraction(0.9);
    robot.release(); // release velocity 0

    assert!(robot.events().contains(&RobotEvent::Swiping(0.9)));
    assert!(robot.is_animating(), "exit animation should be scheduled");

    // Zero release velocity means the slow exit duration, 0.35s: the tween
    // finishes within a frame of the 22nd (0.35 / 0.016).
    let mut frames = 0;
    while robot.is_animating() {
        robot.advance_frames(1);
        frames += 1;
        assert!(frames < 100, "exit never finished");
    }
    assert!((20..=25).contains(&frames), "exit took {frames} frames");

    assert_eq!(
        robot.completions(),
        vec![(TriggerState::RightShort, ActionMode::Exit)]
    );
    assert!(robot.controller().is_exited());

    // The dismissed row keeps its visuals (host removes the row); the
    // snapshot sits fully off-screen on the right.
    let visuals = robot.controller().visuals().expect("visuals kept");
    assert_eq!(visuals.snapshot_offset, robot.row_width());

    // Extra frames never produce a second completion.
    robot.advance_frames(30);
    assert_eq!(robot.completions().len(), 1);
}

#[test]
fn exited_controller_is_inert_until_reset() {
    let mut robot = SwipeRobot::new(320.0, 44.0);
    right_short(&robot, ActionMode::Exit);

    robot.begin(60.0);
    robot.drag_to_fraction(0.5);
    robot.release();
    robot.run_until_idle(1_000);
    assert!(robot.controller().is_exited());

    let events_before = robot.events().len();
    robot.begin(60.0);
    robot.drag_by(40.0);
    assert_eq!(robot.events().len(), events_before, "exited row accepted input");

    robot.controller().reset();
    assert!(!robot.controller().is_exited());
    assert!(robot.controller().visuals().is_none());
}

#[test]
fn no_bindings_means_no_gesture_at_all() {
    let mut robot = SwipeRobot::new(320.0, 44.0);

    robot.begin(60.0);
    robot.drag_by(100.0);
    robot.release();
    robot.run_until_idle(10);

    assert!(robot.events().is_empty());
    assert!(robot.completions().is_empty());
    assert_eq!(robot.snapshot_count(), 0);
}

#[test]
fn switch_gesture_settles_and_tears_down() {
    let mut robot = SwipeRobot::new(320.0, 44.0);
    robot.bind_recording(
        TriggerStates::only(TriggerState::LeftShort),
        ViewHandle(2),
        RED,
        ActionMode::Switch,
    );

    robot.begin(-60.0);
    robot.drag_to_fraction(-0.3);
    robot.release();

    // Spring settle runs and releases the drag visuals.
    robot.run_until_idle(2_000);

    assert_eq!(
        robot.completions(),
        vec![(TriggerState::LeftShort, ActionMode::Switch)]
    );
    assert!(robot.controller().visuals().is_none(), "visuals torn down");
    assert!(!robot.controller().is_dragging());
    assert_eq!(robot.snapshot_count(), 1);

    // Reset after a finished interaction changes nothing observable.
    robot.controller().reset();
    assert!(robot.controller().visuals().is_none());
    assert_eq!(robot.completions().len(), 1);
}

#[test]
fn long_trigger_overrides_short_on_release() {
    let mut robot = SwipeRobot::new(320.0, 44.0);
    // One call binds both right states to the same action pair.
    robot.bind_recording(
        TriggerStates::new()
            .with(TriggerState::RightShort)
            .with(TriggerState::RightLong),
        ViewHandle(3),
        GREEN,
        ActionMode::Exit,
    );

    robot.begin(60.0);
    robot.drag_to_fraction(0.8);
    robot.release();
    robot.run_until_idle(1_000);

    assert_eq!(
        robot.completions(),
        vec![(TriggerState::RightLong, ActionMode::Exit)]
    );
}

#[test]
fn release_below_short_trigger_resolves_to_no_action() {
    let mut robot = SwipeRobot::new(320.0, 44.0);
    right_short(&robot, ActionMode::Switch);

    robot.begin(60.0);
    robot.drag_to_fraction(0.1);
    robot.release();
    robot.run_until_idle(2_000);

    // The gesture ran (started/ended fired) but no state resolved.
    assert!(robot.events().contains(&RobotEvent::Started));
    assert!(robot.events().contains(&RobotEvent::Ended));
    assert!(robot.completions().is_empty());
    assert!(robot.controller().visuals().is_none());
}

#[test]
fn cancel_behaves_like_release() {
    let mut robot = SwipeRobot::new(320.0, 44.0);
    right_short(&robot, ActionMode::Switch);

    robot.begin(60.0);
    robot.drag_to_fraction(0.5);
    robot.cancel();
    robot.run_until_idle(2_000);

    assert_eq!(
        robot.completions(),
        vec![(TriggerState::RightShort, ActionMode::Switch)]
    );
}

#[test]
fn indicator_color_and_alpha_track_the_drag() {
    let mut robot = SwipeRobot::new(320.0, 44.0);
    right_short(&robot, ActionMode::Switch);
    let default_color = robot.controller().config().borrow().default_color;

    robot.begin(60.0);

    // Inside the short zone: default color, half alpha at half the trigger.
    robot.drag_to_fraction(0.125);
    let visuals = robot.controller().visuals().unwrap();
    assert_eq!(visuals.indicator_color, default_color);
    assert!((visuals.sliding_alpha - 0.5).abs() < 1e-4);
    assert_eq!(visuals.sliding_view, Some(ViewHandle(1)));

    // Strictly past the short trigger the bound color takes over and the
    // icon is fully opaque.
    robot.drag_to_fraction(0.3);
    let visuals = robot.controller().visuals().unwrap();
    assert_eq!(visuals.indicator_color, GREEN);
    assert_eq!(visuals.sliding_alpha, 1.0);

    robot.release();
    robot.run_until_idle(2_000);
}

#[test]
fn completion_callback_may_reset_the_controller() {
    let mut robot = SwipeRobot::new(320.0, 44.0);
    // Dismiss-then-reuse: the host resets the row from the exit completion.
    let controller = robot.controller().clone();
    robot.controller().bind(
        TriggerStates::only(TriggerState::RightShort),
        ViewHandle(1),
        GREEN,
        ActionMode::Exit,
        move |_, _| controller.reset(),
    );

    robot.begin(60.0);
    robot.drag_to_fraction(0.5);
    robot.release();
    robot.run_until_idle(1_000);

    // The reset ran inside the completion: straight back to a blank row.
    assert!(!robot.controller().is_exited());
    assert!(robot.controller().visuals().is_none());
    assert!(!robot.is_animating());
}

#[test]
fn config_changes_mid_drag_take_effect_on_the_next_movement() {
    let mut robot = SwipeRobot::new(320.0, 44.0);
    right_short(&robot, ActionMode::Switch);
    let default_color = robot.controller().config().borrow().default_color;

    robot.begin(60.0);
    robot.drag_to_fraction(0.3);
    // Past the default 0.25 short trigger: bound color, full alpha.
    let visuals = robot.controller().visuals().unwrap();
    assert_eq!(visuals.indicator_color, GREEN);
    assert_eq!(visuals.sliding_alpha, 1.0);

    // Raising the short trigger puts the unchanged offset back inside the
    // ramp zone; the next event recomputes against the new threshold.
    robot.controller().config().borrow_mut().short_trigger = 0.6;
    robot.drag_by(0.0);
    let visuals = robot.controller().visuals().unwrap();
    assert_eq!(visuals.indicator_color, default_color);
    assert!((visuals.sliding_alpha - 0.5).abs() < 1e-3);

    robot.release();
    robot.run_until_idle(2_000);
}

#[test]
fn faster_flick_exits_sooner() {
    let mut robot = SwipeRobot::new(320.0, 44.0);
    right_short(&robot, ActionMode::Exit);

    robot.begin(60.0);
    robot.drag_to_fraction(0.5);
    // Full-width-per-second flick: duration drops to 0.2s (~13 frames).
    robot.release_with_velocity(320.0);

    let mut frames = 0;
    while robot.is_animating() {
        robot.advance_frames(1);
        frames += 1;
        assert!(frames < 100);
    }
    assert!((11..=16).contains(&frames), "fast exit took {frames} frames");
}

#[test]
fn settle_moves_the_snapshot_back_toward_origin() {
    let mut robot = SwipeRobot::new(320.0, 44.0);
    right_short(&robot, ActionMode::Switch);

    robot.begin(60.0);
    robot.drag_to_fraction(0.5);
    let start = robot.controller().visuals().unwrap().snapshot_offset;
    robot.release();

    // A quarter of the nominal settle duration in: offset has shrunk but the
    // visuals still exist.
    robot.advance_frames(6);
    let mid = robot.controller().visuals().unwrap().snapshot_offset;
    assert!(mid.abs() < start.abs());

    robot.run_until_idle(2_000);
    assert!(robot.controller().visuals().is_none());
}

#[test]
fn vertical_gesture_is_refused() {
    let mut robot = SwipeRobot::new(320.0, 44.0);
    right_short(&robot, ActionMode::Switch);

    robot.begin_with_velocity(10.0, 30.0);
    assert!(robot.events().is_empty());
    assert!(!robot.controller().is_dragging());
}

#[test]
fn wrong_side_gesture_is_refused() {
    let mut robot = SwipeRobot::new(320.0, 44.0);
    right_short(&robot, ActionMode::Switch);

    // Only the right side is bound; a leftward fling is refused.
    robot.begin(-60.0);
    assert!(robot.events().is_empty());

    robot.begin(60.0);
    assert_eq!(robot.events(), vec![RobotEvent::Started, RobotEvent::Swiping(0.0)]);
    robot.release();
    robot.run_until_idle(2_000);
}
