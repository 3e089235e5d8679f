//! Robot-style harness driving a controller with synthetic gestures.

use std::cell::RefCell;
use std::rc::Rc;

use swiperow::{
    ActionMode, Color, DragPhase, ImageHandle, Point, RowSnapshot, RowSnapshotProvider, Size,
    SwipeInteractionController, SwipeListener, TriggerState, TriggerStates, ViewHandle,
};
use swiperow_animation::{AnimationDriver, FrameDriver};

/// ~60fps frame period in nanoseconds.
pub const FRAME_NANOS: u64 = 16_000_000;

/// Listener notifications in the order they fired.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RobotEvent {
    Started,
    Ended,
    Swiping(f32),
}

struct RecordingListener {
    events: Rc<RefCell<Vec<RobotEvent>>>,
}

impl SwipeListener for RecordingListener {
    fn swipe_started(&self) {
        self.events.borrow_mut().push(RobotEvent::Started);
    }

    fn swipe_ended(&self) {
        self.events.borrow_mut().push(RobotEvent::Ended);
    }

    fn swiping(&self, percentage: f32) {
        self.events.borrow_mut().push(RobotEvent::Swiping(percentage));
    }
}

/// Snapshot provider stub that counts how often it is asked to render.
pub struct CountingSnapshotProvider {
    bounds: Size,
    snapshots: u32,
}

impl CountingSnapshotProvider {
    pub fn new(bounds: Size) -> Self {
        Self {
            bounds,
            snapshots: 0,
        }
    }

    pub fn snapshot_count(&self) -> u32 {
        self.snapshots
    }
}

impl RowSnapshotProvider for CountingSnapshotProvider {
    fn snapshot(&mut self) -> RowSnapshot {
        self.snapshots += 1;
        RowSnapshot {
            image: ImageHandle(1),
            bounds: self.bounds,
        }
    }
}

/// Drives one controller with scripted gestures and a manual frame clock.
pub struct SwipeRobot {
    controller: SwipeInteractionController,
    driver: Rc<RefCell<FrameDriver>>,
    provider: Rc<RefCell<CountingSnapshotProvider>>,
    events: Rc<RefCell<Vec<RobotEvent>>>,
    completions: Rc<RefCell<Vec<(TriggerState, ActionMode)>>>,
    clock_nanos: u64,
    width: f32,
}

impl SwipeRobot {
    pub fn new(width: f32, height: f32) -> Self {
        let driver = Rc::new(RefCell::new(FrameDriver::new()));
        let provider = Rc::new(RefCell::new(CountingSnapshotProvider::new(Size::new(
            width, height,
        ))));
        let controller = SwipeInteractionController::new(provider.clone(), driver.clone());

        let events = Rc::new(RefCell::new(Vec::new()));
        controller.set_listener(Rc::new(RecordingListener {
            events: Rc::clone(&events),
        }));

        Self {
            controller,
            driver,
            provider,
            events,
            completions: Rc::new(RefCell::new(Vec::new())),
            clock_nanos: 0,
            width,
        }
    }

    pub fn controller(&self) -> &SwipeInteractionController {
        &self.controller
    }

    pub fn row_width(&self) -> f32 {
        self.width
    }

    /// A completion callback that appends into [`completions`](Self::completions).
    pub fn completion_recorder(&self) -> impl Fn(TriggerState, ActionMode) + 'static {
        let completions = Rc::clone(&self.completions);
        move |state, mode| completions.borrow_mut().push((state, mode))
    }

    /// Bind with the recording completion callback.
    pub fn bind_recording(
        &self,
        states: TriggerStates,
        view: ViewHandle,
        color: Color,
        mode: ActionMode,
    ) {
        self.controller
            .bind(states, view, color, mode, self.completion_recorder());
    }

    // --- gesture script ---

    /// Begin a drag whose initial velocity implies the given direction.
    pub fn begin(&mut self, velocity_x: f32) {
        self.begin_with_velocity(velocity_x, 0.0);
    }

    pub fn begin_with_velocity(&mut self, velocity_x: f32, velocity_y: f32) {
        self.controller.drag_event(
            DragPhase::Begin,
            Point::ZERO,
            Point::new(velocity_x, velocity_y),
        );
    }

    /// Move the drag by an incremental horizontal delta.
    pub fn drag_by(&mut self, dx: f32) {
        self.controller
            .drag_event(DragPhase::Change, Point::new(dx, 0.0), Point::ZERO);
    }

    /// Drag so the accumulated offset reaches `fraction` of the row width.
    pub fn drag_to_fraction(&mut self, fraction: f32) {
        let target = fraction * self.width;
        let current = self
            .controller
            .visuals()
            .map(|visuals| visuals.snapshot_offset)
            .unwrap_or(0.0);
        self.drag_by(target - current);
    }

    pub fn release(&mut self) {
        self.release_with_velocity(0.0);
    }

    pub fn release_with_velocity(&mut self, velocity_x: f32) {
        self.controller
            .drag_event(DragPhase::End, Point::ZERO, Point::new(velocity_x, 0.0));
    }

    pub fn cancel(&mut self) {
        self.controller
            .drag_event(DragPhase::Cancel, Point::ZERO, Point::ZERO);
    }

    // --- clock ---

    /// Step the frame clock by `frames` 16ms frames.
    pub fn advance_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.clock_nanos += FRAME_NANOS;
            self.driver.borrow_mut().on_frame(self.clock_nanos);
        }
    }

    /// Run frames until no animation is in flight; panics after `limit`.
    pub fn run_until_idle(&mut self, limit: usize) {
        for _ in 0..limit {
            if !self.driver.borrow().is_animating() {
                return;
            }
            self.advance_frames(1);
        }
        panic!("animation still running after {limit} frames");
    }

    // --- assertions ---

    pub fn events(&self) -> Vec<RobotEvent> {
        self.events.borrow().clone()
    }

    pub fn completions(&self) -> Vec<(TriggerState, ActionMode)> {
        self.completions.borrow().clone()
    }

    pub fn snapshot_count(&self) -> u32 {
        self.provider.borrow().snapshot_count()
    }

    pub fn is_animating(&self) -> bool {
        self.driver.borrow().is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn robot_records_a_simple_switch_gesture() {
        let mut robot = SwipeRobot::new(320.0, 44.0);
        robot.bind_recording(
            TriggerStates::only(TriggerState::RightShort),
            ViewHandle(1),
            Color::rgb(0.0, 1.0, 0.0),
            ActionMode::Switch,
        );

        robot.begin(50.0);
        robot.drag_to_fraction(0.5);
        robot.release();
        robot.run_until_idle(1_000);

        assert_eq!(
            robot.completions(),
            vec![(TriggerState::RightShort, ActionMode::Switch)]
        );
        assert_eq!(robot.snapshot_count(), 1);
        assert!(!robot.is_animating());
    }
}
