//! Row decorator: reuse lifecycle plus optional default bindings.
//!
//! Whether reuse resets the interaction, and which bindings a fresh row
//! starts with, are plain constructor inputs instead of distinct row types.

use smallvec::SmallVec;

use swiperow_core::{ActionMode, Color, TriggerStates};

use crate::binding::{ActionBinding, CompletionFn, ViewHandle};
use crate::controller::SwipeInteractionController;

/// A binding applied at construction and re-applied after each reuse reset.
#[derive(Clone)]
pub struct DefaultBinding {
    pub states: TriggerStates,
    pub view: ViewHandle,
    pub color: Color,
    pub mode: ActionMode,
    pub on_complete: CompletionFn,
}

/// Decorates a controller with the host row's reuse cycle.
pub struct SwipeRow {
    controller: SwipeInteractionController,
    reset_on_reuse: bool,
    defaults: SmallVec<[DefaultBinding; 4]>,
}

impl SwipeRow {
    pub fn new(controller: SwipeInteractionController, reset_on_reuse: bool) -> Self {
        Self {
            controller,
            reset_on_reuse,
            defaults: SmallVec::new(),
        }
    }

    /// Attach default bindings; they are applied immediately.
    pub fn with_default_bindings(
        mut self,
        defaults: impl IntoIterator<Item = DefaultBinding>,
    ) -> Self {
        self.defaults.extend(defaults);
        self.apply_defaults();
        self
    }

    pub fn controller(&self) -> &SwipeInteractionController {
        &self.controller
    }

    /// Host hook for the row-reuse cycle. Resets the interaction and
    /// restores the default bindings when configured to; otherwise keeps
    /// the current bindings and state.
    pub fn prepare_for_reuse(&self) {
        if !self.reset_on_reuse {
            return;
        }
        self.controller.reset();
        self.apply_defaults();
    }

    fn apply_defaults(&self) {
        for default in &self.defaults {
            self.controller.bind_action(
                default.states,
                ActionBinding {
                    view: default.view,
                    color: default.color,
                    mode: default.mode,
                    on_complete: default.on_complete.clone(),
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::rc::Rc;

    use swiperow_animation::FrameDriver;
    use swiperow_core::{Point, Size, TriggerState};

    use crate::snapshot::{ImageHandle, RowSnapshot, RowSnapshotProvider};

    struct StubProvider;

    impl RowSnapshotProvider for StubProvider {
        fn snapshot(&mut self) -> RowSnapshot {
            RowSnapshot {
                image: ImageHandle(1),
                bounds: Size::new(320.0, 44.0),
            }
        }
    }

    fn default_binding() -> DefaultBinding {
        DefaultBinding {
            states: TriggerStates::only(TriggerState::RightShort),
            view: ViewHandle(5),
            color: Color::rgb(0.2, 0.4, 0.9),
            mode: ActionMode::Switch,
            on_complete: Rc::new(|_, _| {}),
        }
    }

    fn row(reset_on_reuse: bool) -> SwipeRow {
        let controller = SwipeInteractionController::new(
            Rc::new(RefCell::new(StubProvider)),
            Rc::new(RefCell::new(FrameDriver::new())),
        );
        SwipeRow::new(controller, reset_on_reuse)
            .with_default_bindings([default_binding()])
    }

    #[test]
    fn defaults_are_bound_at_construction() {
        let row = row(true);
        assert!(row.controller().should_begin(Point::new(10.0, 0.0)));
    }

    #[test]
    fn reuse_restores_default_bindings() {
        let row = row(true);
        // Host overrides the binding during the row's lifetime.
        row.controller().bind(
            TriggerStates::only(TriggerState::LeftShort),
            ViewHandle(6),
            Color::rgb(1.0, 0.0, 0.0),
            ActionMode::Exit,
            |_, _| {},
        );
        assert!(row.controller().should_begin(Point::new(-10.0, 0.0)));

        row.prepare_for_reuse();
        // Override is gone; the defaults are back.
        assert!(!row.controller().should_begin(Point::new(-10.0, 0.0)));
        assert!(row.controller().should_begin(Point::new(10.0, 0.0)));
    }

    #[test]
    fn reuse_keeps_state_when_not_configured_to_reset() {
        let row = row(false);
        row.controller().bind(
            TriggerStates::only(TriggerState::LeftShort),
            ViewHandle(6),
            Color::rgb(1.0, 0.0, 0.0),
            ActionMode::Exit,
            |_, _| {},
        );
        row.prepare_for_reuse();
        assert!(row.controller().should_begin(Point::new(-10.0, 0.0)));
    }
}
