//! The drag-phase state machine.
//!
//! Idle → Dragging → (Settling | Exiting) → Idle / Exited. Drag phases come
//! in through [`SwipeInteractionController::drag_event`]; the controller
//! accumulates the offset, keeps the [`SwipeVisuals`] model current, and at
//! release resolves the trigger state and hands the settle or exit motion to
//! the animation driver. Exactly one bound completion fires per accepted
//! gesture.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, trace};

use swiperow_animation::driver::{CompleteFn, UpdateFn};
use swiperow_animation::{AnimationDriver, MotionSpec, SpringSpec, TweenSpec};
use swiperow_core::{
    percent, ActionMode, Color, Point, Size, SwipeConfig, SwipeDirection, TriggerState,
    TriggerStates,
};

use crate::binding::{ActionBinding, BindingStore, ViewHandle};
use crate::snapshot::RowSnapshotProvider;
use crate::visuals::SwipeVisuals;

/// Gesture phase reported by the host's drag recognition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Begin,
    Change,
    End,
    Cancel,
}

/// Host hooks fired synchronously during state transitions. All default to
/// no-ops; implement only what you need.
pub trait SwipeListener {
    fn swipe_started(&self) {}
    fn swipe_ended(&self) {}
    fn swiping(&self, _percentage: f32) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InteractionPhase {
    Idle,
    Dragging,
    Settling,
    Exiting,
    /// Exit animation committed; inert until [`SwipeInteractionController::reset`].
    Exited,
}

/// Ephemeral state of one drag-to-release interaction.
#[derive(Debug)]
struct Session {
    offset: f32,
    percentage: f32,
    direction: SwipeDirection,
    active_view: Option<ViewHandle>,
}

impl Session {
    fn new() -> Self {
        Self {
            offset: 0.0,
            percentage: 0.0,
            direction: SwipeDirection::Center,
            active_view: None,
        }
    }
}

struct Inner {
    config: Rc<RefCell<SwipeConfig>>,
    bindings: BindingStore,
    provider: Rc<RefCell<dyn RowSnapshotProvider>>,
    driver: Rc<RefCell<dyn AnimationDriver>>,
    listener: Option<Rc<dyn SwipeListener>>,
    phase: InteractionPhase,
    session: Option<Session>,
    visuals: Option<SwipeVisuals>,
    bounds: Size,
}

impl Inner {
    /// Pre-begin admission gate: horizontal velocity must dominate and the
    /// implied side must have a live binding.
    fn gate(&self, velocity: Point) -> bool {
        if !self.config.borrow().drag_enabled {
            return false;
        }
        if self.phase != InteractionPhase::Idle {
            trace!("swipe gate: ignored, interaction busy ({:?})", self.phase);
            return false;
        }
        if velocity.x.abs() <= velocity.y.abs() {
            return false;
        }
        self.bindings.side_configured(velocity.x < 0.0)
    }

    /// Lazily materialize the drag visuals on the first drag movement.
    fn ensure_visuals(&mut self) {
        if self.visuals.is_some() {
            return;
        }
        let snapshot = self.provider.borrow_mut().snapshot();
        self.bounds = snapshot.bounds;
        let default_color = self.config.borrow().default_color;
        self.visuals = Some(SwipeVisuals {
            snapshot: snapshot.image,
            snapshot_offset: 0.0,
            indicator_color: default_color,
            sliding_view: None,
            sliding_alpha: 0.0,
            sliding_center: None,
        });
        trace!(
            "swipe visuals installed, bounds {}x{}",
            self.bounds.width,
            self.bounds.height
        );
    }

    /// Re-derive color, view, alpha, and positions from the live offset.
    fn refresh_drag_visuals(&mut self) {
        let (short, long, default_color) = {
            let config = self.config.borrow();
            (
                config.short_trigger,
                config.long_trigger,
                config.default_color,
            )
        };
        let width = self.bounds.width;
        let height = self.bounds.height;

        let (p, offset, direction) = match self.session.as_ref() {
            Some(session) => (session.percentage, session.offset, session.direction),
            None => return,
        };

        let configured = self.bindings.configured();
        let view = self
            .bindings
            .get(percent::active_state(p, long, configured))
            .map(|binding| binding.view);
        let color = self
            .bindings
            .get(percent::indicator_state(p, short, long, configured))
            .map(|binding| binding.color)
            .unwrap_or(default_color);

        let Some(visuals) = self.visuals.as_mut() else {
            return;
        };
        visuals.snapshot_offset = offset;
        visuals.indicator_color = color;
        if let Some(view) = view {
            visuals.sliding_view = Some(view);
            visuals.sliding_alpha = percent::alpha(p, short);
            visuals.sliding_center = percent::sliding_position(p, true, direction, width, short)
                .map(|x| Point::new(x, height / 2.0));
        }
        // With no view applying, the previous sliding state stays untouched.
    }
}

/// Owns the swipe-to-reveal interaction for one row.
#[derive(Clone)]
pub struct SwipeInteractionController {
    inner: Rc<RefCell<Inner>>,
}

impl SwipeInteractionController {
    pub fn new(
        provider: Rc<RefCell<dyn RowSnapshotProvider>>,
        driver: Rc<RefCell<dyn AnimationDriver>>,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                config: Rc::new(RefCell::new(SwipeConfig::default())),
                bindings: BindingStore::default(),
                provider,
                driver,
                listener: None,
                phase: InteractionPhase::Idle,
                session: None,
                visuals: None,
                bounds: Size::ZERO,
            })),
        }
    }

    /// Shared settings; mutable by the host at any time and re-read by the
    /// controller at every computation.
    pub fn config(&self) -> Rc<RefCell<SwipeConfig>> {
        self.inner.borrow().config.clone()
    }

    pub fn set_listener(&self, listener: Rc<dyn SwipeListener>) {
        self.inner.borrow_mut().listener = Some(listener);
    }

    /// Bind a view/color/mode/callback tuple to every state in `states`.
    ///
    /// A null `view` makes the call a silent no-op.
    pub fn bind(
        &self,
        states: TriggerStates,
        view: ViewHandle,
        color: Color,
        mode: ActionMode,
        on_complete: impl Fn(TriggerState, ActionMode) + 'static,
    ) {
        self.bind_action(
            states,
            ActionBinding {
                view,
                color,
                mode,
                on_complete: Rc::new(on_complete),
            },
        );
    }

    /// [`bind`](Self::bind) with a pre-built binding; used when one callback
    /// instance is shared across calls.
    pub fn bind_action(&self, states: TriggerStates, binding: ActionBinding) {
        self.inner.borrow_mut().bindings.bind(states, binding);
    }

    /// Row-reuse hook: drop drag visuals, clear bindings and session state,
    /// restore default configuration. Idempotent.
    ///
    /// Safe to call from a completion callback; the driver has already
    /// detached the finished animation by then, so there is nothing left
    /// to cancel.
    pub fn reset(&self) {
        let driver = {
            let mut inner = self.inner.borrow_mut();
            inner.bindings.clear();
            inner.session = None;
            inner.visuals = None;
            inner.phase = InteractionPhase::Idle;
            inner.bounds = Size::ZERO;
            *inner.config.borrow_mut() = SwipeConfig::default();
            inner.driver.clone()
        };
        // The driver is unborrowable exactly when it is mid-frame invoking
        // a callback, and the animation firing that callback is already
        // detached from it.
        if let Ok(mut driver) = driver.try_borrow_mut() {
            driver.cancel();
        };
    }

    /// The admission gate, exposed for hosts with recognizer-style
    /// `should_begin` hooks. [`drag_event`](Self::drag_event) applies it on
    /// `Begin` regardless.
    pub fn should_begin(&self, velocity: Point) -> bool {
        self.inner.borrow().gate(velocity)
    }

    /// Feed one drag phase. `translation` is the incremental delta since the
    /// previous event; `velocity` is the pointer velocity at this event.
    pub fn drag_event(&self, phase: DragPhase, translation: Point, velocity: Point) {
        match phase {
            DragPhase::Begin => self.on_begin(translation, velocity),
            DragPhase::Change => self.on_change(translation),
            DragPhase::End | DragPhase::Cancel => self.on_release(velocity),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.borrow().phase == InteractionPhase::Dragging
    }

    pub fn is_exited(&self) -> bool {
        self.inner.borrow().phase == InteractionPhase::Exited
    }

    /// Current drag percentage, 0 outside an interaction.
    pub fn current_percentage(&self) -> f32 {
        self.inner
            .borrow()
            .session
            .as_ref()
            .map(|session| session.percentage)
            .unwrap_or(0.0)
    }

    /// Current render model, present while drag visuals are installed.
    pub fn visuals(&self) -> Option<SwipeVisuals> {
        self.inner.borrow().visuals.clone()
    }

    /// The binding view resolved at release time, until the session ends.
    pub fn active_view(&self) -> Option<ViewHandle> {
        self.inner
            .borrow()
            .session
            .as_ref()
            .and_then(|session| session.active_view)
    }

    fn on_begin(&self, translation: Point, velocity: Point) {
        let listener = {
            let mut inner = self.inner.borrow_mut();
            if !inner.gate(velocity) {
                return;
            }
            inner.phase = InteractionPhase::Dragging;
            inner.session = Some(Session::new());
            debug!("swipe started, velocity ({}, {})", velocity.x, velocity.y);
            inner.listener.clone()
        };
        if let Some(listener) = listener {
            listener.swipe_started();
        }
        self.on_change(translation);
    }

    fn on_change(&self, translation: Point) {
        let notify = {
            let mut inner = self.inner.borrow_mut();
            if inner.phase != InteractionPhase::Dragging {
                return;
            }
            if !inner.config.borrow().drag_enabled {
                return;
            }
            inner.ensure_visuals();

            let width = inner.bounds.width;
            let Some(session) = inner.session.as_mut() else {
                return;
            };
            session.offset = percent::clamp_offset(session.offset + translation.x, width);
            session.percentage = percent::percentage(session.offset, width);
            session.direction = percent::direction(session.percentage);
            let percentage = session.percentage;

            inner.refresh_drag_visuals();
            inner.listener.clone().map(|listener| (listener, percentage))
        };
        if let Some((listener, percentage)) = notify {
            listener.swiping(percentage);
        }
    }

    fn on_release(&self, velocity: Point) {
        let (driver, spec, update, complete, listener) = {
            let mut inner = self.inner.borrow_mut();
            if inner.phase != InteractionPhase::Dragging {
                return;
            }

            let (short, long, default_color, damping, spring_velocity, snap_duration) = {
                let config = inner.config.borrow();
                (
                    config.short_trigger,
                    config.long_trigger,
                    config.default_color,
                    config.damping,
                    config.velocity,
                    config.snap_duration,
                )
            };
            let width = inner.bounds.width;
            let height = inner.bounds.height;

            let (percentage, direction, start_offset) = match inner.session.as_ref() {
                Some(session) => (session.percentage, session.direction, session.offset),
                None => return,
            };

            let configured = inner.bindings.configured();
            let state = percent::trigger_state(percentage, short, long, configured);
            let mode = inner.bindings.mode_for(state);
            let on_complete = inner
                .bindings
                .get(state)
                .map(|binding| binding.on_complete.clone());
            let active_view = inner
                .bindings
                .get(percent::active_state(percentage, long, configured))
                .map(|binding| binding.view);
            if let Some(session) = inner.session.as_mut() {
                session.active_view = active_view;
            }

            let start_alpha = inner
                .visuals
                .as_ref()
                .map(|visuals| visuals.sliding_alpha)
                .unwrap_or(0.0);
            let weak = Rc::downgrade(&self.inner);

            let (spec, update, complete): (MotionSpec, UpdateFn, CompleteFn) =
                if mode == ActionMode::Exit && direction != SwipeDirection::Center {
                    inner.phase = InteractionPhase::Exiting;
                    let duration = percent::animation_duration(velocity.x, width);
                    debug!(
                        "swipe release: exit {:?} as {:?} over {:.3}s",
                        direction, state, duration
                    );

                    // Indicator color is frozen at the state captured at
                    // release for the whole exit animation.
                    let frozen = inner
                        .bindings
                        .get(percent::indicator_state(percentage, short, long, configured))
                        .map(|binding| binding.color)
                        .unwrap_or(default_color);
                    if let Some(visuals) = inner.visuals.as_mut() {
                        visuals.indicator_color = frozen;
                        if active_view.is_some() {
                            visuals.sliding_view = active_view;
                        }
                    }

                    let target = match direction {
                        SwipeDirection::Left => -width,
                        _ => width,
                    };
                    let update: UpdateFn = {
                        let weak = weak.clone();
                        Box::new(move |progress| {
                            let Some(inner) = weak.upgrade() else {
                                return;
                            };
                            let mut inner = inner.borrow_mut();
                            let (animate_icons, short) = {
                                let config = inner.config.borrow();
                                (config.animate_icons, config.short_trigger)
                            };
                            let offset = start_offset + (target - start_offset) * progress;
                            let now = percent::percentage(offset, width);
                            let Some(visuals) = inner.visuals.as_mut() else {
                                return;
                            };
                            visuals.snapshot_offset = offset;
                            visuals.sliding_alpha = (start_alpha * (1.0 - progress)).max(0.0);
                            visuals.sliding_center =
                                percent::sliding_position(now, animate_icons, direction, width, short)
                                    .map(|x| Point::new(x, height / 2.0));
                        })
                    };
                    let complete: CompleteFn = Box::new(move || {
                        if let Some(inner) = weak.upgrade() {
                            inner.borrow_mut().phase = InteractionPhase::Exited;
                        }
                        if let Some(on_complete) = on_complete {
                            on_complete(state, mode);
                        }
                    });
                    (
                        MotionSpec::Tween(TweenSpec::ease_out(duration)),
                        update,
                        complete,
                    )
                } else {
                    inner.phase = InteractionPhase::Settling;
                    debug!("swipe release: settle from {:?} ({:?})", state, mode);

                    if let Some(visuals) = inner.visuals.as_mut() {
                        visuals.indicator_color = default_color;
                        visuals.sliding_center =
                            percent::sliding_position(0.0, false, direction, width, short)
                                .map(|x| Point::new(x, height / 2.0));
                    }

                    let update: UpdateFn = {
                        let weak = weak.clone();
                        Box::new(move |progress| {
                            let Some(inner) = weak.upgrade() else {
                                return;
                            };
                            let mut inner = inner.borrow_mut();
                            let Some(visuals) = inner.visuals.as_mut() else {
                                return;
                            };
                            visuals.snapshot_offset = start_offset * (1.0 - progress);
                            visuals.sliding_alpha =
                                (start_alpha * (1.0 - progress)).clamp(0.0, 1.0);
                        })
                    };
                    let complete: CompleteFn = Box::new(move || {
                        if let Some(inner) = weak.upgrade() {
                            let mut inner = inner.borrow_mut();
                            inner.visuals = None;
                            inner.session = None;
                            inner.phase = InteractionPhase::Idle;
                        }
                        if let Some(on_complete) = on_complete {
                            on_complete(state, mode);
                        }
                    });
                    (
                        MotionSpec::Spring(SpringSpec::new(
                            damping,
                            spring_velocity,
                            snap_duration,
                        )),
                        update,
                        complete,
                    )
                };

            (
                inner.driver.clone(),
                spec,
                update,
                complete,
                inner.listener.clone(),
            )
        };

        if let Some(listener) = listener {
            listener.swipe_ended();
        }
        driver.borrow_mut().animate(spec, update, complete);
    }
}
