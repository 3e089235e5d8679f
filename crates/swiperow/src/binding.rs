//! Action bindings: the (view, color, mode, callback) tuple per trigger
//! state.

use std::rc::Rc;

use swiperow_core::{ActionMode, Color, TriggerState, TriggerStates};

/// Opaque handle to a host-owned icon/label visual.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ViewHandle(pub u64);

impl ViewHandle {
    /// The absent view; binding against it is a silent no-op.
    pub const NULL: ViewHandle = ViewHandle(0);

    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }
}

/// Callback invoked exactly once per resolved gesture.
pub type CompletionFn = Rc<dyn Fn(TriggerState, ActionMode)>;

/// Everything attached to one trigger state.
#[derive(Clone)]
pub struct ActionBinding {
    pub view: ViewHandle,
    pub color: Color,
    pub mode: ActionMode,
    pub on_complete: CompletionFn,
}

impl std::fmt::Debug for ActionBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionBinding")
            .field("view", &self.view)
            .field("color", &self.color)
            .field("mode", &self.mode)
            .finish()
    }
}

/// Four independent binding slots, one per bindable trigger state.
#[derive(Debug, Default)]
pub(crate) struct BindingStore {
    right_short: Option<ActionBinding>,
    right_long: Option<ActionBinding>,
    left_short: Option<ActionBinding>,
    left_long: Option<ActionBinding>,
}

impl BindingStore {
    /// Store `binding` for every state in `states`, overwriting slots.
    ///
    /// A null view handle rejects the whole call silently.
    pub fn bind(&mut self, states: TriggerStates, binding: ActionBinding) {
        if binding.view.is_null() {
            return;
        }
        for state in states.iter() {
            *self.slot_mut(state) = Some(binding.clone());
        }
    }

    pub fn get(&self, state: TriggerState) -> Option<&ActionBinding> {
        match state {
            TriggerState::RightShort => self.right_short.as_ref(),
            TriggerState::RightLong => self.right_long.as_ref(),
            TriggerState::LeftShort => self.left_short.as_ref(),
            TriggerState::LeftLong => self.left_long.as_ref(),
            TriggerState::None => None,
        }
    }

    fn slot_mut(&mut self, state: TriggerState) -> &mut Option<ActionBinding> {
        match state {
            TriggerState::RightShort => &mut self.right_short,
            TriggerState::RightLong => &mut self.right_long,
            TriggerState::LeftShort => &mut self.left_short,
            TriggerState::LeftLong => &mut self.left_long,
            TriggerState::None => unreachable!("None is not bindable"),
        }
    }

    /// States that can resolve: bound and not mode `None`.
    pub fn configured(&self) -> TriggerStates {
        let mut states = TriggerStates::new();
        for state in TriggerState::BINDABLE {
            if let Some(binding) = self.get(state) {
                if binding.mode != ActionMode::None {
                    states.insert(state);
                }
            }
        }
        states
    }

    /// Whether any state on the given side can resolve.
    pub fn side_configured(&self, left: bool) -> bool {
        let configured = self.configured();
        if left {
            configured.contains(TriggerState::LeftShort)
                || configured.contains(TriggerState::LeftLong)
        } else {
            configured.contains(TriggerState::RightShort)
                || configured.contains(TriggerState::RightLong)
        }
    }

    pub fn mode_for(&self, state: TriggerState) -> ActionMode {
        self.get(state).map(|b| b.mode).unwrap_or(ActionMode::None)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
