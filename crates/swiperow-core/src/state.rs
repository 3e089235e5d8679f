//! Trigger states, action modes, and drag direction.

/// One of the four swipe trigger zones, or none.
///
/// `RightShort`/`RightLong` are reached by dragging the row content to the
/// right, `LeftShort`/`LeftLong` by dragging it to the left. A long state
/// implies the short threshold on the same side was crossed first.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriggerState {
    None = 0,
    RightShort = 1 << 0,
    RightLong = 1 << 1,
    LeftShort = 1 << 2,
    LeftLong = 1 << 3,
}

impl TriggerState {
    /// The four bindable states, in resolution order.
    pub const BINDABLE: [TriggerState; 4] = [
        TriggerState::RightShort,
        TriggerState::RightLong,
        TriggerState::LeftShort,
        TriggerState::LeftLong,
    ];
}

/// Set of trigger states packed into a byte.
///
/// Lets one `bind` call target several states at once, e.g.
/// `TriggerStates::new().with(RightShort).with(RightLong)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerStates(u8);

impl TriggerStates {
    pub const NONE: Self = Self(0);

    pub fn new() -> Self {
        Self::NONE
    }

    pub fn only(state: TriggerState) -> Self {
        Self::new().with(state)
    }

    pub fn with(mut self, state: TriggerState) -> Self {
        self.insert(state);
        self
    }

    pub fn insert(&mut self, state: TriggerState) {
        self.0 |= state as u8;
    }

    pub fn remove(&mut self, state: TriggerState) {
        self.0 &= !(state as u8);
    }

    pub fn contains(&self, state: TriggerState) -> bool {
        state != TriggerState::None && (self.0 & state as u8) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate the member states in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = TriggerState> + '_ {
        TriggerState::BINDABLE
            .into_iter()
            .filter(move |s| self.contains(*s))
    }
}

impl Default for TriggerStates {
    fn default() -> Self {
        Self::NONE
    }
}

/// What happens to the row once a bound state resolves at release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActionMode {
    /// Binding is inert; it never resolves and never fires.
    #[default]
    None,
    /// Row animates fully off-screen and is considered dismissed.
    Exit,
    /// Row snaps back to its resting position after notifying.
    Switch,
}

/// Horizontal direction of the current drag offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Center,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_insert_remove_contains() {
        let mut set = TriggerStates::new();
        assert!(set.is_empty());

        set.insert(TriggerState::RightShort);
        set.insert(TriggerState::LeftLong);
        assert!(set.contains(TriggerState::RightShort));
        assert!(set.contains(TriggerState::LeftLong));
        assert!(!set.contains(TriggerState::RightLong));

        set.remove(TriggerState::RightShort);
        assert!(!set.contains(TriggerState::RightShort));
        assert!(set.contains(TriggerState::LeftLong));
    }

    #[test]
    fn none_is_never_a_member() {
        let set = TriggerStates::only(TriggerState::RightShort);
        assert!(!set.contains(TriggerState::None));
    }

    #[test]
    fn iter_yields_resolution_order() {
        let set = TriggerStates::new()
            .with(TriggerState::LeftShort)
            .with(TriggerState::RightShort);
        let members: Vec<_> = set.iter().collect();
        assert_eq!(
            members,
            vec![TriggerState::RightShort, TriggerState::LeftShort]
        );
    }
}
