//! Ownership - Controlled vs Uncontrolled View State
//!
//! Decided once when a table is built. An uncontrolled table adopts every
//! state it computes. A controlled table only proposes the next state to
//! its host and adopts what the host hands back through `set_state`.

use super::view_state::ViewState;

/// Change callback of a controlled table
pub type StateChangeFn = Box<dyn FnMut(&ViewState) + Send>;

/// Who owns a table's ViewState
#[derive(Default)]
pub enum Ownership {
    /// The table owns its state
    #[default]
    Uncontrolled,
    /// The host owns the state and is told about every proposed change
    Controlled { on_change: StateChangeFn },
}

impl Ownership {
    /// Host-owned state with a change callback
    pub fn controlled(on_change: impl FnMut(&ViewState) + Send + 'static) -> Self {
        Ownership::Controlled {
            on_change: Box::new(on_change),
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, Ownership::Controlled { .. })
    }

    /// Tell a controlled host about a proposed state. No-op when uncontrolled.
    pub(crate) fn propose(&mut self, state: &ViewState) {
        if let Ownership::Controlled { on_change } = self {
            on_change(state);
        }
    }
}

impl std::fmt::Debug for Ownership {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ownership::Uncontrolled => f.write_str("Uncontrolled"),
            Ownership::Controlled { .. } => f.write_str("Controlled"),
        }
    }
}
