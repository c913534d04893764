//! State - Table View State
//!
//! The view state value, the pure reducer that evolves it, and the
//! controlled/uncontrolled ownership choice.

pub mod ownership;
pub mod reducer;
pub mod view_state;

pub use ownership::{Ownership, StateChangeFn};
pub use reducer::{Interaction, TableEvent, clamp_page, reduce};
pub use view_state::ViewState;
