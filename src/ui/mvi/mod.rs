//! Model-View-Intent primitives for the dialog and picker state machines.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers are pure. Anything with a side effect (committing to the
//! settings store, re-rendering the trigger button) lives in [`crate::ui::app::App`].

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
