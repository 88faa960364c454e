//! Model-View-Intent (MVI) primitives.
//!
//! All mutable screen state flows through this layer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! The composition root owns the state; widgets receive read-only snapshots
//! and never mutate anything themselves. The only way state changes is an
//! intent going through a reducer.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
