//! Application module
//!
//! Contains the core application architecture:
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: Pure function (State, Action) -> State

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::{Action, FetchRequest, Screen};
pub use reducer::reduce;
pub use state::{AppState, BookingState, HomeState, SearchState, UiConfig};
