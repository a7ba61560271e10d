//! Reducer-based state containers
//!
//! Browsing results and theme selection are held in plain state structs
//! updated by pure reducers, `(State, Action) -> State`. The effectful
//! layer lives in [`store`]: async loaders that talk to a `CatalogSource`
//! and hand back the action describing the outcome.

pub mod movies;
pub mod store;
pub mod theme;

pub use movies::{reduce, MovieAction, MovieCollection, MovieState};
pub use store::MovieStore;
pub use theme::{ThemeAction, ThemeState};
