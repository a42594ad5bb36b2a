//! Router module.
//!
//! Provides the ordered route table (`Router`), path patterns and navigation history.

pub mod history;
pub mod pattern;
pub mod table;

pub use history::History;
pub use pattern::{normalize, RouteMatch, RoutePattern};
pub use table::{Dispatch, Router};
