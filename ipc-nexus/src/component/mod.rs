//! Component module.
//!
//! Defines the `Component` trait, mountable `View`s and the props they are built from.

pub mod placeholder;
pub mod props;
pub mod traits;

pub use placeholder::placeholder;
pub use props::Props;
pub use traits::{Component, View};
