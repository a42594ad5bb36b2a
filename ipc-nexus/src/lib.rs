pub mod application;
pub mod component;
pub mod error;
pub mod mount;
pub mod registry;
pub mod router;
pub mod shell;

pub use error::{Error, Result};

// Re-export common types for convenience
pub use application::{Application, AppContext, Context, EventContext, Navigation};
pub use component::{Component, Props, View, traits::{Event, Action}};
pub use mount::{MountRequest, MountTarget, Outlet};
pub use registry::{Registry, ViewKind};
pub use router::{Dispatch, History, RouteMatch, RoutePattern, Router};
pub use shell::Shell;
