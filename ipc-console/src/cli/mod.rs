pub mod commands;
pub mod dispatch;
pub mod settings;
pub mod start;

pub use settings::Settings;
pub use start::start;
