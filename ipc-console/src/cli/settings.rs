use std::path::PathBuf;

/// Startup configuration resolved from the command line and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// The currently active path when the router starts.
    pub path: String,
    /// Dispatch `path` as soon as the router starts.
    pub mount_initial: bool,
    /// Anchor every route mounts into.
    pub anchor: String,
    pub log_file: PathBuf,
    pub verbosity: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            mount_initial: true,
            anchor: "app".to_string(),
            log_file: PathBuf::from("ipc-console.log"),
            verbosity: 0,
        }
    }
}
