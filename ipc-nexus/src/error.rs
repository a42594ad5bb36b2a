use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Terminal error: {source}"))]
    TerminalError { source: std::io::Error },

    #[snafu(display("IO error: {source}"))]
    IoError { source: std::io::Error },

    #[snafu(display("Invalid route pattern '{pattern}': {reason}"))]
    InvalidPattern { pattern: String, reason: String },

    #[snafu(display("Unknown view: '{name}'"))]
    UnknownView { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
