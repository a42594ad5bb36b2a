//! Terminal console for call routing groups.
//!
//! Registers the section views, wires the route table and hands the root
//! component to the ipc-nexus application loop.

mod app;
mod cli;
mod pages;

use crate::app::Root;
use ipc_nexus::Application;

fn main() -> anyhow::Result<()> {
    let settings = cli::start()?;
    tracing::info!(path = %settings.path, anchor = %settings.anchor, "starting console");

    let app = Application::new();

    app.run(move |cx| Root::new(&settings, cx))
}
