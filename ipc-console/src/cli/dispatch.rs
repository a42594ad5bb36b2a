use crate::cli::Settings;
use anyhow::Result;
use std::path::PathBuf;

pub fn handler(matches: &clap::ArgMatches) -> Result<Settings> {
    Ok(Settings {
        path: matches
            .get_one::<String>("path")
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("missing argument: --path"))?,
        mount_initial: !matches.get_flag("no-initial-mount"),
        anchor: matches
            .get_one::<String>("anchor")
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("missing argument: --anchor"))?,
        log_file: matches
            .get_one::<PathBuf>("log-file")
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("missing argument: --log-file"))?,
        verbosity: matches.get_one::<u8>("verbosity").map_or(0, |&v| v),
    })
}
