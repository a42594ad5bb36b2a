use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ArgAction, ColorChoice, Command,
};

/// Accepts `info`, `debug`, `trace` (any case) or the matching count 0..=2.
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            if parsed <= 2 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "info" => Ok(0),
            "debug" => Ok(1),
            "trace" => Ok(2),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("ipc-console")
        .about("Terminal console for call routing groups")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("path")
                .long("path")
                .help("Path that is active at startup, e.g. /usage or #/group/42")
                .default_value("/")
                .env("IPC_CONSOLE_PATH"),
        )
        .arg(
            Arg::new("no-initial-mount")
                .long("no-initial-mount")
                .help("Start the router without mounting the startup path")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("anchor")
                .long("anchor")
                .help("Name of the region views are mounted into")
                .default_value("app")
                .env("IPC_CONSOLE_ANCHOR"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("File diagnostics are written to")
                .default_value("ipc-console.log")
                .env("IPC_CONSOLE_LOG_FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: INFO, DEBUG, TRACE (default: INFO)")
                .env("IPC_CONSOLE_LOG_LEVEL")
                .global(true)
                .action(ArgAction::Count)
                .value_parser(validator_log_level()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "ipc-console");
        assert_eq!(
            command.get_about().unwrap().to_string(),
            "Terminal console for call routing groups"
        );
        assert_eq!(
            command.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    const ENV_VARS: [(&str, Option<&str>); 4] = [
        ("IPC_CONSOLE_PATH", None),
        ("IPC_CONSOLE_ANCHOR", None),
        ("IPC_CONSOLE_LOG_FILE", None),
        ("IPC_CONSOLE_LOG_LEVEL", None),
    ];

    #[test]
    fn test_defaults() {
        temp_env::with_vars(ENV_VARS, || {
            let matches = new().get_matches_from(vec!["ipc-console"]);

            assert_eq!(matches.get_one::<String>("path").map(String::as_str), Some("/"));
            assert_eq!(matches.get_one::<String>("anchor").map(String::as_str), Some("app"));
            assert!(!matches.get_flag("no-initial-mount"));
            assert_eq!(matches.get_one::<u8>("verbosity").copied(), Some(0));
        });
    }

    #[test]
    fn test_check_path_and_flags() {
        temp_env::with_vars(ENV_VARS, || {
            let matches = new().get_matches_from(vec![
                "ipc-console",
                "--path",
                "/usage",
                "--no-initial-mount",
                "-vv",
            ]);

            assert_eq!(matches.get_one::<String>("path").map(String::as_str), Some("/usage"));
            assert!(matches.get_flag("no-initial-mount"));
            assert_eq!(matches.get_one::<u8>("verbosity").copied(), Some(2));
        });
    }

    #[test]
    fn test_check_path_env() {
        temp_env::with_vars(
            [
                ("IPC_CONSOLE_PATH", Some("#/group/42")),
                ("IPC_CONSOLE_ANCHOR", Some("main")),
            ],
            || {
                let matches = new().get_matches_from(vec!["ipc-console"]);
                assert_eq!(
                    matches.get_one::<String>("path").map(String::as_str),
                    Some("#/group/42")
                );
                assert_eq!(matches.get_one::<String>("anchor").map(String::as_str), Some("main"));
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        let levels = ["info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            for value in [level.to_string(), level.to_uppercase(), index.to_string()] {
                temp_env::with_vars([("IPC_CONSOLE_LOG_LEVEL", Some(value.as_str()))], || {
                    let matches = new().get_matches_from(vec!["ipc-console"]);
                    assert_eq!(
                        matches.get_one::<u8>("verbosity").copied(),
                        Some(index as u8),
                        "{value}"
                    );
                });
            }
        }
    }

    #[test]
    fn test_check_log_level_env_rejects_unknown() {
        for value in ["verbose", "3", "warn"] {
            temp_env::with_vars([("IPC_CONSOLE_LOG_LEVEL", Some(value))], || {
                assert!(new().try_get_matches_from(vec!["ipc-console"]).is_err(), "{value}");
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = ["info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("IPC_CONSOLE_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["ipc-console".to_string()];
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);
                assert_eq!(matches.get_one::<u8>("verbosity").copied(), Some(index as u8));
            });
        }
    }
}
