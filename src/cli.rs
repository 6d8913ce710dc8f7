use clap::{Arg, ArgAction, Command};
use log::debug;
use std::time::Instant;

fn page_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("page")
            .long("page")
            .value_name("N")
            .help("Page to fetch, starting at 0")
            .value_parser(clap::value_parser!(u64))
            .action(ArgAction::Set),
    )
    .arg(
        Arg::new("items-per-page")
            .long("items-per-page")
            .value_name("N")
            .help("Items per page (default: application.items_per_page)")
            .value_parser(clap::value_parser!(u64))
            .action(ArgAction::Set),
    )
}

fn name_arg(help: &'static str) -> Arg {
    Arg::new("name")
        .long("name")
        .short('n')
        .value_name("PATH_NAME")
        .required(true)
        .help(help)
        .action(ArgAction::Set)
}

fn file_arg(help: &'static str) -> Arg {
    Arg::new("file")
        .long("file")
        .short('f')
        .value_name("FILE")
        .required(true)
        .help(help)
        .action(ArgAction::Set)
}

pub fn build_cli() -> Command {
    debug!("⚙️ Building CLI interface...");
    let start_time = Instant::now();
    let cmd = Command::new("mtxctl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Command-line client for the MediaMTX control API.")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Sets a custom configuration file")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .subcommand(page_args(Command::new("list-streams").about("Lists live paths")))
        .subcommand(
            Command::new("get-stream")
                .about("Shows one live path")
                .arg(name_arg("Name of the live path")),
        )
        .subcommand(page_args(Command::new("list-recordings").about("Lists paths that have recordings")))
        .subcommand(
            Command::new("get-recordings")
                .about("Lists recording segments of one path")
                .arg(name_arg("Name of the recorded path")),
        )
        .subcommand(
            Command::new("delete-recording")
                .about("Deletes one recording segment")
                .arg(name_arg("Name of the recorded path"))
                .arg(
                    Arg::new("start")
                        .long("start")
                        .value_name("TIMESTAMP")
                        .required(true)
                        .help("Segment start exactly as listed by get-recordings")
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(Command::new("get-global").about("Shows the global configuration"))
        .subcommand(
            Command::new("patch-global")
                .about("Patches the global configuration")
                .arg(file_arg("YAML or JSON file with the fields to change")),
        )
        .subcommand(Command::new("get-path-defaults").about("Shows the default path configuration"))
        .subcommand(
            Command::new("patch-path-defaults")
                .about("Patches the default path configuration")
                .arg(file_arg("YAML or JSON file with the fields to change")),
        )
        .subcommand(page_args(Command::new("list-path-configs").about("Lists path configurations")))
        .subcommand(
            Command::new("get-path-config")
                .about("Shows one path configuration")
                .arg(name_arg("Name of the configured path")),
        )
        .subcommand(
            Command::new("add-path")
                .about("Adds a path configuration")
                .arg(name_arg("Name of the new path"))
                .arg(file_arg("YAML or JSON file with the path configuration")),
        )
        .subcommand(
            Command::new("update-path")
                .about("Patches a path configuration")
                .arg(name_arg("Name of the configured path"))
                .arg(file_arg("YAML or JSON file with the fields to change")),
        )
        .subcommand(
            Command::new("delete-path")
                .about("Removes a path configuration")
                .arg(name_arg("Name of the configured path")),
        )
        .subcommand(
            Command::new("playback-list")
                .about("Lists recorded spans of a path from the playback server")
                .arg(name_arg("Name of the recorded path"))
                .arg(Arg::new("start").long("start").value_name("RFC3339").help("Lower bound, e.g. 2025-02-08T19:00:00Z").action(ArgAction::Set))
                .arg(Arg::new("end").long("end").value_name("RFC3339").help("Upper bound, e.g. 2025-02-08T20:00:00Z").action(ArgAction::Set)),
        )
        .subcommand(
            Command::new("export-yaml")
                .about("Saves the running configuration as YAML (default: persistent_config, else one timestamped file)")
                .arg(Arg::new("unique-file").long("unique-file").value_name("FILE").help("Write global and paths config into this single file").action(ArgAction::Set).conflicts_with_all(["global-file", "paths-file"]))
                .arg(Arg::new("global-file").long("global-file").value_name("FILE").help("Write the global config to this file").action(ArgAction::Set))
                .arg(Arg::new("paths-file").long("paths-file").value_name("FILE").help("Write the paths config to this file").action(ArgAction::Set))
                .arg(Arg::new("ignore-rpi-camera").long("ignore-rpi-camera").help("Drop rpiCamera* keys from every path").action(ArgAction::SetTrue)),
        );
    debug!("✅ CLI interface built in {:?}", start_time.elapsed());
    cmd
}
