use env_logger::Builder;
use log::LevelFilter;
use mediamtx_client::config_loader::MasterConfig;

pub fn initialize_logging(config: Option<&MasterConfig>, cli_matches: &clap::ArgMatches) {
    let mut builder = Builder::new();

    // Determine log level from CLI, then config, then default
    let log_level_str = if cli_matches.get_flag("debug") {
        "debug".to_string()
    } else {
        config
            .and_then(|c| c.app_settings.log_level.clone())
            .unwrap_or_else(|| "info".to_string())
    };

    builder.filter_level(parse_level_filter(&log_level_str));

    builder.try_init().unwrap_or_else(|e| {
        eprintln!("Failed to initialize logger: {}. Logging might not work as expected.", e);
    });
}

fn parse_level_filter(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        "off" => LevelFilter::Off,
        s => {
            eprintln!("Unrecognized log level '{}', defaulting to info.", s);
            LevelFilter::Info
        }
    }
}
