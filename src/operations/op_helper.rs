use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::ArgMatches;
use log::debug;
use mediamtx_client::config_loader::MasterConfig;
use mediamtx_client::Pagination;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;

/// `--page` / `--items-per-page`, falling back to the configured page size.
pub fn pagination_from_args(master_config: &MasterConfig, args: &ArgMatches) -> Pagination {
    let page = args.get_one::<u64>("page").copied().unwrap_or(0);
    let items_per_page = args
        .get_one::<u64>("items-per-page")
        .copied()
        .unwrap_or(master_config.app_settings.items_per_page);
    debug!("Using pagination page={} items_per_page={}", page, items_per_page);
    Pagination::new(page, items_per_page)
}

pub fn required_arg<'a>(args: &'a ArgMatches, key: &str) -> Result<&'a str> {
    args.get_one::<String>(key)
        .map(String::as_str)
        .with_context(|| format!("Missing --{} argument", key))
}

/// Reads a request body from a YAML file (JSON files parse as YAML too).
pub fn read_document<T: DeserializeOwned>(path: &str) -> Result<T> {
    let contents = fs::read_to_string(path).with_context(|| format!("Failed to read '{}' 📖", path))?;
    serde_yaml::from_str(&contents).with_context(|| format!("Failed to parse '{}' 💔", path))
}

pub fn parse_timestamp_arg(args: &ArgMatches, key: &str) -> Result<Option<DateTime<Utc>>> {
    args.get_one::<String>(key)
        .map(|raw| {
            DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.with_timezone(&Utc))
                .with_context(|| format!("--{} '{}' is not an RFC 3339 timestamp", key, raw))
        })
        .transpose()
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render result as JSON")?;
    println!("{}", rendered);
    Ok(())
}
