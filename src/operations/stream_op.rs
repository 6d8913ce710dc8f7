use crate::operations::op_helper::{pagination_from_args, print_json, required_arg};
use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use log::{debug, info};
use mediamtx_client::config_loader::MasterConfig;
use mediamtx_client::MediamtxClient;
use std::time::Instant;

pub async fn handle_list_streams_cli(
    master_config: &MasterConfig,
    client: &MediamtxClient,
    args: &ArgMatches,
) -> Result<()> {
    let pagination = pagination_from_args(master_config, args);
    let start_time = Instant::now();
    let page = client
        .list_streams(pagination)
        .await
        .context("Failed to list streams")?;
    info!(
        "📡 {} of {} streams (page {} of {}) in {:?}",
        page.items.len(),
        page.item_count,
        display_page(pagination.page),
        page.page_count.max(1),
        start_time.elapsed()
    );
    print_json(&page)
}

pub async fn handle_get_stream_cli(client: &MediamtxClient, args: &ArgMatches) -> Result<()> {
    let name = required_arg(args, "name")?;
    debug!("Looking up stream '{}'", name);
    match client
        .get_stream_by_name(name)
        .await
        .with_context(|| format!("Failed to fetch stream '{}'", name))?
    {
        Some(stream) => print_json(&stream),
        None => bail!("Stream '{}' not found", name),
    }
}

/// One-based page number for log lines; `page` is zero-based.
fn display_page(page: u64) -> u64 {
    page.saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_page_is_one_based_and_saturates() {
        assert_eq!(display_page(0), 1);
        assert_eq!(display_page(4), 5);
        assert_eq!(display_page(u64::MAX), u64::MAX);
    }
}
