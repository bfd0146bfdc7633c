//! `update-parks`: NPS API → validated, ordered sites → `parks.json`.
//!
//! Fetch, decode, protocol and write failures abort the run before the
//! output file is touched. Records that fail validation are logged by the
//! processor and skipped; they never fail the run.

use std::path::Path;

use parkmap_core::AppConfig;
use parkmap_nps::{NpsClient, SiteProcessor};

use crate::output::{write_json_atomic, JsonStyle};

const PARKS_RESOURCE: &str = "parks";

pub(crate) async fn run_update_parks(config: &AppConfig, output_path: &Path) -> anyhow::Result<()> {
    let client = NpsClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build NPS client: {e}"))?;

    let raw_records = client
        .fetch_all_records(PARKS_RESOURCE, config.page_size)
        .await
        .map_err(|e| anyhow::anyhow!("failed to fetch parks: {e}"))?;
    let fetched = raw_records.len();

    let processed = SiteProcessor::from_config(config).process(raw_records);

    write_json_atomic(output_path, &processed.sites, JsonStyle::Compact)?;

    tracing::info!(
        fetched,
        written = processed.sites.len(),
        rejected = processed.rejected.len(),
        excluded = processed.excluded,
        path = %output_path.display(),
        "parks file updated"
    );
    Ok(())
}
