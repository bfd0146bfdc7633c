//! Turns raw NPS records into the ordered site list written for the map.
//!
//! Steps, in order:
//! 1. validate each record ([`validate_site`]); failures are dropped and
//!    reported, never fatal;
//! 2. drop sites whose full name contains an excluded designation;
//! 3. stable-sort each site's photos by title and keep the first few;
//! 4. stable-sort sites by display name.

use parkmap_core::{has_excluded_designation, AppConfig, Site};

use crate::error::ValidationError;
use crate::types::RawRecord;
use crate::validate::validate_site;

/// A record dropped during validation, kept for reporting.
#[derive(Debug)]
pub struct RejectedRecord {
    /// `parkCode` or `id` of the raw record, when it has one.
    pub identifier: Option<String>,
    pub error: ValidationError,
    pub record: RawRecord,
}

/// Output of [`SiteProcessor::process`].
#[derive(Debug, Default)]
pub struct ProcessedSites {
    /// Valid, non-excluded sites sorted by display name.
    pub sites: Vec<Site>,
    pub rejected: Vec<RejectedRecord>,
    /// Count of valid sites removed by the designation filter.
    pub excluded: usize,
}

#[derive(Debug, Clone)]
pub struct SiteProcessor {
    excluded_designations: Vec<String>,
    max_photos_per_site: usize,
}

impl SiteProcessor {
    #[must_use]
    pub fn new(excluded_designations: Vec<String>, max_photos_per_site: usize) -> Self {
        Self {
            excluded_designations,
            max_photos_per_site,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.excluded_designations.clone(),
            config.max_photos_per_site,
        )
    }

    /// Validates, filters, truncates and orders `raw_records`.
    ///
    /// Each rejected record emits exactly one `warn` event carrying the raw
    /// record and the validation error.
    pub fn process<I>(&self, raw_records: I) -> ProcessedSites
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let mut out = ProcessedSites::default();

        for record in raw_records {
            let mut site = match validate_site(&record) {
                Ok(site) => site,
                Err(error) => {
                    let identifier = record_identifier(&record);
                    tracing::warn!(
                        record_id = identifier.as_deref().unwrap_or("<unknown>"),
                        error = %error,
                        record = %record,
                        "unable to process record, dropping it"
                    );
                    out.rejected.push(RejectedRecord {
                        identifier,
                        error,
                        record,
                    });
                    continue;
                }
            };

            if has_excluded_designation(&site.full_name, self.excluded_designations.as_slice()) {
                tracing::debug!(full_name = %site.full_name, "excluded by designation");
                out.excluded += 1;
                continue;
            }

            site.truncate_photos(self.max_photos_per_site);
            out.sites.push(site);
        }

        out.sites.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }
}

fn record_identifier(record: &RawRecord) -> Option<String> {
    ["parkCode", "id"]
        .iter()
        .find_map(|key| record.get(key).and_then(serde_json::Value::as_str))
        .map(str::to_owned)
}

#[cfg(test)]
#[path = "process_test.rs"]
mod tests;
