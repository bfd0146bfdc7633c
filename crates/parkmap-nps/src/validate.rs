//! Validation of raw NPS park records into [`Site`]s.
//!
//! ## Observed shape from `GET /parks`
//!
//! ### Coordinates
//! `latitude` and `longitude` arrive as **strings** (`"44.409286"`). Units
//! without a location send `""`, which is rejected. Plain JSON numbers are
//! accepted as well.
//!
//! ### States
//! `states` is a comma-joined string (`"CA,NV"`). It is split on `,` with no
//! trimming. A JSON array is passed through unchanged. The field is required;
//! a record without it fails validation.
//!
//! ### URLs
//! The park `url` and every image `url` must be absolute `http`/`https` URLs.
//! They are stored in normalized form (`https://example.com` becomes
//! `https://example.com/`).
//!
//! Every other required field must be a JSON string; numbers are not coerced.
//! Unknown fields are ignored.

use parkmap_core::{Photo, Site};
use reqwest::Url;
use serde::Deserialize;

use crate::error::ValidationError;
use crate::types::RawRecord;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSite {
    id: String,
    url: String,
    name: String,
    full_name: String,
    park_code: String,
    description: String,
    latitude: Coordinate,
    longitude: Coordinate,
    states: RegionCodes,
    images: Vec<RawPhoto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPhoto {
    url: String,
    title: String,
    alt_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Number(f64),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RegionCodes {
    Joined(String),
    List(Vec<String>),
}

impl RegionCodes {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::Joined(s) => split_region_codes(&s),
            Self::List(v) => v,
        }
    }
}

/// Splits a comma-joined region string. Whitespace around each code is kept.
#[must_use]
pub fn split_region_codes(joined: &str) -> Vec<String> {
    joined.split(',').map(str::to_owned).collect()
}

/// Validates one raw record and builds a [`Site`] from it.
///
/// Photos are carried over as-is; sorting and truncation belong to
/// [`crate::process::SiteProcessor`].
///
/// # Errors
///
/// - [`ValidationError::Schema`] for a missing required field or wrong type.
/// - [`ValidationError::InvalidCoordinate`] for a non-numeric coordinate.
/// - [`ValidationError::InvalidUrl`] for a park or image URL that is not an
///   absolute `http`/`https` URL.
pub fn validate_site(record: &RawRecord) -> Result<Site, ValidationError> {
    let raw = RawSite::deserialize(record)?;

    let url = check_url("url", &raw.url)?;
    let latitude = coordinate("latitude", raw.latitude)?;
    let longitude = coordinate("longitude", raw.longitude)?;

    let photos = raw
        .images
        .into_iter()
        .enumerate()
        .map(|(idx, photo)| {
            Ok(Photo {
                url: check_url(&format!("images[{idx}].url"), &photo.url)?,
                title: photo.title,
                alt_text: photo.alt_text,
            })
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;

    Ok(Site {
        id: raw.id,
        url,
        name: raw.name,
        full_name: raw.full_name,
        park_code: raw.park_code,
        description: raw.description,
        latitude,
        longitude,
        states: raw.states.into_vec(),
        photos,
    })
}

fn coordinate(field: &str, value: Coordinate) -> Result<f64, ValidationError> {
    let (parsed, shown) = match value {
        Coordinate::Number(n) => (Some(n), n.to_string()),
        Coordinate::Text(s) => (s.trim().parse::<f64>().ok(), s),
    };
    parsed
        .filter(|n| n.is_finite())
        .ok_or_else(|| ValidationError::InvalidCoordinate {
            field: field.to_owned(),
            value: shown,
        })
}

fn check_url(field: &str, value: &str) -> Result<String, ValidationError> {
    let invalid = |reason: String| ValidationError::InvalidUrl {
        field: field.to_owned(),
        value: value.to_owned(),
        reason,
    };

    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("scheme \"{}\" is not http or https", url.scheme())));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("URL has no host".to_owned()));
    }
    Ok(url.to_string())
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
