//! Validated park records as written to the map's `parks.json`.
//!
//! Field names are serialized in the NPS API's camelCase convention
//! (`fullName`, `parkCode`, `altText`) and the photo list keeps the API's
//! `images` key. The front-end map reads these names directly, so they are
//! part of the output contract and must not change.

use serde::{Deserialize, Serialize};

/// One NPS unit after validation and normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: String,
    /// Absolute `http`/`https` URL in normalized form.
    pub url: String,
    /// Display name (e.g. `"Acadia"`); the output is sorted on this.
    pub name: String,
    /// Official name including the designation (e.g. `"Acadia National Park"`).
    pub full_name: String,
    pub park_code: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Two-letter state/territory codes.
    pub states: Vec<String>,
    #[serde(rename = "images")]
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub url: String,
    pub title: String,
    pub alt_text: String,
}

impl Site {
    /// Stable-sorts photos by title and keeps at most `max` of them.
    pub fn truncate_photos(&mut self, max: usize) {
        self.photos.sort_by(|a, b| a.title.cmp(&b.title));
        self.photos.truncate(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(title: &str, alt: &str) -> Photo {
        Photo {
            url: format!("https://www.nps.gov/common/{title}.jpg"),
            title: title.to_owned(),
            alt_text: alt.to_owned(),
        }
    }

    fn site(photos: Vec<Photo>) -> Site {
        Site {
            id: "77E0D7F0-1942-494A-ACE2-9004D2BDC59E".to_owned(),
            url: "https://www.nps.gov/acad/index.htm".to_owned(),
            name: "Acadia".to_owned(),
            full_name: "Acadia National Park".to_owned(),
            park_code: "acad".to_owned(),
            description: "Rocky coastline.".to_owned(),
            latitude: 44.409_286,
            longitude: -68.247_501,
            states: vec!["ME".to_owned()],
            photos,
        }
    }

    #[test]
    fn truncate_photos_keeps_first_titles() {
        let mut s = site(vec![
            photo("Zebra", "z"),
            photo("Apple", "a"),
            photo("Mango", "m"),
        ]);
        s.truncate_photos(2);
        let titles: Vec<&str> = s.photos.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "Mango"]);
    }

    #[test]
    fn truncate_photos_is_stable_for_equal_titles() {
        let mut s = site(vec![
            photo("Sunset", "first"),
            photo("Dawn", "dawn"),
            photo("Sunset", "second"),
        ]);
        s.truncate_photos(3);
        let alts: Vec<&str> = s.photos.iter().map(|p| p.alt_text.as_str()).collect();
        assert_eq!(alts, vec!["dawn", "first", "second"]);
    }

    #[test]
    fn truncate_photos_with_fewer_photos_than_max() {
        let mut s = site(vec![photo("Only", "o")]);
        s.truncate_photos(2);
        assert_eq!(s.photos.len(), 1);
    }

    #[test]
    fn serializes_with_camel_case_and_images_key() {
        let s = site(vec![photo("Apple", "An apple")]);
        let value = serde_json::to_value(&s).unwrap();
        assert_eq!(value["fullName"], "Acadia National Park");
        assert_eq!(value["parkCode"], "acad");
        assert_eq!(value["images"][0]["altText"], "An apple");
        assert!(value.get("full_name").is_none());
        assert!(value.get("photos").is_none());
    }
}
