//! `sort-visits`: keep `visits.json` ordered by park code.
//!
//! Entries are otherwise opaque; their keys keep their original order and
//! non-ASCII text is written as-is.

use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::output::{write_json_atomic, JsonStyle};

const SORT_KEY: &str = "parkCode";

#[derive(Debug, Error)]
pub(crate) enum VisitsError {
    #[error("visits file must contain a JSON array")]
    NotAnArray,

    #[error("visit at index {index} has no string \"parkCode\"")]
    MissingParkCode { index: usize },
}

pub(crate) fn run_sort_visits(path: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let document: Value = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("failed to parse {}: {e}", path.display()))?;

    let sorted = sort_visits(document)
        .map_err(|e| anyhow::anyhow!("cannot sort {}: {e}", path.display()))?;
    let count = sorted.len();

    write_json_atomic(path, &sorted, JsonStyle::Pretty)?;
    tracing::info!(count, path = %path.display(), "visits sorted");
    Ok(())
}

/// Stable-sorts visit entries by their `parkCode` string.
///
/// # Errors
///
/// Returns [`VisitsError`] if `document` is not an array or any entry lacks
/// a string `parkCode`. Nothing is reordered in that case.
pub(crate) fn sort_visits(document: Value) -> Result<Vec<Value>, VisitsError> {
    let Value::Array(entries) = document else {
        return Err(VisitsError::NotAnArray);
    };

    let mut keyed = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let key = entry
                .get(SORT_KEY)
                .and_then(Value::as_str)
                .map(str::to_owned)
                .ok_or(VisitsError::MissingParkCode { index })?;
            Ok((key, entry))
        })
        .collect::<Result<Vec<_>, VisitsError>>()?;

    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(keyed.into_iter().map(|(_, entry)| entry).collect())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn codes(visits: &[Value]) -> Vec<&str> {
        visits
            .iter()
            .map(|v| v["parkCode"].as_str().unwrap())
            .collect()
    }

    #[test]
    fn sorts_by_park_code() {
        let sorted = sort_visits(json!([
            {"parkCode": "zion", "date": "2023-05-01"},
            {"parkCode": "acad", "date": "2021-08-14"},
            {"parkCode": "grca", "date": "2019-03-30"}
        ]))
        .unwrap();
        assert_eq!(codes(&sorted), vec!["acad", "grca", "zion"]);
    }

    #[test]
    fn sort_is_stable_for_repeat_visits() {
        let sorted = sort_visits(json!([
            {"parkCode": "yose", "date": "2022"},
            {"parkCode": "acad", "date": "2020"},
            {"parkCode": "yose", "date": "2018"}
        ]))
        .unwrap();
        let dates: Vec<&str> = sorted.iter().map(|v| v["date"].as_str().unwrap()).collect();
        assert_eq!(dates, vec!["2020", "2022", "2018"]);
    }

    #[test]
    fn non_array_is_rejected() {
        let err = sort_visits(json!({"parkCode": "acad"})).unwrap_err();
        assert!(matches!(err, VisitsError::NotAnArray));
    }

    #[test]
    fn missing_park_code_reports_index() {
        let err = sort_visits(json!([{"parkCode": "acad"}, {"date": "2020"}])).unwrap_err();
        assert!(matches!(err, VisitsError::MissingParkCode { index: 1 }));
    }

    #[test]
    fn non_string_park_code_is_rejected() {
        let err = sort_visits(json!([{"parkCode": 7}])).unwrap_err();
        assert!(matches!(err, VisitsError::MissingParkCode { index: 0 }));
    }

    #[test]
    fn rewrites_file_pretty_preserving_key_order_and_unicode() {
        let dir = std::env::temp_dir().join(format!("parkmap-visits-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("visits.json");
        std::fs::write(
            &path,
            r#"[{"parkCode":"hale","note":"Haleakalā"},{"parkCode":"acad","date":"2021"}]"#,
        )
        .unwrap();

        run_sort_visits(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "[\n  {\n    \"parkCode\": \"acad\",\n    \"date\": \"2021\"\n  },\n  {\n    \"parkCode\": \"hale\",\n    \"note\": \"Haleakalā\"\n  }\n]"
        );
    }

    #[test]
    fn invalid_file_is_left_untouched() {
        let dir = std::env::temp_dir().join(format!(
            "parkmap-visits-invalid-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("visits.json");
        let original = r#"[{"parkCode":"zion"},{"date":"2020"}]"#;
        std::fs::write(&path, original).unwrap();

        assert!(run_sort_visits(&path).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }
}
