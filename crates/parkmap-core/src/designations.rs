//! Designations that keep an NPS unit off the map.
//!
//! Matching is a plain substring test against the unit's full name, so
//! `"Wild River"` also excludes `"Wild Riverside National Site"`.

/// NPS units whose full name contains any of these strings are excluded.
pub const DEFAULT_EXCLUDED_DESIGNATIONS: &[&str] = &[
    "Affiliated Area",
    "National Geologic Trail",
    "National Historic Trail",
    "National Recreational River",
    "National River",
    "National Scenic River",
    "National Scenic Trail",
    "Public Lands",
    "Scenic & Recreational River",
    "Scenic River",
    "Scenic Riverway",
    "Wild and Scenic River",
    "Wild River",
];

/// Returns `true` if `full_name` contains any of `designations` as a substring.
#[must_use]
pub fn has_excluded_designation<S: AsRef<str>>(full_name: &str, designations: &[S]) -> bool {
    designations
        .iter()
        .any(|d| full_name.contains(d.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenic_trail_is_excluded() {
        assert!(has_excluded_designation(
            "Example National Scenic Trail",
            DEFAULT_EXCLUDED_DESIGNATIONS
        ));
    }

    #[test]
    fn national_park_is_kept() {
        assert!(!has_excluded_designation(
            "Example National Park",
            DEFAULT_EXCLUDED_DESIGNATIONS
        ));
    }

    #[test]
    fn match_is_substring_not_whole_word() {
        assert!(has_excluded_designation(
            "Wild Riverside National Site",
            DEFAULT_EXCLUDED_DESIGNATIONS
        ));
    }

    #[test]
    fn match_is_case_sensitive() {
        assert!(!has_excluded_designation(
            "example national scenic trail",
            DEFAULT_EXCLUDED_DESIGNATIONS
        ));
    }

    #[test]
    fn empty_set_excludes_nothing() {
        let none: &[String] = &[];
        assert!(!has_excluded_designation("Anything Scenic River", none));
    }
}
