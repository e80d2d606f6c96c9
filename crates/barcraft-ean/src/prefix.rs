//! GS1 country prefixes offered when generating EAN-13 codes.
//!
//! Prefixes are advisory: nothing checks that a code was really issued by
//! the organisation its prefix belongs to.

use serde::Serialize;

/// A selectable prefix with the label shown next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryPrefix {
    /// Human-readable label, including the prefix range
    pub label: &'static str,
    /// Digits placed at the start of generated codes
    pub value: &'static str,
}

/// Prefixes assigned to Brazil.
pub const BRAZIL_PREFIXES: [&str; 2] = ["789", "790"];

/// Prefix catalogue, in display order.
pub const COUNTRY_PREFIXES: [CountryPrefix; 9] = [
    CountryPrefix {
        label: "Brazil (789)",
        value: "789",
    },
    CountryPrefix {
        label: "Brazil (790)",
        value: "790",
    },
    // Any value in 000-139 works, 050 is a representative one
    CountryPrefix {
        label: "USA (000-139)",
        value: "050",
    },
    CountryPrefix {
        label: "Argentina (779)",
        value: "779",
    },
    CountryPrefix {
        label: "China (690-699)",
        value: "690",
    },
    CountryPrefix {
        label: "Germany (400-440)",
        value: "400",
    },
    CountryPrefix {
        label: "Japan (450-459)",
        value: "450",
    },
    CountryPrefix {
        label: "Russia (460-469)",
        value: "460",
    },
    CountryPrefix {
        label: "UK (500-509)",
        value: "500",
    },
];

/// Find the catalogue entry for a prefix value.
#[must_use]
pub fn find_prefix(value: &str) -> Option<&'static CountryPrefix> {
    COUNTRY_PREFIXES.iter().find(|p| p.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::is_numeric_prefix;

    #[test]
    fn test_catalogue_values_are_numeric() {
        for prefix in &COUNTRY_PREFIXES {
            assert!(is_numeric_prefix(prefix.value), "{}", prefix.label);
            assert_eq!(prefix.value.len(), 3);
        }
    }

    #[test]
    fn test_find_prefix() {
        let germany = find_prefix("400").expect("germany listed");
        assert_eq!(germany.label, "Germany (400-440)");
        assert!(find_prefix("999").is_none());
    }

    #[test]
    fn test_prefix_serialization() {
        let json = serde_json::to_string(&COUNTRY_PREFIXES[0]).expect("serialize prefix");
        assert_eq!(json, r#"{"label":"Brazil (789)","value":"789"}"#);
    }

    #[test]
    fn test_brazil_prefixes_listed() {
        for value in BRAZIL_PREFIXES {
            assert!(find_prefix(value).is_some());
        }
    }
}
