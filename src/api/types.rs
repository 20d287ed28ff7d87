//! API response type definitions.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

/// One entry of the monthly media listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MediaSummary {
    /// Attachment identifier. The gateway sends numbers for some records and
    /// strings for others.
    #[serde(deserialize_with = "string_or_number")]
    pub attachment_id: String,
}

/// Per-attachment details with a time-limited download link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MediaDetails {
    pub signed_url: String,
    pub filename: String,
    pub mime_type: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or integer attachment id")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_accepts_numeric_and_string_ids() {
        let items: Vec<MediaSummary> = serde_json::from_str(
            r#"[
                {"attachment_id": 42, "dependent_id": "child-1", "created": "2024-03-02"},
                {"attachment_id": "a1b2c3"}
            ]"#,
        )
        .unwrap();

        assert_eq!(items[0].attachment_id, "42");
        assert_eq!(items[1].attachment_id, "a1b2c3");
    }

    #[test]
    fn test_listing_rejects_missing_id() {
        assert!(serde_json::from_str::<Vec<MediaSummary>>(r#"[{"id": 1}]"#).is_err());
    }

    #[test]
    fn test_details_ignore_extra_fields() {
        let details: MediaDetails = serde_json::from_str(
            r#"{
                "signed_url": "https://cdn.example.com/x?sig=1",
                "filename": "photo.jpg",
                "mime_type": "image/png",
                "size": 1024
            }"#,
        )
        .unwrap();

        assert_eq!(details.filename, "photo.jpg");
        assert_eq!(details.mime_type, "image/png");
    }
}
