/// Domain models for the application
use crate::utils::text_or;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};

pub const UNKNOWN_DATE: &str = "Unknown date";
pub const NO_EXPLANATION: &str = "No explanation available";
pub const UNKNOWN_TITLE: &str = "Unknown title";

/// Upstream APOD record as documented for API consumers.
///
/// The API path returns the upstream JSON unmodified, so this type only
/// describes the schema; it is never used to re-shape a response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = APOD)]
#[allow(dead_code)]
pub struct ApodRecord {
    /// The date of the APOD
    pub date: String,
    /// The explanation of the APOD
    pub explanation: String,
    /// The title of the APOD
    pub title: String,
    /// The URL of the APOD image
    pub url: String,
    /// The media type of the APOD
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    /// The service version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_version: Option<String>,
    /// The high definition URL of the APOD image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,
    /// The copyright information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

/// Four-field, default-substituted view of an APOD entry (web path only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub date: String,
    pub explanation: String,
    pub title: String,
    pub image_url: String,
}

impl DisplayRecord {
    /// Map an upstream payload to display fields, defaulting anything missing
    pub fn normalize(raw: &Value) -> Self {
        Self {
            date: text_or(raw, "date", UNKNOWN_DATE),
            explanation: text_or(raw, "explanation", NO_EXPLANATION),
            title: text_or(raw, "title", UNKNOWN_TITLE),
            image_url: text_or(raw, "url", ""),
        }
    }
}

/// Allow-listed query parameters accepted by `/api/apod`.
///
/// Unknown keys are ignored during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ApodParams {
    /// APOD date (YYYY-MM-DD)
    pub date: Option<String>,
    /// Start date for date range
    pub start_date: Option<String>,
    /// End date for date range
    pub end_date: Option<String>,
    /// Number of random APODs to retrieve
    pub count: Option<i64>,
    /// Include thumbnail URLs for video media types
    pub thumbs: Option<bool>,
}

impl ApodParams {
    /// Collect the present parameters, keeping their types
    pub fn collect(&self) -> Map<String, Value> {
        let mut params = Map::new();
        if let Some(date) = &self.date {
            params.insert("date".into(), Value::from(date.as_str()));
        }
        if let Some(start_date) = &self.start_date {
            params.insert("start_date".into(), Value::from(start_date.as_str()));
        }
        if let Some(end_date) = &self.end_date {
            params.insert("end_date".into(), Value::from(end_date.as_str()));
        }
        if let Some(count) = self.count {
            params.insert("count".into(), Value::from(count));
        }
        if let Some(thumbs) = self.thumbs {
            params.insert("thumbs".into(), Value::from(thumbs));
        }
        params
    }
}

/// Health check response
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub now: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_full_record_passes_through() {
        let raw = json!({
            "date": "2023-01-01",
            "explanation": "Test explanation",
            "url": "https://example.com/image.jpg",
            "title": "Test Title",
            "media_type": "image"
        });
        let record = DisplayRecord::normalize(&raw);
        assert_eq!(
            record,
            DisplayRecord {
                date: "2023-01-01".into(),
                explanation: "Test explanation".into(),
                title: "Test Title".into(),
                image_url: "https://example.com/image.jpg".into(),
            }
        );
    }

    #[test]
    fn test_normalize_title_only() {
        let record = DisplayRecord::normalize(&json!({"title": "Test Title Only"}));
        assert_eq!(record.title, "Test Title Only");
        assert_eq!(record.explanation, "No explanation available");
        assert_eq!(record.date, "Unknown date");
        assert_eq!(record.image_url, "");
    }

    #[test]
    fn test_normalize_empty_object_uses_every_default() {
        let record = DisplayRecord::normalize(&json!({}));
        assert_eq!(record.date, UNKNOWN_DATE);
        assert_eq!(record.explanation, NO_EXPLANATION);
        assert_eq!(record.title, UNKNOWN_TITLE);
        assert_eq!(record.image_url, "");
    }

    #[test]
    fn test_normalize_non_object_payload() {
        let record = DisplayRecord::normalize(&json!([{"title": "first"}]));
        assert_eq!(record.title, UNKNOWN_TITLE);
    }

    #[test]
    fn test_collect_drops_absent_parameters() {
        let params = ApodParams {
            date: Some("2023-01-01".into()),
            ..Default::default()
        };
        let collected = params.collect();
        assert_eq!(collected.len(), 1);
        assert_eq!(collected["date"], json!("2023-01-01"));
    }

    #[test]
    fn test_collect_keeps_types() {
        let params = ApodParams {
            count: Some(3),
            thumbs: Some(true),
            ..Default::default()
        };
        let collected = params.collect();
        assert_eq!(collected["count"], json!(3));
        assert_eq!(collected["thumbs"], json!(true));
        assert!(!collected.contains_key("date"));
    }

    #[test]
    fn test_collect_empty() {
        assert!(ApodParams::default().collect().is_empty());
    }

    #[test]
    fn test_params_ignore_unknown_keys() {
        let params: ApodParams =
            serde_json::from_value(json!({"date": "2024-02-02", "hd": "true"})).unwrap();
        assert_eq!(params.date.as_deref(), Some("2024-02-02"));
        assert_eq!(params.count, None);
    }
}
