//! Earthquake listing data types

use serde::{Deserialize, Serialize};

/// One entry from the earthquake listing page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuakeRecord {
    /// Absolute URL of the event page, e.g. "https://www.seismos.gr/seismos/123"
    pub link: String,
    /// Location description, e.g. "12 km NW of Patra"
    pub title: String,
    /// Magnitude text as shown on the page, e.g. "4.2"
    pub magnitude: String,
    /// Relative time text, e.g. "5 minutes ago"
    pub timeago: String,
    /// Date token of the heading, e.g. "2024-05-01"
    pub date: String,
    /// Time token of the heading, e.g. "14:32"
    pub time: String,
}

/// Body of every response served on the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuakeResponse {
    Listing {
        total: usize,
        list: Vec<QuakeRecord>,
    },
    Error {
        error: String,
    },
}

impl QuakeResponse {
    pub fn listing(list: Vec<QuakeRecord>) -> Self {
        Self::Listing {
            total: list.len(),
            list,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_listing_total_matches_list() {
        let resp = QuakeResponse::listing(vec![QuakeRecord::default(), QuakeRecord::default()]);
        match resp {
            QuakeResponse::Listing { total, list } => assert_eq!(total, list.len()),
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_record_json_shape() {
        let record = QuakeRecord {
            link: "https://www.seismos.gr/seismos/123".to_string(),
            title: "Strong quake near X".to_string(),
            magnitude: "4.5".to_string(),
            timeago: "5 minutes ago".to_string(),
            date: "2024-05-01".to_string(),
            time: "14:32".to_string(),
        };
        let value = serde_json::to_value(QuakeResponse::listing(vec![record])).unwrap();
        assert_eq!(
            value,
            json!({
                "total": 1,
                "list": [{
                    "link": "https://www.seismos.gr/seismos/123",
                    "title": "Strong quake near X",
                    "magnitude": "4.5",
                    "timeago": "5 minutes ago",
                    "date": "2024-05-01",
                    "time": "14:32"
                }]
            })
        );
    }

    #[test]
    fn test_error_json_shape() {
        let value = serde_json::to_value(QuakeResponse::error("Not allowed")).unwrap();
        assert_eq!(value, json!({ "error": "Not allowed" }));
    }
}
