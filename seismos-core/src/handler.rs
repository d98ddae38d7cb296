//! Maps an inbound request method onto the listing payload.

use super::types::{QuakeRecord, QuakeResponse};

pub const STATUS_OK: u16 = 200;
pub const STATUS_METHOD_NOT_ALLOWED: u16 = 405;

/// Only an exact, case-sensitive `GET` is served.
pub fn handle(method: &str, records: &[QuakeRecord]) -> (QuakeResponse, u16) {
    match method {
        "GET" => (QuakeResponse::listing(records.to_vec()), STATUS_OK),
        _ => (QuakeResponse::error("Not allowed"), STATUS_METHOD_NOT_ALLOWED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<QuakeRecord> {
        (1..=3)
            .map(|i| QuakeRecord {
                link: format!("https://www.seismos.gr/seismos/{}", i),
                title: format!("Quake {}", i),
                magnitude: "3.0".to_string(),
                timeago: "1 hour ago".to_string(),
                date: "2024-05-01".to_string(),
                time: "14:32".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_get_returns_listing() {
        let input = records();
        let (resp, status) = handle("GET", &input);
        assert_eq!(status, 200);
        assert_eq!(
            resp,
            QuakeResponse::Listing {
                total: 3,
                list: input.clone(),
            }
        );
    }

    #[test]
    fn test_get_with_no_records() {
        let (resp, status) = handle("GET", &[]);
        assert_eq!(status, 200);
        assert_eq!(resp, QuakeResponse::Listing { total: 0, list: Vec::new() });
    }

    #[test]
    fn test_other_methods_not_allowed() {
        let input = records();
        for method in ["get", "", "POST", "PUT", "OPTIONS", "HEAD", " GET"] {
            let (resp, status) = handle(method, &input);
            assert_eq!(status, 405, "method {:?}", method);
            assert_eq!(resp, QuakeResponse::error("Not allowed"));
        }
        assert_eq!(input.len(), 3);
    }
}
