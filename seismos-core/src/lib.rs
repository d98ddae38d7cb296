//! Earthquake listing extraction for the seismos.gr feed.
//!
//! Parses the public listing page into [`QuakeRecord`]s and maps an inbound
//! request method onto the JSON payload served to clients.

pub mod types;
pub mod parser;
pub mod handler;

pub use types::{QuakeRecord, QuakeResponse};
pub use parser::extract;
pub use handler::handle;
