pub mod attendees;
pub mod date;
pub mod html;
pub mod image;
pub mod venue;

use chrono::NaiveDate;
use tracing::warn;

use crate::config::ExtractPolicy;
use crate::loader::RawPostRecord;

/// Everything the heuristics pull out of one accepted record. Attendees and
/// venue are independent best-effort extractions; both may come back
/// empty/default without that being an error.
#[derive(Debug, Clone)]
pub struct ExtractedFields {
    pub published: NaiveDate,
    pub attendees: Vec<String>,
    pub venue: String,
    pub image_url: Option<String>,
}

/// Run all field extractors over one record. `None` means the record has no
/// usable publication date and must be skipped.
pub fn extract_all(record: &RawPostRecord, policy: &ExtractPolicy) -> Option<ExtractedFields> {
    let Some(published) = date::extract(record) else {
        warn!("Skipping post without date: {}", record.title);
        return None;
    };

    Some(ExtractedFields {
        published,
        attendees: attendees::extract(&record.content, policy),
        venue: venue::extract(&record.content, policy),
        image_url: image::extract(&record.content),
    })
}
