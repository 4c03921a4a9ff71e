use chrono::Datelike;
use std::collections::BTreeMap;

use crate::extract::ExtractedFields;
use crate::loader::RawPostRecord;

/// A post with its place in the archive decided: the Nth meeting of its
/// year. The sequence number is positional, assigned here, and never taken
/// from any source-system identifier.
#[derive(Debug, Clone)]
pub struct ScheduledPost {
    pub record: RawPostRecord,
    pub fields: ExtractedFields,
    pub year: i32,
    pub seq: u32,
}

/// Order posts chronologically (stable, so same-day posts keep their export
/// order), then number them 1..N within each year.
pub fn schedule(posts: Vec<(RawPostRecord, ExtractedFields)>) -> Vec<ScheduledPost> {
    let mut posts = posts;
    posts.sort_by_key(|(_, fields)| fields.published);

    let mut counters: BTreeMap<i32, u32> = BTreeMap::new();
    posts
        .into_iter()
        .map(|(record, fields)| {
            let year = fields.published.year();
            let counter = counters.entry(year).or_insert(0);
            *counter += 1;
            ScheduledPost {
                year,
                seq: *counter,
                record,
                fields,
            }
        })
        .collect()
}
