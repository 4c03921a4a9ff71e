use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::loader::RawPostRecord;

/// Pull the publication date off a record: `pubDate` first, then
/// `wp:post_date`. `None` when neither field is present or parseable.
pub fn extract(record: &RawPostRecord) -> Option<NaiveDate> {
    record
        .pub_date
        .as_deref()
        .and_then(parse_date)
        .or_else(|| record.post_date.as_deref().and_then(parse_date))
}

/// Best-effort parse of the two timestamp shapes WordPress emits:
/// RFC-2822 ("Wed, 05 Jun 2024 10:30:00 +0000") and the local-time
/// "2024-06-05 10:30:00" form.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Front-matter form, e.g. "Jun 5 2024".
pub fn frontmatter_date(date: NaiveDate) -> String {
    format!("{} {} {}", month_abbrev(date.month()), date.day(), date.year())
}

/// Title form, e.g. "5/06/2024" (day unpadded, month padded).
pub fn display_date(date: NaiveDate) -> String {
    format!("{}/{:02}/{}", date.day(), date.month(), date.year())
}

fn month_abbrev(month: u32) -> &'static str {
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    MONTHS[(month - 1) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pub_date: Option<&str>, post_date: Option<&str>) -> RawPostRecord {
        RawPostRecord {
            pub_date: pub_date.map(String::from),
            post_date: post_date.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn rfc2822_pub_date_wins() {
        let r = record(
            Some("Wed, 05 Jun 2024 10:30:00 +0000"),
            Some("2023-01-01 00:00:00"),
        );
        assert_eq!(extract(&r), NaiveDate::from_ymd_opt(2024, 6, 5));
    }

    #[test]
    fn falls_back_to_post_date() {
        let r = record(None, Some("2024-06-12 09:00:00"));
        assert_eq!(extract(&r), NaiveDate::from_ymd_opt(2024, 6, 12));
    }

    #[test]
    fn unparseable_pub_date_falls_through_to_post_date() {
        let r = record(Some("not a date"), Some("2024-06-12 09:00:00"));
        assert_eq!(extract(&r), NaiveDate::from_ymd_opt(2024, 6, 12));
    }

    #[test]
    fn no_usable_field_yields_none() {
        assert_eq!(extract(&record(None, None)), None);
        assert_eq!(extract(&record(Some("garbage"), Some("also garbage"))), None);
    }

    #[test]
    fn formatters_match_site_conventions() {
        let d = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(frontmatter_date(d), "Jun 5 2024");
        assert_eq!(display_date(d), "5/06/2024");
    }

    #[test]
    fn display_date_pads_month_not_day() {
        let d = NaiveDate::from_ymd_opt(2024, 11, 3).unwrap();
        assert_eq!(display_date(d), "3/11/2024");
    }
}
