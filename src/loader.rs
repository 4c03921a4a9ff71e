use anyhow::Result;
use quick_xml::events::Event;
use tracing::info;

/// One `<item>` from the WordPress RSS export, as-dumped. Fields we never
/// look at (categories, comments, meta) are not carried.
#[derive(Debug, Clone, Default)]
pub struct RawPostRecord {
    pub title: String,
    /// RFC-822-style `<pubDate>`, when present.
    pub pub_date: Option<String>,
    /// `<wp:post_date>` fallback ("YYYY-MM-DD HH:MM:SS").
    pub post_date: Option<String>,
    /// `<content:encoded>` CDATA payload, HTML-bearing.
    pub content: String,
    pub post_type: String,
    pub status: String,
}

#[derive(Clone, Copy)]
enum Field {
    Title,
    PubDate,
    PostDate,
    Content,
    PostType,
    Status,
}

/// Parse a WordPress export document into its item records.
pub fn parse_export(xml: &str) -> Result<Vec<RawPostRecord>> {
    let mut reader = quick_xml::Reader::from_str(xml);
    let mut records = Vec::new();
    let mut current = RawPostRecord::default();
    let mut in_item = false;
    let mut field: Option<Field> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"item" => {
                    in_item = true;
                    current = RawPostRecord::default();
                }
                b"title" if in_item => field = Some(Field::Title),
                b"pubDate" if in_item => field = Some(Field::PubDate),
                b"wp:post_date" if in_item => field = Some(Field::PostDate),
                b"content:encoded" if in_item => field = Some(Field::Content),
                b"wp:post_type" if in_item => field = Some(Field::PostType),
                b"wp:status" if in_item => field = Some(Field::Status),
                _ => field = None,
            },
            // Text may arrive in several events when entities are involved.
            Ok(Event::Text(e)) if in_item => {
                if let Some(f) = field {
                    append(&mut current, f, &e.unescape()?);
                }
            }
            Ok(Event::CData(e)) if in_item => {
                if let Some(f) = field {
                    append(&mut current, f, &String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"item" => {
                    in_item = false;
                    finish(&mut current);
                    records.push(std::mem::take(&mut current));
                }
                _ => field = None,
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        buf.clear();
    }

    Ok(records)
}

fn append(record: &mut RawPostRecord, field: Field, text: &str) {
    match field {
        Field::Title => record.title.push_str(text),
        Field::PubDate => record.pub_date.get_or_insert_with(String::new).push_str(text),
        Field::PostDate => record.post_date.get_or_insert_with(String::new).push_str(text),
        Field::Content => record.content.push_str(text),
        Field::PostType => record.post_type.push_str(text),
        Field::Status => record.status.push_str(text),
    }
}

fn finish(record: &mut RawPostRecord) {
    record.title = record.title.trim().to_string();
    record.post_type = record.post_type.trim().to_string();
    record.status = record.status.trim().to_string();
    trim_opt(&mut record.pub_date);
    trim_opt(&mut record.post_date);
}

fn trim_opt(value: &mut Option<String>) {
    if let Some(v) = value.take() {
        let trimmed = v.trim();
        if !trimmed.is_empty() {
            *value = Some(trimmed.to_string());
        }
    }
}

/// Keep only published posts, in input order. Pages, drafts and records with
/// missing tags all fall through the predicate.
pub fn select_published(records: Vec<RawPostRecord>) -> Vec<RawPostRecord> {
    let total = records.len();
    let posts: Vec<RawPostRecord> = records
        .into_iter()
        .filter(|r| r.post_type == "post" && r.status == "publish")
        .collect();
    info!("Found {} total items, {} published posts", total, posts.len());
    posts
}

// ── Tests ──
