use std::fmt::Write;

use crate::config::ImportConfig;
use crate::extract::date;
use crate::sequence::ScheduledPost;

/// Placeholder attendee line for posts where no names could be extracted.
pub const ATTENDEES_PENDING: &str = "Por confirmar";

/// Fully rendered post, ready for the materializer: names are fixed, the
/// hero path is computed whether or not the image exists yet.
#[derive(Debug, Clone)]
pub struct OutputDocument {
    pub year: i32,
    pub filename: String,
    pub image_name: String,
    /// Site-absolute hero path, e.g. "/Martes/2024/2024_1.jpg".
    pub hero_path: String,
    pub image_url: Option<String>,
    pub markdown: String,
    /// Source title, kept for log messages only.
    pub source_title: String,
}

pub fn render(post: &ScheduledPost, config: &ImportConfig) -> OutputDocument {
    let filename = format!("{}_{}.md", post.year, post.seq);
    let image_name = format!("{}_{}.jpg", post.year, post.seq);
    let hero_path = format!("{}/{}/{}", config.public_prefix(), post.year, image_name);

    OutputDocument {
        year: post.year,
        markdown: render_markdown(post, &hero_path),
        image_url: post.fields.image_url.clone(),
        source_title: post.record.title.clone(),
        filename,
        image_name,
        hero_path,
    }
}

fn render_markdown(post: &ScheduledPost, hero_path: &str) -> String {
    let display = date::display_date(post.fields.published);
    let title = format!("{}° Martes {}", post.seq, display);

    let mut md = String::new();
    let _ = writeln!(md, "---");
    let _ = writeln!(md, "title: '{}'", title);
    let _ = writeln!(md, "description: '{}'", title);
    let _ = writeln!(md, "pubDate: '{}'", date::frontmatter_date(post.fields.published));
    let _ = writeln!(md, "heroImage: '{}'", hero_path);
    let _ = writeln!(md, "---");
    md.push_str("\n# Asistentes\n\n");

    if post.fields.attendees.is_empty() {
        let _ = writeln!(md, "- {}", ATTENDEES_PENDING);
    } else {
        for attendee in &post.fields.attendees {
            let _ = writeln!(md, "- {}", attendee);
        }
    }

    let _ = write!(
        md,
        "\n# Sede\n\n{}\n\n![blog placeholder]({})",
        post.fields.venue, hero_path
    );

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{venue, ExtractedFields};
    use crate::loader::RawPostRecord;
    use chrono::NaiveDate;

    fn scheduled(seq: u32, attendees: Vec<&str>, venue: &str) -> ScheduledPost {
        ScheduledPost {
            record: RawPostRecord::default(),
            fields: ExtractedFields {
                published: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
                attendees: attendees.into_iter().map(String::from).collect(),
                venue: venue.to_string(),
                image_url: None,
            },
            year: 2024,
            seq,
        }
    }

    #[test]
    fn first_post_of_year_gets_expected_names_and_frontmatter() {
        let doc = render(&scheduled(1, vec!["Ana"], "Bar"), &ImportConfig::default());
        assert_eq!(doc.filename, "2024_1.md");
        assert_eq!(doc.image_name, "2024_1.jpg");
        assert_eq!(doc.hero_path, "/Martes/2024/2024_1.jpg");
        assert!(doc.markdown.contains("title: '1° Martes 5/06/2024'"));
        assert!(doc.markdown.contains("description: '1° Martes 5/06/2024'"));
        assert!(doc.markdown.contains("pubDate: 'Jun 5 2024'"));
        assert!(doc.markdown.contains("heroImage: '/Martes/2024/2024_1.jpg'"));
    }

    #[test]
    fn attendees_render_as_list() {
        let doc = render(
            &scheduled(3, vec!["Ana", "Beto"], "Bar"),
            &ImportConfig::default(),
        );
        assert!(doc.markdown.contains("# Asistentes\n\n- Ana\n- Beto\n"));
    }

    #[test]
    fn empty_extraction_renders_placeholders() {
        let doc = render(&scheduled(2, vec![], venue::VENUE_UNKNOWN), &ImportConfig::default());
        assert!(doc.markdown.contains("# Asistentes\n\n- Por confirmar\n"));
        assert!(doc.markdown.contains("# Sede\n\nPor determinar\n"));
    }

    #[test]
    fn body_ends_with_hero_image_reference() {
        let doc = render(&scheduled(1, vec![], "Bar"), &ImportConfig::default());
        assert!(doc
            .markdown
            .ends_with("![blog placeholder](/Martes/2024/2024_1.jpg)"));
    }
}
