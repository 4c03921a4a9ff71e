use regex::Regex;

use super::html;
use crate::config::ExtractPolicy;

/// Pull the attendee list out of a post body. Two tiers, first hit wins:
/// real `<li>` markup, then a labeled free-text section. Returning nothing
/// is valid; the renderer substitutes a placeholder line.
pub fn extract(content: &str, policy: &ExtractPolicy) -> Vec<String> {
    let from_markup = list_markup_names(content, policy);
    if !from_markup.is_empty() {
        return from_markup;
    }
    labeled_section_names(content, policy)
}

/// Tier 1: inner text of every `<li>`, tags stripped.
fn list_markup_names(content: &str, policy: &ExtractPolicy) -> Vec<String> {
    let li_re = Regex::new(r"(?is)<li[^>]*>(.*?)</li>").unwrap();

    li_re
        .captures_iter(content)
        .map(|cap| html::strip_tags(&cap[1]).trim().to_string())
        .filter(|name| !name.is_empty() && name.chars().count() < policy.max_name_len)
        .collect()
}

/// Tier 2: flatten the body, find the "asistentes" label, take everything up
/// to the next section label (or end of text) and keep the plausible lines.
fn labeled_section_names(content: &str, policy: &ExtractPolicy) -> Vec<String> {
    let text = html::to_plain_text(content);

    let label_re = Regex::new(&format!(r"(?i){}:?", policy.attendee_label)).unwrap();
    let Some(label) = label_re.find(&text) else {
        return Vec::new();
    };

    // The regex crate has no lookahead; bound the section by searching for
    // the first break label after the attendee label instead.
    let rest = &text[label.end()..];
    let break_re = Regex::new(&format!(r"(?i){}", policy.break_alternation())).unwrap();
    let section = match break_re.find(rest) {
        Some(brk) => &rest[..brk.start()],
        None => rest,
    };

    let bullet_re = Regex::new(r"^[-*•]\s*").unwrap();
    let header_re =
        Regex::new(&format!(r"(?i)^({})s?:?$", policy.break_alternation())).unwrap();
    let url_re = Regex::new(r"https?://").unwrap();

    section
        .lines()
        .map(|line| bullet_re.replace(line.trim(), "").trim().to_string())
        .filter(|line| {
            !line.is_empty()
                && line.chars().count() < policy.max_name_len
                && !header_re.is_match(line)
                && !url_re.is_match(line)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(content: &str) -> Vec<String> {
        extract(content, &ExtractPolicy::default())
    }

    #[test]
    fn list_markup_names_are_stripped_and_trimmed() {
        let body = "<ul><li> Ana </li><li><strong>Beto</strong></li></ul>";
        assert_eq!(names(body), vec!["Ana", "Beto"]);
    }

    #[test]
    fn list_markup_suppresses_labeled_section() {
        let body = "<ul><li>Ana</li></ul><p>Asistentes:<br />- Carla<br />- Dario</p>";
        assert_eq!(names(body), vec!["Ana"]);
    }

    #[test]
    fn labeled_section_with_bullets() {
        let body = "<p>Asistentes:<br />- Carla<br />* Dario<br />• Elena</p><p>Sede: Bar</p>";
        assert_eq!(names(body), vec!["Carla", "Dario", "Elena"]);
    }

    #[test]
    fn section_is_bounded_by_venue_label() {
        let body = "<p>Asistentes:<br />Carla</p><p>Lugar: Bar Imaginario<br />Fulano</p>";
        assert_eq!(names(body), vec!["Carla"]);
    }

    #[test]
    fn urls_and_overlong_lines_are_rejected() {
        let long = "x".repeat(60);
        let body = format!(
            "<p>Asistentes:<br />Carla<br />https://example.com/foo<br />{}</p>",
            long
        );
        assert_eq!(names(&body), vec!["Carla"]);
    }

    #[test]
    fn overlong_list_items_are_rejected_too() {
        let body = format!("<ul><li>Ana</li><li>{}</li></ul>", "x".repeat(60));
        assert_eq!(names(&body), vec!["Ana"]);
    }

    #[test]
    fn bare_section_headers_are_not_names() {
        let body = "<p>Asistentes:<br />Carla<br />Fotos:</p>";
        assert_eq!(names(body), vec!["Carla"]);
    }

    #[test]
    fn no_attendees_is_a_valid_result() {
        assert!(names("<p>Nada que ver aquí.</p>").is_empty());
        assert!(names("").is_empty());
    }

    #[test]
    fn extraction_is_deterministic() {
        let body = "<p>Asistentes:<br />- Carla<br />- Dario</p>";
        assert_eq!(names(body), names(body));
    }
}
