use regex::Regex;

/// Flatten HTML-bearing body text for the line-oriented heuristics: `<br>`
/// and paragraph ends become newlines, every other tag is dropped. Good
/// enough for export bodies; this is not an HTML parser.
pub fn to_plain_text(content: &str) -> String {
    let br_re = Regex::new(r"(?i)<br\s*/?>\s*").unwrap();
    let p_re = Regex::new(r"(?i)</p>\s*").unwrap();
    let tag_re = Regex::new(r"<[^>]*>").unwrap();

    let text = br_re.replace_all(content, "\n");
    let text = p_re.replace_all(&text, "\n");
    tag_re.replace_all(&text, "").trim().to_string()
}

/// Strip tags without touching line structure.
pub fn strip_tags(fragment: &str) -> String {
    let tag_re = Regex::new(r"<[^>]*>").unwrap();
    tag_re.replace_all(fragment, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breaks_and_paragraphs_become_newlines() {
        let text = to_plain_text("<p>uno<br />dos</p><p>tres</p>");
        assert_eq!(text, "uno\ndos\ntres");
    }

    #[test]
    fn unknown_tags_are_dropped_silently() {
        let text = to_plain_text("<div class=\"x\"><span>hola</span></div>");
        assert_eq!(text, "hola");
    }
}
