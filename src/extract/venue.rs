use regex::Regex;

use super::html;
use crate::config::ExtractPolicy;

/// Placeholder for posts whose venue was never written down.
pub const VENUE_UNKNOWN: &str = "Por determinar";

/// Find the venue line in a post body: first "Sede:"/"Lugar:"/"Local:" hit,
/// rest of that line, with map links and parenthetical asides removed.
/// Always returns either a non-empty trimmed string or the sentinel.
pub fn extract(content: &str, policy: &ExtractPolicy) -> String {
    let text = html::to_plain_text(content);

    let venue_re = Regex::new(&format!(
        r"(?i)(?:{}):?\s*([^\n]+)",
        policy.venue_alternation()
    ))
    .unwrap();
    let Some(cap) = venue_re.captures(&text) else {
        return VENUE_UNKNOWN.to_string();
    };

    let url_re = Regex::new(r"https?://\S+").unwrap();
    let paren_re = Regex::new(r"\([^)]*\)").unwrap();

    let venue = url_re.replace_all(&cap[1], "");
    let venue = paren_re.replace_all(&venue, "");
    let venue = venue.trim();

    if venue.is_empty() {
        VENUE_UNKNOWN.to_string()
    } else {
        venue.to_string()
    }
}
