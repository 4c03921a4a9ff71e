use regex::Regex;

use crate::config::ExtractPolicy;

/// First image reference in a post body: an `<img>` src attribute when one
/// exists, else the first bare URL with an image extension. Reachability is
/// not checked here.
pub fn extract(content: &str) -> Option<String> {
    let img_re = Regex::new(r#"(?i)<img[^>]+src=["']([^"']+)["']"#).unwrap();
    if let Some(cap) = img_re.captures(content) {
        return Some(cap[1].to_string());
    }

    let url_re = Regex::new(r#"(?i)https?://[^\s"'<>]+\.(?:jpg|jpeg|png|gif)"#).unwrap();
    url_re.find(content).map(|m| m.as_str().to_string())
}

/// Whether a reference is worth a download attempt. Map-link hosts embed the
/// venue location, not a photo; the hero path is still recorded for them.
pub fn is_fetchable(url: &str, policy: &ExtractPolicy) -> bool {
    !policy.non_image_hosts.iter().any(|host| url.contains(host))
}
