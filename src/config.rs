use std::path::PathBuf;

/// Where the importer writes its output. Defaults match the live site
/// layout; tests point both roots at temp directories.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Root of the markdown content tree (year subdirs are created under it).
    pub content_root: PathBuf,
    /// Root of the public asset tree for downloaded hero images.
    pub asset_root: PathBuf,
    pub policy: ExtractPolicy,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from("./src/content/blog/Martes"),
            asset_root: PathBuf::from("./public/Martes"),
            policy: ExtractPolicy::default(),
        }
    }
}

impl ImportConfig {
    /// URL-path prefix the site serves the asset root under, e.g. "/Martes".
    pub fn public_prefix(&self) -> String {
        let name = self
            .asset_root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("/{}", name)
    }
}

/// Tuning knobs for the text heuristics. The defaults are calibrated to one
/// source dataset (a Spanish-language weekly-meeting blog); other exports
/// will want different labels.
#[derive(Debug, Clone)]
pub struct ExtractPolicy {
    /// Lines at or above this length are never attendee names.
    pub max_name_len: usize,
    /// Label introducing the attendee section, singular/plural via regex.
    pub attendee_label: String,
    /// Labels that terminate the attendee section when scanning free text.
    pub section_breaks: Vec<String>,
    /// Labels that introduce the venue line.
    pub venue_labels: Vec<String>,
    /// URL substrings that identify non-image hosts (map links); references
    /// to these are recorded but never fetched.
    pub non_image_hosts: Vec<String>,
}

impl Default for ExtractPolicy {
    fn default() -> Self {
        Self {
            max_name_len: 50,
            attendee_label: "asistentes?".to_string(),
            section_breaks: vec![
                "sede".to_string(),
                "lugar".to_string(),
                "local".to_string(),
                "foto".to_string(),
            ],
            venue_labels: vec![
                "sede".to_string(),
                "lugar".to_string(),
                "local".to_string(),
            ],
            non_image_hosts: vec!["maps.google".to_string()],
        }
    }
}

impl ExtractPolicy {
    /// Alternation fragment for the section-break labels, e.g. "sede|lugar|local|foto".
    pub fn break_alternation(&self) -> String {
        self.section_breaks.join("|")
    }

    pub fn venue_alternation(&self) -> String {
        self.venue_labels.join("|")
    }
}
