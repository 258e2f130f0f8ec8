use std::collections::HashMap;
use std::sync::Arc;

pub type DynLocalizer = Arc<dyn Localizer + Send + Sync>;

/// Maps a message key to a template in the deployment's configured language.
/// A `None` makes the caller fall back to its fixed default template; a
/// lookup miss never fails a response.
pub trait Localizer: Send + Sync {
    fn localize(&self, key: &str) -> Option<String>;
}

/// In-memory template table. Tables are keyed by locale; an unknown locale
/// falls back to English.
#[derive(Debug, Clone)]
pub struct StaticLocalizer {
    messages: HashMap<&'static str, &'static str>,
}

const LOCALES: &[(&str, &[(&str, &str)])] = &[("en", EN_MESSAGES)];

const EN_MESSAGES: &[(&str, &str)] = &[
    ("error.create", "Failed to create {subject}"),
    ("error.update", "Failed to update {subject}"),
    ("error.delete", "Failed to delete {subject}"),
    ("error.not_found", "The requested {subject} was not found"),
    ("error.existed", "{subject} already exists"),
    ("error.validation", "One or more fields for {subject} are invalid"),
    (
        "error.unknown",
        "An unexpected error occurred while processing {subject}",
    ),
    ("success.create", "{subject} created successfully"),
    ("success.update", "{subject} updated successfully"),
    ("success.delete", "{subject} deleted successfully"),
    ("success.get", "{subject} retrieved successfully"),
];

impl StaticLocalizer {
    pub fn new(locale: &str) -> Self {
        let table = LOCALES
            .iter()
            .find(|(name, _)| *name == locale)
            .map(|(_, table)| *table)
            .unwrap_or(EN_MESSAGES);

        Self {
            messages: table.iter().copied().collect(),
        }
    }
}

impl Default for StaticLocalizer {
    fn default() -> Self {
        Self::new("en")
    }
}

impl Localizer for StaticLocalizer {
    fn localize(&self, key: &str) -> Option<String> {
        self.messages.get(key).map(|template| template.to_string())
    }
}
