use serde::{Serialize, de::DeserializeOwned};

/// A record persisted as one markdown file: frontmatter holds the fields,
/// the markdown body holds the long-form text.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Name used in errors and log lines.
    const LIST: &'static str;
    /// Subdirectory of the data path holding this list.
    const DIR: &'static str;

    fn id(&self) -> &str;

    /// Text the filename slug is derived from.
    fn slug_source(&self) -> &str;

    fn body(&self) -> &str;

    fn set_body(&mut self, body: String);
}
