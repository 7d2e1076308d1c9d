use super::record::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default)]
    pub created: DateTime<Utc>,

    #[serde(skip)]
    pub bio: String,
}

impl Author {
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            email: None,
            created: Utc::now(),
            bio: String::new(),
        }
    }

    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub fn with_bio(mut self, bio: String) -> Self {
        self.bio = bio;
        self
    }
}

impl Record for Author {
    const LIST: &'static str = "Author";
    const DIR: &'static str = "authors";

    fn id(&self) -> &str {
        &self.id
    }

    fn slug_source(&self) -> &str {
        &self.name
    }

    fn body(&self) -> &str {
        &self.bio
    }

    fn set_body(&mut self, body: String) {
        self.bio = body;
    }
}
