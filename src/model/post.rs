use super::record::Record;
use super::types::PostStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,

    #[serde(default)]
    pub status: PostStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub created: DateTime<Utc>,

    #[serde(default)]
    pub updated: DateTime<Utc>,

    #[serde(skip)]
    pub content: String,
}

impl Post {
    pub fn new(id: String, title: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            status: PostStatus::default(),
            author: None,
            publish_date: None,
            created: now,
            updated: now,
            content: String::new(),
        }
    }

    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_author(mut self, author: Option<String>) -> Self {
        self.author = author;
        self
    }

    pub fn with_publish_date(mut self, publish_date: Option<DateTime<Utc>>) -> Self {
        self.publish_date = publish_date;
        self
    }

    pub fn with_content(mut self, content: String) -> Self {
        self.content = content;
        self
    }

    pub fn touch(&mut self) {
        self.updated = Utc::now();
    }

    pub fn is_by(&self, author_id: &str) -> bool {
        self.author.as_deref() == Some(author_id)
    }
}

impl Record for Post {
    const LIST: &'static str = "Post";
    const DIR: &'static str = "posts";

    fn id(&self) -> &str {
        &self.id
    }

    fn slug_source(&self) -> &str {
        &self.title
    }

    fn body(&self) -> &str {
        &self.content
    }

    fn set_body(&mut self, body: String) {
        self.content = body;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_by() {
        let post = Post::new("post-1".to_string(), "Hello".to_string())
            .with_author(Some("author-a".to_string()));
        assert!(post.is_by("author-a"));
        assert!(!post.is_by("author-b"));
    }
}
