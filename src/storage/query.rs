//! Where-clauses, ordering and pagination for post queries.

use crate::model::{Post, PostStatus};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Filter over posts. Every field that is set must match.
#[derive(Debug, Clone, Default)]
pub struct PostWhere {
    pub id: Option<String>,
    pub author: Option<String>,
    pub status: Option<PostStatus>,
    pub publish_date_gt: Option<DateTime<Utc>>,
    pub publish_date_lt: Option<DateTime<Utc>>,
    pub search: Option<String>,
}

impl PostWhere {
    pub fn by_author(author_id: impl Into<String>) -> Self {
        Self {
            author: Some(author_id.into()),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn published_after(mut self, cutoff: DateTime<Utc>) -> Self {
        self.publish_date_gt = Some(cutoff);
        self
    }

    pub fn matches(&self, post: &Post) -> bool {
        if let Some(ref id) = self.id {
            if &post.id != id {
                return false;
            }
        }
        if let Some(ref author) = self.author {
            if !post.is_by(author) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if post.status != status {
                return false;
            }
        }
        // Undated posts never satisfy a date bound.
        if let Some(cutoff) = self.publish_date_gt {
            if !post.publish_date.is_some_and(|d| d > cutoff) {
                return false;
            }
        }
        if let Some(cutoff) = self.publish_date_lt {
            if !post.publish_date.is_some_and(|d| d < cutoff) {
                return false;
            }
        }
        if let Some(ref needle) = self.search {
            let needle = needle.to_lowercase();
            if !post.title.to_lowercase().contains(&needle)
                && !post.content.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostField {
    Title,
    PublishDate,
    Created,
    Updated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostOrderBy {
    pub field: PostField,
    pub direction: SortDirection,
}

impl PostOrderBy {
    pub fn desc(field: PostField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    pub fn asc(field: PostField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    /// Missing publish dates compare lowest, so they come first ascending
    /// and last descending.
    pub fn compare(&self, a: &Post, b: &Post) -> Ordering {
        let ordering = match self.field {
            PostField::Title => a.title.cmp(&b.title),
            PostField::PublishDate => a.publish_date.cmp(&b.publish_date),
            PostField::Created => a.created.cmp(&b.created),
            PostField::Updated => a.updated.cmp(&b.updated),
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Arguments of a multi-record read.
#[derive(Debug, Clone, Default)]
pub struct FindMany {
    pub filter: PostWhere,
    pub order_by: Option<PostOrderBy>,
    pub take: Option<usize>,
    pub skip: usize,
}

impl FindMany {
    pub fn new(filter: PostWhere) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    pub fn order_by(mut self, order_by: PostOrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    pub fn take(mut self, take: usize) -> Self {
        self.take = Some(take);
        self
    }

    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// Filter, sort and page `posts`. Posts arrive ordered by ID, and the
    /// sort is stable, so ties keep ID order.
    pub fn apply(&self, posts: Vec<Post>) -> Vec<Post> {
        let mut posts: Vec<Post> = posts
            .into_iter()
            .filter(|p| self.filter.matches(p))
            .collect();
        if let Some(order_by) = self.order_by {
            posts.sort_by(|a, b| order_by.compare(a, b));
        }
        posts
            .into_iter()
            .skip(self.skip)
            .take(self.take.unwrap_or(usize::MAX))
            .collect()
    }
}

/// Partial update of a post. `None` leaves the field untouched; nested
/// options allow clearing nullable fields.
#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub status: Option<PostStatus>,
    pub author: Option<Option<String>>,
    pub publish_date: Option<Option<DateTime<Utc>>>,
    pub content: Option<String>,
}

impl PostUpdate {
    pub fn publish(at: DateTime<Utc>) -> Self {
        Self {
            status: Some(PostStatus::Published),
            publish_date: Some(Some(at)),
            ..Self::default()
        }
    }

    pub fn apply_to(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(status) = self.status {
            post.status = status;
        }
        if let Some(author) = self.author {
            post.author = author;
        }
        if let Some(publish_date) = self.publish_date {
            post.publish_date = publish_date;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
    }
}
