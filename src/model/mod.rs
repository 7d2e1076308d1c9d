//! Data models for quill.
//!
//! - [`Post`]: a blog post owned by an author
//! - [`Author`]: a post author
//! - [`PostStatus`]: publication state (draft, published)
//! - [`Record`]: shared behaviour of everything stored as a markdown file

mod author;
mod post;
mod record;
mod types;

pub use author::Author;
pub use post::Post;
pub use record::Record;
pub use types::PostStatus;
