//! File-based storage layer for quill.
//!
//! Every record is a markdown file with frontmatter, grouped per list:
//! posts live in `.quill/posts/`, authors in `.quill/authors/`.
//!
//! ## File Format
//!
//! ```markdown
//! +++
//! id = "post-k3x9a"
//! title = "Shipping the new editor"
//! status = "published"
//! author = "author-7qp2d"
//! publish_date = "2024-01-15T14:20:00Z"
//! created = "2024-01-15T10:30:00Z"
//! updated = "2024-01-15T14:20:00Z"
//! +++
//!
//! Post content in markdown.
//! ```
//!
//! YAML frontmatter between `---` delimiters is read as well.
//!
//! ## Components
//!
//! - [`PostRepository`]: count / find / update API over posts
//! - [`AuthorRepository`]: CRUD operations for authors
//! - [`PostWhere`], [`FindMany`], [`PostUpdate`]: query and update arguments

mod authors;
mod list_store;
mod markdown;
mod posts;
mod query;

pub use authors::{AuthorRepository, AuthorUpdate};
pub use list_store::ListStore;
pub use markdown::{
    FrontmatterFormat, detect_format, parse_markdown, parse_markdown_with_format,
    render_markdown_with_format,
};
pub use posts::{PostRepository, recent_cutoff};
pub use query::{FindMany, PostField, PostOrderBy, PostUpdate, PostWhere, SortDirection};
