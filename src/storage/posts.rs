use super::list_store::ListStore;
use super::query::{FindMany, PostField, PostOrderBy, PostUpdate, PostWhere};
use crate::{
    config::QuillConfig,
    error::{QuillError, Result},
    model::{Author, Post, PostStatus},
    validation,
};
use chrono::{DateTime, Duration, Utc};
use std::path::{Path, PathBuf};

/// Typed read/write API over the post list.
pub struct PostRepository {
    posts: ListStore<Post>,
    authors: ListStore<Author>,
}

impl PostRepository {
    pub fn new(config: &QuillConfig, project_root: &Path) -> Self {
        let data_path = config.data_path(project_root);
        let format = config.quill.frontmatter_format();
        Self {
            posts: ListStore::new(
                &data_path,
                config.quill.post_prefix.clone(),
                config.quill.id_length,
                format,
            ),
            authors: ListStore::new(
                &data_path,
                config.quill.author_prefix.clone(),
                config.quill.id_length,
                format,
            ),
        }
    }

    pub fn generate_id(&self) -> String {
        self.posts.generate_id()
    }

    pub fn count(&self, filter: &PostWhere) -> Result<usize> {
        Ok(self
            .posts
            .list()?
            .iter()
            .filter(|p| filter.matches(p))
            .count())
    }

    pub fn find_many(&self, args: &FindMany) -> Result<Vec<Post>> {
        Ok(args.apply(self.posts.list()?))
    }

    pub fn find_one(&self, id: &str) -> Result<Post> {
        self.posts.get(id)
    }

    pub fn find_optional(&self, id: &str) -> Result<Option<Post>> {
        match self.posts.get(id) {
            Ok(post) => Ok(Some(post)),
            Err(QuillError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn create_one(&self, post: &Post) -> Result<PathBuf> {
        validation::validate_title(&post.title)?;
        self.validate_author(&post.author)?;
        self.posts.create(post)
    }

    /// Apply `update` to the post with `id`. Nothing is written when the post
    /// does not exist or the update is invalid.
    pub fn update_one(&self, id: &str, update: PostUpdate) -> Result<Post> {
        let mut post = self.posts.get(id)?;
        update.apply_to(&mut post);

        validation::validate_title(&post.title)?;
        self.validate_author(&post.author)?;

        post.touch();
        self.posts.write(&post)?;
        Ok(post)
    }

    pub fn delete_one(&self, id: &str) -> Result<Post> {
        self.posts.delete(id)
    }

    fn validate_author(&self, author: &Option<String>) -> Result<()> {
        if let Some(author_id) = author {
            if !self.authors.exists(author_id)? {
                return Err(QuillError::Validation(format!(
                    "Author does not exist: {}",
                    author_id
                )));
            }
        }
        Ok(())
    }
}

/// Author-scoped views and the publish transition.
impl PostRepository {
    pub fn count_by_status(&self, author_id: &str, status: PostStatus) -> Result<usize> {
        self.count(&PostWhere::by_author(author_id).with_status(status))
    }

    /// The author's post with the newest publish date. Undated posts are
    /// only returned when the author has no dated ones.
    pub fn latest_by(&self, author_id: &str) -> Result<Option<Post>> {
        let args = FindMany::new(PostWhere::by_author(author_id))
            .order_by(PostOrderBy::desc(PostField::PublishDate))
            .take(1);
        Ok(self.find_many(&args)?.into_iter().next())
    }

    /// Posts by the author published strictly after `cutoff`, newest first.
    pub fn recent_by(&self, author_id: &str, cutoff: DateTime<Utc>) -> Result<Vec<Post>> {
        let args = FindMany::new(PostWhere::by_author(author_id).published_after(cutoff))
            .order_by(PostOrderBy::desc(PostField::PublishDate));
        self.find_many(&args)
    }

    /// Mark the post published at `at`. Only status and publish date change,
    /// so the stored title and author are not re-validated.
    pub fn publish(&self, id: &str, at: DateTime<Utc>) -> Result<Post> {
        tracing::info!(id = %id, at = %at.to_rfc3339(), "Publishing post");
        let mut post = self.posts.get(id)?;
        PostUpdate::publish(at).apply_to(&mut post);
        post.touch();
        self.posts.write(&post)?;
        Ok(post)
    }
}

/// Start of a look-back window of `seconds` ending at `now`.
pub fn recent_cutoff(now: DateTime<Utc>, seconds: i64) -> DateTime<Utc> {
    now - Duration::seconds(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_repo() -> (PostRepository, ListStore<Author>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config = QuillConfig::default();
        let repo = PostRepository::new(&config, temp_dir.path());
        let authors = ListStore::new(
            &config.data_path(temp_dir.path()),
            "author-".to_string(),
            5,
            config.quill.frontmatter_format(),
        );
        authors
            .create(&Author::new("author-ada".to_string(), "Ada".to_string()))
            .unwrap();
        authors
            .create(&Author::new("author-bob".to_string(), "Bob".to_string()))
            .unwrap();
        (repo, authors, temp_dir)
    }

    fn add_post(
        repo: &PostRepository,
        id: &str,
        author: &str,
        status: PostStatus,
        publish_date: Option<DateTime<Utc>>,
    ) {
        let post = Post::new(id.to_string(), format!("Title {}", id))
            .with_author(Some(author.to_string()))
            .with_status(status)
            .with_publish_date(publish_date);
        repo.create_one(&post).unwrap();
    }

    #[test]
    fn test_count_by_status_scopes_to_author() {
        let (repo, _authors, _temp_dir) = setup_repo();
        let now = Utc::now();
        add_post(&repo, "post-1", "author-ada", PostStatus::Draft, None);
        add_post(&repo, "post-2", "author-ada", PostStatus::Draft, None);
        add_post(&repo, "post-3", "author-ada", PostStatus::Published, Some(now));
        add_post(&repo, "post-4", "author-bob", PostStatus::Draft, None);

        assert_eq!(repo.count_by_status("author-ada", PostStatus::Draft).unwrap(), 2);
        assert_eq!(
            repo.count_by_status("author-ada", PostStatus::Published).unwrap(),
            1
        );
        assert_eq!(repo.count_by_status("author-bob", PostStatus::Published).unwrap(), 0);
    }

    #[test]
    fn test_latest_by_picks_max_publish_date() {
        let (repo, _authors, _temp_dir) = setup_repo();
        let now = Utc::now();
        add_post(&repo, "post-old", "author-ada", PostStatus::Published, Some(now - Duration::days(3)));
        add_post(&repo, "post-new", "author-ada", PostStatus::Published, Some(now));
        add_post(&repo, "post-undated", "author-ada", PostStatus::Draft, None);
        add_post(&repo, "post-bob", "author-bob", PostStatus::Published, Some(now + Duration::days(1)));

        let latest = repo.latest_by("author-ada").unwrap().unwrap();
        assert_eq!(latest.id, "post-new");
    }

    #[test]
    fn test_latest_by_without_posts_is_none() {
        let (repo, _authors, _temp_dir) = setup_repo();
        assert!(repo.latest_by("author-ada").unwrap().is_none());
    }

    #[test]
    fn test_recent_by_excludes_boundary() {
        let (repo, _authors, _temp_dir) = setup_repo();
        let now = Utc::now();
        let cutoff = recent_cutoff(now, 60);
        add_post(&repo, "post-edge", "author-ada", PostStatus::Published, Some(cutoff));
        add_post(&repo, "post-in", "author-ada", PostStatus::Published, Some(now - Duration::seconds(30)));
        add_post(&repo, "post-newest", "author-ada", PostStatus::Published, Some(now));
        add_post(&repo, "post-out", "author-ada", PostStatus::Published, Some(now - Duration::seconds(61)));

        let ids: Vec<_> = repo
            .recent_by("author-ada", cutoff)
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, ["post-newest", "post-in"]);
    }

    #[test]
    fn test_publish_sets_status_and_date() {
        let (repo, _authors, _temp_dir) = setup_repo();
        add_post(&repo, "post-d", "author-ada", PostStatus::Draft, None);

        let at = Utc::now();
        let published = repo.publish("post-d", at).unwrap();
        assert_eq!(published.status, PostStatus::Published);
        assert_eq!(published.publish_date, Some(at));

        let reloaded = repo.find_one("post-d").unwrap();
        assert_eq!(reloaded.status, PostStatus::Published);
        assert_eq!(reloaded.publish_date, Some(at));
    }

    #[test]
    fn test_publish_missing_post_changes_nothing() {
        let (repo, _authors, _temp_dir) = setup_repo();
        add_post(&repo, "post-d", "author-ada", PostStatus::Draft, None);

        let err = repo.publish("post-missing", Utc::now()).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(repo.count(&PostWhere::default()).unwrap(), 1);
        assert_eq!(repo.find_one("post-d").unwrap().status, PostStatus::Draft);
    }

    #[test]
    fn test_publish_ignores_dangling_author() {
        let (repo, _authors, _temp_dir) = setup_repo();
        let orphan = Post::new("post-hand".to_string(), "Hello".to_string())
            .with_author(Some("author-gone".to_string()));
        repo.posts.create(&orphan).unwrap();
        assert_eq!(repo.count_by_status("author-gone", PostStatus::Draft).unwrap(), 1);

        let at = Utc::now();
        let published = repo.publish("post-hand", at).unwrap();
        assert_eq!(published.status, PostStatus::Published);
        assert_eq!(published.author.as_deref(), Some("author-gone"));

        let stored = repo.find_one("post-hand").unwrap();
        assert_eq!(stored.status, PostStatus::Published);
        assert_eq!(stored.publish_date, Some(at));
        assert_eq!(
            repo.count_by_status("author-gone", PostStatus::Published).unwrap(),
            1
        );
    }

    #[test]
    fn test_create_with_unknown_author_fails() {
        let (repo, _authors, _temp_dir) = setup_repo();
        let post = Post::new("post-x".to_string(), "Orphan".to_string())
            .with_author(Some("author-ghost".to_string()));
        let err = repo.create_one(&post).unwrap_err();
        assert!(matches!(err, QuillError::Validation(_)));
    }

    #[test]
    fn test_update_one_rejects_empty_title_without_writing() {
        let (repo, _authors, _temp_dir) = setup_repo();
        add_post(&repo, "post-t", "author-ada", PostStatus::Draft, None);

        let update = PostUpdate {
            title: Some(String::new()),
            ..PostUpdate::default()
        };
        assert!(repo.update_one("post-t", update).is_err());
        assert_eq!(repo.find_one("post-t").unwrap().title, "Title post-t");
    }
}
