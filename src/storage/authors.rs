use super::list_store::ListStore;
use crate::{
    config::QuillConfig,
    error::{QuillError, Result},
    model::{Author, Post},
    validation,
};
use std::path::{Path, PathBuf};

/// Partial update of an author. Nested options allow clearing the email.
#[derive(Debug, Clone, Default)]
pub struct AuthorUpdate {
    pub name: Option<String>,
    pub email: Option<Option<String>>,
    pub bio: Option<String>,
}

pub struct AuthorRepository {
    authors: ListStore<Author>,
    posts: ListStore<Post>,
}

impl AuthorRepository {
    pub fn new(config: &QuillConfig, project_root: &Path) -> Self {
        let data_path = config.data_path(project_root);
        let format = config.quill.frontmatter_format();
        Self {
            authors: ListStore::new(
                &data_path,
                config.quill.author_prefix.clone(),
                config.quill.id_length,
                format,
            ),
            posts: ListStore::new(
                &data_path,
                config.quill.post_prefix.clone(),
                config.quill.id_length,
                format,
            ),
        }
    }

    pub fn generate_id(&self) -> String {
        self.authors.generate_id()
    }

    pub fn find_one(&self, id: &str) -> Result<Author> {
        self.authors.get(id)
    }

    pub fn find_optional(&self, id: &str) -> Result<Option<Author>> {
        match self.authors.get(id) {
            Ok(author) => Ok(Some(author)),
            Err(QuillError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn find_many(&self) -> Result<Vec<Author>> {
        let mut authors = self.authors.list()?;
        authors.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(authors)
    }

    pub fn create_one(&self, author: &Author) -> Result<PathBuf> {
        validate(author)?;
        self.authors.create(author)
    }

    pub fn update_one(&self, id: &str, update: AuthorUpdate) -> Result<Author> {
        let mut author = self.authors.get(id)?;
        if let Some(name) = update.name {
            author.name = name;
        }
        if let Some(email) = update.email {
            author.email = email;
        }
        if let Some(bio) = update.bio {
            author.bio = bio;
        }

        validate(&author)?;
        self.authors.write(&author)?;
        Ok(author)
    }

    /// Delete an author. Refused while any post still references them.
    pub fn delete_one(&self, id: &str) -> Result<Author> {
        self.authors.find_file_by_id(id)?;

        let referencing = self.posts.list()?.iter().filter(|p| p.is_by(id)).count();
        if referencing > 0 {
            return Err(QuillError::Validation(format!(
                "Author {} still has {} post(s)",
                id, referencing
            )));
        }
        self.authors.delete(id)
    }
}

fn validate(author: &Author) -> Result<()> {
    validation::validate_name(&author.name)?;
    if let Some(ref email) = author.email {
        validation::validate_email(email)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::PostRepository;
    use tempfile::TempDir;

    fn setup_repo() -> (AuthorRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let repo = AuthorRepository::new(&QuillConfig::default(), temp_dir.path());
        (repo, temp_dir)
    }

    #[test]
    fn test_find_many_sorted_by_name() {
        let (repo, _temp_dir) = setup_repo();
        repo.create_one(&Author::new("author-1".to_string(), "zoe".to_string()))
            .unwrap();
        repo.create_one(&Author::new("author-2".to_string(), "Ada".to_string()))
            .unwrap();

        let names: Vec<_> = repo
            .find_many()
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, ["Ada", "zoe"]);
    }

    #[test]
    fn test_create_rejects_bad_email() {
        let (repo, _temp_dir) = setup_repo();
        let author = Author::new("author-1".to_string(), "Ada".to_string())
            .with_email(Some("not-an-email".to_string()));
        assert!(repo.create_one(&author).is_err());
        assert!(repo.find_optional("author-1").unwrap().is_none());
    }

    #[test]
    fn test_update_clears_email() {
        let (repo, _temp_dir) = setup_repo();
        repo.create_one(
            &Author::new("author-1".to_string(), "Ada".to_string())
                .with_email(Some("ada@example.com".to_string())),
        )
        .unwrap();

        let updated = repo
            .update_one(
                "author-1",
                AuthorUpdate {
                    email: Some(None),
                    ..AuthorUpdate::default()
                },
            )
            .unwrap();
        assert_eq!(updated.email, None);
        assert_eq!(repo.find_one("author-1").unwrap().email, None);
    }

    #[test]
    fn test_delete_refused_while_posts_reference_author() {
        let temp_dir = TempDir::new().unwrap();
        let config = QuillConfig::default();
        let authors = AuthorRepository::new(&config, temp_dir.path());
        let posts = PostRepository::new(&config, temp_dir.path());

        authors
            .create_one(&Author::new("author-1".to_string(), "Ada".to_string()))
            .unwrap();
        posts
            .create_one(
                &Post::new("post-1".to_string(), "Hello".to_string())
                    .with_author(Some("author-1".to_string())),
            )
            .unwrap();

        assert!(authors.delete_one("author-1").is_err());

        posts.delete_one("post-1").unwrap();
        assert_eq!(authors.delete_one("author-1").unwrap().name, "Ada");
    }
}
