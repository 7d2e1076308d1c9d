use super::markdown::{
    FrontmatterFormat, detect_format, parse_markdown, render_markdown_with_format,
};
use crate::{
    error::{QuillError, Result},
    model::Record,
    validation,
};
use slug::slugify;
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const ID_ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

const MAX_SLUG_LENGTH: usize = 50;

/// File-backed storage for one list: every record is a markdown file named
/// `<id>--<slug>.md` inside the list directory.
pub struct ListStore<R: Record> {
    dir: PathBuf,
    prefix: String,
    id_length: usize,
    frontmatter_format: FrontmatterFormat,
    _record: PhantomData<R>,
}

impl<R: Record> ListStore<R> {
    pub fn new(
        data_path: &Path,
        prefix: String,
        id_length: usize,
        frontmatter_format: FrontmatterFormat,
    ) -> Self {
        Self {
            dir: data_path.join(R::DIR),
            prefix,
            id_length,
            frontmatter_format,
            _record: PhantomData,
        }
    }

    #[cfg(test)]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn generate_id(&self) -> String {
        let suffix = nanoid::format(nanoid::rngs::default, &ID_ALPHABET, self.id_length);
        format!("{}{}", self.prefix, suffix)
    }

    pub fn generate_filename(&self, record: &R) -> String {
        let mut slug = slugify(record.slug_source());
        slug.truncate(MAX_SLUG_LENGTH);
        let slug = slug.trim_end_matches('-');
        format!("{}--{}.md", record.id(), slug)
    }

    pub fn create(&self, record: &R) -> Result<PathBuf> {
        tracing::info!(list = R::LIST, id = %record.id(), "Creating record");

        validation::validate_id(record.id())?;
        validation::validate_body(record.body())?;

        if self.exists(record.id())? {
            return Err(QuillError::Storage(format!(
                "{} already exists: {}",
                R::LIST,
                record.id()
            )));
        }

        std::fs::create_dir_all(&self.dir)?;
        let file_path = self.dir.join(self.generate_filename(record));
        let content = render_markdown_with_format(record, self.frontmatter_format)?;
        atomic_write(&file_path, &content)?;

        Ok(file_path)
    }

    pub fn get(&self, id: &str) -> Result<R> {
        let file_path = self.find_file_by_id(id)?;
        let content = std::fs::read_to_string(&file_path)?;
        parse_markdown(&content)
    }

    pub fn exists(&self, id: &str) -> Result<bool> {
        match self.find_file_by_id(id) {
            Ok(_) => Ok(true),
            Err(QuillError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Overwrite an existing record. The file is renamed when its slug
    /// changes and keeps the frontmatter format it was written in.
    pub fn write(&self, record: &R) -> Result<PathBuf> {
        tracing::info!(list = R::LIST, id = %record.id(), "Updating record");

        validation::validate_body(record.body())?;

        let old_path = self.find_file_by_id(record.id())?;
        let new_path = self.dir.join(self.generate_filename(record));

        let original_content = std::fs::read_to_string(&old_path)?;
        let format = detect_format(&original_content).unwrap_or(self.frontmatter_format);
        let content = render_markdown_with_format(record, format)?;

        atomic_write(&new_path, &content)?;
        if old_path != new_path {
            std::fs::remove_file(&old_path)?;
        }

        Ok(new_path)
    }

    pub fn delete(&self, id: &str) -> Result<R> {
        tracing::info!(list = R::LIST, id = %id, "Deleting record");

        let file_path = self.find_file_by_id(id)?;
        let content = std::fs::read_to_string(&file_path)?;
        let record = parse_markdown(&content)?;
        std::fs::remove_file(&file_path)?;
        Ok(record)
    }

    /// All records in the list, ordered by ID.
    pub fn list(&self) -> Result<Vec<R>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().map(|e| e != "md").unwrap_or(true) {
                continue;
            }
            match std::fs::read_to_string(&path) {
                Ok(content) => match parse_markdown::<R>(&content) {
                    Ok(record) => records.push(record),
                    Err(e) => tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Failed to parse record file"
                    ),
                },
                Err(e) => tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to read record file"
                ),
            }
        }

        records.sort_by(|a, b| a.id().cmp(b.id()));
        // A rename interrupted between write and remove leaves two files
        records.dedup_by(|a, b| {
            let dup = a.id() == b.id();
            if dup {
                tracing::warn!(list = R::LIST, id = %a.id(), "Duplicate record files");
            }
            dup
        });
        Ok(records)
    }

    pub fn find_file_by_id(&self, id: &str) -> Result<PathBuf> {
        validation::validate_id(id)?;

        let needle = format!("{}--", id);
        if self.dir.exists() {
            for entry in std::fs::read_dir(&self.dir)? {
                let path = entry?.path();
                if !path.is_file() {
                    continue;
                }
                let Some(filename) = path.file_name() else {
                    continue;
                };
                if filename.to_string_lossy().starts_with(&needle) {
                    return Ok(path);
                }
            }
        }

        Err(QuillError::not_found(R::LIST, id))
    }
}

/// Write via a temp file in the target directory and rename it into place,
/// so readers never observe a partial file.
fn atomic_write(target_path: &Path, content: &str) -> Result<()> {
    let target_dir = target_path
        .parent()
        .ok_or_else(|| QuillError::Storage("Target path has no parent directory".to_string()))?;

    let mut temp_file = NamedTempFile::new_in(target_dir)
        .map_err(|e| QuillError::Storage(format!("Failed to create temp file: {}", e)))?;
    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| QuillError::Storage(format!("Failed to write to temp file: {}", e)))?;
    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| QuillError::Storage(format!("Failed to sync temp file: {}", e)))?;
    temp_file
        .persist(target_path)
        .map_err(|e| QuillError::Storage(format!("Failed to persist temp file: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Author;
    use tempfile::TempDir;

    fn setup_store() -> (ListStore<Author>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = ListStore::new(
            temp_dir.path(),
            "author-".to_string(),
            5,
            FrontmatterFormat::Toml,
        );
        (store, temp_dir)
    }

    #[test]
    fn test_generate_id_uses_prefix_and_length() {
        let (store, _temp_dir) = setup_store();
        let id = store.generate_id();
        assert!(id.starts_with("author-"));
        assert_eq!(id.len(), "author-".len() + 5);
    }

    #[test]
    fn test_create_get_roundtrip() {
        let (store, _temp_dir) = setup_store();
        let author = Author::new("author-ada01".to_string(), "Ada Lovelace".to_string())
            .with_bio("Analyst.".to_string());

        let path = store.create(&author).unwrap();
        assert!(path.ends_with("author-ada01--ada-lovelace.md"));

        let loaded = store.get("author-ada01").unwrap();
        assert_eq!(loaded.name, "Ada Lovelace");
        assert_eq!(loaded.bio, "Analyst.");
    }

    #[test]
    fn test_create_duplicate_id_fails() {
        let (store, _temp_dir) = setup_store();
        let author = Author::new("author-dup".to_string(), "First".to_string());
        store.create(&author).unwrap();

        let again = Author::new("author-dup".to_string(), "Second".to_string());
        assert!(store.create(&again).is_err());
    }

    #[test]
    fn test_write_renames_on_slug_change() {
        let (store, _temp_dir) = setup_store();
        let mut author = Author::new("author-r1".to_string(), "Old Name".to_string());
        let old_path = store.create(&author).unwrap();

        author.name = "New Name".to_string();
        let new_path = store.write(&author).unwrap();

        assert!(!old_path.exists());
        assert!(new_path.ends_with("author-r1--new-name.md"));
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_list_collapses_duplicate_files_for_one_id() {
        let (store, _temp_dir) = setup_store();
        let author = Author::new("author-d1".to_string(), "Old Name".to_string());
        let path = store.create(&author).unwrap();
        std::fs::copy(&path, store.dir().join("author-d1--new-name.md")).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "author-d1");
    }

    #[test]
    fn test_id_prefix_does_not_match_longer_ids() {
        let (store, _temp_dir) = setup_store();
        store
            .create(&Author::new("author-a10".to_string(), "Ten".to_string()))
            .unwrap();

        let err = store.get("author-a1").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_list_skips_unparseable_files() {
        let (store, _temp_dir) = setup_store();
        store
            .create(&Author::new("author-ok".to_string(), "Fine".to_string()))
            .unwrap();
        std::fs::write(store.dir().join("author-bad--broken.md"), "not a record").unwrap();

        let authors = store.list().unwrap();
        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0].id, "author-ok");
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let (store, _temp_dir) = setup_store();
        assert!(store.delete("author-none").unwrap_err().is_not_found());
    }

    #[test]
    fn test_rejects_traversal_ids() {
        let (store, _temp_dir) = setup_store();
        let err = store.get("../secrets").unwrap_err();
        assert!(matches!(err, QuillError::Validation(_)));
    }
}
