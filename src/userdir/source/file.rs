use super::UserSource;
use crate::error::{DirectoryError, Result};
use crate::model::User;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads users from a JSON array on disk, in the same shape the HTTP endpoint serves.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl UserSource for FileSource {
    fn fetch_all(&self) -> Result<Vec<User>> {
        let content = fs::read_to_string(&self.path)?;
        let users: Vec<User> = serde_json::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), count = users.len(), "read users");
        Ok(users)
    }

    fn fetch_one(&self, id: u64) -> Result<User> {
        self.fetch_all()?
            .into_iter()
            .find(|user| user.id == id)
            .ok_or(DirectoryError::NotFound(id))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::numbered_users;

    fn write_users(dir: &Path, count: usize) -> PathBuf {
        let path = dir.join("users.json");
        let json = serde_json::to_string_pretty(&numbered_users(count)).unwrap();
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn reads_all_users_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(write_users(dir.path(), 3));

        let users = source.fetch_all().unwrap();
        let ids: Vec<u64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn finds_one_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(write_users(dir.path(), 4));

        assert_eq!(source.fetch_one(2).unwrap().name, "User 2");
        assert!(matches!(
            source.fetch_one(9),
            Err(DirectoryError::NotFound(9))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("absent.json"));
        assert!(matches!(source.fetch_all(), Err(DirectoryError::Io(_))));
    }

    #[test]
    fn malformed_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        fs::write(&path, "{\"not\": \"a list\"}").unwrap();

        let source = FileSource::new(&path);
        assert!(matches!(
            source.fetch_all(),
            Err(DirectoryError::Serialization(_))
        ));
    }
}
