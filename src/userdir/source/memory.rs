use super::UserSource;
use crate::error::{DirectoryError, Result};
use crate::model::User;

/// In-memory source for testing and development.
#[derive(Default)]
pub struct InMemorySource {
    users: Vec<User>,
    failure: Option<String>,
}

impl InMemorySource {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users,
            failure: None,
        }
    }

    /// Every fetch fails with an `Api` error carrying `message` until [`Self::recover`].
    pub fn fail_with(&mut self, message: impl Into<String>) {
        self.failure = Some(message.into());
    }

    pub fn recover(&mut self) {
        self.failure = None;
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(message) => Err(DirectoryError::Api(message.clone())),
            None => Ok(()),
        }
    }
}

impl UserSource for InMemorySource {
    fn fetch_all(&self) -> Result<Vec<User>> {
        self.check()?;
        Ok(self.users.clone())
    }

    fn fetch_one(&self, id: u64) -> Result<User> {
        self.check()?;
        self.users
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or(DirectoryError::NotFound(id))
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
