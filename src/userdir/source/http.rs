use super::UserSource;
use crate::config::MAX_TIMEOUT_SECS;
use crate::error::{DirectoryError, Result};
use crate::model::User;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

pub struct HttpSource {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Per-request timeout, capped at one day.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout.min(Duration::from_secs(MAX_TIMEOUT_SECS));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn user_url(&self, id: u64) -> String {
        format!("{}/users/{}", self.base_url, id)
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl UserSource for HttpSource {
    fn fetch_all(&self) -> Result<Vec<User>> {
        let url = self.users_url();
        tracing::debug!(%url, "fetching users");

        let response = self.client.get(&url).timeout(self.timeout).send()?;
        if !response.status().is_success() {
            return Err(DirectoryError::Status(response.status().as_u16()));
        }
        let users: Vec<User> = serde_json::from_str(&response.text()?)?;

        tracing::debug!(count = users.len(), "fetched users");
        Ok(users)
    }

    fn fetch_one(&self, id: u64) -> Result<User> {
        let url = self.user_url(id);
        tracing::debug!(%url, "fetching user");

        let response = self.client.get(&url).timeout(self.timeout).send()?;
        match response.status() {
            status if status.is_success() => Ok(serde_json::from_str(&response.text()?)?),
            StatusCode::NOT_FOUND => Err(DirectoryError::NotFound(id)),
            status => Err(DirectoryError::Status(status.as_u16())),
        }
    }

    fn describe(&self) -> String {
        self.users_url()
    }
}
