//! # Source Layer
//!
//! This module defines where user records come from. The [`UserSource`] trait lets the
//! rest of the crate work against any backend.
//!
//! ## Implementations
//!
//! - [`http::HttpSource`]: Production source
//!   - Blocking `GET {base_url}/users` and `GET {base_url}/users/{id}`
//!   - HTTP 404 on a single user becomes [`DirectoryError::NotFound`]
//!
//! - [`file::FileSource`]: A JSON array of users on disk
//!   - Offline use and end-to-end test fixtures
//!
//! - [`memory::InMemorySource`]: In-memory records for testing
//!   - Can be switched into a failing mode to exercise error paths
//!
//! Sources never touch view state. A failed fetch is reported to the caller, which
//! decides what the user sees (see [`crate::api`]).
//!
//! [`DirectoryError::NotFound`]: crate::error::DirectoryError::NotFound

use crate::error::Result;
use crate::model::User;

pub mod file;
pub mod http;
pub mod memory;

/// Abstract interface for retrieving user records.
pub trait UserSource {
    /// Fetch the full user list in source order
    fn fetch_all(&self) -> Result<Vec<User>>;

    /// Fetch a single user by id
    fn fetch_one(&self, id: u64) -> Result<User>;

    /// Human-readable location, used in log lines
    fn describe(&self) -> String;
}

impl<S: UserSource + ?Sized> UserSource for Box<S> {
    fn fetch_all(&self) -> Result<Vec<User>> {
        (**self).fetch_all()
    }

    fn fetch_one(&self, id: u64) -> Result<User> {
        (**self).fetch_one(id)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
