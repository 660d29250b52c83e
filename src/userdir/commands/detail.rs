use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DirectoryError, Result};
use crate::source::UserSource;

/// Fetches one user for the detail view. A missing user is a normal outcome, reported
/// as a warning with no user attached; other failures propagate.
pub fn run<S: UserSource>(source: &S, id: u64) -> Result<CmdResult> {
    match source.fetch_one(id) {
        Ok(user) => Ok(CmdResult::default().with_user(user)),
        Err(DirectoryError::NotFound(missing)) => {
            tracing::debug!(id = missing, "user not found");
            Ok(CmdResult::default().with_message(CmdMessage::warning("User not found.")))
        }
        Err(e) => Err(e),
    }
}
