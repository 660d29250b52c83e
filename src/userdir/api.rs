//! # API Facade
//!
//! The API layer is the single entry point for userdir operations, whatever the UI.
//! Unlike a request/response facade it is **stateful**: [`DirectoryApi`] owns one
//! [`ListViewModel`] for the lifetime of a session, so an interactive client can load
//! once and then search and page without refetching.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the command layer (`commands/*.rs`)
//! - **Owns** the view-model and the [`LoadState`] beside it
//! - **Catches loader failures**: they are logged, recorded in [`LoadState::Failed`]
//!   and returned as error messages, never as `Err`. The view-model keeps whatever it
//!   held before.
//! - **Returns structured types** (`CmdResult`), never strings
//!
//! ## Generic Over UserSource
//!
//! `DirectoryApi<S: UserSource>` works with any source:
//! - Production: `DirectoryApi<HttpSource>`
//! - Offline / fixtures: `DirectoryApi<FileSource>`
//! - Testing: `DirectoryApi<InMemorySource>`

use crate::commands;
use crate::commands::browse::BrowseAction;
use crate::commands::stats::DirectoryStats;
use crate::error::Result;
use crate::model::User;
use crate::source::UserSource;
use crate::viewmodel::{ListViewModel, PageSize};
use std::path::{Path, PathBuf};

/// Loader status, kept beside the view-model rather than inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No fetch has completed yet
    Loading,
    Ready,
    Failed,
}

pub struct DirectoryApi<S: UserSource> {
    source: S,
    view: ListViewModel<User>,
    load_state: LoadState,
    config_dir: PathBuf,
}

impl<S: UserSource> DirectoryApi<S> {
    pub fn new(source: S, page_size: PageSize, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            view: ListViewModel::new(page_size),
            load_state: LoadState::Loading,
            config_dir: config_dir.into(),
        }
    }

    /// Fetches all users into the view. On failure the view keeps its previous records.
    pub fn refresh(&mut self) -> CmdResult {
        match commands::list::load(&self.source, &mut self.view) {
            Ok(count) => {
                tracing::info!(count, source = %self.source.describe(), "users loaded");
                self.load_state = LoadState::Ready;
                commands::list::run(&self.view)
            }
            Err(e) => {
                tracing::error!(error = %e, source = %self.source.describe(), "failed to load users");
                self.load_state = LoadState::Failed;
                commands::list::run(&self.view)
                    .with_message(CmdMessage::error(format!("Error fetching users: {}", e)))
            }
        }
    }

    pub fn search(&mut self, query: impl Into<String>) -> CmdResult {
        self.view.set_query(query);
        commands::list::run(&self.view)
    }

    pub fn go_to_page(&mut self, page: i64) -> CmdResult {
        self.view.set_page(page);
        commands::list::run(&self.view)
    }

    pub fn next_page(&mut self) -> CmdResult {
        self.view.next_page();
        commands::list::run(&self.view)
    }

    pub fn previous_page(&mut self) -> CmdResult {
        self.view.previous_page();
        commands::list::run(&self.view)
    }

    pub fn current_page(&self) -> CmdResult {
        commands::list::run(&self.view)
    }

    /// Fetches one user for the detail view. Independent of the list view's state.
    pub fn user_detail(&self, id: u64) -> CmdResult {
        match commands::detail::run(&self.source, id) {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(error = %e, id, "failed to fetch user");
                CmdResult::default()
                    .with_message(CmdMessage::error(format!("Error fetching user: {}", e)))
            }
        }
    }

    /// Statistics over the full loaded set, ignoring the query.
    pub fn stats(&self) -> CmdResult {
        CmdResult::default().with_stats(DirectoryStats::from_users(self.view.all_records()))
    }

    /// Applies one interactive action. `Help` and `Quit` belong to the client and
    /// produce an empty result here.
    pub fn dispatch(&mut self, action: BrowseAction) -> CmdResult {
        tracing::debug!(?action, "browse action");
        match action {
            BrowseAction::Show => self.current_page(),
            BrowseAction::Search(query) => self.search(query),
            BrowseAction::Next => self.next_page(),
            BrowseAction::Previous => self.previous_page(),
            BrowseAction::GoTo(page) => self.go_to_page(page),
            BrowseAction::View(id) => self.user_detail(id),
            BrowseAction::Reload => self.refresh(),
            BrowseAction::Help | BrowseAction::Quit => CmdResult::default(),
        }
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn view(&self) -> &ListViewModel<User> {
        &self.view
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, UserPage};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{numbered_users, user};
    use crate::source::memory::InMemorySource;

    fn api_with(users: Vec<User>) -> DirectoryApi<InMemorySource> {
        DirectoryApi::new(InMemorySource::new(users), PageSize::DEFAULT, "unused")
    }

    #[test]
    fn starts_loading_and_empty() {
        let api = api_with(numbered_users(3));
        assert_eq!(api.load_state(), LoadState::Loading);
        assert!(api.view().is_empty());
    }

    #[test]
    fn refresh_loads_first_page() {
        let mut api = api_with(numbered_users(12));
        let result = api.refresh();

        assert_eq!(api.load_state(), LoadState::Ready);
        let page = result.page.unwrap();
        assert_eq!(page.users.len(), 5);
        assert_eq!(page.window.total_pages, 3);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn failed_refresh_is_flagged_not_raised() {
        let mut source = InMemorySource::new(numbered_users(12));
        source.fail_with("dns failure");
        let mut api = DirectoryApi::new(source, PageSize::DEFAULT, "unused");

        let result = api.refresh();
        assert_eq!(api.load_state(), LoadState::Failed);
        assert!(result.has_errors());
        assert!(result.messages[0].content.contains("dns failure"));
        assert!(result.page.unwrap().users.is_empty());
    }

    #[test]
    fn search_then_page() {
        let mut api = api_with(vec![
            user(1, "Leanne Graham"),
            user(2, "Ervin Howell"),
            user(3, "Clementine Bauch"),
            user(4, "Patricia Lebsack"),
        ]);
        api.refresh();

        let page = api.search("NE").page.unwrap();
        let names: Vec<&str> = page.users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Leanne Graham", "Clementine Bauch"]);

        let page = api.go_to_page(4).page.unwrap();
        assert_eq!(page.window.page, 1);
    }

    #[test]
    fn dispatch_steps_pages() {
        let mut api = api_with(numbered_users(12));
        api.refresh();

        api.dispatch(BrowseAction::Next);
        api.dispatch(BrowseAction::Next);
        let page = api.dispatch(BrowseAction::Next).page.unwrap();
        assert_eq!(page.window.page, 3);

        let page = api.dispatch(BrowseAction::Previous).page.unwrap();
        assert_eq!(page.window.page, 2);

        let page = api.dispatch(BrowseAction::Search("User 1".into())).page.unwrap();
        assert_eq!(page.window.page, 1);
        assert_eq!(page.window.filtered_len, 4);
    }

    #[test]
    fn reload_resets_to_first_page() {
        let mut api = api_with(numbered_users(15));
        api.refresh();
        api.go_to_page(3);

        let page = api.dispatch(BrowseAction::Reload).page.unwrap();
        assert_eq!(page.window.page, 1);
    }

    #[test]
    fn user_detail_not_found_is_a_message() {
        let api = api_with(numbered_users(2));
        let result = api.user_detail(77);
        assert!(result.user.is_none());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn user_detail_failure_is_an_error_message() {
        let mut source = InMemorySource::new(numbered_users(2));
        source.fail_with("offline");
        let api = DirectoryApi::new(source, PageSize::DEFAULT, "unused");

        let result = api.user_detail(1);
        assert!(result.user.is_none());
        assert!(result.has_errors());
    }

    #[test]
    fn stats_cover_all_loaded_users() {
        let mut api = api_with(numbered_users(10));
        api.refresh();
        api.search("User 1");

        let stats = api.stats().stats.unwrap();
        assert_eq!(stats.total, 10);
        assert_eq!(stats.active_estimate, 7);
    }
}
