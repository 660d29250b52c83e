use crate::commands::{CmdResult, UserPage};
use crate::error::Result;
use crate::model::User;
use crate::source::UserSource;
use crate::viewmodel::ListViewModel;

/// Fetches the full user list and hands it to the view. The view is untouched on error.
pub fn load<S: UserSource>(source: &S, view: &mut ListViewModel<User>) -> Result<usize> {
    let users = source.fetch_all()?;
    let count = users.len();
    view.load(users);
    Ok(count)
}

pub fn snapshot(view: &ListViewModel<User>) -> UserPage {
    UserPage {
        users: view.visible_page().into_iter().cloned().collect(),
        query: view.query().to_string(),
        window: view.window(),
        page_numbers: view.page_numbers().collect(),
        has_previous: view.has_previous(),
        has_next: view.has_next(),
        shows_pagination: view.shows_pagination(),
    }
}

pub fn run(view: &ListViewModel<User>) -> CmdResult {
    CmdResult::default().with_page(snapshot(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DirectoryError;
    use crate::model::fixtures::{numbered_users, user};
    use crate::source::memory::InMemorySource;

    #[test]
    fn load_fills_view() {
        let source = InMemorySource::new(numbered_users(12));
        let mut view = ListViewModel::default();

        assert_eq!(load(&source, &mut view).unwrap(), 12);
        assert_eq!(view.total_pages(), 3);
    }

    #[test]
    fn failed_load_keeps_previous_records() {
        let mut source = InMemorySource::new(numbered_users(7));
        let mut view = ListViewModel::default();
        load(&source, &mut view).unwrap();
        view.set_page(2);

        source.fail_with("connection reset");
        assert!(matches!(
            load(&source, &mut view),
            Err(DirectoryError::Api(_))
        ));
        assert_eq!(view.all_records().len(), 7);
        assert_eq!(view.current_page(), 2);
    }

    #[test]
    fn snapshot_reflects_second_page() {
        let source = InMemorySource::new(numbered_users(12));
        let mut view = ListViewModel::default();
        load(&source, &mut view).unwrap();
        view.set_page(2);

        let page = snapshot(&view);
        let ids: Vec<u64> = page.users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![6, 7, 8, 9, 10]);
        assert_eq!(page.page_numbers, vec![1, 2, 3]);
        assert!(page.has_previous);
        assert!(page.has_next);
        assert!(page.shows_pagination);
        assert_eq!((page.window.start, page.window.end), (6, 10));
    }

    #[test]
    fn snapshot_matches_email_as_well_as_name() {
        let mut view = ListViewModel::default();
        let mut odd = user(2, "Ervin Howell");
        odd.email = "Shanna@melissa.tv".to_string();
        view.load(vec![user(1, "Leanne Graham"), odd, user(3, "Clementine Bauch")]);

        view.set_query("SHANNA");
        let page = snapshot(&view);
        assert_eq!(page.users.len(), 1);
        assert_eq!(page.users[0].name, "Ervin Howell");
        assert_eq!(page.query, "SHANNA");
        assert!(!page.shows_pagination);
    }

    #[test]
    fn run_wraps_snapshot() {
        let view: ListViewModel<User> = ListViewModel::default();
        let result = run(&view);
        let page = result.page.unwrap();
        assert!(page.users.is_empty());
        assert_eq!(page.window.total_pages, 1);
    }
}
