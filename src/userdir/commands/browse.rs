use crate::error::{DirectoryError, Result};
use std::str::FromStr;

/// One line of input in an interactive browse session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    /// Redraw the current page
    Show,
    /// Replace the query; the text after `/` is kept verbatim
    Search(String),
    Next,
    Previous,
    GoTo(i64),
    View(u64),
    Reload,
    Help,
    Quit,
}

pub const BROWSE_HELP: &str = "\
  /TEXT    search by name or email (a bare / clears the search)
  n        next page
  p        previous page
  g N      go to page N
  v ID     show details for user ID
  r        reload users
  ?        show this help
  q        quit";

impl FromStr for BrowseAction {
    type Err = DirectoryError;

    fn from_str(input: &str) -> Result<Self> {
        let line = input.trim_end_matches(['\n', '\r']);
        if let Some(query) = line.strip_prefix('/') {
            return Ok(BrowseAction::Search(query.to_string()));
        }

        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default();
        let argument = words.next();
        if words.next().is_some() {
            return Err(unrecognized(line));
        }

        match (command, argument) {
            ("", None) => Ok(BrowseAction::Show),
            ("n" | "next", None) => Ok(BrowseAction::Next),
            ("p" | "prev" | "previous", None) => Ok(BrowseAction::Previous),
            ("g" | "goto", Some(page)) => page
                .parse()
                .map(BrowseAction::GoTo)
                .map_err(|_| DirectoryError::Api(format!("Invalid page number: {}", page))),
            ("v" | "view", Some(id)) => id
                .parse()
                .map(BrowseAction::View)
                .map_err(|_| DirectoryError::Api(format!("Invalid user id: {}", id))),
            ("r" | "reload", None) => Ok(BrowseAction::Reload),
            ("?" | "h" | "help", None) => Ok(BrowseAction::Help),
            ("q" | "quit" | "exit", None) => Ok(BrowseAction::Quit),
            _ => Err(unrecognized(line)),
        }
    }
}

fn unrecognized(line: &str) -> DirectoryError {
    DirectoryError::Api(format!("Unrecognized input: '{}' (? for help)", line.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> BrowseAction {
        input.parse().unwrap()
    }

    #[test]
    fn parses_navigation() {
        assert_eq!(parse("n"), BrowseAction::Next);
        assert_eq!(parse("next\n"), BrowseAction::Next);
        assert_eq!(parse("  p  "), BrowseAction::Previous);
        assert_eq!(parse("g 3"), BrowseAction::GoTo(3));
        assert_eq!(parse("goto -2"), BrowseAction::GoTo(-2));
        assert_eq!(parse(""), BrowseAction::Show);
    }

    #[test]
    fn search_text_is_kept_verbatim() {
        assert_eq!(parse("/ann"), BrowseAction::Search("ann".into()));
        assert_eq!(parse("/ Ann B\r\n"), BrowseAction::Search(" Ann B".into()));
        assert_eq!(parse("/"), BrowseAction::Search(String::new()));
    }

    #[test]
    fn parses_view_and_misc() {
        assert_eq!(parse("v 4"), BrowseAction::View(4));
        assert_eq!(parse("r"), BrowseAction::Reload);
        assert_eq!(parse("?"), BrowseAction::Help);
        assert_eq!(parse("quit"), BrowseAction::Quit);
    }

    #[test]
    fn rejects_bad_input() {
        assert!("g".parse::<BrowseAction>().is_err());
        assert!("g two".parse::<BrowseAction>().is_err());
        assert!("v -1".parse::<BrowseAction>().is_err());
        assert!("n 2".parse::<BrowseAction>().is_err());
        assert!("dance".parse::<BrowseAction>().is_err());
        assert!("g 1 2".parse::<BrowseAction>().is_err());
    }
}
