//! # Rendering Module
//!
//! Turns `CmdResult` pieces into terminal text. Layout (column widths, truncation,
//! padding) is computed on plain text first and styles are applied afterwards, so
//! ANSI codes never throw off the alignment.
//!
//! Every `render_*` function has an `_internal` twin taking `use_color`, which tests
//! call with `Some(false)` to get plain output.

use super::styles::{names, USERDIR_THEME};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;
use userdir::api::{CmdMessage, MessageLevel, UserPage};
use userdir::commands::stats::DirectoryStats;
use userdir::model::User;

pub const ID_WIDTH: usize = 4;
pub const NAME_WIDTH: usize = 24;
pub const USERNAME_WIDTH: usize = 18;
pub const EMAIL_WIDTH: usize = 28;
pub const PHONE_WIDTH: usize = 22;
pub const COMPANY_WIDTH: usize = 20;
const GAP: &str = "  ";
const LABEL_WIDTH: usize = 10;

/// Renders one page of the user table, with the stats header when given.
pub fn render_user_page(page: &UserPage, stats: Option<&DirectoryStats>) -> String {
    render_user_page_internal(page, stats, None)
}

fn render_user_page_internal(
    page: &UserPage,
    stats: Option<&DirectoryStats>,
    use_color: Option<bool>,
) -> String {
    let paint = |name: &str, text: &str| USERDIR_THEME.paint(name, text, use_color);
    let mut out = String::new();

    if let Some(stats) = stats {
        out.push_str(&render_stats_internal(stats, use_color));
        out.push('\n');
    }

    if page.users.is_empty() {
        let empty = if page.window.total_len == 0 {
            "No users loaded."
        } else {
            "No users found."
        };
        out.push_str(empty);
        out.push('\n');
        return out;
    }

    let header = [
        ("#", ID_WIDTH),
        ("NAME", NAME_WIDTH),
        ("USERNAME", USERNAME_WIDTH),
        ("EMAIL", EMAIL_WIDTH),
        ("PHONE", PHONE_WIDTH),
        ("COMPANY", COMPANY_WIDTH),
    ]
    .iter()
    .map(|(title, width)| paint(names::HEADER, &fit(title, *width)))
    .collect::<Vec<_>>()
    .join(GAP);
    out.push_str(header.trim_end());
    out.push('\n');

    for user in &page.users {
        let row = [
            paint(names::ID, &fit(&user.id.to_string(), ID_WIDTH)),
            paint(names::NAME, &fit(&user.name, NAME_WIDTH)),
            paint(names::MUTED, &fit(&format!("@{}", user.username), USERNAME_WIDTH)),
            fit(&user.email, EMAIL_WIDTH),
            fit(&user.phone, PHONE_WIDTH),
            fit(&user.company.name, COMPANY_WIDTH),
        ]
        .join(GAP);
        out.push_str(row.trim_end());
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&paint(names::MUTED, &showing_line(page)));
    out.push('\n');

    if page.shows_pagination {
        out.push_str(&render_pager(page, use_color));
        out.push('\n');
    }

    out
}

/// "Showing 6-10 of 12 users", mentioning the query and the unfiltered total when they matter.
fn showing_line(page: &UserPage) -> String {
    let w = &page.window;
    let mut line = format!("Showing {}-{} of {} users", w.start, w.end, w.filtered_len);
    if !page.query.is_empty() {
        line.push_str(&format!(" matching \"{}\"", page.query));
        if w.filtered_len != w.total_len {
            line.push_str(&format!(" ({} total)", w.total_len));
        }
    }
    line
}

fn render_pager(page: &UserPage, use_color: Option<bool>) -> String {
    let paint = |name: &str, text: &str| USERDIR_THEME.paint(name, text, use_color);
    let mut parts = Vec::with_capacity(page.page_numbers.len() + 2);

    let prev_style = if page.has_previous {
        names::PAGE
    } else {
        names::DISABLED
    };
    parts.push(paint(prev_style, "‹ Prev"));

    for &number in &page.page_numbers {
        if number == page.window.page {
            parts.push(paint(names::CURRENT_PAGE, &format!("[{}]", number)));
        } else {
            parts.push(paint(names::PAGE, &format!(" {} ", number)));
        }
    }

    let next_style = if page.has_next {
        names::PAGE
    } else {
        names::DISABLED
    };
    parts.push(paint(next_style, "Next ›"));

    parts.join(" ")
}

pub fn render_stats(stats: &DirectoryStats) -> String {
    render_stats_internal(stats, None)
}

fn render_stats_internal(stats: &DirectoryStats, use_color: Option<bool>) -> String {
    let paint = |name: &str, text: &str| USERDIR_THEME.paint(name, text, use_color);
    format!(
        "{} {}   {} {} {}   {} {} {}\n",
        paint(names::LABEL, "Total Users"),
        paint(names::ACCENT, &stats.total.to_string()),
        paint(names::LABEL, "Active Now"),
        paint(names::ACCENT, &stats.active_estimate.to_string()),
        paint(names::MUTED, "(est.)"),
        paint(names::LABEL, "Growth"),
        paint(names::ACCENT, &format!("+{}%", stats.growth_percent)),
        paint(names::MUTED, "(est.)"),
    )
}

/// Renders the detail view for one user.
pub fn render_user_detail(user: &User) -> String {
    render_user_detail_internal(user, None)
}

fn render_user_detail_internal(user: &User, use_color: Option<bool>) -> String {
    let paint = |name: &str, text: &str| USERDIR_THEME.paint(name, text, use_color);
    let field = |label: &str, value: &str| {
        format!(
            "  {}{}\n",
            paint(names::LABEL, &fit(label, LABEL_WIDTH)),
            value
        )
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{}  {}\n",
        paint(names::ACCENT, &format!("[{}]", user.initials())),
        paint(names::NAME, &user.name)
    ));
    out.push_str(&format!(
        "{}\n",
        paint(
            names::MUTED,
            &format!(
                "@{} · {} · {}",
                user.username, user.email, user.company.name
            )
        )
    ));

    out.push('\n');
    out.push_str(&paint(names::HEADER, "Contact"));
    out.push('\n');
    out.push_str(&field("Email", &user.email));
    out.push_str(&field("Phone", &user.phone));
    out.push_str(&field("Website", &format!("http://{}", user.website)));

    let address = &user.address;
    out.push('\n');
    out.push_str(&paint(names::HEADER, "Address"));
    out.push('\n');
    out.push_str(&field("Street", &address.street));
    out.push_str(&field("Suite", &address.suite));
    out.push_str(&field("City", &address.city));
    out.push_str(&field("Zipcode", &address.zipcode));
    out.push_str(&field(
        "Geo",
        &format!("{}, {}", address.geo.lat, address.geo.lng),
    ));

    let company = &user.company;
    out.push('\n');
    out.push_str(&paint(names::HEADER, "Company"));
    out.push('\n');
    out.push_str(&field("Name", &company.name));
    out.push_str(&field(
        "Motto",
        &paint(names::QUOTE, &format!("\"{}\"", company.catch_phrase)),
    ));
    out.push_str(&field("Business", &company.bs));

    out
}

/// Renders `lines` one per line, or `empty_message` when there are none.
pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message);
    }
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let styled = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

/// Prints command messages; errors go to stderr, everything else to stdout.
pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        let line = render_messages(std::slice::from_ref(message));
        if message.level == MessageLevel::Error {
            eprint!("{}", line);
        } else {
            print!("{}", line);
        }
    }
}

/// Truncates or pads `s` to exactly `width` display columns.
fn fit(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use userdir::commands::list::snapshot;
    use userdir::model::{Address, Company, Geo};
    use userdir::viewmodel::ListViewModel;

    fn user(id: u64, name: &str) -> User {
        let handle = name.to_lowercase().replace(' ', ".");
        User {
            id,
            name: name.to_string(),
            username: handle.replace('.', "_"),
            email: format!("{}@example.org", handle),
            phone: "1-770-736-8031".to_string(),
            website: format!("{}.example.org", handle),
            address: Address {
                street: "Kulas Light".to_string(),
                suite: "Apt. 556".to_string(),
                city: "Gwenborough".to_string(),
                zipcode: "92998-3874".to_string(),
                geo: Geo {
                    lat: "-37.3159".to_string(),
                    lng: "81.1496".to_string(),
                },
            },
            company: Company {
                name: format!("Company {}", id),
                catch_phrase: "Multi-layered client-server neural-net".to_string(),
                bs: "harness real-time e-markets".to_string(),
            },
        }
    }

    fn numbered_users(count: u64) -> Vec<User> {
        (1..=count).map(|id| user(id, &format!("User {}", id))).collect()
    }

    fn page_of(users: Vec<User>, page: i64, query: &str) -> UserPage {
        let mut view = ListViewModel::default();
        view.load(users);
        view.set_query(query);
        view.set_page(page);
        snapshot(&view)
    }

    #[test]
    fn test_render_single_page_has_no_pager() {
        let output = render_user_page_internal(&page_of(numbered_users(3), 1, ""), None, Some(false));

        assert!(output.contains("NAME"));
        assert!(output.contains("User 2"));
        assert!(output.contains("@user_3"));
        assert!(output.contains("Showing 1-3 of 3 users"));
        assert!(!output.contains("Next"));
    }

    #[test]
    fn test_render_marks_current_page() {
        let output = render_user_page_internal(&page_of(numbered_users(12), 2, ""), None, Some(false));

        assert!(output.contains("User 6"));
        assert!(!output.contains("User 5 "));
        assert!(output.contains("Showing 6-10 of 12 users"));
        assert!(output.contains("‹ Prev  1  [2]  3  Next ›"));
    }

    #[test]
    fn test_render_query_summary() {
        let users = vec![user(1, "Anna Smith"), user(2, "Bob Jones"), user(3, "Joanna Lee")];
        let output = render_user_page_internal(&page_of(users, 1, "ANN"), None, Some(false));

        assert!(output.contains("Showing 1-2 of 2 users matching \"ANN\" (3 total)"));
        assert!(!output.contains("Bob Jones"));
    }

    #[test]
    fn test_render_empty_states() {
        let none_loaded = render_user_page_internal(&page_of(vec![], 1, ""), None, Some(false));
        assert_eq!(none_loaded.trim(), "No users loaded.");

        let no_match = render_user_page_internal(&page_of(numbered_users(4), 1, "zzz"), None, Some(false));
        assert_eq!(no_match.trim(), "No users found.");
    }

    #[test]
    fn test_render_stats_header() {
        let stats = DirectoryStats::from_users(&numbered_users(10));
        let output = render_user_page_internal(
            &page_of(numbered_users(10), 1, ""),
            Some(&stats),
            Some(false),
        );
        let first = output.lines().next().unwrap();
        assert!(first.contains("Total Users 10"));
        assert!(first.contains("Active Now 7 (est.)"));
        assert!(first.contains("Growth +12% (est.)"));
    }

    #[test]
    fn test_render_columns_align() {
        let mut long = user(10, "Maximilian Alexander Featherstonehaugh");
        long.email = "a.very.long.address.for.testing@example.org".to_string();
        let output = render_user_page_internal(&page_of(vec![long, user(2, "Ann")], 1, ""), None, Some(false));

        let rows: Vec<&str> = output.lines().skip(1).take(2).collect();
        let email_col = ID_WIDTH + NAME_WIDTH + USERNAME_WIDTH + 3 * GAP.len();
        assert!(rows[0].contains('…'));
        assert_eq!(&rows[1][email_col..email_col + 3], "ann");
        assert_eq!(
            rows[0].chars().nth(email_col).unwrap(),
            'a',
            "email column should start at the same offset in every row"
        );
    }

    #[test]
    fn test_render_user_detail() {
        let output = render_user_detail_internal(&user(1, "Leanne Graham"), Some(false));

        assert!(output.starts_with("[LG]  Leanne Graham"));
        assert!(output.contains("@leanne_graham · leanne.graham@example.org · Company 1"));
        assert!(output.contains("Website   http://leanne.graham.example.org"));
        assert!(output.contains("Geo       -37.3159, 81.1496"));
        assert!(output.contains("Motto     \"Multi-layered client-server neural-net\""));
    }

    #[test]
    fn test_render_text_list() {
        assert_eq!(render_text_list(&[], "Nothing here."), "Nothing here.\n");
        let lines = vec!["a = 1".to_string(), "b = 2".to_string()];
        assert_eq!(render_text_list(&lines, ""), "a = 1\nb = 2\n");
    }

    #[test]
    fn test_render_messages() {
        assert!(render_messages(&[]).is_empty());
        let output = render_messages(&[
            CmdMessage::success("page-size set to 3"),
            CmdMessage::warning("User not found."),
        ]);
        assert!(output.contains("page-size set to 3"));
        assert!(output.contains("User not found."));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_to_width("much longer text", 8), "much lo…");
        assert_eq!(fit("ab", 4), "ab  ");
    }
}
