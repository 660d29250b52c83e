use crate::model::User;

/// Share of users reported as "active now". A placeholder ratio, not a measurement.
const ACTIVE_RATIO: f64 = 0.7;
/// Growth figure shown beside the totals. A placeholder, not derived from data.
const GROWTH_PERCENT: u32 = 12;

/// Header figures for the directory.
///
/// Only `total` is real. `active_estimate` and `growth_percent` are fixed-formula
/// decorations and are labelled as estimates wherever they are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryStats {
    pub total: usize,
    pub active_estimate: usize,
    pub growth_percent: u32,
}

impl DirectoryStats {
    pub fn from_users(users: &[User]) -> Self {
        let total = users.len();
        Self {
            total,
            active_estimate: (total as f64 * ACTIVE_RATIO).floor() as usize,
            growth_percent: GROWTH_PERCENT,
        }
    }
}
