use crate::viewmodel::Searchable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// A user record as served by the directory endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: Address,
    pub company: Company,
}

impl User {
    /// First letter of each whitespace-separated word of the name, e.g. "LG" for "Leanne Graham".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Builds a user with predictable contact fields derived from `name`.
    pub fn user(id: u64, name: &str) -> User {
        let handle = name.to_lowercase().replace(' ', ".");
        User {
            id,
            name: name.to_string(),
            username: handle.replace('.', "_"),
            email: format!("{}@example.org", handle),
            phone: format!("555-01{:02}", id % 100),
            website: format!("{}.example.org", handle),
            address: Address {
                street: format!("{} Main Street", id),
                suite: format!("Apt. {}", id * 10),
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

    /// `count` users named "User 1" through "User N", ids 1..=N.
    pub fn numbered_users(count: usize) -> Vec<User> {
        (1..=count as u64)
            .map(|id| user(id, &format!("User {}", id)))
            .collect()
    }
}
