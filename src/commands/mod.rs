//! Command surface invoked by the dispatch platform
//!
//! The platform delivers arguments as a flat string-to-string mapping;
//! each command extracts and validates the keys it cares about. The id
//! parse contract is shared by every command that takes an `id`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The named commands this crate registers with the dispatch platform
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TodoCommand {
    /// Create a new todo item from `title` and `description`
    CreateItem,
    /// Fetch the full todo list
    GetList,
    /// Fetch a single item by `id`
    GetItem,
    /// Update an item's `title` and/or `description` by `id`
    UpdateItem,
    /// Delete an item by `id`, returning the remaining list
    DeleteItem,
}

impl TodoCommand {
    /// The callback name the platform dispatches on
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateItem => "create_item",
            Self::GetList => "get_list",
            Self::GetItem => "get_item",
            Self::UpdateItem => "update_item",
            Self::DeleteItem => "delete_item",
        }
    }

    /// Resolve a platform callback name to a command
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "create_item" => Some(Self::CreateItem),
            "get_list" => Some(Self::GetList),
            "get_item" => Some(Self::GetItem),
            "update_item" => Some(Self::UpdateItem),
            "delete_item" => Some(Self::DeleteItem),
            _ => None,
        }
    }

    /// All commands, in registration order
    pub fn all() -> [TodoCommand; 5] {
        [
            Self::CreateItem,
            Self::GetList,
            Self::GetItem,
            Self::UpdateItem,
            Self::DeleteItem,
        ]
    }
}

/// Key-value arguments supplied per invocation
///
/// Transient and caller-supplied; commands read keys such as `title`,
/// `description`, and `id` and never persist them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CommandArgs(HashMap<String, String>);

impl CommandArgs {
    /// Create an empty argument set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Look up an argument by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// The shared id contract: present and parseable as an integer
    ///
    /// Absent or non-numeric ids yield `None`; the caller renders the
    /// fixed invalid-id message and must not touch the SDK.
    pub fn id(&self) -> Option<i64> {
        self.get("id").and_then(|raw| raw.trim().parse().ok())
    }
}

impl<K, V> FromIterator<(K, V)> for CommandArgs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_names_round_trip() {
        for command in TodoCommand::all() {
            assert_eq!(TodoCommand::from_name(command.name()), Some(command));
        }
        assert_eq!(TodoCommand::from_name("drop_table"), None);
    }

    #[test]
    fn id_parses_integers_only() {
        assert_eq!(CommandArgs::new().with("id", "42").id(), Some(42));
        assert_eq!(CommandArgs::new().with("id", " 7 ").id(), Some(7));
        assert_eq!(CommandArgs::new().with("id", "seven").id(), None);
        assert_eq!(CommandArgs::new().with("id", "4.2").id(), None);
        assert_eq!(CommandArgs::new().id(), None);
    }
}
