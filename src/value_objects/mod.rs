//! Value objects for the todo command domain
//!
//! These types are owned by the external collaborators (the dispatch
//! platform and the to-do service); this crate only reads and renders them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A to-do entry as returned by the external service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Identifier assigned by the to-do service
    pub id: i64,
    /// Short title of the entry
    pub title: String,
    /// Longer free-form description
    pub description: String,
    /// When the service created the entry
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Create an item with the current timestamp
    pub fn new(id: i64, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            created_at: Utc::now(),
        }
    }
}

/// The calling user's account binding to the to-do service
///
/// Owned by the dispatch platform and passed into every command
/// invocation. The nested user's id doubles as the auth token for
/// SDK calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserIntegration {
    /// Unique identifier of this integration instance
    pub integration_id: Uuid,
    /// The platform user behind the integration
    pub user: IntegrationUser,
    /// Opaque platform-owned configuration, read-only here
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Platform user data nested inside a [`UserIntegration`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntegrationUser {
    /// Platform user id, used as the SDK auth token
    pub id: String,
    /// Display name, if the platform supplied one
    pub name: Option<String>,
}

impl UserIntegration {
    /// Create an integration for a platform user id
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            integration_id: Uuid::new_v4(),
            user: IntegrationUser {
                id: user_id.into(),
                name: None,
            },
            metadata: HashMap::new(),
        }
    }

    /// Set the user's display name
    pub fn with_user_name(mut self, name: impl Into<String>) -> Self {
        self.user.name = Some(name.into());
        self
    }

    /// The credential passed to every SDK call
    pub fn token(&self) -> &str {
        &self.user.id
    }
}
