//! The external to-do service seam
//!
//! The real CRUD operations and storage live in the external service;
//! this module defines the trait the command handlers call through, the
//! result-typed error contract, and an in-memory implementation used by
//! tests and demos.

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::value_objects::Item;

/// Failures surfaced by the to-do service
#[derive(Debug, Error)]
pub enum SdkError {
    /// The referenced item id does not exist for this user
    #[error("todo item {id} not found")]
    NotFound { id: i64 },

    /// Any other service failure (transport, auth, server-side)
    ///
    /// Not handled by the command layer; propagates to the dispatch
    /// platform's own error handling.
    #[error("todo service error: {0}")]
    Service(String),
}

/// Result alias for SDK operations
pub type SdkResult<T> = Result<T, SdkError>;

/// Client contract for the external to-do service
///
/// Every call authenticates with the caller's integration token. The
/// command layer issues at most one call per invocation and never
/// retries.
#[async_trait]
pub trait TodoSdk: Send + Sync {
    /// Create an item; an absent description is delegated to the service
    async fn create_item(
        &self,
        token: &str,
        title: &str,
        description: Option<&str>,
    ) -> SdkResult<Item>;

    /// Fetch the user's full list, possibly empty
    async fn get_list(&self, token: &str) -> SdkResult<Vec<Item>>;

    /// Fetch one item by id
    async fn get_item(&self, token: &str, id: i64) -> SdkResult<Item>;

    /// Update an item; absent fields are left unchanged by the service
    async fn update_item(
        &self,
        token: &str,
        id: i64,
        title: Option<&str>,
        description: Option<&str>,
    ) -> SdkResult<Item>;

    /// Delete an item, returning the remaining list
    async fn delete_item(&self, token: &str, id: i64) -> SdkResult<Vec<Item>>;
}

/// In-memory stand-in for the to-do service
///
/// Keeps one list per token. Used by tests and demos; the production
/// deployment registers a client for the real service instead.
#[derive(Default)]
pub struct InMemoryTodoSdk {
    inner: RwLock<InMemoryState>,
}

#[derive(Default)]
struct InMemoryState {
    lists: HashMap<String, Vec<Item>>,
    next_id: i64,
}

impl InMemoryTodoSdk {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoSdk for InMemoryTodoSdk {
    async fn create_item(
        &self,
        token: &str,
        title: &str,
        description: Option<&str>,
    ) -> SdkResult<Item> {
        let mut state = self.inner.write().await;
        state.next_id += 1;
        let item = Item::new(state.next_id, title, description.unwrap_or_default());
        state
            .lists
            .entry(token.to_string())
            .or_default()
            .push(item.clone());
        Ok(item)
    }

    async fn get_list(&self, token: &str) -> SdkResult<Vec<Item>> {
        let state = self.inner.read().await;
        Ok(state.lists.get(token).cloned().unwrap_or_default())
    }

    async fn get_item(&self, token: &str, id: i64) -> SdkResult<Item> {
        let state = self.inner.read().await;
        state
            .lists
            .get(token)
            .and_then(|items| items.iter().find(|item| item.id == id))
            .cloned()
            .ok_or(SdkError::NotFound { id })
    }

    async fn update_item(
        &self,
        token: &str,
        id: i64,
        title: Option<&str>,
        description: Option<&str>,
    ) -> SdkResult<Item> {
        let mut state = self.inner.write().await;
        let item = state
            .lists
            .get_mut(token)
            .and_then(|items| items.iter_mut().find(|item| item.id == id))
            .ok_or(SdkError::NotFound { id })?;
        if let Some(title) = title {
            item.title = title.to_string();
        }
        if let Some(description) = description {
            item.description = description.to_string();
        }
        Ok(item.clone())
    }

    async fn delete_item(&self, token: &str, id: i64) -> SdkResult<Vec<Item>> {
        let mut state = self.inner.write().await;
        let items = state
            .lists
            .get_mut(token)
            .ok_or(SdkError::NotFound { id })?;
        let initial_len = items.len();
        items.retain(|item| item.id != id);
        if items.len() == initial_len {
            return Err(SdkError::NotFound { id });
        }
        Ok(items.clone())
    }
}
