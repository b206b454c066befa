//! Todo command handler implementation
//!
//! Each command is a single linear pass: validate the arguments, make at
//! most one SDK call, and render the result into a [`MessageClass`].
//! Invalid arguments and not-found ids are answered with message text;
//! every other SDK failure propagates to the dispatch platform.

use std::sync::Arc;
use tracing::warn;

use crate::{
    commands::{CommandArgs, TodoCommand},
    messages::{MessageClass, item_message, items_message},
    sdk::{SdkError, SdkResult, TodoSdk},
    value_objects::UserIntegration,
};

const INVALID_ID_TEXT: &str = "You need to provide an integer value for the argument `id`.";

/// Handler for todo commands
pub struct TodoCommandHandler<S>
where
    S: TodoSdk,
{
    sdk: Arc<S>,
}

impl<S> TodoCommandHandler<S>
where
    S: TodoSdk,
{
    /// Create a new todo command handler
    pub fn new(sdk: Arc<S>) -> Self {
        Self { sdk }
    }

    /// Route a named command to its operation
    pub async fn handle(
        &self,
        command: TodoCommand,
        args: &CommandArgs,
        user_integration: &UserIntegration,
        message: Option<MessageClass>,
    ) -> SdkResult<MessageClass> {
        match command {
            TodoCommand::CreateItem => self.handle_create_item(args, user_integration, message).await,
            TodoCommand::GetList => self.handle_get_list(args, user_integration, message).await,
            TodoCommand::GetItem => self.handle_get_item(args, user_integration, message).await,
            TodoCommand::UpdateItem => self.handle_update_item(args, user_integration, message).await,
            TodoCommand::DeleteItem => self.handle_delete_item(args, user_integration, message).await,
        }
    }

    /// Handle the create_item command
    pub async fn handle_create_item(
        &self,
        args: &CommandArgs,
        user_integration: &UserIntegration,
        message: Option<MessageClass>,
    ) -> SdkResult<MessageClass> {
        let mut message = message.unwrap_or_default();

        // verify arguments
        let title = args.get("title");
        let description = args.get("description");
        let Some(title) = title.filter(|title| !title.is_empty()) else {
            warn!(command = "create_item", "missing or empty `title` argument");
            message.message_text =
                "You need to provide values for both `title` and `description` as arguments."
                    .to_string();
            return Ok(message);
        };

        let new_item = self
            .sdk
            .create_item(user_integration.token(), title, description)
            .await?;

        message.message_text = "You have created a new item:".to_string();
        Ok(item_message(&new_item, user_integration, message))
    }

    /// Handle the get_list command
    pub async fn handle_get_list(
        &self,
        _args: &CommandArgs,
        user_integration: &UserIntegration,
        message: Option<MessageClass>,
    ) -> SdkResult<MessageClass> {
        let mut message = message.unwrap_or_default();

        let todo_list = self.sdk.get_list(user_integration.token()).await?;

        if todo_list.is_empty() {
            message.message_text = "Your todo list is empty".to_string();
            return Ok(message);
        }

        message.message_text = "Here are your todo items:".to_string();
        Ok(items_message(&todo_list, user_integration, message))
    }

    /// Handle the get_item command
    pub async fn handle_get_item(
        &self,
        args: &CommandArgs,
        user_integration: &UserIntegration,
        message: Option<MessageClass>,
    ) -> SdkResult<MessageClass> {
        let mut message = message.unwrap_or_default();

        // verify arguments
        let Some(item_id) = args.id() else {
            warn!(command = "get_item", "missing or non-integer `id` argument");
            message.message_text = INVALID_ID_TEXT.to_string();
            return Ok(message);
        };

        match self.sdk.get_item(user_integration.token(), item_id).await {
            Ok(item) => {
                message.message_text = "Here are the item details:".to_string();
                message = item_message(&item, user_integration, message);
            }
            Err(SdkError::NotFound { .. }) => {
                message.message_text =
                    format!("Could not find todo item with the id: {item_id}");
            }
            Err(err) => return Err(err),
        }

        Ok(message)
    }

    /// Handle the update_item command
    pub async fn handle_update_item(
        &self,
        args: &CommandArgs,
        user_integration: &UserIntegration,
        message: Option<MessageClass>,
    ) -> SdkResult<MessageClass> {
        let mut message = message.unwrap_or_default();

        // verify arguments; title and description stay optional and are
        // passed through as-is, both absent is a service-side no-op
        let title = args.get("title");
        let description = args.get("description");
        let Some(item_id) = args.id() else {
            warn!(command = "update_item", "missing or non-integer `id` argument");
            message.message_text = INVALID_ID_TEXT.to_string();
            return Ok(message);
        };

        match self
            .sdk
            .update_item(user_integration.token(), item_id, title, description)
            .await
        {
            Ok(updated_item) => {
                message.message_text = "Here are the updated item details:".to_string();
                message = item_message(&updated_item, user_integration, message);
            }
            Err(SdkError::NotFound { .. }) => {
                message.message_text =
                    format!("Could not find todo item with the id: {item_id}");
            }
            Err(err) => return Err(err),
        }

        Ok(message)
    }

    /// Handle the delete_item command
    pub async fn handle_delete_item(
        &self,
        args: &CommandArgs,
        user_integration: &UserIntegration,
        message: Option<MessageClass>,
    ) -> SdkResult<MessageClass> {
        let mut message = message.unwrap_or_default();

        // verify arguments
        let Some(item_id) = args.id() else {
            warn!(command = "delete_item", "missing or non-integer `id` argument");
            message.message_text = INVALID_ID_TEXT.to_string();
            return Ok(message);
        };

        match self.sdk.delete_item(user_integration.token(), item_id).await {
            Ok(todo_list) => {
                if todo_list.is_empty() {
                    message.message_text = "Your todo list is empty.".to_string();
                } else {
                    message.message_text = "Here are your todo items:".to_string();
                    message = items_message(&todo_list, user_integration, message);
                }
            }
            Err(SdkError::NotFound { .. }) => {
                message.message_text =
                    format!("Could not find todo item with the id: {item_id}");
            }
            Err(err) => return Err(err),
        }

        Ok(message)
    }
}
