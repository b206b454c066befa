//! Todo command center
//!
//! A thin command-handling layer between a chat/automation dispatch
//! platform and an external to-do service. It provides:
//! - Five stateless commands: create, list, get, update, delete
//! - Per-command argument extraction and validation
//! - Result rendering into platform message objects
//! - A result-typed SDK seam with an in-memory implementation for tests
//!
//! Each invocation is a single pass of validate, invoke, render: the
//! platform calls a command with arguments and the caller's integration
//! identity, and always receives exactly one response message back.

pub mod commands;
pub mod handlers;
pub mod messages;
pub mod sdk;
pub mod value_objects;

// Re-export main types
pub use commands::{CommandArgs, TodoCommand};
pub use handlers::TodoCommandHandler;
pub use messages::{AttachmentField, MessageAttachment, MessageClass, item_message, items_message};
pub use sdk::{InMemoryTodoSdk, SdkError, SdkResult, TodoSdk};
pub use value_objects::{IntegrationUser, Item, UserIntegration};
