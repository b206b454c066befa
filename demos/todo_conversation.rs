//! Todo command walkthrough
//!
//! Runs the five commands the dispatch platform would invoke, against
//! the in-memory SDK, and prints the resulting messages.

use std::sync::Arc;
use todo_command_center::{
    CommandArgs, InMemoryTodoSdk, MessageClass, TodoCommand, TodoCommandHandler, UserIntegration,
};

fn print_message(label: &str, message: &MessageClass) {
    println!("[{label}] {}", message.message_text);
    for attachment in &message.attachments {
        println!("  - {}: {}", attachment.title, attachment.text);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let handler = TodoCommandHandler::new(Arc::new(InMemoryTodoSdk::new()));
    let user = UserIntegration::new("demo-user").with_user_name("Demo User");

    println!("=== Todo Command Center Demonstration ===\n");

    let message = handler
        .handle(TodoCommand::GetList, &CommandArgs::new(), &user, None)
        .await?;
    print_message("get_list", &message);

    let args = CommandArgs::new()
        .with("title", "Buy milk")
        .with("description", "2%");
    let message = handler
        .handle(TodoCommand::CreateItem, &args, &user, None)
        .await?;
    print_message("create_item", &message);

    let args = CommandArgs::new()
        .with("title", "Call plumber")
        .with("description", "kitchen sink");
    let message = handler
        .handle(TodoCommand::CreateItem, &args, &user, None)
        .await?;
    print_message("create_item", &message);

    let args = CommandArgs::new().with("id", "1").with("title", "Buy oat milk");
    let message = handler
        .handle(TodoCommand::UpdateItem, &args, &user, None)
        .await?;
    print_message("update_item", &message);

    let args = CommandArgs::new().with("id", "1");
    let message = handler
        .handle(TodoCommand::GetItem, &args, &user, None)
        .await?;
    print_message("get_item", &message);

    let message = handler
        .handle(TodoCommand::DeleteItem, &args, &user, None)
        .await?;
    print_message("delete_item", &message);

    // an invalid id never reaches the service
    let args = CommandArgs::new().with("id", "not-a-number");
    let message = handler
        .handle(TodoCommand::GetItem, &args, &user, None)
        .await?;
    print_message("get_item", &message);

    Ok(())
}
