//! Response messages returned to the dispatch platform
//!
//! Every command produces exactly one [`MessageClass`]: a human-readable
//! text plus optional structured attachments rendering item data. The
//! platform displays the message to the end user as-is.

use serde::{Deserialize, Serialize};

use crate::value_objects::{Item, UserIntegration};

/// A structured reply for the dispatch platform
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageClass {
    /// The headline text shown to the user
    pub message_text: String,
    /// Structured renderings of item data, one per item
    pub attachments: Vec<MessageAttachment>,
}

impl MessageClass {
    /// Create an empty message
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the headline text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.message_text = text.into();
        self
    }
}

/// A single rendered item inside a message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageAttachment {
    /// Attachment headline (the item title)
    pub title: String,
    /// Attachment body (the item description)
    pub text: String,
    /// Labelled detail fields
    pub fields: Vec<AttachmentField>,
}

/// A labelled key-value detail on an attachment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttachmentField {
    pub title: String,
    pub value: String,
}

impl MessageAttachment {
    fn from_item(item: &Item, user_integration: &UserIntegration) -> Self {
        let mut fields = vec![AttachmentField {
            title: "id".to_string(),
            value: item.id.to_string(),
        }];
        if let Some(name) = &user_integration.user.name {
            fields.push(AttachmentField {
                title: "owner".to_string(),
                value: name.clone(),
            });
        }
        Self {
            title: item.title.clone(),
            text: item.description.clone(),
            fields,
        }
    }
}

/// Attach a single rendered item to a message
pub fn item_message(
    item: &Item,
    user_integration: &UserIntegration,
    mut message: MessageClass,
) -> MessageClass {
    message
        .attachments
        .push(MessageAttachment::from_item(item, user_integration));
    message
}

/// Attach a rendered item list to a message
pub fn items_message(
    items: &[Item],
    user_integration: &UserIntegration,
    mut message: MessageClass,
) -> MessageClass {
    for item in items {
        message
            .attachments
            .push(MessageAttachment::from_item(item, user_integration));
    }
    message
}
