use serde::{Deserialize, Serialize};

/// One piece of a parsed reply, in original left-to-right order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    /// Literal text. Never blank, stored as it appeared (untrimmed).
    Text { content: String },
    /// A Markdown image. `url` has already been normalized.
    Image { alt: String, url: String },
}

/// Outbound message part handed to the chat platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessagePart {
    Plain { text: String },
    /// The platform fetches the bytes itself.
    Image { url: String },
}

impl From<Segment> for MessagePart {
    fn from(segment: Segment) -> Self {
        match segment {
            Segment::Text { content } => MessagePart::Plain { text: content },
            Segment::Image { url, .. } => MessagePart::Image { url },
        }
    }
}

/// "Assistant produced a normal text response" event.
///
/// When `reply` is left as `None` the host sends `response_text` unmodified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEvent {
    pub response_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<Vec<MessagePart>>,
}

impl ResponseEvent {
    pub fn new(response_text: impl Into<String>) -> Self {
        Self {
            response_text: Some(response_text.into()),
            reply: None,
        }
    }
}
