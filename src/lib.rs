//! Rewrites assistant replies that embed Markdown images (`![alt](url)`)
//! into ordered text and image message parts.

pub mod config;
pub mod extract;
pub mod models;
pub mod plugin;
pub mod reply;

pub use config::{
    ConfigError, HostConfig, JsonFile, RelativeUrlPolicy, ReplyConfig, Settings, SettingsSource,
};
pub use extract::{contains_image, normalize_url, parse};
pub use models::{MessagePart, ResponseEvent, Segment};
pub use plugin::ImageReplyPlugin;
pub use reply::{build_reply, plan_reply, Skip};
