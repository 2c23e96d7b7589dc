use crate::config::{ReplyConfig, SettingsSource};
use crate::models::{MessagePart, ResponseEvent};
use crate::reply::{self, Skip};

/// Turns Markdown images in assistant replies into image message parts.
///
/// Holds only the configuration snapshot taken at initialization, so one
/// instance can serve concurrent events.
#[derive(Debug, Clone, Default)]
pub struct ImageReplyPlugin {
    config: ReplyConfig,
}

impl ImageReplyPlugin {
    pub fn new(config: ReplyConfig) -> Self {
        Self { config }
    }

    /// Read configuration once from `source`. Never fails.
    pub fn initialize(source: &dyn SettingsSource) -> Self {
        let config = ReplyConfig::from_source(source);
        match config.base_url() {
            Some(base) => tracing::info!("image reply plugin ready, base_url={}", base),
            None => tracing::info!(
                "image reply plugin ready, base_url unset (relative urls: {:?})",
                config.relative_url_policy()
            ),
        }
        Self::new(config)
    }

    pub fn config(&self) -> &ReplyConfig {
        &self.config
    }

    pub fn reply_for(&self, text: &str) -> Option<Vec<MessagePart>> {
        reply::build_reply(text, &self.config)
    }

    /// Handle a "normal message responded" event.
    ///
    /// Sets `event.reply` and returns `true` when the reply was rewritten.
    /// Otherwise the event is left exactly as it came in.
    pub fn on_normal_message_responded(&self, event: &mut ResponseEvent) -> bool {
        let text = event.response_text.as_deref().unwrap_or("");
        match reply::plan_reply(text, &self.config) {
            Ok(parts) => {
                tracing::debug!("rewrote reply into {} message parts", parts.len());
                event.reply = Some(parts);
                true
            }
            Err(Skip::NoImages) => false,
            Err(skip) => {
                tracing::debug!("reply left unchanged: {}", skip);
                false
            }
        }
    }
}
