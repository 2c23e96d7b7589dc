use crate::config::{RelativeUrlPolicy, ReplyConfig};
use crate::extract;
use crate::models::MessagePart;

/// Why a reply was left as it is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Skip {
    #[error("no markdown image in reply")]
    NoImages,
    #[error("relative image url {url:?} with no base_url configured")]
    UnresolvedRelativeUrl { url: String },
    /// Guard against ever sending an empty reply; a matched image always
    /// yields a part, so this is not expected in practice.
    #[error("reply produced no message parts")]
    Empty,
}

/// Build the replacement reply for `text`, or return the reason not to.
pub fn plan_reply(text: &str, config: &ReplyConfig) -> Result<Vec<MessagePart>, Skip> {
    let images = extract::image_refs(text);
    if images.is_empty() {
        return Err(Skip::NoImages);
    }

    if config.base_url().is_none() && config.relative_url_policy() == RelativeUrlPolicy::Suppress {
        if let Some(image) = images.iter().find(|i| extract::is_root_relative(i.url)) {
            return Err(Skip::UnresolvedRelativeUrl {
                url: image.url.to_string(),
            });
        }
    }

    let parts: Vec<MessagePart> = extract::parse(text, config.base_url())
        .into_iter()
        .map(MessagePart::from)
        .collect();

    if parts.is_empty() {
        return Err(Skip::Empty);
    }
    Ok(parts)
}

/// Replacement parts for `text`, or `None` when the original reply should
/// be sent unchanged.
pub fn build_reply(text: &str, config: &ReplyConfig) -> Option<Vec<MessagePart>> {
    plan_reply(text, config).ok()
}
