use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Segment;

// ── Constants ────────────────────────────────────────────────────────────────

const PASS_THROUGH_PREFIXES: &[&str] = &["http://", "https://", "data:"];

// ── Lazy static regexes ──────────────────────────────────────────────────────

/// `![alt](url)`: alt may be empty and never contains `]`, url is non-empty
/// and never contains `)`.
static IMAGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

// ── Match type ───────────────────────────────────────────────────────────────

/// A single Markdown image match with its raw captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef<'a> {
    /// Byte range of the whole `![alt](url)` in the input.
    pub span: Range<usize>,
    pub alt: &'a str,
    pub url: &'a str,
}

// ── Public API ───────────────────────────────────────────────────────────────

pub fn contains_image(text: &str) -> bool {
    IMAGE_RE.is_match(text)
}

/// All image matches, leftmost-first and non-overlapping.
pub fn image_refs(text: &str) -> Vec<ImageRef<'_>> {
    IMAGE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(ImageRef {
                span: whole.range(),
                alt: caps.get(1).map_or("", |m| m.as_str()),
                url: caps.get(2).map_or("", |m| m.as_str()),
            })
        })
        .collect()
}

/// Split `text` into text and image segments, in order.
///
/// Blank gaps between, before and after images are dropped. Image URLs go
/// through [`normalize_url`] with `base_url`.
pub fn parse(text: &str, base_url: Option<&str>) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last_end = 0;

    for image in image_refs(text) {
        push_text(&mut segments, &text[last_end..image.span.start]);
        segments.push(Segment::Image {
            alt: image.alt.to_string(),
            url: normalize_url(image.url, base_url),
        });
        last_end = image.span.end;
    }

    push_text(&mut segments, &text[last_end..]);
    segments
}

// ── URL normalization ────────────────────────────────────────────────────────

/// Resolve a root-relative image URL against `base_url`.
///
/// Absolute URLs, data URIs and other relative forms come back unchanged,
/// as does a root-relative URL when no base is configured. `//host/...`
/// keeps its own host and is never prefixed.
pub fn normalize_url(url: &str, base_url: Option<&str>) -> String {
    if !is_root_relative(url) || url.starts_with("//") {
        return url.to_string();
    }

    match base_url.map(|b| b.trim_end_matches('/')).filter(|b| !b.is_empty()) {
        Some(base) => format!("{}{}", base, url),
        None => url.to_string(),
    }
}

/// True for any URL beginning with `/`, `//host/path` included.
pub fn is_root_relative(url: &str) -> bool {
    url.starts_with('/') && !is_absolute(url)
}

/// True for `http://`, `https://` and `data:` URLs, ignoring ASCII case.
pub fn is_absolute(url: &str) -> bool {
    PASS_THROUGH_PREFIXES.iter().any(|prefix| {
        url.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn push_text(segments: &mut Vec<Segment>, span: &str) {
    if !span.trim().is_empty() {
        segments.push(Segment::Text {
            content: span.to_string(),
        });
    }
}
