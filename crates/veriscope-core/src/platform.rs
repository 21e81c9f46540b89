//! Platform classification for submitted media URLs.
//!
//! Decides which preview family a link belongs to and, for the one family
//! that needs an embeddable reference (YouTube), derives the playable video
//! id. Matching is by host substring in a fixed precedence order so a link
//! matching two patterns resolves deterministically to the first.
//!
//! Pure and synchronous; no fetching, no side effects.

/// Media platform family of a submitted URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Instagram,
    Tiktok,
    Youtube,
    Unknown,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Tiktok => "tiktok",
            Self::Youtube => "youtube",
            Self::Unknown => "unknown",
        }
    }
}

/// Classification of one media URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRef {
    pub platform: Platform,
    /// Playable id, YouTube only. `None` means the caller must fall back
    /// to a plain link instead of an embed.
    pub embed_id: Option<String>,
}

/// Classify a URL by host substring.
///
/// Precedence: `instagram.com`, then `tiktok.com`, then `youtube` or
/// `youtu.be`; first match wins. Case-insensitive.
pub fn classify(url: &str) -> MediaRef {
    let lower = url.to_ascii_lowercase();
    let platform = if lower.contains("instagram.com") {
        Platform::Instagram
    } else if lower.contains("tiktok.com") {
        Platform::Tiktok
    } else if lower.contains("youtube") || lower.contains("youtu.be") {
        Platform::Youtube
    } else {
        Platform::Unknown
    };

    let embed_id = match platform {
        Platform::Youtube => youtube_video_id(url),
        _ => None,
    };

    MediaRef { platform, embed_id }
}

/// Extract a YouTube video id from a watch, shorts, or short-host link.
///
/// Tries, in order: a `/shorts/` path segment, a `v=` query parameter, a
/// `youtu.be/` path segment. The first pattern present wins and the id
/// stops at the next `?` or `&`. Returns `None` when no pattern matches or
/// the matched segment is empty.
///
/// Patterns match case-insensitively but the id is sliced from the
/// original string: video ids are case-sensitive. ASCII lowercasing
/// preserves byte offsets, so the indices line up.
pub fn youtube_video_id(url: &str) -> Option<String> {
    let lower = url.to_ascii_lowercase();
    for pattern in ["/shorts/", "v=", "youtu.be/"] {
        if let Some(at) = lower.find(pattern) {
            let rest = &url[at + pattern.len()..];
            let end = rest.find(['?', '&']).unwrap_or(rest.len());
            let id = &rest[..end];
            if !id.is_empty() {
                return Some(id.to_string());
            }
        }
    }
    None
}

/// Build the muted, looping autoplay embed URL for a YouTube video id.
pub fn youtube_embed_url(id: &str) -> String {
    format!(
        "https://www.youtube.com/embed/{id}?autoplay=1&mute=1&controls=0&loop=1&playlist={id}&modestbranding=1&rel=0"
    )
}
