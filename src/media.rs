use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_SRC: &str = "/placeholder.svg";

const VIMEO_HOST: &str = "vimeo.com";
const VIMEO_PLAYER_HOST: &str = "player.vimeo.com";
const VIMEO_PLAYER_URL: &str = "https://player.vimeo.com/video/";
const VIMEO_PLAYER_FLAGS: &str = "title=0&byline=0&portrait=0";
const LOOM_HOST: &str = "loom.com";
const LOOM_EMBED_URL: &str = "https://www.loom.com/embed/";

/// A single slide in a project carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Media {
    Image {
        src: String,
        alt: String,
    },
    Video {
        src: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        poster: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
    },
}

/// Where a video is served from. Drives both rendering and embed rewriting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoHost {
    Vimeo,
    Loom,
    SelfHosted,
}

impl VideoHost {
    /// Host matching is a substring test on the whole source, so any url that
    /// mentions the host name anywhere is treated as that host.
    pub fn classify(src: &str) -> Self {
        if src.contains(VIMEO_HOST) {
            Self::Vimeo
        } else if src.contains(LOOM_HOST) {
            Self::Loom
        } else {
            Self::SelfHosted
        }
    }

    /// Rewrites a watch page url into the provider's iframe url.
    /// Returns `None` for self-hosted sources, which have no embed form.
    pub fn embed_url(self, src: &str) -> Option<String> {
        match self {
            Self::Vimeo if src.contains(VIMEO_PLAYER_HOST) => Some(src.to_string()),
            Self::Vimeo => Some(format!(
                "{VIMEO_PLAYER_URL}{}?{VIMEO_PLAYER_FLAGS}",
                last_segment(src)
            )),
            Self::Loom => Some(format!("{LOOM_EMBED_URL}{}", last_segment(src))),
            Self::SelfHosted => None,
        }
    }

    fn fallback_title(self) -> &'static str {
        match self {
            Self::Vimeo => "Vimeo video",
            Self::Loom => "Loom video",
            Self::SelfHosted => "Video",
        }
    }
}

// query strings stay attached to the segment
fn last_segment(src: &str) -> &str {
    src.rsplit('/').next().unwrap_or(src)
}

/// The two views a carousel draws its slides into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Inline,
    Modal,
}

/// What to draw for one slide on one surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    Image {
        src: String,
        alt: String,
    },
    Embed {
        src: String,
        title: String,
    },
    Video {
        src: String,
        poster: Option<String>,
        muted: bool,
        controls: bool,
    },
}

impl Media {
    pub fn src(&self) -> &str {
        match self {
            Self::Image { src, .. } | Self::Video { src, .. } => src,
        }
    }

    pub fn present(&self, surface: Surface) -> Presentation {
        let (src, poster, alt) = match self {
            Self::Image { src, alt } => {
                return Presentation::Image {
                    src: or_placeholder(Some(src)),
                    alt: alt.clone(),
                }
            }
            Self::Video { src, poster, alt } => (src, poster, alt),
        };
        let host = VideoHost::classify(src);
        match (host.embed_url(src), surface) {
            // embedded players never load inline, the poster stands in for them
            (Some(_), Surface::Inline) => Presentation::Image {
                src: or_placeholder(poster.as_ref()),
                alt: alt.clone().unwrap_or_default(),
            },
            (Some(embed), Surface::Modal) => Presentation::Embed {
                src: embed,
                title: alt
                    .clone()
                    .unwrap_or_else(|| host.fallback_title().to_string()),
            },
            (None, surface) => Presentation::Video {
                src: src.clone(),
                poster: poster.clone(),
                muted: surface == Surface::Inline,
                controls: surface == Surface::Modal,
            },
        }
    }
}

fn or_placeholder(src: Option<&String>) -> String {
    match src {
        Some(s) if !s.is_empty() => s.clone(),
        _ => PLACEHOLDER_SRC.to_string(),
    }
}

/// Keys the lightbox reacts to while it is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Next,
    Prev,
    Close,
}

impl KeyCommand {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(Self::Next),
            "ArrowLeft" => Some(Self::Prev),
            "Escape" => Some(Self::Close),
            _ => None,
        }
    }
}

/// Shared state behind the inline strip and the lightbox.
///
/// Both views read the same index, so they can never disagree on the active
/// slide. The index is always reduced modulo `len`; with no items there is no
/// active slide and navigation does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    active: usize,
    modal_open: bool,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active: 0,
            modal_open: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.active)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active() == Some(index)
    }

    /// Prev/next buttons and dots only make sense with something to move to.
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    pub fn go_to(&mut self, target: i64) {
        if self.is_empty() {
            return;
        }
        // len fits in i64 for any slice that fits in memory
        self.active = target.rem_euclid(self.len as i64) as usize;
    }

    pub fn next(&mut self) {
        self.go_to(self.active as i64 + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.active as i64 - 1);
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Applies a key press. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.modal_open {
            return false;
        }
        match KeyCommand::from_key(key) {
            Some(KeyCommand::Next) => self.next(),
            Some(KeyCommand::Prev) => self.prev(),
            Some(KeyCommand::Close) => self.close_modal(),
            None => return false,
        }
        true
    }

    /// Horizontal offset of the slide strip, in percent of the viewport.
    pub fn offset_percent(&self) -> usize {
        self.active * 100
    }

    pub fn transform(&self) -> String {
        format!("translateX(-{}%)", self.offset_percent())
    }
}

/// Releases a subscription when dropped.
///
/// Holding the guard is holding the subscription. Whichever way the guard goes
/// away, the listener goes with it.
pub struct ListenerGuard {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl ListenerGuard {
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}
