//! Muted, looping background videos and the page-wide sound toggle.
//!
//! Only the video on the active slide plays. The intro backdrop cycles
//! through its sources on a timer; a source that fails to load is hidden
//! and the slide's gradient shows through.

use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::core::{platform, timing};
use crate::i18n::BoundContent;
use crate::slides::SlideEngine;

/// Shared by every backdrop. Videos start muted so browsers allow autoplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoSound {
    pub muted: bool,
}

impl Default for VideoSound {
    fn default() -> Self {
        Self { muted: true }
    }
}

impl VideoSound {
    pub fn toggle(&mut self) {
        self.muted = !self.muted;
    }
}

/// Sources one backdrop cycles through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    sources: Vec<String>,
    index: usize,
}

impl Playlist {
    pub fn new(sources: Vec<String>) -> Self {
        Self { sources, index: 0 }
    }

    pub fn current(&self) -> Option<&str> {
        self.sources.get(self.index).map(String::as_str)
    }

    /// Step to the next source, wrapping at the end. `None` when there is
    /// nothing else to switch to.
    pub fn rotate(&mut self) -> Option<&str> {
        if self.sources.len() < 2 {
            return None;
        }
        self.index = (self.index + 1) % self.sources.len();
        self.current()
    }
}

/// A background video for slide `slide`. With `rotate_ms` above zero the
/// sources alternate on that period.
#[component]
pub fn VideoBackdrop(
    id: &'static str,
    slide: usize,
    sources: Vec<String>,
    #[props(default)] rotate_ms: u64,
) -> Element {
    let engine = use_context::<Signal<SlideEngine>>();
    let sound = use_context::<Signal<VideoSound>>();
    let mut playlist = use_signal(move || Playlist::new(sources));
    let mut failed = use_signal(|| false);

    use_future(move || async move {
        if rotate_ms == 0 {
            return;
        }
        loop {
            timing::sleep_ms(rotate_ms).await;
            match playlist.with_mut(|p| p.rotate().map(str::to_string)) {
                Some(next) => {
                    debug!(id, next = %next, "switching background video");
                    failed.set(false);
                }
                None => break,
            }
        }
    });

    use_effect(move || {
        let muted = sound.read().muted;
        let active = engine.read().registry().is_active(slide);
        // re-run after a source switch so the new source resumes
        let _ = playlist.read();
        platform::set_media_muted(id, muted);
        platform::set_media_playing(id, active);
    });

    let src = playlist.read().current().map(str::to_string);

    rsx! {
        if let Some(src) = src {
            if !failed() {
                video {
                    id: id,
                    class: "video-background",
                    src: src,
                    muted: true,
                    autoplay: true,
                    r#loop: true,
                    playsinline: true,
                    preload: "auto",
                    aria_hidden: "true",
                    onerror: move |_| {
                        warn!(id, "background video failed to load");
                        failed.set(true);
                    },
                }
            }
        }
    }
}

/// Floating button that unmutes or mutes every background video.
#[component]
pub fn SoundToggle() -> Element {
    let mut sound = use_context::<Signal<VideoSound>>();
    let content = use_context::<Signal<BoundContent>>();

    let muted = sound.read().muted;
    let label = if muted {
        content.read().text("video.sound_on").to_string()
    } else {
        content.read().text("video.sound_off").to_string()
    };

    rsx! {
        button {
            r#type: "button",
            class: if muted { "sound-toggle" } else { "sound-toggle sound-toggle--on" },
            aria_pressed: if muted { "false" } else { "true" },
            aria_label: "{label}",
            title: "{label}",
            onclick: move |_| sound.with_mut(VideoSound::toggle),
            span { class: "sound-toggle__icon", aria_hidden: "true",
                if muted { "🔇" } else { "🔊" }
            }
        }
    }
}
