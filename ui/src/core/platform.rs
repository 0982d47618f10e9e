//! Host environment glue: URL hash, window-level listeners and the
//! background video elements.
//!
//! Keyboard input is taken from the window rather than a focused element so
//! the deck reacts regardless of focus, and so the event target can be
//! inspected for text-entry controls.

use crate::slides::KeyOrigin;

/// Current location hash without the leading `#`. Empty when there is none
/// or when not running in a browser.
#[cfg(target_arch = "wasm32")]
pub fn location_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|h| h.trim_start_matches('#').to_string())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn location_hash() -> String {
    String::new()
}

/// Point the URL hash at `anchor` without adding a history entry or firing
/// `hashchange`. Returns `false` when there is no browser history.
#[cfg(target_arch = "wasm32")]
pub fn replace_hash(anchor: &str) -> bool {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return false;
    };
    history
        .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&format!("#{anchor}")))
        .is_ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn replace_hash(_anchor: &str) -> bool {
    false
}

#[cfg(target_arch = "wasm32")]
fn media_element(id: &str) -> Option<web_sys::HtmlMediaElement> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlMediaElement>()
        .ok()
}

/// Mute or unmute the media element with this id. `false` when it is not
/// on the page.
#[cfg(target_arch = "wasm32")]
pub fn set_media_muted(id: &str, muted: bool) -> bool {
    match media_element(id) {
        Some(media) => {
            media.set_muted(muted);
            true
        }
        None => false,
    }
}

/// Play or pause the media element with this id. A refused autoplay is
/// only logged; the next call tries again.
#[cfg(target_arch = "wasm32")]
pub fn set_media_playing(id: &str, playing: bool) -> bool {
    let Some(media) = media_element(id) else {
        return false;
    };
    if !playing {
        return media.pause().is_ok();
    }
    if media.play().is_err() {
        tracing::warn!(id, "background video refused to play");
        return false;
    }
    true
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_media_muted(_id: &str, _muted: bool) -> bool {
    false
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_media_playing(_id: &str, _playing: bool) -> bool {
    false
}

/// Keeps a window listener registered; dropping it removes the callback.
pub struct WindowListener {
    #[cfg(target_arch = "wasm32")]
    event: &'static str,
    #[cfg(target_arch = "wasm32")]
    callback: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for WindowListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                self.event,
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn listen(
    event: &'static str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Option<WindowListener> {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let window = web_sys::window()?;
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    window
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .ok()?;
    Some(WindowListener { event, callback })
}

/// Call `on_change` with the new hash every time it changes.
#[cfg(target_arch = "wasm32")]
pub fn on_hash_change(mut on_change: impl FnMut(String) + 'static) -> Option<WindowListener> {
    listen("hashchange", move |_| on_change(location_hash()))
}

/// Call `on_key` with `KeyboardEvent.key` and where it came from. When the
/// callback returns `true` the browser default (page scroll) is suppressed.
#[cfg(target_arch = "wasm32")]
pub fn on_key_down(
    mut on_key: impl FnMut(&str, KeyOrigin) -> bool + 'static,
) -> Option<WindowListener> {
    use wasm_bindgen::JsCast;

    listen("keydown", move |event| {
        let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
            return;
        };
        let origin = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| key_origin_for_tag(&el.tag_name()))
            .unwrap_or(KeyOrigin::Page);
        if on_key(&key_event.key(), origin) {
            event.prevent_default();
        }
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn on_hash_change(_on_change: impl FnMut(String) + 'static) -> Option<WindowListener> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn on_key_down(
    _on_key: impl FnMut(&str, KeyOrigin) -> bool + 'static,
) -> Option<WindowListener> {
    None
}

/// Text-entry controls keep their keys.
pub fn key_origin_for_tag(tag: &str) -> KeyOrigin {
    match tag.to_ascii_uppercase().as_str() {
        "INPUT" | "TEXTAREA" | "SELECT" => KeyOrigin::TextEntry,
        _ => KeyOrigin::Page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_controls_are_text_entry() {
        assert_eq!(key_origin_for_tag("INPUT"), KeyOrigin::TextEntry);
        assert_eq!(key_origin_for_tag("textarea"), KeyOrigin::TextEntry);
        assert_eq!(key_origin_for_tag("SELECT"), KeyOrigin::TextEntry);
        assert_eq!(key_origin_for_tag("BODY"), KeyOrigin::Page);
        assert_eq!(key_origin_for_tag("BUTTON"), KeyOrigin::Page);
    }

    #[test]
    fn no_listeners_off_the_web() {
        if cfg!(not(target_arch = "wasm32")) {
            assert!(on_key_down(|_, _| false).is_none());
            assert_eq!(location_hash(), "");
            assert!(!replace_hash("contact"));
            assert!(!set_media_muted("video-intro", false));
            assert!(!set_media_playing("video-intro", true));
        }
    }
}
