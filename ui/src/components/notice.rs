//! Transient success/error message shown in the corner of the page.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

use crate::core::timing;

static NEXT_NOTICE: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Error => "notice notice--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            id: NEXT_NOTICE.fetch_add(1, Ordering::Relaxed),
            kind,
            text: text.into(),
        }
    }
}

/// Show `notice` in `slot`, replacing whatever is there, and clear it after
/// `lifetime_ms` unless a newer notice has taken its place by then.
pub fn show_notice(mut slot: Signal<Option<Notice>>, notice: Notice, lifetime_ms: u64) {
    let id = notice.id;
    slot.set(Some(notice));
    spawn(async move {
        timing::sleep_ms(lifetime_ms).await;
        if slot.with_peek(|current| current.as_ref().map(|n| n.id)) == Some(id) {
            slot.set(None);
        }
    });
}

#[component]
pub fn NoticeToast() -> Element {
    let mut slot = use_context::<Signal<Option<Notice>>>();

    let Some(notice) = slot() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: notice.kind.css_class(),
            role: "status",
            onclick: move |_| slot.set(None),
            "{notice.text}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_notice_gets_a_fresh_id() {
        let a = Notice::new(NoticeKind::Success, "ok");
        let b = Notice::new(NoticeKind::Success, "ok");
        assert_ne!(a.id, b.id);
        assert_ne!(a, b);
    }

    #[test]
    fn kinds_map_to_classes() {
        assert_eq!(NoticeKind::Success.css_class(), "notice notice--success");
        assert_eq!(NoticeKind::Error.css_class(), "notice notice--error");
    }
}
