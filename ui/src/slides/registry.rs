//! Ordered slide sections and the single current-slide pointer.

/// Anchors of the site's slides, in presentation order. The anchor doubles
/// as the element id and the URL hash that jumps to the slide.
pub const SITE_ANCHORS: [&str; 5] = ["intro", "almanarre", "formules", "proximite", "contact"];

/// Index of the contact slide, the target of every "book now" trigger.
pub const CONTACT_SLIDE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    index: usize,
    anchor: &'static str,
}

impl Slide {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn anchor(&self) -> &'static str {
        self.anchor
    }
}

/// A successful change of the current slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChange {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideRegistry {
    slides: Vec<Slide>,
    current: usize,
}

impl SlideRegistry {
    pub fn new(anchors: &[&'static str]) -> Self {
        let slides = anchors
            .iter()
            .enumerate()
            .map(|(index, anchor)| Slide { index, anchor })
            .collect();
        Self { slides, current: 0 }
    }

    pub fn site() -> Self {
        Self::new(&SITE_ANCHORS)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn last_index(&self) -> Option<usize> {
        self.slides.len().checked_sub(1)
    }

    /// Derived: exactly the slide under the pointer is active.
    pub fn is_active(&self, index: usize) -> bool {
        index == self.current && index < self.slides.len()
    }

    pub fn index_of(&self, anchor: &str) -> Option<usize> {
        self.slides
            .iter()
            .find(|s| s.anchor == anchor)
            .map(|s| s.index)
    }

    pub fn anchor_at(&self, index: usize) -> Option<&'static str> {
        self.slides.get(index).map(|s| s.anchor)
    }

    /// The only mutation. Out-of-range or unchanged targets are no-ops.
    pub fn set_current(&mut self, index: usize) -> Option<SlideChange> {
        if index >= self.slides.len() || index == self.current {
            return None;
        }
        let change = SlideChange {
            from: self.current,
            to: index,
        };
        self.current = index;
        Some(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_table_matches_hash_routes() {
        let reg = SlideRegistry::site();
        assert_eq!(reg.len(), 5);
        assert_eq!(reg.index_of("formules"), Some(2));
        assert_eq!(reg.index_of("contact"), Some(CONTACT_SLIDE));
        assert_eq!(reg.index_of("nowhere"), None);
        assert_eq!(reg.anchor_at(2), Some("formules"));
        assert_eq!(reg.anchor_at(5), None);
    }

    #[test]
    fn out_of_range_and_same_index_are_noops() {
        let mut reg = SlideRegistry::site();
        assert!(reg.set_current(5).is_none());
        assert!(reg.set_current(usize::MAX).is_none());
        assert!(reg.set_current(0).is_none());
        assert_eq!(reg.current(), 0);
    }

    #[test]
    fn exactly_one_slide_is_active() {
        let mut reg = SlideRegistry::site();
        reg.set_current(3);
        let active: Vec<_> = reg
            .slides()
            .iter()
            .filter(|s| reg.is_active(s.index()))
            .map(|s| s.index())
            .collect();
        assert_eq!(active, vec![3]);
    }

    #[test]
    fn empty_registry_never_changes() {
        let mut reg = SlideRegistry::new(&[]);
        assert!(reg.is_empty());
        assert!(reg.set_current(0).is_none());
        assert_eq!(reg.last_index(), None);
        assert!(!reg.is_active(0));
    }
}
