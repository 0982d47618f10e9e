//! Navigation UI state derived from the current slide index.
//!
//! Nothing here holds state of its own: [`NavSnapshot::sync`] is a pure
//! function of `(current, total)`, so calling it redundantly is harmless.

/// Kind of control bound to a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavControl {
    /// Header link, labelled through a translation key.
    Link { label_key: &'static str },
    /// Dot indicator on the right edge.
    Dot,
}

/// A control and the slide it jumps to. Fixed at page construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationBinding {
    pub control: NavControl,
    pub target: usize,
}

impl NavigationBinding {
    pub const fn link(label_key: &'static str, target: usize) -> Self {
        Self {
            control: NavControl::Link { label_key },
            target,
        }
    }

    pub const fn dot(target: usize) -> Self {
        Self {
            control: NavControl::Dot,
            target,
        }
    }
}

/// Header links of the site.
pub const HEADER_LINKS: [NavigationBinding; 5] = [
    NavigationBinding::link("nav.intro", 0),
    NavigationBinding::link("nav.almanarre", 1),
    NavigationBinding::link("nav.formules", 2),
    NavigationBinding::link("nav.proximite", 3),
    NavigationBinding::link("nav.contact", 4),
];

/// One dot per slide.
pub fn dots(total: usize) -> Vec<NavigationBinding> {
    (0..total).map(NavigationBinding::dot).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSnapshot {
    pub active: usize,
    pub total: usize,
    /// The "scroll down" affordance is hidden on the last slide.
    pub scroll_indicator_visible: bool,
}

impl NavSnapshot {
    pub fn sync(current: usize, total: usize) -> Self {
        Self {
            active: current,
            total,
            scroll_indicator_visible: current + 1 < total,
        }
    }

    pub fn is_active(&self, binding: &NavigationBinding) -> bool {
        binding.target == self.active
    }

    pub fn progress_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.active + 1) as f64 / self.total as f64 * 100.0
    }

    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.active + 1, self.total)
    }
}
