//! Slide transition engine: applies slide changes and gates gesture bursts.
//!
//! Time is passed in explicitly (milliseconds on a monotonic clock) so the
//! gate stays deterministic under test. The rendered transform and the nav
//! snapshot are written only when a change actually happens.

use tracing::debug;

use super::gesture::Intent;
use super::nav::NavSnapshot;
use super::registry::{SlideChange, SlideRegistry};

/// Cooldown after each transition. Time-based: while closed, every gated
/// intent is dropped no matter how many arrive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionGate {
    cooldown_ms: f64,
    busy_until: Option<f64>,
}

impl TransitionGate {
    pub fn new(cooldown_ms: f64) -> Self {
        Self {
            cooldown_ms,
            busy_until: None,
        }
    }

    pub fn is_open(&self, now_ms: f64) -> bool {
        self.busy_until.map_or(true, |until| now_ms >= until)
    }

    fn close(&mut self, now_ms: f64) {
        self.busy_until = Some(now_ms + self.cooldown_ms);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideEngine {
    registry: SlideRegistry,
    gate: TransitionGate,
    transform: String,
    nav: NavSnapshot,
    revision: u64,
}

impl SlideEngine {
    pub fn new(registry: SlideRegistry, cooldown_ms: f64) -> Self {
        let nav = NavSnapshot::sync(registry.current(), registry.len());
        let transform = transform_for(registry.current());
        Self {
            registry,
            gate: TransitionGate::new(cooldown_ms),
            transform,
            nav,
            revision: 0,
        }
    }

    pub fn registry(&self) -> &SlideRegistry {
        &self.registry
    }

    pub fn current(&self) -> usize {
        self.registry.current()
    }

    /// CSS transform for the slide container.
    pub fn transform(&self) -> &str {
        &self.transform
    }

    pub fn nav(&self) -> &NavSnapshot {
        &self.nav
    }

    /// Bumped once per applied change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_transitioning(&self, now_ms: f64) -> bool {
        !self.gate.is_open(now_ms)
    }

    /// Jump to `index` (nav links, dots, hash routes). Out-of-range and
    /// current targets do nothing. A successful jump starts the cooldown.
    pub fn go_to(&mut self, index: usize, now_ms: f64) -> Option<SlideChange> {
        let change = self.registry.set_current(index)?;
        self.gate.close(now_ms);
        self.transform = transform_for(change.to);
        self.nav = NavSnapshot::sync(change.to, self.registry.len());
        self.revision += 1;
        debug!(from = change.from, to = change.to, "slide changed");
        Some(change)
    }

    /// Apply a gesture intent unless a transition is still in flight.
    pub fn apply(&mut self, intent: Intent, now_ms: f64) -> Option<SlideChange> {
        if !self.gate.is_open(now_ms) {
            return None;
        }
        let current = self.registry.current();
        let target = match intent {
            Intent::Advance => current.checked_add(1)?,
            Intent::Retreat => current.checked_sub(1)?,
            Intent::First => 0,
            Intent::Last => self.registry.last_index()?,
        };
        self.go_to(target, now_ms)
    }

    pub fn advance(&mut self, now_ms: f64) -> Option<SlideChange> {
        self.apply(Intent::Advance, now_ms)
    }

    pub fn retreat(&mut self, now_ms: f64) -> Option<SlideChange> {
        self.apply(Intent::Retreat, now_ms)
    }
}

/// Each slide is one viewport tall, so the offset is `index * 100vh`.
fn transform_for(index: usize) -> String {
    format!("translateY(-{}vh)", index * 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COOLDOWN: f64 = 800.0;

    fn engine() -> SlideEngine {
        SlideEngine::new(SlideRegistry::site(), COOLDOWN)
    }

    #[test]
    fn out_of_range_go_to_leaves_index() {
        let mut eng = engine();
        assert!(eng.go_to(7, 0.0).is_none());
        assert!(eng.go_to(usize::MAX, 0.0).is_none());
        assert_eq!(eng.current(), 0);
    }

    #[test]
    fn go_to_current_writes_nothing() {
        let mut eng = engine();
        eng.go_to(2, 0.0);
        let before = eng.clone();
        assert!(eng.go_to(2, 5000.0).is_none());
        assert_eq!(eng, before);
        assert_eq!(eng.revision(), 1);
    }

    #[test]
    fn go_to_updates_transform_active_slide_and_nav() {
        let mut eng = engine();
        let change = eng.go_to(3, 0.0).unwrap();
        assert_eq!(change, SlideChange { from: 0, to: 3 });
        assert_eq!(eng.transform(), "translateY(-300vh)");
        let active: Vec<_> = (0..5).filter(|&i| eng.registry().is_active(i)).collect();
        assert_eq!(active, vec![3]);
        assert_eq!(eng.nav().active, 3);
    }

    #[test]
    fn advancing_reaches_last_then_clamps() {
        let mut eng = engine();
        let mut now = 0.0;
        for _ in 0..4 {
            assert!(eng.advance(now).is_some());
            now += COOLDOWN;
        }
        assert_eq!(eng.current(), 4);
        assert!(eng.advance(now).is_none());
        assert_eq!(eng.current(), 4);
        assert!(!eng.nav().scroll_indicator_visible);
    }

    #[test]
    fn retreat_at_first_slide_is_noop() {
        let mut eng = engine();
        assert!(eng.retreat(0.0).is_none());
        assert_eq!(eng.revision(), 0);
    }

    #[test]
    fn burst_within_cooldown_moves_once() {
        let mut eng = engine();
        assert!(eng.advance(0.0).is_some());
        assert!(eng.advance(120.0).is_none());
        assert!(eng.advance(799.0).is_none());
        assert_eq!(eng.current(), 1);
        assert!(eng.advance(800.0).is_some());
        assert_eq!(eng.current(), 2);
    }

    #[test]
    fn boundary_noop_does_not_close_gate() {
        let mut eng = engine();
        assert!(eng.retreat(0.0).is_none());
        assert!(!eng.is_transitioning(0.0));
        assert!(eng.advance(1.0).is_some());
    }

    #[test]
    fn jumps_respect_the_gate() {
        let mut eng = engine();
        eng.advance(0.0);
        assert!(eng.apply(Intent::Last, 100.0).is_none());
        assert_eq!(eng.apply(Intent::Last, 900.0).map(|c| c.to), Some(4));
        assert_eq!(eng.apply(Intent::First, 1800.0).map(|c| c.to), Some(0));
    }

    #[test]
    fn explicit_jump_closes_gate_for_gestures() {
        let mut eng = engine();
        eng.go_to(2, 0.0);
        assert!(eng.is_transitioning(10.0));
        assert!(eng.advance(10.0).is_none());
    }
}
