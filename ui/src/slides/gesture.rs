//! Normalises wheel, keyboard and touch input into slide intents.
//!
//! Channels never move slides themselves: they only produce an [`Intent`]
//! which the engine applies through its transition gate.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Advance,
    Retreat,
    First,
    Last,
}

/// Where a key press originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOrigin {
    Page,
    /// Focus is inside an input, textarea or select.
    TextEntry,
}

/// Any nonzero vertical delta is exactly one intent; magnitude is ignored.
pub fn wheel_intent(delta_y: f64) -> Option<Intent> {
    if delta_y > 0.0 {
        Some(Intent::Advance)
    } else if delta_y < 0.0 {
        Some(Intent::Retreat)
    } else {
        None
    }
}

/// Map a key name (`KeyboardEvent.key`) to an intent.
pub fn key_intent(key: &str, origin: KeyOrigin) -> Option<Intent> {
    if origin == KeyOrigin::TextEntry {
        return None;
    }
    match key {
        "ArrowDown" | "PageDown" | " " | "Space" | "Spacebar" => Some(Intent::Advance),
        "ArrowUp" | "PageUp" => Some(Intent::Retreat),
        "Home" => Some(Intent::First),
        "End" => Some(Intent::Last),
        _ => None,
    }
}

/// Tracks one touch from start to end and classifies it as a swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    threshold: f64,
    start_y: Option<f64>,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start_y: None,
        }
    }

    pub fn touch_start(&mut self, y: f64) {
        self.start_y = Some(y);
    }

    /// Finger moving up (start below end) advances; moving down retreats.
    /// Travel at or under the threshold is not a gesture.
    pub fn touch_end(&mut self, y: f64) -> Option<Intent> {
        let start = self.start_y.take()?;
        let travel = start - y;
        if travel.abs() <= self.threshold {
            return None;
        }
        if travel > 0.0 {
            Some(Intent::Advance)
        } else {
            Some(Intent::Retreat)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_sign_decides_direction() {
        assert_eq!(wheel_intent(0.5), Some(Intent::Advance));
        assert_eq!(wheel_intent(-900.0), Some(Intent::Retreat));
        assert_eq!(wheel_intent(0.0), None);
        assert_eq!(wheel_intent(f64::NAN), None);
    }

    #[test]
    fn key_table() {
        assert_eq!(key_intent("ArrowDown", KeyOrigin::Page), Some(Intent::Advance));
        assert_eq!(key_intent(" ", KeyOrigin::Page), Some(Intent::Advance));
        assert_eq!(key_intent("PageUp", KeyOrigin::Page), Some(Intent::Retreat));
        assert_eq!(key_intent("Home", KeyOrigin::Page), Some(Intent::First));
        assert_eq!(key_intent("End", KeyOrigin::Page), Some(Intent::Last));
        assert_eq!(key_intent("a", KeyOrigin::Page), None);
    }

    #[test]
    fn typing_in_form_fields_is_ignored() {
        assert_eq!(key_intent("ArrowDown", KeyOrigin::TextEntry), None);
        assert_eq!(key_intent(" ", KeyOrigin::TextEntry), None);
    }

    #[test]
    fn short_swipe_is_not_a_gesture() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.touch_start(400.0);
        assert_eq!(swipe.touch_end(370.0), None);
    }

    #[test]
    fn long_swipes_map_to_direction() {
        let mut swipe = SwipeTracker::new(50.0);
        swipe.touch_start(400.0);
        assert_eq!(swipe.touch_end(320.0), Some(Intent::Advance));
        swipe.touch_start(300.0);
        assert_eq!(swipe.touch_end(380.0), Some(Intent::Retreat));
    }

    #[test]
    fn end_without_start_is_ignored() {
        let mut swipe = SwipeTracker::new(50.0);
        assert_eq!(swipe.touch_end(10.0), None);
        swipe.touch_start(500.0);
        swipe.touch_end(100.0);
        assert_eq!(swipe.touch_end(0.0), None);
    }
}
