//! Vertical slide presentation: registry, gesture intents, transition engine
//! and navigation state, plus the deck component that wires them to input.

pub mod engine;
pub mod gesture;
pub mod nav;
pub mod registry;
mod view;

pub use engine::{SlideEngine, TransitionGate};
pub use gesture::{Intent, KeyOrigin, SwipeTracker};
pub use nav::{NavSnapshot, NavigationBinding, HEADER_LINKS};
pub use registry::{SlideChange, SlideRegistry, CONTACT_SLIDE};
pub use view::{use_slide_deck, DeckEvent, SlideDeck, SlideFrame};
