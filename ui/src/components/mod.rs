pub mod language;
pub mod loader;
pub mod notice;
pub mod site_header;
pub mod video;

pub use language::{LanguageEvent, LanguageToggle};
pub use loader::IntroLoader;
pub use notice::{show_notice, Notice, NoticeKind, NoticeToast};
pub use site_header::SiteHeader;
pub use video::{SoundToggle, VideoBackdrop, VideoSound};
