//! Shared UI crate for the Experience retreats site: a five-slide page with
//! live language switching, an availability listing and a contact form.

pub mod availability;
pub mod components;
pub mod config;
pub mod contact;
pub mod core;
pub mod i18n;
pub mod slides;
pub mod views;

mod site;
pub use site::Site;
