//! The five slides of the page, in deck order.

mod contact;
mod destination;
mod intro;
mod packages;
mod proximity;

pub use contact::ContactSlide;
pub use destination::DestinationSlide;
pub use intro::IntroSlide;
pub use packages::{Package, PackageModal, PackagesSlide};
pub use proximity::{ProximitySlide, DEPARTURES};
