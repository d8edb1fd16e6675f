//! Page sections

mod contact;
mod footer;
mod header;
mod hero;
mod reflections;

pub use contact::ContactSection;
pub use footer::SiteFooter;
pub use header::SiteHeader;
pub use hero::HeroSection;
pub use reflections::ReflectionsSection;
