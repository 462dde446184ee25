//! Pages
//!
//! Top-level page components for each route.

pub mod home;
pub mod section;

pub use home::Home;
pub use section::Section;
