//! Static export pipeline for the atelier portfolio.
//!
//! Renders the compiled-in catalog and landing collections into a fully
//! static site: one detail page per catalog slug, the landing page, a
//! not-found page, and the supporting assets.

pub mod assets;
pub mod builder;
pub mod layout;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder, SiteContent};
