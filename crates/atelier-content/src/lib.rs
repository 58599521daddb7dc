//! Compiled-in content for the atelier portfolio site.
//!
//! All content is literal data baked into the binary: the case-study catalog
//! that backs the `/work/<slug>/` detail pages, and the independent landing
//! collections (films and case-study cards). Nothing here touches the
//! filesystem or the network.

pub mod catalog;
pub mod landing;
pub mod model;
pub mod overlay;
pub mod validate;

pub use catalog::{Catalog, NotFound};
pub use landing::{CaseStudyCard, Film, SectionTheme};
pub use model::{Chapter, NextProjectRef, ProjectDetail, VideoId};
pub use overlay::{PlaybackOverlay, ScrollLock};
pub use validate::{check_links, IntegrityError};
