//! Core record types for the project catalog.

use serde::Serialize;

/// An opaque identifier for an externally hosted video.
///
/// The identifier is guaranteed non-empty; "no video" is always modeled as
/// `Option::<VideoId>::None`, never as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Parse a raw identifier, treating blank input as absent.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL of the embeddable player frame for this video.
    pub fn embed_url(&self) -> String {
        format!(
            "https://player.vimeo.com/video/{}?autoplay=1&title=0&byline=0&portrait=0",
            self.0
        )
    }
}

/// One narrative unit within a detail page.
///
/// Image and caption are independently optional: the data does not force a
/// caption to come with an image, and the renderer must tolerate every
/// combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chapter {
    /// Chapter heading
    pub title: String,

    /// Body prose (markdown)
    pub body: String,

    /// Path to the chapter illustration, if any
    pub image: Option<String>,

    /// Figure caption, if any
    pub caption: Option<String>,
}

impl Chapter {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            image: None,
            caption: None,
        }
    }

    pub fn with_image(mut self, path: impl Into<String>) -> Self {
        self.image = Some(path.into());
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// Forward pointer to the project presented after this one.
///
/// Only the slug participates in navigation; the title is display text for
/// the footer link. The pointer is resolved lazily when the reader follows
/// it, so cycles of any length are safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextProjectRef {
    pub title: String,
    pub slug: String,
}

impl NextProjectRef {
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
        }
    }
}

/// A full detail-page record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDetail {
    pub title: String,
    pub subtitle: String,
    pub year: String,

    /// The author's role on the project
    pub role: String,

    /// Path to the hero image
    pub hero_image: String,

    /// Introduction prose (markdown)
    pub intro: String,

    /// External video identifier. Carried in the record but not rendered on
    /// the detail page.
    pub video: Option<VideoId>,

    /// Ordered narrative chapters. May be empty, in which case the page
    /// degenerates to hero + intro + footer.
    pub chapters: Vec<Chapter>,

    pub next: NextProjectRef,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_video_id_is_absent() {
        assert_eq!(VideoId::parse(""), None);
        assert_eq!(VideoId::parse("   "), None);
    }

    #[test]
    fn video_id_trims_and_keeps_content() {
        let id = VideoId::parse(" 365052203 ").unwrap();
        assert_eq!(id.as_str(), "365052203");
    }

    #[test]
    fn embed_url_addresses_the_player() {
        let id = VideoId::parse("1119700042").unwrap();
        assert_eq!(
            id.embed_url(),
            "https://player.vimeo.com/video/1119700042?autoplay=1&title=0&byline=0&portrait=0"
        );
    }

    #[test]
    fn chapter_builder_keeps_image_and_caption_independent() {
        let bare = Chapter::new("The Field", "Weeks on site.");
        assert_eq!(bare.image, None);
        assert_eq!(bare.caption, None);

        let captioned = Chapter::new("The Field", "Weeks on site.")
            .with_caption("Field notes, week two.");
        assert_eq!(captioned.image, None);
        assert_eq!(
            captioned.caption.as_deref(),
            Some("Field notes, week two.")
        );

        let illustrated =
            Chapter::new("The Field", "Weeks on site.").with_image("/images/field.jpg");
        assert_eq!(illustrated.image.as_deref(), Some("/images/field.jpg"));
        assert_eq!(illustrated.caption, None);
    }
}
