//! Landing-page collections: the film grid and the design-narrative section.
//!
//! These are authored independently of the catalog. Films carry no slugs at
//! all; case-study cards link into the catalog and are validated against it
//! at build time.

use serde::Serialize;

use crate::model::VideoId;

/// One film in the landing "Work" grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Film {
    pub title: String,
    pub category: String,
    pub year: String,

    /// Path to the cover still
    pub cover: String,

    /// Playable video, if one is published. Cards without a video render
    /// without a play affordance; clicking them is a no-op for playback.
    pub video: Option<VideoId>,

    pub description: String,
}

/// The compiled-in film list.
pub fn films() -> Vec<Film> {
    vec![
        Film {
            title: "My Nun Mom".to_string(),
            category: "Documentary".to_string(),
            year: "2025".to_string(),
            cover: "/work1.jpg".to_string(),
            video: VideoId::parse("1119700042"),
            description: "When my mom decided to not being a mom anymore".to_string(),
        },
        Film {
            title: "Mapping the Hidden World".to_string(),
            category: "Scientific Doc".to_string(),
            year: "2025".to_string(),
            cover: "/work2.png".to_string(),
            video: None,
            description: "Exploring hidden world and marine co-existence".to_string(),
        },
        Film {
            title: "Fra øst til nord (断裂)".to_string(),
            category: "Documentary".to_string(),
            year: "2025".to_string(),
            cover: "/work3.jpg".to_string(),
            video: None,
            description: "The 6th year as an immigrant in Norway,".to_string(),
        },
    ]
}

/// One card in the design-narrative section, linking into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseStudyCard {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub tags: Vec<String>,

    /// Catalog slug of the detail page this card opens
    pub slug: String,

    /// Path to the card image, if one has been supplied
    pub image: Option<String>,

    /// Text shown in the image panel while no image is supplied
    pub placeholder: String,
}

/// The compiled-in case-study cards, in presentation order.
pub fn case_study_cards() -> Vec<CaseStudyCard> {
    vec![
        CaseStudyCard {
            title: "Service Design in Chinese Community | 2019".to_string(),
            subtitle: "Ethnographic Study & Research".to_string(),
            description: "An ethnographic study conducted in Fengle Community, Anhui. It \
                          explores the emerging relationships among the government, service \
                          providers, and local residents."
                .to_string(),
            tags: vec![
                "Ethnography".to_string(),
                "Stakeholder Map".to_string(),
                "Research".to_string(),
            ],
            slug: "community-service-design".to_string(),
            image: Some("/images/community-photo.jpg".to_string()),
            placeholder: "Suggested: Field photo (PDF p.33)".to_string(),
        },
        CaseStudyCard {
            title: "Simple Diabetic Life".to_string(),
            subtitle: "Product Service System | 2015".to_string(),
            description: "A digital management system designed for Type 2 diabetes. It \
                          bridges the information gap between doctors and patients through \
                          data visualization."
                .to_string(),
            tags: vec![
                "Service Blueprint".to_string(),
                "Data Viz".to_string(),
                "Health Tech".to_string(),
            ],
            slug: "simple-diabetic-life".to_string(),
            image: Some("/images/diabetic-ui.jpg".to_string()),
            placeholder: "Suggested: UI Mockups (PDF p.27)".to_string(),
        },
    ]
}

/// Style tokens for one rendition of the design-narrative section.
///
/// The section is a single component parameterized by a theme and a card
/// list; the two palettes below are the two renditions that shipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionTheme {
    /// Token name, also used as a CSS class on the section root
    pub name: String,

    /// Accent color for headings, rules, and hover states
    pub accent: String,

    /// Background of the image panel
    pub panel: String,

    /// Section heading text
    pub heading: String,

    /// Short line under the heading
    pub tagline: String,
}

impl SectionTheme {
    /// The dark rendition used on the published landing page.
    pub fn ember() -> Self {
        Self {
            name: "ember".to_string(),
            accent: "#dc2626".to_string(),
            panel: "#111827".to_string(),
            heading: "Design as Narrative".to_string(),
            tagline: "It is not just about solving problems, but telling stories about \
                      systems, environments, and people."
                .to_string(),
        }
    }

    /// The earlier light rendition, kept as an alternative token set.
    pub fn daylight() -> Self {
        Self {
            name: "daylight".to_string(),
            accent: "#2563eb".to_string(),
            panel: "#eff6ff".to_string(),
            heading: "Design as Narrative".to_string(),
            tagline: "It is not just about solving problems, but telling stories about \
                      systems, environments, and people."
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_first_film_is_playable() {
        let films = films();

        assert_eq!(films.len(), 3);
        assert_eq!(films[0].video.as_ref().map(VideoId::as_str), Some("1119700042"));
        assert!(films[1].video.is_none());
        assert!(films[2].video.is_none());
    }

    #[test]
    fn cards_carry_catalog_slugs() {
        let slugs: Vec<String> = case_study_cards().into_iter().map(|c| c.slug).collect();
        assert_eq!(
            slugs,
            vec!["community-service-design", "simple-diabetic-life"]
        );
    }

    #[test]
    fn themes_differ_only_in_tokens() {
        let ember = SectionTheme::ember();
        let daylight = SectionTheme::daylight();

        assert_ne!(ember.accent, daylight.accent);
        assert_eq!(ember.heading, daylight.heading);
    }
}
