//! The slug -> project catalog and its resolver.

use std::collections::BTreeMap;

use crate::model::{Chapter, NextProjectRef, ProjectDetail, VideoId};

/// The requested slug is not a catalog key.
///
/// This is the only error the resolution path can produce. It is terminal:
/// callers render a not-found response, they never fall back to a default
/// project.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no project published under slug '{slug}'")]
pub struct NotFound {
    pub slug: String,
}

/// Immutable mapping from slug to detail record.
///
/// Built once, read-only thereafter. Keys are stored ordered so route
/// enumeration is deterministic across builds.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: BTreeMap<String, ProjectDetail>,
}

impl Catalog {
    /// The compiled-in catalog of design case studies.
    pub fn published() -> Self {
        let mut entries = BTreeMap::new();

        entries.insert(
            "simple-diabetic-life".to_string(),
            ProjectDetail {
                title: "Simple Diabetic Life".to_string(),
                subtitle: "Product Service System Design".to_string(),
                year: "2016".to_string(),
                role: "Service Designer & Researcher".to_string(),
                hero_image: "/images/diabetic-ui.jpg".to_string(),
                intro: "A digital ecosystem bridging the information gap between doctors \
                        and Type-2 diabetes patients, making chronic disease management \
                        proactive rather than reactive."
                    .to_string(),
                video: VideoId::parse("365052203"),
                chapters: vec![
                    Chapter::new(
                        "The Context",
                        "Type 2 diabetes is a chronic condition requiring constant \
                         self-management. However, our research revealed a critical \
                         disconnection: doctors lack direct channels to guide patients at \
                         home, while patients struggle to keep accurate records for their \
                         consultations. This 'black box' period between hospital visits \
                         leads to inefficient treatment.",
                    )
                    .with_image("/images/diabetic-blueprint.jpg")
                    .with_caption(
                        "Service Blueprint: Mapping the flow from home self-management to \
                         hospital diagnosis.",
                    ),
                    Chapter::new(
                        "The System",
                        "We designed a dual-terminal system. For patients, a mobile app \
                         simplifies the recording of glucose, nutrition, and activity \
                         through visual logs. For doctors, a desktop dashboard visualizes \
                         this patient data, allowing them to adjust treatment plans with \
                         precision rather than guesswork.",
                    )
                    .with_image("/images/diabetic-system.jpg")
                    .with_caption("System Map: Connecting patients, doctors, and data cloud."),
                    Chapter::new(
                        "Visualizing Data",
                        "The core interaction challenge was transforming complex medical \
                         data into intuitive insights. We used color-coded graphs and \
                         'plan circles' to give patients an immediate sense of control \
                         over their daily routine, while giving doctors a quick snapshot \
                         of the patient's long-term trends.",
                    )
                    .with_image("/images/diabetic-interface.jpg")
                    .with_caption(
                        "Interface Design: Visualizing health data for instant understanding.",
                    ),
                ],
                next: NextProjectRef::new(
                    "Service Design in Chinese Community",
                    "community-service-design",
                ),
            },
        );

        entries.insert(
            "community-service-design".to_string(),
            ProjectDetail {
                title: "Service Design in Chinese Community".to_string(),
                subtitle: "Ethnographic Study & Research".to_string(),
                year: "2019".to_string(),
                role: "Ethnographic Designer".to_string(),
                hero_image: "/images/community-photo.jpg".to_string(),
                intro: "An in-depth ethnographic study in Fengle Community, exploring how \
                        design can facilitate better collaboration among the government, \
                        service providers, and local residents."
                    .to_string(),
                video: None,
                chapters: vec![
                    Chapter::new(
                        "The Field",
                        "Fengle Community in Anhui is a microcosm of China's rapid \
                         urbanization. With 8,900 residents and a mix of state-owned and \
                         private institutions, it faces the challenge of transitioning \
                         from a 'managed' unit to a 'service-oriented' community. We \
                         spent weeks on-site, observing the unspoken dynamics between the \
                         community staff and residents.",
                    )
                    .with_image("/images/community-field.jpg")
                    .with_caption("Field Research: The community center and daily interactions."),
                    Chapter::new(
                        "The Conflict",
                        "Our stakeholder mapping revealed a structural problem: The \
                         'Service Facilitators' (community workers) were stuck in the \
                         middle. They lacked the capability to identify real resident \
                         needs and were passive in facilitating external service \
                         providers. This led to a mismatch between government-supplied \
                         services and what residents actually wanted.",
                    )
                    .with_image("/images/community-stakeholder.jpg")
                    .with_caption("Stakeholder Map: Analyzing the relationships and pain points."),
                    Chapter::new(
                        "The Insight",
                        "The study concludes that service design in this context isn't \
                         just about optimizing flowchart. It's about empowering the \
                         community workers to become active 'Service Planners'. By \
                         introducing design tools, we can help them translate resident \
                         complaints into actionable service proposals.",
                    )
                    .with_image("/images/community-diagram.jpg")
                    .with_caption(
                        "Service Ecology: Proposing a new model for multi-participation.",
                    ),
                ],
                next: NextProjectRef::new("Simple Diabetic Life", "simple-diabetic-life"),
            },
        );

        Self { entries }
    }

    /// Resolve a slug to its record.
    ///
    /// The match is exact-string: no normalization, no case folding, no
    /// partial matches.
    pub fn resolve(&self, slug: &str) -> Result<&ProjectDetail, NotFound> {
        self.entries.get(slug).ok_or_else(|| NotFound {
            slug: slug.to_string(),
        })
    }

    /// Every valid slug, in stable order. This is the complete route surface
    /// of the detail pages: one generated page per slug, nothing else.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate entries in slug order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProjectDetail)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolves_published_slug_to_its_record() {
        let catalog = Catalog::published();
        let project = catalog.resolve("simple-diabetic-life").unwrap();

        assert_eq!(project.title, "Simple Diabetic Life");
        assert_eq!(project.year, "2016");
        assert_eq!(project.chapters.len(), 3);
        assert_eq!(project.chapters[0].title, "The Context");
    }

    #[test]
    fn resolve_returns_the_stored_record() {
        let catalog = Catalog::published();
        for (slug, stored) in catalog.iter() {
            assert_eq!(catalog.resolve(slug).unwrap(), stored);
        }
    }

    #[test]
    fn unknown_slug_is_not_found() {
        let catalog = Catalog::published();
        let err = catalog.resolve("not-a-real-slug").unwrap_err();
        assert_eq!(err.slug, "not-a-real-slug");
    }

    #[test]
    fn match_is_exact_string() {
        let catalog = Catalog::published();
        assert!(catalog.resolve("Simple-Diabetic-Life").is_err());
        assert!(catalog.resolve("simple-diabetic-life/").is_err());
        assert!(catalog.resolve(" simple-diabetic-life").is_err());
        assert!(catalog.resolve("").is_err());
    }

    #[test]
    fn next_pointers_form_a_navigable_cycle() {
        let catalog = Catalog::published();

        let community = catalog.resolve("community-service-design").unwrap();
        assert_eq!(community.next.slug, "simple-diabetic-life");

        let diabetic = catalog.resolve(&community.next.slug).unwrap();
        assert_eq!(diabetic.next.slug, "community-service-design");
    }

    #[test]
    fn slugs_enumerate_every_entry_in_stable_order() {
        let catalog = Catalog::published();
        let slugs: Vec<&str> = catalog.slugs().collect();

        assert_eq!(
            slugs,
            vec!["community-service-design", "simple-diabetic-life"]
        );
        assert_eq!(slugs.len(), catalog.len());
    }
}
