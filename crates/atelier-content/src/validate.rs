//! Build-time referential-integrity checks.
//!
//! The film list and the case-study catalog are independently authored
//! collections; the only cross-references that must hold are slug links into
//! the catalog. Every violation is collected so one broken link does not
//! hide the next.

use crate::catalog::Catalog;
use crate::landing::CaseStudyCard;

/// A slug reference that does not land on a catalog key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityError {
    #[error("'{from}' points at next project '{to}', which is not in the catalog")]
    DanglingNext { from: String, to: String },

    #[error("landing card '{title}' links to unknown slug '{slug}'")]
    DanglingCard { title: String, slug: String },
}

/// Check every cross-collection slug reference.
///
/// Returns all violations found, or `Ok` when every next-pointer and every
/// card link resolves.
pub fn check_links(catalog: &Catalog, cards: &[CaseStudyCard]) -> Result<(), Vec<IntegrityError>> {
    let mut errors = Vec::new();

    for (slug, project) in catalog.iter() {
        if catalog.resolve(&project.next.slug).is_err() {
            errors.push(IntegrityError::DanglingNext {
                from: slug.to_string(),
                to: project.next.slug.clone(),
            });
        }
    }

    for card in cards {
        if catalog.resolve(&card.slug).is_err() {
            errors.push(IntegrityError::DanglingCard {
                title: card.title.clone(),
                slug: card.slug.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landing::case_study_cards;

    #[test]
    fn published_content_is_consistent() {
        let catalog = Catalog::published();
        assert_eq!(check_links(&catalog, &case_study_cards()), Ok(()));
    }

    #[test]
    fn reports_a_dangling_card_link() {
        let catalog = Catalog::published();
        let mut cards = case_study_cards();
        cards[0].slug = "retired-study".to_string();

        let errors = check_links(&catalog, &cards).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            IntegrityError::DanglingCard { slug, .. } if slug == "retired-study"
        ));
    }

    #[test]
    fn collects_every_violation() {
        let catalog = Catalog::published();
        let mut cards = case_study_cards();
        cards[0].slug = "gone".to_string();
        cards[1].slug = "also-gone".to_string();

        let errors = check_links(&catalog, &cards).unwrap_err();

        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn error_messages_name_the_broken_reference() {
        let err = IntegrityError::DanglingNext {
            from: "simple-diabetic-life".to_string(),
            to: "vanished".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "'simple-diabetic-life' points at next project 'vanished', which is not in the catalog"
        );
    }
}
