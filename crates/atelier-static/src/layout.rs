//! Narrative layout rules for detail pages.
//!
//! Everything here is a pure function of the record: chapter sides alternate
//! by ordinal parity, labels and figure lines are derived from position, and
//! prose passes through the markdown renderer. No state survives a render.

use serde::Serialize;

use atelier_content::Chapter;

/// A chapter prepared for the template, with all position-derived fields
/// resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterView {
    /// Auto-numbered "Chapter 0N" kicker
    pub label: String,

    pub title: String,

    /// Body prose rendered to HTML
    pub body_html: String,

    /// Image panel precedes the text panel when true
    pub reversed: bool,

    /// Image path, or `None` for the empty placeholder frame
    pub image: Option<String>,

    /// Full "fig. N — ..." line, or `None` when the chapter has no caption
    pub figure: Option<String>,
}

/// Whether the chapter at zero-based ordinal `i` renders image-first.
///
/// Alternation is purely a function of parity: odd ordinals are reversed.
pub fn is_reversed(ordinal: usize) -> bool {
    ordinal % 2 == 1
}

/// The "Chapter 0N" kicker for the chapter at zero-based ordinal `i`.
pub fn chapter_label(ordinal: usize) -> String {
    format!("Chapter {:02}", ordinal + 1)
}

/// The one-based figure line for a caption at zero-based ordinal `i`.
pub fn figure_line(ordinal: usize, caption: &str) -> String {
    format!("fig. {} — {}", ordinal + 1, caption)
}

/// Render markdown prose to HTML.
pub fn render_markdown(content: &str) -> String {
    use pulldown_cmark::{html, Options, Parser};

    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(content, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

/// Lay out a chapter sequence, resolving every position-derived field.
pub fn chapter_views(chapters: &[Chapter]) -> Vec<ChapterView> {
    chapters
        .iter()
        .enumerate()
        .map(|(ordinal, chapter)| ChapterView {
            label: chapter_label(ordinal),
            title: chapter.title.clone(),
            body_html: render_markdown(&chapter.body),
            reversed: is_reversed(ordinal),
            image: chapter.image.clone(),
            figure: chapter
                .caption
                .as_deref()
                .map(|caption| figure_line(ordinal, caption)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_alternate_by_parity() {
        assert!(!is_reversed(0));
        assert!(is_reversed(1));
        assert!(!is_reversed(2));
        assert!(is_reversed(3));
    }

    #[test]
    fn labels_are_zero_padded() {
        assert_eq!(chapter_label(0), "Chapter 01");
        assert_eq!(chapter_label(2), "Chapter 03");
        assert_eq!(chapter_label(8), "Chapter 09");
        assert_eq!(chapter_label(9), "Chapter 10");
    }

    #[test]
    fn figure_line_is_one_based() {
        assert_eq!(
            figure_line(0, "Service Blueprint overview."),
            "fig. 1 — Service Blueprint overview."
        );
        assert_eq!(figure_line(2, "System map."), "fig. 3 — System map.");
    }

    #[test]
    fn renders_markdown_paragraphs() {
        let html = render_markdown("First paragraph.\n\nSecond paragraph.");

        assert!(html.contains("<p>First paragraph.</p>"));
        assert!(html.contains("<p>Second paragraph.</p>"));
    }

    #[test]
    fn views_resolve_position_derived_fields() {
        let chapters = vec![
            Chapter::new("The Context", "Research.")
                .with_image("/images/a.jpg")
                .with_caption("Blueprint."),
            Chapter::new("The System", "Two terminals."),
        ];

        let views = chapter_views(&chapters);

        assert_eq!(views.len(), 2);

        assert_eq!(views[0].label, "Chapter 01");
        assert!(!views[0].reversed);
        assert_eq!(views[0].image.as_deref(), Some("/images/a.jpg"));
        assert_eq!(views[0].figure.as_deref(), Some("fig. 1 — Blueprint."));

        assert_eq!(views[1].label, "Chapter 02");
        assert!(views[1].reversed);
        assert_eq!(views[1].image, None);
        assert_eq!(views[1].figure, None);
    }

    #[test]
    fn caption_without_image_still_gets_a_figure_line() {
        let chapters = vec![Chapter::new("Notes", "Prose.").with_caption("Orphan caption.")];

        let views = chapter_views(&chapters);

        assert_eq!(views[0].image, None);
        assert_eq!(views[0].figure.as_deref(), Some("fig. 1 — Orphan caption."));
    }

    #[test]
    fn empty_sequence_degenerates_cleanly() {
        assert!(chapter_views(&[]).is_empty());
    }
}
