//! Asset pipeline: stylesheet, overlay script, and public file copying.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the site stylesheet.
    pub fn generate_css() -> String {
        SITE_CSS.to_string()
    }

    /// Generate the playback overlay script.
    ///
    /// The script implements the same two-state contract as
    /// `atelier_content::overlay::PlaybackOverlay`: opening a playable card
    /// suspends page scroll, dismissing (close button or backdrop click)
    /// restores it.
    pub fn generate_overlay_js() -> String {
        OVERLAY_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }

    /// Copy a public asset directory into the export tree, preserving
    /// structure. Missing source directories copy nothing; referenced assets
    /// that do not exist are a deployment concern, not a build failure.
    pub fn copy_public(source: &Path, dest: &Path) -> std::io::Result<usize> {
        if !source.exists() {
            return Ok(0);
        }

        let mut copied = 0;

        for entry in WalkDir::new(source).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(source).unwrap_or(path);
            let target = dest.join(relative);

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }

            fs::copy(path, &target)?;
            copied += 1;
        }

        Ok(copied)
    }
}

const SITE_CSS: &str = r#"/* Atelier portfolio theme */

:root {
  --bg: #050505;
  --bg-raised: #0a0a0a;
  --ink: #e5e5e5;
  --ink-muted: #6b7280;
  --accent: #dc2626;
  --rule: #1f2937;
  --content-max-width: 72rem;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  background: var(--bg);
  color: var(--ink);
  line-height: 1.6;
}

body.overlay-open {
  overflow: hidden;
}

h1, h2, .hero-quote, .contact-quote, .next-project h2 {
  font-family: Georgia, 'Times New Roman', serif;
}

a {
  color: inherit;
  text-decoration: none;
}

a:hover {
  color: var(--accent);
}

.kicker {
  color: var(--accent);
  font-size: 0.7rem;
  font-weight: 700;
  letter-spacing: 0.4em;
  text-transform: uppercase;
}

/* Top navigation */
.topbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 40;
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 2rem;
  mix-blend-mode: difference;
}

.wordmark-main {
  display: block;
  font-size: 1.1rem;
  letter-spacing: 0.25em;
  text-transform: uppercase;
}

.wordmark-sub {
  display: block;
  font-size: 0.6rem;
  letter-spacing: 0.4em;
  text-transform: uppercase;
  color: var(--ink-muted);
}

.topbar-links a {
  margin-left: 2rem;
  font-size: 0.75rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
}

.topbar-note {
  font-size: 0.75rem;
  font-style: italic;
  color: var(--ink-muted);
}

.back-link {
  font-size: 0.8rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
}

/* Landing hero */
.hero {
  min-height: 85vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  text-align: center;
  padding: 6rem 1.5rem 3rem;
}

.hero h1 {
  font-size: clamp(3rem, 9vw, 6rem);
  font-style: italic;
  font-weight: 400;
  margin: 1.5rem 0 2rem;
}

.hero-quote {
  color: var(--ink-muted);
  font-size: 1.15rem;
  max-width: 36rem;
}

/* Film grid */
.film-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
  gap: 4rem 2rem;
  max-width: var(--content-max-width);
  margin: 0 auto;
  padding: 6rem 1.5rem;
}

.film-cover {
  position: relative;
  aspect-ratio: 16 / 9;
  overflow: hidden;
  background: var(--bg-raised);
  margin-bottom: 1.5rem;
}

.film-cover img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0.8;
  transition: opacity 0.5s;
}

.film:hover .film-cover img {
  opacity: 1;
}

.film.playable {
  cursor: pointer;
}

.play-badge {
  position: absolute;
  inset: 0;
  margin: auto;
  width: 4rem;
  height: 4rem;
  border: 1px solid rgba(255, 255, 255, 0.3);
  border-radius: 50%;
  background: center / 1.2rem no-repeat
    url("data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24' fill='white'%3E%3Cpath d='M8 5v14l11-7z'/%3E%3C/svg%3E");
  transition: background-color 0.3s, border-color 0.3s;
}

.film.playable:hover .play-badge {
  background-color: var(--accent);
  border-color: var(--accent);
}

.film-meta {
  display: flex;
  justify-content: space-between;
  gap: 1rem;
  border-top: 1px solid var(--rule);
  padding-top: 1rem;
}

.film-meta h3 {
  font-size: 1.4rem;
}

.film-meta p {
  color: var(--ink-muted);
  font-size: 0.9rem;
}

.film-tags {
  text-align: right;
  white-space: nowrap;
}

.film-year {
  display: block;
  font-family: ui-monospace, monospace;
  font-size: 0.75rem;
  color: var(--ink-muted);
}

.film-category {
  display: inline-block;
  margin-top: 0.25rem;
  padding: 0.1rem 0.5rem;
  font-size: 0.6rem;
  letter-spacing: 0.15em;
  text-transform: uppercase;
  color: var(--accent);
  border: 1px solid rgba(220, 38, 38, 0.3);
  border-radius: 0.25rem;
}

/* Design narrative section */
.design-section {
  border-top: 1px solid var(--rule);
  padding: 6rem 1.5rem;
}

.design-header {
  max-width: var(--content-max-width);
  margin: 0 auto 4rem;
}

.design-header h2 {
  font-size: 2.25rem;
  margin-bottom: 1rem;
}

.design-header h2::after {
  content: "";
  display: block;
  width: 5rem;
  height: 0.25rem;
  margin-top: 1rem;
  background: var(--accent);
}

.design-header p {
  color: var(--ink-muted);
  font-size: 1.1rem;
  max-width: 40rem;
}

.design-grid {
  display: grid;
  gap: 3rem;
  max-width: var(--content-max-width);
  margin: 0 auto;
}

.design-card {
  display: grid;
  grid-template-columns: 2fr 3fr;
  gap: 2rem;
  border-bottom: 1px solid var(--rule);
  padding-bottom: 3rem;
}

.design-card:last-child {
  border-bottom: none;
}

.design-cover {
  aspect-ratio: 4 / 3;
  overflow: hidden;
  background: var(--panel);
}

.design-cover img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0.85;
  transition: opacity 0.5s;
}

.design-card:hover .design-cover img {
  opacity: 1;
}

.design-placeholder {
  display: flex;
  align-items: center;
  justify-content: center;
  height: 100%;
  padding: 1.5rem;
  color: var(--ink-muted);
  font-size: 0.8rem;
  text-align: center;
}

.design-meta h3 {
  font-size: 1.5rem;
}

.design-subtitle {
  color: var(--accent);
  font-size: 0.8rem;
  letter-spacing: 0.15em;
  text-transform: uppercase;
  margin: 0.5rem 0 1rem;
}

.design-meta p {
  color: var(--ink-muted);
}

.design-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  list-style: none;
  margin-top: 1.25rem;
}

.design-tags li {
  padding: 0.15rem 0.6rem;
  font-size: 0.65rem;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  border: 1px solid var(--rule);
  border-radius: 1rem;
  color: var(--ink-muted);
}

/* Contact footer */
.contact {
  display: grid;
  grid-template-columns: 3fr 1fr;
  gap: 4rem;
  max-width: var(--content-max-width);
  margin: 0 auto;
  padding: 8rem 1.5rem 3rem;
  border-top: 1px solid var(--rule);
}

.contact h2 {
  font-family: system-ui, sans-serif;
  color: var(--accent);
  font-size: 0.7rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  margin-bottom: 2rem;
}

.contact-quote {
  font-size: 1.4rem;
  margin-bottom: 1rem;
}

.contact-bio p {
  color: var(--ink-muted);
  max-width: 28rem;
}

.contact-links {
  display: flex;
  flex-direction: column;
  align-items: flex-end;
  gap: 1.5rem;
  text-align: right;
}

.contact-social {
  display: flex;
  gap: 1.5rem;
  font-size: 0.85rem;
  color: var(--ink-muted);
}

.colophon {
  font-size: 0.7rem;
  color: #374151;
}

/* Playback overlay */
.overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.95);
}

.overlay[hidden] {
  display: none;
}

.overlay-close {
  position: absolute;
  top: 2rem;
  right: 2rem;
  background: none;
  border: none;
  color: rgba(255, 255, 255, 0.5);
  font-size: 2.5rem;
  line-height: 1;
  cursor: pointer;
}

.overlay-close:hover {
  color: #fff;
}

.overlay-frame {
  width: 100%;
  max-width: 72rem;
  aspect-ratio: 16 / 9;
  padding: 0 1rem;
}

.overlay-frame iframe {
  width: 100%;
  height: 100%;
  border: 0;
  border-radius: 0.25rem;
}

/* Project detail */
.project-hero {
  position: relative;
  min-height: 85vh;
  display: flex;
  align-items: flex-end;
}

.project-hero-image {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0.6;
}

.project-hero-text {
  position: relative;
  width: 100%;
  max-width: 56rem;
  margin: 0 auto;
  padding: 0 1.5rem 5rem;
}

.project-hero-text h1 {
  font-size: clamp(2.5rem, 7vw, 4.5rem);
  font-style: italic;
  font-weight: 400;
  margin: 1rem 0 2rem;
}

.project-facts {
  display: flex;
  gap: 3rem;
  border-top: 1px solid var(--rule);
  padding-top: 1.5rem;
  font-family: ui-monospace, monospace;
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.1em;
}

.project-facts dt {
  color: #4b5563;
  margin-bottom: 0.25rem;
}

.project-intro {
  max-width: 46rem;
  margin: 0 auto;
  padding: 6rem 1.5rem;
  text-align: center;
  font-size: 1.35rem;
  font-weight: 300;
  color: #d1d5db;
}

.project-intro::after {
  content: "";
  display: block;
  width: 1px;
  height: 5rem;
  margin: 4rem auto 0;
  background: linear-gradient(to bottom, var(--accent), transparent);
}

/* Chapters */
.chapters {
  display: flex;
  flex-direction: column;
  gap: 8rem;
  max-width: var(--content-max-width);
  margin: 0 auto;
  padding: 0 1.5rem 8rem;
}

.chapter {
  display: flex;
  gap: 3rem;
  align-items: flex-start;
}

.chapter.reversed {
  flex-direction: row-reverse;
}

.chapter-text,
.chapter-media {
  flex: 1;
}

.chapter-text h2 {
  font-size: 1.9rem;
  margin-bottom: 1.5rem;
}

.chapter-text h2 .kicker {
  display: block;
  font-family: system-ui, sans-serif;
  margin-bottom: 0.5rem;
}

.chapter-text p {
  color: #9ca3af;
  font-weight: 300;
  font-size: 1.1rem;
  margin-bottom: 1rem;
}

.chapter-panel {
  min-height: 16rem;
  background: var(--bg-raised);
  border: 1px solid var(--rule);
  border-radius: 0.125rem;
  overflow: hidden;
}

.chapter-panel img {
  display: block;
  width: 100%;
  height: auto;
  opacity: 0.9;
}

.figure-line {
  margin-top: 1rem;
  padding-left: 0.75rem;
  border-left: 1px solid var(--accent);
  font-size: 0.65rem;
  letter-spacing: 0.15em;
  text-transform: uppercase;
  color: #4b5563;
}

/* Next project footer */
.next-project {
  border-top: 1px solid var(--rule);
}

.next-project a {
  display: block;
  padding: 10rem 1.5rem;
  text-align: center;
}

.next-project h2 {
  font-size: clamp(2.5rem, 7vw, 4.5rem);
  font-style: italic;
  font-weight: 400;
  margin-top: 1.5rem;
}

/* Not found */
.not-found {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  gap: 1.5rem;
  text-align: center;
  padding: 1.5rem;
}

.not-found h1 {
  font-size: 2.5rem;
  font-style: italic;
  font-weight: 400;
}

/* Responsive */
@media (max-width: 768px) {
  .design-card,
  .contact {
    grid-template-columns: 1fr;
  }

  .chapter,
  .chapter.reversed {
    flex-direction: column;
  }

  .contact-links {
    align-items: flex-start;
    text-align: left;
  }
}
"#;

const OVERLAY_JS: &str = r#"// Playback overlay: one active video or none.
// Scroll is suspended while a video is active and restored on every dismissal.
(function() {
  'use strict';

  const overlay = document.querySelector('.overlay');
  const frame = document.querySelector('.overlay-frame');
  const closeBtn = document.querySelector('.overlay-close');

  if (!overlay || !frame) return;

  function open(embedUrl) {
    const iframe = document.createElement('iframe');
    iframe.src = embedUrl;
    iframe.allow = 'autoplay; fullscreen; picture-in-picture';
    iframe.allowFullscreen = true;

    frame.replaceChildren(iframe);
    overlay.hidden = false;
    document.body.classList.add('overlay-open');
  }

  function dismiss() {
    if (overlay.hidden) return;
    overlay.hidden = true;
    frame.replaceChildren();
    document.body.classList.remove('overlay-open');
  }

  // Cards without an embed URL never open the overlay.
  document.querySelectorAll('.film.playable').forEach(function(card) {
    card.addEventListener('click', function() {
      const embed = card.getAttribute('data-embed');
      if (embed) open(embed);
    });
  });

  if (closeBtn) closeBtn.addEventListener('click', dismiss);

  overlay.addEventListener('click', function(event) {
    if (event.target === overlay) dismiss();
  });

  document.addEventListener('keydown', function(event) {
    if (event.key === 'Escape') dismiss();
  });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn stylesheet_carries_the_theme_tokens() {
        let css = AssetPipeline::generate_css();

        assert!(css.contains(":root"));
        assert!(css.contains("--accent"));
        assert!(css.contains(".overlay"));
        assert!(css.contains("body.overlay-open"));
    }

    #[test]
    fn overlay_script_suspends_and_restores_scroll() {
        let js = AssetPipeline::generate_overlay_js();

        assert!(js.contains("classList.add('overlay-open')"));
        assert!(js.contains("classList.remove('overlay-open')"));
        assert!(js.contains("data-embed"));
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.chapter {
    display: flex;
    gap: 3rem;
}
        "#;

        let minified = AssetPipeline::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".chapter"));
    }

    #[test]
    fn copies_public_tree() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("public");
        let dest = temp.path().join("dist");

        fs::create_dir_all(source.join("images")).unwrap();
        fs::write(source.join("hero.jpg"), b"jpg").unwrap();
        fs::write(source.join("images/field.jpg"), b"jpg").unwrap();

        let copied = AssetPipeline::copy_public(&source, &dest).unwrap();

        assert_eq!(copied, 2);
        assert!(dest.join("hero.jpg").exists());
        assert!(dest.join("images/field.jpg").exists());
    }

    #[test]
    fn missing_public_dir_copies_nothing() {
        let temp = tempdir().unwrap();

        let copied = AssetPipeline::copy_public(
            &temp.path().join("absent"),
            &temp.path().join("dist"),
        )
        .unwrap();

        assert_eq!(copied, 0);
    }
}
