//! Template engine for the portfolio pages.

use minijinja::Environment;
use serde::Serialize;

use atelier_content::{CaseStudyCard, Film, NextProjectRef, SectionTheme};

use crate::layout::ChapterView;

/// A film prepared for the landing grid, with its embed URL resolved.
#[derive(Debug, Clone, Serialize)]
pub struct FilmView {
    pub title: String,
    pub category: String,
    pub year: String,
    pub cover: String,
    pub description: String,

    /// Player frame URL, present only when the film has a video
    pub embed_url: Option<String>,
}

impl From<&Film> for FilmView {
    fn from(film: &Film) -> Self {
        Self {
            title: film.title.clone(),
            category: film.category.clone(),
            year: film.year.clone(),
            cover: film.cover.clone(),
            description: film.description.clone(),
            embed_url: film.video.as_ref().map(|v| v.embed_url()),
        }
    }
}

/// Context for the landing page template.
#[derive(Debug, Clone, Serialize)]
pub struct LandingContext {
    pub site_title: String,
    pub author: String,
    pub base_url: String,
    pub films: Vec<FilmView>,

    /// Theme tokens for the design-narrative section
    pub theme: SectionTheme,

    /// Case-study cards rendered by the design-narrative section
    pub cards: Vec<CaseStudyCard>,

    /// Script URL injected for live reload during `dev`, absent in exports
    pub reload_script: Option<String>,
}

/// Context for a project detail page.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectContext {
    pub site_title: String,
    pub author: String,
    pub base_url: String,

    pub title: String,
    pub subtitle: String,
    pub year: String,
    pub role: String,
    pub hero_image: String,

    /// Introduction rendered to HTML
    pub intro_html: String,

    pub chapters: Vec<ChapterView>,
    pub next: NextProjectRef,
    pub reload_script: Option<String>,
}

/// Context for the not-found page.
#[derive(Debug, Clone, Serialize)]
pub struct NotFoundContext {
    pub site_title: String,
    pub base_url: String,
    pub reload_script: Option<String>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new engine with the compiled-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("base.html".to_string(), BASE_TEMPLATE.to_string())
            .expect("Failed to add base template");

        env.add_template_owned("landing.html".to_string(), LANDING_TEMPLATE.to_string())
            .expect("Failed to add landing template");

        env.add_template_owned(
            "design_section.html".to_string(),
            DESIGN_SECTION_TEMPLATE.to_string(),
        )
        .expect("Failed to add design section template");

        env.add_template_owned("project.html".to_string(), PROJECT_TEMPLATE.to_string())
            .expect("Failed to add project template");

        env.add_template_owned(
            "not_found.html".to_string(),
            NOT_FOUND_TEMPLATE.to_string(),
        )
        .expect("Failed to add not-found template");

        Self { env }
    }

    /// Render the landing page.
    pub fn render_landing(&self, context: &LandingContext) -> Result<String, minijinja::Error> {
        self.env.get_template("landing.html")?.render(context)
    }

    /// Render a project detail page.
    pub fn render_project(&self, context: &ProjectContext) -> Result<String, minijinja::Error> {
        self.env.get_template("project.html")?.render(context)
    }

    /// Render the not-found page.
    pub fn render_not_found(&self, context: &NotFoundContext) -> Result<String, minijinja::Error> {
        self.env.get_template("not_found.html")?.render(context)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{% block title %}{{ site_title }}{% endblock %}</title>
  <link rel="stylesheet" href="{{ base_url }}assets/site.css">
</head>
<body>
  {% block content %}{% endblock %}
  {% block scripts %}{% endblock %}
  {% if reload_script %}<script src="{{ reload_script }}"></script>{% endif %}
</body>
</html>"##;

const LANDING_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<nav class="topbar">
  <div class="wordmark">
    <span class="wordmark-main">Filmmaking</span>
    <span class="wordmark-sub">Documentary</span>
  </div>
  <div class="topbar-links">
    <a href="#work">Work</a>
    <a href="#contact">Info</a>
  </div>
</nav>

<header class="hero">
  <p class="kicker">Documentary Filmmaking</p>
  <h1>{{ author }}</h1>
  <p class="hero-quote">&ldquo;I do not intend to speak about; just speak nearby.&rdquo;</p>
</header>

<section id="work" class="film-grid">
  {% for film in films %}
  <article class="film{% if film.embed_url %} playable{% endif %}"{% if film.embed_url %} data-embed="{{ film.embed_url }}"{% endif %}>
    <figure class="film-cover">
      <img src="{{ base_url }}{{ film.cover | trim('/') }}" alt="{{ film.title }}">
      {% if film.embed_url %}<span class="play-badge" aria-hidden="true"></span>{% endif %}
    </figure>
    <div class="film-meta">
      <div>
        <h3>{{ film.title }}</h3>
        <p>{{ film.description }}</p>
      </div>
      <div class="film-tags">
        <span class="film-year">{{ film.year }}</span>
        <span class="film-category">{{ film.category }}</span>
      </div>
    </div>
  </article>
  {% endfor %}
</section>

{% include "design_section.html" %}

<footer id="contact" class="contact">
  <div class="contact-bio">
    <h2>{{ author }}</h2>
    <p class="contact-quote">"What matters is not to speak for, but to speak with."</p>
    <p>Based in Norway and China, focusing on vulnerability and the ethics of
    seeing, listening, and being seen.<br>Available for freelance projects worldwide.</p>
  </div>
  <div class="contact-links">
    <p class="kicker">Inquiries</p>
    <a href="mailto:qianbao_tu@163.com">qianbao_tu@163.com</a>
    <div class="contact-social">
      <a href="https://www.instagram.com/qianbao_tu/" rel="noopener">Instagram</a>
      <a href="https://www.linkedin.com/in/qianbao-tu-6a1304152/" rel="noopener">LinkedIn</a>
    </div>
    <p class="colophon">&copy; 2025 {{ author | upper }}. All Rights Reserved.</p>
  </div>
</footer>

<div class="overlay" hidden>
  <button class="overlay-close" type="button" aria-label="Close">&times;</button>
  <div class="overlay-frame"></div>
</div>
{% endblock %}

{% block scripts %}
<script src="{{ base_url }}assets/overlay.js"></script>
{% endblock %}"##;

const DESIGN_SECTION_TEMPLATE: &str = r##"<section class="design-section theme-{{ theme.name }}" style="--accent: {{ theme.accent }}; --panel: {{ theme.panel }};">
  <div class="design-header">
    <h2>{{ theme.heading }}</h2>
    <p>{{ theme.tagline }}</p>
  </div>
  <div class="design-grid">
    {% for card in cards %}
    <a class="design-card" href="{{ base_url }}work/{{ card.slug }}/">
      <figure class="design-cover">
        {% if card.image %}
        <img src="{{ base_url }}{{ card.image | trim('/') }}" alt="{{ card.title }}">
        {% else %}
        <div class="design-placeholder">{{ card.placeholder }}</div>
        {% endif %}
      </figure>
      <div class="design-meta">
        <h3>{{ card.title }}</h3>
        <p class="design-subtitle">{{ card.subtitle }}</p>
        <p>{{ card.description }}</p>
        <ul class="design-tags">
          {% for tag in card.tags %}<li>{{ tag }}</li>{% endfor %}
        </ul>
      </div>
    </a>
    {% endfor %}
  </div>
</section>"##;

const PROJECT_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block title %}{{ title }} - {{ site_title }}{% endblock %}

{% block content %}
<nav class="topbar">
  <a class="back-link" href="{{ base_url }}">&larr; Back</a>
  <span class="topbar-note">{{ author }} / Design Narrative</span>
</nav>

<header class="project-hero">
  <img class="project-hero-image" src="{{ base_url }}{{ hero_image | trim('/') }}" alt="{{ title }}">
  <div class="project-hero-text">
    <p class="kicker">{{ subtitle }}</p>
    <h1>{{ title }}</h1>
    <dl class="project-facts">
      <div><dt>Year</dt><dd>{{ year }}</dd></div>
      <div><dt>Role</dt><dd>{{ role }}</dd></div>
    </dl>
  </div>
</header>

<section class="project-intro">
  {{ intro_html | safe }}
</section>

<div class="chapters">
  {% for chapter in chapters %}
  <section class="chapter{% if chapter.reversed %} reversed{% endif %}">
    <div class="chapter-text">
      <h2><span class="kicker">{{ chapter.label }}</span>{{ chapter.title }}</h2>
      {{ chapter.body_html | safe }}
    </div>
    <div class="chapter-media">
      <figure class="chapter-panel">
        {% if chapter.image %}
        <img src="{{ base_url }}{{ chapter.image | trim('/') }}" alt="{{ chapter.title }}">
        {% endif %}
      </figure>
      {% if chapter.figure %}
      <p class="figure-line">{{ chapter.figure }}</p>
      {% endif %}
    </div>
  </section>
  {% endfor %}
</div>

<footer class="next-project">
  <a href="{{ base_url }}work/{{ next.slug }}/">
    <p class="kicker">Next Narrative</p>
    <h2>{{ next.title }}</h2>
  </a>
</footer>
{% endblock %}"##;

const NOT_FOUND_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block title %}Not Found - {{ site_title }}{% endblock %}

{% block content %}
<main class="not-found">
  <p class="kicker">404</p>
  <h1>This narrative does not exist.</h1>
  <a class="back-link" href="{{ base_url }}">&larr; Back to the work</a>
</main>
{% endblock %}"##;

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_content::{Catalog, SectionTheme};

    use crate::layout::{chapter_views, render_markdown};

    fn project_context(slug: &str) -> ProjectContext {
        let catalog = Catalog::published();
        let project = catalog.resolve(slug).unwrap();

        ProjectContext {
            site_title: "Qianbao Tu".to_string(),
            author: "Qianbao Tu".to_string(),
            base_url: "/".to_string(),
            title: project.title.clone(),
            subtitle: project.subtitle.clone(),
            year: project.year.clone(),
            role: project.role.clone(),
            hero_image: project.hero_image.clone(),
            intro_html: render_markdown(&project.intro),
            chapters: chapter_views(&project.chapters),
            next: project.next.clone(),
            reload_script: None,
        }
    }

    #[test]
    fn renders_project_hero_and_chapters() {
        let engine = TemplateEngine::new();
        let html = engine
            .render_project(&project_context("simple-diabetic-life"))
            .unwrap();

        assert!(html.contains("<title>Simple Diabetic Life - Qianbao Tu</title>"));
        assert!(html.contains("Product Service System Design"));
        assert!(html.contains("Chapter 01"));
        assert!(html.contains("Chapter 02"));
        assert!(html.contains("Chapter 03"));
        assert!(html.contains("fig. 1 —"));
    }

    #[test]
    fn second_chapter_is_reversed() {
        let engine = TemplateEngine::new();
        let html = engine
            .render_project(&project_context("simple-diabetic-life"))
            .unwrap();

        assert_eq!(html.matches(r#"class="chapter reversed""#).count(), 1);
        assert_eq!(html.matches(r#"class="chapter""#).count(), 2);
    }

    #[test]
    fn footer_links_the_next_project() {
        let engine = TemplateEngine::new();
        let html = engine
            .render_project(&project_context("community-service-design"))
            .unwrap();

        assert!(html.contains(r#"href="/work/simple-diabetic-life/""#));
        assert!(html.contains("Simple Diabetic Life"));
    }

    #[test]
    fn landing_marks_only_playable_films() {
        let engine = TemplateEngine::new();
        let context = LandingContext {
            site_title: "Qianbao Tu".to_string(),
            author: "Qianbao Tu".to_string(),
            base_url: "/".to_string(),
            films: atelier_content::landing::films().iter().map(FilmView::from).collect(),
            theme: SectionTheme::ember(),
            cards: atelier_content::landing::case_study_cards(),
            reload_script: None,
        };

        let html = engine.render_landing(&context).unwrap();

        assert_eq!(html.matches("data-embed=").count(), 1);
        assert!(html.contains("player.vimeo.com/video/1119700042"));
        assert!(html.contains("My Nun Mom"));
        assert!(html.contains("Mapping the Hidden World"));
        assert!(html.contains(r#"class="design-section theme-ember""#));
        assert!(html.contains(r#"href="/work/community-service-design/""#));
    }

    #[test]
    fn not_found_page_offers_a_way_back() {
        let engine = TemplateEngine::new();
        let html = engine
            .render_not_found(&NotFoundContext {
                site_title: "Qianbao Tu".to_string(),
                base_url: "/".to_string(),
                reload_script: None,
            })
            .unwrap();

        assert!(html.contains("404"));
        assert!(html.contains(r#"href="/""#));
    }
}
