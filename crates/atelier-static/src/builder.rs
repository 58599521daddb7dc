//! Static site builder.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use rayon::prelude::*;

use atelier_content::{
    check_links, landing, CaseStudyCard, Catalog, Film, IntegrityError, SectionTheme,
};

use crate::assets::AssetPipeline;
use crate::layout::{chapter_views, render_markdown};
use crate::templates::{
    FilmView, LandingContext, NotFoundContext, ProjectContext, TemplateEngine,
};

/// Configuration for a static export.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output directory
    pub output_dir: PathBuf,

    /// Directory of public assets (images, covers) copied verbatim
    pub public_dir: Option<PathBuf>,

    /// Base URL for the site
    pub base_url: String,

    /// Site title
    pub site_title: String,

    /// Author display name
    pub author: String,

    /// Minify the stylesheet
    pub minify: bool,

    /// Script URL injected into every page for live reload; `None` for
    /// ordinary exports
    pub reload_script: Option<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            public_dir: Some(PathBuf::from("public")),
            base_url: "/".to_string(),
            site_title: "Qianbao Tu".to_string(),
            author: "Qianbao Tu".to_string(),
            minify: true,
            reload_script: None,
        }
    }
}

/// Result of a build.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated (landing + detail pages + not-found)
    pub pages: usize,

    /// Number of public assets copied
    pub assets: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during a build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("content integrity check failed with {0} broken link(s)")]
    Integrity(usize, Vec<IntegrityError>),

    #[error("route enumeration produced an unresolvable slug: {0}")]
    Resolve(String),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Everything the builder renders: the catalog plus the landing collections.
///
/// The builder only borrows this; ownership stays with the caller for the
/// whole build.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub catalog: Catalog,
    pub films: Vec<Film>,
    pub cards: Vec<CaseStudyCard>,
    pub theme: SectionTheme,
}

impl SiteContent {
    /// The compiled-in content of the published site.
    pub fn published() -> Self {
        Self {
            catalog: Catalog::published(),
            films: landing::films(),
            cards: landing::case_study_cards(),
            theme: SectionTheme::ember(),
        }
    }
}

/// Static site builder.
pub struct SiteBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl SiteBuilder {
    /// Create a new builder.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    /// Build the static export.
    ///
    /// The integrity check runs before anything is written; a build with
    /// dangling slug links produces no output.
    pub async fn build(&self, content: &SiteContent) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        check_links(&content.catalog, &content.cards)
            .map_err(|errors| BuildError::Integrity(errors.len(), errors))?;

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        self.build_landing(content)?;

        // One detail page per catalog slug, nothing else.
        let slugs: Vec<&str> = content.catalog.slugs().collect();
        let results: Vec<Result<(), BuildError>> = slugs
            .par_iter()
            .map(|slug| self.build_detail_page(content, slug))
            .collect();
        for result in results {
            result?;
        }

        self.build_not_found()?;
        self.generate_sitemap(&slugs)?;
        let assets = self.generate_assets()?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages: slugs.len() + 2,
            assets,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Render and write the landing page.
    fn build_landing(&self, content: &SiteContent) -> Result<(), BuildError> {
        let context = LandingContext {
            site_title: self.config.site_title.clone(),
            author: self.config.author.clone(),
            base_url: self.config.base_url.clone(),
            films: content.films.iter().map(FilmView::from).collect(),
            theme: content.theme.clone(),
            cards: content.cards.clone(),
            reload_script: self.config.reload_script.clone(),
        };

        let html = self
            .templates
            .render_landing(&context)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        fs::write(self.config.output_dir.join("index.html"), html)
            .map_err(|e| BuildError::WriteError(e.to_string()))
    }

    /// Render and write one detail page.
    fn build_detail_page(&self, content: &SiteContent, slug: &str) -> Result<(), BuildError> {
        let project = content
            .catalog
            .resolve(slug)
            .map_err(|e| BuildError::Resolve(e.to_string()))?;

        let context = ProjectContext {
            site_title: self.config.site_title.clone(),
            author: self.config.author.clone(),
            base_url: self.config.base_url.clone(),
            title: project.title.clone(),
            subtitle: project.subtitle.clone(),
            year: project.year.clone(),
            role: project.role.clone(),
            hero_image: project.hero_image.clone(),
            intro_html: render_markdown(&project.intro),
            chapters: chapter_views(&project.chapters),
            next: project.next.clone(),
            reload_script: self.config.reload_script.clone(),
        };

        let html = self
            .templates
            .render_project(&context)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        let page_dir = self.config.output_dir.join("work").join(slug);
        fs::create_dir_all(&page_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;
        fs::write(page_dir.join("index.html"), html)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        tracing::debug!("Rendered work/{}/", slug);
        Ok(())
    }

    /// Render and write the not-found page. Static hosts serve `404.html`
    /// for every slug outside the enumerated route set.
    fn build_not_found(&self) -> Result<(), BuildError> {
        let html = self
            .templates
            .render_not_found(&NotFoundContext {
                site_title: self.config.site_title.clone(),
                base_url: self.config.base_url.clone(),
                reload_script: self.config.reload_script.clone(),
            })
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        fs::write(self.config.output_dir.join("404.html"), html)
            .map_err(|e| BuildError::WriteError(e.to_string()))
    }

    /// Generate the stylesheet, the overlay script, and copy public assets.
    fn generate_assets(&self) -> Result<usize, BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or(css)
        } else {
            css
        };
        fs::write(assets_dir.join("site.css"), css)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        fs::write(
            assets_dir.join("overlay.js"),
            AssetPipeline::generate_overlay_js(),
        )
        .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let mut copied = 0;
        if let Some(public_dir) = &self.config.public_dir {
            copied = AssetPipeline::copy_public(public_dir, &self.config.output_dir)
                .map_err(|e| BuildError::WriteError(e.to_string()))?;
            if copied > 0 {
                tracing::info!("Copied {} public assets from {}", copied, public_dir.display());
            }
        }

        Ok(copied)
    }

    /// Generate sitemap.xml and robots.txt over the full route surface.
    fn generate_sitemap(&self, slugs: &[&str]) -> Result<(), BuildError> {
        let base = self.config.base_url.trim_end_matches('/');

        let mut urls = vec![format!("  <url>\n    <loc>{}/</loc>\n  </url>", base)];
        urls.extend(slugs.iter().map(|slug| {
            format!("  <url>\n    <loc>{}/work/{}/</loc>\n  </url>", base, slug)
        }));

        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
            urls.join("\n")
        );

        fs::write(self.config.output_dir.join("sitemap.xml"), sitemap)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let robots = format!(
            "User-agent: *\nAllow: /\nSitemap: {}sitemap.xml",
            self.config.base_url
        );
        fs::write(self.config.output_dir.join("robots.txt"), robots)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn config(out: PathBuf) -> BuildConfig {
        BuildConfig {
            output_dir: out,
            public_dir: None,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn builds_the_full_route_surface() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let builder = SiteBuilder::new(config(out.clone()));
        let result = builder.build(&SiteContent::published()).await.unwrap();

        // landing + two detail pages + 404
        assert_eq!(result.pages, 4);
        assert!(out.join("index.html").exists());
        assert!(out.join("work/simple-diabetic-life/index.html").exists());
        assert!(out.join("work/community-service-design/index.html").exists());
        assert!(out.join("404.html").exists());
        assert!(out.join("assets/site.css").exists());
        assert!(out.join("assets/overlay.js").exists());
    }

    #[tokio::test]
    async fn detail_pages_carry_the_narrative() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        SiteBuilder::new(config(out.clone()))
            .build(&SiteContent::published())
            .await
            .unwrap();

        let html = fs::read_to_string(out.join("work/simple-diabetic-life/index.html")).unwrap();

        assert!(html.contains("Simple Diabetic Life"));
        assert!(html.contains("Chapter 01"));
        assert!(html.contains("The Context"));
        assert!(html.contains(r#"href="/work/community-service-design/""#));
    }

    #[tokio::test]
    async fn sitemap_lists_exactly_the_enumerated_routes() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        SiteBuilder::new(config(out.clone()))
            .build(&SiteContent::published())
            .await
            .unwrap();

        let sitemap = fs::read_to_string(out.join("sitemap.xml")).unwrap();

        assert!(sitemap.contains("<loc>/work/simple-diabetic-life/</loc>"));
        assert!(sitemap.contains("<loc>/work/community-service-design/</loc>"));
        assert_eq!(sitemap.matches("<url>").count(), 3);
    }

    #[tokio::test]
    async fn dangling_link_aborts_before_any_output() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let mut content = SiteContent::published();
        content.cards[0].slug = "retired-study".to_string();

        let err = SiteBuilder::new(config(out.clone()))
            .build(&content)
            .await
            .unwrap_err();

        assert!(matches!(err, BuildError::Integrity(1, _)));
        assert!(!out.join("index.html").exists());
    }

    #[tokio::test]
    async fn copies_public_assets_when_configured() {
        let temp = tempdir().unwrap();
        let public = temp.path().join("public");
        let out = temp.path().join("dist");

        fs::create_dir_all(public.join("images")).unwrap();
        fs::write(public.join("images/diabetic-ui.jpg"), b"jpg").unwrap();

        let mut config = config(out.clone());
        config.public_dir = Some(public);

        let result = SiteBuilder::new(config)
            .build(&SiteContent::published())
            .await
            .unwrap();

        assert_eq!(result.assets, 1);
        assert!(out.join("images/diabetic-ui.jpg").exists());
    }
}
