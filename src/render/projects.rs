//! Project card rendering for one page of repositories.

use minijinja::Environment;
use serde::Serialize;

use crate::error::ShowcaseError;
use crate::github::RepositoryDescriptor;

use super::{RenderLabels, escape_html, render_template, template_environment};

const CARDS_TEMPLATE_NAME: &str = "project_cards";

const CARDS_TEMPLATE: &str = r#"{% for repo in repositories %}
<div class="project-card scroll-trigger visible">
  <div class="project-header">
    <i class="far fa-folder-open"></i>
    <div class="project-links">
      <a href="{{ repo.url | escape_html }}" target="_blank" rel="noopener noreferrer" title="{{ code_link_title | escape_html }}"><i class="fab fa-github"></i></a>
      {%- if repo.homepage %}
      <a class="project-homepage" href="{{ repo.homepage | escape_html }}" target="_blank" rel="noopener noreferrer" title="{{ homepage_link_title | escape_html }}"><i class="fas fa-external-link-alt"></i></a>
      {%- endif %}
    </div>
  </div>
  <h3 class="project-title">{{ repo.name | escape_html }}</h3>
  <p class="project-description">{{ repo.description | escape_html }}</p>
  <div class="project-stack">
    {%- if repo.language %}
    <span class="project-language">{{ repo.language | escape_html }}</span>
    {%- endif %}
    <span>{{ repo.year }}</span>
  </div>
</div>
{% endfor %}"#;

/// Template context for a single project card.
#[derive(Debug, Clone, Serialize)]
struct CardContext<'a> {
    name: &'a str,
    /// Description with the localised fallback already applied.
    description: &'a str,
    url: &'a str,
    homepage: Option<&'a str>,
    language: Option<&'a str>,
    year: i32,
}

#[derive(Debug, Serialize)]
struct CardsContext<'a> {
    repositories: Vec<CardContext<'a>>,
    code_link_title: &'a str,
    homepage_link_title: &'a str,
}

/// Converts a page of descriptors into project card markup.
#[derive(Debug, Clone)]
pub struct ProjectRenderer {
    env: Environment<'static>,
    labels: RenderLabels,
}

impl ProjectRenderer {
    /// Compiles the card template.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::Render`] if the template fails to compile.
    pub fn new(labels: RenderLabels) -> Result<Self, ShowcaseError> {
        let env = template_environment(CARDS_TEMPLATE_NAME, CARDS_TEMPLATE)?;
        Ok(Self { env, labels })
    }

    /// Labels used for fallbacks and tooltips.
    #[must_use]
    pub const fn labels(&self) -> &RenderLabels {
        &self.labels
    }

    /// Renders one card per descriptor, in order.
    ///
    /// Name, description, language, and both URLs are escaped before they
    /// reach the markup.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::Render`] if template rendering fails.
    pub fn render(&self, page_items: &[RepositoryDescriptor]) -> Result<String, ShowcaseError> {
        let repositories = page_items
            .iter()
            .map(|repo| CardContext {
                name: &repo.name,
                description: repo
                    .description
                    .as_deref()
                    .unwrap_or(&self.labels.no_description),
                url: &repo.url,
                homepage: repo.homepage_url.as_deref(),
                language: repo.primary_language.as_deref(),
                year: repo.updated_year(),
            })
            .collect();

        render_template(
            &self.env,
            CARDS_TEMPLATE_NAME,
            CardsContext {
                repositories,
                code_link_title: &self.labels.code_link_title,
                homepage_link_title: &self.labels.homepage_link_title,
            },
        )
    }

    /// Renders the "no repositories found" placeholder.
    #[must_use]
    pub fn render_placeholder(&self) -> String {
        format!(
            "<p class=\"projects-empty\">{}</p>",
            escape_html(&self.labels.empty_placeholder)
        )
    }
}
