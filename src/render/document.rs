//! Static HTML page wrapping the projects section.

use serde::Serialize;

use crate::error::ShowcaseError;
use crate::pagination::ControlsView;
use crate::preferences::Theme;

use super::{render_template, template_environment};

const DOCUMENT_TEMPLATE_NAME: &str = "document";

const DOCUMENT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="{{ language | escape_html }}">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title | escape_html }}</title>
</head>
<body{% if body_class %} class="{{ body_class }}"{% endif %}>
  <header class="hero">
    <span class="typing-effect typing-cursor">{% if hero_phrase %}{{ hero_phrase | escape_html }}{% endif %}</span>
  </header>
  <section id="projects">
    <div id="projects-grid" class="projects-grid">
{{ grid }}
    </div>
    <p id="projects-error" class="projects-error" style="display: {% if error %}block{% else %}none{% endif %}">{% if error %}{{ error | escape_html }}{% endif %}</p>
    <div class="carousel-controls" style="display: {% if controls.visible %}flex{% else %}none{% endif %}">
      <button id="prev-page" type="button" aria-label="{{ previous_label | escape_html }}" style="display: {% if controls.show_previous %}block{% else %}none{% endif %}"><i class="fas fa-chevron-left"></i></button>
      <div id="pagination-dots">
        {%- for dot in controls.dots %}
        <button class="pagination-dot{% if dot.active %} active{% endif %}" type="button" data-page="{{ dot.page }}"></button>
        {%- endfor %}
      </div>
      <button id="next-page" type="button" aria-label="{{ next_label | escape_html }}" style="display: {% if controls.show_next %}block{% else %}none{% endif %}"><i class="fas fa-chevron-right"></i></button>
    </div>
  </section>
</body>
</html>
"#;

/// Everything the static page needs besides the card markup itself.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentParts<'a> {
    /// Document title.
    pub title: &'a str,
    /// Language code for the `lang` attribute.
    pub language: &'a str,
    /// Active colour theme.
    #[serde(skip)]
    pub theme: Theme,
    /// First typewriter phrase, shown statically in the hero.
    pub hero_phrase: Option<&'a str>,
    /// Already-escaped grid markup (cards or placeholder).
    pub grid: &'a str,
    /// Error message, when the listing failed.
    pub error: Option<&'a str>,
    /// Control bar attributes.
    pub controls: &'a ControlsView,
    /// Accessible label for the previous-page control.
    pub previous_label: &'a str,
    /// Accessible label for the next-page control.
    pub next_label: &'a str,
}

#[derive(Serialize)]
struct DocumentContext<'a> {
    #[serde(flatten)]
    parts: &'a DocumentParts<'a>,
    body_class: Option<&'static str>,
}

/// Renders the complete HTML page.
///
/// # Errors
///
/// Returns [`ShowcaseError::Render`] if the template fails to compile or
/// render.
pub fn render_document(parts: &DocumentParts<'_>) -> Result<String, ShowcaseError> {
    let env = template_environment(DOCUMENT_TEMPLATE_NAME, DOCUMENT_TEMPLATE)?;
    render_template(
        &env,
        DOCUMENT_TEMPLATE_NAME,
        DocumentContext {
            parts,
            body_class: parts.theme.body_class(),
        },
    )
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{DocumentParts, render_document};
    use crate::pagination::ControlsView;
    use crate::preferences::Theme;

    fn parts<'a>(controls: &'a ControlsView, error: Option<&'a str>) -> DocumentParts<'a> {
        DocumentParts {
            title: "Portfolio",
            language: "en",
            theme: Theme::Dark,
            hero_phrase: Some("Rust & Go"),
            grid: "<div class=\"project-card\"></div>",
            error,
            controls,
            previous_label: "Previous page",
            next_label: "Next page",
        }
    }

    #[rstest]
    fn renders_grid_controls_and_hero() {
        let controls = ControlsView::for_page(2, 3);

        let html = render_document(&parts(&controls, None)).expect("render should succeed");

        assert!(html.contains("<html lang=\"en\">"), "lang attribute: {html}");
        assert!(html.contains("<div class=\"project-card\"></div>"), "grid: {html}");
        assert!(html.contains(">Rust &amp; Go</span>"), "hero phrase: {html}");
        assert!(
            html.contains("class=\"carousel-controls\" style=\"display: flex\""),
            "controls visible: {html}"
        );
        assert_eq!(html.matches("class=\"pagination-dot").count(), 3);
        assert_eq!(html.matches("pagination-dot active").count(), 1);
        assert!(html.contains("data-page=\"2\""), "dot for page 2: {html}");
        assert!(
            html.contains("id=\"projects-error\" class=\"projects-error\" style=\"display: none\""),
            "error hidden: {html}"
        );
        assert!(!html.contains("theme-light"), "dark theme has no body class");
    }

    #[rstest]
    fn error_state_is_visible_and_escaped() {
        let controls = ControlsView::hidden();

        let html = render_document(&parts(&controls, Some("Failed <again>")))
            .expect("render should succeed");

        assert!(
            html.contains("style=\"display: block\">Failed &lt;again&gt;</p>"),
            "error shown: {html}"
        );
        assert!(
            html.contains("class=\"carousel-controls\" style=\"display: none\""),
            "controls hidden: {html}"
        );
    }

    #[rstest]
    fn light_theme_sets_body_class() {
        let controls = ControlsView::hidden();
        let document = DocumentParts {
            theme: Theme::Light,
            ..parts(&controls, None)
        };

        let html = render_document(&document).expect("render should succeed");

        assert!(html.contains("<body class=\"theme-light\">"), "body class: {html}");
    }
}
