//! Projects section rendered as a static HTML document.

use std::io;

use showcase::{
    DocumentParts, ListRepositoriesParams, OctocrabRepositorySource, PaginationMsg,
    ProjectRenderer, ProjectsSection, RepositoryFilter, RepositorySource, ShowcaseConfig,
    ShowcaseError, StaticProjectsView, render_document,
};

use super::output::{write_document, write_document_to_file};
use super::session::Session;

const DEFAULT_TITLE: &str = "Projects";

/// Rendered document plus the fetch failure it displays, if any.
#[derive(Debug)]
pub struct ProjectsPage {
    /// Complete HTML document.
    pub html: String,
    /// Failure shown in the document's error element.
    pub failure: Option<ShowcaseError>,
}

/// Fetches, renders, and writes the projects document.
///
/// A fetch failure still writes the document, with its error element
/// visible, and is then returned so the process exits unsuccessfully.
///
/// # Errors
///
/// Returns configuration, network, render, and I/O errors.
pub async fn run(config: &ShowcaseConfig, session: &Session) -> Result<(), ShowcaseError> {
    let api_base = config.api_base_url()?;
    let user = config.require_user()?;
    let params = ListRepositoriesParams::with_per_page(config.fetch_limit);
    let source = OctocrabRepositorySource::for_api_base(&api_base, user, params)?;

    let page = render_projects_page(&source, config, session).await?;

    match config.output_path() {
        Some(path) => write_document_to_file(&path, &page.html)?,
        None => write_document(&mut io::stdout().lock(), &page.html)?,
    }

    page.failure.map_or(Ok(()), Err)
}

/// Runs the projects pipeline against `source` and renders the document.
///
/// # Errors
///
/// Returns [`ShowcaseError::Render`] if a template fails. Network failures
/// are carried in [`ProjectsPage::failure`] instead.
pub async fn render_projects_page<S>(
    source: &S,
    config: &ShowcaseConfig,
    session: &Session,
) -> Result<ProjectsPage, ShowcaseError>
where
    S: RepositorySource + ?Sized,
{
    let filter = RepositoryFilter::new(config.excluded_names());
    let renderer = ProjectRenderer::new(session.labels.clone())?;
    let mut view = StaticProjectsView::default();

    let failure = match ProjectsSection::new(source, &filter)
        .load(renderer, &mut view)
        .await
    {
        Ok(mut controller) => {
            if config.page != 1 {
                controller.handle(PaginationMsg::GoTo(config.page), &mut view)?;
            }
            None
        }
        Err(error @ ShowcaseError::Render { .. }) => return Err(error),
        Err(error) => Some(error),
    };

    let phrases = session.typing_phrases();
    let title = session
        .translations
        .as_ref()
        .and_then(|translations| translations.get("projects_title"))
        .unwrap_or(DEFAULT_TITLE);

    let html = render_document(&DocumentParts {
        title,
        language: session.language.code(),
        theme: session.theme,
        hero_phrase: phrases.first().map(String::as_str),
        grid: view.grid().markup(),
        error: view.error(),
        controls: view.controls(),
        previous_label: &session.labels.previous_label,
        next_label: &session.labels.next_label,
    })?;

    Ok(ProjectsPage { html, failure })
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use rstest::{fixture, rstest};
    use showcase::i18n::Language;
    use showcase::{
        RenderLabels, RepositoryDescriptor, RepositorySource, ShowcaseConfig, ShowcaseError, Theme,
        Translations,
    };

    use super::render_projects_page;
    use crate::cli::session::Session;

    struct StubSource {
        response: Result<Vec<RepositoryDescriptor>, ShowcaseError>,
    }

    #[async_trait]
    impl RepositorySource for StubSource {
        async fn fetch_repositories(&self) -> Result<Vec<RepositoryDescriptor>, ShowcaseError> {
            self.response.clone()
        }
    }

    fn repository(name: &str) -> RepositoryDescriptor {
        RepositoryDescriptor {
            name: name.to_owned(),
            description: Some(format!("About {name}")),
            url: format!("https://github.com/AgnesMillie/{name}"),
            homepage_url: None,
            primary_language: Some("Rust".to_owned()),
            updated_at: Utc
                .with_ymd_and_hms(2025, 3, 1, 0, 0, 0)
                .single()
                .expect("valid timestamp"),
        }
    }

    fn repositories(count: usize) -> Vec<RepositoryDescriptor> {
        (1..=count)
            .map(|index| repository(&format!("project-{index}")))
            .collect()
    }

    #[fixture]
    fn session() -> Session {
        let translations = Translations::from_entries(
            Language::English,
            [
                ("hero_typing_words", "Backend, Rust"),
                ("projects_title", "My Projects"),
            ],
        );
        Session {
            language: Language::English,
            theme: Theme::Light,
            labels: RenderLabels::from_translations(&translations),
            translations: Some(translations),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn renders_requested_page_into_document(session: Session) {
        let source = StubSource {
            response: Ok(repositories(13)),
        };
        let config = ShowcaseConfig {
            page: 3,
            ..ShowcaseConfig::default()
        };

        let page = render_projects_page(&source, &config, &session)
            .await
            .expect("page should render");

        assert!(page.failure.is_none());
        assert_eq!(page.html.matches("class=\"project-card").count(), 1);
        assert!(page.html.contains(">project-13<"), "{}", page.html);
        assert!(page.html.contains("<title>My Projects</title>"));
        assert!(page.html.contains("<body class=\"theme-light\">"));
        assert!(page.html.contains(">Backend</span>"), "first phrase seeded");
    }

    #[rstest]
    #[tokio::test]
    async fn out_of_range_page_stays_on_first(session: Session) {
        let source = StubSource {
            response: Ok(repositories(7)),
        };
        let config = ShowcaseConfig {
            page: 9,
            ..ShowcaseConfig::default()
        };

        let page = render_projects_page(&source, &config, &session)
            .await
            .expect("page should render");

        assert_eq!(page.html.matches("class=\"project-card").count(), 6);
        assert_eq!(page.html.matches("pagination-dot active").count(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn network_failure_is_rendered_and_reported(session: Session) {
        let failure = ShowcaseError::Network {
            message: "status 503".to_owned(),
        };
        let source = StubSource {
            response: Err(failure.clone()),
        };

        let page = render_projects_page(&source, &ShowcaseConfig::default(), &session)
            .await
            .expect("document should still render");

        assert_eq!(page.failure, Some(failure));
        assert!(
            page.html.contains("style=\"display: block\">Could not load projects"),
            "{}",
            page.html
        );
        assert!(!page.html.contains("project-card"));
    }
}
