//! One-shot load of the projects section.

use crate::error::ShowcaseError;
use crate::github::{RepositoryDescriptor, RepositoryFilter, RepositorySource};
use crate::render::ProjectRenderer;

use super::{PaginationController, ProjectsView};

/// Runs fetch → filter → paginate → render against a view.
///
/// # Example
///
/// ```no_run
/// use showcase::{
///     GitHubUser, ListRepositoriesParams, OctocrabRepositorySource, ProjectRenderer,
///     ProjectsSection, RenderLabels, RepositoryFilter, ShowcaseError, StaticProjectsView,
///     parse_api_base,
/// };
///
/// async fn render_first_page() -> Result<String, ShowcaseError> {
///     let api_base = parse_api_base(None)?;
///     let user = GitHubUser::new("AgnesMillie")?;
///     let source =
///         OctocrabRepositorySource::for_api_base(&api_base, user, ListRepositoriesParams::default())?;
///     let filter = RepositoryFilter::new(["AgnesMillie"]);
///     let renderer = ProjectRenderer::new(RenderLabels::default())?;
///     let mut view = StaticProjectsView::default();
///
///     let controller = ProjectsSection::new(&source, &filter)
///         .load(renderer, &mut view)
///         .await?;
///     assert_eq!(controller.state().current_page(), 1);
///     Ok(view.grid().markup().to_owned())
/// }
/// ```
pub struct ProjectsSection<'client, Source>
where
    Source: RepositorySource + ?Sized,
{
    source: &'client Source,
    filter: &'client RepositoryFilter,
}

impl<'client, Source> ProjectsSection<'client, Source>
where
    Source: RepositorySource + ?Sized,
{
    /// Creates a section reading from `source` and dropping what `filter`
    /// excludes.
    #[must_use]
    pub const fn new(source: &'client Source, filter: &'client RepositoryFilter) -> Self {
        Self { source, filter }
    }

    /// Fetches once and draws page one.
    ///
    /// The loading indicator is switched on before the fetch and off exactly
    /// once afterwards, on both paths. A fetch failure shows the localised
    /// error message once, leaves the grid and controls untouched, and is
    /// returned unchanged. An empty filtered listing is not an error: the
    /// placeholder is drawn and the controller holds no items.
    ///
    /// # Errors
    ///
    /// Returns the source's error (always [`ShowcaseError::Network`] for the
    /// Octocrab source) or [`ShowcaseError::Render`] if drawing fails.
    pub async fn load<V>(
        &self,
        renderer: ProjectRenderer,
        view: &mut V,
    ) -> Result<PaginationController, ShowcaseError>
    where
        V: ProjectsView + ?Sized,
    {
        view.set_loading(true);
        let fetched = self.source.fetch_repositories().await;
        view.set_loading(false);

        let repositories = match fetched {
            Ok(repositories) => repositories,
            Err(error) => {
                tracing::warn!(%error, "failed to load projects");
                view.show_error(&renderer.labels().error_message);
                return Err(error);
            }
        };

        let fetched_count = repositories.len();
        let items = match non_empty(self.filter.apply(repositories)) {
            Ok(items) => items,
            Err(error) => {
                tracing::info!(%error, fetched = fetched_count, "showing empty placeholder");
                Vec::new()
            }
        };

        tracing::info!(
            fetched = fetched_count,
            shown = items.len(),
            "projects loaded"
        );

        let controller = PaginationController::new(items, renderer);
        if let Err(error) = controller.render_current(view) {
            tracing::warn!(%error, "failed to render projects");
            view.show_error(&controller.renderer().labels().error_message);
            return Err(error);
        }
        Ok(controller)
    }
}

fn non_empty(
    items: Vec<RepositoryDescriptor>,
) -> Result<Vec<RepositoryDescriptor>, ShowcaseError> {
    if items.is_empty() {
        return Err(ShowcaseError::EmptyResult);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::{ProjectsSection, non_empty};
    use crate::error::ShowcaseError;
    use crate::github::models::test_support::{minimal_repository, numbered_repositories};
    use crate::github::{MockRepositorySource, RepositoryDescriptor, RepositoryFilter};
    use crate::projects::PaginationMsg;
    use crate::projects::test_support::{RecordingView, ViewCall};
    use crate::render::{ProjectRenderer, RenderLabels};

    #[fixture]
    fn renderer() -> ProjectRenderer {
        ProjectRenderer::new(RenderLabels::default()).expect("template should compile")
    }

    #[fixture]
    fn portfolio_filter() -> RepositoryFilter {
        RepositoryFilter::new(["agnesmillie-portfolio", "AgnesMillie"])
    }

    fn source_returning(
        result: Result<Vec<RepositoryDescriptor>, ShowcaseError>,
    ) -> MockRepositorySource {
        let mut source = MockRepositorySource::new();
        source
            .expect_fetch_repositories()
            .times(1)
            .return_once(move || result);
        source
    }

    #[rstest]
    #[tokio::test]
    async fn only_excluded_repositories_shows_placeholder_without_error(
        renderer: ProjectRenderer,
        portfolio_filter: RepositoryFilter,
    ) {
        let source = source_returning(Ok(vec![
            minimal_repository("AgnesMillie"),
            minimal_repository("agnesmillie-portfolio"),
        ]));
        let mut view = RecordingView::default();

        let controller = ProjectsSection::new(&source, &portfolio_filter)
            .load(renderer, &mut view)
            .await
            .expect("empty listing is not an error");

        assert!(controller.state().is_empty());
        assert!(view.errors().is_empty(), "no error state expected");
        assert_eq!(view.loading_changes(), vec![true, false]);
        match view.last_grid() {
            Some(ViewCall::Placeholder(markup)) => {
                assert!(markup.contains("No public repositories found."), "{markup}");
            }
            other => panic!("expected placeholder, got {other:?}"),
        }
        assert!(!view.last_controls().expect("controls synced").visible);
    }

    #[rstest]
    #[tokio::test]
    async fn thirteen_repositories_paginate_into_three_pages(
        renderer: ProjectRenderer,
        portfolio_filter: RepositoryFilter,
    ) {
        let source = source_returning(Ok(numbered_repositories(13)));
        let mut view = RecordingView::default();

        let mut controller = ProjectsSection::new(&source, &portfolio_filter)
            .load(renderer, &mut view)
            .await
            .expect("load should succeed");

        assert_eq!(controller.state().total_pages(), 3);
        let first = view.last_controls().expect("controls synced");
        assert!(first.visible);
        assert!(!first.show_previous, "previous hidden on page 1");

        controller
            .handle(PaginationMsg::GoTo(3), &mut view)
            .expect("navigation should succeed");

        match view.last_grid() {
            Some(ViewCall::Projects(markup)) => {
                assert_eq!(markup.matches("class=\"project-card").count(), 1);
                assert!(markup.contains(">repo-13<"), "{markup}");
            }
            other => panic!("expected cards, got {other:?}"),
        }
        assert!(!view.last_controls().expect("controls synced").show_next);
    }

    #[rstest]
    #[tokio::test]
    async fn network_failure_shows_error_once_and_leaves_grid_untouched(
        renderer: ProjectRenderer,
        portfolio_filter: RepositoryFilter,
    ) {
        let failure = ShowcaseError::Network {
            message: "status 500".to_owned(),
        };
        let source = source_returning(Err(failure.clone()));
        let mut view = RecordingView::default();

        let result = ProjectsSection::new(&source, &portfolio_filter)
            .load(renderer, &mut view)
            .await;

        assert_eq!(result.err(), Some(failure));
        assert_eq!(view.loading_changes(), vec![true, false]);
        assert_eq!(
            view.errors(),
            vec!["Could not load projects right now. Please try again later."]
        );
        assert!(view.last_grid().is_none(), "grid must not be touched");
        assert!(view.last_controls().is_none(), "controls must not be touched");
    }

    #[rstest]
    #[tokio::test]
    async fn excluded_names_are_dropped_and_order_kept(
        renderer: ProjectRenderer,
        portfolio_filter: RepositoryFilter,
    ) {
        let source = source_returning(Ok(vec![
            minimal_repository("zeta"),
            minimal_repository("AgnesMillie"),
            minimal_repository("AgnesMillie2"),
            minimal_repository("alpha"),
        ]));
        let mut view = RecordingView::default();

        let controller = ProjectsSection::new(&source, &portfolio_filter)
            .load(renderer, &mut view)
            .await
            .expect("load should succeed");

        let names: Vec<&str> = controller
            .state()
            .items()
            .iter()
            .map(|repo| repo.name.as_str())
            .collect();
        assert_eq!(names, vec!["zeta", "AgnesMillie2", "alpha"]);
        assert!(!view.last_controls().expect("controls synced").visible);
    }

    #[rstest]
    fn non_empty_flags_empty_listing() {
        assert_eq!(non_empty(Vec::new()), Err(ShowcaseError::EmptyResult));
        assert_eq!(
            non_empty(vec![minimal_repository("one")]).map(|items| items.len()),
            Ok(1)
        );
    }
}
