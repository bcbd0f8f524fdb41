//! Navigation input applied to the pagination state.

use crate::error::ShowcaseError;
use crate::github::RepositoryDescriptor;
use crate::pagination::{ControlsView, PAGE_SIZE, PaginationState};
use crate::render::ProjectRenderer;

use super::ProjectsView;

/// Navigation events raised by the control bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationMsg {
    /// Previous-page control activated.
    Previous,
    /// Next-page control activated.
    Next,
    /// Page dot activated (1-based).
    GoTo(usize),
}

/// Owns the filtered listing and keeps the view in step with the page.
#[derive(Debug, Clone)]
pub struct PaginationController {
    state: PaginationState<RepositoryDescriptor>,
    renderer: ProjectRenderer,
}

impl PaginationController {
    /// Positions on page one of `items`, using the fixed page size.
    #[must_use]
    pub fn new(items: Vec<RepositoryDescriptor>, renderer: ProjectRenderer) -> Self {
        Self {
            state: PaginationState::initialize(items, PAGE_SIZE),
            renderer,
        }
    }

    /// Current pagination state.
    #[must_use]
    pub const fn state(&self) -> &PaginationState<RepositoryDescriptor> {
        &self.state
    }

    /// Renderer used for the grid.
    #[must_use]
    pub const fn renderer(&self) -> &ProjectRenderer {
        &self.renderer
    }

    /// Draws the current page and syncs the control bar.
    ///
    /// An empty listing draws the placeholder and hides the control bar.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::Render`] if the cards fail to render; the
    /// view is left untouched in that case.
    pub fn render_current<V>(&self, view: &mut V) -> Result<(), ShowcaseError>
    where
        V: ProjectsView + ?Sized,
    {
        if self.state.is_empty() {
            view.show_placeholder(&self.renderer.render_placeholder());
            view.sync_controls(&ControlsView::hidden());
            return Ok(());
        }

        let markup = self.renderer.render(self.state.page_slice())?;
        view.show_projects(&markup);
        view.sync_controls(&self.state.controls());
        Ok(())
    }

    /// Applies a navigation event.
    ///
    /// Returns true when the page changed. Out-of-range requests, `Previous`
    /// on the first page, and `Next` on the last page change nothing and do
    /// not redraw.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::Render`] if redrawing the new page fails.
    pub fn handle<V>(&mut self, msg: PaginationMsg, view: &mut V) -> Result<bool, ShowcaseError>
    where
        V: ProjectsView + ?Sized,
    {
        let changed = match msg {
            PaginationMsg::Previous => self.state.previous_page(),
            PaginationMsg::Next => self.state.next_page(),
            PaginationMsg::GoTo(page) => self.state.go_to(page),
        };

        if changed {
            tracing::debug!(
                page = self.state.current_page(),
                total = self.state.total_pages(),
                "page changed"
            );
            self.render_current(view)?;
        }
        Ok(changed)
    }
}
