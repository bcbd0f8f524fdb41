//! View that keeps the final surface state for the static document.

use crate::pagination::ControlsView;

use super::ProjectsView;

/// Current contents of the projects grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GridContent {
    /// Nothing drawn yet.
    #[default]
    Empty,
    /// The "no repositories found" placeholder.
    Placeholder(String),
    /// Project cards.
    Projects(String),
}

impl GridContent {
    /// Markup to place inside the grid element.
    #[must_use]
    pub fn markup(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Placeholder(markup) | Self::Projects(markup) => markup,
        }
    }
}

/// In-memory surface; later calls overwrite earlier ones like a DOM would.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticProjectsView {
    loading: bool,
    error: Option<String>,
    grid: GridContent,
    controls: ControlsView,
}

impl StaticProjectsView {
    /// Whether the loading indicator is still shown.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Visible error message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Grid contents.
    #[must_use]
    pub const fn grid(&self) -> &GridContent {
        &self.grid
    }

    /// Last synced control bar.
    #[must_use]
    pub const fn controls(&self) -> &ControlsView {
        &self.controls
    }
}

impl ProjectsView for StaticProjectsView {
    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_owned());
    }

    fn show_placeholder(&mut self, markup: &str) {
        self.grid = GridContent::Placeholder(markup.to_owned());
    }

    fn show_projects(&mut self, markup: &str) {
        self.grid = GridContent::Projects(markup.to_owned());
    }

    fn sync_controls(&mut self, controls: &ControlsView) {
        self.controls = controls.clone();
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{GridContent, StaticProjectsView};
    use crate::pagination::ControlsView;
    use crate::projects::ProjectsView;

    #[rstest]
    fn starts_blank() {
        let view = StaticProjectsView::default();

        assert!(!view.is_loading());
        assert_eq!(view.error(), None);
        assert_eq!(view.grid(), &GridContent::Empty);
        assert_eq!(view.grid().markup(), "");
        assert!(!view.controls().visible);
    }

    #[rstest]
    fn later_calls_replace_earlier_state() {
        let mut view = StaticProjectsView::default();

        view.set_loading(true);
        view.show_projects("<div>page 1</div>");
        view.sync_controls(&ControlsView::for_page(1, 2));
        view.show_projects("<div>page 2</div>");
        view.sync_controls(&ControlsView::for_page(2, 2));
        view.set_loading(false);

        assert!(!view.is_loading());
        assert_eq!(view.grid().markup(), "<div>page 2</div>");
        assert_eq!(view.controls().active_page(), Some(2));
    }
}
