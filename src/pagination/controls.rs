//! Visibility attributes for the pagination control bar.

use serde::Serialize;

/// One page indicator in the control bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageDot {
    /// Page this dot jumps to (1-based).
    pub page: usize,
    /// Whether this dot marks the current page.
    pub active: bool,
}

/// Display attributes for the control bar after a render.
///
/// The whole bar is hidden when there is at most one page. The previous
/// control is hidden on the first page and the next control on the last.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ControlsView {
    /// Whether the control bar is shown at all.
    pub visible: bool,
    /// Whether the previous-page control is shown.
    pub show_previous: bool,
    /// Whether the next-page control is shown.
    pub show_next: bool,
    /// One dot per page, in page order.
    pub dots: Vec<PageDot>,
}

impl ControlsView {
    /// Controls for an empty or failed listing: nothing shown.
    #[must_use]
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Derives the controls for `current_page` out of `total_pages`.
    #[must_use]
    pub fn for_page(current_page: usize, total_pages: usize) -> Self {
        Self {
            visible: total_pages > 1,
            show_previous: current_page > 1,
            show_next: current_page < total_pages,
            dots: (1..=total_pages)
                .map(|page| PageDot {
                    page,
                    active: page == current_page,
                })
                .collect(),
        }
    }

    /// Page of the single active dot, if any.
    #[must_use]
    pub fn active_page(&self) -> Option<usize> {
        self.dots.iter().find(|dot| dot.active).map(|dot| dot.page)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::ControlsView;

    #[rstest]
    #[case::first_page(1, false, true)]
    #[case::middle_page(2, true, true)]
    #[case::last_page(3, true, false)]
    fn arrow_visibility_follows_position(
        #[case] current: usize,
        #[case] show_previous: bool,
        #[case] show_next: bool,
    ) {
        let controls = ControlsView::for_page(current, 3);

        assert!(controls.visible, "bar should be visible with three pages");
        assert_eq!(controls.show_previous, show_previous, "previous control");
        assert_eq!(controls.show_next, show_next, "next control");
    }

    #[rstest]
    fn exactly_one_dot_is_active() {
        let controls = ControlsView::for_page(2, 4);

        assert_eq!(controls.dots.len(), 4);
        assert_eq!(controls.dots.iter().filter(|dot| dot.active).count(), 1);
        assert_eq!(controls.active_page(), Some(2));
    }

    #[rstest]
    #[case::single_page(1)]
    #[case::no_pages(0)]
    fn bar_is_hidden_with_at_most_one_page(#[case] total: usize) {
        let controls = ControlsView::for_page(1, total);

        assert!(!controls.visible, "bar should be hidden");
        assert!(!controls.show_next, "next control should be hidden");
        assert!(!controls.show_previous, "previous control should be hidden");
    }
}
