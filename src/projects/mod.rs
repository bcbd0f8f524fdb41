//! Projects section pipeline: fetch, filter, paginate, render, sync controls.
//!
//! The section talks to its display surface only through [`ProjectsView`],
//! so the whole pipeline runs in tests against a recording view and in the
//! binary against [`StaticProjectsView`], which feeds the HTML document.

pub mod controller;
pub mod section;
pub mod static_view;

use crate::pagination::ControlsView;

pub use controller::{PaginationController, PaginationMsg};
pub use section::ProjectsSection;
pub use static_view::{GridContent, StaticProjectsView};

/// Display surface for the projects section.
pub trait ProjectsView {
    /// Shows or hides the loading indicator.
    fn set_loading(&mut self, loading: bool);

    /// Shows the user-visible error message.
    fn show_error(&mut self, message: &str);

    /// Replaces the grid with the "no repositories found" placeholder markup.
    fn show_placeholder(&mut self, markup: &str);

    /// Replaces the grid with project card markup.
    fn show_projects(&mut self, markup: &str);

    /// Applies control bar visibility and the active page marker.
    fn sync_controls(&mut self, controls: &ControlsView);
}
