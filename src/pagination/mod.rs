//! Client-side pagination of the filtered repository listing.
//!
//! [`PaginationState`] owns the filtered items for the lifetime of the page
//! and answers slice and navigation queries as pure functions. The control
//! bar's visibility is derived from it as a [`ControlsView`].

pub mod controls;
pub mod state;

use std::num::NonZeroUsize;

pub use controls::{ControlsView, PageDot};
pub use state::PaginationState;

/// Number of project cards shown per page.
pub const PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(6) {
    Some(size) => size,
    None => NonZeroUsize::MIN,
};
