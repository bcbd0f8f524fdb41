//! Page position over an immutable, already-filtered item sequence.

use std::num::NonZeroUsize;

use super::controls::ControlsView;

/// Tracks the current page over a fixed sequence of items.
///
/// Items are never mutated after [`initialize`](Self::initialize). The
/// current page always satisfies `1 <= current_page <= max(total_pages, 1)`.
///
/// # Example
///
/// ```
/// use std::num::NonZeroUsize;
///
/// use showcase::pagination::PaginationState;
///
/// let size = NonZeroUsize::new(6).expect("six is non-zero");
/// let mut state = PaginationState::initialize((1..=13).collect::<Vec<u32>>(), size);
/// assert_eq!(state.total_pages(), 3);
/// assert!(state.go_to(3));
/// assert_eq!(state.page_slice(), &[13]);
/// assert!(!state.go_to(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState<T> {
    items: Vec<T>,
    page_size: NonZeroUsize,
    current_page: usize,
}

impl<T> PaginationState<T> {
    /// Takes ownership of `items` and positions on the first page.
    #[must_use]
    pub fn initialize(items: Vec<T>, page_size: NonZeroUsize) -> Self {
        Self {
            items,
            page_size,
            current_page: 1,
        }
    }

    /// All items, in their original order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Items per page.
    #[must_use]
    pub const fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Current page number (1-based).
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages: `ceil(items / page_size)`, zero when empty.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size.get())
    }

    /// Returns true when there is nothing to paginate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Moves to `page`. Out-of-range pages leave the state untouched.
    ///
    /// Returns true when the page was accepted.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() {
            tracing::debug!(page, total = self.total_pages(), "ignoring out-of-range page");
            return false;
        }
        self.current_page = page;
        true
    }

    /// Advances one page; no-op on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.current_page >= self.total_pages() {
            return false;
        }
        self.go_to(self.current_page.saturating_add(1))
    }

    /// Steps back one page; no-op on the first page.
    pub fn previous_page(&mut self) -> bool {
        if self.current_page <= 1 {
            return false;
        }
        self.go_to(self.current_page.saturating_sub(1))
    }

    /// Items on the current page.
    #[must_use]
    pub fn page_slice(&self) -> &[T] {
        self.slice_for(self.current_page)
    }

    /// Items on `page`: `items[(page - 1) * size .. page * size]`, clamped to
    /// the sequence. Pages outside the range yield an empty slice.
    #[must_use]
    pub fn slice_for(&self, page: usize) -> &[T] {
        if page == 0 || page > self.total_pages() {
            return &[];
        }
        let size = self.page_size.get();
        let start = page.saturating_sub(1).saturating_mul(size);
        let end = start.saturating_add(size).min(self.items.len());
        self.items.get(start..end).unwrap_or_default()
    }

    /// Control bar attributes for the current position.
    #[must_use]
    pub fn controls(&self) -> ControlsView {
        ControlsView::for_page(self.current_page, self.total_pages())
    }
}
