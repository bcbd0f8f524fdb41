//! Query parameters for the repository listing endpoint.

/// Upper bound on repositories requested in the single listing call.
pub const MAX_FETCH_LIMIT: u8 = 50;

/// Ownership filter for the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepositoryType {
    /// Repositories owned by the user.
    #[default]
    Owner,
    /// Repositories the user is a member of.
    Member,
    /// Both owned and member repositories.
    All,
}

impl RepositoryType {
    /// Returns the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Member => "member",
            Self::All => "all",
        }
    }
}

/// Field the listing is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    /// Most recent push.
    #[default]
    Pushed,
    /// Most recent update.
    Updated,
    /// Creation time.
    Created,
    /// Full repository name.
    FullName,
}

impl SortField {
    /// Returns the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pushed => "pushed",
            Self::Updated => "updated",
            Self::Created => "created",
            Self::FullName => "full_name",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Newest first.
    #[default]
    Desc,
    /// Oldest first.
    Asc,
}

impl SortDirection {
    /// Returns the API parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Desc => "desc",
            Self::Asc => "asc",
        }
    }
}

/// Parameters for the single listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRepositoriesParams {
    /// Ownership filter. Defaults to owner.
    pub kind: RepositoryType,
    /// Sort field. Defaults to pushed.
    pub sort: SortField,
    /// Sort direction. Defaults to newest first.
    pub direction: SortDirection,
    /// Repositories requested (1..=50). Defaults to 50.
    pub per_page: u8,
}

impl Default for ListRepositoriesParams {
    fn default() -> Self {
        Self {
            kind: RepositoryType::Owner,
            sort: SortField::Pushed,
            direction: SortDirection::Desc,
            per_page: MAX_FETCH_LIMIT,
        }
    }
}

impl ListRepositoriesParams {
    /// Returns default parameters with a different per-page cap.
    #[must_use]
    pub fn with_per_page(per_page: u8) -> Self {
        Self {
            per_page,
            ..Self::default()
        }
    }
}
