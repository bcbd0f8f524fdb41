//! Showcase library crate rendering a portfolio's projects section.
//!
//! The library fetches a user's public repositories through Octocrab,
//! drops excluded entries, paginates the rest six to a page, and renders
//! escaped project cards. A timer-driven typewriter animates the hero
//! phrases, with language and theme choices persisted between sessions.

pub mod config;
pub mod error;
pub mod github;
pub mod i18n;
pub mod pagination;
pub mod preferences;
pub mod projects;
pub mod render;
pub mod typewriter;

pub use config::ShowcaseConfig;
pub use error::ShowcaseError;
pub use github::{
    GitHubUser, ListRepositoriesParams, OctocrabRepositorySource, RepositoryDescriptor,
    RepositoryFilter, RepositorySource, parse_api_base,
};
pub use i18n::{Language, Translations};
pub use pagination::{ControlsView, PAGE_SIZE, PaginationState};
pub use preferences::{JsonFilePreferenceStore, PreferenceStore, Theme};
pub use projects::{
    GridContent, PaginationController, PaginationMsg, ProjectsSection, ProjectsView,
    StaticProjectsView,
};
pub use render::{DocumentParts, ProjectRenderer, RenderLabels, escape_html, render_document};
pub use typewriter::{
    TimerSlot, TypewriterCommand, TypewriterDisplay, TypewriterEngine, TypewriterState,
};
