//! CLI operation mode handlers.
//!
//! - [`session`]: Preferences, language detection, and translations
//! - [`projects`]: Render the projects section as a static HTML document
//! - [`typewriter`]: Animate the hero phrases in the terminal
//!
//! Output helpers are in [`output`].

pub mod output;
pub mod projects;
pub mod session;
pub mod typewriter;
