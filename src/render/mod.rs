//! Markup generation for the projects grid and the static page.
//!
//! Templates use `minijinja` with auto-escaping disabled; every externally
//! sourced value passes through the explicit `escape_html` filter instead,
//! so the five reserved characters are always encoded the same way.

pub mod document;
pub mod escape;
pub mod labels;
pub mod projects;

use minijinja::{AutoEscape, Environment};

use crate::error::ShowcaseError;

pub use document::{DocumentParts, render_document};
pub use escape::escape_html;
pub use labels::RenderLabels;
pub use projects::ProjectRenderer;

fn escape_filter(value: &str) -> String {
    escape_html(value)
}

/// Builds an environment holding one named template.
fn template_environment(
    name: &'static str,
    source: &'static str,
) -> Result<Environment<'static>, ShowcaseError> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.add_filter("escape_html", escape_filter);
    env.add_template(name, source)
        .map_err(|error| ShowcaseError::Render {
            message: format!("invalid template `{name}`: {error}"),
        })?;
    Ok(env)
}

fn render_template<S: serde::Serialize>(
    env: &Environment<'static>,
    name: &str,
    ctx: S,
) -> Result<String, ShowcaseError> {
    let template = env.get_template(name).map_err(|error| ShowcaseError::Render {
        message: format!("failed to retrieve template `{name}`: {error}"),
    })?;
    template.render(ctx).map_err(|error| ShowcaseError::Render {
        message: format!("template `{name}` rendering failed: {error}"),
    })
}
