//! Persisted user preferences: theme and language choice.
//!
//! Preferences are a flat string store keyed by fixed names. The file-backed
//! store keeps them as a JSON object between sessions.

pub mod theme;

use std::collections::BTreeMap;
use std::io::ErrorKind;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::error::ShowcaseError;

pub use theme::Theme;

/// Key under which the theme choice is stored.
pub const THEME_KEY: &str = "portfolio_theme";

/// Key under which the language choice is stored.
pub const LANGUAGE_KEY: &str = "portfolio_lang";

/// Read/write string store keyed by fixed string keys.
pub trait PreferenceStore {
    /// Returns the stored value for `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::Io`] when the value cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<(), ShowcaseError>;
}

/// Preference store persisted as a JSON object in a single file.
#[derive(Debug, Clone)]
pub struct JsonFilePreferenceStore {
    path: Utf8PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFilePreferenceStore {
    /// Opens the store at `path`. A missing file yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`ShowcaseError::Io`] when the file exists but cannot be read
    /// or parsed.
    pub fn open(path: impl Into<Utf8PathBuf>) -> Result<Self, ShowcaseError> {
        let store_path = path.into();
        let (dir, file_name) = open_parent(&store_path)?;

        let values = match dir.read_to_string(file_name) {
            Ok(content) => serde_json::from_str(&content).map_err(|error| ShowcaseError::Io {
                message: format!("failed to parse preferences '{store_path}': {error}"),
            })?,
            Err(error) if error.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(error) => {
                return Err(ShowcaseError::Io {
                    message: format!("failed to read preferences '{store_path}': {error}"),
                });
            }
        };

        Ok(Self {
            path: store_path,
            values,
        })
    }

    fn persist(&self) -> Result<(), ShowcaseError> {
        let (dir, file_name) = open_parent(&self.path)?;
        let json = serde_json::to_string_pretty(&self.values).map_err(|error| ShowcaseError::Io {
            message: format!("failed to serialise preferences: {error}"),
        })?;
        dir.write(file_name, json).map_err(|error| ShowcaseError::Io {
            message: format!("failed to write preferences '{}': {error}", self.path),
        })
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ShowcaseError> {
        self.values.insert(key.to_owned(), value.to_owned());
        self.persist()
    }
}

fn open_parent(path: &Utf8Path) -> Result<(Dir, &str), ShowcaseError> {
    let file_name = path.file_name().ok_or_else(|| ShowcaseError::Io {
        message: format!("invalid preferences path '{path}': no file name"),
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| {
        ShowcaseError::Io {
            message: format!("failed to open preferences directory '{parent}': {error}"),
        }
    })?;
    Ok((dir, file_name))
}

/// Reads the persisted theme.
#[must_use]
pub fn stored_theme<P: PreferenceStore + ?Sized>(store: &P) -> Theme {
    Theme::from_preference(store.get(THEME_KEY).as_deref())
}
