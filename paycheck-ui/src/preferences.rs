//! Persisted user preferences (currently just the theme).

use std::{
    cell::Cell,
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{logging::app_name, state::ThemePreference};

pub const PREFERENCES_FILE_NAME: &str = "preferences.toml";

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("cannot read preferences '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write preferences '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed preferences '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot encode preferences: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("no configuration directory available")]
    NoConfigDir,
}

/// Where the theme preference survives restarts.
pub trait PreferenceStore {
    /// `Ok(None)` when nothing has been saved yet.
    fn load_theme(&self) -> Result<Option<ThemePreference>, PreferencesError>;

    fn save_theme(
        &self,
        theme: ThemePreference,
    ) -> Result<(), PreferencesError>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferencesFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<ThemePreference>,
}

/// TOML file store, by default `<config dir>/<app name>/preferences.toml`.
#[derive(Debug, Clone)]
pub struct TomlPreferenceStore {
    path: PathBuf,
}

impl TomlPreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform configuration directory.
    pub fn in_config_dir() -> Result<Self, PreferencesError> {
        let dir = dirs::config_dir().ok_or(PreferencesError::NoConfigDir)?;
        Ok(Self::new(dir.join(app_name()).join(PREFERENCES_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> Result<PreferencesFile, PreferencesError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(PreferencesFile::default());
            }
            Err(source) => {
                return Err(PreferencesError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        toml::from_str(&text).map_err(|source| PreferencesError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for TomlPreferenceStore {
    fn load_theme(&self) -> Result<Option<ThemePreference>, PreferencesError> {
        Ok(self.read_file()?.theme)
    }

    fn save_theme(
        &self,
        theme: ThemePreference,
    ) -> Result<(), PreferencesError> {
        let write_err = |source| PreferencesError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let contents = toml::to_string(&PreferencesFile { theme: Some(theme) })?;
        fs::write(&self.path, contents).map_err(write_err)?;

        debug!(path = %self.path.display(), %theme, "theme preference saved");
        Ok(())
    }
}

/// Session-only store for when there is no config directory to write to.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    theme: Cell<Option<ThemePreference>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load_theme(&self) -> Result<Option<ThemePreference>, PreferencesError> {
        Ok(self.theme.get())
    }

    fn save_theme(
        &self,
        theme: ThemePreference,
    ) -> Result<(), PreferencesError> {
        self.theme.set(Some(theme));
        debug!(%theme, "theme preference kept for this session only");
        Ok(())
    }
}

/// Picks the startup theme: the saved preference, otherwise the system
/// dark-mode setting. An unreadable store counts as unset.
pub fn resolve_startup_theme(
    store: &dyn PreferenceStore,
    system_prefers_dark: impl FnOnce() -> bool,
) -> ThemePreference {
    match store.load_theme() {
        Ok(Some(theme)) => theme,
        Ok(None) => ThemePreference::from_dark(system_prefers_dark()),
        Err(error) => {
            warn!(%error, "ignoring unreadable preferences");
            ThemePreference::from_dark(system_prefers_dark())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> TomlPreferenceStore {
        TomlPreferenceStore::new(dir.path().join("nested").join(PREFERENCES_FILE_NAME))
    }

    #[test]
    fn missing_file_loads_as_unset() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(store_in(&dir).load_theme().unwrap(), None);
    }

    #[test]
    fn saved_theme_is_loaded_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save_theme(ThemePreference::Dark).unwrap();

        assert_eq!(store.load_theme().unwrap(), Some(ThemePreference::Dark));
        let text = fs::read_to_string(store.path()).unwrap();
        assert_eq!(text.trim(), r#"theme = "dark""#);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlPreferenceStore::new(dir.path().join(PREFERENCES_FILE_NAME));
        fs::write(store.path(), "theme = \"purple\"").unwrap();

        assert!(matches!(
            store.load_theme(),
            Err(PreferencesError::Parse { .. })
        ));
    }

    #[test]
    fn startup_theme_prefers_saved_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save_theme(ThemePreference::Light).unwrap();

        let theme = resolve_startup_theme(&store, || panic!("system not consulted"));

        assert_eq!(theme, ThemePreference::Light);
    }

    #[test]
    fn startup_theme_falls_back_to_system() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(resolve_startup_theme(&store, || true), ThemePreference::Dark);
        assert_eq!(resolve_startup_theme(&store, || false), ThemePreference::Light);
    }

    #[test]
    fn startup_theme_ignores_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlPreferenceStore::new(dir.path().join(PREFERENCES_FILE_NAME));
        fs::write(store.path(), "not toml at all [").unwrap();

        assert_eq!(resolve_startup_theme(&store, || true), ThemePreference::Dark);
    }

    #[test]
    fn memory_store_keeps_theme_for_the_session() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(store.load_theme().unwrap(), None);

        store.save_theme(ThemePreference::Dark).unwrap();

        assert_eq!(store.load_theme().unwrap(), Some(ThemePreference::Dark));
        assert_eq!(resolve_startup_theme(&store, || false), ThemePreference::Dark);
    }
}
