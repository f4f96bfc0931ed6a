//! Persisted user preferences.
//!
//! Preferences are stored as TOML. Loading never fails: an unreadable or
//! malformed file falls back to the defaults, and the returned
//! [`SettingsOrigin`] says which of the three cases applied.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::GenerationSettings;

/// File name looked up in the current directory.
pub const LOCAL_SETTINGS_FILE: &str = "arithdrill.toml";

/// Environment variable naming a settings file explicitly.
pub const SETTINGS_ENV_VAR: &str = "ARITHDRILL_SETTINGS";

/// Everything saved between sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Settings handed to the generator.
    #[serde(default)]
    pub generation: GenerationSettings,
    /// How worksheets are printed.
    #[serde(default)]
    pub sheet: SheetOptions,
}

/// Worksheet printing options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetOptions {
    /// Heading printed above the questions.
    #[serde(default = "default_title")]
    pub title: String,
    /// Number of question columns (1–4).
    #[serde(default = "default_columns")]
    pub columns: usize,
    /// Whether an answer key follows the questions.
    #[serde(default = "default_true")]
    pub show_answers: bool,
}

fn default_title() -> String {
    "Arithmetic Practice".to_string()
}
fn default_columns() -> usize {
    2
}
fn default_true() -> bool {
    true
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            title: default_title(),
            columns: default_columns(),
            show_answers: true,
        }
    }
}

impl SheetOptions {
    /// Column count clamped to what a sheet can hold.
    pub fn column_count(&self) -> usize {
        self.columns.clamp(1, 4)
    }
}

/// Where a set of preferences came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsOrigin {
    /// Parsed from this file.
    File(PathBuf),
    /// No settings file exists; built-in defaults are in use.
    Defaults,
    /// A settings file exists but could not be used; defaults are in use.
    Fallback { path: PathBuf, reason: String },
}

impl SettingsOrigin {
    /// The file involved, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            SettingsOrigin::File(path) | SettingsOrigin::Fallback { path, .. } => {
                Some(path.as_path())
            }
            SettingsOrigin::Defaults => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, SettingsOrigin::Fallback { .. })
    }
}

impl fmt::Display for SettingsOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsOrigin::File(path) => write!(f, "loaded from {}", path.display()),
            SettingsOrigin::Defaults => write!(f, "built-in defaults"),
            SettingsOrigin::Fallback { path, reason } => write!(
                f,
                "built-in defaults ({} could not be used: {reason})",
                path.display()
            ),
        }
    }
}

/// Preferences together with their origin.
#[derive(Debug, Clone)]
pub struct LoadedSettings {
    pub preferences: Preferences,
    pub origin: SettingsOrigin,
}

/// Find the settings file to use.
///
/// Search order:
/// 1. the explicit path, if given
/// 2. `$ARITHDRILL_SETTINGS`
/// 3. `arithdrill.toml` in the current directory
/// 4. `~/.config/arithdrill/settings.toml`
///
/// Steps 3 and 4 only match existing files. Returns `None` when nothing
/// matched.
pub fn locate_settings(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }
    if let Ok(p) = std::env::var(SETTINGS_ENV_VAR) {
        if !p.trim().is_empty() {
            return Some(PathBuf::from(p));
        }
    }
    let local = PathBuf::from(LOCAL_SETTINGS_FILE);
    if local.exists() {
        return Some(local);
    }
    dirs_path()
        .map(|dir| dir.join("settings.toml"))
        .filter(|global| global.exists())
}

/// Load preferences from an explicit path, or search the default locations.
pub fn load_settings_from(path: Option<&Path>) -> LoadedSettings {
    let Some(path) = locate_settings(path) else {
        return defaults();
    };
    if !path.exists() {
        tracing::debug!("settings file {} does not exist, using defaults", path.display());
        return defaults();
    }

    let loaded = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read settings: {}", path.display()))
        .and_then(|content| parse_settings(&content));

    match loaded {
        Ok(preferences) => LoadedSettings {
            preferences,
            origin: SettingsOrigin::File(path),
        },
        Err(e) => {
            let reason = format!("{e:#}");
            tracing::warn!("ignoring settings file {}: {reason}", path.display());
            LoadedSettings {
                preferences: Preferences::default(),
                origin: SettingsOrigin::Fallback { path, reason },
            }
        }
    }
}

/// Parse preferences from TOML; missing keys take their defaults.
pub fn parse_settings(content: &str) -> Result<Preferences> {
    toml::from_str(content).context("failed to parse settings TOML")
}

/// Write preferences as TOML, creating parent directories as needed.
pub fn save_settings(path: &Path, preferences: &Preferences) -> Result<()> {
    let content = toml::to_string_pretty(preferences).context("failed to serialize settings")?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write settings to {}", path.display()))?;
    tracing::debug!("saved settings to {}", path.display());
    Ok(())
}

fn defaults() -> LoadedSettings {
    LoadedSettings {
        preferences: Preferences::default(),
        origin: SettingsOrigin::Defaults,
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("arithdrill"))
}
