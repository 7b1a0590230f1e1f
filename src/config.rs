//! Persisted preferences.
//!
//! Font family/size and the last window dimensions are stored as JSON
//! in the platform config directory. A missing file yields defaults;
//! the file is written when the font changes and again on confirmed
//! exit.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::font::{DEFAULT_FAMILY, DEFAULT_SIZE, FontSpec};

/// Saved user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prefs {
    pub font_family: String,
    pub font_size: u16,
    /// Last seen terminal width in cells. Recorded on exit; a terminal
    /// cannot be resized at startup, so it is informational only.
    pub window_width: u16,
    /// Last seen terminal height in cells.
    pub window_height: u16,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FAMILY.to_string(),
            font_size: DEFAULT_SIZE,
            window_width: 80,
            window_height: 24,
        }
    }
}

impl Prefs {
    pub fn font(&self) -> FontSpec {
        FontSpec::new(self.font_family.clone(), self.font_size)
    }

    pub fn set_font(&mut self, font: &FontSpec) {
        self.font_family.clone_from(&font.family);
        self.font_size = font.size;
    }
}

/// Platform path of the preferences file.
pub fn prefs_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("scrawl").join("prefs.json");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("scrawl")
                .join("prefs.json");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("scrawl").join("prefs.json");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("scrawl")
                .join("prefs.json");
        }
    }

    PathBuf::from(".scrawl-prefs.json")
}

/// Load preferences, falling back to defaults when the file is absent.
pub fn load_prefs(path: &Path) -> Result<Prefs> {
    if !path.exists() {
        return Ok(Prefs::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read preferences {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Malformed preferences {}", path.display()))
}

/// Write preferences, creating the parent directory as needed.
pub fn save_prefs(path: &Path, prefs: &Prefs) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    let mut content = serde_json::to_string_pretty(prefs).context("Serialize preferences")?;
    content.push('\n');
    fs::write(path, content)
        .with_context(|| format!("Failed to write preferences {}", path.display()))
}
