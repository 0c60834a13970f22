//! Settings shared by every menu of an application.
//!
//! Settings can be built in code or, with the `serde` feature, loaded from
//! RON files:
//!
//! ```ron
//! (
//!     theme: "dark-popup",
//!     nudge: 4.0,
//! )
//! ```
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::path::Path;

/// The theme class used when a menu does not configure one.
pub const DEFAULT_THEME: &str = "icy-popup-theme";

/// The default offset between the pointer and the popup corner, in pixels.
pub const DEFAULT_NUDGE: f32 = 2.0;

/// Application-wide popup settings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Settings {
    /// The theme class of menus that do not set their own.
    pub theme: String,

    /// How far the popup corner is pulled towards the pointer.
    pub nudge: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_owned(),
            nudge: DEFAULT_NUDGE,
        }
    }
}

/// An error produced while loading [`Settings`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// File not found.
    #[error("settings file not found: {0}")]
    NotFound(String),

    /// Failed to read the file.
    #[error("failed to read settings: {0}")]
    Read(#[from] std::io::Error),

    /// Failed to parse the file.
    #[error("failed to parse settings: {0}")]
    Parse(String),

    /// Unsupported format.
    #[error("unsupported settings format: {0}")]
    UnsupportedFormat(String),
}

/// Loads [`Settings`] from a file path.
///
/// Supports RON files (`.ron` extension) when the `serde` feature is enabled.
pub fn load_settings_from_file(path: impl AsRef<Path>) -> Result<Settings, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .unwrap_or("");

    match extension {
        "ron" => {
            let content = std::fs::read_to_string(path)?;
            let settings = parse_ron(&content)?;

            log::info!("Loaded popup settings from {}", path.display());
            Ok(settings)
        }
        _ => {
            log::warn!("Ignoring popup settings with unknown format: {}", path.display());
            Err(LoadError::UnsupportedFormat(extension.to_owned()))
        }
    }
}

#[cfg(feature = "serde")]
fn parse_ron(content: &str) -> Result<Settings, LoadError> {
    ron::from_str(content).map_err(|e| LoadError::Parse(e.to_string()))
}

#[cfg(not(feature = "serde"))]
fn parse_ron(_content: &str) -> Result<Settings, LoadError> {
    Err(LoadError::UnsupportedFormat(
        "RON loading requires 'serde' feature".to_owned(),
    ))
}
