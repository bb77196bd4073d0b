//! Error types for icon resolution.

use crate::types::IconVariant;

/// Result type for icon resolution operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by icon resolution.
///
/// These only occur when the icon library has been miswired, for example a
/// custom library that drops one of the names the default rules assign.
/// Lookups that are allowed to fail (brand icons, override names) report
/// absence with `Option` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A default icon name is not present in the icon library.
    #[error("icon library has no '{name}' entry for the {variant:?} variant")]
    MissingLibraryIcon {
        /// Name the resolution rules asked for.
        name: String,
        /// Variant that was requested.
        variant: IconVariant,
    },

    /// A library icon's content has no extractable path data.
    #[error("library icon '{name}' has no path data in its content")]
    MissingPathData {
        /// Name of the offending icon.
        name: String,
    },
}

impl Error {
    /// Creates a missing library icon error.
    pub fn missing_library_icon(name: impl Into<String>, variant: IconVariant) -> Self {
        Self::MissingLibraryIcon {
            name: name.into(),
            variant,
        }
    }

    /// Creates a missing path data error.
    pub fn missing_path_data(name: impl Into<String>) -> Self {
        Self::MissingPathData { name: name.into() }
    }
}
