//! Resource icon resolution.
//!
//! [`IconResolver`] picks the icon for a resource by walking a fixed
//! fallback chain: an explicit per-resource override when one is set and
//! usable, otherwise a default derived from the resource type by an
//! ordered rule table that ends in a catch-all. Every resource gets an
//! icon; only a miswired icon library can make resolution fail.

use std::path::Path;

use crate::cache::BrandIconCache;
use crate::error::{Error, Result};
use crate::library::{IconHandle, IconLibrary};
use crate::types::{IconSize, IconSource, IconVariant, ResourceDescriptor, resource_types};

/// How a rule decides whether it applies to a resource type.
#[derive(Debug, Clone, Copy)]
enum TypeMatcher {
    /// Exact, case-sensitive match.
    Exact(&'static str),
    /// Case-insensitive substring match. The needle is stored lowercase.
    Contains(&'static str),
    /// Matches every type.
    Any,
}

impl TypeMatcher {
    fn matches(self, resource_type: &str) -> bool {
        match self {
            TypeMatcher::Exact(name) => resource_type == name,
            TypeMatcher::Contains(needle) => resource_type.to_lowercase().contains(needle),
            TypeMatcher::Any => true,
        }
    }
}

/// Icon a rule assigns when it matches.
#[derive(Debug, Clone, Copy)]
enum DefaultIcon {
    /// A fixed library icon name.
    Named(&'static str),
    /// Chosen from the project file extension.
    ProjectFile,
}

/// Default icon rules, walked top to bottom; the first match wins.
/// Exact rules come first, then the substring rule, then the catch-all.
const TYPE_RULES: &[(TypeMatcher, DefaultIcon)] = &[
    (
        TypeMatcher::Exact(resource_types::EXECUTABLE),
        DefaultIcon::Named(IconLibrary::APPS),
    ),
    (
        TypeMatcher::Exact(resource_types::PROJECT),
        DefaultIcon::ProjectFile,
    ),
    (
        TypeMatcher::Exact(resource_types::CONTAINER),
        DefaultIcon::Named(IconLibrary::BOX),
    ),
    (
        TypeMatcher::Exact(resource_types::PARAMETER),
        DefaultIcon::Named(IconLibrary::KEY),
    ),
    (
        TypeMatcher::Exact(resource_types::CONNECTION_STRING),
        DefaultIcon::Named(IconLibrary::PLUG_CONNECTED_SETTINGS),
    ),
    (
        TypeMatcher::Exact(resource_types::EXTERNAL_SERVICE),
        DefaultIcon::Named(IconLibrary::GLOBE_ARROW_FORWARD),
    ),
    (
        TypeMatcher::Contains("database"),
        DefaultIcon::Named(IconLibrary::DATABASE),
    ),
    (
        TypeMatcher::Any,
        DefaultIcon::Named(IconLibrary::SETTINGS_COG_MULTIPLE),
    ),
];

/// Picks the default library icon name for a resource.
fn default_icon_name(resource: &ResourceDescriptor) -> &'static str {
    for (matcher, icon) in TYPE_RULES {
        if matcher.matches(&resource.resource_type) {
            return match icon {
                DefaultIcon::Named(name) => name,
                DefaultIcon::ProjectFile => project_icon_name(resource.project_path.as_deref()),
            };
        }
    }
    IconLibrary::SETTINGS_COG_MULTIPLE
}

/// Picks the project icon from the project file extension.
///
/// Extensions compare case-insensitively; a missing, blank, or
/// unrecognized path gets the generic code icon.
fn project_icon_name(project_path: Option<&str>) -> &'static str {
    let Some(path) = project_path.filter(|p| !p.trim().is_empty()) else {
        return IconLibrary::CODE_CIRCLE;
    };
    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csproj") || ext.eq_ignore_ascii_case("cs") => {
            IconLibrary::CODE_CS_RECTANGLE
        }
        Some(ext) if ext.eq_ignore_ascii_case("fsproj") => IconLibrary::CODE_FS_RECTANGLE,
        Some(ext) if ext.eq_ignore_ascii_case("vbproj") => IconLibrary::CODE_VB_RECTANGLE,
        _ => IconLibrary::CODE_CIRCLE,
    }
}

/// Resolves resource descriptors to icons.
///
/// Owns its collaborators: the [`IconLibrary`] for named lookups and the
/// [`BrandIconCache`] for brand overrides. Both are injected, so tests and
/// hosts can swap either out. All methods take `&self`; one resolver is
/// meant to be built at startup and shared.
#[derive(Debug)]
pub struct IconResolver {
    library: IconLibrary,
    brand_icons: BrandIconCache,
}

impl IconResolver {
    /// Creates a resolver over the given library and brand icon cache.
    pub fn new(library: IconLibrary, brand_icons: BrandIconCache) -> Self {
        Self {
            library,
            brand_icons,
        }
    }

    /// Creates a resolver over the built-in library and the bundled brand
    /// icon set.
    #[cfg(feature = "bundled")]
    pub fn with_defaults() -> Self {
        Self::new(IconLibrary::builtin(), BrandIconCache::with_bundled())
    }

    /// The icon library lookups go through.
    pub fn library(&self) -> &IconLibrary {
        &self.library
    }

    /// The brand icon cache lookups go through.
    pub fn brand_icons(&self) -> &BrandIconCache {
        &self.brand_icons
    }

    /// Resolves the library icon for a resource.
    ///
    /// A library-sourced override with a non-blank name is tried first,
    /// honoring the override's own variant. An override that misses the
    /// library falls through to the type default without failing, so a
    /// misspelled name degrades to the default icon. The final library
    /// lookup must succeed; the built-in set covers every default name, so
    /// an error here means the library was replaced with an incomplete one.
    pub fn resolve_icon(
        &self,
        resource: &ResourceDescriptor,
        size: IconSize,
        variant: IconVariant,
    ) -> Result<IconHandle> {
        if let Some(icon) = &resource.icon
            && icon.source == IconSource::Library
            && !icon.name.trim().is_empty()
        {
            match self.library.resolve(&icon.name, size, icon.variant) {
                Some(handle) => return Ok(handle),
                None => tracing::debug!(
                    "Icon override '{}' not in library, using the type default",
                    icon.name
                ),
            }
        }

        let name = default_icon_name(resource);
        self.library
            .resolve(name, size, variant)
            .ok_or_else(|| Error::missing_library_icon(name, variant))
    }

    /// Resolves a resource straight to SVG path data.
    ///
    /// A brand-sourced override with a non-blank name short-circuits
    /// through the brand icon cache when it hits. In every other case,
    /// including a brand miss, the library chain runs and the resolved
    /// handle's path data is extracted.
    pub fn resolve_path_data(
        &self,
        resource: &ResourceDescriptor,
        size: IconSize,
        variant: IconVariant,
    ) -> Result<String> {
        if let Some(icon) = &resource.icon
            && icon.source == IconSource::Brand
            && !icon.name.trim().is_empty()
            && let Some(path_data) = self.brand_icons.resolve(&icon.name)
        {
            return Ok(path_data);
        }
        self.resolve_icon(resource, size, variant)?.path_data()
    }
}
