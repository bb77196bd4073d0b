//! Core types shared across icon resolution.

/// Well-known resource type names recognized by the default icon rules.
///
/// Resource types are open-ended strings; these constants cover the types
/// the built-in rule table matches exactly.
pub mod resource_types {
    /// A standalone executable resource.
    pub const EXECUTABLE: &str = "Executable";
    /// A project resource built from a project file.
    pub const PROJECT: &str = "Project";
    /// A container resource.
    pub const CONTAINER: &str = "Container";
    /// A parameter or secret value.
    pub const PARAMETER: &str = "Parameter";
    /// A connection string value.
    pub const CONNECTION_STRING: &str = "ConnectionString";
    /// A service running outside the application model.
    pub const EXTERNAL_SERVICE: &str = "ExternalService";
}

/// Which icon collection a reference resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconSource {
    /// The named vector icon library (the default).
    #[default]
    Library,
    /// The bundled brand icon set, served through the brand icon cache.
    Brand,
}

/// Visual variant of a library icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconVariant {
    /// Outline rendering.
    Regular,
    /// Solid rendering (the default).
    #[default]
    Filled,
}

/// Standard icon sizes, in device-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum IconSize {
    /// 16x16 pixels.
    Size16 = 16,
    /// 20x20 pixels.
    Size20 = 20,
    /// 24x24 pixels.
    Size24 = 24,
    /// 32x32 pixels.
    Size32 = 32,
    /// 48x48 pixels.
    Size48 = 48,
}

impl IconSize {
    /// Returns the size in pixels.
    #[inline]
    pub fn as_pixels(self) -> u32 {
        self as u32
    }

    /// Returns the size as a float, for layout math.
    #[inline]
    pub fn as_f32(self) -> f32 {
        self.as_pixels() as f32
    }

    /// Returns the size for an exact pixel dimension, if one exists.
    pub fn from_pixels(pixels: u32) -> Option<Self> {
        match pixels {
            16 => Some(Self::Size16),
            20 => Some(Self::Size20),
            24 => Some(Self::Size24),
            32 => Some(Self::Size32),
            48 => Some(Self::Size48),
            _ => None,
        }
    }

    /// All sizes, smallest first.
    pub fn all() -> &'static [Self] {
        &[
            Self::Size16,
            Self::Size20,
            Self::Size24,
            Self::Size32,
            Self::Size48,
        ]
    }
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Size16
    }
}

/// Reported health of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthStatus {
    /// All health checks pass.
    Healthy,
    /// Some health checks fail.
    Degraded,
    /// Required health checks fail.
    Unhealthy,
}

/// A caller-supplied icon request.
///
/// Built with [`IconRef::library`] or [`IconRef::brand`]; the variant
/// defaults to [`IconVariant::Filled`] and only applies to library icons.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconRef {
    /// Icon name. Library names are case-sensitive, brand names are not.
    pub name: String,
    /// Collection the name refers to.
    pub source: IconSource,
    /// Requested variant, for library icons.
    pub variant: IconVariant,
}

impl IconRef {
    /// Creates a reference to a named library icon.
    pub fn library(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: IconSource::Library,
            variant: IconVariant::default(),
        }
    }

    /// Creates a reference to a brand icon.
    pub fn brand(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: IconSource::Brand,
            variant: IconVariant::default(),
        }
    }

    /// Sets the requested variant.
    #[must_use]
    pub fn with_variant(mut self, variant: IconVariant) -> Self {
        self.variant = variant;
        self
    }
}

/// A displayable resource, as seen by the icon resolver.
///
/// Only the fields that influence icon selection are carried here; the
/// resolver never needs the rest of a resource's state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Resource type name, for example `"Container"`.
    pub resource_type: String,
    /// Path to the project file, when the resource is a project.
    pub project_path: Option<String>,
    /// Explicit per-resource icon override.
    pub icon: Option<IconRef>,
    /// Most recently reported health status.
    pub health: Option<HealthStatus>,
}

impl ResourceDescriptor {
    /// Creates a descriptor for a resource of the given type.
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            ..Self::default()
        }
    }

    /// Sets the project file path.
    #[must_use]
    pub fn with_project_path(mut self, path: impl Into<String>) -> Self {
        self.project_path = Some(path.into());
        self
    }

    /// Sets an explicit icon override.
    #[must_use]
    pub fn with_icon(mut self, icon: IconRef) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Sets the health status.
    #[must_use]
    pub fn with_health(mut self, health: HealthStatus) -> Self {
        self.health = Some(health);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_ref_defaults() {
        let icon = IconRef::library("Database");
        assert_eq!(icon.name, "Database");
        assert_eq!(icon.source, IconSource::Library);
        assert_eq!(icon.variant, IconVariant::Filled);

        let brand = IconRef::brand("redis");
        assert_eq!(brand.source, IconSource::Brand);
    }

    #[test]
    fn test_icon_ref_with_variant() {
        let icon = IconRef::library("Heart").with_variant(IconVariant::Regular);
        assert_eq!(icon.variant, IconVariant::Regular);
    }

    #[test]
    fn test_icon_size_pixels() {
        assert_eq!(IconSize::Size16.as_pixels(), 16);
        assert_eq!(IconSize::Size48.as_pixels(), 48);
        assert_eq!(IconSize::Size24.as_f32(), 24.0);
        assert_eq!(IconSize::from_pixels(32), Some(IconSize::Size32));
        assert_eq!(IconSize::from_pixels(17), None);
        assert_eq!(IconSize::default(), IconSize::Size16);
    }

    #[test]
    fn test_icon_size_all_is_sorted() {
        let sizes = IconSize::all();
        assert!(sizes.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_resource_descriptor_builder() {
        let resource = ResourceDescriptor::new("Project")
            .with_project_path("src/Api.csproj")
            .with_icon(IconRef::brand("docker"))
            .with_health(HealthStatus::Healthy);

        assert_eq!(resource.resource_type, "Project");
        assert_eq!(resource.project_path.as_deref(), Some("src/Api.csproj"));
        assert_eq!(resource.health, Some(HealthStatus::Healthy));
        assert!(resource.icon.is_some());
    }
}
