//! Resource icon resolution for Horizon dashboards.
//!
//! Dashboards show an icon next to every resource they list. This crate
//! picks that icon: resources can carry an explicit override, fall back to
//! a default derived from their resource type, and end at a catch-all, so
//! resolution always produces something to draw. Brand icons (Redis,
//! PostgreSQL, and friends) are served from an embedded asset bundle
//! through a memoizing cache.
//!
//! # Features
//!
//! - Ordered, data-driven default rules from resource type to icon name
//! - Project icons chosen by project file extension
//! - Case-insensitive brand icon cache with permanent negative caching
//! - Health status to icon and theme color mapping
//! - Injectable collaborators, so hosts and tests can swap the icon
//!   library or the asset source
//!
//! # Example
//!
//! ```
//! use horizon_emblem::{IconRef, IconResolver, IconSize, IconVariant, ResourceDescriptor};
//!
//! # fn main() -> horizon_emblem::Result<()> {
//! let resolver = IconResolver::with_defaults();
//!
//! // A brand override resolves straight to the bundled Redis mark.
//! let redis = ResourceDescriptor::new("Container").with_icon(IconRef::brand("Redis"));
//! let path_data = resolver.resolve_path_data(&redis, IconSize::Size24, IconVariant::Filled)?;
//! assert!(!path_data.is_empty());
//!
//! // An unadorned container gets the Box default.
//! let plain = ResourceDescriptor::new("Container");
//! let icon = resolver.resolve_icon(&plain, IconSize::Size24, IconVariant::Filled)?;
//! assert_eq!(icon.name(), "Box");
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod extract;
pub mod library;
pub mod resolve;
pub mod status;
pub mod types;

mod error;

pub use error::{Error, Result};

pub use cache::{AssetSource, BrandIconCache};
#[cfg(feature = "bundled")]
pub use cache::BundledAssets;
pub use library::{IconHandle, IconLibrary};
pub use resolve::IconResolver;
pub use status::{StatusColor, health_status_icon};
pub use types::{
    HealthStatus, IconRef, IconSize, IconSource, IconVariant, ResourceDescriptor, resource_types,
};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::cache::{AssetSource, BrandIconCache};
    pub use crate::error::{Error, Result};
    pub use crate::library::{IconHandle, IconLibrary};
    pub use crate::resolve::IconResolver;
    pub use crate::status::{StatusColor, health_status_icon};
    pub use crate::types::{
        HealthStatus, IconRef, IconSize, IconSource, IconVariant, ResourceDescriptor,
    };
}
