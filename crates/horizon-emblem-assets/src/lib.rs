//! Bundled brand icon assets for Horizon Emblem.
//!
//! This crate embeds the SVG sources of the brand icon set at compile time
//! via the `include_dir!` macro and exposes them as path-keyed byte lookups.
//! Each icon is a single SVG file under `icons/`, named by its lowercase
//! brand name (`icons/redis.svg`, `icons/postgresql.svg`, ...).
//!
//! The set of shipped names is published as constants in [`well_known`] so
//! producers and consumers share one spelling.
//!
//! # Example
//!
//! ```
//! use horizon_emblem_assets::{get, well_known};
//!
//! let svg = get("icons/redis.svg").expect("redis is bundled");
//! assert!(svg.starts_with(b"<svg"));
//!
//! for name in well_known::ALL {
//!     assert!(horizon_emblem_assets::contains(&format!("icons/{name}.svg")));
//! }
//! ```

use include_dir::{Dir, DirEntry, include_dir};

/// Compile-time embedded asset tree (the crate's `assets/` directory).
static ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Well-known brand icon names shipped in this bundle.
///
/// Lookups are keyed by lowercase name; these constants are already
/// lowercase so they can be used verbatim.
pub mod well_known {
    pub const AZURE: &str = "azure";
    pub const CSHARP: &str = "csharp";
    pub const DOCKER: &str = "docker";
    pub const DOTNETCORE: &str = "dotnetcore";
    pub const ELASTICSEARCH: &str = "elasticsearch";
    pub const KUBERNETES: &str = "kubernetes";
    pub const MONGODB: &str = "mongodb";
    pub const MYSQL: &str = "mysql";
    pub const NGINX: &str = "nginx";
    pub const NODEJS: &str = "nodejs";
    pub const POSTGRESQL: &str = "postgresql";
    pub const RABBITMQ: &str = "rabbitmq";
    pub const REDIS: &str = "redis";

    /// Every well-known name, in alphabetical order.
    pub const ALL: &[&str] = &[
        AZURE,
        CSHARP,
        DOCKER,
        DOTNETCORE,
        ELASTICSEARCH,
        KUBERNETES,
        MONGODB,
        MYSQL,
        NGINX,
        NODEJS,
        POSTGRESQL,
        RABBITMQ,
        REDIS,
    ];
}

/// Gets a bundled asset's bytes by relative path.
///
/// Returns `None` if no asset exists at that path.
///
/// # Example
///
/// ```
/// let data = horizon_emblem_assets::get("icons/docker.svg");
/// assert!(data.is_some());
/// ```
pub fn get(path: &str) -> Option<&'static [u8]> {
    ASSETS.get_file(path).map(|f| f.contents())
}

/// Gets a bundled asset as a UTF-8 string.
///
/// Returns `None` if the asset doesn't exist or isn't valid UTF-8.
pub fn get_text(path: &str) -> Option<&'static str> {
    ASSETS.get_file(path).and_then(|f| f.contents_utf8())
}

/// Checks whether an asset exists at the given relative path.
pub fn contains(path: &str) -> bool {
    ASSETS.get_file(path).is_some()
}

/// Lists the relative paths of all bundled assets (recursively).
pub fn paths() -> Vec<&'static str> {
    let mut paths = Vec::new();
    collect_files(&ASSETS, &mut paths);
    paths.sort_unstable();
    paths
}

/// Number of bundled assets.
pub fn count() -> usize {
    paths().len()
}

fn collect_files(dir: &'static Dir<'static>, paths: &mut Vec<&'static str>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(subdir) => collect_files(subdir, paths),
            DirEntry::File(file) => {
                if let Some(path) = file.path().to_str() {
                    paths.push(path);
                }
            }
        }
    }
}
