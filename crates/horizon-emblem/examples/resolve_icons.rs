//! Resolves icons for a handful of resources and prints each outcome.
//!
//! Run with `cargo run --example resolve_icons`. Debug logging is enabled
//! so override fall-throughs and brand cache misses are visible.

use horizon_emblem::{
    HealthStatus, IconRef, IconResolver, IconSize, IconVariant, ResourceDescriptor,
    health_status_icon,
};

fn main() -> horizon_emblem::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let resolver = IconResolver::with_defaults();

    let resources = [
        ResourceDescriptor::new("Container").with_icon(IconRef::brand("redis")),
        ResourceDescriptor::new("Container"),
        ResourceDescriptor::new("Project").with_project_path("services/Checkout.csproj"),
        ResourceDescriptor::new("PostgresDatabase"),
        ResourceDescriptor::new("Executable").with_icon(IconRef::library("CodeCircle")),
        ResourceDescriptor::new("Executable").with_icon(IconRef::library("NoSuchIcon")),
        ResourceDescriptor::new("Widget"),
    ];

    for resource in &resources {
        let icon = resolver.resolve_icon(resource, IconSize::Size24, IconVariant::Filled)?;
        let path_data = resolver.resolve_path_data(resource, IconSize::Size24, IconVariant::Filled)?;
        println!(
            "{:<18} -> {:<22} ({} chars of path data)",
            resource.resource_type,
            icon.name(),
            path_data.len()
        );
    }

    for status in [
        Some(HealthStatus::Healthy),
        Some(HealthStatus::Degraded),
        Some(HealthStatus::Unhealthy),
        None,
    ] {
        let (icon, color) = health_status_icon(status);
        println!("{status:?} -> {} [{}]", icon.name(), color.as_str());
    }

    println!(
        "brand cache: {} entries, {} hits, {} misses",
        resolver.brand_icons().len(),
        resolver.brand_icons().hits(),
        resolver.brand_icons().misses()
    );

    Ok(())
}
