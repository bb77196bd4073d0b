//! Health status icons.

use crate::library::{IconHandle, IconLibrary, content};
use crate::types::{HealthStatus, IconSize, IconVariant};

/// Theme color a status icon is tinted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusColor {
    /// Positive, the resource is healthy.
    Success,
    /// Cautionary, the resource is degraded.
    Warning,
    /// Negative, the resource is unhealthy.
    Error,
    /// Neutral, no status has been reported.
    Info,
}

impl StatusColor {
    /// Lowercase theme token for this color.
    pub fn as_str(self) -> &'static str {
        match self {
            StatusColor::Success => "success",
            StatusColor::Warning => "warning",
            StatusColor::Error => "error",
            StatusColor::Info => "info",
        }
    }
}

/// Maps a health status to its indicator icon and color.
///
/// Pure and total: handles are built from the library's own content
/// constants, so no lookup is involved and nothing can fail. An absent
/// status means health is not known yet and gets the neutral hint icon.
/// Status indicators always render at 16 pixels.
pub fn health_status_icon(status: Option<HealthStatus>) -> (IconHandle, StatusColor) {
    let (name, variant, content, color) = match status {
        Some(HealthStatus::Healthy) => (
            IconLibrary::HEART,
            IconVariant::Filled,
            content::HEART_FILLED,
            StatusColor::Success,
        ),
        Some(HealthStatus::Degraded) => (
            IconLibrary::HEART_BROKEN,
            IconVariant::Filled,
            content::HEART_BROKEN_FILLED,
            StatusColor::Warning,
        ),
        Some(HealthStatus::Unhealthy) => (
            IconLibrary::HEART_BROKEN,
            IconVariant::Filled,
            content::HEART_BROKEN_FILLED,
            StatusColor::Error,
        ),
        None => (
            IconLibrary::CIRCLE_HINT,
            IconVariant::Regular,
            content::CIRCLE_HINT_REGULAR,
            StatusColor::Info,
        ),
    };
    (
        IconHandle::new(name, IconSize::Size16, variant, content),
        color,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_healthy() {
        let (icon, color) = health_status_icon(Some(HealthStatus::Healthy));
        assert_eq!(icon.name(), "Heart");
        assert_eq!(icon.variant(), IconVariant::Filled);
        assert_eq!(color, StatusColor::Success);
    }

    #[test]
    fn test_degraded_and_unhealthy_share_the_icon() {
        let (degraded, warning) = health_status_icon(Some(HealthStatus::Degraded));
        let (unhealthy, error) = health_status_icon(Some(HealthStatus::Unhealthy));

        assert_eq!(degraded.name(), "HeartBroken");
        assert_eq!(unhealthy.name(), "HeartBroken");
        assert_eq!(degraded.content(), unhealthy.content());
        assert_eq!(warning, StatusColor::Warning);
        assert_eq!(error, StatusColor::Error);
    }

    #[test]
    fn test_unknown_status() {
        let (icon, color) = health_status_icon(None);
        assert_eq!(icon.name(), "CircleHint");
        assert_eq!(icon.variant(), IconVariant::Regular);
        assert_eq!(color, StatusColor::Info);
    }

    #[test]
    fn test_status_icons_render_small() {
        for status in [
            None,
            Some(HealthStatus::Healthy),
            Some(HealthStatus::Degraded),
            Some(HealthStatus::Unhealthy),
        ] {
            let (icon, _) = health_status_icon(status);
            assert_eq!(icon.size(), IconSize::Size16);
            assert!(icon.path_data().is_ok());
        }
    }

    #[test]
    fn test_color_tokens() {
        assert_eq!(StatusColor::Success.as_str(), "success");
        assert_eq!(StatusColor::Warning.as_str(), "warning");
        assert_eq!(StatusColor::Error.as_str(), "error");
        assert_eq!(StatusColor::Info.as_str(), "info");
    }
}
