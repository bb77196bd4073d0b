//! The named vector icon library.
//!
//! [`IconLibrary`] maps `(name, variant)` pairs to SVG content fragments and
//! stamps lookups into [`IconHandle`]s. The built-in set covers every name
//! the default resolution rules and the status table hand out, in both
//! variants, which keeps chain resolution total. Custom icons can be
//! registered on top at composition time.

use std::borrow::Cow;
use std::collections::HashMap;

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::{Error, Result};
use crate::types::{IconSize, IconVariant};

/// A resolved library icon.
///
/// Carries the name, the size and variant it was requested at, and the SVG
/// content fragment to render. Handles are cheap to clone; built-in content
/// is borrowed for the life of the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconHandle {
    name: String,
    size: IconSize,
    variant: IconVariant,
    content: Cow<'static, str>,
}

impl IconHandle {
    /// Creates a handle from raw parts.
    pub fn new(
        name: impl Into<String>,
        size: IconSize,
        variant: IconVariant,
        content: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            size,
            variant,
            content: content.into(),
        }
    }

    /// The icon's library name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The size the icon was requested at.
    #[inline]
    pub fn size(&self) -> IconSize {
        self.size
    }

    /// The variant the icon was resolved for.
    #[inline]
    pub fn variant(&self) -> IconVariant {
        self.variant
    }

    /// The SVG content fragment.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Extracts the drawing commands from the content fragment.
    ///
    /// Library content is a closed set of `<path d="..."/>` fragments, so a
    /// fragment without extractable path data is a defect in the registered
    /// content and is reported as an error rather than an absent value.
    pub fn path_data(&self) -> Result<String> {
        let mut reader = Reader::from_str(&self.content);
        loop {
            match reader.read_event() {
                Ok(Event::Start(element) | Event::Empty(element)) => {
                    for attr in element.attributes() {
                        let Ok(attr) = attr else { break };
                        if attr.key.as_ref() == b"d"
                            && let Ok(value) = attr.unescape_value()
                        {
                            return Ok(value.into_owned());
                        }
                    }
                    return Err(Error::missing_path_data(&self.name));
                }
                Ok(Event::Eof) | Err(_) => return Err(Error::missing_path_data(&self.name)),
                Ok(_) => {}
            }
        }
    }
}

/// Content for one icon name, by variant.
#[derive(Debug, Clone, Default)]
struct VariantSet {
    regular: Option<Cow<'static, str>>,
    filled: Option<Cow<'static, str>>,
}

impl VariantSet {
    fn get(&self, variant: IconVariant) -> Option<&Cow<'static, str>> {
        match variant {
            IconVariant::Regular => self.regular.as_ref(),
            IconVariant::Filled => self.filled.as_ref(),
        }
    }

    fn set(&mut self, variant: IconVariant, content: Cow<'static, str>) {
        match variant {
            IconVariant::Regular => self.regular = Some(content),
            IconVariant::Filled => self.filled = Some(content),
        }
    }
}

/// Registry of vector icons keyed by name and variant.
///
/// Names are matched case-sensitively. [`IconLibrary::builtin`] loads the
/// icons the resolution rules depend on; [`IconLibrary::register`] adds or
/// replaces entries.
#[derive(Debug, Clone)]
pub struct IconLibrary {
    icons: HashMap<String, VariantSet>,
}

impl IconLibrary {
    // ===== Resource type defaults =====

    /// Application tiles, the executable default
    pub const APPS: &'static str = "Apps";
    /// Shipping box, the container default
    pub const BOX: &'static str = "Box";
    /// Key, the parameter default
    pub const KEY: &'static str = "Key";
    /// Plug with settings, the connection string default
    pub const PLUG_CONNECTED_SETTINGS: &'static str = "PlugConnectedSettings";
    /// Globe with outbound arrow, the external service default
    pub const GLOBE_ARROW_FORWARD: &'static str = "GlobeArrowForward";
    /// Database cylinder, for database-like types
    pub const DATABASE: &'static str = "Database";
    /// Twin cogs, the catch-all default
    pub const SETTINGS_COG_MULTIPLE: &'static str = "SettingsCogMultiple";

    // ===== Project language icons =====

    /// C# project rectangle
    pub const CODE_CS_RECTANGLE: &'static str = "CodeCsRectangle";
    /// F# project rectangle
    pub const CODE_FS_RECTANGLE: &'static str = "CodeFsRectangle";
    /// Visual Basic project rectangle
    pub const CODE_VB_RECTANGLE: &'static str = "CodeVbRectangle";
    /// Code circle, for projects of unknown language
    pub const CODE_CIRCLE: &'static str = "CodeCircle";

    // ===== Status icons =====

    /// Heart, shown for healthy resources
    pub const HEART: &'static str = "Heart";
    /// Broken heart, shown for degraded and unhealthy resources
    pub const HEART_BROKEN: &'static str = "HeartBroken";
    /// Hint circle, shown while health is unknown
    pub const CIRCLE_HINT: &'static str = "CircleHint";

    /// Creates an empty library.
    pub fn new() -> Self {
        Self {
            icons: HashMap::new(),
        }
    }

    /// Creates a library holding the built-in icon set.
    ///
    /// Every name the default rules and the status table use is present in
    /// both variants.
    pub fn builtin() -> Self {
        let mut library = Self::new();
        for (name, regular, filled) in BUILTIN {
            library.register(*name, IconVariant::Regular, *regular);
            library.register(*name, IconVariant::Filled, *filled);
        }
        library
    }

    /// Registers an icon, replacing any existing content for the same name
    /// and variant.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        variant: IconVariant,
        content: impl Into<Cow<'static, str>>,
    ) {
        self.icons
            .entry(name.into())
            .or_default()
            .set(variant, content.into());
    }

    /// Registers an icon, builder style.
    #[must_use]
    pub fn with_icon(
        mut self,
        name: impl Into<String>,
        variant: IconVariant,
        content: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.register(name, variant, content);
        self
    }

    /// Looks up an icon and stamps it into a handle.
    ///
    /// Returns `None` when the name is unknown or the variant is not
    /// registered for it; variants never substitute for each other.
    pub fn resolve(&self, name: &str, size: IconSize, variant: IconVariant) -> Option<IconHandle> {
        let content = self.icons.get(name)?.get(variant)?;
        Some(IconHandle {
            name: name.to_owned(),
            size,
            variant,
            content: content.clone(),
        })
    }

    /// Returns true when the name is registered with the given variant.
    pub fn contains(&self, name: &str, variant: IconVariant) -> bool {
        self.icons
            .get(name)
            .is_some_and(|set| set.get(variant).is_some())
    }

    /// Number of registered icon names.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Returns true when no icons are registered.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.icons.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for IconLibrary {
    /// The built-in set, not an empty library.
    fn default() -> Self {
        Self::builtin()
    }
}

/// Built-in content as `(name, regular, filled)` rows.
const BUILTIN: &[(&str, &str, &str)] = &[
    (
        IconLibrary::APPS,
        content::APPS_REGULAR,
        content::APPS_FILLED,
    ),
    (IconLibrary::BOX, content::BOX_REGULAR, content::BOX_FILLED),
    (IconLibrary::KEY, content::KEY_REGULAR, content::KEY_FILLED),
    (
        IconLibrary::PLUG_CONNECTED_SETTINGS,
        content::PLUG_CONNECTED_SETTINGS_REGULAR,
        content::PLUG_CONNECTED_SETTINGS_FILLED,
    ),
    (
        IconLibrary::GLOBE_ARROW_FORWARD,
        content::GLOBE_ARROW_FORWARD_REGULAR,
        content::GLOBE_ARROW_FORWARD_FILLED,
    ),
    (
        IconLibrary::DATABASE,
        content::DATABASE_REGULAR,
        content::DATABASE_FILLED,
    ),
    (
        IconLibrary::SETTINGS_COG_MULTIPLE,
        content::SETTINGS_COG_MULTIPLE_REGULAR,
        content::SETTINGS_COG_MULTIPLE_FILLED,
    ),
    (
        IconLibrary::CODE_CS_RECTANGLE,
        content::CODE_CS_RECTANGLE_REGULAR,
        content::CODE_CS_RECTANGLE_FILLED,
    ),
    (
        IconLibrary::CODE_FS_RECTANGLE,
        content::CODE_FS_RECTANGLE_REGULAR,
        content::CODE_FS_RECTANGLE_FILLED,
    ),
    (
        IconLibrary::CODE_VB_RECTANGLE,
        content::CODE_VB_RECTANGLE_REGULAR,
        content::CODE_VB_RECTANGLE_FILLED,
    ),
    (
        IconLibrary::CODE_CIRCLE,
        content::CODE_CIRCLE_REGULAR,
        content::CODE_CIRCLE_FILLED,
    ),
    (
        IconLibrary::HEART,
        content::HEART_REGULAR,
        content::HEART_FILLED,
    ),
    (
        IconLibrary::HEART_BROKEN,
        content::HEART_BROKEN_REGULAR,
        content::HEART_BROKEN_FILLED,
    ),
    (
        IconLibrary::CIRCLE_HINT,
        content::CIRCLE_HINT_REGULAR,
        content::CIRCLE_HINT_FILLED,
    ),
];

/// Vector content for the built-in set, drawn on a 24x24 grid.
pub(crate) mod content {
    pub(crate) const APPS_REGULAR: &str = r#"<path d="M4.5 3h6A1.5 1.5 0 0 1 12 4.5v6a1.5 1.5 0 0 1-1.5 1.5h-6A1.5 1.5 0 0 1 3 10.5v-6A1.5 1.5 0 0 1 4.5 3Zm0 1.5v6h6v-6h-6Zm9 7.5h6a1.5 1.5 0 0 1 1.5 1.5v6a1.5 1.5 0 0 1-1.5 1.5h-6a1.5 1.5 0 0 1-1.5-1.5v-6a1.5 1.5 0 0 1 1.5-1.5Zm0 1.5v6h6v-6h-6Z"/>"#;
    pub(crate) const APPS_FILLED: &str = r#"<path d="M4.5 3h6A1.5 1.5 0 0 1 12 4.5v6a1.5 1.5 0 0 1-1.5 1.5h-6A1.5 1.5 0 0 1 3 10.5v-6A1.5 1.5 0 0 1 4.5 3Zm9 9h6a1.5 1.5 0 0 1 1.5 1.5v6a1.5 1.5 0 0 1-1.5 1.5h-6a1.5 1.5 0 0 1-1.5-1.5v-6a1.5 1.5 0 0 1 1.5-1.5Z"/>"#;

    pub(crate) const BOX_REGULAR: &str = r#"<path d="M11.67 2.58a.75.75 0 0 1 .66 0l8.25 4.13c.26.12.42.38.42.67v9.24c0 .28-.16.54-.41.67l-8.26 4.13a.75.75 0 0 1-.66 0l-8.26-4.13a.75.75 0 0 1-.41-.67V7.38c0-.29.16-.55.42-.67l8.25-4.13ZM12 4.1 5.43 7.38 12 10.66l6.57-3.28L12 4.1ZM4.5 8.59v7.57l6.75 3.37v-7.56L4.5 8.59Zm15 0-6.75 3.38v7.56l6.75-3.37V8.59Z"/>"#;
    pub(crate) const BOX_FILLED: &str = r#"<path d="M11.67 2.58a.75.75 0 0 1 .66 0l8.25 4.12-8.58 4.3-8.58-4.3 8.25-4.12ZM2.75 8.07l8.5 4.25v9.1l-8.09-4.04a.75.75 0 0 1-.41-.67V8.07Zm10 13.35v-9.1l8.5-4.25v8.64c0 .28-.16.54-.41.67l-8.09 4.04Z"/>"#;

    pub(crate) const KEY_REGULAR: &str = r#"<path d="M15.25 2a6.75 6.75 0 0 0-6.57 8.32L2.3 16.7a1 1 0 0 0-.29.7V21a1 1 0 0 0 1 1h3.75a.75.75 0 0 0 .75-.75V19.5h1.75a.75.75 0 0 0 .75-.75V17h1.69c.2 0 .39-.08.53-.22l1.45-1.45A6.75 6.75 0 0 0 15.25 2Zm-5.25 6.75a5.25 5.25 0 1 1 3.71 5.02l-.43-.13-1.92 1.92v1.69H9.61v1.75H8.02v1.75H3.5v-2.94l6.53-6.53-.13-.43c-.26-.66-.4-1.37-.4-2.1Zm6.75-3.25a1.75 1.75 0 1 0 0 3.5 1.75 1.75 0 0 0 0-3.5Z"/>"#;
    pub(crate) const KEY_FILLED: &str = r#"<path d="M15.25 2a6.75 6.75 0 0 1 0 13.5c-.65 0-1.28-.09-1.88-.26l-1.37 1.37a.75.75 0 0 1-.53.22H9.78v1.67c0 .41-.34.75-.75.75H7.28v1.75a.75.75 0 0 1-.75.75H3a1 1 0 0 1-1-1v-3.1a1 1 0 0 1 .29-.7l6.39-6.38A6.75 6.75 0 0 1 15.25 2Zm1.5 3.5a1.75 1.75 0 1 0 0 3.5 1.75 1.75 0 0 0 0-3.5Z"/>"#;

    pub(crate) const PLUG_CONNECTED_SETTINGS_REGULAR: &str = r#"<path d="M21.78 3.28a.75.75 0 0 0-1.06-1.06l-2.5 2.5-.9-.9a3.25 3.25 0 0 0-4.6 0l-2.07 2.07a.75.75 0 0 0 0 1.06l5.4 5.4a.75.75 0 0 0 1.06 0l2.07-2.07a3.25 3.25 0 0 0 0-4.6l-.9-.9 2.5-2.5Zm-7.94 3.6 1.93-1.94a1.75 1.75 0 0 1 2.48 0l1.81 1.81a1.75 1.75 0 0 1 0 2.48l-1.93 1.93-4.29-4.28ZM8.84 8.78a.75.75 0 0 1 1.06 0l1.29 1.28a7.1 7.1 0 0 0-1.06 1.06l-.76-.76-5.12 5.12-.44 1.95 1.95-.44 2.25-2.25c.2.54.47 1.05.8 1.51l-2.4 2.4a.75.75 0 0 1-.36.2l-3.13.7a.75.75 0 0 1-.9-.9l.7-3.12a.75.75 0 0 1 .2-.36l5.92-5.93Zm9.16 3.97c.34 0 .67.03.99.09l.24 1.39c.6.18 1.14.5 1.58.92l1.37-.45c.43.5.75 1.1.94 1.75l-1.1.9a4 4 0 0 1 0 1.82l1.1.9a5.48 5.48 0 0 1-.94 1.75l-1.37-.45c-.44.42-.98.74-1.58.92l-.24 1.39a5.53 5.53 0 0 1-1.98 0l-.24-1.4a4.01 4.01 0 0 1-1.58-.9l-1.37.45a5.48 5.48 0 0 1-.94-1.76l1.1-.89a4 4 0 0 1 0-1.82l-1.1-.9c.19-.65.51-1.24.94-1.75l1.37.45c.44-.42.98-.74 1.58-.92l.24-1.39c.32-.06.65-.09.99-.09Zm0 3.75a1.5 1.5 0 1 1 0 3 1.5 1.5 0 0 1 0-3Z"/>"#;
    pub(crate) const PLUG_CONNECTED_SETTINGS_FILLED: &str = r#"<path d="M21.78 3.28a.75.75 0 0 0-1.06-1.06l-2.5 2.5-.9-.9a3.25 3.25 0 0 0-4.6 0L10.44 6.1l7.46 7.46 2.28-2.28a3.25 3.25 0 0 0 0-4.6l-.9-.9 2.5-2.5ZM9.38 7.16l-6.91 6.91a.75.75 0 0 0-.2.36l-1.25 5.63a.75.75 0 0 0 .9.9l5.62-1.26a.75.75 0 0 0 .36-.2l1.07-1.07a7.03 7.03 0 0 1 7.36-8.91L9.38 7.16Zm8.62 5.59c.34 0 .67.03.99.09l.24 1.39c.6.18 1.14.5 1.58.92l1.37-.45c.43.5.75 1.1.94 1.75l-1.1.9a4 4 0 0 1 0 1.82l1.1.9a5.48 5.48 0 0 1-.94 1.75l-1.37-.45c-.44.42-.98.74-1.58.92l-.24 1.39a5.53 5.53 0 0 1-1.98 0l-.24-1.4a4.01 4.01 0 0 1-1.58-.9l-1.37.45a5.48 5.48 0 0 1-.94-1.76l1.1-.89a4 4 0 0 1 0-1.82l-1.1-.9c.19-.65.51-1.24.94-1.75l1.37.45c.44-.42.98-.74 1.58-.92l.24-1.39c.32-.06.65-.09.99-.09Zm0 4.5a1.5 1.5 0 1 0 0 3 1.5 1.5 0 0 0 0-3Z"/>"#;

    pub(crate) const GLOBE_ARROW_FORWARD_REGULAR: &str = r#"<path d="M12 2a10 10 0 0 1 9.95 9.04 6.5 6.5 0 0 0-1.5-.9A8.5 8.5 0 1 0 10.14 20.3c.2.5.45.96.76 1.39A10 10 0 1 1 12 2Zm0 2c1.05 0 2.1.93 2.89 2.68.2.46.39.96.54 1.5a6.53 6.53 0 0 0-1.44.4c-.13-.45-.28-.86-.45-1.24C12.9 5.95 12.4 5.5 12 5.5s-.9.45-1.54 1.84C9.89 8.6 9.5 10.22 9.5 12s.39 3.4.96 4.66c.64 1.39 1.14 1.84 1.54 1.84.1 0 .2-.03.32-.09.13.5.31.98.54 1.43-.28.1-.57.16-.86.16-1.05 0-2.1-.93-2.89-2.68C8.38 15.73 8 13.93 8 12s.38-3.73 1.11-5.32C9.9 4.93 10.95 4 12 4ZM4.5 12c0-.52.05-1.02.15-1.5h2.87A17.6 17.6 0 0 0 7.5 12c0 .51.02 1.01.05 1.5H4.65A7.53 7.53 0 0 1 4.5 12Zm13 0a5.5 5.5 0 1 1 0 11 5.5 5.5 0 0 1 0-11Zm.53 2.97a.75.75 0 1 0-1.06 1.06l.72.72h-2.94a.75.75 0 0 0 0 1.5h2.94l-.72.72a.75.75 0 1 0 1.06 1.06l2-2a.75.75 0 0 0 0-1.06l-2-2Z"/>"#;
    pub(crate) const GLOBE_ARROW_FORWARD_FILLED: &str = r#"<path d="M12 2a10 10 0 0 1 9.54 7h-4.32a13.3 13.3 0 0 0-1.9-4.52A10 10 0 0 0 12 2Zm-3.1 5h6.2C14.44 3.9 13.2 2 12 2c-1.2 0-2.44 1.9-3.1 5ZM2.46 9A10 10 0 0 1 8.68 4.48 13.3 13.3 0 0 0 6.78 9H2.46Zm-.41 2h4.62a22 22 0 0 0 .05 2.55c.2.66.5 1.28.88 1.84.52 1.9 1.3 3.43 2.26 4.33a10.02 10.02 0 0 1-7.81-8.72Zm15.45 1a6.5 6.5 0 1 1 0 13 6.5 6.5 0 0 1 0-13Zm.53 3.22a.75.75 0 1 0-1.06 1.06l.97.97h-3.69a.75.75 0 0 0 0 1.5h3.69l-.97.97a.75.75 0 1 0 1.06 1.06l2.25-2.25a.75.75 0 0 0 0-1.06l-2.25-2.25Z"/>"#;

    pub(crate) const DATABASE_REGULAR: &str = r#"<path d="M12 3c-2.31 0-4.44.36-6.02.97-.78.3-1.46.68-1.95 1.14-.49.46-.78 1.03-.78 1.64v10.5c0 .61.3 1.18.78 1.64.49.46 1.17.84 1.95 1.14 1.58.61 3.7.97 6.02.97 2.31 0 4.44-.36 6.02-.97.78-.3 1.46-.68 1.95-1.14.48-.46.78-1.03.78-1.64V6.75c0-.61-.3-1.18-.78-1.64-.49-.46-1.17-.84-1.95-1.14C16.44 3.36 14.31 3 12 3ZM4.75 6.75c0-.1.05-.28.32-.54.28-.26.73-.54 1.35-.78C7.66 4.95 9.7 4.5 12 4.5c2.3 0 4.34.45 5.58.93.62.24 1.07.52 1.35.78.27.26.32.44.32.54 0 .1-.05.28-.32.54-.28.26-.73.54-1.35.78-1.24.48-3.28.93-5.58.93-2.3 0-4.34-.45-5.58-.93-.62-.24-1.07-.52-1.35-.78-.27-.26-.32-.44-.32-.54Zm14.5 2.54v7.96c0 .1-.05.28-.32.54-.28.26-.73.54-1.35.78-1.24.48-3.28.93-5.58.93-2.3 0-4.34-.45-5.58-.93-.62-.24-1.07-.52-1.35-.78-.27-.26-.32-.44-.32-.54V9.29c.4.24.86.45 1.35.64 1.58.61 3.7.97 6.02.97 2.31 0 4.44-.36 6.02-.97.49-.19.95-.4 1.35-.64Z"/>"#;
    pub(crate) const DATABASE_FILLED: &str = r#"<path d="M20 6.5c0 2-3.58 3.5-8 3.5S4 8.5 4 6.5 7.58 3 12 3s8 1.5 8 3.5Zm-8 5.5c2.68 0 5.26-.47 7.12-1.36.3-.15.6-.31.88-.5v7.36C20 19.5 16.42 21 12 21s-8-1.5-8-3.5v-7.36c.28.19.58.35.88.5C6.74 11.53 9.32 12 12 12Z"/>"#;

    pub(crate) const SETTINGS_COG_MULTIPLE_REGULAR: &str = r#"<path d="M11 2.5c.48 0 .95.04 1.41.12l.3 1.82c.67.18 1.3.45 1.88.8l1.5-1.07c.74.55 1.39 1.2 1.93 1.94l-1.07 1.5c.35.57.62 1.2.8 1.87l1.82.3a8.56 8.56 0 0 1 0 2.83l-1.82.3c-.1.38-.24.75-.41 1.1a6.51 6.51 0 0 0-1.37-.67c.1-.24.18-.5.24-.76l.26-1.1 1.57-.26a7.1 7.1 0 0 0 0-1.64l-1.57-.26-.26-1.1a5.46 5.46 0 0 0-.63-1.47l-.6-.96.93-1.29a7.06 7.06 0 0 0-1.16-1.16l-1.29.92-.96-.59a5.46 5.46 0 0 0-1.47-.63l-1.1-.26-.26-1.57a7.1 7.1 0 0 0-1.64 0l-.26 1.57-1.1.26c-.52.14-1.02.35-1.47.63l-.96.6-1.29-.93a7.06 7.06 0 0 0-1.16 1.16l.92 1.29-.59.96c-.28.45-.49.95-.63 1.47l-.26 1.1-1.57.26a7.1 7.1 0 0 0 0 1.64l1.57.26.26 1.1c.14.52.35 1.02.63 1.47l.6.96-.93 1.29c.35.43.74.82 1.16 1.16l1.29-.92.96.59c.35.22.73.4 1.12.53a6.5 6.5 0 0 0 .25 1.56 8.43 8.43 0 0 1-2.48-.96l-1.5 1.07a8.54 8.54 0 0 1-1.94-1.93l1.07-1.5a6.96 6.96 0 0 1-.8-1.88l-1.82-.3a8.56 8.56 0 0 1 0-2.83l1.82-.3c.18-.67.45-1.3.8-1.87L3.97 6.1a8.54 8.54 0 0 1 1.94-1.94l1.5 1.07a6.96 6.96 0 0 1 1.87-.8l.3-1.82c.47-.08.94-.12 1.42-.12Zm0 4.25a4.25 4.25 0 0 1 2.76 1.02 6.54 6.54 0 0 0-3.62 3.61A4.25 4.25 0 0 0 8.25 13.6a4.25 4.25 0 0 1 2.75-6.85Zm7.5 5.25c.42 0 .83.05 1.22.15l.17 1.04c.38.1.74.26 1.07.46l.86-.61c.62.47 1.15 1.05 1.55 1.72l-.61.86c.2.33.35.69.45 1.07l1.05.17a5.55 5.55 0 0 1 0 2.44l-1.05.17c-.1.38-.25.74-.45 1.07l.61.86a5.53 5.53 0 0 1-1.55 1.71l-.86-.6c-.33.2-.69.35-1.07.45l-.17 1.05a5.55 5.55 0 0 1-2.44 0l-.17-1.05a3.96 3.96 0 0 1-1.07-.45l-.86.6a5.53 5.53 0 0 1-1.71-1.7l.6-.87a3.96 3.96 0 0 1-.45-1.07l-1.04-.17a5.55 5.55 0 0 1 0-2.44l1.04-.17c.1-.38.26-.74.46-1.07l-.61-.86c.4-.67.93-1.25 1.55-1.72l.86.61c.33-.2.69-.35 1.07-.46l.17-1.04c.39-.1.8-.15 1.22-.15Zm0 3.25a2.25 2.25 0 1 0 0 4.5 2.25 2.25 0 0 0 0-4.5Zm0 1.5a.75.75 0 1 1 0 1.5.75.75 0 0 1 0-1.5Z"/>"#;
    pub(crate) const SETTINGS_COG_MULTIPLE_FILLED: &str = r#"<path d="M11 2.5c.48 0 .95.04 1.41.12l.3 1.82c.67.18 1.3.45 1.88.8l1.5-1.07c.74.55 1.39 1.2 1.93 1.94l-1.07 1.5c.35.57.62 1.2.8 1.87l1.82.3c.08.46.13.93.13 1.42 0 .16 0 .32-.02.48a6.51 6.51 0 0 0-7.97 2.33 6.47 6.47 0 0 0-1.06 4.4c-.21.02-.43.03-.65.03a8.5 8.5 0 0 1-1.41-.12l-.3-1.82a6.96 6.96 0 0 1-1.87-.8l-1.5 1.07a8.54 8.54 0 0 1-1.94-1.93l1.07-1.5a6.96 6.96 0 0 1-.8-1.88l-1.82-.3a8.56 8.56 0 0 1 0-2.83l1.82-.3c.18-.67.45-1.3.8-1.87L3.97 6.1a8.54 8.54 0 0 1 1.94-1.94l1.5 1.07a6.96 6.96 0 0 1 1.87-.8l.3-1.82c.47-.08.94-.12 1.42-.12Zm0 5.75a2.75 2.75 0 1 0 0 5.5 2.75 2.75 0 0 0 0-5.5Zm7.5 3.75c.42 0 .83.05 1.22.15l.17 1.04c.38.1.74.26 1.07.46l.86-.61c.62.47 1.15 1.05 1.55 1.72l-.61.86c.2.33.35.69.45 1.07l1.05.17a5.55 5.55 0 0 1 0 2.44l-1.05.17c-.1.38-.25.74-.45 1.07l.61.86a5.53 5.53 0 0 1-1.55 1.71l-.86-.6c-.33.2-.69.35-1.07.45l-.17 1.05a5.55 5.55 0 0 1-2.44 0l-.17-1.05a3.96 3.96 0 0 1-1.07-.45l-.86.6a5.53 5.53 0 0 1-1.71-1.7l.6-.87a3.96 3.96 0 0 1-.45-1.07l-1.04-.17a5.55 5.55 0 0 1 0-2.44l1.04-.17c.1-.38.26-.74.46-1.07l-.61-.86c.4-.67.93-1.25 1.55-1.72l.86.61c.33-.2.69-.35 1.07-.46l.17-1.04c.39-.1.8-.15 1.22-.15Zm0 4.25a1.75 1.75 0 1 0 0 3.5 1.75 1.75 0 0 0 0-3.5Z"/>"#;

    pub(crate) const CODE_CS_RECTANGLE_REGULAR: &str = r#"<path d="M5.25 3A2.25 2.25 0 0 0 3 5.25v13.5A2.25 2.25 0 0 0 5.25 21h13.5A2.25 2.25 0 0 0 21 18.75V5.25A2.25 2.25 0 0 0 18.75 3H5.25ZM4.5 5.25c0-.41.34-.75.75-.75h13.5c.41 0 .75.34.75.75v13.5c0 .41-.34.75-.75.75H5.25a.75.75 0 0 1-.75-.75V5.25Zm8.47 3.12a3.63 3.63 0 1 0 0 7.26c1 0 1.93-.4 2.6-1.07a.75.75 0 1 0-1.06-1.06 2.13 2.13 0 1 1-1.54-3.63c.58 0 1.13.23 1.54.63a.75.75 0 1 0 1.06-1.06 3.62 3.62 0 0 0-2.6-1.07Z"/>"#;
    pub(crate) const CODE_CS_RECTANGLE_FILLED: &str = r#"<path d="M3 5.25A2.25 2.25 0 0 1 5.25 3h13.5A2.25 2.25 0 0 1 21 5.25v13.5A2.25 2.25 0 0 1 18.75 21H5.25A2.25 2.25 0 0 1 3 18.75V5.25Zm9.97 3.12a3.63 3.63 0 1 0 0 7.26c1 0 1.93-.4 2.6-1.07a.75.75 0 1 0-1.06-1.06 2.13 2.13 0 1 1-1.54-3.63c.58 0 1.13.23 1.54.63a.75.75 0 1 0 1.06-1.06 3.62 3.62 0 0 0-2.6-1.07Z"/>"#;

    pub(crate) const CODE_FS_RECTANGLE_REGULAR: &str = r#"<path d="M5.25 3A2.25 2.25 0 0 0 3 5.25v13.5A2.25 2.25 0 0 0 5.25 21h13.5A2.25 2.25 0 0 0 21 18.75V5.25A2.25 2.25 0 0 0 18.75 3H5.25ZM4.5 5.25c0-.41.34-.75.75-.75h13.5c.41 0 .75.34.75.75v13.5c0 .41-.34.75-.75.75H5.25a.75.75 0 0 1-.75-.75V5.25Zm5.75 3.25a.75.75 0 0 0-.75.75v6.5a.75.75 0 0 0 1.5 0v-2.5h2.75a.75.75 0 0 0 0-1.5H11V10h3.25a.75.75 0 0 0 0-1.5h-4Z"/>"#;
    pub(crate) const CODE_FS_RECTANGLE_FILLED: &str = r#"<path d="M3 5.25A2.25 2.25 0 0 1 5.25 3h13.5A2.25 2.25 0 0 1 21 5.25v13.5A2.25 2.25 0 0 1 18.75 21H5.25A2.25 2.25 0 0 1 3 18.75V5.25Zm7.25 3.25a.75.75 0 0 0-.75.75v6.5a.75.75 0 0 0 1.5 0v-2.5h2.75a.75.75 0 0 0 0-1.5H11V10h3.25a.75.75 0 0 0 0-1.5h-4Z"/>"#;

    pub(crate) const CODE_VB_RECTANGLE_REGULAR: &str = r#"<path d="M5.25 3A2.25 2.25 0 0 0 3 5.25v13.5A2.25 2.25 0 0 0 5.25 21h13.5A2.25 2.25 0 0 0 21 18.75V5.25A2.25 2.25 0 0 0 18.75 3H5.25ZM4.5 5.25c0-.41.34-.75.75-.75h13.5c.41 0 .75.34.75.75v13.5c0 .41-.34.75-.75.75H5.25a.75.75 0 0 1-.75-.75V5.25Zm4.7 3.3a.75.75 0 0 0-1.4.55l2.5 6.5a.75.75 0 0 0 1.4 0l2.5-6.5a.75.75 0 0 0-1.4-.54L11 13.66 9.2 8.55Z"/>"#;
    pub(crate) const CODE_VB_RECTANGLE_FILLED: &str = r#"<path d="M3 5.25A2.25 2.25 0 0 1 5.25 3h13.5A2.25 2.25 0 0 1 21 5.25v13.5A2.25 2.25 0 0 1 18.75 21H5.25A2.25 2.25 0 0 1 3 18.75V5.25Zm6.2 3.3a.75.75 0 0 0-1.4.55l2.5 6.5a.75.75 0 0 0 1.4 0l2.5-6.5a.75.75 0 0 0-1.4-.54L11 13.66 9.2 8.55Z"/>"#;

    pub(crate) const CODE_CIRCLE_REGULAR: &str = r#"<path d="M12 2a10 10 0 1 1 0 20 10 10 0 0 1 0-20Zm0 1.5a8.5 8.5 0 1 0 0 17 8.5 8.5 0 0 0 0-17Zm-1.97 4.72a.75.75 0 0 1 0 1.06L7.31 12l2.72 2.72a.75.75 0 1 1-1.06 1.06l-3.25-3.25a.75.75 0 0 1 0-1.06l3.25-3.25a.75.75 0 0 1 1.06 0Zm3.94 0a.75.75 0 0 1 1.06 0l3.25 3.25c.3.3.3.77 0 1.06l-3.25 3.25a.75.75 0 1 1-1.06-1.06L16.69 12l-2.72-2.72a.75.75 0 0 1 0-1.06Z"/>"#;
    pub(crate) const CODE_CIRCLE_FILLED: &str = r#"<path d="M12 2a10 10 0 1 1 0 20 10 10 0 0 1 0-20ZM10.03 8.22a.75.75 0 0 0-1.06 0l-3.25 3.25a.75.75 0 0 0 0 1.06l3.25 3.25a.75.75 0 0 0 1.06-1.06L7.31 12l2.72-2.72a.75.75 0 0 0 0-1.06Zm3.94 0a.75.75 0 0 0 0 1.06L16.69 12l-2.72 2.72a.75.75 0 1 0 1.06 1.06l3.25-3.25c.3-.3.3-.77 0-1.06l-3.25-3.25a.75.75 0 0 0-1.06 0Z"/>"#;

    pub(crate) const HEART_REGULAR: &str = r#"<path d="M12 5.5c1.55-2.07 4.1-3 6.44-2.1C20.94 4.35 22.5 6.8 22.5 9.44c0 2.05-.9 3.79-2.17 5.32-1.26 1.53-2.97 2.95-4.7 4.38l-2.2 1.83a2.25 2.25 0 0 1-2.87 0l-2.2-1.83c-1.72-1.43-3.43-2.85-4.69-4.38C2.4 13.23 1.5 11.5 1.5 9.44c0-2.65 1.56-5.1 4.06-6.05C7.9 2.5 10.45 3.43 12 5.5Zm-.62 1.9c-1.44-2.32-3.6-2.97-5.28-2.33C4.35 5.73 3 7.42 3 9.44c0 1.55.67 2.96 1.82 4.36 1.16 1.4 2.76 2.74 4.5 4.19l2.2 1.82c.28.23.68.23.96 0l2.2-1.82c1.74-1.45 3.34-2.78 4.5-4.2C20.33 12.4 21 11 21 9.45c0-2.02-1.35-3.7-3.1-4.38-1.68-.64-3.84.01-5.28 2.34l-.62 1-.62-1Z"/>"#;
    pub(crate) const HEART_FILLED: &str = r#"<path d="M12 5.5c1.55-2.07 4.1-3 6.44-2.1C20.94 4.35 22.5 6.8 22.5 9.44c0 2.05-.9 3.79-2.17 5.32-1.26 1.53-2.97 2.95-4.7 4.38l-2.2 1.83a2.25 2.25 0 0 1-2.87 0l-2.2-1.83c-1.72-1.43-3.43-2.85-4.69-4.38C2.4 13.23 1.5 11.5 1.5 9.44c0-2.65 1.56-5.1 4.06-6.05C7.9 2.5 10.45 3.43 12 5.5Z"/>"#;

    pub(crate) const HEART_BROKEN_REGULAR: &str = r#"<path d="M12 5.5c1.55-2.07 4.1-3 6.44-2.1C20.94 4.35 22.5 6.8 22.5 9.44c0 2.05-.9 3.79-2.17 5.32-1.26 1.53-2.97 2.95-4.7 4.38l-2.2 1.83a2.25 2.25 0 0 1-2.87 0l-2.2-1.83c-1.72-1.43-3.43-2.85-4.69-4.38C2.4 13.23 1.5 11.5 1.5 9.44c0-2.65 1.56-5.1 4.06-6.05C7.9 2.5 10.45 3.43 12 5.5Zm-.62 1.9c-1.44-2.32-3.6-2.97-5.28-2.33C4.35 5.73 3 7.42 3 9.44c0 1.55.67 2.96 1.82 4.36 1.16 1.4 2.76 2.74 4.5 4.19l2.2 1.82c.28.23.68.23.96 0l2.2-1.82c1.74-1.45 3.34-2.78 4.5-4.2C20.33 12.4 21 11 21 9.45c0-2.02-1.35-3.7-3.1-4.38-1.68-.64-3.84.01-5.28 2.34l-.62 1-.62-1Zm1.64.26a.5.5 0 0 1 .7.72l-2.51 2.46 2.4 1.53a.5.5 0 0 1 .15.68l-2.1 3.5a.5.5 0 1 1-.85-.51l1.86-3.1-2.48-1.58a.5.5 0 0 1-.08-.79l2.91-2.91Z"/>"#;
    pub(crate) const HEART_BROKEN_FILLED: &str = r#"<path d="M12 5.5c1.55-2.07 4.1-3 6.44-2.1C20.94 4.35 22.5 6.8 22.5 9.44c0 2.05-.9 3.79-2.17 5.32-1.26 1.53-2.97 2.95-4.7 4.38l-2.2 1.83a2.25 2.25 0 0 1-2.87 0l-2.2-1.83c-1.72-1.43-3.43-2.85-4.69-4.38C2.4 13.23 1.5 11.5 1.5 9.44c0-2.65 1.56-5.1 4.06-6.05C7.9 2.5 10.45 3.43 12 5.5Zm1.02 1.08a.75.75 0 0 0-1.05.05L10.1 9.5a.75.75 0 0 0 .08 1.22l2.53 1.62-1.9 3.16a.75.75 0 1 0 1.28.78l2.3-3.82a.75.75 0 0 0-.23-1.02l-2.45-1.57 2.3-2.24a.75.75 0 0 0-.99-1.05Z"/>"#;

    pub(crate) const CIRCLE_HINT_REGULAR: &str = r#"<path d="M9.55 2.8a.75.75 0 0 1 .55-.9 9.97 9.97 0 0 1 3.8 0 .75.75 0 1 1-.35 1.46 8.47 8.47 0 0 0-3.1 0 .75.75 0 0 1-.9-.56ZM7.43 4.74a.75.75 0 0 1-.17 1.05c-.85.6-1.6 1.34-2.19 2.2a.75.75 0 1 1-1.23-.86c.7-1 1.57-1.87 2.55-2.56a.75.75 0 0 1 1.04.17Zm9.14 0a.75.75 0 0 1 1.04-.17c.98.7 1.86 1.56 2.55 2.56a.75.75 0 1 1-1.23.86 8.52 8.52 0 0 0-2.19-2.2.75.75 0 0 1-.17-1.05ZM2.8 9.55a.75.75 0 0 1 .56.9 8.47 8.47 0 0 0 0 3.1.75.75 0 1 1-1.47.35 9.97 9.97 0 0 1 0-3.8.75.75 0 0 1 .9-.55Zm18.4 0a.75.75 0 0 1 .9.55 9.97 9.97 0 0 1 0 3.8.75.75 0 1 1-1.47-.34 8.47 8.47 0 0 0 0-3.1.75.75 0 0 1 .56-.91ZM4.74 16.57a.75.75 0 0 1 1.05.17c.6.85 1.34 1.6 2.2 2.19a.75.75 0 1 1-.86 1.23c-1-.7-1.87-1.57-2.56-2.55a.75.75 0 0 1 .17-1.04Zm14.52 0a.75.75 0 0 1 .17 1.04c-.7.98-1.56 1.86-2.55 2.55a.75.75 0 1 1-.86-1.23c.85-.6 1.6-1.34 2.2-2.19a.75.75 0 0 1 1.04-.17ZM9.55 21.2a.75.75 0 0 1 .9-.56 8.47 8.47 0 0 0 3.1 0 .75.75 0 1 1 .35 1.47 9.97 9.97 0 0 1-3.8 0 .75.75 0 0 1-.55-.9Z"/>"#;
    pub(crate) const CIRCLE_HINT_FILLED: &str = r#"<path d="M9.35 2.36a1 1 0 0 1 .73 1.86 8.03 8.03 0 0 0-1.55.83 1 1 0 0 1-1.12-1.65 10.03 10.03 0 0 1 1.94-1.04Zm5.3 0c.68.28 1.33.63 1.94 1.04a1 1 0 0 1-1.12 1.65 8.03 8.03 0 0 0-1.55-.83 1 1 0 0 1 .73-1.86ZM3.4 6.53a1 1 0 0 1 .27 1.39 8.03 8.03 0 0 0-.83 1.55 1 1 0 0 1-1.86-.73c.28-.68.63-1.33 1.04-1.94a1 1 0 0 1 1.39-.27Zm17.2 0a1 1 0 0 1 1.38.27c.41.6.76 1.26 1.04 1.94a1 1 0 0 1-1.86.73 8.03 8.03 0 0 0-.83-1.55 1 1 0 0 1 .27-1.39ZM2.1 12.9a1 1 0 0 1 1.07.93c.1.55.27 1.11.5 1.68a1 1 0 1 1-1.85.75 10.03 10.03 0 0 1-.64-2.29 1 1 0 0 1 .93-1.07Zm19.8 0a1 1 0 0 1 .93 1.07c-.13.8-.35 1.57-.64 2.3a1 1 0 1 1-1.86-.76c.23-.57.4-1.13.5-1.68a1 1 0 0 1 1.07-.93ZM5.45 18.7a1 1 0 0 1 1.41-.07c.44.4.92.74 1.44 1.04a1 1 0 1 1-.99 1.74 10.04 10.04 0 0 1-1.8-1.3 1 1 0 0 1-.06-1.41Zm13.1 0a1 1 0 0 1-.06 1.41c-.55.5-1.16.93-1.8 1.3a1 1 0 1 1-1-1.74c.53-.3 1.01-.65 1.45-1.04a1 1 0 0 1 1.41.06ZM11 21.04a1 1 0 0 1 2 0v.01a1 1 0 0 1-2 0v-.01Z"/>"#;
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXED_NAMES: &[&str] = &[
        IconLibrary::APPS,
        IconLibrary::BOX,
        IconLibrary::KEY,
        IconLibrary::PLUG_CONNECTED_SETTINGS,
        IconLibrary::GLOBE_ARROW_FORWARD,
        IconLibrary::DATABASE,
        IconLibrary::SETTINGS_COG_MULTIPLE,
        IconLibrary::CODE_CS_RECTANGLE,
        IconLibrary::CODE_FS_RECTANGLE,
        IconLibrary::CODE_VB_RECTANGLE,
        IconLibrary::CODE_CIRCLE,
        IconLibrary::HEART,
        IconLibrary::HEART_BROKEN,
        IconLibrary::CIRCLE_HINT,
    ];

    #[test]
    fn test_builtin_covers_fixed_names_in_both_variants() {
        let library = IconLibrary::builtin();
        for name in FIXED_NAMES {
            assert!(
                library.contains(name, IconVariant::Regular),
                "missing {name} (Regular)"
            );
            assert!(
                library.contains(name, IconVariant::Filled),
                "missing {name} (Filled)"
            );
        }
        assert_eq!(library.len(), FIXED_NAMES.len());
    }

    #[test]
    fn test_builtin_content_has_path_data() {
        let library = IconLibrary::builtin();
        for name in FIXED_NAMES {
            for variant in [IconVariant::Regular, IconVariant::Filled] {
                let handle = library
                    .resolve(name, IconSize::Size16, variant)
                    .unwrap_or_else(|| panic!("missing {name} ({variant:?})"));
                let data = handle
                    .path_data()
                    .unwrap_or_else(|e| panic!("{name} ({variant:?}): {e}"));
                assert!(!data.is_empty());
            }
        }
    }

    #[test]
    fn test_resolve_stamps_size_and_variant() {
        let library = IconLibrary::builtin();
        let handle = library
            .resolve(IconLibrary::BOX, IconSize::Size32, IconVariant::Regular)
            .unwrap();
        assert_eq!(handle.name(), "Box");
        assert_eq!(handle.size(), IconSize::Size32);
        assert_eq!(handle.variant(), IconVariant::Regular);
        assert!(handle.content().starts_with("<path"));
    }

    #[test]
    fn test_resolve_unknown_name() {
        let library = IconLibrary::builtin();
        assert!(
            library
                .resolve("NotAnIcon", IconSize::Size16, IconVariant::Filled)
                .is_none()
        );
    }

    #[test]
    fn test_variants_do_not_substitute() {
        let library =
            IconLibrary::new().with_icon("OneSided", IconVariant::Filled, r#"<path d="M0 0"/>"#);
        assert!(library.contains("OneSided", IconVariant::Filled));
        assert!(!library.contains("OneSided", IconVariant::Regular));
        assert!(
            library
                .resolve("OneSided", IconSize::Size16, IconVariant::Regular)
                .is_none()
        );
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let library = IconLibrary::builtin();
        assert!(library.contains("Heart", IconVariant::Filled));
        assert!(!library.contains("heart", IconVariant::Filled));
    }

    #[test]
    fn test_register_replaces_content() {
        let mut library = IconLibrary::builtin();
        library.register(IconLibrary::HEART, IconVariant::Filled, r#"<path d="M9 9"/>"#);
        let handle = library
            .resolve(IconLibrary::HEART, IconSize::Size16, IconVariant::Filled)
            .unwrap();
        assert_eq!(handle.path_data().unwrap(), "M9 9");
    }

    #[test]
    fn test_path_data_missing_d_is_an_error() {
        let handle = IconHandle::new(
            "Broken",
            IconSize::Size16,
            IconVariant::Filled,
            r#"<path fill="red"/>"#,
        );
        assert!(matches!(
            handle.path_data(),
            Err(Error::MissingPathData { name }) if name == "Broken"
        ));
    }

    #[test]
    fn test_names_are_sorted() {
        let library = IconLibrary::new()
            .with_icon("Zeta", IconVariant::Filled, r#"<path d="M0 0"/>"#)
            .with_icon("Alpha", IconVariant::Filled, r#"<path d="M1 1"/>"#);
        assert_eq!(library.names(), vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn test_default_is_builtin() {
        let library = IconLibrary::default();
        assert!(!library.is_empty());
        assert!(library.contains(IconLibrary::APPS, IconVariant::Filled));
    }
}
