use serde::{Deserialize, Serialize};
use std::fmt;

use super::code_icon::CodeIconMap;
use super::link::{ExternalLink, NavGroup};

/// Root site configuration handed to the rendering layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct AppConfig {
    pub site: SiteMeta,
    pub theme: Theme,
    pub header: HeaderConfig,
    pub aside: AsideConfig,
    pub main: MainConfig,
    pub footer: FooterConfig,
    pub toc: TocConfig,
    pub search: SearchConfig,
}

/// Page metadata used for `<title>`, description and social cards
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct SiteMeta {
    pub title: String,
    pub og_title: String,
    pub description: String,
    pub og_description: String,
    pub og_image: String,
    pub twitter_card: String,
}

impl SiteMeta {
    /// OpenGraph title, falling back to the page title when unset.
    pub fn og_title(&self) -> &str {
        if self.og_title.is_empty() {
            &self.title
        } else {
            &self.og_title
        }
    }

    /// OpenGraph description, falling back to the page description when unset.
    pub fn og_description(&self) -> &str {
        if self.og_description.is_empty() {
            &self.description
        } else {
            &self.og_description
        }
    }
}

/// Named accent colors supported by the theme engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    #[default]
    Zinc,
    Slate,
    Stone,
    Gray,
    Neutral,
    Red,
    Rose,
    Orange,
    Green,
    Blue,
    Yellow,
    Violet,
}

impl ThemeColor {
    /// Every palette color, in the order the theme picker lists them.
    pub const ALL: [Self; 12] = [
        Self::Zinc,
        Self::Slate,
        Self::Stone,
        Self::Gray,
        Self::Neutral,
        Self::Red,
        Self::Rose,
        Self::Orange,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Violet,
    ];

    /// Lowercase name used in YAML and CSS class names.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zinc => "zinc",
            Self::Slate => "slate",
            Self::Stone => "stone",
            Self::Gray => "gray",
            Self::Neutral => "neutral",
            Self::Red => "red",
            Self::Rose => "rose",
            Self::Orange => "orange",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Violet => "violet",
        }
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme picker settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Theme {
    /// Whether readers may change color and radius at runtime
    pub customizable: bool,
    /// Accent color
    pub color: ThemeColor,
    /// Corner radius on a 0.0 - 1.0 scale
    pub radius: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            customizable: true,
            color: ThemeColor::default(),
            radius: 0.5,
        }
    }
}

/// Light/dark logo pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Logo {
    pub light: String,
    pub dark: String,
}

impl Default for Logo {
    fn default() -> Self {
        Self {
            light: "/logo.svg".to_string(),
            dark: "/logo-dark.svg".to_string(),
        }
    }
}

/// Top bar: title, logo, navigation menu and icon links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct HeaderConfig {
    pub title: String,
    pub show_title: bool,
    pub logo: Logo,
    pub dark_mode_toggle: bool,
    /// Navigation menu groups
    pub nav: Vec<NavGroup>,
    /// Icon buttons on the right of the bar
    pub links: Vec<ExternalLink>,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            show_title: true,
            logo: Logo::default(),
            dark_mode_toggle: true,
            nav: Vec::new(),
            links: Vec::new(),
        }
    }
}

/// Sidebar behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct AsideConfig {
    pub use_level: bool,
    pub collapse: bool,
}

impl Default for AsideConfig {
    fn default() -> Self {
        Self {
            use_level: true,
            collapse: false,
        }
    }
}

/// Main content area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct MainConfig {
    pub bread_crumb: bool,
    pub show_title: bool,
    pub code_copy_toast: bool,
    /// Icons shown in code block headers, keyed by file name or extension
    pub code_icon: CodeIconMap,
}

impl Default for MainConfig {
    fn default() -> Self {
        Self {
            bread_crumb: true,
            show_title: true,
            code_copy_toast: true,
            code_icon: CodeIconMap::default(),
        }
    }
}

/// Footer credits line and links
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct FooterConfig {
    pub credits: String,
    pub links: Vec<ExternalLink>,
}

/// Table-of-contents sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct TocConfig {
    pub enable: bool,
    pub title: String,
    pub links: Vec<ExternalLink>,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            enable: true,
            title: "On This Page".to_string(),
            links: Vec::new(),
        }
    }
}

/// Search box placement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct SearchConfig {
    pub enable: bool,
    pub in_aside: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enable: true,
            in_aside: false,
        }
    }
}
