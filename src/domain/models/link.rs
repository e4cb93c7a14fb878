use serde::{Deserialize, Serialize};
use std::fmt;

/// Browsing context a link opens in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkTarget {
    /// Same tab (`_self`)
    #[serde(rename = "_self")]
    SelfTarget,
    /// New tab (`_blank`)
    #[serde(rename = "_blank")]
    Blank,
}

impl LinkTarget {
    /// HTML `target` attribute value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SelfTarget => "_self",
            Self::Blank => "_blank",
        }
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entry in a header navigation group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct NavLink {
    pub title: String,

    /// Destination path or URL
    pub to: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<LinkTarget>,
}

/// Titled group of navigation links shown in the header menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct NavGroup {
    pub title: String,

    #[serde(default)]
    pub links: Vec<NavLink>,
}

/// Icon and/or title pointing at an external destination.
///
/// Used by the header, footer and table of contents. Header links are
/// icon-only, footer links may be titled, TOC links carry both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ExternalLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub to: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<LinkTarget>,
}

impl ExternalLink {
    /// Icon-only link opening in a new tab.
    pub fn icon(icon: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            icon: Some(icon.into()),
            title: None,
            to: to.into(),
            target: Some(LinkTarget::Blank),
        }
    }

    /// Title-only link opening in a new tab.
    pub fn titled(title: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            icon: None,
            title: Some(title.into()),
            to: to.into(),
            target: Some(LinkTarget::Blank),
        }
    }

    /// Replace the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replace the target.
    #[must_use]
    pub fn with_target(mut self, target: Option<LinkTarget>) -> Self {
        self.target = target;
        self
    }

    /// Text shown for the link: its title, else its icon id, else the URL.
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .or(self.icon.as_deref())
            .unwrap_or(&self.to)
    }
}
