//! Construction-time validation for [`AppConfig`].
//!
//! Rules run in document order and stop at the first violation, so the
//! reported field is always the earliest offending one.

use url::Url;

use super::errors::{ConfigError, ConfigResult};
use super::models::{AppConfig, ExternalLink};

/// Base used to check that root-relative paths form a valid URL.
const PATH_BASE: &str = "http://localhost/";

/// Validate a fully merged configuration.
pub fn validate(config: &AppConfig) -> ConfigResult<()> {
    let site = &config.site;
    require_text("site.title", &site.title)?;
    require_text("site.description", &site.description)?;
    check_url("site.ogImage", &site.og_image)?;
    check_url("site.twitterCard", &site.twitter_card)?;

    let radius = config.theme.radius;
    if !(0.0..=1.0).contains(&radius) {
        return Err(ConfigError::invalid(
            "theme.radius",
            format!("{radius} out of range [0,1]"),
        ));
    }

    let header = &config.header;
    check_url("header.logo.light", &header.logo.light)?;
    check_url("header.logo.dark", &header.logo.dark)?;
    for (g, group) in header.nav.iter().enumerate() {
        require_text(&format!("header.nav[{g}].title"), &group.title)?;
        for (l, link) in group.links.iter().enumerate() {
            let prefix = format!("header.nav[{g}].links[{l}]");
            require_text(&format!("{prefix}.title"), &link.title)?;
            check_url(&format!("{prefix}.to"), &link.to)?;
        }
    }
    check_links("header.links", &header.links, LinkRequirement::Icon)?;

    for (key, icon) in config.main.code_icon.iter() {
        if key.is_empty() {
            return Err(ConfigError::invalid(
                "main.codeIcon",
                "file name or extension must not be empty",
            ));
        }
        require_text(&format!("main.codeIcon.{key}"), icon)?;
    }

    require_text("footer.credits", &config.footer.credits)?;
    check_links("footer.links", &config.footer.links, LinkRequirement::IconOrTitle)?;

    if config.toc.enable {
        require_text("toc.title", &config.toc.title)?;
    }
    check_links("toc.links", &config.toc.links, LinkRequirement::IconAndTitle)?;

    Ok(())
}

fn require_text(field: &str, value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::invalid(field, "must not be empty"));
    }
    Ok(())
}

/// Which of an external link's optional parts a section insists on.
#[derive(Debug, Clone, Copy)]
enum LinkRequirement {
    /// Header links are icon buttons.
    Icon,
    /// TOC links show an icon next to their title.
    IconAndTitle,
    /// Footer links show either.
    IconOrTitle,
}

fn check_links(
    field: &str,
    links: &[ExternalLink],
    requirement: LinkRequirement,
) -> ConfigResult<()> {
    for (i, link) in links.iter().enumerate() {
        let prefix = format!("{field}[{i}]");
        if let Some(icon) = &link.icon {
            require_text(&format!("{prefix}.icon"), icon)?;
        }
        if let Some(title) = &link.title {
            require_text(&format!("{prefix}.title"), title)?;
        }

        match requirement {
            LinkRequirement::Icon | LinkRequirement::IconAndTitle if link.icon.is_none() => {
                return Err(ConfigError::invalid(format!("{prefix}.icon"), "icon is required"));
            }
            LinkRequirement::IconAndTitle if link.title.is_none() => {
                return Err(ConfigError::invalid(format!("{prefix}.title"), "title is required"));
            }
            LinkRequirement::IconOrTitle if link.icon.is_none() && link.title.is_none() => {
                return Err(ConfigError::invalid(prefix, "link needs an icon or a title"));
            }
            _ => {}
        }
        check_url(&format!("{prefix}.to"), &link.to)?;
    }
    Ok(())
}

/// Accept absolute URLs with a host and root-relative paths.
fn check_url(field: &str, value: &str) -> ConfigResult<()> {
    if value.is_empty() {
        return Err(ConfigError::invalid(field, "must not be empty"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::invalid(
            field,
            format!("'{value}' contains whitespace"),
        ));
    }

    if value.starts_with('/') && !value.starts_with("//") {
        let base = Url::parse(PATH_BASE).map_err(|e| ConfigError::invalid(field, e.to_string()))?;
        return base
            .join(value)
            .map(|_| ())
            .map_err(|e| ConfigError::invalid(field, format!("'{value}' is not a valid path: {e}")));
    }

    match Url::parse(value) {
        Ok(url) if url.has_host() => Ok(()),
        Ok(_) => Err(ConfigError::invalid(
            field,
            format!("'{value}' has no host"),
        )),
        Err(e) => Err(ConfigError::invalid(
            field,
            format!("'{value}' is not a URL or root-relative path: {e}"),
        )),
    }
}
