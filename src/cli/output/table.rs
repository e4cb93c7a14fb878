//! Table output formatting for CLI commands
//!
//! Renders the site configuration with comfy-table: metadata, navigation,
//! external links and the code icon table.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};

use crate::domain::models::{AppConfig, CodeIconMap, ExternalLink, NavGroup};

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: console::colors_enabled(),
            max_width: None,
        }
    }

    /// Create a new table formatter with custom settings
    pub const fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Key/value overview of metadata, theme and feature flags
    pub fn format_overview(&self, config: &AppConfig) -> String {
        let mut table = self.create_base_table();
        table.set_header(vec![self.header("Setting"), self.header("Value")]);

        let rows: Vec<(&str, String)> = vec![
            ("site.title", config.site.title.clone()),
            ("site.ogTitle", config.site.og_title().to_string()),
            ("site.description", truncate_text(&config.site.description, 60)),
            ("site.ogImage", config.site.og_image.clone()),
            ("site.twitterCard", config.site.twitter_card.clone()),
            ("theme.color", config.theme.color.to_string()),
            ("theme.radius", format!("{:.2}", config.theme.radius)),
            ("theme.customizable", flag(config.theme.customizable)),
            ("header.title", config.header.title.clone()),
            ("header.showTitle", flag(config.header.show_title)),
            ("header.darkModeToggle", flag(config.header.dark_mode_toggle)),
            ("aside.useLevel", flag(config.aside.use_level)),
            ("aside.collapse", flag(config.aside.collapse)),
            ("main.breadCrumb", flag(config.main.bread_crumb)),
            ("main.showTitle", flag(config.main.show_title)),
            ("main.codeCopyToast", flag(config.main.code_copy_toast)),
            ("footer.credits", config.footer.credits.clone()),
            ("toc.enable", flag(config.toc.enable)),
            ("toc.title", config.toc.title.clone()),
            ("search.enable", flag(config.search.enable)),
            ("search.inAside", flag(config.search.in_aside)),
        ];

        for (key, value) in rows {
            let key_cell = if self.use_colors {
                Cell::new(key).fg(Color::Cyan)
            } else {
                Cell::new(key)
            };
            table.add_row(vec![key_cell, Cell::new(value)]);
        }

        table.to_string()
    }

    /// Header navigation groups, one row per link
    pub fn format_nav(&self, groups: &[NavGroup]) -> String {
        let mut table = self.create_base_table();
        table.set_header(vec![
            self.header("Group"),
            self.header("Title"),
            self.header("To"),
            self.header("Target"),
            self.header("Description"),
        ]);

        for group in groups {
            for link in &group.links {
                table.add_row(vec![
                    Cell::new(&group.title),
                    Cell::new(&link.title),
                    Cell::new(&link.to),
                    Cell::new(link.target.map_or("-", |t| t.as_str())),
                    Cell::new(truncate_text(&link.description, 40)),
                ]);
            }
        }

        table.to_string()
    }

    /// External links of one section (header, footer or toc)
    pub fn format_links(&self, section: &str, links: &[ExternalLink]) -> String {
        let mut table = self.create_base_table();
        table.set_header(vec![
            self.header("Section"),
            self.header("Label"),
            self.header("Icon"),
            self.header("To"),
            self.header("Target"),
        ]);

        for link in links {
            table.add_row(vec![
                Cell::new(section),
                Cell::new(link.label()),
                Cell::new(link.icon.as_deref().unwrap_or("-")),
                Cell::new(&link.to),
                Cell::new(link.target.map_or("-", |t| t.as_str())),
            ]);
        }

        table.to_string()
    }

    /// File name / extension to icon table
    pub fn format_code_icons(&self, icons: &CodeIconMap) -> String {
        let mut table = self.create_base_table();
        table.set_header(vec![self.header("File"), self.header("Icon")]);

        for (name, icon) in icons.iter() {
            table.add_row(vec![Cell::new(name), Cell::new(icon)]);
        }

        table.to_string()
    }

    fn header(&self, title: &str) -> Cell {
        let cell = Cell::new(title).add_attribute(Attribute::Bold);
        if self.use_colors {
            cell.fg(Color::White)
        } else {
            cell
        }
    }

    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        // Use UTF-8 preset for nice borders
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn flag(value: bool) -> String {
    let text = if value { "yes" } else { "no" };
    text.to_string()
}

/// Truncate on a character boundary, appending "..." if truncated
fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
