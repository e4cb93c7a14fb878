use figment::providers::{Format, Serialized, Yaml};
use figment::Figment;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::models::AppConfig;
use crate::services::ConfigProvider;

/// Top-level section holding the site configuration in every YAML layer.
pub const CONFIG_SECTION: &str = "jsly";

/// Project directory holding the YAML layers.
pub const CONFIG_DIR: &str = ".jsly";

#[derive(Serialize)]
struct ConfigDocument<'a> {
    jsly: &'a AppConfig,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the site configuration for a project directory.
    ///
    /// Precedence (lowest to highest):
    /// 1. Built-in JSLy configuration (Serialized)
    /// 2. `<root>/.jsly/config.yaml` (project config, created by init)
    /// 3. `<root>/.jsly/local.yaml` (local overrides, optional)
    ///
    /// Missing files are skipped. Maps merge key by key, so a `codeIcon`
    /// entry in a later layer replaces the same key from an earlier one;
    /// sequences such as `header.nav` are replaced wholesale.
    pub fn load_from_dir(root: impl AsRef<Path>) -> ConfigResult<ConfigProvider> {
        let dir = absolute(root.as_ref())?.join(CONFIG_DIR);
        let figment = Figment::new()
            .merge(Serialized::default(CONFIG_SECTION, AppConfig::jsly()))
            .merge(Yaml::file(dir.join("config.yaml")))
            .merge(Yaml::file(dir.join("local.yaml")));

        debug!(dir = %dir.display(), "loading layered site configuration");
        Self::extract(&figment)
    }

    /// Load configuration from a specific file on top of framework defaults.
    ///
    /// Unlike [`ConfigLoader::load_from_dir`], the file must exist and must
    /// supply every required field itself.
    pub fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<ConfigProvider> {
        let path = absolute(path.as_ref())?;
        if !path.is_file() {
            return Err(ConfigError::invalid(
                path.display().to_string(),
                "configuration file not found",
            ));
        }

        let figment = Figment::new()
            .merge(Serialized::default(CONFIG_SECTION, AppConfig::default()))
            .merge(Yaml::file(&path));

        debug!(path = %path.display(), "loading site configuration file");
        Self::extract(&figment)
    }

    /// Load configuration from an in-memory YAML document.
    pub fn load_from_str(yaml: &str) -> ConfigResult<ConfigProvider> {
        let figment = Figment::new()
            .merge(Serialized::default(CONFIG_SECTION, AppConfig::default()))
            .merge(Yaml::string(yaml));

        Self::extract(&figment)
    }

    /// Paths of the layer files consulted for `root`, lowest precedence first.
    pub fn layer_paths(root: impl AsRef<Path>) -> ConfigResult<[PathBuf; 2]> {
        let dir = absolute(root.as_ref())?.join(CONFIG_DIR);
        Ok([dir.join("config.yaml"), dir.join("local.yaml")])
    }

    /// Render `config` as a YAML layer file, wrapped in its `jsly` section.
    pub fn render_yaml(config: &AppConfig) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&ConfigDocument { jsly: config })
    }

    fn extract(figment: &Figment) -> ConfigResult<ConfigProvider> {
        let config: AppConfig = figment.extract_inner(CONFIG_SECTION)?;
        ConfigProvider::new(config)
    }
}

fn absolute(path: &Path) -> ConfigResult<PathBuf> {
    std::path::absolute(path)
        .map_err(|e| ConfigError::invalid(path.display().to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{LinkTarget, ThemeColor};
    use std::fs;
    use tempfile::TempDir;

    fn write_layer(root: &Path, name: &str, contents: &str) {
        let dir = root.join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_empty_dir_yields_builtin() {
        let root = TempDir::new().unwrap();
        let provider = ConfigLoader::load_from_dir(root.path()).unwrap();
        assert_eq!(provider.get_config(), &AppConfig::jsly());
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
jsly:
  site:
    title: Rust Docs
    description: Everything about ownership.
    ogImage: https://example.com/og.png
    twitterCard: https://example.com/card.png
  theme:
    color: blue
    radius: 0.25
  header:
    links:
      - icon: lucide:github
        to: https://github.com/example
        target: _blank
  footer:
    credits: Copyright 2026
";
        let provider = ConfigLoader::load_from_str(yaml).expect("YAML should load");
        let config = provider.get_config();

        assert_eq!(config.site.title, "Rust Docs");
        assert_eq!(config.theme.color, ThemeColor::Blue);
        assert!((config.theme.radius - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.header.links[0].target, Some(LinkTarget::Blank));
        assert!(config.main.code_icon.is_empty());
        assert!(config.search.enable, "absent flags use framework defaults");
    }

    #[test]
    fn test_hierarchical_merging() {
        let root = TempDir::new().unwrap();
        write_layer(
            root.path(),
            "config.yaml",
            "jsly:\n  theme:\n    color: violet\n    radius: 0.75\n  main:\n    codeIcon:\n      ts: icon-a\n      rs: vscode-icons:file-type-rust\n",
        );
        write_layer(
            root.path(),
            "local.yaml",
            "jsly:\n  theme:\n    radius: 0.1\n  main:\n    codeIcon:\n      ts: icon-b\n",
        );

        let provider = ConfigLoader::load_from_dir(root.path()).unwrap();
        let config = provider.get_config();

        assert!((config.theme.radius - 0.1).abs() < f64::EPSILON, "local layer should win");
        assert_eq!(config.theme.color, ThemeColor::Violet, "project layer persists");
        assert_eq!(provider.code_icon("ts"), Some("icon-b"));
        assert_eq!(provider.code_icon("rs"), Some("vscode-icons:file-type-rust"));
        assert_eq!(
            provider.code_icon("package.json"),
            Some("vscode-icons:file-type-node"),
            "built-in entries survive map merges"
        );
        assert_eq!(config.site.title, AppConfig::jsly().site.title);
    }

    #[test]
    fn test_sequences_replace() {
        let root = TempDir::new().unwrap();
        write_layer(
            root.path(),
            "config.yaml",
            "jsly:\n  header:\n    links:\n      - icon: lucide:mastodon\n        to: https://hachyderm.io/@jsly\n",
        );

        let provider = ConfigLoader::load_from_dir(root.path()).unwrap();
        let links = &provider.get_config().header.links;
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].icon.as_deref(), Some("lucide:mastodon"));
        assert_eq!(links[0].target, None);
    }

    #[test]
    fn test_invalid_target_rejected() {
        let root = TempDir::new().unwrap();
        write_layer(
            root.path(),
            "config.yaml",
            "jsly:\n  header:\n    links:\n      - icon: lucide:github\n        to: https://github.com/x\n        target: _invalid\n",
        );

        let err = ConfigLoader::load_from_dir(root.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("_invalid"));
    }

    #[test]
    fn test_misspelled_key_in_layer_rejected() {
        let root = TempDir::new().unwrap();
        write_layer(
            root.path(),
            "local.yaml",
            "jsly:\n  site:\n    ogImag: https://example.com/og.png\n",
        );

        let err = ConfigLoader::load_from_dir(root.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration { .. }));
        assert!(err.reason().contains("ogImag"), "reason was: {}", err.reason());
    }

    #[test]
    fn test_radius_out_of_range_in_file() {
        let root = TempDir::new().unwrap();
        write_layer(root.path(), "local.yaml", "jsly:\n  theme:\n    radius: 1.5\n");

        let err = ConfigLoader::load_from_dir(root.path()).unwrap_err();
        assert_eq!(err.field(), "theme.radius");
    }

    #[test]
    fn test_load_from_missing_file() {
        let root = TempDir::new().unwrap();
        let err = ConfigLoader::load_from_file(root.path().join("nope.yaml")).unwrap_err();
        assert!(err.reason().contains("not found"));
    }

    #[test]
    fn test_load_from_file_requires_title() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("site.yaml");
        fs::write(&path, "jsly:\n  theme:\n    radius: 0.5\n").unwrap();

        let err = ConfigLoader::load_from_file(&path).unwrap_err();
        assert_eq!(err.field(), "site.title");
    }

    #[test]
    fn test_rendered_yaml_reloads_identically() {
        let yaml = ConfigLoader::render_yaml(&AppConfig::jsly()).unwrap();
        assert!(yaml.starts_with("jsly:"));
        assert!(yaml.contains("ogTitle:"));

        let provider = ConfigLoader::load_from_str(&yaml).unwrap();
        assert_eq!(provider.get_config(), &AppConfig::jsly());
    }

    #[test]
    fn test_layer_paths() {
        let root = TempDir::new().unwrap();
        let [project, local] = ConfigLoader::layer_paths(root.path()).unwrap();
        assert!(project.ends_with(".jsly/config.yaml"));
        assert!(local.ends_with(".jsly/local.yaml"));
    }
}
