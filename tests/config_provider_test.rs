use jsly_config::{
    AppConfig, CodeIconMap, ConfigError, ConfigLoader, ConfigProvider, ExternalLink, LinkTarget,
};

#[test]
fn test_get_config_is_identity() {
    let mut config = AppConfig::jsly();
    config.theme.radius = 0.3;
    config.search.in_aside = true;

    let provider = ConfigProvider::new(config.clone()).unwrap();
    assert_eq!(provider.get_config(), &config);
    assert_eq!(*provider.shared(), config);
}

#[test]
fn test_radius_half_accepted_and_out_of_range_rejected() {
    let mut config = AppConfig::jsly();
    config.theme.radius = 0.5;
    assert!(ConfigProvider::new(config.clone()).is_ok());

    config.theme.radius = 1.5;
    let err = ConfigProvider::new(config).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidConfiguration {
            field: "theme.radius".to_string(),
            reason: "1.5 out of range [0,1]".to_string(),
        }
    );
}

#[test]
fn test_duplicate_code_icon_key_resolves_to_last() {
    let mut config = AppConfig::jsly();
    config.main.code_icon = [("ts", "icon-a"), ("ts", "icon-b")]
        .into_iter()
        .collect::<CodeIconMap>();

    let provider = ConfigProvider::new(config).unwrap();
    assert_eq!(provider.code_icon("ts"), Some("icon-b"));
}

#[test]
fn test_header_link_targets() {
    let mut config = AppConfig::jsly();
    config.header.links[0] = ExternalLink::icon("lucide:github", "https://github.com/huntermacias/")
        .with_target(Some(LinkTarget::Blank));
    assert!(ConfigProvider::new(config).is_ok());

    let yaml = r"
jsly:
  header:
    links:
      - icon: lucide:github
        to: https://github.com/huntermacias/
        target: _invalid
";
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join(".jsly")).unwrap();
    std::fs::write(dir.path().join(".jsly/config.yaml"), yaml).unwrap();

    let err = ConfigLoader::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidConfiguration { .. }));
    assert!(err.reason().contains("_invalid"));
}

#[test]
fn test_empty_site_title_cites_field() {
    let mut config = AppConfig::jsly();
    config.site.title = String::new();

    let err = ConfigProvider::new(config).unwrap_err();
    assert_eq!(err.field(), "site.title");
    assert!(err.to_string().contains("site.title"));
}

#[test]
fn test_package_json_icon_on_builtin() {
    let provider = ConfigProvider::builtin().unwrap();
    assert_eq!(
        provider.get_config().main.code_icon.resolve("package.json"),
        Some("vscode-icons:file-type-node")
    );
}

#[test]
fn test_unknown_code_icon_has_no_fallback() {
    let provider = ConfigProvider::builtin().unwrap();
    assert_eq!(provider.code_icon("Cargo.toml"), None);
    assert_eq!(provider.code_icon("TS"), None);
    assert_eq!(provider.code_icon("src/index.ts"), None);
}

#[test]
fn test_invalid_url_rejected() {
    let mut config = AppConfig::jsly();
    config.site.og_image = "i.imgur.com/aNVf3mG.png".to_string();

    let err = ConfigProvider::new(config).unwrap_err();
    assert_eq!(err.field(), "site.ogImage");
}
