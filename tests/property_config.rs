use jsly_config::{AppConfig, CodeIconMap, ConfigLoader, ConfigProvider};
use proptest::prelude::*;

proptest! {
    /// Property: every radius in [0, 1] is accepted unchanged
    #[test]
    fn prop_radius_in_range_accepted(radius in 0.0f64..=1.0) {
        let mut config = AppConfig::jsly();
        config.theme.radius = radius;

        let provider = ConfigProvider::new(config).unwrap();
        prop_assert_eq!(provider.get_config().theme.radius, radius);
    }

    /// Property: radii above 1 or below 0 are always rejected on theme.radius
    #[test]
    fn prop_radius_out_of_range_rejected(
        radius in prop_oneof![1.000_001f64..1e6, -1e6f64..-0.000_001]
    ) {
        let mut config = AppConfig::jsly();
        config.theme.radius = radius;

        let err = ConfigProvider::new(config).unwrap_err();
        prop_assert_eq!(err.field(), "theme.radius");
    }

    /// Property: for repeated keys, the last inserted icon wins
    #[test]
    fn prop_code_icon_last_write_wins(
        entries in prop::collection::vec(("[a-z]{1,3}", "[a-z:-]{1,12}"), 1..30)
    ) {
        let map: CodeIconMap = entries.iter().cloned().collect();
        for (key, _) in &entries {
            let expected = entries
                .iter()
                .rev()
                .find(|(k, _)| k == key)
                .map(|(_, icon)| icon.as_str());
            prop_assert_eq!(map.resolve(key), expected);
        }
    }

    /// Property: a rendered configuration reloads to the same record
    #[test]
    fn prop_yaml_round_trip(
        radius in 0.0f64..=1.0,
        collapse in any::<bool>(),
        title in "JSLy [A-Za-z0-9]{1,20}",
    ) {
        let mut config = AppConfig::jsly();
        config.theme.radius = radius;
        config.aside.collapse = collapse;
        config.header.title = title;

        let yaml = ConfigLoader::render_yaml(&config).unwrap();
        let provider = ConfigLoader::load_from_str(&yaml).unwrap();
        prop_assert_eq!(provider.get_config(), &config);
    }
}
