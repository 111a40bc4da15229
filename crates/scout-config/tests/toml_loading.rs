use figment::Jail;
use scout_config::ScoutConfig;

#[test]
fn project_local_toml_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_dir(".scout")?;
        jail.create_file(
            ".scout/config.toml",
            r#"
            [general]
            window_days = 30
            results_per_type = 3

            [search]
            endpoint = "https://api.search.example/v1/search"
            api_key = "sk_local"
            "#,
        )?;

        let config: ScoutConfig = ScoutConfig::figment().extract()?;
        assert_eq!(config.general.window_days, 30);
        assert_eq!(config.general.results_per_type, 3);
        assert!(config.search.is_configured());
        // Untouched sections keep their defaults.
        assert!((config.general.radius_miles - 50.0).abs() < f64::EPSILON);
        assert!(!config.weather.is_configured());
        Ok(())
    });
}

#[test]
fn partial_section_keeps_remaining_defaults() {
    Jail::expect_with(|jail| {
        jail.create_dir(".scout")?;
        jail.create_file(
            ".scout/config.toml",
            r#"
            [weather]
            api_key = "owm_local"
            "#,
        )?;

        let config: ScoutConfig = ScoutConfig::figment().extract()?;
        assert!(config.weather.is_configured());
        assert_eq!(config.weather.timeout_secs, 10);
        assert!(config.weather.endpoint.contains("openweathermap"));
        Ok(())
    });
}
