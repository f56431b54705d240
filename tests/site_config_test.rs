use anyhow::Result;
use std::time::Duration;
use sundaw_site::SiteConfig;
use tempfile::TempDir;

/// A page override file only needs the keys it changes.
#[tokio::test]
async fn test_site_config_file_overrides() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("site.toml");

    let config_content = r#"
[site]
name = "Sundaw Lawn Care LLC (staging)"
api_global = "sundawStagingAPI"

[form]
submit_delay_ms = 250

[banner]
display_ms = 3000
fade_ms = 200

[logging]
level = "sundaw_site=debug"
"#;
    tokio::fs::write(&config_path, config_content).await?;

    let config = SiteConfig::from_file(&config_path)?;
    assert_eq!(config.site.api_global, "sundawStagingAPI");
    assert_eq!(config.submit_delay(), Duration::from_millis(250));
    assert_eq!(config.banner_display(), Duration::from_secs(3));
    assert_eq!(config.banner_fade(), Duration::from_millis(200));
    assert_eq!(config.navigation.header_offset, 60.0);
    assert_eq!(config.enhancers.rating, 5);
    assert_eq!(config.logging.level, "sundaw_site=debug");
    Ok(())
}

#[test]
fn test_missing_config_file_is_an_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = SiteConfig::from_file(temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, sundaw_site::SiteError::IoError(_)));
}
