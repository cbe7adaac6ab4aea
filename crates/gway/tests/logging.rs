use gway::domain::config::SiteConfig;

#[test]
fn logging_is_installed_from_site_config() {
    let mut config = SiteConfig::default();
    config.logging.directives = Some("gway=debug,gway_kernel=info".to_owned());

    let logger = gway::install_logging(&config).expect("install");
    assert!(!logger.writes_files());

    // Slice initialization now runs under the installed subscriber.
    assert!(gway::bootstrap(config).is_ok());
}
