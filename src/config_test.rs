use super::*;

#[test]
fn parse_defaults_to_no_overrides() {
    let cfg = ServerConfig::parse(None, None, None).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    let fallback: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    assert_eq!(cfg.bind_addr(fallback), fallback);
    assert_eq!(cfg.site_root_or("target/site"), PathBuf::from("target/site"));
}

#[test]
fn parse_port_binds_all_interfaces() {
    let cfg = ServerConfig::parse(None, Some("8080"), None).unwrap();
    assert_eq!(cfg.addr, Some("0.0.0.0:8080".parse().unwrap()));
}

#[test]
fn parse_site_addr_wins_over_port() {
    let cfg = ServerConfig::parse(Some("127.0.0.1:9000"), Some("8080"), None).unwrap();
    assert_eq!(cfg.addr, Some("127.0.0.1:9000".parse().unwrap()));
}

#[test]
fn parse_blank_values_are_unset() {
    let cfg = ServerConfig::parse(Some("  "), Some(""), Some(" ")).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn parse_site_root_override() {
    let cfg = ServerConfig::parse(None, None, Some("/srv/site")).unwrap();
    assert_eq!(cfg.site_root_or("target/site"), PathBuf::from("/srv/site"));
}

#[test]
fn parse_rejects_bad_port() {
    assert_eq!(
        ServerConfig::parse(None, Some("http"), None),
        Err(ConfigError::InvalidPort("http".into()))
    );
    assert_eq!(
        ServerConfig::parse(None, Some("70000"), None),
        Err(ConfigError::InvalidPort("70000".into()))
    );
}

#[test]
fn parse_rejects_bad_site_addr() {
    assert_eq!(
        ServerConfig::parse(Some("localhost"), None, None),
        Err(ConfigError::InvalidSiteAddr("localhost".into()))
    );
}
