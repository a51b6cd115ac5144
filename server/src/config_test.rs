use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("STOREFRONT_SITE_ROOT");
    }
}

#[test]
fn from_env_uses_defaults() {
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, PathBuf::from(DEFAULT_SITE_ROOT));
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn from_env_reads_overrides() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("STOREFRONT_SITE_ROOT", "/srv/storefront");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.site_root, PathBuf::from("/srv/storefront"));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "not-a-port");
    }

    let err = ServerConfig::from_env().unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { value: "not-a-port".into() });
    assert_eq!(err.to_string(), "invalid PORT: not-a-port");

    unsafe { clear_server_env() };
}

#[test]
fn parse_port_treats_blank_as_default() {
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort { value: "70000".into() }));
}

#[test]
fn parse_site_root_rejects_blank() {
    assert_eq!(parse_site_root(Some(" ")), Err(ConfigError::EmptySiteRoot));
    assert_eq!(parse_site_root(Some(" dist ")), Ok(PathBuf::from("dist")));
}
