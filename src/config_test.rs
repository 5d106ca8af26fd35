use super::*;

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = HostConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.client, ClientConfig::default());
}

#[test]
fn blank_port_uses_default() {
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn explicit_port_is_parsed() {
    assert_eq!(parse_port(Some(" 8080 ")).unwrap(), 8080);
}

#[test]
fn invalid_port_is_rejected() {
    for raw in ["http", "-1", "70000"] {
        let err = parse_port(Some(raw)).unwrap_err();
        assert!(matches!(err, HostError::InvalidPort(ref v) if v == raw), "unexpected error for {raw:?}: {err}");
    }
}

#[test]
fn redirect_base_url_is_forwarded_to_client_config() {
    let cfg = HostConfig::from_vars(Some("3001"), Some("https://portal.example".to_owned())).unwrap();
    assert_eq!(cfg.port, 3001);
    assert_eq!(cfg.client.redirect_base_url.as_deref(), Some("https://portal.example"));
}

#[test]
fn empty_redirect_base_url_is_unset() {
    let cfg = HostConfig::from_vars(None, Some(String::new())).unwrap();
    assert_eq!(cfg.client.redirect_base_url, None);
}
