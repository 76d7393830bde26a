use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert!(cfg.static_dir.ends_with("public"));
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BIND_ADDR", "127.0.0.1"),
        ("STATIC_DIR", "/srv/site"),
    ]))
    .unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.static_dir, PathBuf::from("/srv/site"));
}

#[test]
fn trims_whitespace() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", " 4000 ")])).unwrap();
    assert_eq!(cfg.port, 4000);
}

#[test]
fn rejects_bad_port() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("PORT", "http")])),
        Err(ConfigError::InvalidPort("http".into()))
    );
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("PORT", "70000")])),
        Err(ConfigError::InvalidPort("70000".into()))
    );
}

#[test]
fn rejects_bad_bind_addr() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])),
        Err(ConfigError::InvalidBindAddr("localhost".into()))
    );
}
