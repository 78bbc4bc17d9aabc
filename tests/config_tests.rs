use chat_relay::config::{Config, ConfigError};
use std::collections::HashMap;

fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let env: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = load(&[]).unwrap();
    assert_eq!(config.ollama_url, "http://localhost:11434");
    assert_eq!(config.ollama_model, "qwen2.5");
    assert_eq!(config.allowed_origins.len(), 2);
    assert_eq!(config.allowed_origins[0], "http://localhost:5173");
    assert_eq!(config.allowed_origins[1], "http://localhost:3000");
    assert_eq!(config.listen_addr(), "127.0.0.1:8000");
}

#[test]
fn test_overrides() {
    let config = load(&[
        ("OLLAMA_URL", "http://gpu-box:11434"),
        ("OLLAMA_MODEL", "llama3"),
        ("HOST", "0.0.0.0"),
        ("PORT", "9090"),
    ])
    .unwrap();
    assert_eq!(config.ollama_url, "http://gpu-box:11434");
    assert_eq!(config.ollama_model, "llama3");
    assert_eq!(config.listen_addr(), "0.0.0.0:9090");
}

#[test]
fn test_allowed_origins_are_trimmed_and_skip_empty_entries() {
    let config = load(&[(
        "ALLOWED_ORIGINS",
        " https://chat.example.com , ,http://localhost:4200,",
    )])
    .unwrap();
    assert_eq!(config.allowed_origins.len(), 2);
    assert_eq!(config.allowed_origins[0], "https://chat.example.com");
    assert_eq!(config.allowed_origins[1], "http://localhost:4200");
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(matches!(
        load(&[("PORT", "eighty")]),
        Err(ConfigError::InvalidPort(_))
    ));
    assert!(matches!(
        load(&[("HOST", "   ")]),
        Err(ConfigError::EmptyHost)
    ));
    assert!(matches!(
        load(&[("ALLOWED_ORIGINS", "http://ok.example,bad\norigin")]),
        Err(ConfigError::InvalidOrigin(_))
    ));
    // Credentials are always allowed, which a wildcard origin cannot be paired with.
    assert!(matches!(
        load(&[("ALLOWED_ORIGINS", "*")]),
        Err(ConfigError::WildcardOrigin)
    ));
    assert!(matches!(
        load(&[("ALLOWED_ORIGINS", "http://localhost:5173, *")]),
        Err(ConfigError::WildcardOrigin)
    ));
}

#[test]
fn test_host_accepts_hostnames_and_ipv6() {
    let config = load(&[("HOST", "localhost"), ("PORT", "8001")]).unwrap();
    assert_eq!(config.host, "localhost");
    assert_eq!(config.listen_addr(), "localhost:8001");

    let config = load(&[("HOST", "::1")]).unwrap();
    assert_eq!(config.listen_addr(), "[::1]:8000");
}

#[test]
fn test_default_matches_empty_environment() {
    let from_env = load(&[]).unwrap();
    let default = Config::default();
    assert_eq!(from_env.ollama_url, default.ollama_url);
    assert_eq!(from_env.ollama_model, default.ollama_model);
    assert_eq!(from_env.allowed_origins, default.allowed_origins);
    assert_eq!(from_env.listen_addr(), default.listen_addr());
}
