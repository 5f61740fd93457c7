use super::*;

#[test]
fn test_bundled_config_is_valid() {
    let config = firebase_config().unwrap();
    assert!(config.api_key.starts_with("AIza"));
    assert_eq!(config.auth_domain, "vertex-chat-app.firebaseapp.com");
}

#[test]
fn test_blank_api_key_is_rejected() {
    let config = WebAppConfig {
        api_key: String::new(),
        ..WebAppConfig::bundled()
    };
    assert!(matches!(config.validate(), Err(WebConfigError::Missing)));
}

#[test]
fn test_invalid_auth_domain_is_rejected() {
    let config = WebAppConfig {
        auth_domain: "not a host".to_string(),
        ..WebAppConfig::bundled()
    };
    assert!(matches!(
        config.validate(),
        Err(WebConfigError::InvalidAuthDomain(_))
    ));
}

#[test]
fn test_serializes_with_js_sdk_keys() {
    let json = serde_json::to_value(WebAppConfig::bundled()).unwrap();
    assert!(json.get("apiKey").is_some());
    assert!(json.get("authDomain").is_some());
    assert!(json.get("projectId").is_some());
    assert!(json.get("storageBucket").is_some());
    assert!(json.get("messagingSenderId").is_some());
    assert!(json.get("appId").is_some());
}
