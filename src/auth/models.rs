use serde::Serialize;

/// `google_identity_platform_config` block enabling auth on the project.
#[derive(Debug, Serialize)]
pub struct IdentityPlatformConfig {
    pub project: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

/// `google_identity_platform_default_supported_idp_config` block wiring a
/// federated identity provider with its OAuth credentials.
#[derive(Debug, Serialize)]
pub struct DefaultSupportedIdpConfig {
    pub project: String,
    pub idp_id: String,
    pub client_id: String,
    pub client_secret: String,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}
