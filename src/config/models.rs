use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Provisioning parameters loaded from the project settings document.
///
/// The structure is optional-valued as a whole: every field may be absent and
/// the empty value is valid. `project`, `region` and `billingAccount` are
/// required by the declarative layer, which reports their absence at synthesis
/// time; the loader itself never enforces them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectSettings {
    /// Identifier of the cloud project to create or target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Geographic deployment region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Billing account the project is linked to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_account: Option<String>,

    /// OAuth client ID for federated sign-in. Present only in configurations
    /// that enable third-party sign-in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// OAuth client secret paired with `client_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,

    /// Unrecognized top-level keys, passed through opaquely for the
    /// declarative layer.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl ProjectSettings {
    /// Whether nothing was loaded.
    pub fn is_empty(&self) -> bool {
        self.project.is_none()
            && self.region.is_none()
            && self.billing_account.is_none()
            && self.client_id.is_none()
            && self.client_secret.is_none()
            && self.extra.is_empty()
    }
}
