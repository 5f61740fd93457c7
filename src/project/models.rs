use serde::Serialize;
use std::collections::BTreeMap;

/// `google_billing_account` data source block.
#[derive(Debug, Serialize)]
pub struct BillingAccountData {
    pub billing_account: String,
}

/// `google_project` block.
#[derive(Debug, Serialize)]
pub struct GoogleProject {
    pub name: String,
    pub project_id: String,
    /// Interpolation token for the billing-account data source.
    pub billing_account: String,
    pub skip_delete: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

/// `google_project_service` block enabling one service API.
#[derive(Debug, Serialize)]
pub struct GoogleProjectService {
    pub project: String,
    pub service: String,
    pub disable_on_destroy: bool,
}
