use serde::Serialize;

/// `google-beta` provider configuration block.
#[derive(Debug, Serialize)]
pub struct GoogleBetaProvider {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub user_project_override: bool,
}

/// `google_firebase_project` block enabling Firebase on the project.
#[derive(Debug, Serialize)]
pub struct FirebaseProject {
    pub project: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

/// `google_firebase_web_app` block.
#[derive(Debug, Serialize)]
pub struct FirebaseWebApp {
    pub project: String,
    pub display_name: String,
    pub deletion_policy: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

/// `google_firebase_web_app_config` data source keyed by the web app id.
#[derive(Debug, Serialize)]
pub struct FirebaseWebAppConfigData {
    pub web_app_id: String,
}
