use serde::Serialize;

/// `google_firestore_database` block.
#[derive(Debug, Serialize)]
pub struct FirestoreDatabase {
    pub project: String,
    pub name: String,
    pub location_id: String,
    #[serde(rename = "type")]
    pub database_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}
