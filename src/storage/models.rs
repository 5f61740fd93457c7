use serde::Serialize;

/// `google_firebase_storage_bucket` block adopting a bucket into Firebase.
#[derive(Debug, Serialize)]
pub struct FirebaseStorageBucket {
    pub project: String,
    pub bucket_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

/// `google_storage_bucket` block.
#[derive(Debug, Serialize)]
pub struct StorageBucket {
    pub project: String,
    pub name: String,
    pub location: String,
    pub uniform_bucket_level_access: bool,
    pub force_destroy: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}
