use super::*;
use crate::project::ProjectResources;
use crate::synth::SynthDocument;
use crate::StackContext;

fn context() -> StackContext {
    StackContext {
        project: "p1".to_string(),
        region: "us-central1".to_string(),
        billing_account: "B-1".to_string(),
        client_id: None,
        client_secret: None,
    }
}

fn declare() -> SynthDocument {
    let ctx = context();
    let mut doc = SynthDocument::new();
    let project = ProjectResources::declare(&mut doc, &ctx, &[REQUIRED_API]).unwrap();
    StorageResources::declare(&mut doc, &ctx, &project).unwrap();
    doc
}

#[test]
fn test_adopts_default_bucket() {
    let json = declare().to_json().unwrap();
    let bucket =
        &json["resource"]["google_firebase_storage_bucket"]["default-bucket-p1-us-central1"];
    assert_eq!(bucket["bucket_id"], "p1.appspot.com");
    let depends_on = bucket["depends_on"].as_array().unwrap();
    assert!(depends_on.contains(&"google_project_service.firebasestoragegoogleapiscom".into()));
}

#[test]
fn test_declares_regional_uploads_bucket() {
    let json = declare().to_json().unwrap();
    let bucket = &json["resource"]["google_storage_bucket"]["uploads-bucket-p1-us-central1"];
    assert_eq!(bucket["name"], "p1-uploads");
    assert_eq!(bucket["location"], "us-central1");
    assert_eq!(bucket["uniform_bucket_level_access"], true);
    assert_eq!(bucket["force_destroy"], false);
}

#[test]
fn test_storage_rules_target_default_bucket() {
    let json = declare().to_json().unwrap();
    let release =
        &json["resource"]["google_firebaserules_release"]["storage-rules-p1-us-central1-release"];
    assert_eq!(release["name"], "firebase.storage/p1.appspot.com");
    assert_eq!(
        release["ruleset_name"],
        "${google_firebaserules_ruleset.storage-rules-p1-us-central1.name}"
    );

    let ruleset =
        &json["resource"]["google_firebaserules_ruleset"]["storage-rules-p1-us-central1"];
    assert_eq!(ruleset["source"]["files"][0]["name"], "storage.rules");
    assert_eq!(
        ruleset["depends_on"][0],
        "google_firebase_storage_bucket.default-bucket-p1-us-central1"
    );
}
