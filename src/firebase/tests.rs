use super::*;
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

fn declare_all(doc: &mut SynthDocument) -> FirebaseResources {
    let ctx = context();
    let project = doc
        .add_resource("google_project", "project-p1-us-central1", &serde_json::json!({}))
        .unwrap();
    FirebaseResources::declare(doc, &ctx, &project).unwrap()
}

#[test]
fn test_declares_provider_with_alias() {
    let mut doc = SynthDocument::new();
    declare_all(&mut doc);

    let json = doc.to_json().unwrap();
    assert_eq!(
        json["terraform"]["required_providers"]["google-beta"]["source"],
        "hashicorp/google-beta"
    );
    let provider = &json["provider"]["google-beta"][0];
    assert_eq!(provider["alias"], "no_user_project_override");
    assert_eq!(provider["user_project_override"], false);
}

#[test]
fn test_firebase_project_depends_on_google_project() {
    let mut doc = SynthDocument::new();
    declare_all(&mut doc);

    let json = doc.to_json().unwrap();
    let firebase = &json["resource"]["google_firebase_project"]["firebase-project-p1-us-central1"];
    assert_eq!(firebase["project"], "${google_project.project-p1-us-central1.id}");
    assert_eq!(
        firebase["depends_on"][0],
        "google_project.project-p1-us-central1"
    );
}

#[test]
fn test_web_app_chain() {
    let mut doc = SynthDocument::new();
    let resources = declare_all(&mut doc);

    let json = doc.to_json().unwrap();
    let web_app = &json["resource"]["google_firebase_web_app"]["firebase-web-app-p1-us-central1"];
    assert_eq!(web_app["display_name"], "p1 web app");
    assert_eq!(web_app["deletion_policy"], "DELETE");
    assert_eq!(
        web_app["depends_on"][0],
        "google_firebase_project.firebase-project-p1-us-central1"
    );

    let config =
        &json["data"]["google_firebase_web_app_config"]["firebase-web-app-config-p1-us-central1"];
    assert_eq!(
        config["web_app_id"],
        "${google_firebase_web_app.firebase-web-app-p1-us-central1.app_id}"
    );
    assert_eq!(
        resources.web_app_config.address(),
        "data.google_firebase_web_app_config.firebase-web-app-config-p1-us-central1"
    );
}

#[test]
fn test_declares_front_end_outputs() {
    let mut doc = SynthDocument::new();
    let resources = declare_all(&mut doc);
    resources.declare_outputs(&mut doc).unwrap();

    let json = doc.to_json().unwrap();
    assert_eq!(
        json["output"]["appId"]["value"],
        "${google_firebase_web_app.firebase-web-app-p1-us-central1.app_id}"
    );
    assert_eq!(
        json["output"]["apiKey"]["value"],
        "${data.google_firebase_web_app_config.firebase-web-app-config-p1-us-central1.api_key}"
    );
    assert_eq!(
        json["output"]["authDomain"]["value"],
        "${data.google_firebase_web_app_config.firebase-web-app-config-p1-us-central1.auth_domain}"
    );
    assert_eq!(
        json["output"]["databaseURL"]["value"],
        "${data.google_firebase_web_app_config.firebase-web-app-config-p1-us-central1.database_url}"
    );
}
