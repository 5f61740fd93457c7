use super::*;
use crate::synth::SynthDocument;

const RULES: &str = "rules_version = '2';\nservice cloud.firestore {}\n";

#[test]
fn test_declares_ruleset_and_release() {
    let mut doc = SynthDocument::new();
    let rules = declare_rules(
        &mut doc,
        "firestore-rules",
        "${google_project.p.id}",
        "firestore.rules",
        RULES,
        "cloud.firestore".to_string(),
        vec!["google_project_service.firebaserulesgoogleapiscom".to_string()],
    )
    .unwrap();

    let json = doc.to_json().unwrap();
    let ruleset = &json["resource"]["google_firebaserules_ruleset"]["firestore-rules"];
    assert_eq!(ruleset["project"], "${google_project.p.id}");
    assert_eq!(ruleset["source"]["files"][0]["name"], "firestore.rules");
    // The rules body is carried verbatim.
    assert_eq!(ruleset["source"]["files"][0]["content"], RULES);

    let release = &json["resource"]["google_firebaserules_release"]["firestore-rules-release"];
    assert_eq!(release["name"], "cloud.firestore");
    assert_eq!(
        release["ruleset_name"],
        "${google_firebaserules_ruleset.firestore-rules.name}"
    );
    assert_eq!(
        release["depends_on"][0],
        "google_firebaserules_ruleset.firestore-rules"
    );
    assert_eq!(rules.release.address(), "google_firebaserules_release.firestore-rules-release");
}
