//! Firebase security rules declarations.
//!
//! Rule bodies are opaque payloads: they are carried into the ruleset source
//! verbatim and never inspected. Firestore and Storage each pin one ruleset to
//! their service via a release.

#[cfg(test)]
mod tests;

use crate::synth::models::Reference;
use crate::synth::{SynthDocument, SynthError};
use serde::Serialize;

/// One rules file inside a ruleset source.
#[derive(Debug, Serialize)]
pub struct RulesFile {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct RulesSource {
    pub files: Vec<RulesFile>,
}

/// `google_firebaserules_ruleset` block.
#[derive(Debug, Serialize)]
pub struct FirebaserulesRuleset {
    pub project: String,
    pub source: RulesSource,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

/// `google_firebaserules_release` block pinning a ruleset to a service.
#[derive(Debug, Serialize)]
pub struct FirebaserulesRelease {
    pub name: String,
    pub ruleset_name: String,
    pub project: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

/// References to one declared ruleset and its release.
#[derive(Debug)]
pub struct RulesResources {
    pub ruleset: Reference,
    pub release: Reference,
}

/// Declares a ruleset holding one opaque rules file plus the release pinning
/// it under `release_name` (e.g. `cloud.firestore` or
/// `firebase.storage/{bucket}`).
pub fn declare_rules(
    doc: &mut SynthDocument,
    label: &str,
    project_id: &str,
    file_name: &str,
    content: &str,
    release_name: String,
    depends_on: Vec<String>,
) -> Result<RulesResources, SynthError> {
    let ruleset = doc.add_resource(
        "google_firebaserules_ruleset",
        label,
        &FirebaserulesRuleset {
            project: project_id.to_string(),
            source: RulesSource {
                files: vec![RulesFile {
                    name: file_name.to_string(),
                    content: content.to_string(),
                }],
            },
            depends_on,
        },
    )?;

    let release = doc.add_resource(
        "google_firebaserules_release",
        &format!("{label}-release"),
        &FirebaserulesRelease {
            name: release_name,
            ruleset_name: ruleset.attr("name"),
            project: project_id.to_string(),
            depends_on: vec![ruleset.address()],
        },
    )?;

    Ok(RulesResources { ruleset, release })
}
