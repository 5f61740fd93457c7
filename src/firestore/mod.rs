//! Cloud Firestore resources.
//!
//! Declares the `(default)` Firestore database in the stack's region plus the
//! security ruleset and release protecting it. The rules body is an opaque
//! payload; [`DEFAULT_RULES`] locks documents to signed-in users.

pub mod models;


use crate::firestore::models::FirestoreDatabase;
use crate::project::ProjectResources;
use crate::rules::{declare_rules, RulesResources};
use crate::synth::models::Reference;
use crate::synth::{SynthDocument, SynthError};
use crate::StackContext;

/// Service API this module needs enabled on the project.
pub const REQUIRED_API: &str = "firestore.googleapis.com";

/// Ruleset payload used when the caller supplies none.
pub const DEFAULT_RULES: &str = "\
rules_version = '2';
service cloud.firestore {
  match /databases/{database}/documents {
    match /{document=**} {
      allow read, write: if request.auth != null;
    }
  }
}
";

/// References to the declared Firestore resources.
#[derive(Debug)]
pub struct FirestoreResources {
    pub database: Reference,
    pub rules: RulesResources,
}

impl FirestoreResources {
    /// Declares the database and its rules with the default payload.
    pub fn declare(
        doc: &mut SynthDocument,
        ctx: &StackContext,
        project: &ProjectResources,
    ) -> Result<Self, SynthError> {
        Self::declare_with_rules(doc, ctx, project, DEFAULT_RULES)
    }

    /// Declares the database and pins `rules`, carried verbatim, to
    /// `cloud.firestore`.
    pub fn declare_with_rules(
        doc: &mut SynthDocument,
        ctx: &StackContext,
        project: &ProjectResources,
        rules: &str,
    ) -> Result<Self, SynthError> {
        let mut depends_on = vec![project.project.address()];
        if let Some(service) = project.service(REQUIRED_API) {
            depends_on.push(service.address());
        }

        let database = doc.add_resource(
            "google_firestore_database",
            &ctx.resource_name("firestore"),
            &FirestoreDatabase {
                project: project.project.id(),
                name: "(default)".to_string(),
                location_id: ctx.region.clone(),
                database_type: "FIRESTORE_NATIVE".to_string(),
                depends_on,
            },
        )?;

        let rules = declare_rules(
            doc,
            &ctx.resource_name("firestore-rules"),
            &project.project.id(),
            "firestore.rules",
            rules,
            "cloud.firestore".to_string(),
            vec![database.address()],
        )?;

        Ok(Self { database, rules })
    }
}
