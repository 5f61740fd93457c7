//! Cloud Storage for Firebase resources.
//!
//! Adopts the project's default bucket (`{project}.appspot.com`) into
//! Firebase, declares a regional uploads bucket, and pins the storage security
//! rules to the default bucket.

pub mod models;

#[cfg(test)]
mod tests;

use crate::project::ProjectResources;
use crate::rules::{declare_rules, RulesResources};
use crate::storage::models::{FirebaseStorageBucket, StorageBucket};
use crate::synth::models::Reference;
use crate::synth::{SynthDocument, SynthError};
use crate::StackContext;

/// Service API this module needs enabled on the project.
pub const REQUIRED_API: &str = "firebasestorage.googleapis.com";

/// Ruleset payload used when the caller supplies none.
pub const DEFAULT_RULES: &str = "\
rules_version = '2';
service firebase.storage {
  match /b/{bucket}/o {
    match /{allPaths=**} {
      allow read, write: if request.auth != null;
    }
  }
}
";

/// References to the declared storage resources.
#[derive(Debug)]
pub struct StorageResources {
    pub default_bucket: Reference,
    pub uploads_bucket: Reference,
    pub rules: RulesResources,
}

impl StorageResources {
    /// Declares the bucket set and rules with the default payload.
    pub fn declare(
        doc: &mut SynthDocument,
        ctx: &StackContext,
        project: &ProjectResources,
    ) -> Result<Self, SynthError> {
        Self::declare_with_rules(doc, ctx, project, DEFAULT_RULES)
    }

    /// Declares the bucket set and pins `rules`, carried verbatim, to the
    /// default bucket.
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

        let default_bucket_name = format!("{}.appspot.com", ctx.project);
        let default_bucket = doc.add_resource(
            "google_firebase_storage_bucket",
            &ctx.resource_name("default-bucket"),
            &FirebaseStorageBucket {
                project: project.project.id(),
                bucket_id: default_bucket_name.clone(),
                depends_on: depends_on.clone(),
            },
        )?;

        let uploads_bucket = doc.add_resource(
            "google_storage_bucket",
            &ctx.resource_name("uploads-bucket"),
            &StorageBucket {
                project: project.project.id(),
                name: format!("{}-uploads", ctx.project),
                location: ctx.region.clone(),
                uniform_bucket_level_access: true,
                force_destroy: false,
                depends_on,
            },
        )?;

        let rules = declare_rules(
            doc,
            &ctx.resource_name("storage-rules"),
            &project.project.id(),
            "storage.rules",
            rules,
            format!("firebase.storage/{default_bucket_name}"),
            vec![default_bucket.address()],
        )?;

        Ok(Self {
            default_bucket,
            uploads_bucket,
            rules,
        })
    }
}
