//! Declarative Google Cloud + Firebase stack synthesis.
//!
//! The crate loads provisioning settings from a `project.yaml` discovered in a
//! directory, declares the resource stack (Google project, enabled APIs,
//! Firebase project and web app, Firestore, Identity Platform, storage
//! buckets, security rules), and synthesizes it into a Terraform JSON document
//! the provisioning engine plans and applies. Nothing here talks to a cloud
//! API.
//!
//! # Examples
//!
//! ```rust,no_run
//! use firebase_stack::{config, FirebaseStack};
//!
//! # fn run() -> Result<(), firebase_stack::synth::SynthError> {
//! let settings = config::load_project_info(".");
//! let stack = FirebaseStack::new(settings);
//! let path = stack.synth_to("cdktf.out", "cdktf")?;
//! println!("wrote {}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod firebase;
pub mod logging;
pub mod project;
pub mod synth;
pub mod web;

#[cfg(feature = "auth")]
pub mod auth;
#[cfg(feature = "firestore")]
pub mod firestore;
#[cfg(any(feature = "firestore", feature = "storage"))]
pub mod rules;
#[cfg(feature = "storage")]
pub mod storage;


use crate::config::models::ProjectSettings;
use crate::firebase::FirebaseResources;
use crate::project::ProjectResources;
use crate::synth::{SynthDocument, SynthError};
use std::path::{Path, PathBuf};
use tracing::info;

pub use crate::config::load_project_info;

/// Validated view over the loaded settings, consumed by the resource modules.
///
/// Construction is where the three required provisioning parameters are
/// enforced; the loader itself never checks them.
#[derive(Debug, Clone)]
pub struct StackContext {
    pub project: String,
    pub region: String,
    pub billing_account: String,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl StackContext {
    pub fn from_settings(settings: &ProjectSettings) -> Result<Self, SynthError> {
        Ok(Self {
            project: settings
                .project
                .clone()
                .ok_or(SynthError::MissingField("project"))?,
            region: settings
                .region
                .clone()
                .ok_or(SynthError::MissingField("region"))?,
            billing_account: settings
                .billing_account
                .clone()
                .ok_or(SynthError::MissingField("billingAccount"))?,
            client_id: settings.client_id.clone(),
            client_secret: settings.client_secret.clone(),
        })
    }

    /// Resource name in the stack's `<kind>-<project>-<region>` scheme.
    pub fn resource_name(&self, kind: &str) -> String {
        format!("{kind}-{}-{}", self.project, self.region)
    }
}

/// The whole stack, built from loaded settings.
pub struct FirebaseStack {
    settings: ProjectSettings,
}

impl FirebaseStack {
    pub fn new(settings: ProjectSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ProjectSettings {
        &self.settings
    }

    /// Declares every module into a fresh document.
    ///
    /// Fails with [`SynthError::MissingField`] when `project`, `region` or
    /// `billingAccount` is absent from the settings.
    pub fn synth(&self) -> Result<SynthDocument, SynthError> {
        let ctx = StackContext::from_settings(&self.settings)?;
        info!(project = %ctx.project, region = %ctx.region, "synthesizing stack");

        let mut doc = SynthDocument::new();

        let extra_apis: Vec<&'static str> = [
            #[cfg(feature = "firestore")]
            firestore::REQUIRED_API,
            #[cfg(feature = "auth")]
            auth::REQUIRED_API,
            #[cfg(feature = "storage")]
            storage::REQUIRED_API,
        ]
        .into_iter()
        .collect();

        let project = ProjectResources::declare(&mut doc, &ctx, &extra_apis)?;
        let firebase = FirebaseResources::declare(&mut doc, &ctx, &project.project)?;

        #[cfg(feature = "firestore")]
        firestore::FirestoreResources::declare(&mut doc, &ctx, &project)?;
        #[cfg(feature = "auth")]
        auth::AuthResources::declare(&mut doc, &ctx, &project)?;
        #[cfg(feature = "storage")]
        storage::StorageResources::declare(&mut doc, &ctx, &project)?;

        firebase.declare_outputs(&mut doc)?;
        Ok(doc)
    }

    /// Synthesizes and writes the stack under `out_dir`, returning the
    /// written path.
    pub fn synth_to(
        &self,
        out_dir: impl AsRef<Path>,
        stack_name: &str,
    ) -> Result<PathBuf, SynthError> {
        let doc = self.synth()?;
        let path = doc.write_to(out_dir, stack_name)?;
        info!(path = %path.display(), "stack written");
        Ok(path)
    }
}
