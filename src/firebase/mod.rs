//! Firebase project and web app resources.
//!
//! Declares the `google-beta` provider, the Firebase project on top of the
//! Google project, the web app, and the web-app-config data source the stack
//! outputs are drawn from.

pub mod models;

#[cfg(test)]
mod tests;

use crate::firebase::models::{
    FirebaseProject, FirebaseWebApp, FirebaseWebAppConfigData, GoogleBetaProvider,
};
use crate::synth::models::{ProviderRequirement, Reference};
use crate::synth::{SynthDocument, SynthError};
use crate::StackContext;

const GOOGLE_BETA_SOURCE: &str = "hashicorp/google-beta";
const GOOGLE_BETA_VERSION: &str = "~> 5.0";

/// References to the declared Firebase resources.
#[derive(Debug)]
pub struct FirebaseResources {
    pub firebase_project: Reference,
    pub web_app: Reference,
    pub web_app_config: Reference,
}

impl FirebaseResources {
    /// Declares the provider and the Firebase block set on top of the Google
    /// project.
    pub fn declare(
        doc: &mut SynthDocument,
        ctx: &StackContext,
        project: &Reference,
    ) -> Result<Self, SynthError> {
        doc.require_provider(
            "google-beta",
            ProviderRequirement::new(GOOGLE_BETA_SOURCE, GOOGLE_BETA_VERSION),
        );
        doc.add_provider(
            "google-beta",
            &GoogleBetaProvider {
                alias: Some("no_user_project_override".to_string()),
                user_project_override: false,
            },
        )?;

        let firebase_project = doc.add_resource(
            "google_firebase_project",
            &ctx.resource_name("firebase-project"),
            &FirebaseProject {
                project: project.id(),
                depends_on: vec![project.address()],
            },
        )?;

        let web_app = doc.add_resource(
            "google_firebase_web_app",
            &ctx.resource_name("firebase-web-app"),
            &FirebaseWebApp {
                project: project.id(),
                display_name: format!("{} web app", ctx.project),
                deletion_policy: "DELETE".to_string(),
                depends_on: vec![firebase_project.address()],
            },
        )?;

        let web_app_config = doc.add_data(
            "google_firebase_web_app_config",
            &ctx.resource_name("firebase-web-app-config"),
            &FirebaseWebAppConfigData {
                web_app_id: web_app.attr("app_id"),
            },
        )?;

        Ok(Self {
            firebase_project,
            web_app,
            web_app_config,
        })
    }

    /// Declares the stack outputs the front-end configuration is built from.
    pub fn declare_outputs(&self, doc: &mut SynthDocument) -> Result<(), SynthError> {
        doc.add_output("appId", self.web_app.attr("app_id"))?;
        doc.add_output("apiKey", self.web_app_config.attr("api_key"))?;
        doc.add_output("authDomain", self.web_app_config.attr("auth_domain"))?;
        doc.add_output("databaseURL", self.web_app_config.attr("database_url"))?;
        Ok(())
    }
}
