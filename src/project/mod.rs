//! Google Cloud project resources.
//!
//! Declares the billing-account data source, the project itself, and one
//! `google_project_service` per enabled API. Everything downstream hangs off
//! the project reference this module returns.

pub mod models;


use crate::synth::models::Reference;
use crate::synth::{SynthDocument, SynthError};
use crate::StackContext;
use crate::project::models::{BillingAccountData, GoogleProject, GoogleProjectService};
use std::collections::BTreeMap;
use tracing::debug;

/// Service APIs every stack enables, before any feature module adds its own.
pub const BASE_APIS: [&str; 4] = [
    "cloudbilling.googleapis.com",
    "cloudresourcemanager.googleapis.com",
    "firebase.googleapis.com",
    "serviceusage.googleapis.com",
];

/// References to the declared project resources.
#[derive(Debug)]
pub struct ProjectResources {
    pub billing_account: Reference,
    pub project: Reference,
    /// Enabled service API -> its `google_project_service` reference.
    pub services: BTreeMap<String, Reference>,
}

impl ProjectResources {
    /// Declares the project block set. `extra_apis` come from the enabled
    /// feature modules and are enabled alongside [`BASE_APIS`].
    pub fn declare(
        doc: &mut SynthDocument,
        ctx: &StackContext,
        extra_apis: &[&str],
    ) -> Result<Self, SynthError> {
        let billing_account = doc.add_data(
            "google_billing_account",
            "billing-account",
            &BillingAccountData {
                billing_account: ctx.billing_account.clone(),
            },
        )?;

        let project = doc.add_resource(
            "google_project",
            &ctx.resource_name("project"),
            &GoogleProject {
                name: ctx.project.clone(),
                project_id: ctx.project.clone(),
                billing_account: billing_account.id(),
                skip_delete: false,
                labels: BTreeMap::from([("firebase".to_string(), "enabled".to_string())]),
            },
        )?;

        let mut services = BTreeMap::new();
        for api in BASE_APIS.iter().chain(extra_apis) {
            debug!(api, "enabling service");
            let service = doc.add_resource(
                "google_project_service",
                &api.replace('.', ""),
                &GoogleProjectService {
                    project: project.id(),
                    service: (*api).to_string(),
                    disable_on_destroy: false,
                },
            )?;
            services.insert((*api).to_string(), service);
        }

        Ok(Self {
            billing_account,
            project,
            services,
        })
    }

    /// The `google_project_service` reference for one API, if it was enabled.
    pub fn service(&self, api: &str) -> Option<&Reference> {
        self.services.get(api)
    }
}
