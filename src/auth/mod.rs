//! Identity Platform resources.
//!
//! Enables auth on the project and, when the settings carry both `clientId`
//! and `clientSecret`, wires Google as a federated sign-in provider with those
//! credentials. The credentials are optional: without them only the platform
//! config is declared.

pub mod models;


use crate::auth::models::{DefaultSupportedIdpConfig, IdentityPlatformConfig};
use crate::project::ProjectResources;
use crate::synth::models::Reference;
use crate::synth::{SynthDocument, SynthError};
use crate::StackContext;
use tracing::info;

/// Service API this module needs enabled on the project.
pub const REQUIRED_API: &str = "identitytoolkit.googleapis.com";

/// Identity provider id for Google sign-in.
const GOOGLE_IDP_ID: &str = "google.com";

/// References to the declared Identity Platform resources.
#[derive(Debug)]
pub struct AuthResources {
    pub platform_config: Reference,
    /// Present only when the settings carried federated credentials.
    pub google_idp: Option<Reference>,
}

impl AuthResources {
    pub fn declare(
        doc: &mut SynthDocument,
        ctx: &StackContext,
        project: &ProjectResources,
    ) -> Result<Self, SynthError> {
        let mut depends_on = vec![project.project.address()];
        if let Some(service) = project.service(REQUIRED_API) {
            depends_on.push(service.address());
        }

        let platform_config = doc.add_resource(
            "google_identity_platform_config",
            &ctx.resource_name("identity-platform"),
            &IdentityPlatformConfig {
                project: project.project.id(),
                depends_on,
            },
        )?;

        let google_idp = match (&ctx.client_id, &ctx.client_secret) {
            (Some(client_id), Some(client_secret)) => Some(doc.add_resource(
                "google_identity_platform_default_supported_idp_config",
                &ctx.resource_name("google-idp"),
                &DefaultSupportedIdpConfig {
                    project: project.project.id(),
                    idp_id: GOOGLE_IDP_ID.to_string(),
                    client_id: client_id.clone(),
                    client_secret: client_secret.clone(),
                    enabled: true,
                    depends_on: vec![platform_config.address()],
                },
            )?),
            _ => {
                info!("no federated credentials in settings; skipping Google sign-in provider");
                None
            }
        };

        Ok(Self {
            platform_config,
            google_idp,
        })
    }
}
