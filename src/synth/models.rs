use serde::Serialize;
use std::collections::BTreeMap;

/// Entry in the `terraform.required_providers` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderRequirement {
    pub source: String,
    pub version: String,
}

impl ProviderRequirement {
    pub fn new(source: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            version: version.into(),
        }
    }
}

/// The top-level `terraform` block of the synthesized document.
#[derive(Debug, Default, Serialize)]
pub struct TerraformBlock {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub required_providers: BTreeMap<String, ProviderRequirement>,
}

impl TerraformBlock {
    pub fn is_empty(&self) -> bool {
        self.required_providers.is_empty()
    }
}

/// A named stack output holding an interpolation token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputBlock {
    pub value: String,
}

/// Whether a [`Reference`] points at a managed resource or a data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    Resource,
    Data,
}

/// Handle to a declared resource or data source.
///
/// References are the only dependency-ordering mechanism in the stack: a block
/// that interpolates `other.attr(..)` or lists `other.address()` in its
/// `depends_on` is ordered after `other` by the provisioning engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    kind: RefKind,
    type_name: String,
    name: String,
}

impl Reference {
    pub(crate) fn new(kind: RefKind, type_name: &str, name: &str) -> Self {
        Self {
            kind,
            type_name: type_name.to_string(),
            name: name.to_string(),
        }
    }

    /// The bare address, e.g. `google_project.project-p1-us-central1`,
    /// as listed in `depends_on`.
    pub fn address(&self) -> String {
        match self.kind {
            RefKind::Resource => format!("{}.{}", self.type_name, self.name),
            RefKind::Data => format!("data.{}.{}", self.type_name, self.name),
        }
    }

    /// An interpolation token for one attribute, e.g.
    /// `${google_firebase_web_app.x.app_id}`.
    pub fn attr(&self, attribute: &str) -> String {
        format!("${{{}.{}}}", self.address(), attribute)
    }

    /// Shorthand for the `id` attribute token.
    pub fn id(&self) -> String {
        self.attr("id")
    }
}
