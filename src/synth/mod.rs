//! Terraform JSON stack document.
//!
//! This module holds the synthesized form of the stack: the `terraform`,
//! `provider`, `data`, `resource` and `output` blocks of a Terraform JSON
//! configuration. Resource modules declare their blocks into a
//! [`SynthDocument`] and receive [`Reference`] handles back. Synthesis is
//! serialization only; planning and applying belong to the provisioning
//! engine.
//!
//! # Examples
//!
//! ```rust,ignore
//! # use firebase_stack::synth::SynthDocument;
//! let mut doc = SynthDocument::new();
//! let project = doc.add_resource("google_project", "project-p1", &block)?;
//! doc.add_output("projectId", project.id())?;
//! doc.write_to("cdktf.out", "cdktf")?;
//! ```

pub mod models;


use crate::synth::models::{OutputBlock, ProviderRequirement, RefKind, Reference, TerraformBlock};
use serde::Serialize;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the synthesized stack document, matching the cdktf layout.
pub const STACK_FILE_NAME: &str = "cdk.tf.json";

/// Errors that can occur while declaring or writing the stack document.
#[derive(Debug, Error)]
pub enum SynthError {
    /// A provisioning parameter the declarations depend on is absent from the
    /// loaded settings.
    #[error("required field {0} is undefined")]
    MissingField(&'static str),
    /// Two declarations were made under the same (type, name) pair.
    #[error("duplicate declaration: {address}")]
    DuplicateResource { address: String },
    /// Two outputs were declared under the same name.
    #[error("duplicate output: {0}")]
    DuplicateOutput(String),
    /// Wrapper for `serde_json::Error`.
    #[error("failed to serialize stack document: {0}")]
    Json(#[from] serde_json::Error),
    /// Wrapper for `std::io::Error`.
    #[error("failed to write stack document: {0}")]
    Io(#[from] std::io::Error),
}

/// In-memory Terraform JSON document, keyed deterministically.
#[derive(Debug, Default, Serialize)]
pub struct SynthDocument {
    #[serde(skip_serializing_if = "TerraformBlock::is_empty")]
    terraform: TerraformBlock,
    #[serde(rename = "provider", skip_serializing_if = "BTreeMap::is_empty")]
    providers: BTreeMap<String, Vec<serde_json::Value>>,
    #[serde(rename = "data", skip_serializing_if = "BTreeMap::is_empty")]
    data: BTreeMap<String, BTreeMap<String, serde_json::Value>>,
    #[serde(rename = "resource", skip_serializing_if = "BTreeMap::is_empty")]
    resources: BTreeMap<String, BTreeMap<String, serde_json::Value>>,
    #[serde(rename = "output", skip_serializing_if = "BTreeMap::is_empty")]
    outputs: BTreeMap<String, OutputBlock>,
}

impl SynthDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a provider requirement under its local name. Re-requiring the
    /// same provider overwrites the previous entry.
    pub fn require_provider(&mut self, local_name: &str, requirement: ProviderRequirement) {
        self.terraform
            .required_providers
            .insert(local_name.to_string(), requirement);
    }

    /// Appends a provider configuration block. Terraform allows several blocks
    /// per provider (aliases), so duplicates are not an error here.
    pub fn add_provider(
        &mut self,
        provider_name: &str,
        block: &impl Serialize,
    ) -> Result<(), SynthError> {
        let value = serde_json::to_value(block)?;
        self.providers
            .entry(provider_name.to_string())
            .or_default()
            .push(value);
        Ok(())
    }

    /// Declares a managed resource and returns its reference.
    pub fn add_resource(
        &mut self,
        type_name: &str,
        name: &str,
        block: &impl Serialize,
    ) -> Result<Reference, SynthError> {
        let value = serde_json::to_value(block)?;
        let reference = Reference::new(RefKind::Resource, type_name, name);
        let slot = self
            .resources
            .entry(type_name.to_string())
            .or_default()
            .entry(name.to_string());
        match slot {
            Entry::Occupied(_) => {
                Err(SynthError::DuplicateResource {
                    address: reference.address(),
                })
            }
            Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(reference)
            }
        }
    }

    /// Declares a data source and returns its reference.
    pub fn add_data(
        &mut self,
        type_name: &str,
        name: &str,
        block: &impl Serialize,
    ) -> Result<Reference, SynthError> {
        let value = serde_json::to_value(block)?;
        let reference = Reference::new(RefKind::Data, type_name, name);
        let slot = self
            .data
            .entry(type_name.to_string())
            .or_default()
            .entry(name.to_string());
        match slot {
            Entry::Occupied(_) => {
                Err(SynthError::DuplicateResource {
                    address: reference.address(),
                })
            }
            Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(reference)
            }
        }
    }

    /// Declares a named stack output.
    pub fn add_output(&mut self, name: &str, value: String) -> Result<(), SynthError> {
        match self.outputs.entry(name.to_string()) {
            Entry::Occupied(_) => {
                Err(SynthError::DuplicateOutput(name.to_string()))
            }
            Entry::Vacant(entry) => {
                entry.insert(OutputBlock { value });
                Ok(())
            }
        }
    }

    /// The declared output names, in deterministic order.
    pub fn output_names(&self) -> impl Iterator<Item = &str> {
        self.outputs.keys().map(String::as_str)
    }

    /// Serializes the document; empty blocks are omitted.
    pub fn to_json(&self) -> Result<serde_json::Value, SynthError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Writes the document to `<out_dir>/stacks/<stack_name>/cdk.tf.json`,
    /// creating directories as needed, and returns the written path.
    pub fn write_to(
        &self,
        out_dir: impl AsRef<Path>,
        stack_name: &str,
    ) -> Result<PathBuf, SynthError> {
        let stack_dir = out_dir.as_ref().join("stacks").join(stack_name);
        fs::create_dir_all(&stack_dir)?;
        let path = stack_dir.join(STACK_FILE_NAME);
        let rendered = serde_json::to_string_pretty(self)?;
        fs::write(&path, rendered)?;
        Ok(path)
    }
}
