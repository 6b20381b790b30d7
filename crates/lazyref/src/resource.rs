//! terraform resources and data sources
//!
//! A [TerraformResource] is the root every reference chain ends at. It answers
//! `interpolation_for_attribute` with `<type>.<name>.<path>`, or `data.<type>.<name>.<path>` for data sources.
use crate::addressable::{Addressable, InterpolatingParent};
use crate::reference::{AttributePath, Reference};
use crate::token::Token;
use crate::value::Value;
use hcl::{Expression, Identifier, Traversal, TraversalOperator};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// `resource` block
    Managed,
    /// `data` block
    Data,
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Managed => f.write_str("resource"),
            Mode::Data => f.write_str("data"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TerraformResource {
    mode: Mode,
    resource_type: String,
    name: String,
    config: indexmap::IndexMap<String, Value>,
}

impl TerraformResource {
    pub fn new(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_mode(Mode::Managed, resource_type, name)
    }

    pub fn data(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_mode(Mode::Data, resource_type, name)
    }

    fn with_mode(mode: Mode, resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            mode,
            resource_type: resource_type.into(),
            name: name.into(),
            config: Default::default(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets a configuration argument, replacing a previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.config.insert(key.into(), value.into());
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn config(&self) -> &indexmap::IndexMap<String, Value> {
        &self.config
    }
}

impl InterpolatingParent for TerraformResource {
    fn interpolation_for_attribute(&self, path: AttributePath) -> Reference {
        let mut operators = vec![];
        let root = match self.mode {
            Mode::Managed => hcl::Variable::unchecked(self.resource_type.as_str()),
            Mode::Data => {
                operators.push(TraversalOperator::GetAttr(Identifier::unchecked(
                    self.resource_type.as_str(),
                )));
                hcl::Variable::unchecked("data")
            }
        };

        operators.push(TraversalOperator::GetAttr(Identifier::unchecked(
            self.name.as_str(),
        )));
        operators.extend(path.into_operators());

        Reference::new(Traversal::new(Expression::Variable(root), operators))
    }
}

impl Addressable for TerraformResource {
    fn fqn(&self) -> Token {
        Token::as_string(self.interpolation_for_attribute(AttributePath::new()))
    }
}

type ResourceKey = (Mode, String, String);

/// Collection of resources that synthesizes into a terraform JSON configuration
#[derive(derive_new::new, Debug, Default)]
pub struct Stack {
    #[new(default)]
    resources: indexmap::IndexMap<ResourceKey, TerraformResource>,
}

impl Stack {
    /// Adds a resource, its `(mode, type, name)` must be unique
    pub fn add(&mut self, resource: TerraformResource) -> Result<&TerraformResource, SynthError> {
        use indexmap::map::Entry;

        let key = (resource.mode, resource.resource_type.clone(), resource.name.clone());
        match self.resources.entry(key) {
            Entry::Occupied(existing) => {
                tracing::debug!(resource = %existing.get().fqn(), "collision");
                Err(SynthError::DuplicateResource {
                    mode: resource.mode,
                    resource_type: resource.resource_type,
                    name: resource.name,
                })
            }
            Entry::Vacant(entry) => Ok(&*entry.insert(resource)),
        }
    }

    pub fn get(&self, mode: Mode, resource_type: &str, name: &str) -> Option<&TerraformResource> {
        self.resources
            .get(&(mode, resource_type.to_string(), name.to_string()))
    }

    /// Resources in insertion order
    pub fn resources(&self) -> impl Iterator<Item = &TerraformResource> {
        self.resources.values()
    }

    /// The configuration document
    ///
    /// `{"resource": {<type>: {<name>: <config>}}, "data": {...}}`, empty sections are left out.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn synth(&self) -> Value {
        let mut document: indexmap::IndexMap<String, Value> = Default::default();

        for mode in [Mode::Managed, Mode::Data] {
            let mut section: indexmap::IndexMap<String, indexmap::IndexMap<String, Value>> =
                Default::default();

            for resource in self.resources.values().filter(|resource| resource.mode == mode) {
                tracing::trace!(resource = %resource.fqn(), "synth");
                section
                    .entry(resource.resource_type.clone())
                    .or_default()
                    .insert(resource.name.clone(), Value::Object(resource.config.clone()));
            }

            if !section.is_empty() {
                document.insert(mode.to_string(), section.into());
            }
        }

        Value::Object(document)
    }

    pub fn to_json(&self) -> Result<String, SynthError> {
        Ok(serde_json::to_string_pretty(&self.synth())?)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SynthError {
    #[error("{mode} {resource_type}.{name} is already defined")]
    DuplicateResource {
        mode: Mode,
        resource_type: String,
        name: String,
    },
    #[error("Unable to serialize configuration")]
    Serialize(#[from] serde_json::Error),
}
