// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;
use once_cell::sync::Lazy;

mod aws;


/// Expected shape of a resource property value.
///
/// An intrinsic expression satisfies any shape, since its result is only
/// known when the deployed stack evaluates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropShape {
    Scalar,
    List,
    Object,
}

#[derive(Debug, Clone)]
pub struct PropSpec {
    pub shape: PropShape,
    pub required: bool,
}

/// Property schema for one resource type tag.
#[derive(Debug, Clone)]
pub struct ResourceSpec {
    type_tag: String,
    properties: IndexMap<String, PropSpec>,
}

impl ResourceSpec {
    pub fn new(type_tag: impl Into<String>) -> Self {
        ResourceSpec {
            type_tag: type_tag.into(),
            properties: IndexMap::new(),
        }
    }

    pub fn required(mut self, name: &str, shape: PropShape) -> Self {
        self.properties
            .insert(name.to_string(), PropSpec { shape, required: true });
        self
    }

    pub fn optional(mut self, name: &str, shape: PropShape) -> Self {
        self.properties
            .insert(name.to_string(), PropSpec { shape, required: false });
        self
    }

    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    pub fn property(&self, name: &str) -> Option<&PropSpec> {
        self.properties.get(name)
    }

    pub fn required_properties(&self) -> impl Iterator<Item = &str> {
        self.properties
            .iter()
            .filter(|(_, spec)| spec.required)
            .map(|(name, _)| name.as_str())
    }
}

/// Table of known resource types, consulted by the template on every
/// `add_resource` call.
///
/// The registry is a collaborator, not a singleton: `Template::new` clones
/// the built-in AWS table, and callers with custom resource vocabularies
/// can start from [`SchemaRegistry::new`] or extend a clone of the
/// built-in one.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    types: IndexMap<String, ResourceSpec>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        SchemaRegistry {
            types: IndexMap::new(),
        }
    }

    /// The registry covering the AWS resource types this crate ships
    /// schemas for.
    pub fn builtin() -> &'static SchemaRegistry {
        static BUILTIN: Lazy<SchemaRegistry> = Lazy::new(aws::builtin_registry);
        &BUILTIN
    }

    /// Register a resource spec under its type tag. Re-registering a tag
    /// replaces the previous spec.
    pub fn register(&mut self, spec: ResourceSpec) {
        self.types.insert(spec.type_tag.clone(), spec);
    }

    pub fn lookup(&self, type_tag: &str) -> Option<&ResourceSpec> {
        self.types.get(type_tag)
    }

    pub fn contains(&self, type_tag: &str) -> bool {
        self.types.contains_key(type_tag)
    }

    pub fn type_tags(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
