// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;

use crate::declaration::{Output, Parameter, Resource};
use crate::error::CumulusError;
use crate::export;
use crate::schema::SchemaRegistry;
use crate::value::Value;

mod validation;


/// The template format version AWS has published since 2010.
pub const FORMAT_VERSION: &str = "2010-09-09";

/// An in-memory CloudFormation template.
///
/// A template starts empty and open, accumulates declarations in call
/// order, and becomes terminal once [`Template::to_json`] succeeds.
/// Serialization order is insertion order, so two identical build
/// sequences emit byte-identical documents.
///
/// # Example
/// ```
/// use cumulus_cfn::{Expr, Parameter, ParamType, Resource, Template};
///
/// # fn main() -> Result<(), cumulus_cfn::CumulusError> {
/// let mut t = Template::new();
/// t.set_description("HelloWorld web application")?;
/// t.add_parameter(Parameter::new("KeyPair", ParamType::aws("AWS::EC2::KeyPair::KeyName"))
///     .description("Name of an existing EC2 KeyPair to SSH"))?;
/// t.add_resource(Resource::new("instance", "AWS::EC2::Instance")
///     .prop("ImageId", "ami-a4c7edb2")
///     .prop("KeyName", Expr::reference("KeyPair")))?;
/// println!("{}", t.to_json()?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Template {
    pub(crate) format_version: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) mappings: IndexMap<String, Value>,
    pub(crate) resources: IndexMap<String, Resource>,
    pub(crate) outputs: IndexMap<String, Output>,
    registry: SchemaRegistry,
    serialized: bool,
}

impl Template {
    /// A fresh, open template backed by the built-in AWS schema registry.
    pub fn new() -> Template {
        Template::with_registry(SchemaRegistry::builtin().clone())
    }

    /// A fresh, open template validating resources against a caller-owned
    /// registry.
    pub fn with_registry(registry: SchemaRegistry) -> Template {
        Template {
            format_version: None,
            description: None,
            parameters: IndexMap::new(),
            mappings: IndexMap::new(),
            resources: IndexMap::new(),
            outputs: IndexMap::new(),
            registry,
            serialized: false,
        }
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub fn set_description(&mut self, text: impl Into<String>) -> Result<(), CumulusError> {
        self.ensure_open()?;
        self.description = Some(text.into());
        Ok(())
    }

    /// Pin the `AWSTemplateFormatVersion` header. Most templates leave it
    /// unset; pass [`FORMAT_VERSION`] for the standard value.
    pub fn set_version(&mut self, version: impl Into<String>) -> Result<(), CumulusError> {
        self.ensure_open()?;
        self.format_version = Some(version.into());
        Ok(())
    }

    /// Register an input declaration.
    ///
    /// Fails if the name collides with an existing parameter or resource,
    /// is not a valid logical ID, or carries constraints inconsistent
    /// with the declared type.
    pub fn add_parameter(&mut self, parameter: Parameter) -> Result<(), CumulusError> {
        self.ensure_open()?;
        self.ensure_logical_id(&parameter.name)?;
        self.ensure_fresh_name(&parameter.name)?;
        self.validate_parameter(&parameter)?;
        self.parameters.insert(parameter.name.clone(), parameter);
        Ok(())
    }

    /// Register a named two-level lookup table, queried with
    /// `Fn::FindInMap`.
    pub fn add_mapping(
        &mut self,
        name: impl Into<String>,
        table: impl Into<Value>,
    ) -> Result<(), CumulusError> {
        self.ensure_open()?;
        let name = name.into();
        let table = table.into();
        self.ensure_logical_id(&name)?;
        if self.mappings.contains_key(&name) {
            return Err(CumulusError::DuplicateName {
                name,
                kind: "mapping".into(),
                hint: Some("Mapping names must be unique within the template".into()),
                code: Some(410),
            });
        }
        self.validate_mapping(&name, &table)?;
        self.mappings.insert(name, table);
        Ok(())
    }

    /// Register a resource declaration, validated against the schema
    /// registry.
    ///
    /// Reference expressions among the properties are not resolved here;
    /// a resource may freely point at declarations added later.
    pub fn add_resource(&mut self, resource: Resource) -> Result<(), CumulusError> {
        self.ensure_open()?;
        self.ensure_logical_id(&resource.name)?;
        self.ensure_fresh_name(&resource.name)?;
        self.validate_resource(&resource)?;
        self.resources.insert(resource.name.clone(), resource);
        Ok(())
    }

    /// Register an output declaration.
    ///
    /// Output names form their own namespace; export names must be unique
    /// across the template's outputs.
    pub fn add_output(&mut self, output: Output) -> Result<(), CumulusError> {
        self.ensure_open()?;
        self.ensure_logical_id(&output.name)?;
        if self.outputs.contains_key(&output.name) {
            return Err(CumulusError::DuplicateName {
                name: output.name,
                kind: "output".into(),
                hint: Some("Output names must be unique within the template".into()),
                code: Some(410),
            });
        }
        self.ensure_fresh_export(&output)?;
        self.outputs.insert(output.name.clone(), output);
        Ok(())
    }

    /// Resolve every reference and emit the canonical JSON document.
    ///
    /// All dangling reference targets are gathered before failing, so one
    /// run reports the complete list. On success the template becomes
    /// terminal: further additions or a second call fail with
    /// `AlreadySerialized`.
    pub fn to_json(&mut self) -> Result<String, CumulusError> {
        self.ensure_open()?;
        let text = export::render_json(self)?;
        self.serialized = true;
        Ok(text)
    }
}

impl Default for Template {
    fn default() -> Self {
        Template::new()
    }
}
