use indexmap::IndexMap;

use crate::value::Value;

/// CloudFormation parameter types.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamType {
    String,
    Number,
    CommaDelimitedList,
    /// An AWS-specific type such as `AWS::EC2::KeyPair::KeyName`.
    Aws(String),
    /// A list of an AWS-specific type, emitted as `List<...>`.
    AwsList(String),
}

impl ParamType {
    pub fn aws(tag: impl Into<String>) -> ParamType {
        ParamType::Aws(tag.into())
    }

    pub fn aws_list(tag: impl Into<String>) -> ParamType {
        ParamType::AwsList(tag.into())
    }

    pub fn type_string(&self) -> String {
        match self {
            ParamType::String => "String".to_string(),
            ParamType::Number => "Number".to_string(),
            ParamType::CommaDelimitedList => "CommaDelimitedList".to_string(),
            ParamType::Aws(tag) => tag.clone(),
            ParamType::AwsList(tag) => format!("List<{}>", tag),
        }
    }

    /// Numeric bounds only make sense for `Number` parameters.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ParamType::Number)
    }

    /// Pattern constraints apply to the string-shaped types.
    pub fn is_string_like(&self) -> bool {
        matches!(self, ParamType::String | ParamType::Aws(_))
    }
}

/// An input declaration, registered with [`crate::Template::add_parameter`].
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub(crate) name: String,
    pub(crate) param_type: ParamType,
    pub(crate) description: Option<String>,
    pub(crate) default: Option<Value>,
    pub(crate) allowed_values: Vec<Value>,
    pub(crate) allowed_pattern: Option<String>,
    pub(crate) min_value: Option<f64>,
    pub(crate) max_value: Option<f64>,
    pub(crate) constraint_description: Option<String>,
    pub(crate) no_echo: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>, param_type: ParamType) -> Parameter {
        Parameter {
            name: name.into(),
            param_type,
            description: None,
            default: None,
            allowed_values: Vec::new(),
            allowed_pattern: None,
            min_value: None,
            max_value: None,
            constraint_description: None,
            no_echo: false,
        }
    }

    pub fn description(mut self, text: impl Into<String>) -> Parameter {
        self.description = Some(text.into());
        self
    }

    pub fn default(mut self, value: impl Into<Value>) -> Parameter {
        self.default = Some(value.into());
        self
    }

    pub fn allowed_values<V, I>(mut self, values: I) -> Parameter
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        self.allowed_values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn allowed_pattern(mut self, pattern: impl Into<String>) -> Parameter {
        self.allowed_pattern = Some(pattern.into());
        self
    }

    pub fn min_value(mut self, bound: f64) -> Parameter {
        self.min_value = Some(bound);
        self
    }

    pub fn max_value(mut self, bound: f64) -> Parameter {
        self.max_value = Some(bound);
        self
    }

    pub fn constraint_description(mut self, text: impl Into<String>) -> Parameter {
        self.constraint_description = Some(text.into());
        self
    }

    pub fn no_echo(mut self) -> Parameter {
        self.no_echo = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn param_type(&self) -> &ParamType {
        &self.param_type
    }
}

/// What happens to the underlying resource when its declaration is
/// removed from the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionPolicy {
    Delete,
    Retain,
    Snapshot,
}

impl DeletionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeletionPolicy::Delete => "Delete",
            DeletionPolicy::Retain => "Retain",
            DeletionPolicy::Snapshot => "Snapshot",
        }
    }
}

/// A resource declaration: a type tag plus its properties, validated
/// against the schema registry when added to a template.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub(crate) name: String,
    pub(crate) resource_type: String,
    pub(crate) properties: IndexMap<String, Value>,
    pub(crate) depends_on: Vec<String>,
    pub(crate) deletion_policy: Option<DeletionPolicy>,
}

impl Resource {
    pub fn new(name: impl Into<String>, resource_type: impl Into<String>) -> Resource {
        Resource {
            name: name.into(),
            resource_type: resource_type.into(),
            properties: IndexMap::new(),
            depends_on: Vec::new(),
            deletion_policy: None,
        }
    }

    pub fn prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Resource {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Force creation ordering on a sibling resource.
    pub fn depends_on(mut self, target: impl Into<String>) -> Resource {
        self.depends_on.push(target.into());
        self
    }

    pub fn deletion_policy(mut self, policy: DeletionPolicy) -> Resource {
        self.deletion_policy = Some(policy);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}

/// A value exposed outside the document, optionally exported under a
/// cross-stack name.
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    pub(crate) name: String,
    pub(crate) value: Value,
    pub(crate) description: Option<String>,
    pub(crate) export_name: Option<Value>,
}

impl Output {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Output {
        Output {
            name: name.into(),
            value: value.into(),
            description: None,
            export_name: None,
        }
    }

    pub fn description(mut self, text: impl Into<String>) -> Output {
        self.description = Some(text.into());
        self
    }

    pub fn export(mut self, name: impl Into<Value>) -> Output {
        self.export_name = Some(name.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
