use regex::Regex;

use super::*;
use crate::declaration::ParamType;
use crate::schema::PropShape;
use crate::utils;

impl Template {
    pub(crate) fn ensure_open(&self) -> Result<(), CumulusError> {
        if self.serialized {
            return Err(CumulusError::AlreadySerialized {
                hint: Some("Build a new Template instead of reusing a serialized one".into()),
                code: Some(430),
            });
        }
        Ok(())
    }

    pub(crate) fn ensure_logical_id(&self, name: &str) -> Result<(), CumulusError> {
        if !utils::is_valid_logical_id(name) {
            return Err(CumulusError::InvalidName {
                name: name.to_string(),
                hint: Some("Logical names may only contain letters and digits".into()),
                code: Some(414),
            });
        }
        Ok(())
    }

    /// Parameters and resources share one namespace.
    pub(crate) fn ensure_fresh_name(&self, name: &str) -> Result<(), CumulusError> {
        let taken_as = if self.parameters.contains_key(name) {
            Some("parameter")
        } else if self.resources.contains_key(name) {
            Some("resource")
        } else {
            None
        };
        if let Some(kind) = taken_as {
            return Err(CumulusError::DuplicateName {
                name: name.to_string(),
                kind: kind.to_string(),
                hint: Some("Parameters and resources share the template's name namespace".into()),
                code: Some(410),
            });
        }
        Ok(())
    }

    pub(crate) fn ensure_fresh_export(&self, output: &Output) -> Result<(), CumulusError> {
        let Some(export_name) = &output.export_name else {
            return Ok(());
        };
        for existing in self.outputs.values() {
            if existing.export_name.as_ref() == Some(export_name) {
                return Err(CumulusError::DuplicateName {
                    name: crate::export::value_to_json(export_name).to_string(),
                    kind: "export".into(),
                    hint: Some(format!(
                        "Output '{}' already exports this name",
                        existing.name
                    )),
                    code: Some(410),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn validate_parameter(&self, param: &Parameter) -> Result<(), CumulusError> {
        let numeric = param.param_type.is_numeric();

        if !numeric {
            for (property, bound) in [("MinValue", param.min_value), ("MaxValue", param.max_value)]
            {
                if bound.is_some() {
                    return Err(invalid_property(
                        &param.name,
                        property,
                        format!(
                            "numeric bounds only apply to Number parameters, not {}",
                            param.param_type.type_string()
                        ),
                    ));
                }
            }
        }
        if let (Some(min), Some(max)) = (param.min_value, param.max_value)
            && min > max
        {
            return Err(invalid_property(
                &param.name,
                "MinValue",
                format!("lower bound {} exceeds upper bound {}", min, max),
            ));
        }

        let pattern = match &param.allowed_pattern {
            Some(_) if !param.param_type.is_string_like() => {
                return Err(invalid_property(
                    &param.name,
                    "AllowedPattern",
                    format!(
                        "patterns only apply to string parameters, not {}",
                        param.param_type.type_string()
                    ),
                ));
            }
            Some(p) => Some(Regex::new(p).map_err(|e| {
                invalid_property(&param.name, "AllowedPattern", format!("invalid pattern: {}", e))
            })?),
            None => None,
        };

        for allowed in &param.allowed_values {
            self.check_parameter_literal(param, "AllowedValues", allowed)?;
        }

        if let Some(default) = &param.default {
            self.check_parameter_literal(param, "Default", default)?;
            if !param.allowed_values.is_empty() && !param.allowed_values.contains(default) {
                return Err(invalid_property(
                    &param.name,
                    "Default",
                    "default is not one of the allowed values".to_string(),
                ));
            }
            if let Some(n) = parameter_numeric_value(default) {
                if let Some(min) = param.min_value
                    && n < min
                {
                    return Err(invalid_property(
                        &param.name,
                        "Default",
                        format!("default {} is below MinValue {}", n, min),
                    ));
                }
                if let Some(max) = param.max_value
                    && n > max
                {
                    return Err(invalid_property(
                        &param.name,
                        "Default",
                        format!("default {} is above MaxValue {}", n, max),
                    ));
                }
            }
            if let (Some(re), Value::String(s)) = (&pattern, default)
                && !re.is_match(s)
            {
                return Err(invalid_property(
                    &param.name,
                    "Default",
                    format!("default '{}' does not match the allowed pattern", s),
                ));
            }
        }

        Ok(())
    }

    /// Defaults and allowed values are literals of the declared type.
    /// Number parameters also accept numeric strings, the way published
    /// templates write `"Default": "0"`.
    fn check_parameter_literal(
        &self,
        param: &Parameter,
        property: &str,
        value: &Value,
    ) -> Result<(), CumulusError> {
        let ok = match &param.param_type {
            ParamType::Number => parameter_numeric_value(value).is_some(),
            ParamType::String | ParamType::Aws(_) => matches!(value, Value::String(_)),
            ParamType::CommaDelimitedList | ParamType::AwsList(_) => {
                matches!(value, Value::String(_) | Value::Array(_))
            }
        };
        if !ok {
            return Err(invalid_property(
                &param.name,
                property,
                format!(
                    "expected a {} literal, got {}",
                    param.param_type.type_string(),
                    kind_name(value)
                ),
            ));
        }
        Ok(())
    }

    pub(crate) fn validate_resource(&self, resource: &Resource) -> Result<(), CumulusError> {
        let Some(spec) = self.registry.lookup(&resource.resource_type) else {
            return Err(CumulusError::UnknownResourceType {
                name: resource.name.clone(),
                resource_type: resource.resource_type.clone(),
                hint: Some("Register the type in a SchemaRegistry passed to Template::with_registry".into()),
                code: Some(411),
            });
        };

        for required in spec.required_properties() {
            if !resource.properties.contains_key(required) {
                return Err(CumulusError::MissingRequiredProperty {
                    name: resource.name.clone(),
                    resource_type: resource.resource_type.clone(),
                    property: required.to_string(),
                    hint: None,
                    code: Some(412),
                });
            }
        }

        for (property, value) in &resource.properties {
            let Some(prop_spec) = spec.property(property) else {
                return Err(invalid_property(
                    &resource.name,
                    property,
                    format!("not in the schema for {}", resource.resource_type),
                ));
            };
            if !shape_matches(prop_spec.shape, value) {
                return Err(invalid_property(
                    &resource.name,
                    property,
                    format!(
                        "expected {} value, got {}",
                        shape_name(prop_spec.shape),
                        kind_name(value)
                    ),
                ));
            }
        }

        Ok(())
    }

    /// A mapping is a two-level table of literal leaves.
    pub(crate) fn validate_mapping(&self, name: &str, table: &Value) -> Result<(), CumulusError> {
        let Some(top) = table.as_object() else {
            return Err(invalid_property(
                name,
                "Mapping",
                format!("expected an object of objects, got {}", kind_name(table)),
            ));
        };
        for (top_key, second) in top {
            if second.as_object().is_none() {
                return Err(invalid_property(
                    name,
                    top_key,
                    format!("mapping entries must be objects, got {}", kind_name(second)),
                ));
            }
        }
        Ok(())
    }
}

fn invalid_property(name: &str, property: &str, message: String) -> CumulusError {
    CumulusError::InvalidProperty {
        name: name.to_string(),
        property: property.to_string(),
        message,
        hint: None,
        code: Some(413),
    }
}

/// An intrinsic expression satisfies any declared shape.
fn shape_matches(shape: PropShape, value: &Value) -> bool {
    if matches!(value, Value::Expr(_)) {
        return true;
    }
    match shape {
        PropShape::Scalar => {
            matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_))
        }
        PropShape::List => matches!(value, Value::Array(_)),
        PropShape::Object => matches!(value, Value::Object(_)),
    }
}

fn shape_name(shape: PropShape) -> &'static str {
    match shape {
        PropShape::Scalar => "a scalar",
        PropShape::List => "a list",
        PropShape::Object => "an object",
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "a string",
        Value::Number(_) => "a number",
        Value::Bool(_) => "a boolean",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
        Value::Expr(_) => "an expression",
    }
}

fn parameter_numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => Some(*n),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
