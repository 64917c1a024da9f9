use indexmap::IndexMap;

use crate::expr::Expr;

/// A property value inside a template declaration.
///
/// Literal values map straight onto JSON; [`Value::Expr`] holds an
/// intrinsic expression that is resolved when the template is exported.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
    Bool(bool),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
    Expr(Expr),
}

impl Value {
    /// Build an ordered object value from key/value pairs.
    pub fn object<K, V, I>(pairs: I) -> Value
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Object(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a CloudFormation tag list: `[{"Key": ..., "Value": ...}, ...]`.
    pub fn tags<K, V, I>(pairs: I) -> Value
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Array(
            pairs
                .into_iter()
                .map(|(k, v)| {
                    Value::object([("Key", Value::from(k.into())), ("Value", v.into())])
                })
                .collect(),
        )
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        if let Value::Object(items) = self {
            Some(items)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        if let Value::Number(n) = self {
            Some(*n)
        } else {
            None
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Expr> for Value {
    fn from(e: Expr) -> Self {
        Value::Expr(e)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_conversions() {
        assert_eq!(Value::from("ami-a4c7edb2"), Value::String("ami-a4c7edb2".into()));
        assert_eq!(Value::from(3000), Value::Number(3000.0));
        assert_eq!(Value::from(true), Value::Bool(true));

        let list = Value::from(vec!["a", "b"]);
        assert_eq!(
            list,
            Value::Array(vec![Value::String("a".into()), Value::String("b".into())])
        );
    }

    #[test]
    fn test_object_preserves_insertion_order() {
        let obj = Value::object([("IpProtocol", "tcp"), ("CidrIp", "0.0.0.0/0")]);
        let keys: Vec<&String> = obj.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["IpProtocol", "CidrIp"]);
    }

    #[test]
    fn test_tag_list_shape() {
        let tags = Value::tags([("Name", Value::from(Expr::reference("AWS::StackName")))]);
        match tags {
            Value::Array(entries) => {
                let entry = entries[0].as_object().unwrap();
                assert_eq!(entry.get("Key").and_then(Value::as_str), Some("Name"));
                assert!(matches!(entry.get("Value"), Some(Value::Expr(_))));
            }
            other => panic!("Expected Value::Array, got {:?}", other),
        }
    }
}
