// Author: Dustin Pilgrim
// License: MIT

use crate::value::Value;

/// An intrinsic expression: a symbolic, lazily-resolved pointer from one
/// declaration's property to another declaration or to template-level
/// machinery (joins, substitutions, cross-stack imports).
///
/// Constructing an expression never checks that its target exists, so a
/// resource may refer to a declaration added later in the same template.
/// Targets are resolved in one pass when the template is exported.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `{"Ref": "Target"}` — the value of a parameter or resource, or of
    /// an `AWS::*` pseudo parameter.
    Ref(String),
    /// `{"Fn::GetAtt": ["Target", "Attribute"]}`
    GetAtt { target: String, attribute: String },
    /// `{"Fn::Join": [separator, [parts...]]}`
    Join { separator: String, parts: Vec<Value> },
    /// `{"Fn::Sub": "text with ${Placeholder}s"}`
    Sub(String),
    /// `{"Fn::Select": [index, source]}`
    Select { index: u32, source: Box<Value> },
    /// `{"Fn::Split": [separator, source]}`
    Split { separator: String, source: Box<Value> },
    /// `{"Fn::ImportValue": name}` — a value published by another stack.
    /// Never resolved locally.
    ImportValue(Box<Value>),
    /// `{"Fn::Base64": value}`
    Base64(Box<Value>),
    /// `{"Fn::GetAZs": region}` — empty region means the current one.
    GetAzs(String),
    /// `{"Fn::FindInMap": [map, top_key, second_key]}`
    FindInMap {
        map: String,
        top_key: Box<Value>,
        second_key: Box<Value>,
    },
}

impl Expr {
    pub fn reference(target: impl Into<String>) -> Expr {
        Expr::Ref(target.into())
    }

    pub fn get_att(target: impl Into<String>, attribute: impl Into<String>) -> Expr {
        Expr::GetAtt {
            target: target.into(),
            attribute: attribute.into(),
        }
    }

    pub fn join<V, I>(separator: impl Into<String>, parts: I) -> Expr
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Expr::Join {
            separator: separator.into(),
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }

    pub fn sub(template: impl Into<String>) -> Expr {
        Expr::Sub(template.into())
    }

    pub fn select(index: u32, source: impl Into<Value>) -> Expr {
        Expr::Select {
            index,
            source: Box::new(source.into()),
        }
    }

    pub fn split(separator: impl Into<String>, source: impl Into<Value>) -> Expr {
        Expr::Split {
            separator: separator.into(),
            source: Box::new(source.into()),
        }
    }

    pub fn import_value(name: impl Into<Value>) -> Expr {
        Expr::ImportValue(Box::new(name.into()))
    }

    pub fn base64(value: impl Into<Value>) -> Expr {
        Expr::Base64(Box::new(value.into()))
    }

    pub fn get_azs(region: impl Into<String>) -> Expr {
        Expr::GetAzs(region.into())
    }

    pub fn find_in_map(
        map: impl Into<String>,
        top_key: impl Into<Value>,
        second_key: impl Into<Value>,
    ) -> Expr {
        Expr::FindInMap {
            map: map.into(),
            top_key: Box::new(top_key.into()),
            second_key: Box::new(second_key.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::value_to_json;
    use serde_json::json;

    #[test]
    fn test_ref_and_get_att_forms() {
        let r = value_to_json(&Value::Expr(Expr::reference("SecurityGroup")));
        assert_eq!(r, json!({ "Ref": "SecurityGroup" }));

        let g = value_to_json(&Value::Expr(Expr::get_att("instance", "PublicIp")));
        assert_eq!(g, json!({ "Fn::GetAtt": ["instance", "PublicIp"] }));
    }

    #[test]
    fn test_join_nests_expressions() {
        let url = Expr::join(
            "",
            vec![
                Value::from("http://"),
                Value::Expr(Expr::get_att("LoadBalancer", "DNSName")),
                Value::from(":3000"),
            ],
        );
        assert_eq!(
            value_to_json(&Value::Expr(url)),
            json!({ "Fn::Join": ["", [
                "http://",
                { "Fn::GetAtt": ["LoadBalancer", "DNSName"] },
                ":3000"
            ]]})
        );
    }

    #[test]
    fn test_import_chain_form() {
        // Subnets=Split(',', ImportValue(Join('-', [Select(0, Split('-', Ref(...))), "suffix"])))
        let inner = Expr::join(
            "-",
            vec![
                Value::Expr(Expr::select(
                    0,
                    Expr::split("-", Expr::reference("AWS::StackName")),
                )),
                Value::from("cluster-public-subnets"),
            ],
        );
        let subnets = Expr::split(",", Expr::import_value(inner));
        assert_eq!(
            value_to_json(&Value::Expr(subnets)),
            json!({ "Fn::Split": [",", { "Fn::ImportValue": { "Fn::Join": ["-", [
                { "Fn::Select": [0, { "Fn::Split": ["-", { "Ref": "AWS::StackName" }] }] },
                "cluster-public-subnets"
            ]]}}]})
        );
    }

    #[test]
    fn test_base64_sub_and_get_azs() {
        let ud = Expr::base64(Expr::join("\n", vec!["#!/bin/bash", "yum install -y git"]));
        assert_eq!(
            value_to_json(&Value::Expr(ud)),
            json!({ "Fn::Base64": { "Fn::Join": ["\n", ["#!/bin/bash", "yum install -y git"] ] } })
        );

        assert_eq!(
            value_to_json(&Value::Expr(Expr::sub("10.${ClassB}.0.0/16"))),
            json!({ "Fn::Sub": "10.${ClassB}.0.0/16" })
        );

        assert_eq!(
            value_to_json(&Value::Expr(Expr::get_azs(""))),
            json!({ "Fn::GetAZs": "" })
        );
    }

    #[test]
    fn test_find_in_map_form() {
        let v = Expr::find_in_map("RegionMap", Expr::reference("AWS::Region"), "AMI");
        assert_eq!(
            value_to_json(&Value::Expr(v)),
            json!({ "Fn::FindInMap": ["RegionMap", { "Ref": "AWS::Region" }, "AMI"] })
        );
    }
}
