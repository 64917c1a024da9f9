// Author: Dustin Pilgrim
// License: MIT

use serde_json::json;

use crate::declaration::{Output, Parameter, Resource};
use crate::error::CumulusError;
use crate::expr::Expr;
use crate::template::Template;
use crate::utils;
use crate::value::Value;

/// Render a template to its canonical JSON form.
///
/// Every reference target in the document is checked first; the error
/// carries the complete list of dangling targets rather than the first
/// one found. Nothing is emitted on failure.
pub fn render_json(template: &Template) -> Result<String, CumulusError> {
    let dangling = collect_dangling(template);
    if !dangling.is_empty() {
        return Err(CumulusError::UnresolvedReference {
            references: dangling,
            hint: Some(
                "Reference targets must be declared parameters, resources, or AWS pseudo parameters"
                    .into(),
            ),
            code: Some(420),
        });
    }
    Ok(serde_json::to_string_pretty(&template_to_json(template)).unwrap())
}

/// Top-level sections in fixed order: format version, description,
/// parameters, mappings, resources, outputs.
pub fn template_to_json(template: &Template) -> serde_json::Value {
    let mut top = serde_json::Map::new();

    if let Some(version) = &template.format_version {
        top.insert("AWSTemplateFormatVersion".into(), json!(version));
    }
    if let Some(description) = &template.description {
        top.insert("Description".into(), json!(description));
    }

    if !template.parameters.is_empty() {
        let parameters = template
            .parameters
            .iter()
            .map(|(name, p)| (name.clone(), parameter_to_json(p)))
            .collect::<serde_json::Map<_, _>>();
        top.insert("Parameters".into(), serde_json::Value::Object(parameters));
    }

    if !template.mappings.is_empty() {
        let mappings = template
            .mappings
            .iter()
            .map(|(name, table)| (name.clone(), value_to_json(table)))
            .collect::<serde_json::Map<_, _>>();
        top.insert("Mappings".into(), serde_json::Value::Object(mappings));
    }

    let resources = template
        .resources
        .iter()
        .map(|(name, r)| (name.clone(), resource_to_json(r)))
        .collect::<serde_json::Map<_, _>>();
    top.insert("Resources".into(), serde_json::Value::Object(resources));

    if !template.outputs.is_empty() {
        let outputs = template
            .outputs
            .iter()
            .map(|(name, o)| (name.clone(), output_to_json(o)))
            .collect::<serde_json::Map<_, _>>();
        top.insert("Outputs".into(), serde_json::Value::Object(outputs));
    }

    serde_json::Value::Object(top)
}

fn parameter_to_json(param: &Parameter) -> serde_json::Value {
    let mut entry = serde_json::Map::new();
    entry.insert("Type".into(), json!(param.param_type.type_string()));
    if let Some(description) = &param.description {
        entry.insert("Description".into(), json!(description));
    }
    if let Some(default) = &param.default {
        entry.insert("Default".into(), value_to_json(default));
    }
    if !param.allowed_values.is_empty() {
        entry.insert(
            "AllowedValues".into(),
            serde_json::Value::Array(param.allowed_values.iter().map(value_to_json).collect()),
        );
    }
    if let Some(pattern) = &param.allowed_pattern {
        entry.insert("AllowedPattern".into(), json!(pattern));
    }
    if let Some(min) = param.min_value {
        entry.insert("MinValue".into(), number_to_json(min));
    }
    if let Some(max) = param.max_value {
        entry.insert("MaxValue".into(), number_to_json(max));
    }
    if let Some(text) = &param.constraint_description {
        entry.insert("ConstraintDescription".into(), json!(text));
    }
    if param.no_echo {
        entry.insert("NoEcho".into(), json!(true));
    }
    serde_json::Value::Object(entry)
}

fn resource_to_json(resource: &Resource) -> serde_json::Value {
    let mut entry = serde_json::Map::new();
    entry.insert("Type".into(), json!(resource.resource_type));
    match resource.depends_on.as_slice() {
        [] => {}
        [single] => {
            entry.insert("DependsOn".into(), json!(single));
        }
        many => {
            entry.insert("DependsOn".into(), json!(many));
        }
    }
    if let Some(policy) = resource.deletion_policy {
        entry.insert("DeletionPolicy".into(), json!(policy.as_str()));
    }
    if !resource.properties.is_empty() {
        let properties = resource
            .properties
            .iter()
            .map(|(name, v)| (name.clone(), value_to_json(v)))
            .collect::<serde_json::Map<_, _>>();
        entry.insert("Properties".into(), serde_json::Value::Object(properties));
    }
    serde_json::Value::Object(entry)
}

fn output_to_json(output: &Output) -> serde_json::Value {
    let mut entry = serde_json::Map::new();
    if let Some(description) = &output.description {
        entry.insert("Description".into(), json!(description));
    }
    entry.insert("Value".into(), value_to_json(&output.value));
    if let Some(export_name) = &output.export_name {
        entry.insert("Export".into(), json!({ "Name": value_to_json(export_name) }));
    }
    serde_json::Value::Object(entry)
}

/// Convert a property value to JSON, substituting the canonical intrinsic
/// form for each expression.
pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::String(s) => json!(s),
        Value::Number(n) => number_to_json(*n),
        Value::Bool(b) => json!(b),
        Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(value_to_json).collect())
        }
        Value::Object(items) => serde_json::Value::Object(
            items
                .iter()
                .map(|(k, v)| (k.clone(), value_to_json(v)))
                .collect(),
        ),
        Value::Expr(expr) => expr_to_json(expr),
    }
}

fn expr_to_json(expr: &Expr) -> serde_json::Value {
    match expr {
        Expr::Ref(target) => json!({ "Ref": target }),
        Expr::GetAtt { target, attribute } => {
            json!({ "Fn::GetAtt": [target, attribute] })
        }
        Expr::Join { separator, parts } => {
            let parts: Vec<serde_json::Value> = parts.iter().map(value_to_json).collect();
            json!({ "Fn::Join": [separator, parts] })
        }
        Expr::Sub(template) => json!({ "Fn::Sub": template }),
        Expr::Select { index, source } => {
            json!({ "Fn::Select": [index, value_to_json(source)] })
        }
        Expr::Split { separator, source } => {
            json!({ "Fn::Split": [separator, value_to_json(source)] })
        }
        Expr::ImportValue(name) => json!({ "Fn::ImportValue": value_to_json(name) }),
        Expr::Base64(inner) => json!({ "Fn::Base64": value_to_json(inner) }),
        Expr::GetAzs(region) => json!({ "Fn::GetAZs": region }),
        Expr::FindInMap {
            map,
            top_key,
            second_key,
        } => {
            json!({ "Fn::FindInMap": [map, value_to_json(top_key), value_to_json(second_key)] })
        }
    }
}

/// Integral numbers print as JSON integers so `Port: 3000` does not come
/// out as `3000.0`.
fn number_to_json(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        json!(n as i64)
    } else {
        json!(n)
    }
}

/// One linear sweep over every reference position in the document,
/// gathering dangling targets in first-occurrence order.
fn collect_dangling(template: &Template) -> Vec<String> {
    let mut dangling: Vec<String> = Vec::new();

    for resource in template.resources.values() {
        for value in resource.properties.values() {
            walk_value(template, value, &mut dangling);
        }
        for dep in &resource.depends_on {
            if !template.resources.contains_key(dep) {
                note(&mut dangling, dep);
            }
        }
    }
    for output in template.outputs.values() {
        walk_value(template, &output.value, &mut dangling);
        if let Some(export_name) = &output.export_name {
            walk_value(template, export_name, &mut dangling);
        }
    }

    dangling
}

fn walk_value(template: &Template, value: &Value, dangling: &mut Vec<String>) {
    match value {
        Value::Array(items) => {
            for item in items {
                walk_value(template, item, dangling);
            }
        }
        Value::Object(items) => {
            for item in items.values() {
                walk_value(template, item, dangling);
            }
        }
        Value::Expr(expr) => walk_expr(template, expr, dangling),
        Value::String(_) | Value::Number(_) | Value::Bool(_) => {}
    }
}

fn walk_expr(template: &Template, expr: &Expr, dangling: &mut Vec<String>) {
    match expr {
        Expr::Ref(target) => check_target(template, target, dangling),
        Expr::GetAtt { target, .. } => check_target(template, target, dangling),
        Expr::Join { parts, .. } => {
            for part in parts {
                walk_value(template, part, dangling);
            }
        }
        Expr::Sub(text) => {
            for target in utils::sub_local_targets(text) {
                check_target(template, &target, dangling);
            }
        }
        Expr::Select { source, .. } => walk_value(template, source, dangling),
        Expr::Split { source, .. } => walk_value(template, source, dangling),
        // The imported name itself lives in another stack; anything local
        // embedded in the name expression still resolves here.
        Expr::ImportValue(name) => walk_value(template, name, dangling),
        Expr::Base64(inner) => walk_value(template, inner, dangling),
        Expr::GetAzs(_) => {}
        Expr::FindInMap {
            map,
            top_key,
            second_key,
        } => {
            if !template.mappings.contains_key(map) {
                note(dangling, map);
            }
            walk_value(template, top_key, dangling);
            walk_value(template, second_key, dangling);
        }
    }
}

fn check_target(template: &Template, target: &str, dangling: &mut Vec<String>) {
    if utils::is_pseudo_parameter(target)
        || template.parameters.contains_key(target)
        || template.resources.contains_key(target)
    {
        return;
    }
    note(dangling, target);
}

fn note(dangling: &mut Vec<String>, target: &str) {
    if !dangling.iter().any(|t| t == target) {
        dangling.push(target.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::{Output, ParamType, Parameter, Resource};
    use crate::template::Template;

    fn jenkins_template() -> Template {
        let mut t = Template::new();
        t.set_description("HelloWorld web application").unwrap();

        t.add_parameter(
            Parameter::new("KeyPair", ParamType::aws("AWS::EC2::KeyPair::KeyName"))
                .description("Name of an existing EC2 KeyPair to SSH")
                .constraint_description("must be the name of an existing EC2 KeyPair."),
        )
        .unwrap();

        t.add_resource(
            Resource::new("SecurityGroup", "AWS::EC2::SecurityGroup")
                .prop("GroupDescription", "Allow SSH and TCP/8080 access")
                .prop(
                    "SecurityGroupIngress",
                    vec![
                        Value::object([
                            ("IpProtocol", Value::from("tcp")),
                            ("FromPort", Value::from("22")),
                            ("ToPort", Value::from("22")),
                            ("CidrIp", Value::from("203.0.113.42/32")),
                        ]),
                        Value::object([
                            ("IpProtocol", Value::from("tcp")),
                            ("FromPort", Value::from("8080")),
                            ("ToPort", Value::from("8080")),
                            ("CidrIp", Value::from("0.0.0.0/0")),
                        ]),
                    ],
                ),
        )
        .unwrap();

        t.add_resource(
            Resource::new("instance", "AWS::EC2::Instance")
                .prop("ImageId", "ami-a4c7edb2")
                .prop("InstanceType", "t2.micro")
                .prop("SecurityGroups", vec![Expr::reference("SecurityGroup")])
                .prop("KeyName", Expr::reference("KeyPair"))
                .prop(
                    "UserData",
                    Expr::base64(Expr::join(
                        "\n",
                        vec!["#!/bin/bash", "yum install --enablerepo=epel -y git"],
                    )),
                ),
        )
        .unwrap();

        t.add_output(
            Output::new("InstancePublicIp", Expr::get_att("instance", "PublicIp"))
                .description("Public IP of our instance."),
        )
        .unwrap();
        t.add_output(
            Output::new(
                "WebUrl",
                Expr::join(
                    "",
                    vec![
                        Value::from("http://"),
                        Value::Expr(Expr::get_att("instance", "PublicDnsName")),
                        Value::from(":8080"),
                    ],
                ),
            )
            .description("Application endpoint"),
        )
        .unwrap();

        t
    }

    #[test]
    fn test_section_order_is_fixed() {
        let mut t = jenkins_template();
        t.set_version(crate::template::FORMAT_VERSION).unwrap();
        let doc = template_to_json(&t);
        let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            ["AWSTemplateFormatVersion", "Description", "Parameters", "Resources", "Outputs"]
        );
    }

    #[test]
    fn test_jenkins_document_shape() {
        let mut t = jenkins_template();
        let text = t.to_json().unwrap();
        let doc: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(
            doc["Parameters"]["KeyPair"]["Type"],
            "AWS::EC2::KeyPair::KeyName"
        );
        assert_eq!(
            doc["Resources"]["instance"]["Properties"]["KeyName"],
            json!({ "Ref": "KeyPair" })
        );
        assert_eq!(
            doc["Resources"]["instance"]["Properties"]["UserData"]["Fn::Base64"]["Fn::Join"][0],
            "\n"
        );
        assert_eq!(
            doc["Outputs"]["InstancePublicIp"]["Value"],
            json!({ "Fn::GetAtt": ["instance", "PublicIp"] })
        );

        // Every declared name appears exactly once as a key.
        for name in ["KeyPair", "SecurityGroup", "instance", "InstancePublicIp", "WebUrl"] {
            let count = text.matches(&format!("\"{}\":", name)).count();
            assert_eq!(count, 1, "expected one key occurrence of {}", name);
        }
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let first = jenkins_template().to_json().unwrap();
        let second = jenkins_template().to_json().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resource_without_properties_omits_section() {
        let mut t = Template::new();
        t.add_resource(Resource::new("ECSCluster", "AWS::ECS::Cluster"))
            .unwrap();
        let doc: serde_json::Value = serde_json::from_str(&t.to_json().unwrap()).unwrap();
        assert_eq!(doc["Resources"]["ECSCluster"], json!({ "Type": "AWS::ECS::Cluster" }));
    }

    #[test]
    fn test_depends_on_and_deletion_policy_forms() {
        let mut t = Template::new();
        t.add_resource(
            Resource::new("S3Bucket", "AWS::S3::Bucket")
                .deletion_policy(crate::declaration::DeletionPolicy::Retain),
        )
        .unwrap();
        t.add_resource(
            Resource::new("TargetGroup", "AWS::ElasticLoadBalancingV2::TargetGroup")
                .prop("Port", 3000)
                .prop("Protocol", "HTTP")
                .depends_on("S3Bucket"),
        )
        .unwrap();

        let doc: serde_json::Value = serde_json::from_str(&t.to_json().unwrap()).unwrap();
        assert_eq!(doc["Resources"]["S3Bucket"]["DeletionPolicy"], "Retain");
        // A single dependency serializes as a bare string.
        assert_eq!(doc["Resources"]["TargetGroup"]["DependsOn"], "S3Bucket");
        assert_eq!(doc["Resources"]["TargetGroup"]["Properties"]["Port"], 3000);
    }

    #[test]
    fn test_export_and_import_forms() {
        let mut t = Template::new();
        t.add_resource(Resource::new("ECSCluster", "AWS::ECS::Cluster")).unwrap();
        t.add_output(
            Output::new("Cluster", Expr::reference("ECSCluster"))
                .description("ECS Cluster Name")
                .export(Expr::sub("${AWS::StackName}-id")),
        )
        .unwrap();

        let doc: serde_json::Value = serde_json::from_str(&t.to_json().unwrap()).unwrap();
        assert_eq!(
            doc["Outputs"]["Cluster"]["Export"],
            json!({ "Name": { "Fn::Sub": "${AWS::StackName}-id" } })
        );
    }

    #[test]
    fn test_mapping_section_and_find_in_map() {
        let mut t = Template::new();
        t.add_mapping(
            "RegionMap",
            Value::object([(
                "us-east-1",
                Value::object([("AMI", Value::from("ami-a4c7edb2"))]),
            )]),
        )
        .unwrap();
        t.add_resource(
            Resource::new("instance", "AWS::EC2::Instance").prop(
                "ImageId",
                Expr::find_in_map("RegionMap", Expr::reference("AWS::Region"), "AMI"),
            ),
        )
        .unwrap();

        let doc: serde_json::Value = serde_json::from_str(&t.to_json().unwrap()).unwrap();
        assert_eq!(doc["Mappings"]["RegionMap"]["us-east-1"]["AMI"], "ami-a4c7edb2");
        assert_eq!(
            doc["Resources"]["instance"]["Properties"]["ImageId"]["Fn::FindInMap"][0],
            "RegionMap"
        );
    }

    #[test]
    fn test_integral_numbers_print_as_integers() {
        assert_eq!(number_to_json(3000.0), json!(3000));
        assert_eq!(number_to_json(0.5), json!(0.5));
        assert_eq!(number_to_json(-2.0), json!(-2));
    }
}
