use once_cell::sync::Lazy;
use regex::Regex;

static LOGICAL_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

static SUB_PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

/// Logical IDs must be alphanumeric, per the CloudFormation grammar.
pub fn is_valid_logical_id(name: &str) -> bool {
    LOGICAL_ID_RE.is_match(name)
}

/// `AWS::StackName`, `AWS::Region` and friends resolve outside the
/// document.
pub fn is_pseudo_parameter(name: &str) -> bool {
    name.starts_with("AWS::")
}

/// Extract the local names a `Fn::Sub` template refers to.
///
/// Pseudo parameters and `${!escaped}` literals are skipped; an
/// `${Target.Attribute}` placeholder contributes its target segment.
pub fn sub_local_targets(template: &str) -> Vec<String> {
    let mut out = Vec::new();
    for cap in SUB_PLACEHOLDER_RE.captures_iter(template) {
        let inner = cap[1].trim();
        if inner.starts_with('!') || is_pseudo_parameter(inner) {
            continue;
        }
        let target = inner.split('.').next().unwrap_or(inner);
        if !target.is_empty() {
            out.push(target.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_id_grammar() {
        assert!(is_valid_logical_id("PublicSubnetA"));
        assert!(is_valid_logical_id("ELBHTTP5xxs"));
        assert!(!is_valid_logical_id("load-balancer"));
        assert!(!is_valid_logical_id("my_instance"));
        assert!(!is_valid_logical_id(""));
    }

    #[test]
    fn test_sub_targets_skip_pseudo_and_escapes() {
        let targets = sub_local_targets("${AWS::StackName}-${ClassB}-${!raw}");
        assert_eq!(targets, ["ClassB"]);
    }

    #[test]
    fn test_sub_targets_attribute_form() {
        let targets = sub_local_targets("arn is ${Role.Arn}");
        assert_eq!(targets, ["Role"]);
    }
}
