use std::fmt;

/// The main error type for template building and serialization.
#[derive(Debug, Clone, PartialEq)]
pub enum CumulusError {
    /// Raised when a declaration name collides with one already in the
    /// same namespace.
    DuplicateName {
        name: String,
        kind: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a resource type tag is absent from the schema registry.
    UnknownResourceType {
        name: String,
        resource_type: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a required property is missing from a resource.
    MissingRequiredProperty {
        name: String,
        resource_type: String,
        property: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised for properties outside the schema, values of the wrong
    /// shape, or parameter constraints inconsistent with their type.
    InvalidProperty {
        name: String,
        property: String,
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised for logical IDs that are not purely alphanumeric.
    InvalidName {
        name: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised at serialization time, carrying every dangling reference
    /// target found in the document.
    UnresolvedReference {
        references: Vec<String>,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a template is mutated or serialized again after a
    /// successful serialization.
    AlreadySerialized {
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl fmt::Display for CumulusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CumulusError::DuplicateName { name, kind, hint, code } =>
                write!(f, "[CUMULUS] Duplicate {} name '{}'{}{}",
                    kind, name,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            CumulusError::UnknownResourceType { name, resource_type, hint, code } =>
                write!(f, "[CUMULUS] Unknown resource type '{}' for '{}'{}{}",
                    resource_type, name,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            CumulusError::MissingRequiredProperty { name, resource_type, property, hint, code } =>
                write!(f, "[CUMULUS] Missing required property '{}' on '{}' ({}){}{}",
                    property, name, resource_type,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            CumulusError::InvalidProperty { name, property, message, hint, code } =>
                write!(f, "[CUMULUS] Invalid property '{}' on '{}': {}{}{}",
                    property, name, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            CumulusError::InvalidName { name, hint, code } =>
                write!(f, "[CUMULUS] Invalid logical name '{}'{}{}",
                    name,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            CumulusError::UnresolvedReference { references, hint, code } =>
                write!(f, "[CUMULUS] Unresolved reference{} to: {}{}{}",
                    if references.len() != 1 { "s" } else { "" },
                    references.join(", "),
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            CumulusError::AlreadySerialized { hint, code } =>
                write!(f, "[CUMULUS] Template already serialized{}{}",
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
        }
    }
}

impl std::error::Error for CumulusError {}
