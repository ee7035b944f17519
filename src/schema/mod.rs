//! Translate tool input schemas into parameter validators.
//!
//! A discovered tool declares its arguments as a JSON-Schema-like object of
//! named properties. Translation builds an immutable rule list over a closed
//! set of primitive kinds; unknown or missing type declarations degrade to an
//! accept-anything rule rather than an error.

use serde_json::Value;

/// Primitive kinds a tool parameter can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
    /// Unknown or missing type declaration; accepts any value.
    Any,
}

impl ParamKind {
    fn from_declared(type_name: Option<&str>) -> Self {
        match type_name {
            Some("string") => Self::String,
            Some("number") => Self::Number,
            Some("integer") => Self::Integer,
            Some("boolean") => Self::Boolean,
            Some("array") => Self::Array,
            Some("object") => Self::Object,
            _ => Self::Any,
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Boolean => value.is_boolean(),
            Self::Array => value.is_array(),
            Self::Object => value.is_object(),
            Self::Any => true,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Any => "any",
        }
    }
}

/// A single named parameter rule.
#[derive(Debug, Clone)]
pub struct ParamRule {
    pub name: String,
    pub kind: ParamKind,
    pub required: bool,
}

/// Validator over a tool's argument object, derived 1:1 from its input schema.
///
/// A validator with no rules accepts only an empty argument set. Extra
/// properties not named by any rule pass through unchecked; the downstream
/// tool may tolerate them.
#[derive(Debug, Clone, Default)]
pub struct ParameterValidator {
    rules: Vec<ParamRule>,
}

impl ParameterValidator {
    pub fn rules(&self) -> &[ParamRule] {
        &self.rules
    }

    /// Check an argument object against the rules.
    ///
    /// Returns `Err(message)` describing the first violation found.
    pub fn validate(&self, args: &Value) -> Result<(), String> {
        if self.rules.is_empty() {
            return match args {
                Value::Null => Ok(()),
                Value::Object(map) if map.is_empty() => Ok(()),
                Value::Object(_) => Err("expected an empty argument object".to_string()),
                other => Err(format!(
                    "expected an empty argument object, got {}",
                    json_type_name(other)
                )),
            };
        }

        let obj = match args {
            Value::Object(map) => map,
            Value::Null => {
                return match self.rules.iter().find(|rule| rule.required) {
                    Some(rule) => Err(format!("missing required field '{}'", rule.name)),
                    None => Ok(()),
                };
            }
            other => {
                return Err(format!(
                    "expected object arguments, got {}",
                    json_type_name(other)
                ));
            }
        };

        for rule in &self.rules {
            match obj.get(&rule.name) {
                Some(value) => {
                    if !rule.kind.matches(value) {
                        return Err(format!(
                            "field '{}' expected type '{}', got {}",
                            rule.name,
                            rule.kind.name(),
                            json_type_name(value)
                        ));
                    }
                }
                None if rule.required => {
                    return Err(format!("missing required field '{}'", rule.name));
                }
                None => {}
            }
        }

        Ok(())
    }
}

/// Returns a human-readable name for the JSON type of a value.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "integer"
            } else {
                "number"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Build a validator from a tool's declared input schema.
///
/// Never fails: a missing schema, a schema without properties, or malformed
/// property declarations all yield a usable validator.
pub fn translate(schema: Option<&Value>) -> ParameterValidator {
    let Some(properties) = schema
        .and_then(|s| s.get("properties"))
        .and_then(Value::as_object)
    else {
        return ParameterValidator::default();
    };

    let required: Vec<&str> = schema
        .and_then(|s| s.get("required"))
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let rules = properties
        .iter()
        .map(|(name, prop)| ParamRule {
            name: name.clone(),
            kind: ParamKind::from_declared(prop.get("type").and_then(Value::as_str)),
            required: required.contains(&name.as_str()),
        })
        .collect();

    ParameterValidator { rules }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn required_string_with_optional_integer() {
        let validator = translate(Some(&json!({
            "type": "object",
            "properties": {
                "a": { "type": "string" },
                "b": { "type": "integer" },
            },
            "required": ["a"],
        })));

        assert!(validator.validate(&json!({ "a": "x" })).is_ok());
        assert!(validator.validate(&json!({ "a": "x", "b": 2 })).is_ok());

        let err = validator.validate(&json!({ "b": 2 })).unwrap_err();
        assert!(err.contains("missing required field 'a'"));
    }

    #[test]
    fn rules_reflect_declared_kinds_and_requiredness() {
        let validator = translate(Some(&json!({
            "properties": {
                "a": { "type": "string" },
                "b": { "type": "integer" },
            },
            "required": ["a"],
        })));

        let rules = validator.rules();
        assert_eq!(rules.len(), 2);
        let a = rules.iter().find(|r| r.name == "a").unwrap();
        assert_eq!(a.kind, ParamKind::String);
        assert!(a.required);
        let b = rules.iter().find(|r| r.name == "b").unwrap();
        assert_eq!(b.kind, ParamKind::Integer);
        assert!(!b.required);
    }

    #[test]
    fn undeclared_type_accepts_any_value() {
        let validator = translate(Some(&json!({
            "type": "object",
            "properties": { "a": { "description": "no type here" } },
        })));

        assert!(validator.validate(&json!({ "a": [1, 2, 3] })).is_ok());
        assert!(validator.validate(&json!({ "a": "text" })).is_ok());
        assert!(validator.validate(&json!({ "a": { "nested": true } })).is_ok());
    }

    #[test]
    fn unrecognized_type_accepts_any_value() {
        let validator = translate(Some(&json!({
            "properties": { "a": { "type": "tuple" } },
        })));

        assert!(validator.validate(&json!({ "a": 3.5 })).is_ok());
    }

    #[test]
    fn missing_schema_accepts_only_empty_arguments() {
        let validator = translate(None);

        assert!(validator.validate(&json!({})).is_ok());
        assert!(validator.validate(&Value::Null).is_ok());
        assert!(validator.validate(&json!({ "extra": 1 })).is_err());
    }

    #[test]
    fn schema_without_properties_accepts_only_empty_arguments() {
        let validator = translate(Some(&json!({ "type": "object" })));

        assert!(validator.validate(&json!({})).is_ok());
        assert!(validator.validate(&json!({ "q": "weather" })).is_err());
    }

    #[test]
    fn rejects_wrong_primitive_types() {
        let validator = translate(Some(&json!({
            "properties": {
                "count": { "type": "integer" },
                "name": { "type": "string" },
                "flag": { "type": "boolean" },
            },
            "required": ["count", "name", "flag"],
        })));

        let err = validator
            .validate(&json!({ "count": "three", "name": "x", "flag": true }))
            .unwrap_err();
        assert!(err.contains("field 'count'"));
        assert!(err.contains("expected type 'integer'"));

        let err = validator
            .validate(&json!({ "count": 3, "name": 9, "flag": true }))
            .unwrap_err();
        assert!(err.contains("expected type 'string'"));

        let err = validator
            .validate(&json!({ "count": 3, "name": "x", "flag": "yes" }))
            .unwrap_err();
        assert!(err.contains("expected type 'boolean'"));
    }

    #[test]
    fn integer_rule_rejects_fractional_number() {
        let validator = translate(Some(&json!({
            "properties": { "count": { "type": "integer" } },
            "required": ["count"],
        })));

        assert!(validator.validate(&json!({ "count": 4 })).is_ok());
        assert!(validator.validate(&json!({ "count": 4.5 })).is_err());
    }

    #[test]
    fn array_and_object_kinds_validate_shape_only() {
        let validator = translate(Some(&json!({
            "properties": {
                "items": { "type": "array" },
                "options": { "type": "object" },
            },
        })));

        assert!(validator
            .validate(&json!({ "items": [1, "two", null], "options": { "deep": [1] } }))
            .is_ok());
        assert!(validator.validate(&json!({ "items": "not a list" })).is_err());
        assert!(validator.validate(&json!({ "options": 7 })).is_err());
    }

    #[test]
    fn extra_properties_pass_through() {
        let validator = translate(Some(&json!({
            "properties": { "q": { "type": "string" } },
            "required": ["q"],
        })));

        assert!(validator
            .validate(&json!({ "q": "weather", "verbose": true }))
            .is_ok());
    }

    #[test]
    fn optional_properties_may_be_omitted() {
        let validator = translate(Some(&json!({
            "properties": {
                "q": { "type": "string" },
                "limit": { "type": "integer" },
            },
            "required": ["q"],
        })));

        assert!(validator.validate(&json!({ "q": "weather" })).is_ok());
    }

    #[test]
    fn malformed_required_entries_are_ignored() {
        let validator = translate(Some(&json!({
            "properties": { "q": { "type": "string" } },
            "required": [42, { "bad": true }],
        })));

        assert!(validator.validate(&json!({})).is_ok());
    }

    #[test]
    fn non_object_arguments_are_rejected_when_rules_exist() {
        let validator = translate(Some(&json!({
            "properties": { "q": { "type": "string" } },
        })));

        let err = validator.validate(&json!("just a string")).unwrap_err();
        assert!(err.contains("expected object arguments"));
    }

    #[test]
    fn null_arguments_pass_when_nothing_is_required() {
        let validator = translate(Some(&json!({
            "properties": { "q": { "type": "string" } },
        })));

        assert!(validator.validate(&Value::Null).is_ok());
    }
}
