//! Declarative config schema
//!
//! A schema is a table of field descriptors. [`ConfigSchema::validate`] fills in
//! defaults for absent keys and checks every supplied value against the field's
//! kind and constraints.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

use super::error::{ConfigError, Result};

/// Value kind and constraints of a single field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    /// Free-form string, or one of `choices` when non-empty
    String { choices: Vec<String> },
    /// Integer within `min..=max`
    Integer { min: i64, max: i64 },
    Boolean,
}

impl FieldKind {
    fn expected(&self) -> &'static str {
        match self {
            FieldKind::String { .. } => "a string",
            FieldKind::Integer { .. } => "an integer",
            FieldKind::Boolean => "a boolean",
        }
    }

    /// Value of the serialized `type` tag
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::String { .. } => "string",
            FieldKind::Integer { .. } => "integer",
            FieldKind::Boolean => "boolean",
        }
    }

    /// Human-readable constraint summary, empty when unconstrained
    pub fn constraints(&self) -> String {
        match self {
            FieldKind::String { choices } if !choices.is_empty() => {
                format!("one of: {}", choices.join(", "))
            }
            FieldKind::Integer { min, max } => format!("{}-{}", min, max),
            _ => String::new(),
        }
    }
}

/// Descriptor for one configuration field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub description: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    pub default: Value,
}

impl FieldSpec {
    pub fn string(name: &str, default: &str) -> Self {
        Self::new(
            name,
            FieldKind::String {
                choices: Vec::new(),
            },
            Value::from(default),
        )
    }

    pub fn integer(name: &str, default: i64, min: i64, max: i64) -> Self {
        Self::new(name, FieldKind::Integer { min, max }, Value::from(default))
    }

    pub fn boolean(name: &str, default: bool) -> Self {
        Self::new(name, FieldKind::Boolean, Value::from(default))
    }

    fn new(name: &str, kind: FieldKind, default: Value) -> Self {
        Self {
            name: name.to_string(),
            label: name.to_string(),
            description: String::new(),
            kind,
            default,
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Restrict a string field to a fixed set of values. No-op for other kinds.
    pub fn choices(mut self, values: &[&str]) -> Self {
        if let FieldKind::String { choices } = &mut self.kind {
            *choices = values.iter().map(|v| v.to_string()).collect();
        }
        self
    }

    /// Check a supplied value against this field's kind and constraints
    pub fn check(&self, value: &Value) -> Result<()> {
        let type_error = || ConfigError::InvalidType {
            field: self.name.clone(),
            expected: self.kind.expected(),
        };

        match &self.kind {
            FieldKind::String { choices } => {
                let s = value.as_str().ok_or_else(type_error)?;
                if !choices.is_empty() && !choices.iter().any(|c| c == s) {
                    return Err(ConfigError::InvalidChoice {
                        field: self.name.clone(),
                        value: s.to_string(),
                        choices: choices.join(", "),
                    });
                }
            }
            FieldKind::Integer { min, max } => {
                let n = value.as_i64().ok_or_else(type_error)?;
                if n < *min || n > *max {
                    return Err(ConfigError::OutOfRange {
                        field: self.name.clone(),
                        value: n,
                        min: *min,
                        max: *max,
                    });
                }
            }
            FieldKind::Boolean => {
                value.as_bool().ok_or_else(type_error)?;
            }
        }
        Ok(())
    }
}

/// Ordered table of field descriptors
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSchema {
    fields: Vec<FieldSpec>,
}

impl ConfigSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Effective values when nothing is configured
    pub fn defaults(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.default.clone()))
            .collect()
    }

    /// Validate `values` and return the complete effective map.
    ///
    /// Keys that are not part of the schema are ignored.
    pub fn validate(&self, values: &Map<String, Value>) -> Result<Map<String, Value>> {
        for key in values.keys() {
            if self.field(key).is_none() {
                warn!("Ignoring unknown config key '{}'", key);
            }
        }

        let mut effective = Map::new();
        for field in &self.fields {
            let value = match values.get(&field.name) {
                Some(value) => {
                    field.check(value)?;
                    value.clone()
                }
                None => field.default.clone(),
            };
            effective.insert(field.name.clone(), value);
        }
        Ok(effective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> ConfigSchema {
        ConfigSchema::new(vec![
            FieldSpec::string("flavor", "plain").choices(&["plain", "spicy"]),
            FieldSpec::integer("count", 3, 1, 10),
            FieldSpec::boolean("enabled", false),
        ])
    }

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_validate_empty_returns_defaults() {
        let effective = schema().validate(&Map::new()).unwrap();
        assert_eq!(effective, schema().defaults());
        assert_eq!(effective["count"], json!(3));
    }

    #[test]
    fn test_validate_keeps_supplied_values() {
        let effective = schema()
            .validate(&map(json!({"flavor": "spicy", "enabled": true})))
            .unwrap();
        assert_eq!(effective["flavor"], json!("spicy"));
        assert_eq!(effective["enabled"], json!(true));
        assert_eq!(effective["count"], json!(3));
    }

    #[test]
    fn test_validate_rejects_unknown_choice() {
        let err = schema()
            .validate(&map(json!({"flavor": "sweet"})))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidChoice { .. }));
        assert_eq!(err.field(), Some("flavor"));
        assert!(err.to_string().contains("plain, spicy"));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        for bad in [0, 11, -4] {
            let err = schema()
                .validate(&map(json!({ "count": bad })))
                .unwrap_err();
            assert!(matches!(err, ConfigError::OutOfRange { .. }), "{bad}");
        }
        assert!(schema().validate(&map(json!({"count": 10}))).is_ok());
        assert!(schema().validate(&map(json!({"count": 1}))).is_ok());
    }

    #[test]
    fn test_validate_rejects_wrong_types() {
        let err = schema()
            .validate(&map(json!({"count": "3"})))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidType { .. }));

        let err = schema()
            .validate(&map(json!({"count": 2.5})))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidType { .. }));

        let err = schema()
            .validate(&map(json!({"enabled": "yes"})))
            .unwrap_err();
        assert!(err.to_string().contains("a boolean"));
    }

    #[test]
    fn test_validate_ignores_unknown_keys() {
        let effective = schema()
            .validate(&map(json!({"mystery": 42})))
            .unwrap();
        assert!(!effective.contains_key("mystery"));
    }

    #[test]
    fn test_constraints_summary() {
        let s = schema();
        assert_eq!(s.field("flavor").unwrap().kind.constraints(), "one of: plain, spicy");
        assert_eq!(s.field("count").unwrap().kind.constraints(), "1-10");
        assert_eq!(s.field("enabled").unwrap().kind.constraints(), "");
    }
}
