use crate::error::GenAiError;
use fresher_fest_core::{ActivityKind, GeneratedContent};
use serde_json::{json, Value};

/// Declarative shape of one output field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSpec {
    /// Required string, must be non-empty after trimming
    NonEmptyString,
    /// Optional string; when present it may not be empty
    OptionalString,
    Bool,
    /// Required integer within the inclusive range
    IntRange { min: i64, max: i64 },
    /// Array of non-empty strings with an inclusive length range
    StringArray { min_len: usize, max_len: usize },
}

impl FieldSpec {
    fn type_name(&self) -> &'static str {
        match self {
            Self::NonEmptyString | Self::OptionalString => "string",
            Self::Bool => "boolean",
            Self::IntRange { .. } => "integer",
            Self::StringArray { .. } => "array of strings",
        }
    }

    fn is_required(&self) -> bool {
        !matches!(self, Self::OptionalString)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("response is not a JSON object")]
    NotAnObject,

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` has the wrong type, expected {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("field `{field}` must not be empty")]
    EmptyField { field: &'static str },

    #[error("field `{field}` has {len} elements, expected between {min} and {max}")]
    BadCardinality {
        field: &'static str,
        len: usize,
        min: usize,
        max: usize,
    },

    #[error("field `{field}` value {value} outside [{min},{max}]")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("validated response failed to decode: {0}")]
    Decode(String),
}

/// Expected response shape for one activity kind.
///
/// Adding a new activity means adding a row to [`OUTPUT_SCHEMAS`] (and a
/// content variant); the validator itself never special-cases kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSchema {
    kind: ActivityKind,
    /// Wire tag of the matching [`GeneratedContent`] variant
    variant: &'static str,
    fields: &'static [(&'static str, FieldSpec)],
}

static OUTPUT_SCHEMAS: &[OutputSchema] = &[
    OutputSchema {
        kind: ActivityKind::Riddle,
        variant: "riddle",
        fields: &[
            ("riddle", FieldSpec::NonEmptyString),
            ("answer", FieldSpec::NonEmptyString),
            ("isAgeAppropriate", FieldSpec::Bool),
        ],
    },
    OutputSchema {
        kind: ActivityKind::IqTest,
        variant: "iqQuestion",
        fields: &[
            ("question", FieldSpec::NonEmptyString),
            ("answer", FieldSpec::NonEmptyString),
            ("explanation", FieldSpec::OptionalString),
        ],
    },
    OutputSchema {
        kind: ActivityKind::TruthOrDare,
        variant: "truthOrDare",
        fields: &[("challenge", FieldSpec::NonEmptyString)],
    },
    OutputSchema {
        kind: ActivityKind::TwoTruthsAndALie,
        variant: "twoTruthsAndALie",
        fields: &[
            (
                "statements",
                FieldSpec::StringArray {
                    min_len: 3,
                    max_len: 3,
                },
            ),
            ("lieIndex", FieldSpec::IntRange { min: 0, max: 2 }),
        ],
    },
    OutputSchema {
        kind: ActivityKind::GuessTheName,
        variant: "guessTheName",
        fields: &[
            ("name", FieldSpec::NonEmptyString),
            ("description", FieldSpec::NonEmptyString),
            (
                "hints",
                FieldSpec::StringArray {
                    min_len: 3,
                    max_len: 3,
                },
            ),
            ("imagePrompt", FieldSpec::NonEmptyString),
        ],
    },
    OutputSchema {
        kind: ActivityKind::RapidFire,
        variant: "rapidFire",
        fields: &[(
            "questions",
            FieldSpec::StringArray {
                min_len: 1,
                max_len: 10,
            },
        )],
    },
    OutputSchema {
        kind: ActivityKind::FlirtQuestion,
        variant: "flirtQuestion",
        fields: &[("question", FieldSpec::NonEmptyString)],
    },
];

/// Look up the declared output shape for an activity kind
pub fn schema_for(kind: ActivityKind) -> Result<&'static OutputSchema, GenAiError> {
    OUTPUT_SCHEMAS
        .iter()
        .find(|schema| schema.kind == kind)
        .ok_or_else(|| GenAiError::Configuration(format!("no output schema for {kind}")))
}

impl OutputSchema {
    pub fn kind(&self) -> ActivityKind {
        self.kind
    }

    /// Structurally validate `raw` and decode it into typed content.
    ///
    /// Presence, type, cardinality and range are checked against the field
    /// table; nothing is accepted partially. Unknown extra fields are
    /// ignored.
    pub fn validate(&self, raw: &Value) -> Result<GeneratedContent, ValidationError> {
        let object = raw.as_object().ok_or(ValidationError::NotAnObject)?;

        for (name, spec) in self.fields {
            let value = match object.get(*name) {
                Some(Value::Null) | None => {
                    if spec.is_required() {
                        return Err(ValidationError::MissingField(name));
                    }
                    continue;
                }
                Some(value) => value,
            };
            check_field(name, *spec, value)?;
        }

        // The raw record is the untagged variant body; wrap it in the
        // variant tag so serde can decode the enum.
        let tagged = json!({ self.variant: raw });
        serde_json::from_value(tagged).map_err(|err| ValidationError::Decode(err.to_string()))
    }

    /// JSON schema descriptor sent to the backend so its own structuring
    /// targets the declared shape
    pub fn to_response_schema(&self) -> Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for (name, spec) in self.fields {
            let descriptor = match spec {
                FieldSpec::NonEmptyString | FieldSpec::OptionalString => {
                    json!({ "type": "STRING" })
                }
                FieldSpec::Bool => json!({ "type": "BOOLEAN" }),
                FieldSpec::IntRange { min, max } => {
                    json!({ "type": "INTEGER", "minimum": min, "maximum": max })
                }
                FieldSpec::StringArray { min_len, max_len } => json!({
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "minItems": min_len,
                    "maxItems": max_len,
                }),
            };
            properties.insert((*name).to_string(), descriptor);
            if spec.is_required() {
                required.push(*name);
            }
        }

        json!({
            "type": "OBJECT",
            "properties": properties,
            "required": required,
        })
    }
}

fn check_field(field: &'static str, spec: FieldSpec, value: &Value) -> Result<(), ValidationError> {
    match spec {
        FieldSpec::NonEmptyString | FieldSpec::OptionalString => {
            let text = value.as_str().ok_or(ValidationError::WrongType {
                field,
                expected: spec.type_name(),
            })?;
            if text.trim().is_empty() {
                return Err(ValidationError::EmptyField { field });
            }
        }
        FieldSpec::Bool => {
            if !value.is_boolean() {
                return Err(ValidationError::WrongType {
                    field,
                    expected: spec.type_name(),
                });
            }
        }
        FieldSpec::IntRange { min, max } => {
            let number = value.as_i64().ok_or(ValidationError::WrongType {
                field,
                expected: spec.type_name(),
            })?;
            if number < min || number > max {
                return Err(ValidationError::OutOfRange {
                    field,
                    value: number,
                    min,
                    max,
                });
            }
        }
        FieldSpec::StringArray { min_len, max_len } => {
            let items = value.as_array().ok_or(ValidationError::WrongType {
                field,
                expected: spec.type_name(),
            })?;
            if items.len() < min_len || items.len() > max_len {
                return Err(ValidationError::BadCardinality {
                    field,
                    len: items.len(),
                    min: min_len,
                    max: max_len,
                });
            }
            for item in items {
                let text = item.as_str().ok_or(ValidationError::WrongType {
                    field,
                    expected: spec.type_name(),
                })?;
                if text.trim().is_empty() {
                    return Err(ValidationError::EmptyField { field });
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_schema() {
        for &kind in ActivityKind::all() {
            assert!(schema_for(kind).is_ok(), "missing schema for {kind}");
        }
    }

    #[test]
    fn test_valid_riddle_decodes() {
        let schema = schema_for(ActivityKind::Riddle).unwrap();
        let raw = json!({
            "riddle": "What has keys but no locks?",
            "answer": "A piano",
            "isAgeAppropriate": true,
        });

        let content = schema.validate(&raw).unwrap();
        assert_eq!(
            content,
            GeneratedContent::Riddle {
                riddle: "What has keys but no locks?".to_string(),
                answer: "A piano".to_string(),
                is_age_appropriate: true,
            }
        );
    }

    #[test]
    fn test_missing_field_rejected() {
        let schema = schema_for(ActivityKind::Riddle).unwrap();
        let raw = json!({ "riddle": "incomplete", "isAgeAppropriate": true });

        assert_eq!(
            schema.validate(&raw),
            Err(ValidationError::MissingField("answer"))
        );
    }

    #[test]
    fn test_empty_string_rejected() {
        let schema = schema_for(ActivityKind::TruthOrDare).unwrap();
        let raw = json!({ "challenge": "   " });

        assert_eq!(
            schema.validate(&raw),
            Err(ValidationError::EmptyField { field: "challenge" })
        );
    }

    #[test]
    fn test_hints_cardinality_enforced() {
        let schema = schema_for(ActivityKind::GuessTheName).unwrap();
        let raw = json!({
            "name": "Eiffel Tower",
            "description": "An iron icon of Paris.",
            "hints": ["In France", "Built in 1889"],
            "imagePrompt": "An impressionist painting of an iron lattice at dusk.",
        });

        assert_eq!(
            schema.validate(&raw),
            Err(ValidationError::BadCardinality {
                field: "hints",
                len: 2,
                min: 3,
                max: 3,
            })
        );
    }

    #[test]
    fn test_lie_index_range_enforced() {
        let schema = schema_for(ActivityKind::TwoTruthsAndALie).unwrap();
        let raw = json!({
            "statements": ["I ran a marathon", "I met a president", "I hate pizza"],
            "lieIndex": 3,
        });

        assert_eq!(
            schema.validate(&raw),
            Err(ValidationError::OutOfRange {
                field: "lieIndex",
                value: 3,
                min: 0,
                max: 2,
            })
        );
    }

    #[test]
    fn test_optional_explanation_may_be_absent() {
        let schema = schema_for(ActivityKind::IqTest).unwrap();
        let raw = json!({ "question": "2, 4, 8, ?", "answer": "16" });

        let content = schema.validate(&raw).unwrap();
        assert_eq!(
            content,
            GeneratedContent::IqQuestion {
                question: "2, 4, 8, ?".to_string(),
                answer: "16".to_string(),
                explanation: None,
            }
        );
    }

    #[test]
    fn test_non_object_rejected() {
        let schema = schema_for(ActivityKind::RapidFire).unwrap();
        assert_eq!(
            schema.validate(&json!(["just", "an", "array"])),
            Err(ValidationError::NotAnObject)
        );
    }

    #[test]
    fn test_wrong_type_rejected() {
        let schema = schema_for(ActivityKind::Riddle).unwrap();
        let raw = json!({ "riddle": "r?", "answer": "a", "isAgeAppropriate": "yes" });

        assert_eq!(
            schema.validate(&raw),
            Err(ValidationError::WrongType {
                field: "isAgeAppropriate",
                expected: "boolean",
            })
        );
    }

    #[test]
    fn test_response_schema_descriptor() {
        let schema = schema_for(ActivityKind::TwoTruthsAndALie).unwrap();
        let descriptor = schema.to_response_schema();

        assert_eq!(descriptor["type"], "OBJECT");
        assert_eq!(descriptor["properties"]["statements"]["type"], "ARRAY");
        assert_eq!(descriptor["properties"]["lieIndex"]["maximum"], 2);
        assert!(descriptor["required"]
            .as_array()
            .unwrap()
            .contains(&json!("statements")));
    }
}
