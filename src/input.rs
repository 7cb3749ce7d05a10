//! Raw input classification and parsing.
//!
//! `validate` is a pure function: same raw text and type always give the
//! same result, no side effects, callable on every keystroke. The surface
//! shape check (`shape_matches`) and the deep parse are independent — a
//! bracketed string that fails to parse is a user input error, never a
//! parser crash.

use crate::value::{InputType, TypedValue};
use serde::Serialize;
use serde_json::Value;

const INVALID_LIST: &str = "Invalid array format. Please check your input.";
const INVALID_MAPPING: &str = "Invalid object format. Please check your input.";

/// Outcome of classifying raw text against a declared input type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed: Option<TypedValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationResult {
    fn ok(parsed: TypedValue) -> Self {
        Self { is_valid: true, parsed: Some(parsed), message: None }
    }

    fn invalid(message: &str) -> Self {
        Self { is_valid: false, parsed: None, message: Some(message.to_string()) }
    }
}

/// Per-type format guide shown next to the input box.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InputGuide {
    pub example: &'static str,
    pub description: &'static str,
}

static TEXT_GUIDE: InputGuide = InputGuide {
    example: "\"Hello World\" or \"Any text in quotes\"",
    description: "Simple text. Can include letters, numbers, and special characters.",
};

static LIST_GUIDE: InputGuide = InputGuide {
    example: "[\"apple\", \"banana\", \"orange\"] or [1, 2, 3]",
    description: "A list of items separated by commas, enclosed in square brackets. All items should be of the same type.",
};

static MAPPING_GUIDE: InputGuide = InputGuide {
    example: "{\"name\": \"John\", \"age\": 30}",
    description: "Key-value pairs enclosed in curly braces. Keys must be strings, values can be any type.",
};

pub fn guide_for(ty: InputType) -> &'static InputGuide {
    match ty {
        InputType::Text => &TEXT_GUIDE,
        InputType::List => &LIST_GUIDE,
        InputType::Mapping => &MAPPING_GUIDE,
    }
}

/// Cheap surface check: does the trimmed raw text have the delimiters the
/// type expects? Presentation uses this live; `validate` uses it as the
/// first gate before attempting a parse.
pub fn shape_matches(raw: &str, ty: InputType) -> bool {
    let trimmed = raw.trim();
    match ty {
        InputType::Text => true,
        InputType::List => trimmed.starts_with('[') && trimmed.ends_with(']'),
        InputType::Mapping => trimmed.starts_with('{') && trimmed.ends_with('}'),
    }
}

/// Classify and parse raw text against the declared input type.
///
/// Text is always valid and kept verbatim, not even trimmed. Lists and
/// mappings must pass the shape check and then a structured parse; a parse
/// that yields the wrong container kind is rejected too (an array literal
/// would satisfy a generic object parse and must be excluded explicitly).
pub fn validate(raw: &str, ty: InputType) -> ValidationResult {
    match ty {
        InputType::Text => ValidationResult::ok(TypedValue::Text(raw.to_string())),
        InputType::List => {
            if !shape_matches(raw, ty) {
                return ValidationResult::invalid(INVALID_LIST);
            }
            match serde_json::from_str::<Value>(raw.trim()) {
                Ok(Value::Array(items)) => ValidationResult::ok(TypedValue::List(items)),
                _ => ValidationResult::invalid(INVALID_LIST),
            }
        }
        InputType::Mapping => {
            if !shape_matches(raw, ty) {
                return ValidationResult::invalid(INVALID_MAPPING);
            }
            match serde_json::from_str::<Value>(raw.trim()) {
                Ok(Value::Object(map)) => ValidationResult::ok(TypedValue::Mapping(map)),
                _ => ValidationResult::invalid(INVALID_MAPPING),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn text_is_always_valid_and_verbatim() {
        for raw in ["", "hello", "  spaced  ", "[1,2]", "{\"a\":1}"] {
            let result = validate(raw, InputType::Text);
            assert!(result.is_valid);
            assert_eq!(result.parsed, Some(TypedValue::Text(raw.to_string())));
            assert_eq!(result.message, None);
        }
    }

    #[test]
    fn well_formed_list_parses() {
        let result = validate("[1,2,3]", InputType::List);
        assert!(result.is_valid);
        assert_eq!(
            result.parsed,
            Some(TypedValue::List(vec![json!(1), json!(2), json!(3)]))
        );
    }

    #[test]
    fn truncated_list_reports_array_message() {
        let result = validate("[1,2", InputType::List);
        assert!(!result.is_valid);
        assert_eq!(result.message.as_deref(), Some(INVALID_LIST));
    }

    #[test]
    fn bracketed_but_unparsable_list_is_an_input_error() {
        // Shape check passes, deep parse fails; still a user-facing message.
        let result = validate("[1, oops]", InputType::List);
        assert!(!result.is_valid);
        assert_eq!(result.message.as_deref(), Some(INVALID_LIST));
    }

    #[test]
    fn wrong_delimiters_fail_the_list_shape_check() {
        assert!(!validate("{}", InputType::List).is_valid);
        assert!(!shape_matches("{}", InputType::List));
    }

    #[test]
    fn well_formed_mapping_parses() {
        let result = validate("{\"a\":1}", InputType::Mapping);
        assert!(result.is_valid);
        let parsed = match result.parsed {
            Some(TypedValue::Mapping(map)) => map,
            other => panic!("expected mapping, got {other:?}"),
        };
        assert_eq!(parsed.get("a"), Some(&json!(1)));
    }

    #[test]
    fn array_input_is_rejected_for_mapping() {
        let result = validate("[1,2]", InputType::Mapping);
        assert!(!result.is_valid);
        assert_eq!(result.message.as_deref(), Some(INVALID_MAPPING));
    }

    #[test]
    fn surrounding_whitespace_is_tolerated_for_structured_input() {
        assert!(validate("  [1, 2]  ", InputType::List).is_valid);
        assert!(validate("\n{\"a\": 1}\n", InputType::Mapping).is_valid);
    }

    #[test]
    fn every_type_has_a_format_guide() {
        for ty in InputType::ALL {
            let guide = guide_for(ty);
            assert!(!guide.example.is_empty());
            assert!(!guide.description.is_empty());
        }
    }

    #[test]
    fn validate_is_idempotent() {
        let a = validate("[3,1,2]", InputType::List);
        let b = validate("[3,1,2]", InputType::List);
        assert_eq!(a, b);
    }
}
