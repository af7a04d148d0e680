//! Best-effort extraction of a JSON object embedded in free-text model
//! output. Scans for the outermost braces and parses the inclusive
//! substring; anything else is a typed error for the route layer.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no JSON object found in model output")]
    NoJsonObject,
    #[error("failed to parse JSON from model output: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn extract_json_object(raw: &str) -> Result<Value, ExtractError> {
    let start = raw.find('{').ok_or(ExtractError::NoJsonObject)?;
    let end = raw.rfind('}').ok_or(ExtractError::NoJsonObject)?;
    if end < start {
        return Err(ExtractError::NoJsonObject);
    }

    Ok(serde_json::from_str(&raw[start..=end])?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strips_prose_around_the_object() {
        let raw = "Sure, here are your cards:\n\
                   {\"flashcards\": [{\"question\": \"Q\", \"answer\": \"A\"}]}\n\
                   Let me know if you need more!";
        let value = extract_json_object(raw).unwrap();
        assert_eq!(value, json!({"flashcards": [{"question": "Q", "answer": "A"}]}));
    }

    #[test]
    fn passes_through_a_bare_object() {
        let value = extract_json_object("{\"quiz\": []}").unwrap();
        assert_eq!(value, json!({"quiz": []}));
    }

    #[test]
    fn missing_braces_is_no_json_object() {
        assert!(matches!(
            extract_json_object("I cannot produce a quiz for that."),
            Err(ExtractError::NoJsonObject)
        ));
    }

    #[test]
    fn closing_brace_before_opening_is_no_json_object() {
        assert!(matches!(
            extract_json_object("} nothing useful {"),
            Err(ExtractError::NoJsonObject)
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            extract_json_object("prefix {\"quiz\": [} suffix"),
            Err(ExtractError::Parse(_))
        ));
    }
}
