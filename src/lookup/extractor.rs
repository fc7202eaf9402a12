use serde_json::{Map, Value};

use crate::domain::{AnswerField, ProductResult};
use crate::error::{LookupError, Result};

/// Answer fields recovered from model output, not yet tied to a search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedAnswer {
    result: ProductResult,
}

impl ExtractedAnswer {
    pub fn get(&self, field: AnswerField) -> &str {
        self.result.get(field)
    }

    pub fn into_result(mut self, search_term: impl Into<String>) -> ProductResult {
        self.result.search_term = search_term.into();
        self.result
    }
}

/// Parses the span between the first `{` and the last `}` of `text`.
///
/// The span is greedy: trailing prose containing braces is swallowed and makes the
/// parse fail rather than being trimmed away.
pub fn extract_answer(text: &str) -> Result<ExtractedAnswer> {
    let t = text.trim().trim_matches(|c| c == '\u{feff}');

    let (Some(start), Some(end)) = (t.find('{'), t.rfind('}')) else {
        return Err(LookupError::MalformedAnswer(
            "no JSON object found in model output".to_string(),
        ));
    };
    if end < start {
        return Err(LookupError::MalformedAnswer(
            "no JSON object found in model output".to_string(),
        ));
    }

    let object: Map<String, Value> = serde_json::from_str(&t[start..=end])
        .map_err(|err| LookupError::MalformedAnswer(err.to_string()))?;

    Ok(answer_from_object(&object))
}

fn answer_from_object(object: &Map<String, Value>) -> ExtractedAnswer {
    let mut result = ProductResult::unanswered(String::new());
    for field in AnswerField::all() {
        let value = object
            .get(field.key())
            .and_then(scalar_text)
            .unwrap_or_else(|| field.default_value().to_string());
        result.set(*field, value);
    }
    ExtractedAnswer { result }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
