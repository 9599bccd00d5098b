//! Required-field validation for write requests.
//!
//! Write payloads are decoded into input types whose fields are all optional.
//! [`Validate::validate`] turns such an input into the complete record fields,
//! or into the list of *every* field that was missing or blank.

use serde::{Deserialize, Deserializer, Serialize};

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn missing(field: &'static str) -> Self {
        Self {
            field,
            message: "this field is required".to_string(),
        }
    }
}

/// Non-empty list of field errors produced by one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|e| e.field)
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}

impl core::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let fields = self.fields().collect::<Vec<_>>();
        write!(f, "missing or empty field(s): {}", fields.join(", "))
    }
}

/// Conversion from a loosely-typed write payload into validated record fields.
pub trait Validate {
    type Output;

    fn validate(self) -> Result<Self::Output, ValidationErrors>;
}

/// Accumulates field errors while the caller pulls values out of an input.
///
/// Missing values are replaced by a placeholder so extraction can continue and
/// report every failing field; [`FieldChecker::finish`] discards the partial
/// result when anything failed.
#[derive(Debug, Default)]
pub struct FieldChecker {
    errors: Vec<FieldError>,
}

impl FieldChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Required string: absent, empty, or whitespace-only is rejected.
    ///
    /// Accepted values are returned untouched (no trimming).
    pub fn text(&mut self, field: &'static str, value: Option<String>) -> String {
        match value {
            Some(v) if !v.trim().is_empty() => v,
            _ => {
                self.errors.push(FieldError::missing(field));
                String::new()
            }
        }
    }

    /// Required non-string value: only absence (or JSON `null`) is rejected.
    pub fn value<T: Default>(&mut self, field: &'static str, value: Option<T>) -> T {
        match value {
            Some(v) => v,
            None => {
                self.errors.push(FieldError::missing(field));
                T::default()
            }
        }
    }

    pub fn finish<T>(self, output: T) -> Result<T, ValidationErrors> {
        if self.errors.is_empty() {
            Ok(output)
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Int(i64),
}

/// Accepts `"1960"` as well as `1960` for text columns that hold numbers.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Int(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checker_collects_every_missing_field() {
        let mut checker = FieldChecker::new();
        let a = checker.text("a", None);
        let b = checker.text("b", Some("   ".to_string()));
        let c = checker.text("c", Some("ok".to_string()));
        let d: i32 = checker.value("d", None);

        let err = checker.finish((a, b, c, d)).unwrap_err();
        assert_eq!(err.fields().collect::<Vec<_>>(), vec!["a", "b", "d"]);
        assert_eq!(err.to_string(), "missing or empty field(s): a, b, d");
    }

    #[test]
    fn checker_keeps_values_verbatim() {
        let mut checker = FieldChecker::new();
        let a = checker.text("a", Some(" padded ".to_string()));
        let n = checker.value("n", Some(0));
        assert_eq!(checker.finish((a, n)).unwrap(), (" padded ".to_string(), 0));
    }

    #[test]
    fn errors_serialize_as_plain_list() {
        let mut checker = FieldChecker::new();
        checker.text("email", None);
        let err = checker.finish(()).unwrap_err();
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            serde_json::json!([{ "field": "email", "message": "this field is required" }])
        );
    }
}
