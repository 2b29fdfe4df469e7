// Prompt template implementation
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use thiserror::Error;

lazy_static! {
    // `{name}` tokens; anything else in braces is left alone
    static ref PLACEHOLDER: Regex = Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap();
}

// Substitution errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("missing value for template field `{0}`")]
    MissingField(String),
}

// Per-request placeholder values, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    fields: Vec<(String, String)>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `value` to `name`, replacing any earlier binding
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// Static text with `{name}` placeholders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    text: &'static str,
}

impl PromptTemplate {
    pub const fn new(text: &'static str) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Distinct placeholder names in order of first appearance
    pub fn input_variables(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for caps in PLACEHOLDER.captures_iter(self.text) {
            let name = &caps[1];
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }

    /// Replace every placeholder with its bound value in a single pass.
    ///
    /// Every placeholder must be bound; the first unbound one is reported and
    /// nothing is rendered. Braces inside values are copied verbatim.
    pub fn format(&self, fields: &FieldSet) -> Result<String, PromptError> {
        if let Some(missing) = self
            .input_variables()
            .into_iter()
            .find(|name| fields.get(name).is_none())
        {
            return Err(PromptError::MissingField(missing));
        }

        let rendered = PLACEHOLDER.replace_all(self.text, |caps: &Captures| {
            // presence checked above
            fields.get(&caps[1]).unwrap_or_default().to_string()
        });
        Ok(rendered.into_owned())
    }
}

// Comma separated key points as a dash list: "a,b" -> "a\n- b"
pub fn bullet_list(key_points: &str) -> String {
    key_points.split(',').collect::<Vec<_>>().join("\n- ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_replaces_every_occurrence() {
        let template = PromptTemplate::new("Hi {name}, {name} again. Topic: {topic}");
        let fields = FieldSet::new().with("name", "Ada").with("topic", "engines");

        let prompt = template.format(&fields).unwrap();
        assert_eq!(prompt, "Hi Ada, Ada again. Topic: engines");
    }

    #[test]
    fn test_format_without_placeholders() {
        let template = PromptTemplate::new("No tokens here.");
        assert_eq!(template.format(&FieldSet::new()).unwrap(), "No tokens here.");
    }

    #[test]
    fn test_format_missing_field() {
        let template = PromptTemplate::new("To {recipient} about {subject}");
        let fields = FieldSet::new().with("recipient", "Bob");

        let err = template.format(&fields).unwrap_err();
        assert_eq!(err, PromptError::MissingField("subject".to_string()));
        assert!(err.to_string().contains("subject"));
    }

    #[test]
    fn test_format_does_not_expand_values() {
        let template = PromptTemplate::new("A: {a} B: {b}");
        let fields = FieldSet::new().with("a", "{b}").with("b", "x");

        assert_eq!(template.format(&fields).unwrap(), "A: {b} B: x");
    }

    #[test]
    fn test_format_ignores_extra_fields() {
        let template = PromptTemplate::new("{a}");
        let fields = FieldSet::new().with("a", "1").with("unused", "2");

        assert_eq!(template.format(&fields).unwrap(), "1");
    }

    #[test]
    fn test_non_identifier_braces_are_literal() {
        let template = PromptTemplate::new("json: { \"k\": 1 } and {x}");
        assert_eq!(template.input_variables(), vec!["x".to_string()]);

        let prompt = template.format(&FieldSet::new().with("x", "y")).unwrap();
        assert_eq!(prompt, "json: { \"k\": 1 } and y");
    }

    #[test]
    fn test_input_variables_are_distinct_and_ordered() {
        let template = PromptTemplate::new("{b} {a} {b} {c}");
        assert_eq!(template.input_variables(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_field_set_insert_overwrites() {
        let mut fields = FieldSet::new().with("tone", "formal");
        fields.insert("tone", "casual");

        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("tone"), Some("casual"));
        assert_eq!(fields.names().collect::<Vec<_>>(), vec!["tone"]);
    }

    #[test]
    fn test_bullet_list() {
        assert_eq!(bullet_list("a,b,c"), "a\n- b\n- c");
        assert_eq!(bullet_list("met yesterday,send proposal"), "met yesterday\n- send proposal");
        assert_eq!(bullet_list("single"), "single");
        // items are not trimmed
        assert_eq!(bullet_list("a, b"), "a\n-  b");
    }
}
