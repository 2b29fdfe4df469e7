// Fixed prompt templates, one per use case
use serde::{Deserialize, Serialize};
use std::fmt;

use super::template::PromptTemplate;

pub const EMAIL_TEMPLATE: &str = "You are a professional email writer. Generate a formal email with these details:
- Recipient: {recipientName}
- Purpose: {purpose}
- Key Points: {keyPoints}

Guidelines:
1. Use proper email structure with subject, greeting, body, and closing
2. Maintain professional tone
3. Keep paragraphs concise
4. Don't use markdown formatting
5. Use proper line breaks between sections

Your response should ONLY contain the raw email text without any additional formatting.";

pub const TONE_CONVERTER_TEMPLATE: &str = "You are an expert email tone converter. Convert the following email to a {tone} tone while maintaining its meaning and key points.

Original Email:
{emailText}

Converted Email:";

pub const COLD_EMAIL_TEMPLATE: &str = "Generate a personalized cold email with the following details:
- Recipient: {recipientName} at {recipientCompany}
- Sender: {yourName} from {yourCompany}
- Product/Service: {productService}
- Key Benefits: {keyBenefits}
- Call to Action: {callToAction}

The email should be professional, engaging, and tailored to the recipient.";

pub const SUBJECT_LINE_TEMPLATE: &str = "Generate 5 catchy and effective subject lines for an email with the following description:
{description}

Subject Lines:
1.
2.
3.
4.
5.";

// Supported use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UseCase {
    Email,
    ToneConversion,
    ColdEmail,
    SubjectLines,
}

impl UseCase {
    pub const ALL: [UseCase; 4] = [
        UseCase::Email,
        UseCase::ToneConversion,
        UseCase::ColdEmail,
        UseCase::SubjectLines,
    ];

    pub fn key(self) -> &'static str {
        match self {
            UseCase::Email => "email",
            UseCase::ToneConversion => "tone-conversion",
            UseCase::ColdEmail => "cold-email",
            UseCase::SubjectLines => "subject-lines",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|use_case| use_case.key() == key)
    }

    pub fn template(self) -> PromptTemplate {
        match self {
            UseCase::Email => PromptTemplate::new(EMAIL_TEMPLATE),
            UseCase::ToneConversion => PromptTemplate::new(TONE_CONVERTER_TEMPLATE),
            UseCase::ColdEmail => PromptTemplate::new(COLD_EMAIL_TEMPLATE),
            UseCase::SubjectLines => PromptTemplate::new(SUBJECT_LINE_TEMPLATE),
        }
    }

    /// Message returned to the caller when this use case fails
    pub fn failure_message(self) -> &'static str {
        match self {
            UseCase::Email => "Failed to generate email. Please try again.",
            UseCase::ToneConversion => "Failed to convert email tone. Please try again.",
            UseCase::ColdEmail => "Failed to generate cold email. Please try again.",
            UseCase::SubjectLines => "Failed to generate subject lines. Please try again.",
        }
    }
}

impl fmt::Display for UseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::FieldSet;

    fn required_fields(use_case: UseCase) -> Vec<&'static str> {
        match use_case {
            UseCase::Email => vec!["recipientName", "purpose", "keyPoints"],
            UseCase::ToneConversion => vec!["tone", "emailText"],
            UseCase::ColdEmail => vec![
                "recipientName",
                "recipientCompany",
                "yourName",
                "yourCompany",
                "productService",
                "keyBenefits",
                "callToAction",
            ],
            UseCase::SubjectLines => vec!["description"],
        }
    }

    #[test]
    fn test_templates_declare_expected_fields() {
        for use_case in UseCase::ALL {
            assert_eq!(
                use_case.template().input_variables(),
                required_fields(use_case),
                "fields of {}",
                use_case
            );
        }
    }

    #[test]
    fn test_full_field_set_leaves_no_tokens() {
        for use_case in UseCase::ALL {
            let fields = required_fields(use_case)
                .into_iter()
                .fold(FieldSet::new(), |set, name| set.with(name, format!("<{}>", name)));

            let prompt = use_case.template().format(&fields).unwrap();
            assert!(!prompt.contains('{'), "{} left a token: {}", use_case, prompt);
            for name in required_fields(use_case) {
                assert!(prompt.contains(&format!("<{}>", name)));
            }
        }
    }

    #[test]
    fn test_dropping_any_field_is_reported() {
        for use_case in UseCase::ALL {
            let names = required_fields(use_case);
            for skipped in &names {
                let fields = names
                    .iter()
                    .filter(|name| *name != skipped)
                    .fold(FieldSet::new(), |set, name| set.with(*name, "value"));

                let err = use_case.template().format(&fields).unwrap_err();
                assert_eq!(err.to_string(), format!("missing value for template field `{}`", skipped));
            }
        }
    }

    #[test]
    fn test_use_case_keys_round_trip() {
        for use_case in UseCase::ALL {
            assert_eq!(UseCase::from_key(use_case.key()), Some(use_case));
        }
        assert_eq!(UseCase::from_key("newsletter"), None);
    }
}
