// Field-level validation for incoming form data
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("{0}")]
    TooShort(&'static str),

    #[error("Invalid {field}. Expected one of: {expected}")]
    InvalidOption {
        field: &'static str,
        expected: &'static str,
    },
}

// Structural check: the field must be present in the body
pub fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, ValidationError> {
    value.as_deref().ok_or(ValidationError::MissingField(field))
}

// Length is counted in characters, not bytes
pub fn min_length(value: &str, min: usize, message: &'static str) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        return Err(ValidationError::TooShort(message));
    }
    Ok(())
}

// Present and at least `min` characters long
pub fn required_min<'a>(
    value: &'a Option<String>,
    field: &'static str,
    min: usize,
    message: &'static str,
) -> Result<&'a str, ValidationError> {
    let value = required(value, field)?;
    min_length(value, min, message)?;
    Ok(value)
}

// Purpose of a generated email
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Purpose {
    #[serde(rename = "Meeting Request")]
    MeetingRequest,
    #[serde(rename = "Follow Up")]
    FollowUp,
    #[serde(rename = "Thank You")]
    ThankYou,
}

impl Purpose {
    pub fn as_str(self) -> &'static str {
        match self {
            Purpose::MeetingRequest => "Meeting Request",
            Purpose::FollowUp => "Follow Up",
            Purpose::ThankYou => "Thank You",
        }
    }
}

impl FromStr for Purpose {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Meeting Request" => Ok(Purpose::MeetingRequest),
            "Follow Up" => Ok(Purpose::FollowUp),
            "Thank You" => Ok(Purpose::ThankYou),
            _ => Err(ValidationError::InvalidOption {
                field: "purpose",
                expected: "'Meeting Request' | 'Follow Up' | 'Thank You'",
            }),
        }
    }
}

// Target tone for conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Formal,
    Casual,
    Friendly,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
        }
    }
}

impl FromStr for Tone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "formal" => Ok(Tone::Formal),
            "casual" => Ok(Tone::Casual),
            "friendly" => Ok(Tone::Friendly),
            _ => Err(ValidationError::InvalidOption {
                field: "tone",
                expected: "'formal' | 'casual' | 'friendly'",
            }),
        }
    }
}
