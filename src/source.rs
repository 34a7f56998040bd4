//! Inline participant data carried on the card's `data-participants` attribute.
//!
//! Decoding never fails outward: bad data is reported as
//! [`InlineParticipants::Unreadable`] and the renderer falls back to the
//! fallback table, exactly as it does for [`InlineParticipants::Absent`].

use serde_json::Value;

use crate::participant::Participant;

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

/// Why an inline payload could not be used.
#[derive(Debug, thiserror::Error)]
pub enum InlineDataError {
    /// The attribute is not valid JSON.
    #[error("inline participant data is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Valid JSON, but not an array.
    #[error("inline participant data is not a JSON array")]
    NotASequence,
}

/// Outcome of reading the inline attribute.
#[derive(Debug)]
pub enum InlineParticipants {
    /// Decoded list, possibly empty.
    Parsed(Vec<Participant>),
    /// Attribute missing or empty.
    Absent,
    /// Attribute present but unusable.
    Unreadable(InlineDataError),
}

impl InlineParticipants {
    /// Decode a raw attribute value.
    pub fn from_attr(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => Self::Absent,
            Some(json) => match decode(json) {
                Ok(list) => Self::Parsed(list),
                Err(err) => Self::Unreadable(err),
            },
        }
    }

    /// The decoded list, or `None` when the fallback path must be taken.
    pub fn into_list(self) -> Option<Vec<Participant>> {
        match self {
            Self::Parsed(list) => Some(list),
            Self::Absent | Self::Unreadable(_) => None,
        }
    }
}

fn decode(json: &str) -> Result<Vec<Participant>, InlineDataError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(items) = value else {
        return Err(InlineDataError::NotASequence);
    };
    Ok(items.iter().map(Participant::from_value).collect())
}
