//! Artist types

use crate::error::Result;
use crate::validate::RequiredFields;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type ArtistId = i64;

/// An artist as stored in the catalog
///
/// Artists are never removed. Retiring one clears `is_currently_employed`,
/// which keeps the row available as a reference target for issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub date_of_birth: String,
    pub biography: String,
    #[serde(with = "employment_flag")]
    pub is_currently_employed: bool,
}

/// Artist fields as submitted by a client, before validation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistDraft {
    pub name: Option<String>,
    pub date_of_birth: Option<String>,
    pub biography: Option<String>,
    /// Accepts `0`/`1` as well as `false`/`true`
    pub is_currently_employed: Option<Value>,
}

/// A validated artist, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArtist {
    pub name: String,
    pub date_of_birth: String,
    pub biography: String,
    pub is_currently_employed: bool,
}

impl ArtistDraft {
    /// Check required fields and resolve the employment flag
    ///
    /// The artist stays employed unless the draft explicitly says `0` or `false`.
    pub fn validate(self) -> Result<NewArtist> {
        let mut fields = RequiredFields::new("artist");
        let name = fields.text("name", self.name);
        let date_of_birth = fields.text("dateOfBirth", self.date_of_birth);
        let biography = fields.text("biography", self.biography);

        match (name, date_of_birth, biography) {
            (Some(name), Some(date_of_birth), Some(biography)) => Ok(NewArtist {
                name,
                date_of_birth,
                biography,
                is_currently_employed: employment_flag::from_value(
                    self.is_currently_employed.as_ref(),
                ),
            }),
            _ => Err(fields.into_error()),
        }
    }
}

/// Stored as an INTEGER column, so it travels as `1`/`0` on the wire
mod employment_flag {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn from_value(value: Option<&Value>) -> bool {
        match value {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::Number(n)) => n.as_f64() != Some(0.0),
            _ => true,
        }
    }

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(employed: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*employed))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(from_value(Some(&value)))
    }
}
