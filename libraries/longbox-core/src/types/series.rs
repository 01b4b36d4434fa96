//! Series types

use crate::error::Result;
use crate::validate::RequiredFields;
use serde::{Deserialize, Serialize};

pub type SeriesId = i64;

/// A series; owns the issues nested under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct Series {
    pub id: SeriesId,
    pub name: String,
    pub description: String,
}

/// Series fields as submitted by a client
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeriesDraft {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// A validated series, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSeries {
    pub name: String,
    pub description: String,
}

impl SeriesDraft {
    pub fn validate(self) -> Result<NewSeries> {
        let mut fields = RequiredFields::new("series");
        let name = fields.text("name", self.name);
        let description = fields.text("description", self.description);

        match (name, description) {
            (Some(name), Some(description)) => Ok(NewSeries { name, description }),
            _ => Err(fields.into_error()),
        }
    }
}
