//! Issue types

use super::{ArtistId, SeriesId};
use crate::error::Result;
use crate::validate::RequiredFields;
use serde::{Deserialize, Serialize};

pub type IssueId = i64;

/// A single issue of a series, drawn by one artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct Issue {
    pub id: IssueId,
    pub name: String,
    pub issue_number: i64,
    pub publication_date: String,
    pub artist_id: ArtistId,
    pub series_id: SeriesId,
}

/// Issue fields as submitted by a client
///
/// There is deliberately no `series_id`: the owning series always comes
/// from the collection the issue is created under.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDraft {
    pub name: Option<String>,
    pub issue_number: Option<i64>,
    pub publication_date: Option<String>,
    pub artist_id: Option<ArtistId>,
}

/// A validated issue bound to its series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    pub name: String,
    pub issue_number: i64,
    pub publication_date: String,
    pub artist_id: ArtistId,
    pub series_id: SeriesId,
}

impl IssueDraft {
    /// Check field presence only; whether `artist_id` resolves is the store's call
    pub fn validate(self, series_id: SeriesId) -> Result<NewIssue> {
        let mut fields = RequiredFields::new("issue");
        let name = fields.text("name", self.name);
        let issue_number = fields.number("issueNumber", self.issue_number);
        let publication_date = fields.text("publicationDate", self.publication_date);
        let artist_id = fields.number("artistId", self.artist_id);

        match (name, issue_number, publication_date, artist_id) {
            (Some(name), Some(issue_number), Some(publication_date), Some(artist_id)) => {
                Ok(NewIssue {
                    name,
                    issue_number,
                    publication_date,
                    artist_id,
                    series_id,
                })
            }
            _ => Err(fields.into_error()),
        }
    }
}
