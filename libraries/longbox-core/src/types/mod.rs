mod artist;
mod issue;
mod series;

pub use artist::{Artist, ArtistDraft, ArtistId, NewArtist};
pub use issue::{Issue, IssueDraft, IssueId, NewIssue};
pub use series::{NewSeries, Series, SeriesDraft, SeriesId};
