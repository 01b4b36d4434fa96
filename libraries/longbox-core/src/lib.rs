//! Longbox Core
//!
//! Domain types, validation, and error handling for the Longbox comic catalog.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Artist`, `Series`, `Issue` and the drafts clients submit
//! - **Validation**: turning drafts into checked `New*` records
//! - **Core Trait**: `CatalogStore`, implemented by `longbox-storage`
//! - **Error Handling**: Unified `CatalogError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use longbox_core::types::ArtistDraft;
//!
//! let draft = ArtistDraft {
//!     name: Some("Jack Kirby".to_string()),
//!     date_of_birth: Some("1917-08-28".to_string()),
//!     biography: Some("King of comics".to_string()),
//!     is_currently_employed: None,
//! };
//!
//! let artist = draft.validate().unwrap();
//! assert!(artist.is_currently_employed);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod storage;
pub mod types;
mod validate;

// Re-export commonly used types
pub use error::{CatalogError, Result};
pub use storage::CatalogStore;

pub use types::{
    Artist, ArtistDraft, ArtistId, Issue, IssueDraft, IssueId, NewArtist, NewIssue, NewSeries,
    Series, SeriesDraft, SeriesId,
};
