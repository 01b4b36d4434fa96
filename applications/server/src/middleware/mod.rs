/// Request extractors shared by the API routes
pub mod resolve;

pub use resolve::{PathResource, Resolved};
