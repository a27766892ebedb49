mod client;
mod types;

pub use client::{CatalogClient, CatalogError, SearchQuery};
pub use types::{MediaType, MovieDetail, MovieSummary, SourceRating};
