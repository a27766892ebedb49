//! Records returned by the external movie catalog.
//!
//! These are read-only payloads keyed by IMDb identifier. The catalog
//! reports absent fields as the literal string `"N/A"`, so accessors
//! normalize that into `Option` instead of leaking the sentinel into
//! the UI.

use std::fmt;

use serde::Deserialize;

/// Media type filter accepted by the catalog's search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Movie,
    Series,
    Episode,
}

impl MediaType {
    /// Value sent as the `type` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Series => "series",
            MediaType::Episode => "episode",
        }
    }

    /// Next filter in the cycle: movie → series → episode.
    pub fn next(self) -> Option<MediaType> {
        match self {
            MediaType::Movie => Some(MediaType::Series),
            MediaType::Series => Some(MediaType::Episode),
            MediaType::Episode => None,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a search result.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieSummary {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type", default)]
    pub media_type: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

impl MovieSummary {
    /// Poster reference, unless the catalog reported none.
    pub fn poster_url(&self) -> Option<&str> {
        non_sentinel(&self.poster)
    }
}

/// A rating from one review source (e.g. "Rotten Tomatoes": "94%").
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourceRating {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// Full record for a single title.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieDetail {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Rated", default)]
    pub rated: String,
    #[serde(rename = "Released", default)]
    pub released: String,
    #[serde(rename = "Runtime", default)]
    pub runtime: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
    #[serde(rename = "Director", default)]
    pub director: String,
    #[serde(rename = "Actors", default)]
    pub actors: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
    #[serde(rename = "Language", default)]
    pub language: String,
    #[serde(rename = "Country", default)]
    pub country: String,
    #[serde(rename = "Awards", default)]
    pub awards: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "Ratings", default)]
    pub ratings: Vec<SourceRating>,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
    #[serde(rename = "imdbVotes", default)]
    pub imdb_votes: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type", default)]
    pub media_type: String,
}

impl MovieDetail {
    pub fn rating(&self) -> Option<&str> {
        non_sentinel(&self.imdb_rating)
    }

    pub fn votes(&self) -> Option<&str> {
        non_sentinel(&self.imdb_votes)
    }

    pub fn poster_url(&self) -> Option<&str> {
        non_sentinel(&self.poster)
    }

    /// Genre field split into individual entries; empty when unreported.
    pub fn genres(&self) -> Vec<&str> {
        match non_sentinel(&self.genre) {
            Some(genre) => genre.split(", ").collect(),
            None => Vec::new(),
        }
    }
}

fn non_sentinel(value: &str) -> Option<&str> {
    if value.is_empty() || value == "N/A" {
        None
    } else {
        Some(value)
    }
}
