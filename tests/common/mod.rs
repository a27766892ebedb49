//! Shared fixture builders for integration tests.

#![allow(dead_code)]

use reelscout::catalog::{MovieDetail, MovieSummary};

pub fn summary(id: &str, title: &str, year: &str) -> MovieSummary {
    MovieSummary {
        title: title.to_string(),
        year: year.to_string(),
        imdb_id: id.to_string(),
        media_type: "movie".to_string(),
        poster: "N/A".to_string(),
    }
}

pub fn detail(id: &str, title: &str) -> MovieDetail {
    MovieDetail {
        title: title.to_string(),
        year: "2005".to_string(),
        rated: "PG-13".to_string(),
        released: "N/A".to_string(),
        runtime: "120 min".to_string(),
        genre: "Action".to_string(),
        director: "N/A".to_string(),
        actors: "N/A".to_string(),
        plot: "N/A".to_string(),
        language: "English".to_string(),
        country: "N/A".to_string(),
        awards: "N/A".to_string(),
        poster: "N/A".to_string(),
        ratings: Vec::new(),
        imdb_rating: "7.0".to_string(),
        imdb_votes: "1,000".to_string(),
        imdb_id: id.to_string(),
        media_type: "movie".to_string(),
    }
}
