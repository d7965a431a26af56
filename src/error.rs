//! Error types for the LNB televised-games scraper

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected markup structure: {0}")]
    MarkupStructure(String),

    #[error("heading {0:?} does not look like a \"Team A vs Team B\" matchup")]
    TeamNameFormat(String),

    #[error("schedule line {0:?} does not match the \"date time hs channel\" shape")]
    ScheduleFormat(String),
}
