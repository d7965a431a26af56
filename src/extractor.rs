use std::collections::HashSet;

use chrono::NaiveDateTime;
use log::{debug, error, info};
use regex::Regex;
use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::{Result, ScrapeError};
use crate::models::Game;

/// Class name marking the "partidos televisados" section on the schedule page.
const MARKER_CLASS: &str = "televisados";

/// Single-use snapshot of the televised games announced on one schedule
/// page. Fetches and parses eagerly on construction; afterwards `games`
/// holds no duplicates and is sorted ascending by datetime.
#[derive(Debug)]
pub struct GamesPool {
    url: Url,
    games: Vec<Game>,
}

impl GamesPool {
    /// Fetch `url` with a blocking GET and extract its televised games.
    /// The caller owns the client so it can set a custom User-Agent.
    pub fn new(client: &Client, url: Url, normalize_names: bool) -> Result<Self> {
        debug!("Fetching schedule page {}", url);
        let body = client
            .get(url.clone())
            .send()
            .and_then(|res| res.error_for_status())
            .and_then(|res| res.text())
            .map_err(|e| {
                error!("Failed to fetch {}: {}", url, e);
                ScrapeError::Fetch {
                    url: url.to_string(),
                    source: e,
                }
            })?;
        Self::from_html(url, &body, normalize_names)
    }

    /// Same pipeline without the network, for embedders with a cached page.
    pub fn from_html(url: Url, html: &str, normalize_names: bool) -> Result<Self> {
        let document = Html::parse_document(html);
        let games = find_games(&document, normalize_names)?;
        info!("Extracted {} televised games from {}", games.len(), url);
        Ok(GamesPool { url, games })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The extracted games, deduplicated and ordered by datetime.
    pub fn games(&self) -> &[Game] {
        &self.games
    }
}

fn find_games(document: &Html, normalize_names: bool) -> Result<Vec<Game>> {
    let div_selector = Selector::parse("div").unwrap();
    let heading_selector = Selector::parse("h4").unwrap();
    let paragraph_selector = Selector::parse("p").unwrap();

    let mut seen: HashSet<Game> = HashSet::new();

    for div in document.select(&div_selector) {
        let classes: Vec<&str> = div.value().classes().collect();
        if classes.len() < 2 || !classes.contains(&MARKER_CLASS) {
            continue;
        }
        debug!("Found televised section with classes {:?}", classes);

        // The listings live two layout divs down from the marker div.
        let inner = div
            .select(&div_selector)
            .next()
            .and_then(|d| d.select(&div_selector).next())
            .ok_or_else(|| {
                ScrapeError::MarkupStructure(
                    "televised section is missing its nested layout divs".to_string(),
                )
            })?;

        let headings: Vec<String> = inner.select(&heading_selector).map(element_text).collect();
        let paragraphs: Vec<String> = inner
            .select(&paragraph_selector)
            .map(element_text)
            .collect();

        // The i-th heading belongs to the i-th paragraph; the page gives
        // no other link between them, so a count mismatch is fatal.
        if headings.len() != paragraphs.len() {
            return Err(ScrapeError::MarkupStructure(format!(
                "{} matchup headings but {} schedule lines",
                headings.len(),
                paragraphs.len()
            )));
        }

        for (heading, paragraph) in headings.iter().zip(&paragraphs) {
            let (mut local, mut visitor) = split_matchup(heading)?;
            if normalize_names {
                local = normalize_team_name(&local);
                visitor = normalize_team_name(&visitor);
            }
            let (datetime, channel) = split_schedule(paragraph)?;
            seen.insert(Game::new(local, visitor, datetime, channel));
        }
    }

    let mut games: Vec<Game> = seen.into_iter().collect();
    games.sort_by_key(|game| game.datetime);
    Ok(games)
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Split a "Team A vs Team B" heading into (local, visitor).
fn split_matchup(heading: &str) -> Result<(String, String)> {
    let matchup_regex = Regex::new(r"(?i)^(.+)\s+vs\.?\s+(.+)$").unwrap();
    let caps = matchup_regex
        .captures(heading)
        .ok_or_else(|| ScrapeError::TeamNameFormat(heading.to_string()))?;
    Ok((caps[1].to_string(), caps[2].to_string()))
}

/// Split a "21/03/2015 20:30 hs TyC Sports" line into the parsed datetime
/// and the channel. "hs" is sometimes followed by stray "tv"/punctuation
/// before the channel name.
fn split_schedule(paragraph: &str) -> Result<(NaiveDateTime, String)> {
    let schedule_regex =
        Regex::new(r"(?i)^((?:\d{1,2}/){2}\d{2,4} \d{1,2}:\d{1,2})\s+hs[tv.\s]*\s(.+)$").unwrap();
    let caps = schedule_regex
        .captures(paragraph)
        .ok_or_else(|| ScrapeError::ScheduleFormat(paragraph.to_string()))?;
    let datetime = NaiveDateTime::parse_from_str(&caps[1], "%d/%m/%Y %H:%M")
        .map_err(|_| ScrapeError::ScheduleFormat(paragraph.to_string()))?;
    Ok((datetime, caps[2].to_string()))
}

/// Capitalize each word of a team name, leaving tokens wrapped in
/// parentheses (club abbreviations like "(SF)") untouched.
fn normalize_team_name(team: &str) -> String {
    let words: Vec<&str> = team.split_whitespace().collect();
    if words.len() > 1 {
        words
            .iter()
            .map(|word| {
                if is_parenthesized(word) {
                    (*word).to_string()
                } else {
                    capitalize(word)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        capitalize(team.trim())
    }
}

fn is_parenthesized(word: &str) -> bool {
    word.len() > 2 && word.starts_with('(') && word.ends_with(')')
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
