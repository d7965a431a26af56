use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike};
use regex::Regex;

/// Template behind `Display`; placeholders resolve through [`Game::field`].
const REPR_FORMAT: &str = "{local} vs. {visitor} on {local_date} on channel {channel}";

/// One televised game as announced on the schedule page. Equality and
/// hashing cover all four fields, which is what deduplication keys on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    pub local: String,
    pub visitor: String,
    pub datetime: NaiveDateTime,
    pub channel: String,
}

impl Game {
    pub fn new(local: String, visitor: String, datetime: NaiveDateTime, channel: String) -> Self {
        Game {
            local,
            visitor,
            datetime,
            channel,
        }
    }

    pub fn minute(&self) -> u32 {
        self.datetime.minute()
    }

    pub fn hour(&self) -> u32 {
        self.datetime.hour()
    }

    pub fn year(&self) -> i32 {
        self.datetime.year()
    }

    /// Full month name, e.g. "March".
    pub fn month(&self) -> String {
        self.datetime.format("%B").to_string()
    }

    pub fn daynumber(&self) -> u32 {
        self.datetime.day()
    }

    /// Full weekday name, e.g. "Saturday".
    pub fn day(&self) -> String {
        self.datetime.format("%A").to_string()
    }

    /// Long date form (weekday, month, day, time, year), as used in the
    /// printed listing.
    pub fn local_date(&self) -> String {
        self.datetime.format("%c").to_string()
    }

    /// Look up any field or derived projection by name, rendered as a
    /// string. Returns `None` for unknown names.
    pub fn field(&self, name: &str) -> Option<String> {
        match name {
            "local" => Some(self.local.clone()),
            "visitor" => Some(self.visitor.clone()),
            "datetime" => Some(self.datetime.to_string()),
            "channel" => Some(self.channel.clone()),
            "minute" => Some(self.minute().to_string()),
            "hour" => Some(self.hour().to_string()),
            "year" => Some(self.year().to_string()),
            "month" => Some(self.month()),
            "daynumber" => Some(self.daynumber().to_string()),
            "day" => Some(self.day()),
            "local_date" => Some(self.local_date()),
            _ => None,
        }
    }

    /// Render a template whose `{name}` placeholders are resolved through
    /// [`Game::field`]. Unknown placeholders are left as written.
    pub fn render(&self, template: &str) -> String {
        let placeholder = Regex::new(r"\{(\w+)\}").unwrap();
        placeholder
            .replace_all(template, |caps: &regex::Captures| {
                self.field(&caps[1]).unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(REPR_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn sample_game() -> Game {
        Game::new(
            "Boca".to_string(),
            "River".to_string(),
            NaiveDate::from_ymd_opt(2015, 3, 21)
                .unwrap()
                .and_hms_opt(20, 30, 0)
                .unwrap(),
            "TyC Sports".to_string(),
        )
    }

    #[test]
    fn renders_canonical_listing() {
        let game = sample_game();
        assert_eq!(
            game.to_string(),
            "Boca vs. River on Sat Mar 21 20:30:00 2015 on channel TyC Sports"
        );
    }

    #[test]
    fn derived_projections_follow_datetime() {
        let game = sample_game();
        assert_eq!(game.minute(), 30);
        assert_eq!(game.hour(), 20);
        assert_eq!(game.year(), 2015);
        assert_eq!(game.month(), "March");
        assert_eq!(game.daynumber(), 21);
        assert_eq!(game.day(), "Saturday");
    }

    #[test]
    fn field_lookup_covers_every_name() {
        let game = sample_game();
        assert_eq!(game.field("local").as_deref(), Some("Boca"));
        assert_eq!(game.field("visitor").as_deref(), Some("River"));
        assert_eq!(game.field("channel").as_deref(), Some("TyC Sports"));
        assert_eq!(game.field("hour").as_deref(), Some("20"));
        assert_eq!(game.field("minute").as_deref(), Some("30"));
        assert_eq!(game.field("year").as_deref(), Some("2015"));
        assert_eq!(game.field("month").as_deref(), Some("March"));
        assert_eq!(game.field("daynumber").as_deref(), Some("21"));
        assert_eq!(game.field("day").as_deref(), Some("Saturday"));
        assert_eq!(game.field("local_date"), Some(game.local_date()));
        assert_eq!(game.field("datetime"), Some(game.datetime.to_string()));
        assert_eq!(game.field("referee"), None);
    }

    #[test]
    fn render_keeps_unknown_placeholders() {
        let game = sample_game();
        assert_eq!(
            game.render("{local} at {hour}:{minute} ({venue})"),
            "Boca at 20:30 ({venue})"
        );
    }

    #[test]
    fn identical_games_dedup_in_a_set() {
        let a = sample_game();
        let b = sample_game();
        let mut c = sample_game();
        c.channel = "ESPN".to_string();

        assert_eq!(a, b);
        let set: HashSet<Game> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
