mod app;
mod error;
mod extractor;
mod logger;
mod models;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use url::Url;

const DEFAULT_URL: &str = "http://www.lnb.com.ar";

#[derive(Parser)]
#[command(name = "lnb-tv-games")]
#[command(about = "List televised Liga Nacional de Básquet games")]
struct Cli {
    /// Only show games on this date (DD/MM/YYYY)
    #[arg(short, long, value_parser = parse_date)]
    date: Option<NaiveDate>,

    /// Identify as USER_AGENT to the HTTP server
    #[arg(short = 'U', long)]
    user_agent: Option<String>,

    /// Schedule page to scrape
    #[arg(long, default_value = DEFAULT_URL)]
    url: Url,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%d/%m/%Y")
        .map_err(|e| format!("expected DD/MM/YYYY, got {s:?}: {e}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    app::run(cli.url, cli.date, cli.user_agent.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn parses_cli_date() {
        let date = parse_date("21/03/2015").unwrap();
        assert_eq!((date.day(), date.month(), date.year()), (21, 3, 2015));
    }

    #[test]
    fn rejects_iso_date() {
        assert!(parse_date("2015-03-21").is_err());
    }
}
