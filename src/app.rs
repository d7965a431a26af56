use anyhow::Result;
use chrono::NaiveDate;
use log::{debug, info};
use url::Url;

use crate::extractor::GamesPool;
use crate::logger::init_logger;

pub fn run(url: Url, date: Option<NaiveDate>, user_agent: Option<&str>) -> Result<()> {
    // 0) Initialize logger
    init_logger()?;
    debug!("Logger initialized");

    // 1) Build the HTTP client, honoring a custom User-Agent when given
    let mut builder = reqwest::blocking::Client::builder();
    if let Some(agent) = user_agent {
        debug!("Using custom User-Agent {:?}", agent);
        builder = builder.user_agent(agent);
    }
    let client = builder.build()?;

    // 2) Fetch and parse the schedule page
    let pool = GamesPool::new(&client, url, true)?;
    info!(
        "Snapshot of {} ready with {} games",
        pool.url(),
        pool.games().len()
    );

    // 3) Print, restricted to the requested date if one was given
    for game in pool.games() {
        if let Some(date) = date {
            if game.datetime.date() != date {
                continue;
            }
        }
        println!("{game}");
    }

    Ok(())
}
