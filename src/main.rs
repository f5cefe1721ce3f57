mod analysis;
mod api;
mod config;
mod display;
mod error;

use analysis::match_history::{fetch_cycles, PAGE_SIZE};
use analysis::mode_stats::ModeStatsTracker;
use anyhow::Context;
use api::client::WarzoneClient;
use api::models::StatsResult;
use api::request::StatsRequest;
use clap::{Parser, Subcommand};
use config::Config;
use display::output::{
    display_error, display_game, display_info, display_last_games, display_lifetime_and_weekly,
    display_mode_breakdown, display_success,
};
use error::AppError;
use indicatif::ProgressBar;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Upper bound on pages walked by `history`; each page is one request.
const MAX_CYCLES: u64 = 50;

#[derive(Parser, Debug)]
#[command(name = "Warzone Stats")]
#[command(about = "Look up Call of Duty: Warzone player and match stats", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Print the decoded response as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Most recent 20 matches with a summary
    LastGames {
        /// Username; Battle.net and Activision ids include the tag, e.g. name#1234
        username: String,
        /// One of: psn, xbl, battle, uno
        platform: String,
    },

    /// Lifetime and weekly battle royale stats
    Lifetime {
        username: String,
        platform: String,
    },

    /// Match history stitched together from several pages of 20
    History {
        username: String,
        platform: String,

        /// Number of pages to fetch, 1 to 50 (default: 1)
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..=MAX_CYCLES))]
        cycles: u64,
    },

    /// Every player's stats for one match
    Game {
        /// Numeric match id as shown in the match history
        game_id: String,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warzone_stats=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        let status_code = e.downcast_ref::<AppError>().map(AppError::status_code);
        display_error(&format!("{:#}", e), status_code);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Credentials are checked before anything touches the network
    let config = Config::from_env().context("loading session tokens")?;
    let client = WarzoneClient::new(config);

    match args.command {
        Command::LastGames { username, platform } => {
            let request = StatsRequest::last_games(username, platform);
            fetch_and_show(&client, &request, args.json)
        }
        Command::Lifetime { username, platform } => {
            let request = StatsRequest::lifetime_and_weekly(username, platform);
            fetch_and_show(&client, &request, args.json)
        }
        Command::Game { game_id } => {
            let request = StatsRequest::specific_game(game_id);
            fetch_and_show(&client, &request, args.json)
        }
        Command::History {
            username,
            platform,
            cycles,
        } => {
            let request = StatsRequest::last_games(username, platform);
            let cycles = usize::try_from(cycles).context("cycles out of range")?;
            show_history(&client, &request, cycles, args.json)
        }
    }
}

fn fetch_and_show(client: &WarzoneClient, request: &StatsRequest, json: bool) -> anyhow::Result<()> {
    if !json {
        display_info(&format!("Fetching {} stats for {}", request.target(), request.label()));
    }

    let result = client.fetch(request)?;

    if json {
        return print_json(&result);
    }

    match &result {
        StatsResult::LastGames(resp) => display_last_games(resp),
        StatsResult::LifetimeAndWeekly(resp) => display_lifetime_and_weekly(resp),
        StatsResult::SpecificGame(resp) => display_game(resp),
    }
    Ok(())
}

fn show_history(
    client: &WarzoneClient,
    request: &StatsRequest,
    cycles: usize,
    json: bool,
) -> anyhow::Result<()> {
    let pb = if json {
        ProgressBar::hidden()
    } else {
        display_info(&format!(
            "Fetching up to {} matches for {}",
            max_matches(cycles),
            request.label()
        ));
        ProgressBar::new(cycles as u64)
    };

    let history = fetch_cycles(client, request, cycles, |_, _| pb.inc(1));
    pb.finish_and_clear();
    let history = history?;

    if json {
        return print_json(&history);
    }

    display_success(&format!("Fetched {} matches", history.data.matches.len()));
    display_last_games(&history);

    let tracker = ModeStatsTracker::from_matches(&history.data.matches);
    display_mode_breakdown(&tracker.get_stats());
    Ok(())
}

fn max_matches(cycles: usize) -> usize {
    cycles.saturating_mul(PAGE_SIZE)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("serializing response")?;
    println!("{}", out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("warzone_stats").chain(argv.iter().copied()))
    }

    #[test]
    fn history_cycles_default_to_one() {
        let args = parse(&["history", "gamer", "psn"]).unwrap();
        assert!(matches!(args.command, Command::History { cycles: 1, .. }));
    }

    #[test]
    fn history_cycles_are_bounded() {
        assert!(parse(&["history", "gamer", "psn", "--cycles", "0"]).is_err());
        assert!(parse(&["history", "gamer", "psn", "--cycles", "51"]).is_err());
        assert!(parse(&["history", "gamer", "psn", "--cycles", "18446744073709551615"]).is_err());

        let args = parse(&["history", "gamer", "psn", "--cycles", "50"]).unwrap();
        assert!(matches!(args.command, Command::History { cycles: 50, .. }));
    }

    #[test]
    fn max_matches_does_not_overflow() {
        assert_eq!(max_matches(3), 60);
        assert_eq!(max_matches(usize::MAX), usize::MAX);
    }

    #[test]
    fn json_flag_is_global() {
        let args = parse(&["game", "123", "--json"]).unwrap();
        assert!(args.json);
    }
}
