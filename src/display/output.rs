use crate::analysis::mode_stats::ModeStats;
use crate::api::models::{LastGamesResponse, LifetimeAndWeeklyResponse, Match, SpecificGameResponse};
use chrono::{DateTime, Utc};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "#")]
    number: String,
    started: String,
    mode: String,
    kills: String,
    deaths: String,
    kd: String,
    damage: String,
    #[tabled(rename = "match id")]
    match_id: String,
}

#[derive(Tabled)]
struct StatRow {
    stat: String,
    value: String,
}

#[derive(Tabled)]
struct ModeRow {
    mode: String,
    games: String,
    kills: String,
    kd: String,
    #[tabled(rename = "kills/game")]
    kills_per_game: String,
    damage: String,
}

#[derive(Tabled)]
struct PlayerRow {
    team: String,
    player: String,
    placement: String,
    kills: String,
    deaths: String,
    damage: String,
}

pub fn display_error(error: &str, status_code: Option<u16>) {
    match status_code {
        Some(code) => eprintln!("{} [{}] {}", "❌ Error:".red().bold(), code, error),
        None => eprintln!("{} {}", "❌ Error:".red().bold(), error),
    }
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

fn format_start(utc_start_seconds: f64) -> String {
    DateTime::<Utc>::from_timestamp(utc_start_seconds as i64, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn header(title: String, width: usize) {
    println!("\n{}", title.bold().cyan());
    println!("{}\n", "=".repeat(width).cyan());
}

fn stat_table(rows: Vec<(&str, f64)>) -> Table {
    let rows: Vec<StatRow> = rows
        .into_iter()
        .map(|(stat, value)| StatRow {
            stat: stat.to_string(),
            value: format!("{:.2}", value),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table
}

pub fn display_matches(matches: &[Match]) {
    if matches.is_empty() {
        println!("{}", "No matches returned".yellow());
        return;
    }

    let rows: Vec<MatchRow> = matches
        .iter()
        .enumerate()
        .map(|(idx, m)| MatchRow {
            number: format!("{}", idx + 1),
            started: format_start(m.utc_start_seconds),
            mode: m.mode.clone(),
            kills: format!("{}", m.player_stats.kills),
            deaths: format!("{}", m.player_stats.deaths),
            kd: format!("{:.2}", m.player_stats.kd_ratio),
            damage: format!("{}", m.player_stats.damage_done),
            match_id: m.match_id.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_last_games(resp: &LastGamesResponse) {
    let all = &resp.data.summary.all;
    header(
        format!("🎮 Recent matches for {} ({})", resp.username, resp.platform),
        80,
    );

    println!(
        "{} {} kills / {} deaths ({:.2} K/D) over {} matches\n",
        "📈 Summary:".bold(),
        all.kills.to_string().green(),
        all.deaths.to_string().red(),
        all.kd_ratio,
        all.match_played
    );

    display_matches(&resp.data.matches);
}

pub fn display_lifetime_and_weekly(resp: &LifetimeAndWeeklyResponse) {
    let lifetime = &resp.data.lifetime.mode.battle_royale.properties;
    let weekly = &resp.data.weekly.mode.battle_royale_all.properties;

    header(
        format!("🏆 Lifetime battle royale for {} ({})", resp.data.username, resp.data.platform),
        60,
    );
    println!(
        "{}\n",
        stat_table(vec![
            ("games played", lifetime.games_played),
            ("wins", lifetime.wins),
            ("top 5", lifetime.top_five),
            ("top 10", lifetime.top_ten),
            ("kills", lifetime.kills),
            ("deaths", lifetime.deaths),
            ("k/d", lifetime.kd_ratio),
            ("score/min", lifetime.score_per_minute),
        ])
    );

    header("📅 This week (all BR modes)".to_string(), 60);
    println!(
        "{}\n",
        stat_table(vec![
            ("matches played", weekly.matches_played),
            ("kills", weekly.kills),
            ("deaths", weekly.deaths),
            ("k/d", weekly.kd_ratio),
            ("kills/game", weekly.kills_per_game),
            ("damage done", weekly.damage_done),
            ("gulag kills", weekly.gulag_kills),
            ("headshot %", weekly.headshot_percentage),
        ])
    );
}

pub fn display_game(resp: &SpecificGameResponse) {
    let players = &resp.data.all_players;
    let started = players
        .first()
        .map(|p| format_start(p.utc_start_seconds))
        .unwrap_or_else(|| "-".to_string());
    header(format!("🗺️  Match started {} ({} players)", started, players.len()), 80);

    let mut sorted: Vec<_> = players.iter().collect();
    sorted.sort_by(|a, b| {
        a.player_stats
            .team_placement
            .total_cmp(&b.player_stats.team_placement)
            .then_with(|| b.player_stats.kills.total_cmp(&a.player_stats.kills))
    });

    let rows: Vec<PlayerRow> = sorted
        .into_iter()
        .map(|p| PlayerRow {
            team: p.player.team.clone(),
            player: p.player.username.clone(),
            placement: format!("{}", p.player_stats.team_placement),
            kills: format!("{}", p.player_stats.kills),
            deaths: format!("{}", p.player_stats.deaths),
            damage: format!("{}", p.player_stats.damage_done),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_mode_breakdown(stats: &[ModeStats]) {
    if stats.is_empty() {
        return;
    }

    header("📊 BREAKDOWN BY MODE".to_string(), 60);

    let rows: Vec<ModeRow> = stats
        .iter()
        .map(|s| ModeRow {
            mode: s.mode.clone(),
            games: format!("{}", s.games),
            kills: format!("{}", s.kills),
            kd: format!("{:.2}", s.kd_ratio()),
            kills_per_game: format!("{:.2}", s.kills_per_game()),
            damage: format!("{}", s.damage_done),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}
