use serde::{Deserialize, Serialize};

use super::request::StatsRequest;

/// Status value the upstream puts in the body when it refuses a lookup.
pub const STATUS_ERROR: &str = "error";

/// Common surface of the three decoded response shapes.
pub trait StatsResponse: serde::de::DeserializeOwned {
    fn status(&self) -> &str;

    /// Copy the caller's identity onto the result, whatever the body echoed.
    fn stamp(&mut self, _request: &StatsRequest) {}
}

// Counters are all floats upstream and some are omitted per mode, so every stats
// struct defaults missing fields to zero. A wrong type is still a decode error.

// Recent matches: /crm/cod/v2/.../matches/wz/start/0/end/{end}/details
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LastGamesResponse {
    pub status: String,
    pub data: LastGamesData,
    pub username: String,
    pub platform: String,
}

impl StatsResponse for LastGamesResponse {
    fn status(&self) -> &str {
        &self.status
    }

    fn stamp(&mut self, request: &StatsRequest) {
        self.username = request.username().to_string();
        self.platform = request.platform().to_string();
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LastGamesData {
    pub summary: DataSummary,
    pub matches: Vec<Match>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSummary {
    pub all: SummaryStats,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SummaryStats {
    pub kills: f64,
    pub kd_ratio: f64,
    pub wall_bangs: f64,
    pub avg_life_time: f64,
    pub gulag_deaths: f64,
    pub score: f64,
    pub time_played: f64,
    pub headshot_percentage: f64,
    pub headshots: f64,
    pub executions: f64,
    pub match_played: f64,
    pub assists: f64,
    pub gulag_kills: f64,
    pub kills_per_game: f64,
    pub score_per_minute: f64,
    pub distance_traveled: f64,
    pub damage_done: f64,
    pub deaths: f64,
    pub damage_taken: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Match {
    pub utc_start_seconds: f64,
    pub mode: String,
    pub gametype: String,
    #[serde(rename = "matchID")]
    pub match_id: String,
    pub player_stats: MatchPlayerStats,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchPlayerStats {
    pub kills: f64,
    pub wall_bangs: f64,
    pub score: f64,
    pub headshots: f64,
    pub assists: f64,
    pub score_per_minute: f64,
    pub distance_traveled: f64,
    pub deaths: f64,
    pub kd_ratio: f64,
    pub gulag_deaths: f64,
    pub time_played: f64,
    pub executions: f64,
    pub gulag_kills: f64,
    pub percent_time_moving: f64,
    pub damage_done: f64,
    pub damage_taken: f64,
}

// Profile: /stats/cod/v1/.../profile/type/wz
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LifetimeAndWeeklyResponse {
    pub status: String,
    pub data: LifetimeAndWeeklyData,
}

impl StatsResponse for LifetimeAndWeeklyResponse {
    fn status(&self) -> &str {
        &self.status
    }

    fn stamp(&mut self, request: &StatsRequest) {
        self.data.username = request.username().to_string();
        self.data.platform = request.platform().to_string();
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LifetimeAndWeeklyData {
    pub platform: String,
    pub username: String,
    pub lifetime: LifetimeStats,
    pub weekly: WeeklyStats,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LifetimeStats {
    pub mode: LifetimeModes,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LifetimeModes {
    #[serde(rename = "br")]
    pub battle_royale: LifetimeBrMode,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LifetimeBrMode {
    pub properties: LifetimeBrProperties,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LifetimeBrProperties {
    pub wins: f64,
    pub kills: f64,
    pub kd_ratio: f64,
    pub downs: f64,
    pub top_twenty_five: f64,
    pub top_ten: f64,
    pub revives: f64,
    pub top_five: f64,
    pub score: f64,
    pub time_played: f64,
    pub games_played: f64,
    pub score_per_minute: f64,
    pub deaths: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklyStats {
    pub mode: WeeklyModes,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklyModes {
    #[serde(rename = "br_all")]
    pub battle_royale_all: WeeklyBrAllMode,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklyBrAllMode {
    pub properties: WeeklyBrAllProperties,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeeklyBrAllProperties {
    pub kills: f64,
    pub kd_ratio: f64,
    pub wall_bangs: f64,
    pub avg_life_time: f64,
    pub gulag_deaths: f64,
    pub score: f64,
    pub time_played: f64,
    pub headshot_percentage: f64,
    pub executions: f64,
    pub matches_played: f64,
    pub assists: f64,
    pub gulag_kills: f64,
    pub kills_per_game: f64,
    pub score_per_minute: f64,
    pub distance_traveled: f64,
    pub damage_done: f64,
    pub deaths: f64,
    pub damage_taken: f64,
}

// Full match: /crm/cod/v2/.../fullMatch/wz/{matchId}/{lang}
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecificGameResponse {
    pub status: String,
    pub data: AllPlayersData,
}

impl StatsResponse for SpecificGameResponse {
    fn status(&self) -> &str {
        &self.status
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AllPlayersData {
    pub all_players: Vec<GamePlayer>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GamePlayer {
    pub utc_start_seconds: f64,
    #[serde(rename = "matchID")]
    pub match_id: String,
    pub player_stats: GamePlayerStats,
    pub player: PlayerDetails,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GamePlayerStats {
    pub kills: f64,
    pub wall_bangs: f64,
    pub score: f64,
    pub headshots: f64,
    pub assists: f64,
    pub score_per_minute: f64,
    pub distance_traveled: f64,
    pub deaths: f64,
    pub kd_ratio: f64,
    pub gulag_deaths: f64,
    pub time_played: f64,
    pub executions: f64,
    pub gulag_kills: f64,
    pub percent_time_moving: f64,
    pub team_placement: f64,
    pub damage_done: f64,
    pub damage_taken: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerDetails {
    pub team: String,
    pub username: String,
    pub uno: String,
}

/// Body the upstream sends alongside `"status": "error"`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[allow(dead_code)]
pub struct UpstreamError {
    pub status: String,
    pub data: UpstreamErrorData,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[allow(dead_code)]
pub struct UpstreamErrorData {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

/// One decoded response of whichever shape the request asked for.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum StatsResult {
    LastGames(LastGamesResponse),
    LifetimeAndWeekly(LifetimeAndWeeklyResponse),
    SpecificGame(SpecificGameResponse),
}
