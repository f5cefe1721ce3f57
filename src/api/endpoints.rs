// URL builders for the papi-client endpoints. Usernames arrive already encoded by
// `Identity::normalize`; nothing else is escaped here.

use super::request::{Identity, Platform};
use crate::error::AppError;

const TITLE_PATH: &str = "title/mw/platform";

/// Full-match lookups are not tied to a player, so one fixed platform segment is used.
const FULL_MATCH_PLATFORM: Platform = Platform::Battle;
const FULL_MATCH_LANGUAGE: &str = "en";

pub fn last_games_url(base: &str, identity: &Identity) -> String {
    matches_url(base, identity, "0")
}

pub fn last_games_by_date_url(base: &str, identity: &Identity, end: &str) -> Result<String, AppError> {
    if end.is_empty() || !end.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::InvalidArgument(format!(
            "end date must be a millisecond timestamp, got '{}'",
            end
        )));
    }
    Ok(matches_url(base, identity, end))
}

pub fn lifetime_and_weekly_url(base: &str, identity: &Identity) -> String {
    format!(
        "{}/stats/cod/v1/{}/{}/gamer/{}/profile/type/wz",
        base,
        TITLE_PATH,
        identity.platform(),
        identity.username()
    )
}

pub fn full_match_url(base: &str, game_id: &str) -> Result<String, AppError> {
    if game_id.is_empty() || !game_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::InvalidArgument(format!(
            "game id must be numeric, got '{}'",
            game_id
        )));
    }
    Ok(format!(
        "{}/crm/cod/v2/{}/{}/fullMatch/wz/{}/{}",
        base, TITLE_PATH, FULL_MATCH_PLATFORM, game_id, FULL_MATCH_LANGUAGE
    ))
}

fn matches_url(base: &str, identity: &Identity, end: &str) -> String {
    format!(
        "{}/crm/cod/v2/{}/{}/gamer/{}/matches/wz/start/0/end/{}/details",
        base,
        TITLE_PATH,
        identity.platform(),
        identity.username(),
        end
    )
}
