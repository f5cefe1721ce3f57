use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

/// Separator between an Activision/Battle.net name and its numeric tag.
const TAG_SEPARATOR: char = '#';
const ENCODED_TAG_SEPARATOR: &str = "%23";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Psn,
    Xbl,
    Battle,
    Uno,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Psn => "psn",
            Platform::Xbl => "xbl",
            Platform::Battle => "battle",
            Platform::Uno => "uno",
        }
    }

    /// Battle.net and Activision ids are `name#1234`; console gamertags never carry a tag.
    fn uses_tagged_names(&self) -> bool {
        matches!(self, Platform::Battle | Platform::Uno)
    }
}

impl FromStr for Platform {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "psn" => Ok(Platform::Psn),
            "xbl" => Ok(Platform::Xbl),
            "battle" => Ok(Platform::Battle),
            "uno" => Ok(Platform::Uno),
            other => Err(AppError::InvalidPlatform(other.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated player address, with the username already encoded for URL substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    platform: Platform,
    username: String,
}

impl Identity {
    pub fn normalize(username: &str, platform: &str) -> Result<Self, AppError> {
        if username.is_empty() || platform.is_empty() {
            return Err(AppError::InvalidArgument(
                "username and platform are required".to_string(),
            ));
        }

        let platform: Platform = platform.parse()?;
        let segments: Vec<&str> = username.split(TAG_SEPARATOR).collect();

        let username = if platform.uses_tagged_names() {
            match segments.as_slice() {
                [name, tag] => format!("{}{}{}", name, ENCODED_TAG_SEPARATOR, tag),
                _ => return Err(AppError::InvalidUsername(username.to_string())),
            }
        } else {
            match segments.as_slice() {
                [name] => name.to_string(),
                _ => return Err(AppError::InvalidUsername(username.to_string())),
            }
        };

        Ok(Identity { platform, username })
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The encoded username, e.g. `name%231234`.
    pub fn username(&self) -> &str {
        &self.username
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsRequest {
    LastGames { username: String, platform: String },
    LifetimeAndWeekly { username: String, platform: String },
    SpecificGame { game_id: String },
}

impl StatsRequest {
    pub fn last_games(username: impl Into<String>, platform: impl Into<String>) -> Self {
        StatsRequest::LastGames {
            username: username.into(),
            platform: platform.into(),
        }
    }

    pub fn lifetime_and_weekly(username: impl Into<String>, platform: impl Into<String>) -> Self {
        StatsRequest::LifetimeAndWeekly {
            username: username.into(),
            platform: platform.into(),
        }
    }

    pub fn specific_game(game_id: impl Into<String>) -> Self {
        StatsRequest::SpecificGame {
            game_id: game_id.into(),
        }
    }

    pub fn username(&self) -> &str {
        match self {
            StatsRequest::LastGames { username, .. }
            | StatsRequest::LifetimeAndWeekly { username, .. } => username,
            StatsRequest::SpecificGame { .. } => "",
        }
    }

    pub fn platform(&self) -> &str {
        match self {
            StatsRequest::LastGames { platform, .. }
            | StatsRequest::LifetimeAndWeekly { platform, .. } => platform,
            StatsRequest::SpecificGame { .. } => "",
        }
    }

    pub fn game_id(&self) -> &str {
        match self {
            StatsRequest::SpecificGame { game_id } => game_id,
            _ => "",
        }
    }

    pub fn target(&self) -> &'static str {
        match self {
            StatsRequest::LastGames { .. } => "LastGames",
            StatsRequest::LifetimeAndWeekly { .. } => "LifetimeAndWeekly",
            StatsRequest::SpecificGame { .. } => "SpecificGame",
        }
    }

    pub fn identity(&self) -> Result<Identity, AppError> {
        Identity::normalize(self.username(), self.platform())
    }

    /// Short label used in logs and error messages.
    pub fn label(&self) -> String {
        match self {
            StatsRequest::SpecificGame { game_id } => format!("game {}", game_id),
            _ => format!("{}/{}", self.platform(), self.username()),
        }
    }
}
