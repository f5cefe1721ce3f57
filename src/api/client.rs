use crate::config::Config;
use crate::error::AppError;
use tracing::debug;

use super::decoder::decode;
use super::endpoints;
use super::models::*;
use super::request::StatsRequest;
use super::transport::{Transport, UreqTransport};

pub struct WarzoneClient<T: Transport = UreqTransport> {
    config: Config,
    transport: T,
}

impl WarzoneClient<UreqTransport> {
    pub fn new(config: Config) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }
}

impl<T: Transport> WarzoneClient<T> {
    pub fn with_transport(config: Config, transport: T) -> Self {
        WarzoneClient { config, transport }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("user-agent", self.config.user_agent.clone()),
            ("Cookie", self.config.credentials.cookie_header()),
        ]
    }

    fn execute<R: StatsResponse>(&self, url: &str, request: &StatsRequest) -> Result<R, AppError> {
        debug!(kind = request.target(), "requesting {}", request.label());
        let raw = self.transport.get(url, &self.headers())?;
        decode(raw, request)
    }

    /// Up to 20 most recent matches plus a summary over them.
    pub fn get_last_games(&self, request: &StatsRequest) -> Result<LastGamesResponse, AppError> {
        let identity = request.identity()?;
        let url = endpoints::last_games_url(&self.config.api_base, &identity);
        self.execute(&url, request)
    }

    /// Up to 20 matches that started before `end`, a millisecond timestamp.
    pub fn get_last_games_before(
        &self,
        request: &StatsRequest,
        end: &str,
    ) -> Result<LastGamesResponse, AppError> {
        let identity = request.identity()?;
        let url = endpoints::last_games_by_date_url(&self.config.api_base, &identity, end)?;
        self.execute(&url, request)
    }

    pub fn get_lifetime_and_weekly(
        &self,
        request: &StatsRequest,
    ) -> Result<LifetimeAndWeeklyResponse, AppError> {
        let identity = request.identity()?;
        let url = endpoints::lifetime_and_weekly_url(&self.config.api_base, &identity);
        self.execute(&url, request)
    }

    pub fn get_game(&self, request: &StatsRequest) -> Result<SpecificGameResponse, AppError> {
        let url = endpoints::full_match_url(&self.config.api_base, request.game_id())?;
        self.execute(&url, request)
    }

    pub fn fetch(&self, request: &StatsRequest) -> Result<StatsResult, AppError> {
        match request {
            StatsRequest::LastGames { .. } => self.get_last_games(request).map(StatsResult::LastGames),
            StatsRequest::LifetimeAndWeekly { .. } => self
                .get_lifetime_and_weekly(request)
                .map(StatsResult::LifetimeAndWeekly),
            StatsRequest::SpecificGame { .. } => {
                self.get_game(request).map(StatsResult::SpecificGame)
            }
        }
    }
}
