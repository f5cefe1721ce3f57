use crate::error::AppError;
use std::env;
use std::fmt;

pub const ATKN_VAR: &str = "ATKN";
pub const SSO_COOKIE_VAR: &str = "ACT_SSO_COOKIE";
pub const SSO_COOKIE_EXPIRY_VAR: &str = "ACT_SSO_COOKIE_EXPIRY";

pub const DEFAULT_API_BASE: &str = "https://my.callofduty.com/api/papi-client";
pub const DEFAULT_USER_AGENT: &str = "warzone_stats/0.1.0";

/// Session tokens copied from a logged-in my.callofduty.com browser session.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub sso_cookie: String,
    pub sso_cookie_expiry: i64,
    pub atkn: String,
}

impl Credentials {
    /// All three tokens must be present; the expiry must be an integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| AppError::MissingCredentials(format!("{} is not set", name)))
        };

        let atkn = required(ATKN_VAR)?;
        let sso_cookie = required(SSO_COOKIE_VAR)?;
        let sso_cookie_expiry = required(SSO_COOKIE_EXPIRY_VAR)?
            .parse::<i64>()
            .map_err(|_| {
                AppError::MissingCredentials(format!("{} must be an integer", SSO_COOKIE_EXPIRY_VAR))
            })?;

        Ok(Credentials {
            sso_cookie,
            sso_cookie_expiry,
            atkn,
        })
    }

    pub fn cookie_header(&self) -> String {
        format!(
            "ACT_SSO_COOKIE={}; ACT_SSO_COOKIE_EXPIRY={}; atkn={};",
            self.sso_cookie, self.sso_cookie_expiry, self.atkn
        )
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("sso_cookie", &"***")
            .field("sso_cookie_expiry", &self.sso_cookie_expiry)
            .field("atkn", &"***")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub api_base: String,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = Credentials::from_lookup(&lookup)?;

        let api_base = lookup("WARZONE_API_BASE")
            .filter(|value| !value.is_empty())
            .map(|value| value.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let user_agent = lookup("WARZONE_USER_AGENT")
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        Ok(Config {
            credentials,
            api_base,
            user_agent,
        })
    }
}
