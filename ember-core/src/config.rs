//! Configuration loaded from the process environment (and `.env`).

use std::{env, str::FromStr, time::Duration};

use twilight_model::id::{
    Id,
    marker::{ApplicationMarker, GuildMarker},
};

use crate::error::ConfigError;
use crate::people::DEFAULT_FAKER_BASE_URL;

/// Smallest quantity `/ask` accepts.
pub const MIN_QUANTITY: u8 = 1;
/// Largest quantity `/ask` accepts.
pub const MAX_QUANTITY: u8 = 50;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ITEMS_PER_PAGE: usize = 3;
/// Keeps a rendered page inside Discord's 2000 character content limit.
pub const MAX_ITEMS_PER_PAGE: usize = 10;
const DEFAULT_QUANTITY: u8 = 10;

/// Tunables read by command handlers at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub items_per_page: usize,
    pub default_quantity: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            default_quantity: DEFAULT_QUANTITY,
        }
    }
}

/// Full process configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub discord_token: String,
    pub application_id: Option<Id<ApplicationMarker>>,
    pub guild_id: Option<Id<GuildMarker>>,
    pub port: u16,
    pub faker_base_url: String,
    /// Idle time after which sessions and challenges are evicted. `None` keeps them forever.
    pub session_ttl: Option<Duration>,
    pub settings: Settings,
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = lookup("DISCORD_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;

        let application_id = parse_optional::<u64>(&lookup, "APPLICATION_ID")?
            .map(|raw| non_zero_id(raw, "APPLICATION_ID"))
            .transpose()?;
        let guild_id = parse_optional::<u64>(&lookup, "GUILD_ID")?
            .map(|raw| non_zero_id(raw, "GUILD_ID"))
            .transpose()?;

        let port = parse_optional(&lookup, "PORT")?.unwrap_or(DEFAULT_PORT);
        let faker_base_url =
            lookup("FAKER_BASE_URL").unwrap_or_else(|| DEFAULT_FAKER_BASE_URL.to_owned());

        let items_per_page =
            parse_optional(&lookup, "ITEMS_PER_PAGE")?.unwrap_or(DEFAULT_ITEMS_PER_PAGE);
        if !(1..=MAX_ITEMS_PER_PAGE).contains(&items_per_page) {
            return Err(ConfigError::Invalid {
                name: "ITEMS_PER_PAGE",
                reason: format!("must be between 1 and {MAX_ITEMS_PER_PAGE}"),
            });
        }

        let default_quantity =
            parse_optional(&lookup, "DEFAULT_QUANTITY")?.unwrap_or(DEFAULT_QUANTITY);
        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&default_quantity) {
            return Err(ConfigError::Invalid {
                name: "DEFAULT_QUANTITY",
                reason: format!("must be between {MIN_QUANTITY} and {MAX_QUANTITY}"),
            });
        }

        let session_ttl = parse_optional::<u64>(&lookup, "SESSION_TTL_SECS")?
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Ok(Self {
            discord_token,
            application_id,
            guild_id,
            port,
            faker_base_url,
            session_ttl,
            settings: Settings {
                items_per_page,
                default_quantity,
            },
        })
    }

    /// Application id, required by the command maintenance binaries.
    pub fn require_application_id(&self) -> Result<Id<ApplicationMarker>, ConfigError> {
        self.application_id
            .ok_or(ConfigError::Missing("APPLICATION_ID"))
    }
}

fn parse_optional<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|source| ConfigError::Invalid {
                name,
                reason: source.to_string(),
            }),
        _ => Ok(None),
    }
}

fn non_zero_id<M>(raw: u64, name: &'static str) -> Result<Id<M>, ConfigError> {
    Id::new_checked(raw).ok_or(ConfigError::Invalid {
        name,
        reason: "ids must be non-zero".to_owned(),
    })
}
