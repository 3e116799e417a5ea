//! Engine configuration: seed, bot policy, automation cap, human seat.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::ai::{registry, AiConfig, MAX_NOISE};
use crate::error::AppError;

pub const DEFAULT_AUTOMATION_LIMIT: usize = 2000;

/// Which seat, if any, is driven by the caller instead of a bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HumanSeat {
    /// The last named player.
    #[default]
    Last,
    /// Every seat is a bot.
    None,
    Seat(u8),
}

impl HumanSeat {
    /// Resolve to a seat index for a table of `player_count`.
    pub fn resolve(self, player_count: usize) -> Option<u8> {
        match self {
            HumanSeat::Last => player_count.checked_sub(1).map(|s| s as u8),
            HumanSeat::None => None,
            HumanSeat::Seat(s) => Some(s),
        }
    }
}

impl FromStr for HumanSeat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last" => Ok(HumanSeat::Last),
            "none" => Ok(HumanSeat::None),
            other => other
                .parse::<u8>()
                .map(HumanSeat::Seat)
                .map_err(|_| AppError::config(format!("invalid human seat '{s}'"))),
        }
    }
}

impl fmt::Display for HumanSeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HumanSeat::Last => f.write_str("last"),
            HumanSeat::None => f.write_str("none"),
            HumanSeat::Seat(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Game seed; drawn from OS entropy when absent.
    pub seed: Option<u64>,
    /// Registry name of the bot policy.
    pub bot_ai: String,
    /// Passed to the policy as `AiConfig`.
    pub bot_config: Option<JsonValue>,
    /// Cap on steps per `advance_automatic_turns` call.
    pub automation_limit: usize,
    pub human_seat: HumanSeat,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            bot_ai: "Heuristic".to_string(),
            bot_config: None,
            automation_limit: DEFAULT_AUTOMATION_LIMIT,
            human_seat: HumanSeat::Last,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by `PROGNOSTICO_*` environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup("PROGNOSTICO_SEED") {
            config.seed = Some(parse_var("PROGNOSTICO_SEED", &raw)?);
        }
        if let Some(raw) = lookup("PROGNOSTICO_BOT_AI") {
            config.bot_ai = raw.trim().to_string();
        }
        if let Some(raw) = lookup("PROGNOSTICO_AUTOMATION_LIMIT") {
            config.automation_limit = parse_var("PROGNOSTICO_AUTOMATION_LIMIT", &raw)?;
        }
        if let Some(raw) = lookup("PROGNOSTICO_HUMAN_SEAT") {
            config.human_seat = raw.parse()?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AppError::config(format!("invalid engine config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if registry::by_name(&self.bot_ai).is_none() {
            return Err(AppError::config(format!("unknown bot AI '{}'", self.bot_ai)));
        }
        if self.automation_limit == 0 {
            return Err(AppError::config("automation_limit must be positive"));
        }
        if let Some(raw) = &self.bot_config {
            let ai: AiConfig = serde_json::from_value(raw.clone())
                .map_err(|e| AppError::config(format!("invalid bot_config: {e}")))?;
            if let Some(noise) = ai.noise() {
                if !(0.0..=MAX_NOISE).contains(&noise) {
                    return Err(AppError::config(format!(
                        "bot_config noise must be within 0..={MAX_NOISE}, got {noise}"
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_human_seat(mut self, human_seat: HumanSeat) -> Self {
        self.human_seat = human_seat;
        self
    }
}

fn parse_var<T: FromStr>(key: &str, raw: &str) -> Result<T, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::config(format!("{key} has invalid value '{raw}'")))
}
