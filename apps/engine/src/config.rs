//! Engine configuration read from the environment.
//!
//! | Variable                | Default | Meaning                                   |
//! |-------------------------|---------|-------------------------------------------|
//! | `ENGINE_AI_THINK_MS`    | 0       | pause before each automated seat acts     |
//! | `ENGINE_COMMAND_BUFFER` | 64      | per-table command channel capacity        |
//! | `ENGINE_EVENT_BUFFER`   | 4096    | per-table broadcast channel capacity      |
//! | `ENGINE_MAX_REDEALS`    | 1000    | deal attempts per round before giving up  |
//!
//! A round of play is roughly a hundred events. A subscriber that falls more
//! than `ENGINE_EVENT_BUFFER` events behind loses the oldest ones
//! (`RecvError::Lagged`) and should resync from a snapshot.

use std::env;
use std::time::Duration;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub ai_think_time: Duration,
    pub command_buffer: usize,
    pub event_buffer: usize,
    pub max_redeals: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ai_think_time: Duration::ZERO,
            command_buffer: 64,
            event_buffer: 4096,
            max_redeals: 1000,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let think_ms: u64 = parse_var(&lookup, "ENGINE_AI_THINK_MS", 0)?;
        let command_buffer: usize =
            parse_var(&lookup, "ENGINE_COMMAND_BUFFER", defaults.command_buffer)?;
        let event_buffer: usize = parse_var(&lookup, "ENGINE_EVENT_BUFFER", defaults.event_buffer)?;
        let max_redeals: u32 = parse_var(&lookup, "ENGINE_MAX_REDEALS", defaults.max_redeals)?;

        if command_buffer == 0 || event_buffer == 0 {
            return Err(AppError::config("channel buffers must be at least 1"));
        }
        if max_redeals == 0 {
            return Err(AppError::config("ENGINE_MAX_REDEALS must be at least 1"));
        }

        Ok(Self {
            ai_think_time: Duration::from_millis(think_ms),
            command_buffer,
            event_buffer,
            max_redeals,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| AppError::config(format!("{key}={raw:?}: {e}"))),
    }
}
